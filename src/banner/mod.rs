//! Match banner: editable config, declarative layout and the render entry points.

pub mod config;
pub mod layout;

use crate::assets::loader::AssetLoader;
use crate::assets::store::PreparedAssets;
use crate::encode::png::encode_png;
use crate::foundation::error::LaneResult;
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};

use self::config::BannerConfig;

/// Compose, load assets for, and rasterize `config` with the given backend.
///
/// Missing assets never fail the render; only backend errors do.
pub async fn render_frame<L: AssetLoader>(
    config: &BannerConfig,
    loader: &L,
    backend: &mut dyn RenderBackend,
) -> LaneResult<FrameRGBA> {
    let layout = layout::compose(config);
    let assets = PreparedAssets::load(&layout, loader).await;
    backend.render_layout(&layout, &assets)
}

/// Render `config` to PNG bytes (1400×340) on the CPU backend.
#[tracing::instrument(skip_all, fields(champion = %config.champion, victory = config.victory))]
pub async fn render_banner<L: AssetLoader>(
    config: &BannerConfig,
    loader: &L,
) -> LaneResult<Vec<u8>> {
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default());
    let frame = render_frame(config, loader, backend.as_mut()).await?;
    let png = encode_png(&frame)?;
    tracing::info!(bytes = png.len(), "banner rendered");
    Ok(png)
}
