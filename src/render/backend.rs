use crate::assets::store::PreparedAssets;
use crate::banner::layout::BannerLayout;
use crate::foundation::error::LaneResult;

/// A rendered banner as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; [`crate::encode::png`] converts to straight alpha on the
/// way out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Interprets a [`BannerLayout`] into pixels.
///
/// Implementations draw group children only when the group's gate asset is present in `assets`,
/// and silently skip any op whose asset is missing.
pub trait RenderBackend {
    fn render_layout(
        &mut self,
        layout: &BannerLayout,
        assets: &PreparedAssets,
    ) -> LaneResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, the target is cleared to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

pub fn create_backend(kind: BackendKind, settings: &RenderSettings) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new(settings.clone())),
    }
}
