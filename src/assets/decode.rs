use std::sync::Arc;

use anyhow::Context;

use crate::assets::catalog::AssetKey;
use crate::assets::store::{PreparedAsset, PreparedImage, PreparedSvg};
use crate::foundation::error::{LaneError, LaneResult};

/// Largest raster edge the CPU backend can turn into a pixmap.
pub const MAX_RASTER_DIM: u32 = u16::MAX as u32;

/// Turn loaded bytes into a drawable asset.
///
/// Fonts are kept as raw bytes. Other keys are sniffed: anything the `image` crate recognizes is
/// decoded as a raster, otherwise the bytes are parsed as SVG.
pub fn prepare(key: &AssetKey, bytes: &[u8]) -> LaneResult<PreparedAsset> {
    if bytes.is_empty() {
        return Err(LaneError::asset_load(format!("{key}: empty payload")));
    }
    if let AssetKey::Font(_) = key {
        return Ok(PreparedAsset::Font(Arc::new(bytes.to_vec())));
    }
    if image::guess_format(bytes).is_ok() {
        return decode_image(bytes).map(PreparedAsset::Raster);
    }
    parse_svg(bytes).map(PreparedAsset::Svg)
}

pub fn decode_image(bytes: &[u8]) -> LaneResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 || width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(LaneError::asset_load(format!(
            "raster size out of range: {width}x{height}"
        )));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

pub fn parse_svg(bytes: &[u8]) -> LaneResult<PreparedSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(PreparedSvg {
        tree: Arc::new(tree),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}
