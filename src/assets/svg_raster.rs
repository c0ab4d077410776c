use crate::foundation::error::{LaneError, LaneResult};

const MAX_DIM: u32 = 4_096;

/// Rasterize `tree` stretched to exactly `width`×`height` pixels, premultiplied RGBA8.
///
/// Icons are drawn into boxes whose pixel size is known up front, so the tree is rendered at
/// that size instead of being scaled afterwards.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> LaneResult<Vec<u8>> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(LaneError::render(format!(
            "svg raster size out of range: {width}x{height}"
        )));
    }
    let size = tree.size();
    if !size.width().is_finite() || size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(LaneError::render("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LaneError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}
