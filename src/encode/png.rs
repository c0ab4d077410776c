use std::io::Cursor;

use crate::foundation::core::unpremul_channel;
use crate::foundation::error::{LaneError, LaneResult};
use crate::render::backend::FrameRGBA;

/// Encode `frame` as a straight-alpha RGBA8 PNG.
pub fn encode_png(frame: &FrameRGBA) -> LaneResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(LaneError::encode(format!(
            "frame is {}x{} but carries {} bytes",
            frame.width,
            frame.height,
            frame.data.len()
        )));
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| LaneError::encode("frame buffer does not fit its dimensions"))?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| LaneError::encode(format!("png: {e}")))?;
    Ok(out)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = unpremul_channel(*c, a);
        }
    }
}
