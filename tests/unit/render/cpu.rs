use super::*;
use crate::assets::store::PreparedImage;
use crate::banner::config::BannerConfig;
use crate::banner::layout::compose;

fn solid(r: u8, g: u8, b: u8) -> PreparedAsset {
    PreparedAsset::Raster(PreparedImage {
        width: 4,
        height: 4,
        rgba8_premul: Arc::new([r, g, b, 255].repeat(16)),
    })
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

fn render(assets: &PreparedAssets) -> FrameRGBA {
    let layout = compose(&BannerConfig::default());
    CpuBackend::new(RenderSettings::default())
        .render_layout(&layout, assets)
        .unwrap()
}

#[test]
fn output_is_double_density() {
    let frame = render(&PreparedAssets::default());
    assert_eq!((frame.width, frame.height), (1400, 340));
    assert_eq!(frame.data.len(), 1400 * 340 * 4);
    assert!(frame.premultiplied);
}

#[test]
fn background_accent_and_gradient() {
    let frame = render(&PreparedAssets::default());
    assert_eq!(px(&frame, 4, 100), [0x53, 0x83, 0xe8, 255]);

    let left = px(&frame, 20, 5);
    let right = px(&frame, 1395, 5);
    assert_eq!(left[3], 255);
    assert!(left[0] > right[0], "red fades toward the right edge");
    assert!(right[2] >= 0x88);
}

#[test]
fn loaded_portrait_is_drawn_and_missing_one_is_not() {
    let mut assets = PreparedAssets::default();
    assets.insert(AssetKey::Champion("Jinx".into()), solid(10, 200, 30));

    let with = render(&assets);
    assert_eq!(px(&with, 115, 169), [10, 200, 30, 255]);

    let without = render(&PreparedAssets::default());
    assert_ne!(px(&without, 115, 169), [10, 200, 30, 255]);
    // No backdrop either: the whole cluster is gated on the portrait.
    assert_ne!(px(&without, 115, 169), [0x1a, 0x1a, 0x1a, 255]);
}

#[test]
fn portrait_is_clipped_to_its_circle() {
    let mut assets = PreparedAssets::default();
    assets.insert(AssetKey::Champion("Jinx".into()), solid(10, 200, 30));
    let frame = render(&assets);
    // Top-left corner of the 75×75 box lies outside the circle.
    assert_ne!(px(&frame, 42, 96), [10, 200, 30, 255]);
}

#[test]
fn rendering_is_repeatable() {
    let mut assets = PreparedAssets::default();
    assets.insert(AssetKey::Champion("Thresh".into()), solid(90, 90, 90));
    assert_eq!(render(&assets), render(&assets));
}
