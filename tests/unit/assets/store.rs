use std::io::Cursor;
use std::sync::Mutex;

use super::*;
use crate::assets::catalog::RoleIcon;
use crate::assets::loader::MemoryLoader;
use crate::banner::config::BannerConfig;
use crate::banner::layout::compose;

const ICON: &[u8] =
    br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#fff"/></svg>"##;

fn portrait() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

struct Recording {
    inner: MemoryLoader,
    seen: Mutex<Vec<AssetKey>>,
}

impl AssetLoader for Recording {
    async fn load(&self, key: &AssetKey) -> LaneResult<Vec<u8>> {
        self.seen.lock().unwrap().push(key.clone());
        self.inner.load(key).await
    }
}

fn champ(name: &str) -> AssetKey {
    AssetKey::Champion(name.to_string())
}

#[tokio::test]
async fn failed_gate_skips_its_children() {
    let loader = Recording {
        inner: MemoryLoader::new()
            .with(champ("Jinx"), portrait())
            .with(AssetKey::RoleIcon(RoleIcon::Bottom), ICON.to_vec()),
        seen: Mutex::new(Vec::new()),
    };
    let layout = compose(&BannerConfig::default());
    let assets = PreparedAssets::load(&layout, &loader).await;

    assert!(assets.is_loaded(&champ("Jinx")));
    assert!(matches!(
        assets.get(&AssetKey::RoleIcon(RoleIcon::Bottom)),
        Some(PreparedAsset::Svg(_))
    ));
    assert!(!assets.is_loaded(&champ("Thresh")));

    let seen = loader.seen.lock().unwrap().clone();
    // Thresh failed, so the UTILITY badge under it was never requested through that group.
    assert_eq!(seen[0], champ("Thresh"));
    assert_eq!(seen[1], champ("Jinx"));
    assert_eq!(seen[2], AssetKey::RoleIcon(RoleIcon::Bottom));
    assert!(!seen.contains(&AssetKey::RoleIcon(RoleIcon::Utility)));
}

#[tokio::test]
async fn each_key_is_requested_once() {
    let loader = Recording {
        inner: MemoryLoader::new(),
        seen: Mutex::new(Vec::new()),
    };
    let layout = compose(&BannerConfig::default());
    let assets = PreparedAssets::load(&layout, &loader).await;

    let seen = loader.seen.lock().unwrap().clone();
    let bold = seen
        .iter()
        .filter(|k| **k == AssetKey::Font(FontFace::Bold))
        .count();
    assert_eq!(bold, 1);
    assert!(assets.failed().any(|k| *k == AssetKey::Font(FontFace::Bold)));
}

#[tokio::test]
async fn undecodable_bytes_count_as_missing() {
    let loader = MemoryLoader::new().with(champ("Jinx"), b"<html>not found</html>".to_vec());
    let layout = compose(&BannerConfig::default());
    let assets = PreparedAssets::load(&layout, &loader).await;
    assert!(!assets.is_loaded(&champ("Jinx")));
}

#[test]
fn text_engine_rejects_bad_size_and_font() {
    let mut engine = TextLayoutEngine::new();
    let brush = TextBrushRgba8::default();
    assert!(
        engine
            .layout_line("x", FontFace::Bold, b"", 0.0, brush)
            .is_err()
    );
    assert!(
        engine
            .layout_line("x", FontFace::Bold, b"not a font", 12.0, brush)
            .is_err()
    );
}
