use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::assets::catalog::{AssetKey, FontFace};
use crate::assets::decode;
use crate::assets::loader::AssetLoader;
use crate::banner::layout::{BannerLayout, DrawOp};
use crate::foundation::error::{LaneError, LaneResult};

#[derive(Clone, Debug)]
/// Prepared raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Debug)]
/// Parsed SVG, rasterized at draw time for the target box.
pub struct PreparedSvg {
    pub tree: Arc<usvg::Tree>,
}

#[derive(Clone, Debug)]
pub enum PreparedAsset {
    Raster(PreparedImage),
    Svg(PreparedSvg),
    /// Raw TrueType/OpenType bytes.
    Font(Arc<Vec<u8>>),
}

/// Assets resolved for one layout. Keys that failed to load or decode are simply absent.
#[derive(Clone, Debug, Default)]
pub struct PreparedAssets {
    ready: HashMap<AssetKey, PreparedAsset>,
    failed: HashSet<AssetKey>,
}

impl PreparedAssets {
    /// Load what `layout` needs, in layout order, one asset at a time.
    ///
    /// Children of a [`DrawOp::Group`] are only visited when the group's gate asset loaded, so
    /// nothing is fetched for elements that would never be drawn.
    #[tracing::instrument(skip_all, fields(ops = layout.ops.len()))]
    pub async fn load<L: AssetLoader>(layout: &BannerLayout, loader: &L) -> Self {
        let mut out = Self::default();
        let mut stack = vec![layout.ops.iter()];

        while let Some(level) = stack.last_mut() {
            let Some(op) = level.next() else {
                stack.pop();
                continue;
            };
            if let Some(key) = op.own_asset() {
                out.ensure(key, loader).await;
            }
            if let DrawOp::Group { requires, ops } = op {
                if out.is_loaded(requires) {
                    stack.push(ops.iter());
                } else {
                    tracing::debug!(gate = %requires, skipped = ops.len(), "group gate missing");
                }
            }
        }

        tracing::debug!(
            loaded = out.ready.len(),
            failed = out.failed.len(),
            "banner assets prepared"
        );
        out
    }

    async fn ensure<L: AssetLoader>(&mut self, key: AssetKey, loader: &L) {
        if self.ready.contains_key(&key) || self.failed.contains(&key) {
            return;
        }
        let prepared = match loader.load(&key).await {
            Ok(bytes) => decode::prepare(&key, &bytes),
            Err(err) => Err(err),
        };
        match prepared {
            Ok(asset) => {
                self.ready.insert(key, asset);
            }
            Err(err) => {
                tracing::warn!(asset = %key, %err, "asset unavailable; element omitted");
                self.failed.insert(key);
            }
        }
    }

    /// Insert an already prepared asset.
    pub fn insert(&mut self, key: AssetKey, asset: PreparedAsset) {
        self.failed.remove(&key);
        self.ready.insert(key, asset);
    }

    pub fn get(&self, key: &AssetKey) -> Option<&PreparedAsset> {
        self.ready.get(key)
    }

    pub fn is_loaded(&self, key: &AssetKey) -> bool {
        self.ready.contains_key(key)
    }

    pub fn failed(&self) -> impl Iterator<Item = &AssetKey> {
        self.failed.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Builds Parley layouts for the banner's two faces.
///
/// Each face is registered with the font collection once; later layouts reuse its family name.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    families: HashMap<FontFace, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    fn family(&mut self, face: FontFace, font_bytes: &[u8]) -> LaneResult<String> {
        if let Some(name) = self.families.get(&face) {
            return Ok(name.clone());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| LaneError::render(format!("no font family in {face:?} font bytes")))?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| LaneError::render("registered font family has no name"))?
            .to_string();
        self.families.insert(face, name.clone());
        Ok(name)
    }

    /// Shape a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        face: FontFace,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> LaneResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(LaneError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family_name = self.family(face, font_bytes)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
