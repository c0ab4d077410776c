use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;

use crate::assets::catalog::{AssetKey, FontFace};
use crate::assets::store::{PreparedAsset, PreparedAssets, TextBrushRgba8, TextLayoutEngine};
use crate::assets::svg_raster::rasterize_svg_to_premul_rgba8;
use crate::banner::layout::{BannerLayout, Clip, DrawOp, Paint, TextAlign};
use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul};
use crate::foundation::error::{LaneError, LaneResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    start: [u8; 4],
    end: [u8; 4],
    w: u32,
    h: u32,
}

/// CPU backend powered by `vello_cpu`.
///
/// Layout coordinates are logical; the backend applies the layout's scale once, so every op is
/// rasterized at output density.
pub struct CpuBackend {
    settings: RenderSettings,
    text_engine: TextLayoutEngine,
    fonts: HashMap<FontFace, vello_cpu::peniko::FontData>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            text_engine: TextLayoutEngine::new(),
            fonts: HashMap::new(),
            gradient_cache: HashMap::new(),
        }
    }

    fn draw_ops(
        &mut self,
        ops: &[DrawOp],
        assets: &PreparedAssets,
        scale: f64,
        ctx: &mut vello_cpu::RenderContext,
    ) -> LaneResult<()> {
        let global = Affine::scale(scale);
        for op in ops {
            ctx.set_transform(affine_to_cpu(global));
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            match op {
                DrawOp::FillRect {
                    rect,
                    paint: Paint::Solid(c),
                } => {
                    ctx.set_paint(color_of(*c));
                    ctx.fill_rect(&rect_to_cpu(*rect));
                }
                DrawOp::FillRect {
                    rect,
                    paint: Paint::HorizontalGradient { start, end },
                } => {
                    let px = pixel_rect(*rect, scale);
                    let (w, h) = (px.width().max(1.0) as u32, px.height().max(1.0) as u32);
                    let img = self.gradient_paint(*start, *end, w, h)?;
                    ctx.set_transform(affine_to_cpu(Affine::translate((px.x0, px.y0))));
                    ctx.set_paint(img);
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w as f64, h as f64));
                }
                DrawOp::StrokeRect { rect, width, color } => {
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                    ctx.set_paint(color_of(*color));
                    ctx.stroke_rect(&rect_to_cpu(*rect));
                }
                DrawOp::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_paint(color_of(*color));
                    ctx.fill_path(&circle_path(*center, *radius));
                }
                DrawOp::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                } => {
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                    ctx.set_paint(color_of(*color));
                    ctx.stroke_path(&circle_path(*center, *radius));
                }
                DrawOp::Image { asset, rect, clip } => {
                    let Some(prepared) = assets.get(asset) else {
                        tracing::trace!(%asset, "image skipped");
                        continue;
                    };
                    if let Err(err) = self.draw_image(prepared, *rect, *clip, scale, ctx) {
                        tracing::warn!(%err, %asset, "image skipped");
                    }
                }
                DrawOp::Text {
                    text,
                    font,
                    size,
                    color,
                    anchor,
                    align,
                } => {
                    let Some(PreparedAsset::Font(bytes)) = assets.get(&AssetKey::Font(*font))
                    else {
                        tracing::trace!(text = %text, "text skipped: font missing");
                        continue;
                    };
                    if let Err(err) =
                        self.draw_text(text, *font, bytes, *size, *color, *anchor, *align, scale, ctx)
                    {
                        tracing::warn!(%err, text = %text, "text skipped");
                    }
                }
                DrawOp::Group { requires, ops } => {
                    if assets.is_loaded(requires) {
                        self.draw_ops(ops, assets, scale, ctx)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_image(
        &mut self,
        prepared: &PreparedAsset,
        rect: Rect,
        clip: Clip,
        scale: f64,
        ctx: &mut vello_cpu::RenderContext,
    ) -> LaneResult<()> {
        let px = pixel_rect(rect, scale);
        let (paint, w, h) = match prepared {
            PreparedAsset::Raster(img) => (
                rgba_premul_to_image(&img.rgba8_premul, img.width, img.height)?,
                img.width,
                img.height,
            ),
            PreparedAsset::Svg(svg) => {
                let (w, h) = (px.width().round().max(1.0) as u32, px.height().round().max(1.0) as u32);
                let rgba = rasterize_svg_to_premul_rgba8(&svg.tree, w, h)?;
                (rgba_premul_to_image(&rgba, w, h)?, w, h)
            }
            PreparedAsset::Font(_) => {
                return Err(LaneError::render("font asset used as image"));
            }
        };

        let clipped = match clip {
            Clip::Circle { center, radius } => {
                ctx.set_transform(affine_to_cpu(Affine::scale(scale)));
                ctx.push_clip_layer(&circle_path(center, radius));
                true
            }
            Clip::None => false,
        };

        let fit = Affine::translate((px.x0, px.y0))
            * Affine::scale_non_uniform(px.width() / w as f64, px.height() / h as f64);
        ctx.set_transform(affine_to_cpu(fit));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w as f64, h as f64));

        if clipped {
            ctx.pop_layer();
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        face: FontFace,
        font_bytes: &Arc<Vec<u8>>,
        size: f64,
        color: Rgba8Premul,
        anchor: Point,
        align: TextAlign,
        scale: f64,
        ctx: &mut vello_cpu::RenderContext,
    ) -> LaneResult<()> {
        let straight = color.to_straight();
        let brush = TextBrushRgba8 {
            r: straight[0],
            g: straight[1],
            b: straight[2],
            a: straight[3],
        };
        let layout = self
            .text_engine
            .layout_line(text, face, font_bytes, size as f32, brush)?;

        let width = f64::from(layout.width());
        let baseline = layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or(0.0);
        let left = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - width / 2.0,
            TextAlign::Right => anchor.x - width,
        };

        let font = self
            .fonts
            .entry(face)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font_bytes.as_ref().clone()),
                    0,
                )
            })
            .clone();

        let tr = Affine::scale(scale) * Affine::translate((left, anchor.y - baseline));
        ctx.set_transform(affine_to_cpu(tr));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn gradient_paint(
        &mut self,
        start: Rgba8Premul,
        end: Rgba8Premul,
        w: u32,
        h: u32,
    ) -> LaneResult<vello_cpu::Image> {
        let key = GradientKey {
            start: start.to_array(),
            end: end.to_array(),
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        let mut row = vec![0u8; (w as usize).saturating_mul(4)];
        let w1 = (w.max(1) - 1) as f32;
        for x in 0..w {
            let t = if w1 <= 0.0 { 0.0 } else { (x as f32) / w1 };
            let lerp = |a: u8, b: u8| -> u8 {
                let af = a as f32;
                let bf = b as f32;
                (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
            };
            let idx = (x as usize) * 4;
            row[idx..idx + 4].copy_from_slice(&[
                lerp(start.r, end.r),
                lerp(start.g, end.g),
                lerp(start.b, end.b),
                lerp(start.a, end.a),
            ]);
        }
        let bytes = row.repeat(h as usize);
        let img = rgba_premul_to_image(&bytes, w, h)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(ops = layout.ops.len()))]
    fn render_layout(
        &mut self,
        layout: &BannerLayout,
        assets: &PreparedAssets,
    ) -> LaneResult<FrameRGBA> {
        let out = layout.output_canvas();
        let w: u16 = out
            .width
            .try_into()
            .map_err(|_| LaneError::render("banner width exceeds u16"))?;
        let h: u16 = out
            .height
            .try_into()
            .map_err(|_| LaneError::render("banner height exceeds u16"))?;

        // Font bytes may differ between renders; faces are re-registered per layout.
        self.text_engine = TextLayoutEngine::new();
        self.fonts.clear();

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        if let Some(clear) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                clear[0], clear[1], clear[2], clear[3],
            ));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w as f64, h as f64));
        }
        self.draw_ops(&layout.ops, assets, f64::from(layout.scale), &mut ctx)?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: out.width,
            height: out.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn pixel_rect(rect: Rect, scale: f64) -> Rect {
    Rect::new(
        rect.x0 * scale,
        rect.y0 * scale,
        rect.x1 * scale,
        rect.y1 * scale,
    )
}

fn color_of(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_straight();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    bezpath_to_cpu(&kurbo::Circle::new(center, radius).to_path(0.1))
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> LaneResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LaneError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LaneError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(LaneError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> LaneResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
