//! Declarative banner layout.
//!
//! [`compose`] turns a [`BannerConfig`] into an ordered list of [`DrawOp`]s in logical units
//! (700×170). Nothing here touches pixels or I/O; a [`crate::render::backend::RenderBackend`]
//! interprets the list. Elements that depend on an asset are wrapped in [`DrawOp::Group`] so a
//! failed load removes exactly what it should.

use crate::assets::catalog::{AssetKey, FontFace, RoleIcon};
use crate::banner::config::BannerConfig;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};
use crate::riot::league::Tier;

/// Logical banner size.
pub const BANNER: Canvas = Canvas {
    width: 700,
    height: 170,
};

/// Output density factor.
pub const EXPORT_SCALE: u32 = 2;

const ACCENT_BAR_WIDTH: f64 = 8.0;
const EDGE_INSET: f64 = 20.0;

const MAIN_SIZE: f64 = 75.0;
const MAIN_TOP: f64 = 47.0;
const MAIN_BADGE: f64 = 24.0;

const DUO_SIZE: f64 = 55.0;
const DUO_TOP: f64 = 45.0;
const DUO_OFFSET: f64 = 45.0;
const DUO_BADGE: f64 = 20.0;
const DUO_BADGE_OVERHANG: f64 = 5.0;

const BADGE_ICON_INSET: f64 = 2.0;

const RANK_ICON: f64 = 38.0;
const RANK_GAP: f64 = 10.0;
const RANK_OFFSET: f64 = 15.0;
const RANK_LABEL_GAP: f64 = 8.0;
const RANK_LABEL_BASELINE: f64 = 24.0;

mod palette {
    use crate::foundation::core::Rgba8Premul;

    pub const WIN_START: Rgba8Premul = Rgba8Premul::opaque(0x31, 0x2e, 0x81);
    pub const WIN_END: Rgba8Premul = Rgba8Premul::opaque(0x1e, 0x3a, 0x8a);
    pub const WIN_ACCENT: Rgba8Premul = Rgba8Premul::opaque(0x53, 0x83, 0xe8);
    pub const LOSS_START: Rgba8Premul = Rgba8Premul::opaque(0x7f, 0x1d, 0x1d);
    pub const LOSS_END: Rgba8Premul = Rgba8Premul::opaque(0x88, 0x13, 0x37);
    pub const LOSS_ACCENT: Rgba8Premul = Rgba8Premul::opaque(0xe8, 0x40, 0x57);

    pub const GOLD: Rgba8Premul = Rgba8Premul::opaque(0xc8, 0xaa, 0x6e);
    pub const ENEMY: Rgba8Premul = Rgba8Premul::opaque(0xdc, 0x26, 0x26);
    pub const DUO_MINE: Rgba8Premul = Rgba8Premul::opaque(0xa7, 0x8b, 0xfa);
    pub const DUO_THEIRS: Rgba8Premul = Rgba8Premul::opaque(0xef, 0x44, 0x44);

    pub const MAIN_BACKDROP: Rgba8Premul = Rgba8Premul::opaque(0x1a, 0x1a, 0x1a);
    pub const DUO_BACKDROP: Rgba8Premul = Rgba8Premul::from_straight_rgba(0, 0, 0, 153);
    pub const MAIN_BADGE_FILL: Rgba8Premul = Rgba8Premul::opaque(0x11, 0x11, 0x11);
    pub const DUO_BADGE_FILL: Rgba8Premul = Rgba8Premul::opaque(0x1e, 0x1e, 0x1e);
    pub const DUO_BADGE_STROKE: Rgba8Premul = Rgba8Premul::opaque(0x55, 0x55, 0x55);

    pub const WHITE: Rgba8Premul = Rgba8Premul::opaque(0xff, 0xff, 0xff);
    pub const DEATHS: Rgba8Premul = Rgba8Premul::opaque(0xff, 0x58, 0x59);
    pub const DIM: Rgba8Premul = Rgba8Premul::opaque(0x66, 0x66, 0x66);
    pub const KDA: Rgba8Premul = Rgba8Premul::opaque(0x00, 0xd1, 0xb2);
    pub const CS: Rgba8Premul = Rgba8Premul::opaque(0xcc, 0xcc, 0xcc);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Solid(Rgba8Premul),
    /// Left-to-right two-stop gradient across the filled rect.
    HorizontalGradient {
        start: Rgba8Premul,
        end: Rgba8Premul,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clip {
    None,
    Circle { center: Point, radius: f64 },
}

/// One layout instruction, in logical units.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeRect {
        rect: Rect,
        width: f64,
        color: Rgba8Premul,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8Premul,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba8Premul,
    },
    /// Raster or SVG asset scaled into `rect`.
    Image {
        asset: AssetKey,
        rect: Rect,
        clip: Clip,
    },
    /// Single line of text; `anchor.y` is the baseline.
    Text {
        text: String,
        font: FontFace,
        size: f64,
        color: Rgba8Premul,
        anchor: Point,
        align: TextAlign,
    },
    /// Children are drawn only if `requires` loaded.
    Group {
        requires: AssetKey,
        ops: Vec<DrawOp>,
    },
}

impl DrawOp {
    /// Assets this op itself references, not counting group children.
    pub fn own_asset(&self) -> Option<AssetKey> {
        match self {
            DrawOp::Image { asset, .. } => Some(asset.clone()),
            DrawOp::Text { font, .. } => Some(AssetKey::Font(*font)),
            DrawOp::Group { requires, .. } => Some(requires.clone()),
            _ => None,
        }
    }
}

/// Complete banner description.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerLayout {
    /// Logical canvas.
    pub canvas: Canvas,
    /// Logical-to-pixel scale.
    pub scale: u32,
    pub ops: Vec<DrawOp>,
}

impl BannerLayout {
    /// Pixel size of the rendered output.
    pub fn output_canvas(&self) -> Canvas {
        self.canvas.scaled(self.scale)
    }

    /// Every referenced asset, first occurrence first, depth-first through groups.
    pub fn asset_keys(&self) -> Vec<AssetKey> {
        fn walk(ops: &[DrawOp], out: &mut Vec<AssetKey>) {
            for op in ops {
                if let Some(key) = op.own_asset()
                    && !out.contains(&key)
                {
                    out.push(key);
                }
                if let DrawOp::Group { ops, .. } = op {
                    walk(ops, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.ops, &mut out);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Mine,
    Theirs,
}

impl Side {
    fn is_left(self) -> bool {
        self == Side::Mine
    }
}

struct SidePlan<'a> {
    side: Side,
    champion: Option<&'a str>,
    role: Option<&'a str>,
    duo: Option<&'a str>,
    duo_role: Option<&'a str>,
    tier: Tier,
    division: &'a str,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn circle_of(rect: Rect) -> (Point, f64) {
    (rect.center(), rect.width() / 2.0)
}

fn role_badge(
    role: Option<&str>,
    rect: Rect,
    fill: Rgba8Premul,
    stroke: Rgba8Premul,
) -> Option<DrawOp> {
    let icon = RoleIcon::for_label(role?)?;
    Some(DrawOp::Group {
        requires: AssetKey::RoleIcon(icon),
        ops: vec![
            DrawOp::FillRect {
                rect,
                paint: Paint::Solid(fill),
            },
            DrawOp::StrokeRect {
                rect,
                width: 1.0,
                color: stroke,
            },
            DrawOp::Image {
                asset: AssetKey::RoleIcon(icon),
                rect: rect.inset(-BADGE_ICON_INSET),
                clip: Clip::None,
            },
        ],
    })
}

fn portrait(
    champion: &str,
    rect: Rect,
    backdrop_pad: f64,
    backdrop: Rgba8Premul,
    ring_width: f64,
    ring: Rgba8Premul,
) -> Vec<DrawOp> {
    let (center, radius) = circle_of(rect);
    vec![
        DrawOp::FillCircle {
            center,
            radius: radius + backdrop_pad,
            color: backdrop,
        },
        DrawOp::Image {
            asset: AssetKey::Champion(champion.to_string()),
            rect,
            clip: Clip::Circle { center, radius },
        },
        DrawOp::StrokeCircle {
            center,
            radius,
            width: ring_width,
            color: ring,
        },
    ]
}

fn rank_badge(tier: Tier, division: &str, x: f64, y: f64, side: Side) -> Option<DrawOp> {
    if !tier.is_ranked() {
        return None;
    }
    let (label_x, align) = if side.is_left() {
        (x + RANK_ICON + RANK_LABEL_GAP, TextAlign::Left)
    } else {
        (x - RANK_LABEL_GAP, TextAlign::Right)
    };
    Some(DrawOp::Group {
        requires: AssetKey::RankEmblem(tier),
        ops: vec![
            DrawOp::Image {
                asset: AssetKey::RankEmblem(tier),
                rect: Rect::new(x, y, x + RANK_ICON, y + RANK_ICON),
                clip: Clip::None,
            },
            DrawOp::Text {
                text: format!("{} {}", tier.as_str(), division),
                font: FontFace::Bold,
                size: 15.0,
                color: palette::GOLD,
                anchor: Point::new(label_x, y + RANK_LABEL_BASELINE),
                align,
            },
        ],
    })
}

/// Duo first, then the primary avatar on top of it, then the rank badge.
fn side_ops(plan: &SidePlan<'_>, start_x: f64) -> Vec<DrawOp> {
    let left = plan.side.is_left();
    let mut out = Vec::new();

    if let Some(duo) = non_empty(plan.duo) {
        let x = if left {
            start_x + DUO_OFFSET
        } else {
            start_x - DUO_OFFSET - DUO_SIZE
        };
        let rect = Rect::new(x, DUO_TOP, x + DUO_SIZE, DUO_TOP + DUO_SIZE);
        let ring = if left {
            palette::DUO_MINE
        } else {
            palette::DUO_THEIRS
        };
        let mut ops = portrait(duo, rect, 2.0, palette::DUO_BACKDROP, 2.0, ring);
        let bx = if left {
            rect.x1 - DUO_BADGE + DUO_BADGE_OVERHANG
        } else {
            rect.x0 - DUO_BADGE_OVERHANG
        };
        let by = rect.y1 - DUO_BADGE + DUO_BADGE_OVERHANG;
        ops.extend(role_badge(
            plan.duo_role,
            Rect::new(bx, by, bx + DUO_BADGE, by + DUO_BADGE),
            palette::DUO_BADGE_FILL,
            palette::DUO_BADGE_STROKE,
        ));
        out.push(DrawOp::Group {
            requires: AssetKey::Champion(duo.to_string()),
            ops,
        });
    }

    if let Some(champion) = non_empty(plan.champion) {
        let x = if left { start_x } else { start_x - MAIN_SIZE };
        let rect = Rect::new(x, MAIN_TOP, x + MAIN_SIZE, MAIN_TOP + MAIN_SIZE);
        let ring = if left { palette::GOLD } else { palette::ENEMY };
        let mut ops = portrait(champion, rect, 3.0, palette::MAIN_BACKDROP, 3.0, ring);
        let bx = if left { rect.x0 } else { rect.x1 - MAIN_BADGE };
        let by = rect.y1 - MAIN_BADGE;
        ops.extend(role_badge(
            plan.role,
            Rect::new(bx, by, bx + MAIN_BADGE, by + MAIN_BADGE),
            palette::MAIN_BADGE_FILL,
            ring,
        ));
        let rank_y = rect.y1 + RANK_GAP;
        let rank_x = if left {
            rect.x0 + RANK_GAP + RANK_OFFSET
        } else {
            rect.x1 - 35.0 - RANK_GAP - RANK_OFFSET
        };
        ops.extend(rank_badge(
            plan.tier,
            plan.division,
            rank_x,
            rank_y,
            plan.side,
        ));
        out.push(DrawOp::Group {
            requires: AssetKey::Champion(champion.to_string()),
            ops,
        });
    }

    out
}

fn text(
    text: impl Into<String>,
    font: FontFace,
    size: f64,
    color: Rgba8Premul,
    x: f64,
    y: f64,
    align: TextAlign,
) -> DrawOp {
    DrawOp::Text {
        text: text.into(),
        font,
        size,
        color,
        anchor: Point::new(x, y),
        align,
    }
}

fn center_ops(config: &BannerConfig) -> Vec<DrawOp> {
    let cx = f64::from(BANNER.width) / 2.0;
    let cy = f64::from(BANNER.height) / 2.0;
    let kda_y = cy - 8.0;
    let stats_y = cy + 22.0;
    let digits = |v: u32, x: f64, color| {
        text(v.to_string(), FontFace::Bold, 36.0, color, x, kda_y, TextAlign::Center)
    };
    let slash = |x: f64| {
        text("/", FontFace::Regular, 28.0, palette::DIM, x, kda_y, TextAlign::Center)
    };

    vec![
        digits(config.kills, cx - 70.0, palette::WHITE),
        slash(cx - 35.0),
        digits(config.deaths, cx, palette::DEATHS),
        slash(cx + 35.0),
        digits(config.assists, cx + 70.0, palette::WHITE),
        text(
            format!("{} KDA", config.kda_text()),
            FontFace::Bold,
            16.0,
            palette::KDA,
            cx - 10.0,
            stats_y,
            TextAlign::Right,
        ),
        text(
            "\u{2022}",
            FontFace::Bold,
            16.0,
            palette::DIM,
            cx,
            stats_y,
            TextAlign::Center,
        ),
        text(
            format!("{} CS/m", config.cs_min),
            FontFace::Bold,
            16.0,
            palette::CS,
            cx + 10.0,
            stats_y,
            TextAlign::Left,
        ),
    ]
}

/// Lay out the banner for `config`.
///
/// Deterministic: the same config always yields the same op list.
pub fn compose(config: &BannerConfig) -> BannerLayout {
    let width = f64::from(BANNER.width);
    let height = f64::from(BANNER.height);
    let (start, end, accent) = if config.victory {
        (palette::WIN_START, palette::WIN_END, palette::WIN_ACCENT)
    } else {
        (palette::LOSS_START, palette::LOSS_END, palette::LOSS_ACCENT)
    };

    let mut ops = vec![
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, width, height),
            paint: Paint::HorizontalGradient { start, end },
        },
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, ACCENT_BAR_WIDTH, height),
            paint: Paint::Solid(accent),
        },
    ];

    let mine = SidePlan {
        side: Side::Mine,
        champion: Some(config.champion.as_str()),
        role: Some(config.role.as_str()),
        duo: config.teammate.as_deref(),
        duo_role: config.teammate_role.as_deref(),
        tier: config.rank_tier,
        division: &config.rank_div,
    };
    let theirs = SidePlan {
        side: Side::Theirs,
        champion: config.opp_champion.as_deref(),
        role: config.opp_role.as_deref(),
        duo: config.opp_teammate.as_deref(),
        duo_role: config.opp_teammate_role.as_deref(),
        tier: config.opp_rank_tier,
        division: &config.opp_rank_div,
    };
    ops.extend(side_ops(&mine, EDGE_INSET));
    ops.extend(side_ops(&theirs, width - EDGE_INSET));
    ops.extend(center_ops(config));

    BannerLayout {
        canvas: BANNER,
        scale: EXPORT_SCALE,
        ops,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/banner/layout.rs"]
mod tests;
