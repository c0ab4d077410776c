//! lanecard turns a player's recent League of Legends games into lane comparison banners.
//!
//! Two halves share this crate:
//!
//! - [`enrich`]: resolve a Riot ID, fetch recent matches and reduce each one to a self-contained
//!   [`MatchRecord`] (own stats, lane partner, lane opponent and their partner, both ranks).
//! - [`banner`]: lay a [`BannerConfig`] out as a declarative list of draw ops and rasterize it on
//!   the CPU into a 1400×340 PNG.
#![forbid(unsafe_code)]

pub mod assets;
pub mod banner;
pub mod config;
pub mod encode;
pub mod enrich;
pub mod foundation;
pub mod render;
pub mod riot;

pub use crate::assets::catalog::{AssetCatalog, AssetKey};
pub use crate::assets::loader::{AssetLoader, BannerAssets, DirLoader, HttpLoader, MemoryLoader};
pub use crate::banner::config::BannerConfig;
pub use crate::banner::layout::{BannerLayout, DrawOp, compose};
pub use crate::banner::{render_banner, render_frame};
pub use crate::config::Settings;
pub use crate::enrich::aggregator::Enricher;
pub use crate::enrich::record::MatchRecord;
pub use crate::foundation::core::{Canvas, Rgba8Premul};
pub use crate::foundation::error::{LaneError, LaneResult};
pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::riot::api::RiotApi;
pub use crate::riot::league::{RankEntry, Tier};
pub use crate::riot::pacing::{LinearBackoff, Pacer, Unpaced};
pub use crate::riot::region::{PlayerIdentity, Region};
pub use crate::riot::transport::{HttpTransport, RiotTransport};
