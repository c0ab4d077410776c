//! Banner assets: where they live, how they are fetched, and how they become drawable.

pub mod catalog;
pub mod decode;
pub mod loader;
pub mod store;
pub mod svg_raster;
