//! Match enrichment: positional role inference and per-match aggregation.

pub mod aggregator;
pub mod record;
pub mod resolve;
pub mod roles;
