//! Riot platform access: routing, transport, pacing and the typed endpoints.

pub mod api;
pub mod canned;
pub mod dto;
pub mod league;
pub mod pacing;
pub mod region;
pub mod transport;
