use crate::enrich::roles::Role;
use crate::riot::league::RankEntry;

/// A resolved lane partner or opponent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Companion {
    pub champion: String,
    pub role: Role,
}

/// One fully-resolved match, self-contained for banner rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Upstream `gameId`.
    pub id: i64,
    pub match_id: String,
    pub champion: String,
    /// `None` outside the standard five-role queues.
    pub role: Option<Role>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    /// One decimal place, e.g. `"5.0"`.
    pub cs_min: String,
    pub my_rank: RankEntry,
    pub opp_rank: RankEntry,
    pub duo: Option<Companion>,
    pub opponent: Option<Companion>,
    pub opp_duo: Option<Companion>,
}

/// CS per minute with one decimal; non-positive durations give `"0.0"`.
pub fn cs_per_minute(total_minions: u32, neutral_minions: u32, duration_secs: f64) -> String {
    let minutes = duration_secs / 60.0;
    if minutes.is_nan() || minutes <= 0.0 {
        return "0.0".to_string();
    }
    let cs = f64::from(total_minions) + f64::from(neutral_minions);
    format!("{:.1}", cs / minutes)
}
