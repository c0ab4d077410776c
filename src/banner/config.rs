use crate::enrich::record::{Companion, MatchRecord};
use crate::riot::league::Tier;

/// Text shown instead of a ratio when the player never died.
pub const PERFECT_KDA: &str = "Perfect";

/// `(kills + assists) / deaths` to one decimal, or [`PERFECT_KDA`] for zero deaths.
pub fn kda_ratio(kills: u32, deaths: u32, assists: u32) -> String {
    if deaths == 0 {
        return PERFECT_KDA.to_string();
    }
    let ratio = (f64::from(kills) + f64::from(assists)) / f64::from(deaths);
    format!("{ratio:.1}")
}

/// Everything the banner shows. Mirrors a [`MatchRecord`] but stays hand-editable.
///
/// Role labels are free text (`"MID"`, `"SUPPORT"` are accepted); empty or absent companions
/// are simply not drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerConfig {
    pub champion: String,
    pub role: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Explicit KDA text; derived from kills/deaths/assists when absent.
    pub kda: Option<String>,
    pub cs_min: String,
    pub rank_tier: Tier,
    pub rank_div: String,
    pub opp_rank_tier: Tier,
    pub opp_rank_div: String,
    pub teammate: Option<String>,
    pub teammate_role: Option<String>,
    pub opp_champion: Option<String>,
    pub opp_role: Option<String>,
    pub opp_teammate: Option<String>,
    pub opp_teammate_role: Option<String>,
    pub victory: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            champion: "Jinx".to_string(),
            role: "BOTTOM".to_string(),
            kills: 13,
            deaths: 8,
            assists: 7,
            kda: None,
            cs_min: "8.5".to_string(),
            rank_tier: Tier::Unranked,
            rank_div: "IV".to_string(),
            opp_rank_tier: Tier::Unranked,
            opp_rank_div: "I".to_string(),
            teammate: Some("Thresh".to_string()),
            teammate_role: Some("UTILITY".to_string()),
            opp_champion: Some("Caitlyn".to_string()),
            opp_role: Some("BOTTOM".to_string()),
            opp_teammate: Some("Lux".to_string()),
            opp_teammate_role: Some("UTILITY".to_string()),
            victory: true,
        }
    }
}

fn split(companion: &Option<Companion>) -> (Option<String>, Option<String>) {
    match companion {
        Some(c) => (Some(c.champion.clone()), Some(c.role.as_str().to_string())),
        None => (None, None),
    }
}

impl BannerConfig {
    /// Banner for one enriched match.
    pub fn from_record(record: &MatchRecord) -> Self {
        let (teammate, teammate_role) = split(&record.duo);
        let (opp_champion, opp_role) = split(&record.opponent);
        let (opp_teammate, opp_teammate_role) = split(&record.opp_duo);
        Self {
            champion: record.champion.clone(),
            role: record
                .role
                .map(|r| r.as_str().to_string())
                .unwrap_or_default(),
            kills: record.kills,
            deaths: record.deaths,
            assists: record.assists,
            kda: Some(kda_ratio(record.kills, record.deaths, record.assists)),
            cs_min: record.cs_min.clone(),
            rank_tier: record.my_rank.tier,
            rank_div: record.my_rank.division.clone(),
            opp_rank_tier: record.opp_rank.tier,
            opp_rank_div: record.opp_rank.division.clone(),
            teammate,
            teammate_role,
            opp_champion,
            opp_role,
            opp_teammate,
            opp_teammate_role,
            victory: record.win,
        }
    }

    /// KDA text as displayed.
    pub fn kda_text(&self) -> String {
        match &self.kda {
            Some(k) if !k.trim().is_empty() => k.clone(),
            _ => kda_ratio(self.kills, self.deaths, self.assists),
        }
    }

    pub fn from_json(text: &str) -> crate::foundation::error::LaneResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            crate::foundation::error::LaneError::validation(format!("invalid banner config: {e}"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/banner/config.rs"]
mod tests;
