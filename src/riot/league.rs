use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LaneError;
use crate::riot::dto::LeagueEntryDto;

/// Queue type whose entry is surfaced as a player's rank.
pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    #[default]
    Unranked,
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const RANKED: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Unranked => "UNRANKED",
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }

    pub fn is_ranked(self) -> bool {
        self != Tier::Unranked
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(Tier::Unranked.as_str()) {
            return Ok(Tier::Unranked);
        }
        Tier::RANKED
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LaneError::validation(format!("unknown tier '{s}'")))
    }
}

/// Competitive rank as `{tier, division}`.
///
/// `{UNRANKED, ""}` is the sentinel for "no ranked data", including every lookup failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankEntry {
    pub tier: Tier,
    /// `I`..`IV`, or empty for the sentinel.
    pub division: String,
}

impl RankEntry {
    pub fn unranked() -> Self {
        Self::default()
    }

    pub fn is_ranked(&self) -> bool {
        self.tier.is_ranked()
    }
}

/// Pick the solo-queue entry out of a player's league entries.
///
/// Other queues are ignored; a missing solo entry or an unrecognized tier yields the sentinel.
pub fn solo_queue_rank(entries: &[LeagueEntryDto]) -> RankEntry {
    let Some(solo) = entries.iter().find(|e| e.queue_type == SOLO_QUEUE) else {
        return RankEntry::unranked();
    };
    match solo.tier.parse::<Tier>() {
        Ok(tier) => RankEntry {
            tier,
            division: solo.rank.clone(),
        },
        Err(err) => {
            tracing::warn!(%err, "unrecognized solo queue tier");
            RankEntry::unranked()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/riot/league.rs"]
mod tests;
