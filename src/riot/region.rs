use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LaneError;

/// Player-facing server region.
///
/// Each region routes to a platform shard (`euw1`, `kr`, ...) for league lookups and to a
/// continental cluster for account and match lookups.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPERCASE")]
pub enum Region {
    Euw,
    Eune,
    Na,
    Br,
    Lan,
    Las,
    Kr,
    Jp,
    Oce,
    Tr,
    Ru,
    Ph,
    Sg,
    Th,
    Tw,
    Vn,
}

/// Continental routing group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cluster {
    Americas,
    Asia,
    Sea,
    Europe,
}

impl Cluster {
    pub fn host(self) -> &'static str {
        match self {
            Cluster::Americas => "americas",
            Cluster::Asia => "asia",
            Cluster::Sea => "sea",
            Cluster::Europe => "europe",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

impl Region {
    pub const ALL: [Region; 16] = [
        Region::Euw,
        Region::Eune,
        Region::Na,
        Region::Br,
        Region::Lan,
        Region::Las,
        Region::Kr,
        Region::Jp,
        Region::Oce,
        Region::Tr,
        Region::Ru,
        Region::Ph,
        Region::Sg,
        Region::Th,
        Region::Tw,
        Region::Vn,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Euw => "EUW",
            Region::Eune => "EUNE",
            Region::Na => "NA",
            Region::Br => "BR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Kr => "KR",
            Region::Jp => "JP",
            Region::Oce => "OCE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Ph => "PH",
            Region::Sg => "SG",
            Region::Th => "TH",
            Region::Tw => "TW",
            Region::Vn => "VN",
        }
    }

    /// Platform routing value (regional shard host prefix).
    pub fn platform(self) -> &'static str {
        match self {
            Region::Euw => "euw1",
            Region::Eune => "eun1",
            Region::Na => "na1",
            Region::Br => "br1",
            Region::Lan => "la1",
            Region::Las => "la2",
            Region::Kr => "kr",
            Region::Jp => "jp1",
            Region::Oce => "oc1",
            Region::Tr => "tr1",
            Region::Ru => "ru",
            Region::Ph => "ph2",
            Region::Sg => "sg2",
            Region::Th => "th2",
            Region::Tw => "tw2",
            Region::Vn => "vn2",
        }
    }

    /// Cluster routing value. OCE deliberately stays on `europe`.
    pub fn cluster(self) -> Cluster {
        match self {
            Region::Na | Region::Br | Region::Lan | Region::Las => Cluster::Americas,
            Region::Kr | Region::Jp => Cluster::Asia,
            Region::Ph | Region::Sg | Region::Th | Region::Tw | Region::Vn => Cluster::Sea,
            Region::Euw | Region::Eune | Region::Oce | Region::Tr | Region::Ru => Cluster::Europe,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LaneError::validation(format!("unknown region '{s}'")))
    }
}

/// Caller-supplied player identity.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
}

impl PlayerIdentity {
    /// Build an identity, tolerating a leading `#` on the tag line.
    pub fn new(game_name: impl Into<String>, tag_line: impl AsRef<str>, region: Region) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.as_ref().replace('#', ""),
            region,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/riot/region.rs"]
mod tests;
