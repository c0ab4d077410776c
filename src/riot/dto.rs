//! Wire shapes of the Riot endpoints this crate consumes.
//!
//! Only the fields the enrichment pipeline reads are declared; everything else in the upstream
//! payloads is ignored by serde.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: Option<MatchMetadataDto>,
    pub info: MatchInfoDto,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    pub match_id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub game_id: i64,
    /// Seconds for every match since patch 11.20.
    pub game_duration: f64,
    pub participants: Vec<Participant>,
}

/// One participant's per-game line.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    pub champion_name: String,
    pub team_id: u32,
    /// Empty outside the standard five-role queues.
    #[serde(default)]
    pub team_position: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    pub win: bool,
}
