use futures::future::join_all;
use reqwest::Url;

use crate::foundation::error::{LaneError, LaneResult};
use crate::riot::dto::{AccountDto, LeagueEntryDto, MatchDto};
use crate::riot::league::{RankEntry, solo_queue_rank};
use crate::riot::region::{Cluster, Region};
use crate::riot::transport::{RiotTransport, TransportError};

/// Number of recent match ids requested per player.
pub const MATCH_COUNT: u32 = 20;

/// Typed access to the four Riot endpoints the pipeline consumes.
///
/// The credential lives inside the transport; nothing here is global.
#[derive(Clone, Debug)]
pub struct RiotApi<T> {
    transport: T,
}

fn api_url(host: &str, segments: &[&str]) -> LaneResult<Url> {
    let mut url = Url::parse(&format!("https://{host}.api.riotgames.com/"))
        .map_err(|e| LaneError::validation(format!("invalid routing host '{host}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LaneError::validation("routing url cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn account_url(cluster: Cluster, game_name: &str, tag_line: &str) -> LaneResult<Url> {
    api_url(
        cluster.host(),
        &[
            "riot",
            "account",
            "v1",
            "accounts",
            "by-riot-id",
            game_name,
            tag_line,
        ],
    )
}

pub fn league_entries_url(region: Region, puuid: &str) -> LaneResult<Url> {
    api_url(
        region.platform(),
        &["lol", "league", "v4", "entries", "by-puuid", puuid],
    )
}

pub fn match_ids_url(cluster: Cluster, puuid: &str) -> LaneResult<Url> {
    let mut url = api_url(
        cluster.host(),
        &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
    )?;
    url.query_pairs_mut()
        .append_pair("start", "0")
        .append_pair("count", &MATCH_COUNT.to_string());
    Ok(url)
}

pub fn match_detail_url(cluster: Cluster, match_id: &str) -> LaneResult<Url> {
    api_url(
        cluster.host(),
        &["lol", "match", "v5", "matches", match_id],
    )
}

impl<T: RiotTransport> RiotApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve a riot id to its PUUID within `cluster`.
    pub async fn resolve_account(
        &self,
        game_name: &str,
        tag_line: &str,
        cluster: Cluster,
    ) -> LaneResult<String> {
        let url = account_url(cluster, game_name, tag_line)?;
        match self.transport.get_json::<AccountDto>(&url).await {
            Ok(account) => Ok(account.puuid),
            Err(TransportError::NotFound) => {
                Err(LaneError::account_not_found(game_name, tag_line))
            }
            Err(err) => Err(LaneError::upstream(format!(
                "account lookup on {cluster} failed: {err}"
            ))),
        }
    }

    /// Solo-queue rank for `puuid`.
    ///
    /// Never fails: transport errors and absent entries both fold into [`RankEntry::unranked`].
    pub async fn rank(&self, puuid: &str, region: Region) -> RankEntry {
        let url = match league_entries_url(region, puuid) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(%err, "rank lookup url");
                return RankEntry::unranked();
            }
        };
        match self.transport.get_json::<Vec<LeagueEntryDto>>(&url).await {
            Ok(entries) => {
                let rank = solo_queue_rank(&entries);
                tracing::debug!(
                    puuid = short_puuid(puuid),
                    tier = %rank.tier,
                    division = %rank.division,
                    "rank resolved"
                );
                rank
            }
            Err(err) => {
                tracing::warn!(
                    platform = region.platform(),
                    %err,
                    "rank lookup failed; using UNRANKED"
                );
                RankEntry::unranked()
            }
        }
    }

    /// Most-recent-first match ids for `puuid`.
    pub async fn match_ids(&self, puuid: &str, cluster: Cluster) -> LaneResult<Vec<String>> {
        let url = match_ids_url(cluster, puuid)?;
        self.transport
            .get_json::<Vec<String>>(&url)
            .await
            .map_err(|err| LaneError::upstream(format!("match list on {cluster} failed: {err}")))
    }

    /// Full telemetry for one match.
    pub async fn match_detail(
        &self,
        match_id: &str,
        cluster: Cluster,
    ) -> Result<MatchDto, TransportError> {
        let url = match_detail_url(cluster, match_id)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        self.transport.get_json::<MatchDto>(&url).await
    }

    /// Fetch all details concurrently; slot `i` holds the result for `match_ids[i]`.
    ///
    /// A failed fetch becomes `None` and does not affect its siblings.
    pub async fn match_details(
        &self,
        match_ids: &[String],
        cluster: Cluster,
    ) -> Vec<Option<MatchDto>> {
        let fetches = match_ids.iter().map(|id| async move {
            match self.match_detail(id, cluster).await {
                Ok(detail) => Some(detail),
                Err(err) => {
                    tracing::debug!(match_id = %id, %err, "match detail dropped");
                    None
                }
            }
        });
        join_all(fetches).await
    }
}

pub(crate) fn short_puuid(puuid: &str) -> &str {
    puuid.get(..5).unwrap_or(puuid)
}

#[cfg(test)]
#[path = "../../tests/unit/riot/api.rs"]
mod tests;
