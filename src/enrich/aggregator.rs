use crate::enrich::record::{MatchRecord, cs_per_minute};
use crate::enrich::resolve::{Lane, find_player};
use crate::enrich::roles::Role;
use crate::foundation::error::LaneResult;
use crate::riot::api::{RiotApi, short_puuid};
use crate::riot::dto::MatchDto;
use crate::riot::league::RankEntry;
use crate::riot::pacing::{Endpoint, Pacer};
use crate::riot::region::PlayerIdentity;
use crate::riot::transport::RiotTransport;

/// A match reduced to the requesting player's view, before the opponent rank is known.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSummary {
    pub record: MatchRecord,
    pub opponent_puuid: Option<String>,
}

/// Reduce one match to the player's stats and positional companions.
///
/// Returns `None` when the telemetry does not list `puuid`.
pub fn summarize_match(
    detail: &MatchDto,
    puuid: &str,
    my_rank: &RankEntry,
) -> Option<MatchSummary> {
    let info = &detail.info;
    let me = find_player(&info.participants, puuid)?;
    let lane = Lane::resolve(me, &info.participants);

    let match_id = detail
        .metadata
        .as_ref()
        .map(|m| m.match_id.clone())
        .unwrap_or_else(|| info.game_id.to_string());

    let record = MatchRecord {
        id: info.game_id,
        match_id,
        champion: me.champion_name.clone(),
        role: Role::from_position(&me.team_position),
        kills: me.kills,
        deaths: me.deaths,
        assists: me.assists,
        win: me.win,
        cs_min: cs_per_minute(
            me.total_minions_killed,
            me.neutral_minions_killed,
            info.game_duration,
        ),
        my_rank: my_rank.clone(),
        opp_rank: RankEntry::unranked(),
        duo: lane.duo_companion(),
        opponent: lane.opponent_companion(),
        opp_duo: lane.opp_duo_companion(),
    };

    Some(MatchSummary {
        record,
        opponent_puuid: lane.opponent.map(|o| o.puuid.clone()),
    })
}

/// Turns a player identity into resolved [`MatchRecord`]s.
#[derive(Clone, Debug)]
pub struct Enricher<T, P> {
    api: RiotApi<T>,
    pacer: P,
}

impl<T: RiotTransport, P: Pacer> Enricher<T, P> {
    pub fn new(api: RiotApi<T>, pacer: P) -> Self {
        Self { api, pacer }
    }

    pub fn api(&self) -> &RiotApi<T> {
        &self.api
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run the whole pipeline for `identity`.
    ///
    /// Account and match-list failures abort the request. Individual detail failures drop
    /// that match; opponent rank failures leave it `UNRANKED`. Output keeps recency order.
    #[tracing::instrument(skip(self))]
    pub async fn enrich_matches(&self, identity: &PlayerIdentity) -> LaneResult<Vec<MatchRecord>> {
        let region = identity.region;
        let cluster = region.cluster();
        tracing::info!(%region, %cluster, "enriching matches");

        let puuid = self
            .api
            .resolve_account(&identity.game_name, &identity.tag_line, cluster)
            .await?;
        let my_rank = self.api.rank(&puuid, region).await;
        let match_ids = self.api.match_ids(&puuid, cluster).await?;
        let details = self.api.match_details(&match_ids, cluster).await;

        let summaries: Vec<MatchSummary> = details
            .iter()
            .zip(&match_ids)
            .filter_map(|(detail, id)| {
                let detail = detail.as_ref()?;
                let summary = summarize_match(detail, &puuid, &my_rank);
                if summary.is_none() {
                    tracing::debug!(match_id = %id, puuid = short_puuid(&puuid), "player missing from telemetry; dropped");
                }
                summary
            })
            .collect();

        let mut records = Vec::with_capacity(summaries.len());
        for (slot, summary) in summaries.into_iter().enumerate() {
            let MatchSummary {
                mut record,
                opponent_puuid,
            } = summary;
            if let Some(opp) = opponent_puuid {
                self.pacer.acquire(Endpoint::LeagueEntries, slot).await;
                record.opp_rank = self.api.rank(&opp, region).await;
            }
            records.push(record);
        }

        tracing::info!(
            requested = match_ids.len(),
            resolved = records.len(),
            "enrichment finished"
        );
        Ok(records)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/enrich/aggregator.rs"]
mod tests;
