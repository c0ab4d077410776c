use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::Barrier;

use super::*;
use crate::riot::canned::CannedTransport;

#[test]
fn urls_follow_riot_routing() {
    assert_eq!(
        account_url(Cluster::Asia, "Faker", "KR1").unwrap().as_str(),
        "https://asia.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Faker/KR1"
    );
    assert_eq!(
        league_entries_url(Region::Euw, "p-1").unwrap().as_str(),
        "https://euw1.api.riotgames.com/lol/league/v4/entries/by-puuid/p-1"
    );
    assert_eq!(
        match_ids_url(Cluster::Americas, "p-1").unwrap().as_str(),
        "https://americas.api.riotgames.com/lol/match/v5/matches/by-puuid/p-1/ids?start=0&count=20"
    );
    assert_eq!(
        match_detail_url(Cluster::Sea, "VN2_42").unwrap().as_str(),
        "https://sea.api.riotgames.com/lol/match/v5/matches/VN2_42"
    );
}

#[test]
fn riot_id_segments_are_percent_encoded() {
    let url = account_url(Cluster::Europe, "Le Nain/Bleu", "EUW").unwrap();
    assert_eq!(
        url.as_str(),
        "https://europe.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Le%20Nain%2FBleu/EUW"
    );
}

#[tokio::test]
async fn account_404_is_account_not_found() {
    let api = RiotApi::new(CannedTransport::new());
    let err = api
        .resolve_account("Nobody", "000", Cluster::Europe)
        .await
        .unwrap_err();
    assert!(matches!(err, LaneError::AccountNotFound { .. }));
}

#[tokio::test]
async fn account_other_failures_are_upstream() {
    let url = account_url(Cluster::Europe, "Busy", "EUW").unwrap();
    let api = RiotApi::new(CannedTransport::new().with_error(&url, TransportError::Status(429)));
    let err = api
        .resolve_account("Busy", "EUW", Cluster::Europe)
        .await
        .unwrap_err();
    assert!(matches!(err, LaneError::Upstream(ref m) if m.contains("429")));
}

#[tokio::test]
async fn rank_failure_never_surfaces() {
    let url = league_entries_url(Region::Kr, "p-1").unwrap();
    let api = RiotApi::new(
        CannedTransport::new().with_error(&url, TransportError::Network("reset".into())),
    );
    assert_eq!(api.rank("p-1", Region::Kr).await, RankEntry::unranked());

    let malformed = RiotApi::new(CannedTransport::new().with_json(&url, json!({"oops": 1})));
    assert_eq!(malformed.rank("p-1", Region::Kr).await, RankEntry::unranked());
}

#[tokio::test]
async fn rank_reads_solo_queue() {
    let url = league_entries_url(Region::Kr, "p-1").unwrap();
    let api = RiotApi::new(CannedTransport::new().with_json(
        &url,
        json!([
            {"queueType": "RANKED_FLEX_SR", "tier": "IRON", "rank": "IV"},
            {"queueType": "RANKED_SOLO_5x5", "tier": "CHALLENGER", "rank": "I"}
        ]),
    ));
    let rank = api.rank("p-1", Region::Kr).await;
    assert_eq!(rank.tier, crate::riot::league::Tier::Challenger);
    assert_eq!(rank.division, "I");
}

#[tokio::test]
async fn match_details_keep_slots_for_failures() {
    let ok = json!({
        "info": { "gameId": 7, "gameDuration": 60, "participants": [] }
    });
    let transport = CannedTransport::new()
        .with_json(&match_detail_url(Cluster::Asia, "KR_1").unwrap(), ok.clone())
        .with_error(
            &match_detail_url(Cluster::Asia, "KR_2").unwrap(),
            TransportError::Status(500),
        )
        .with_json(&match_detail_url(Cluster::Asia, "KR_3").unwrap(), ok);
    let api = RiotApi::new(transport);
    let ids = vec!["KR_1".to_string(), "KR_2".to_string(), "KR_3".to_string()];
    let details = api.match_details(&ids, Cluster::Asia).await;
    assert_eq!(details.len(), 3);
    assert!(details[0].is_some());
    assert!(details[1].is_none());
    assert!(details[2].is_some());
}

#[tokio::test]
async fn match_ids_failure_is_upstream() {
    let api = RiotApi::new(CannedTransport::new());
    let err = api.match_ids("p-1", Cluster::Asia).await.unwrap_err();
    assert!(matches!(err, LaneError::Upstream(_)));
}

/// Holds every request until `gate` has seen all of them.
struct GatedTransport {
    gate: Barrier,
}

impl RiotTransport for GatedTransport {
    async fn get_json<T: DeserializeOwned + Send>(&self, _url: &Url) -> Result<T, TransportError> {
        self.gate.wait().await;
        Err(TransportError::Status(503))
    }
}

#[tokio::test]
async fn match_details_are_fetched_concurrently() {
    let ids: Vec<String> = (1..=4).map(|i| format!("EUW1_{i}")).collect();
    let api = RiotApi::new(GatedTransport {
        gate: Barrier::new(ids.len()),
    });

    let details = tokio::time::timeout(
        Duration::from_secs(5),
        api.match_details(&ids, Cluster::Europe),
    )
    .await
    .expect("detail requests were not in flight together");
    assert_eq!(details.len(), ids.len());
    assert!(details.iter().all(Option::is_none));
}
