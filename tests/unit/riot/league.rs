use super::*;

fn entry(queue: &str, tier: &str, rank: &str) -> LeagueEntryDto {
    LeagueEntryDto {
        queue_type: queue.to_string(),
        tier: tier.to_string(),
        rank: rank.to_string(),
    }
}

#[test]
fn solo_queue_entry_is_selected_over_flex() {
    let entries = vec![
        entry("RANKED_FLEX_SR", "DIAMOND", "I"),
        entry(SOLO_QUEUE, "GOLD", "IV"),
    ];
    assert_eq!(
        solo_queue_rank(&entries),
        RankEntry {
            tier: Tier::Gold,
            division: "IV".to_string()
        }
    );
}

#[test]
fn missing_solo_entry_is_unranked_sentinel() {
    let entries = vec![entry("RANKED_FLEX_SR", "DIAMOND", "I")];
    assert_eq!(solo_queue_rank(&entries), RankEntry::unranked());
    assert_eq!(solo_queue_rank(&[]), RankEntry::unranked());
    assert_eq!(RankEntry::unranked().division, "");
}

#[test]
fn unknown_tier_collapses_to_sentinel() {
    let entries = vec![entry(SOLO_QUEUE, "WOOD", "II")];
    assert_eq!(solo_queue_rank(&entries), RankEntry::unranked());
}

#[test]
fn tier_round_trips_through_text() {
    for t in Tier::RANKED {
        assert_eq!(t.as_str().parse::<Tier>().unwrap(), t);
    }
    assert_eq!("unranked".parse::<Tier>().unwrap(), Tier::Unranked);
    assert_eq!(
        serde_json::to_string(&Tier::Grandmaster).unwrap(),
        "\"GRANDMASTER\""
    );
}
