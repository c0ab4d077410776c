use super::*;
use crate::enrich::roles::Role;
use crate::riot::league::RankEntry;

#[test]
fn kda_ratio_examples() {
    assert_eq!(kda_ratio(13, 0, 7), "Perfect");
    assert_eq!(kda_ratio(13, 8, 7), "2.5");
    assert_eq!(kda_ratio(0, 3, 0), "0.0");
    assert_eq!(kda_ratio(5, 3, 5), "3.3");
}

#[test]
fn defaults_match_the_manual_form() {
    let cfg = BannerConfig::default();
    assert_eq!(cfg.champion, "Jinx");
    assert_eq!(cfg.kda_text(), "2.5");
    assert!(cfg.victory);
    assert_eq!(cfg.rank_tier, Tier::Unranked);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = BannerConfig::from_json(
        r#"{"champion":"Ahri","role":"MID","kills":3,"deaths":0,"assists":9,"oppTeammate":null,"victory":false}"#,
    )
    .unwrap();
    assert_eq!(cfg.champion, "Ahri");
    assert_eq!(cfg.kda_text(), "Perfect");
    assert!(cfg.opp_teammate.is_none());
    assert_eq!(cfg.opp_champion.as_deref(), Some("Caitlyn"));
    assert!(!cfg.victory);
    assert!(BannerConfig::from_json("{\"kills\":\"x\"}").is_err());
}

#[test]
fn from_record_copies_companions_and_ranks() {
    let rec = MatchRecord {
        id: 5,
        match_id: "KR_5".into(),
        champion: "Azir".into(),
        role: Some(Role::Middle),
        kills: 4,
        deaths: 2,
        assists: 6,
        win: false,
        cs_min: "9.1".into(),
        my_rank: RankEntry {
            tier: Tier::Challenger,
            division: "I".into(),
        },
        opp_rank: RankEntry::unranked(),
        duo: Some(Companion {
            champion: "Lee Sin".into(),
            role: Role::Jungle,
        }),
        opponent: Some(Companion {
            champion: "Syndra".into(),
            role: Role::Middle,
        }),
        opp_duo: None,
    };
    let cfg = BannerConfig::from_record(&rec);
    assert_eq!(cfg.role, "MIDDLE");
    assert_eq!(cfg.kda_text(), "5.0");
    assert_eq!(cfg.teammate.as_deref(), Some("Lee Sin"));
    assert_eq!(cfg.teammate_role.as_deref(), Some("JUNGLE"));
    assert_eq!(cfg.opp_champion.as_deref(), Some("Syndra"));
    assert!(cfg.opp_teammate.is_none());
    assert!(cfg.opp_teammate_role.is_none());
    assert_eq!(cfg.rank_tier, Tier::Challenger);
    assert_eq!(cfg.opp_rank_tier, Tier::Unranked);
    assert_eq!(cfg.opp_rank_div, "");
    assert!(!cfg.victory);
}
