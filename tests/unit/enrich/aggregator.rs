use super::*;
use crate::riot::dto::{MatchInfoDto, MatchMetadataDto, Participant};
use crate::riot::league::Tier;

fn p(puuid: &str, champ: &str, team: u32, pos: &str) -> Participant {
    Participant {
        puuid: puuid.to_string(),
        champion_name: champ.to_string(),
        team_id: team,
        team_position: pos.to_string(),
        kills: 13,
        deaths: 8,
        assists: 7,
        total_minions_killed: 120,
        neutral_minions_killed: 30,
        win: team == 100,
    }
}

fn detail(participants: Vec<Participant>, duration: f64) -> MatchDto {
    MatchDto {
        metadata: Some(MatchMetadataDto {
            match_id: "EUW1_99".to_string(),
        }),
        info: MatchInfoDto {
            game_id: 99,
            game_duration: duration,
            participants,
        },
    }
}

fn gold() -> RankEntry {
    RankEntry {
        tier: Tier::Gold,
        division: "II".to_string(),
    }
}

#[test]
fn summary_carries_stats_companions_and_own_rank() {
    let m = detail(
        vec![
            p("me", "Jinx", 100, "BOTTOM"),
            p("sup", "Thresh", 100, "UTILITY"),
            p("opp", "Caitlyn", 200, "BOTTOM"),
            p("opp-sup", "Lux", 200, "UTILITY"),
        ],
        1800.0,
    );
    let s = summarize_match(&m, "me", &gold()).unwrap();
    assert_eq!(s.opponent_puuid.as_deref(), Some("opp"));
    let r = s.record;
    assert_eq!(r.id, 99);
    assert_eq!(r.match_id, "EUW1_99");
    assert_eq!(r.champion, "Jinx");
    assert_eq!(r.role, Some(Role::Bottom));
    assert_eq!((r.kills, r.deaths, r.assists), (13, 8, 7));
    assert!(r.win);
    assert_eq!(r.cs_min, "5.0");
    assert_eq!(r.my_rank, gold());
    assert_eq!(r.opp_rank, RankEntry::unranked());
    assert_eq!(r.duo.unwrap().champion, "Thresh");
    assert_eq!(r.opponent.unwrap().champion, "Caitlyn");
    assert_eq!(r.opp_duo.unwrap().champion, "Lux");
}

#[test]
fn missing_player_drops_the_match() {
    let m = detail(vec![p("someone", "Ahri", 100, "MIDDLE")], 1800.0);
    assert!(summarize_match(&m, "me", &gold()).is_none());
}

#[test]
fn zero_duration_and_no_opponent() {
    let m = detail(vec![p("me", "Ahri", 100, "MIDDLE")], 0.0);
    let s = summarize_match(&m, "me", &RankEntry::unranked()).unwrap();
    assert_eq!(s.record.cs_min, "0.0");
    assert!(s.opponent_puuid.is_none());
    assert!(s.record.opponent.is_none());
    assert!(s.record.opp_duo.is_none());
}

#[test]
fn match_id_falls_back_to_game_id() {
    let mut m = detail(vec![p("me", "Ahri", 100, "MIDDLE")], 600.0);
    m.metadata = None;
    let s = summarize_match(&m, "me", &gold()).unwrap();
    assert_eq!(s.record.match_id, "99");
}
