use super::*;

fn find_group<'a>(ops: &'a [DrawOp], key: &AssetKey) -> Option<&'a [DrawOp]> {
    ops.iter().find_map(|op| match op {
        DrawOp::Group { requires, ops } if requires == key => Some(ops.as_slice()),
        _ => None,
    })
}

fn champ(name: &str) -> AssetKey {
    AssetKey::Champion(name.to_string())
}

fn image_rect(ops: &[DrawOp], key: &AssetKey) -> Rect {
    ops.iter()
        .find_map(|op| match op {
            DrawOp::Image { asset, rect, .. } if asset == key => Some(*rect),
            _ => None,
        })
        .unwrap()
}

#[test]
fn canvas_and_export_scale() {
    let layout = compose(&BannerConfig::default());
    assert_eq!(layout.canvas, Canvas { width: 700, height: 170 });
    assert_eq!(
        layout.output_canvas(),
        Canvas {
            width: 1400,
            height: 340
        }
    );
}

#[test]
fn palette_follows_outcome_only() {
    let win = compose(&BannerConfig::default());
    let loss = compose(&BannerConfig {
        victory: false,
        ..BannerConfig::default()
    });
    assert_eq!(
        win.ops[0],
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 700.0, 170.0),
            paint: Paint::HorizontalGradient {
                start: palette::WIN_START,
                end: palette::WIN_END
            },
        }
    );
    assert_eq!(
        loss.ops[1],
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 8.0, 170.0),
            paint: Paint::Solid(palette::LOSS_ACCENT),
        }
    );

    let other_stats = compose(&BannerConfig {
        kills: 0,
        rank_tier: Tier::Gold,
        ..BannerConfig::default()
    });
    assert_eq!(win.ops[..2], other_stats.ops[..2]);
}

#[test]
fn missing_opp_teammate_drops_the_cluster() {
    let layout = compose(&BannerConfig {
        opp_teammate: None,
        ..BannerConfig::default()
    });
    assert!(find_group(&layout.ops, &champ("Lux")).is_none());
    assert!(find_group(&layout.ops, &champ("Caitlyn")).is_some());
    assert!(!layout.asset_keys().contains(&champ("Lux")));
}

#[test]
fn no_opponent_means_no_right_side() {
    let layout = compose(&BannerConfig {
        opp_champion: None,
        opp_teammate: None,
        ..BannerConfig::default()
    });
    let groups = layout
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Group { .. }))
        .count();
    assert_eq!(groups, 2);
}

#[test]
fn unranked_has_no_emblem() {
    let layout = compose(&BannerConfig::default());
    assert!(
        layout
            .asset_keys()
            .iter()
            .all(|k| !matches!(k, AssetKey::RankEmblem(_)))
    );
}

#[test]
fn ranked_badge_nested_under_primary_portrait() {
    let layout = compose(&BannerConfig {
        rank_tier: Tier::Diamond,
        rank_div: "II".into(),
        ..BannerConfig::default()
    });
    let primary = find_group(&layout.ops, &champ("Jinx")).unwrap();
    let badge = find_group(primary, &AssetKey::RankEmblem(Tier::Diamond)).unwrap();
    assert_eq!(
        image_rect(badge, &AssetKey::RankEmblem(Tier::Diamond)),
        Rect::new(45.0, 132.0, 83.0, 170.0)
    );
    assert!(badge.iter().any(|op| matches!(
        op,
        DrawOp::Text { text, align: TextAlign::Left, anchor, .. }
            if text == "DIAMOND II" && *anchor == Point::new(91.0, 156.0)
    )));
}

#[test]
fn sides_mirror_around_center() {
    let layout = compose(&BannerConfig {
        champion: "Ahri".into(),
        opp_champion: Some("Zed".into()),
        teammate: Some("Vi".into()),
        opp_teammate: Some("Nidalee".into()),
        ..BannerConfig::default()
    });
    let mine = image_rect(find_group(&layout.ops, &champ("Ahri")).unwrap(), &champ("Ahri"));
    let theirs = image_rect(find_group(&layout.ops, &champ("Zed")).unwrap(), &champ("Zed"));
    assert_eq!(mine, Rect::new(20.0, 47.0, 95.0, 122.0));
    assert_eq!(theirs, Rect::new(605.0, 47.0, 680.0, 122.0));
    assert_eq!(mine.x0, 700.0 - theirs.x1);

    let duo = image_rect(find_group(&layout.ops, &champ("Vi")).unwrap(), &champ("Vi"));
    let opp_duo = image_rect(
        find_group(&layout.ops, &champ("Nidalee")).unwrap(),
        &champ("Nidalee"),
    );
    assert_eq!(duo, Rect::new(65.0, 45.0, 120.0, 100.0));
    assert_eq!(opp_duo, Rect::new(580.0, 45.0, 635.0, 100.0));
}

#[test]
fn duo_is_drawn_beneath_primary() {
    let layout = compose(&BannerConfig::default());
    let pos = |name: &str| {
        layout
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Group { requires, .. } if *requires == champ(name)))
            .unwrap()
    };
    assert!(pos("Thresh") < pos("Jinx"));
    assert!(pos("Lux") < pos("Caitlyn"));
}

#[test]
fn role_badges_gate_on_icon_and_skip_empty_roles() {
    let layout = compose(&BannerConfig {
        role: String::new(),
        teammate_role: Some("SUPPORT".into()),
        ..BannerConfig::default()
    });
    let primary = find_group(&layout.ops, &champ("Jinx")).unwrap();
    assert!(
        !primary
            .iter()
            .any(|op| matches!(op, DrawOp::Group { requires: AssetKey::RoleIcon(_), .. }))
    );

    let duo = find_group(&layout.ops, &champ("Thresh")).unwrap();
    let badge = find_group(duo, &AssetKey::RoleIcon(RoleIcon::Utility)).unwrap();
    assert_eq!(
        image_rect(badge, &AssetKey::RoleIcon(RoleIcon::Utility)),
        Rect::new(107.0, 87.0, 123.0, 103.0)
    );
}

#[test]
fn center_stats_text() {
    let layout = compose(&BannerConfig::default());
    let texts: Vec<(&str, Point)> = layout
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            ("13", Point::new(280.0, 77.0)),
            ("/", Point::new(315.0, 77.0)),
            ("8", Point::new(350.0, 77.0)),
            ("/", Point::new(385.0, 77.0)),
            ("7", Point::new(420.0, 77.0)),
            ("2.5 KDA", Point::new(340.0, 107.0)),
            ("\u{2022}", Point::new(350.0, 107.0)),
            ("8.5 CS/m", Point::new(360.0, 107.0)),
        ]
    );
}

#[test]
fn asset_keys_are_unique_and_ordered() {
    let layout = compose(&BannerConfig {
        teammate: Some("Jinx".into()),
        ..BannerConfig::default()
    });
    let keys = layout.asset_keys();
    assert_eq!(keys[0], champ("Jinx"));
    assert_eq!(keys.iter().filter(|k| **k == champ("Jinx")).count(), 1);
    assert!(keys.contains(&AssetKey::Font(FontFace::Bold)));
    assert!(keys.contains(&AssetKey::Font(FontFace::Regular)));
}

#[test]
fn compose_is_deterministic() {
    let cfg = BannerConfig::default();
    assert_eq!(compose(&cfg), compose(&cfg));
}
