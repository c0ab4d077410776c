use super::*;

#[test]
fn champion_ids_follow_ddragon_naming() {
    assert_eq!(champion_file_id("Kai'Sa"), "KaiSa");
    assert_eq!(champion_file_id("Dr. Mundo"), "DrMundo");
    assert_eq!(champion_file_id("Lee Sin"), "LeeSin");
    assert_eq!(champion_file_id("Wukong"), "MonkeyKing");
    assert_eq!(champion_file_id("Renata Glasc"), "Renata");
    assert_eq!(champion_file_id("Jinx"), "Jinx");
}

#[test]
fn role_labels_and_aliases() {
    assert_eq!(RoleIcon::for_label("MID"), Some(RoleIcon::Middle));
    assert_eq!(RoleIcon::for_label("support"), Some(RoleIcon::Utility));
    assert_eq!(RoleIcon::for_label("BOTTOM"), Some(RoleIcon::Bottom));
    assert_eq!(RoleIcon::for_label("ADC"), Some(RoleIcon::Utility));
    assert_eq!(RoleIcon::for_label(""), None);
    assert_eq!(RoleIcon::for_label("  "), None);
}

#[test]
fn locations_for_each_kind() {
    let cat = AssetCatalog::new("14.5.1", "assets");
    assert_eq!(
        cat.locate(&AssetKey::Champion("Kai'Sa".into())),
        AssetLocation::Remote(
            "https://ddragon.leagueoflegends.com/cdn/14.5.1/img/champion/KaiSa.png".into()
        )
    );
    assert_eq!(
        cat.locate(&AssetKey::RoleIcon(RoleIcon::Jungle)),
        AssetLocation::Local(PathBuf::from("assets/img/JUNGLE.svg"))
    );
    assert_eq!(
        cat.locate(&AssetKey::RankEmblem(Tier::Grandmaster)),
        AssetLocation::Local(PathBuf::from("assets/img/emblem-grandmaster.png"))
    );
    assert_eq!(
        cat.locate(&AssetKey::Font(FontFace::Bold)),
        AssetLocation::Local(PathBuf::from("assets/fonts/banner-bold.ttf"))
    );
}
