use std::fmt;
use std::path::{Path, PathBuf};

use crate::riot::league::Tier;

/// Data Dragon version used when the live version list cannot be fetched.
pub const FALLBACK_DDRAGON_VERSION: &str = "14.1.1";

pub const DDRAGON_VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";

/// Role icon file stem. Aliases collapse onto the five canonical icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleIcon {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl RoleIcon {
    /// Map a free-form role label to its icon; empty labels have none.
    ///
    /// `MID` and `SUPPORT` are accepted aliases, anything else unrecognized shows the support
    /// icon.
    pub fn for_label(label: &str) -> Option<RoleIcon> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(match label.to_ascii_uppercase().as_str() {
            "TOP" => RoleIcon::Top,
            "JUNGLE" => RoleIcon::Jungle,
            "MIDDLE" | "MID" => RoleIcon::Middle,
            "BOTTOM" => RoleIcon::Bottom,
            _ => RoleIcon::Utility,
        })
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            RoleIcon::Top => "TOP",
            RoleIcon::Jungle => "JUNGLE",
            RoleIcon::Middle => "MIDDLE",
            RoleIcon::Bottom => "BOTTOM",
            RoleIcon::Utility => "UTILITY",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFace {
    Regular,
    Bold,
}

/// Every external resource the banner can reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKey {
    /// Champion portrait by display name (`"Kai'Sa"`, `"Wukong"`, ...).
    Champion(String),
    RoleIcon(RoleIcon),
    /// Rank emblem; never requested for `UNRANKED`.
    RankEmblem(Tier),
    Font(FontFace),
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Champion(name) => write!(f, "champion:{name}"),
            AssetKey::RoleIcon(icon) => write!(f, "role:{}", icon.file_stem()),
            AssetKey::RankEmblem(tier) => write!(f, "emblem:{tier}"),
            AssetKey::Font(face) => write!(f, "font:{face:?}"),
        }
    }
}

/// Where an asset's bytes live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetLocation {
    Remote(String),
    Local(PathBuf),
}

/// Data Dragon file id for a champion display name.
pub fn champion_file_id(name: &str) -> String {
    let clean: String = name
        .chars()
        .filter(|c| *c != '\'' && *c != '.' && !c.is_whitespace())
        .collect();
    match clean.as_str() {
        "Wukong" => "MonkeyKing".to_string(),
        "RenataGlasc" => "Renata".to_string(),
        _ => clean,
    }
}

/// Maps [`AssetKey`]s to remote URLs (champion portraits) or files under `assets_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetCatalog {
    ddragon_version: String,
    assets_dir: PathBuf,
}

impl AssetCatalog {
    pub fn new(ddragon_version: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            ddragon_version: ddragon_version.into(),
            assets_dir: assets_dir.into(),
        }
    }

    pub fn ddragon_version(&self) -> &str {
        &self.ddragon_version
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn locate(&self, key: &AssetKey) -> AssetLocation {
        match key {
            AssetKey::Champion(name) => AssetLocation::Remote(format!(
                "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/{}.png",
                self.ddragon_version,
                champion_file_id(name)
            )),
            AssetKey::RoleIcon(icon) => AssetLocation::Local(
                self.assets_dir
                    .join("img")
                    .join(format!("{}.svg", icon.file_stem())),
            ),
            AssetKey::RankEmblem(tier) => AssetLocation::Local(
                self.assets_dir
                    .join("img")
                    .join(format!("emblem-{}.png", tier.as_str().to_ascii_lowercase())),
            ),
            AssetKey::Font(FontFace::Regular) => {
                AssetLocation::Local(self.assets_dir.join("fonts").join("banner-regular.ttf"))
            }
            AssetKey::Font(FontFace::Bold) => {
                AssetLocation::Local(self.assets_dir.join("fonts").join("banner-bold.ttf"))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
