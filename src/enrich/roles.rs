use std::fmt;

/// Canonical Summoner's Rift position, as reported in `teamPosition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
        }
    }

    /// Parse a raw `teamPosition`; empty or non-canonical values have no role.
    pub fn from_position(position: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == position)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lane-partner role on the same team.
///
/// The table is directional: TOP pairs with JUNGLE but JUNGLE pairs with MIDDLE. Unknown or
/// absent roles fall back to JUNGLE.
pub fn partner_role(role: Option<Role>) -> Role {
    match role {
        Some(Role::Utility) => Role::Bottom,
        Some(Role::Bottom) => Role::Utility,
        Some(Role::Jungle) => Role::Middle,
        Some(Role::Middle) => Role::Jungle,
        Some(Role::Top) => Role::Jungle,
        None => Role::Jungle,
    }
}

/// Role of the direct counterpart on the other team; `None` means "no opponent".
pub fn opponent_role(role: Option<Role>) -> Option<Role> {
    role
}
