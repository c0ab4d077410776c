//! Positional inference of lane partners and opponents.
//!
//! Everything here keys on `teamId` and `teamPosition` only; champion identity never
//! influences who is matched.

use crate::enrich::record::Companion;
use crate::enrich::roles::{Role, opponent_role, partner_role};
use crate::riot::dto::Participant;

fn role_of(p: &Participant) -> Option<Role> {
    Role::from_position(&p.team_position)
}

fn companion(p: &Participant) -> Option<Companion> {
    role_of(p).map(|role| Companion {
        champion: p.champion_name.clone(),
        role,
    })
}

/// Locate the participant for `puuid`.
pub fn find_player<'a>(participants: &'a [Participant], puuid: &str) -> Option<&'a Participant> {
    participants.iter().find(|p| p.puuid == puuid)
}

/// Same-team participant in `who`'s partner role, never `who` itself.
pub fn find_duo<'a>(who: &Participant, participants: &'a [Participant]) -> Option<&'a Participant> {
    let target = partner_role(role_of(who));
    participants.iter().find(|p| {
        p.team_id == who.team_id && p.team_position == target.as_str() && p.puuid != who.puuid
    })
}

/// Other-team participant in `who`'s exact position.
pub fn find_opponent<'a>(
    who: &Participant,
    participants: &'a [Participant],
) -> Option<&'a Participant> {
    let target = opponent_role(role_of(who))?;
    participants
        .iter()
        .find(|p| p.team_id != who.team_id && p.team_position == target.as_str())
}

/// Companions resolved around one player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lane<'a> {
    pub duo: Option<&'a Participant>,
    pub opponent: Option<&'a Participant>,
    pub opp_duo: Option<&'a Participant>,
}

impl<'a> Lane<'a> {
    pub fn resolve(me: &Participant, participants: &'a [Participant]) -> Self {
        let duo = find_duo(me, participants);
        let opponent = find_opponent(me, participants);
        let opp_duo = opponent.and_then(|opp| find_duo(opp, participants));
        Self {
            duo,
            opponent,
            opp_duo,
        }
    }

    pub fn duo_companion(&self) -> Option<Companion> {
        self.duo.and_then(companion)
    }

    pub fn opponent_companion(&self) -> Option<Companion> {
        self.opponent.and_then(companion)
    }

    pub fn opp_duo_companion(&self) -> Option<Companion> {
        self.opp_duo.and_then(companion)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/enrich/resolve.rs"]
mod tests;
