// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-record transitions over the roster.
//!
//! Every function here is total. An unknown id is not an error, it is a
//! no-op. A no-op returns a roster that is [`Roster::same_as`] its input;
//! any real change returns a new roster with exactly one record replaced.

use crate::roster::Roster;
use people_directory_domain::{Level, Person, PersonId, Role, Team};
use tracing::debug;

/// Promotes a person by one level.
///
/// An individual contributor who reaches the top level becomes a manager.
/// Managers and directors keep their role. No-op if the id is unknown or
/// the person is already at the top level.
#[must_use]
pub fn promote(roster: &Roster, person_id: &PersonId) -> Roster {
    let Some(person) = roster.get(person_id) else {
        debug!(person_id = %person_id, "Promote ignored: unknown person");
        return roster.clone();
    };

    let Some(level) = person.level.promoted() else {
        debug!(person_id = %person_id, "Promote ignored: already at top level");
        return roster.clone();
    };

    let role: Role = promoted_role(person.role, level);
    debug!(
        person_id = %person_id,
        level = level.value(),
        role = role.as_str(),
        "Promoted person"
    );

    roster.with_person(Person {
        level,
        role,
        ..person.clone()
    })
}

/// The role held after reaching `level`. Roles never move down.
const fn promoted_role(current: Role, level: Level) -> Role {
    match current {
        Role::IndividualContributor if level.is_max() => Role::Manager,
        other => other,
    }
}

/// Moves a person to another team.
///
/// No-op if the id is unknown or the person is already on `team`.
#[must_use]
pub fn move_to_team(roster: &Roster, person_id: &PersonId, team: Team) -> Roster {
    let Some(person) = roster.get(person_id) else {
        debug!(person_id = %person_id, "Move ignored: unknown person");
        return roster.clone();
    };

    if person.team == team {
        debug!(person_id = %person_id, team = team.as_str(), "Move ignored: same team");
        return roster.clone();
    }

    debug!(
        person_id = %person_id,
        from = person.team.as_str(),
        to = team.as_str(),
        "Moved person"
    );

    roster.with_person(Person {
        team,
        ..person.clone()
    })
}

/// Flips a person's active flag.
///
/// No-op if the id is unknown. Nothing cascades to the person's reports.
#[must_use]
pub fn toggle_active(roster: &Roster, person_id: &PersonId) -> Roster {
    let Some(person) = roster.get(person_id) else {
        debug!(person_id = %person_id, "Toggle ignored: unknown person");
        return roster.clone();
    };

    let is_active: bool = !person.is_active;
    debug!(person_id = %person_id, is_active, "Toggled active flag");

    roster.with_person(Person {
        is_active,
        ..person.clone()
    })
}
