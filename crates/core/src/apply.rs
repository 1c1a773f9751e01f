// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::roster::{Roster, normalize};
use crate::state::{DirectoryState, Transition, ViewParams};
use crate::transitions::{move_to_team, promote, toggle_active};

/// Applies a command to the current snapshot.
///
/// This is a pure function: `state` is never modified. View setters whose
/// value equals the current one, and roster transitions that hand back the
/// same roster, yield [`Transition::Unchanged`]. Loading a roster always
/// yields a new snapshot and leaves the view untouched.
///
/// # Arguments
///
/// * `state` - The current snapshot (immutable)
/// * `command` - The command to apply
#[must_use]
pub fn apply(state: &DirectoryState, command: Command) -> Transition {
    match command {
        Command::SetTeam { team } => {
            if state.view.selected_team == team {
                return Transition::Unchanged;
            }
            update_view(state, |view| view.selected_team = team)
        }
        Command::SetSearch { search } => {
            if state.view.search == search {
                return Transition::Unchanged;
            }
            update_view(state, |view| view.search = search)
        }
        Command::SetSort { sort } => {
            if state.view.sort == sort {
                return Transition::Unchanged;
            }
            update_view(state, |view| view.sort = sort)
        }
        Command::ToggleShowInactive => {
            update_view(state, |view| view.show_inactive = !view.show_inactive)
        }
        Command::Promote { person_id } => {
            update_roster(state, promote(&state.roster, &person_id))
        }
        Command::MoveToTeam { person_id, team } => {
            update_roster(state, move_to_team(&state.roster, &person_id, team))
        }
        Command::ToggleActive { person_id } => {
            update_roster(state, toggle_active(&state.roster, &person_id))
        }
        Command::LoadRoster { people } => {
            Transition::Changed(state.with_roster(normalize(&people)))
        }
    }
}

fn update_view(state: &DirectoryState, edit: impl FnOnce(&mut ViewParams)) -> Transition {
    let mut view: ViewParams = state.view.clone();
    edit(&mut view);
    Transition::Changed(state.with_view(view))
}

fn update_roster(state: &DirectoryState, roster: Roster) -> Transition {
    if roster.same_as(&state.roster) {
        Transition::Unchanged
    } else {
        Transition::Changed(state.with_roster(roster))
    }
}
