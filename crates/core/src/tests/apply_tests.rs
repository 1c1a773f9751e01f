// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_seed_people, create_seed_state, id, level};
use crate::{Command, DirectoryState, Transition, ViewParams, apply};
use people_directory_domain::{SortMode, Team, TeamFilter};

fn expect_changed(transition: Transition) -> DirectoryState {
    match transition {
        Transition::Changed(state) => state,
        Transition::Unchanged => panic!("expected the command to change the state"),
    }
}

#[test]
fn test_set_team_changes_view_only() {
    let state: DirectoryState = create_seed_state();

    let next: DirectoryState = expect_changed(apply(
        &state,
        Command::SetTeam {
            team: TeamFilter::Only(Team::Design),
        },
    ));

    assert_eq!(next.view.selected_team, TeamFilter::Only(Team::Design));
    assert!(next.roster.same_as(&state.roster));
}

#[test]
fn test_set_team_to_current_value_is_unchanged() {
    let state: DirectoryState = create_seed_state();
    let transition: Transition = apply(
        &state,
        Command::SetTeam {
            team: TeamFilter::All,
        },
    );
    assert_eq!(transition, Transition::Unchanged);
}

#[test]
fn test_set_search_stores_raw_text() {
    let state: DirectoryState = create_seed_state();

    let next: DirectoryState = expect_changed(apply(
        &state,
        Command::SetSearch {
            search: String::from("  GraphQL "),
        },
    ));

    assert_eq!(next.view.search, "  GraphQL ");
}

#[test]
fn test_set_same_search_is_unchanged() {
    let state: DirectoryState = create_seed_state();
    let transition: Transition = apply(
        &state,
        Command::SetSearch {
            search: String::new(),
        },
    );
    assert!(!transition.is_changed());
}

#[test]
fn test_set_sort() {
    let state: DirectoryState = create_seed_state();

    let next: DirectoryState = expect_changed(apply(
        &state,
        Command::SetSort {
            sort: SortMode::LevelDesc,
        },
    ));
    assert_eq!(next.view.sort, SortMode::LevelDesc);

    let again: Transition = apply(
        &next,
        Command::SetSort {
            sort: SortMode::LevelDesc,
        },
    );
    assert_eq!(again, Transition::Unchanged);
}

#[test]
fn test_toggle_show_inactive_always_changes() {
    let state: DirectoryState = create_seed_state();
    assert!(state.view.show_inactive);

    let hidden: DirectoryState = expect_changed(apply(&state, Command::ToggleShowInactive));
    assert!(!hidden.view.show_inactive);

    let shown: DirectoryState = expect_changed(apply(&hidden, Command::ToggleShowInactive));
    assert!(shown.view.show_inactive);
}

#[test]
fn test_promote_command_updates_roster() {
    let state: DirectoryState = create_seed_state();

    let next: DirectoryState = expect_changed(apply(
        &state,
        Command::Promote {
            person_id: id("1"),
        },
    ));

    assert_eq!(next.roster.get(&id("1")).unwrap().level, level(4));
    assert_eq!(next.view, state.view);
}

#[test]
fn test_noop_roster_commands_are_unchanged() {
    let state: DirectoryState = create_seed_state();

    let commands: Vec<Command> = vec![
        Command::Promote {
            person_id: id("6"),
        },
        Command::Promote {
            person_id: id("missing"),
        },
        Command::MoveToTeam {
            person_id: id("1"),
            team: Team::Platform,
        },
        Command::MoveToTeam {
            person_id: id("missing"),
            team: Team::Sales,
        },
        Command::ToggleActive {
            person_id: id("missing"),
        },
    ];

    for command in commands {
        assert_eq!(apply(&state, command), Transition::Unchanged);
    }
}

#[test]
fn test_move_and_toggle_commands() {
    let state: DirectoryState = create_seed_state();

    let moved: DirectoryState = expect_changed(apply(
        &state,
        Command::MoveToTeam {
            person_id: id("2"),
            team: Team::Sales,
        },
    ));
    assert_eq!(moved.roster.get(&id("2")).unwrap().team, Team::Sales);

    let toggled: DirectoryState = expect_changed(apply(
        &moved,
        Command::ToggleActive {
            person_id: id("2"),
        },
    ));
    assert!(!toggled.roster.get(&id("2")).unwrap().is_active);
    assert_eq!(toggled.roster.get(&id("2")).unwrap().team, Team::Sales);
}

#[test]
fn test_load_roster_replaces_roster_and_keeps_view() {
    let state: DirectoryState = expect_changed(apply(
        &create_seed_state(),
        Command::SetSearch {
            search: String::from("ava"),
        },
    ));

    let mut people = create_seed_people();
    people.truncate(2);
    let next: DirectoryState = expect_changed(apply(&state, Command::LoadRoster { people }));

    assert_eq!(next.roster.len(), 2);
    assert_eq!(next.view.search, "ava");
}

#[test]
fn test_load_roster_into_empty_state() {
    let state: DirectoryState = DirectoryState::new();
    assert!(state.roster.is_empty());
    assert_eq!(state.view, ViewParams::default());

    let next: DirectoryState = expect_changed(apply(
        &state,
        Command::LoadRoster {
            people: create_seed_people(),
        },
    ));

    assert_eq!(next.roster.len(), 6);
}

#[test]
fn test_apply_never_modifies_input() {
    let state: DirectoryState = create_seed_state();
    let before: DirectoryState = state.clone();

    let _ = apply(
        &state,
        Command::ToggleActive {
            person_id: id("1"),
        },
    );
    let _ = apply(&state, Command::ToggleShowInactive);

    assert_eq!(state, before);
    assert!(state.roster.same_as(&before.roster));
}
