// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Level is outside the range 1-5.
    InvalidLevel(u8),
    /// Team name is not one of the fixed teams.
    InvalidTeam(String),
    /// Role name is not recognized.
    InvalidRole(String),
    /// Team filter is neither "All" nor a team name.
    InvalidTeamFilter(String),
    /// Sort mode is not recognized.
    InvalidSortMode(String),
    /// Person identifier is empty or invalid.
    InvalidPersonId(String),
    /// Person name is empty or invalid.
    InvalidName(String),
    /// The same identifier appears more than once in a record batch.
    DuplicatePersonId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(value) => {
                write!(f, "Invalid level: {value}. Must be between 1 and 5")
            }
            Self::InvalidTeam(name) => write!(f, "Unknown team: {name}"),
            Self::InvalidRole(name) => write!(f, "Unknown role: {name}"),
            Self::InvalidTeamFilter(name) => write!(f, "Unknown team filter: {name}"),
            Self::InvalidSortMode(name) => write!(f, "Unknown sort mode: {name}"),
            Self::InvalidPersonId(msg) => write!(f, "Invalid person id: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::DuplicatePersonId(id) => {
                write!(f, "Person with id '{id}' appears more than once")
            }
        }
    }
}

impl std::error::Error for DomainError {}
