// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the team a person belongs to.
///
/// Teams are a fixed, closed set. No team can be created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// Platform engineering.
    Platform,
    /// Product management.
    Product,
    /// Design.
    Design,
    /// Sales.
    Sales,
}

impl Team {
    /// Every team, in the fixed display order.
    ///
    /// Grouped views and statistics always cover these teams in this order.
    pub const ALL: [Self; 4] = [Self::Platform, Self::Product, Self::Design, Self::Sales];

    /// Converts this team to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Platform => "Platform",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::Sales => "Sales",
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Platform" => Ok(Self::Platform),
            "Product" => Ok(Self::Product),
            "Design" => Ok(Self::Design),
            "Sales" => Ok(Self::Sales),
            _ => Err(DomainError::InvalidTeam(s.to_string())),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a person's role within their team.
///
/// Roles only move upward, and only through promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Individual contributor.
    #[serde(rename = "IC")]
    IndividualContributor,
    /// People manager.
    Manager,
    /// Director.
    Director,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IndividualContributor => "IC",
            Self::Manager => "Manager",
            Self::Director => "Director",
        }
    }

    /// Returns whether this role counts toward a team's manager headcount.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self, Self::Manager | Self::Director)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IC" => Ok(Self::IndividualContributor),
            "Manager" => Ok(Self::Manager),
            "Director" => Ok(Self::Director),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a person's level.
///
/// Levels are domain constants numbered 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level {
    /// The level number (1-5).
    value: u8,
}

impl Level {
    /// The lowest level.
    pub const MIN: Self = Self { value: 1 };
    /// The highest level. Promotion never goes past it.
    pub const MAX: Self = Self { value: 5 };

    /// Creates a new `Level`.
    ///
    /// # Arguments
    ///
    /// * `value` - The level number (must be between 1 and 5 inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLevel` if the value is not in the range 1-5.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value >= Self::MIN.value && value <= Self::MAX.value {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidLevel(value))
        }
    }

    /// Returns the level number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether this is the highest level.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.value >= Self::MAX.value
    }

    /// Returns the next level up, or `None` if already at the maximum.
    #[must_use]
    pub const fn promoted(&self) -> Option<Self> {
        if self.is_max() {
            None
        } else {
            Some(Self {
                value: self.value + 1,
            })
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the opaque identifier of a person.
///
/// Identifiers are unique across the roster and never change once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId {
    /// The identifier value.
    value: String,
}

impl PersonId {
    /// Creates a new `PersonId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the team filter selected in the directory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TeamFilter {
    /// Every team is shown.
    #[default]
    All,
    /// Only the given team is shown.
    Only(Team),
}

impl TeamFilter {
    /// Returns whether a person on `team` passes this filter.
    #[must_use]
    pub fn matches(&self, team: Team) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == team,
        }
    }

    /// Converts this filter to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(team) => team.as_str(),
        }
    }
}

impl From<Team> for TeamFilter {
    fn from(team: Team) -> Self {
        Self::Only(team)
    }
}

impl FromStr for TeamFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(Self::All);
        }
        s.parse::<Team>()
            .map(Self::Only)
            .map_err(|_| DomainError::InvalidTeamFilter(s.to_string()))
    }
}

impl TryFrom<String> for TeamFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TeamFilter> for String {
    fn from(filter: TeamFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl std::fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the ordering applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Ascending by name.
    #[default]
    #[serde(rename = "NAME_ASC")]
    NameAsc,
    /// Descending by level, ties broken by ascending name.
    #[serde(rename = "LEVEL_DESC")]
    LevelDesc,
}

impl SortMode {
    /// Converts this sort mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "NAME_ASC",
            Self::LevelDesc => "LEVEL_DESC",
        }
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NAME_ASC" => Ok(Self::NameAsc),
            "LEVEL_DESC" => Ok(Self::LevelDesc),
            _ => Err(DomainError::InvalidSortMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a person in the directory.
///
/// `id` is the canonical identifier. `reports_to_id` is a weak reference:
/// it is never checked against the roster and may point at nobody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Canonical identifier (opaque, unique, immutable).
    pub id: PersonId,
    /// Display name, used for search and name ordering.
    pub name: String,
    /// The team this person belongs to.
    pub team: Team,
    /// The person's role.
    pub role: Role,
    /// The person's level.
    pub level: Level,
    /// Whether the person is currently active.
    pub is_active: bool,
    /// Skills, matched case-insensitively by search.
    #[serde(default)]
    pub skills: Vec<String>,
    /// The identifier of this person's manager, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_to_id: Option<PersonId>,
}

impl Person {
    /// Creates a new active `Person` with no skills and no manager.
    ///
    /// # Arguments
    ///
    /// * `id` - The person's identifier
    /// * `name` - The person's display name
    /// * `team` - The person's team
    /// * `role` - The person's role
    /// * `level` - The person's level
    #[must_use]
    pub fn new(id: &str, name: &str, team: Team, role: Role, level: Level) -> Self {
        Self {
            id: PersonId::new(id),
            name: name.to_string(),
            team,
            role,
            level,
            is_active: true,
            skills: Vec::new(),
            reports_to_id: None,
        }
    }

    /// Replaces the skill list.
    #[must_use]
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Sets the manager reference.
    #[must_use]
    pub fn reporting_to(mut self, manager_id: &str) -> Self {
        self.reports_to_id = Some(PersonId::new(manager_id));
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
