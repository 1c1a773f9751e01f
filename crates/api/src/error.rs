// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the data source boundary.

use thiserror::Error;

/// Failures reported by a people source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not deliver data. Retrying may succeed.
    #[error("People source unavailable: {reason}")]
    Unavailable { reason: String },

    /// An update named a person the source does not know.
    #[error("Person with id '{0}' not found")]
    PersonNotFound(String),
}

/// API-level errors.
///
/// Only loading and updating through a source can fail. Roster
/// transitions and view changes are total and never produce one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The people source failed. The store was left untouched.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Source configuration or seed data could not be parsed.
    #[error("Invalid source data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Convenience alias for API results.
pub type ApiResult<T> = Result<T, ApiError>;
