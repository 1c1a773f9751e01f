// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod mock;
mod service;
mod source;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_DELAY_MS, FailureMode, SourceConfig};
pub use error::{ApiError, ApiResult, SourceError};
pub use mock::{MockPeopleService, seed_people};
pub use service::DirectoryService;
pub use source::{PeopleSource, PersonPatch};
