//! Error types for lunchly-server
//!
//! Three failure kinds reach callers of the entity API:
//! - `Validation`: bad input, raised before anything is written
//! - `NotFound`: no row for the requested id
//! - `Store`: anything the database driver reports, passed through unchanged

use std::fmt::Display;

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no such {resource}: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl Error {
    pub fn not_found(resource: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
