//! Typed row ids and the saved/unsaved identity of an entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Id types that can be taken from a URL path segment.
pub trait EntityId: Copy + FromStr + fmt::Display + Send + Sync + 'static {
    /// Resource name used in not-found messages
    const RESOURCE: &'static str;
}

/// Path segment that is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid id: '{0}'")]
pub struct InvalidId(String);

macro_rules! row_id {
    ($name:ident, $resource:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i32);

        impl $name {
            pub fn new(id: i32) -> Self {
                Self(id)
            }

            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        /// Only positive integers are ids the store can have handed out.
        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.parse::<i32>() {
                    Ok(id) if id > 0 => Ok(Self(id)),
                    _ => Err(InvalidId(s.to_owned())),
                }
            }
        }

        impl EntityId for $name {
            const RESOURCE: &'static str = $resource;
        }
    };
}

row_id!(CustomerId, "customer");
row_id!(ReservationId, "reservation");

/// Whether an entity has been written to the store yet.
///
/// `save` inserts an `Unsaved` entity and updates a `Saved` one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Identity<Id> {
    #[default]
    Unsaved,
    Saved(Id),
}

impl<Id: Copy> Identity<Id> {
    pub fn id(&self) -> Option<Id> {
        match self {
            Self::Unsaved => None,
            Self::Saved(id) => Some(*id),
        }
    }
}
