//! Recoverable call outcomes
//!
//! Two failure conditions are ordinary results rather than errors: a
//! get-by-id that finds nothing (HTTP 404) and an enrollment create for a
//! user who is already on the roster (HTTP 409). Call-sites that care get a
//! typed outcome to match on; every other failure stays an `Err` and
//! propagates unchanged.

use crate::error::{Error, Result};

/// Outcome of a get-by-id call where absence is an expected condition
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The resource exists
    Found(T),
    /// The service reported 404 for this id
    NotFound {
        /// The id that was requested
        id: String,
    },
}

impl<T> Fetched<T> {
    /// Recover a 404-carrying error into [`Fetched::NotFound`].
    ///
    /// Any other error propagates unchanged.
    pub fn from_result(result: Result<T>, id: impl Into<String>) -> Result<Self> {
        match result {
            Ok(value) => Ok(Self::Found(value)),
            Err(e) if e.is_not_found() => Ok(Self::NotFound { id: id.into() }),
            Err(e) => Err(e),
        }
    }

    /// Check if the resource was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The resource, discarding the not-found id
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound { .. } => None,
        }
    }
}

/// Outcome of an enrollment-style create where prior membership is an
/// expected condition
#[derive(Debug, Clone, PartialEq)]
pub enum Enrollment<T> {
    /// The user was added to the roster
    Added(T),
    /// The service reported 409: the user is already a member
    AlreadyMember {
        /// The user id that was submitted
        user_id: String,
    },
}

impl<T> Enrollment<T> {
    /// Recover a 409-carrying error into [`Enrollment::AlreadyMember`].
    ///
    /// Any other error propagates unchanged.
    pub fn from_result(result: Result<T>, user_id: impl Into<String>) -> Result<Self> {
        match result {
            Ok(value) => Ok(Self::Added(value)),
            Err(e) if e.is_conflict() => Ok(Self::AlreadyMember {
                user_id: user_id.into(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Check if the user was newly added
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// The created membership, discarding the already-member case
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Added(value) => Some(value),
            Self::AlreadyMember { .. } => None,
        }
    }
}
