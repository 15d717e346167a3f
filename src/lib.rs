//! # edukit
//!
//! A typed Rust client for classroom-style education platform APIs.
//!
//! ## Features
//!
//! - **Resource-oriented surface**: courses, aliases, rosters, coursework,
//!   and student submissions as nested collection handles
//! - **Full-collection listing**: page-token pagination walked for you,
//!   bounded by a configurable guard against servers that never stop
//!   returning tokens
//! - **Typed outcomes**: "course not found" (404) and "already a member"
//!   (409) are enum variants to match on, not errors to catch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use edukit::{Classroom, ClientConfig, Fetched, ListCoursesRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut config = ClientConfig::default();
//!     config.access_token = Some("ya29...".to_string());
//!
//!     let classroom = Classroom::new(&config)?;
//!
//!     // List every visible course, across all pages
//!     let courses = classroom.courses().list(&ListCoursesRequest::new()).await?;
//!     for course in &courses {
//!         println!("{} {}", course.name_str(), course.id_str());
//!     }
//!
//!     // Absence is an outcome, not an error
//!     match classroom.courses().get("123456").await? {
//!         Fetched::Found(course) => println!("Course \"{}\" found.", course.name_str()),
//!         Fetched::NotFound { id } => println!("Course with ID \"{id}\" not found."),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Token acquisition, refresh, and request signing are outside this crate;
//! it attaches whatever bearer token it is given.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Resource models mirroring the wire format
pub mod types;

/// HTTP transport wrapper
pub mod http;

/// Paginated collection fetching
pub mod page;

/// Recoverable call outcomes (not-found, already-a-member)
pub mod outcome;

/// Resource-oriented API surface
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{
    Aliases, Classroom, CourseWorkApi, Courses, ListCoursesRequest, ListSubmissionsRequest,
    Students, Submissions, Teachers, ALL_COURSE_WORK,
};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use outcome::{Enrollment, Fetched};
pub use page::{fetch_all, Page, PageLimit};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
