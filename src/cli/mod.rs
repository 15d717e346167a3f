//! CLI module
//!
//! Command-line interface over the library client.
//!
//! # Commands
//!
//! - `create-course` - Create a course
//! - `get-course` - Look up a course by id
//! - `list-courses` - List every visible course
//! - `update-course` - Get-modify-update a course's section and room
//! - `patch-course` - Partially update a course
//! - `add-alias` - Attach an alias to a course
//! - `add-teacher` - Add a teacher to a course roster
//! - `add-student` - Enroll a student
//! - `create-work` - Post an assignment
//! - `list-submissions` - List student submissions for coursework

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
