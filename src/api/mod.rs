//! Resource-oriented API surface
//!
//! [`Classroom`] is the root handle. The remote service models everything
//! as nested collections under a course, and the accessors here mirror that
//! tree:
//!
//! ```text
//! Classroom
//! ├── courses()            create / get / list / update / patch
//! ├── aliases(course)      create / list
//! ├── teachers(course)     create
//! ├── students(course)     create
//! ├── course_work(course)  create
//! └── submissions(course, work)  list
//! ```
//!
//! Every operation issues exactly one request, except the listing calls,
//! which loop through [`crate::page::fetch_all`].

mod courses;
mod coursework;
mod roster;

pub use courses::{Aliases, Courses, ListCoursesRequest};
pub use coursework::{CourseWorkApi, ListSubmissionsRequest, Submissions, ALL_COURSE_WORK};
pub use roster::{Students, Teachers};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::page::PageLimit;
use std::time::Duration;

/// Root client for the education platform API
#[derive(Debug)]
pub struct Classroom {
    pub(crate) http: HttpClient,
    pub(crate) page_size: u32,
    pub(crate) page_limit: PageLimit,
}

impl Classroom {
    /// Build a client from a validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(token) = &config.access_token {
            builder = builder.access_token(token.clone());
        }

        Ok(Self {
            http: HttpClient::with_config(builder.build()),
            page_size: config.page_size,
            page_limit: config.page_limit(),
        })
    }

    /// The courses collection
    pub fn courses(&self) -> Courses<'_> {
        Courses::new(self)
    }

    /// Aliases of one course
    pub fn aliases(&self, course_id: impl Into<String>) -> Aliases<'_> {
        Aliases::new(self, course_id.into())
    }

    /// Teacher roster of one course
    pub fn teachers(&self, course_id: impl Into<String>) -> Teachers<'_> {
        Teachers::new(self, course_id.into())
    }

    /// Student roster of one course
    pub fn students(&self, course_id: impl Into<String>) -> Students<'_> {
        Students::new(self, course_id.into())
    }

    /// Coursework of one course
    pub fn course_work(&self, course_id: impl Into<String>) -> CourseWorkApi<'_> {
        CourseWorkApi::new(self, course_id.into())
    }

    /// Student submissions for one piece of coursework.
    ///
    /// Pass [`ALL_COURSE_WORK`] as `course_work_id` to list submissions
    /// across all coursework of the course.
    pub fn submissions(
        &self,
        course_id: impl Into<String>,
        course_work_id: impl Into<String>,
    ) -> Submissions<'_> {
        Submissions::new(self, course_id.into(), course_work_id.into())
    }
}
