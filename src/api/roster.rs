//! Roster operations: adding teachers and students to a course
//!
//! Enrollment creates treat HTTP 409 as the ordinary "already a member"
//! outcome; see [`crate::outcome::Enrollment`].

use super::Classroom;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::outcome::Enrollment;
use crate::types::{Student, Teacher};
use reqwest::Method;
use tracing::info;

/// Handle for one course's teacher roster
#[derive(Debug)]
pub struct Teachers<'a> {
    client: &'a Classroom,
    course_id: String,
}

impl<'a> Teachers<'a> {
    pub(super) fn new(client: &'a Classroom, course_id: String) -> Self {
        Self { client, course_id }
    }

    /// Add a teacher to the course.
    ///
    /// `user_id` is a numeric id, an email address, or `"me"`.
    pub async fn create(&self, user_id: &str) -> Result<Enrollment<Teacher>> {
        let body = Teacher {
            user_id: Some(user_id.to_string()),
            ..Default::default()
        };
        let config = RequestConfig::new().json(serde_json::to_value(&body)?);

        let result: Result<Teacher> = self
            .client
            .http
            .request_json(
                Method::POST,
                &format!("/v1/courses/{}/teachers", self.course_id),
                config,
            )
            .await;

        let outcome = Enrollment::from_result(result, user_id)?;
        if let Enrollment::Added(teacher) = &outcome {
            info!(
                "Added teacher {} to course {}",
                teacher.user_id.as_deref().unwrap_or(user_id),
                self.course_id
            );
        }
        Ok(outcome)
    }
}

/// Handle for one course's student roster
#[derive(Debug)]
pub struct Students<'a> {
    client: &'a Classroom,
    course_id: String,
}

impl<'a> Students<'a> {
    pub(super) fn new(client: &'a Classroom, course_id: String) -> Self {
        Self { client, course_id }
    }

    /// Enroll a student in the course.
    ///
    /// Self-enrollment (`user_id` of `"me"`) requires the course's
    /// enrollment code; domain administrators may omit it.
    pub async fn create(
        &self,
        user_id: &str,
        enrollment_code: Option<&str>,
    ) -> Result<Enrollment<Student>> {
        let body = Student {
            user_id: Some(user_id.to_string()),
            ..Default::default()
        };
        let config = RequestConfig::new()
            .query_opt("enrollmentCode", enrollment_code)
            .json(serde_json::to_value(&body)?);

        let result: Result<Student> = self
            .client
            .http
            .request_json(
                Method::POST,
                &format!("/v1/courses/{}/students", self.course_id),
                config,
            )
            .await;

        let outcome = Enrollment::from_result(result, user_id)?;
        if let Enrollment::Added(student) = &outcome {
            info!(
                "Enrolled student {} in course {}",
                student.user_id.as_deref().unwrap_or(user_id),
                self.course_id
            );
        }
        Ok(outcome)
    }
}
