//! Coursework operations: posting assignments and listing submissions

use super::Classroom;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::page::{fetch_all, Page};
use crate::types::{CourseWork, StudentSubmission};
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

/// Course-work id wildcard: submissions across all coursework of a course
pub const ALL_COURSE_WORK: &str = "-";

/// Filters for listing student submissions
#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsRequest {
    /// Restrict to one student (id, email, or `"me"`)
    pub user_id: Option<String>,
    /// Per-page size override; the client default applies when unset
    pub page_size: Option<u32>,
}

impl ListSubmissionsRequest {
    /// List everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by student
    #[must_use]
    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Override the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionListResponse {
    #[serde(default)]
    student_submissions: Vec<StudentSubmission>,
    next_page_token: Option<String>,
}

/// Handle for one course's coursework collection
#[derive(Debug)]
pub struct CourseWorkApi<'a> {
    client: &'a Classroom,
    course_id: String,
}

impl<'a> CourseWorkApi<'a> {
    pub(super) fn new(client: &'a Classroom, course_id: String) -> Self {
        Self { client, course_id }
    }

    /// Post coursework to the course
    pub async fn create(&self, work: &CourseWork) -> Result<CourseWork> {
        let config = RequestConfig::new().json(serde_json::to_value(work)?);
        let created: CourseWork = self
            .client
            .http
            .request_json(
                Method::POST,
                &format!("/v1/courses/{}/courseWork", self.course_id),
                config,
            )
            .await?;
        info!(
            "Created coursework {} in course {}",
            created.id.as_deref().unwrap_or(""),
            self.course_id
        );
        Ok(created)
    }
}

/// Handle for the submissions of one piece of coursework
#[derive(Debug)]
pub struct Submissions<'a> {
    client: &'a Classroom,
    course_id: String,
    course_work_id: String,
}

impl<'a> Submissions<'a> {
    pub(super) fn new(client: &'a Classroom, course_id: String, course_work_id: String) -> Self {
        Self {
            client,
            course_id,
            course_work_id,
        }
    }

    /// List all submissions matching the request, across every page
    pub async fn list(&self, request: &ListSubmissionsRequest) -> Result<Vec<StudentSubmission>> {
        let page_size = request.page_size.unwrap_or(self.client.page_size);
        let path = format!(
            "/v1/courses/{}/courseWork/{}/studentSubmissions",
            self.course_id, self.course_work_id
        );
        let path = path.as_str();

        fetch_all(self.client.page_limit, |token| async move {
            let config = RequestConfig::new()
                .query("pageSize", page_size.to_string())
                .query_opt("userId", request.user_id.clone())
                .query_opt("pageToken", token);

            let response: SubmissionListResponse =
                self.client.http.get_json(path, config).await?;
            Ok(Page::new(
                response.student_submissions,
                response.next_page_token,
            ))
        })
        .await
    }
}
