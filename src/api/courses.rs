//! Course operations: create, get, list, update, patch, aliases

use super::Classroom;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::outcome::Fetched;
use crate::page::{fetch_all, Page};
use crate::types::{Course, CourseAlias, CourseState};
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

/// Filters for listing courses.
///
/// An empty request lists every course visible to the caller.
#[derive(Debug, Clone, Default)]
pub struct ListCoursesRequest {
    /// Restrict to courses with this student (id, email, or `"me"`)
    pub student_id: Option<String>,
    /// Restrict to courses with this teacher (id, email, or `"me"`)
    pub teacher_id: Option<String>,
    /// Restrict to courses in these states
    pub course_states: Vec<CourseState>,
    /// Per-page size override; the client default applies when unset
    pub page_size: Option<u32>,
}

impl ListCoursesRequest {
    /// List everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by student
    #[must_use]
    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Filter by teacher
    #[must_use]
    pub fn teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Filter by course state
    #[must_use]
    pub fn state(mut self, state: CourseState) -> Self {
        self.course_states.push(state);
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
struct CourseListResponse {
    #[serde(default)]
    courses: Vec<Course>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AliasListResponse {
    #[serde(default)]
    aliases: Vec<CourseAlias>,
    next_page_token: Option<String>,
}

/// Handle for the courses collection
#[derive(Debug)]
pub struct Courses<'a> {
    client: &'a Classroom,
}

impl<'a> Courses<'a> {
    pub(super) fn new(client: &'a Classroom) -> Self {
        Self { client }
    }

    /// Create a course.
    ///
    /// The `id` field of the body may carry a `d:`/`p:` prefixed alias,
    /// which registers the alias at creation time.
    pub async fn create(&self, course: &Course) -> Result<Course> {
        let config = RequestConfig::new().json(serde_json::to_value(course)?);
        let created: Course = self
            .client
            .http
            .request_json(Method::POST, "/v1/courses", config)
            .await?;
        info!("Created course {} ({})", created.name_str(), created.id_str());
        Ok(created)
    }

    /// Get a course by id, treating 404 as an ordinary absent outcome
    pub async fn get(&self, id: &str) -> Result<Fetched<Course>> {
        Fetched::from_result(self.get_required(id).await, id)
    }

    /// Get a course by id, propagating 404 as an error.
    ///
    /// Used where absence is a real failure, such as the read half of a
    /// get-modify-update cycle.
    pub async fn get_required(&self, id: &str) -> Result<Course> {
        self.client
            .http
            .get_json(&format!("/v1/courses/{id}"), RequestConfig::new())
            .await
    }

    /// List all courses matching the request, across every page
    pub async fn list(&self, request: &ListCoursesRequest) -> Result<Vec<Course>> {
        let page_size = request.page_size.unwrap_or(self.client.page_size);

        fetch_all(self.client.page_limit, |token| async move {
            let mut config = RequestConfig::new()
                .query("pageSize", page_size.to_string())
                .query_opt("studentId", request.student_id.clone())
                .query_opt("teacherId", request.teacher_id.clone());
            for state in &request.course_states {
                config = config.query("courseStates", state.as_str());
            }
            config = config.query_opt("pageToken", token);

            let response: CourseListResponse =
                self.client.http.get_json("/v1/courses", config).await?;
            Ok(Page::new(response.courses, response.next_page_token))
        })
        .await
    }

    /// Replace a course with a full body (PUT)
    pub async fn update(&self, id: &str, course: &Course) -> Result<Course> {
        let config = RequestConfig::new().json(serde_json::to_value(course)?);
        let updated: Course = self
            .client
            .http
            .request_json(Method::PUT, &format!("/v1/courses/{id}"), config)
            .await?;
        info!("Updated course {}", updated.name_str());
        Ok(updated)
    }

    /// Apply a partial update (PATCH) to the fields named in `update_mask`
    pub async fn patch(&self, id: &str, changes: &Course, update_mask: &[&str]) -> Result<Course> {
        let config = RequestConfig::new()
            .query("updateMask", update_mask.join(","))
            .json(serde_json::to_value(changes)?);
        self.client
            .http
            .request_json(Method::PATCH, &format!("/v1/courses/{id}"), config)
            .await
    }
}

/// Handle for one course's aliases
#[derive(Debug)]
pub struct Aliases<'a> {
    client: &'a Classroom,
    course_id: String,
}

impl<'a> Aliases<'a> {
    pub(super) fn new(client: &'a Classroom, course_id: String) -> Self {
        Self { client, course_id }
    }

    /// Attach an alias to the course
    pub async fn create(&self, alias: impl Into<String>) -> Result<CourseAlias> {
        let body = CourseAlias::new(alias);
        let config = RequestConfig::new().json(serde_json::to_value(&body)?);
        self.client
            .http
            .request_json(
                Method::POST,
                &format!("/v1/courses/{}/aliases", self.course_id),
                config,
            )
            .await
    }

    /// List every alias of the course, across every page
    pub async fn list(&self) -> Result<Vec<CourseAlias>> {
        let page_size = self.client.page_size;

        fetch_all(self.client.page_limit, |token| async move {
            let config = RequestConfig::new()
                .query("pageSize", page_size.to_string())
                .query_opt("pageToken", token);

            let response: AliasListResponse = self
                .client
                .http
                .get_json(&format!("/v1/courses/{}/aliases", self.course_id), config)
                .await?;
            Ok(Page::new(response.aliases, response.next_page_token))
        })
        .await
    }
}
