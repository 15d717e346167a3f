//! Resource models for the education platform API
//!
//! Typed, serde-backed mirrors of the wire format. Every struct carries a
//! flattened `extra` map so fields this crate does not model survive a
//! get / modify / update round-trip untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, used for unknown-field overflow
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Courses
// ============================================================================

/// A course on the platform.
///
/// All fields are optional: create bodies carry only what the caller sets,
/// and responses carry whatever the server chose to include.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_heading: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// Identifier of the owner; `"me"` is accepted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_state: Option<CourseState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_link: Option<String>,

    /// Server fields this crate does not model
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Course {
    /// The course id, or `""` when the server omitted it
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// The display name, or `""` when the server omitted it
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Lifecycle state of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    #[default]
    CourseStateUnspecified,
    Active,
    Archived,
    Provisioned,
    Declined,
    Suspended,
}

impl CourseState {
    /// Wire-format name, used for query-string filters
    pub fn as_str(self) -> &'static str {
        match self {
            CourseState::CourseStateUnspecified => "COURSE_STATE_UNSPECIFIED",
            CourseState::Active => "ACTIVE",
            CourseState::Archived => "ARCHIVED",
            CourseState::Provisioned => "PROVISIONED",
            CourseState::Declined => "DECLINED",
            CourseState::Suspended => "SUSPENDED",
        }
    }
}

/// An alternative identifier attached to a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAlias {
    pub alias: String,
}

impl CourseAlias {
    /// Create an alias record
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

// ============================================================================
// Roster
// ============================================================================

/// A teacher membership in a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    /// Identifier or email address of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A student membership in a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    /// Identifier or email address of the user; `"me"` is accepted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Global user profile attached to roster entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl UserProfile {
    /// The full display name, or `""` when absent
    pub fn full_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.full_name.as_deref())
            .unwrap_or("")
    }
}

/// Structured name inside a [`UserProfile`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

// ============================================================================
// Coursework
// ============================================================================

/// An assignment or question posted to a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CourseWorkState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type: Option<CourseWorkType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_link: Option<String>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Lifecycle state of coursework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseWorkState {
    Published,
    Draft,
    Deleted,
}

/// Kind of coursework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseWorkType {
    Assignment,
    ShortAnswerQuestion,
    MultipleChoiceQuestion,
}

/// A material attached to coursework
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Material {
    /// A material pointing at a URL
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(Link {
                url: Some(url.into()),
                title: None,
            }),
            extra: JsonObject::new(),
        }
    }
}

/// A hyperlink material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ============================================================================
// Submissions
// ============================================================================

/// A student's submission for one piece of coursework
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_work_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SubmissionState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub late: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_grade: Option<f64>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Lifecycle state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionState {
    #[default]
    SubmissionStateUnspecified,
    New,
    Created,
    TurnedIn,
    Returned,
    ReclaimedByStudent,
}
