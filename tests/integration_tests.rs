//! Integration tests using a mock HTTP server
//!
//! Tests the full flow: client config → typed request → HTTP → typed
//! response, including pagination walks and the 404/409 recovery paths.

use edukit::{
    Classroom, ClientConfig, Course, CourseState, CourseWork, CourseWorkState, CourseWorkType,
    Enrollment, Error, Fetched, ListCoursesRequest, ListSubmissionsRequest, Material,
    ALL_COURSE_WORK,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Classroom {
    let config = ClientConfig {
        base_url: server.uri(),
        access_token: Some("test-token".to_string()),
        page_size: 2,
        max_pages: 50,
        ..Default::default()
    };
    Classroom::new(&config).unwrap()
}

fn error_body(code: u16, message: &str, status: &str) -> serde_json::Value {
    json!({"error": {"code": code, "message": message, "status": status}})
}

// ============================================================================
// Course CRUD
// ============================================================================

#[tokio::test]
async fn test_create_course() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "name": "10th Grade Biology",
            "ownerId": "me",
            "courseState": "PROVISIONED"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123456",
            "name": "10th Grade Biology",
            "courseState": "PROVISIONED"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let course = Course {
        name: Some("10th Grade Biology".to_string()),
        section: Some("Period 2".to_string()),
        owner_id: Some("me".to_string()),
        course_state: Some(CourseState::Provisioned),
        ..Default::default()
    };

    let created = classroom.courses().create(&course).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("123456"));
    assert_eq!(created.course_state, Some(CourseState::Provisioned));
}

#[tokio::test]
async fn test_get_course_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123456",
            "name": "Math 101"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    match classroom.courses().get("123456").await.unwrap() {
        Fetched::Found(course) => assert_eq!(course.name_str(), "Math 101"),
        Fetched::NotFound { id } => panic!("Course {id} should exist"),
    }
}

#[tokio::test]
async fn test_get_course_404_is_recovered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/999999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_body(404, "Requested entity was not found.", "NOT_FOUND")),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let outcome = classroom.courses().get("999999").await.unwrap();
    assert_eq!(
        outcome,
        Fetched::NotFound {
            id: "999999".to_string()
        }
    );
}

#[tokio::test]
async fn test_get_course_500_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_body(500, "Internal error", "INTERNAL")),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let err = classroom.courses().get("123456").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_update_course_round_trips_unknown_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123456",
            "name": "Math 101",
            "section": "Period 2",
            "room": "301",
            "guardiansEnabled": true
        })))
        .mount(&server)
        .await;

    // The PUT body must carry both the modified fields and the
    // unmodelled field fetched from the server
    Mock::given(method("PUT"))
        .and(path("/v1/courses/123456"))
        .and(body_partial_json(json!({
            "section": "Period 3",
            "room": "302",
            "guardiansEnabled": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123456",
            "name": "Math 101",
            "section": "Period 3",
            "room": "302"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let mut course = classroom.courses().get_required("123456").await.unwrap();
    course.section = Some("Period 3".to_string());
    course.room = Some("302".to_string());

    let updated = classroom.courses().update("123456", &course).await.unwrap();
    assert_eq!(updated.section.as_deref(), Some("Period 3"));
}

#[tokio::test]
async fn test_patch_course_sends_update_mask() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/courses/123456"))
        .and(query_param("updateMask", "section,room"))
        .and(body_partial_json(json!({
            "section": "Period 3",
            "room": "302"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123456",
            "name": "Math 101",
            "section": "Period 3",
            "room": "302"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let changes = Course {
        section: Some("Period 3".to_string()),
        room: Some("302".to_string()),
        ..Default::default()
    };

    let patched = classroom
        .courses()
        .patch("123456", &changes, &["section", "room"])
        .await
        .unwrap();
    assert_eq!(patched.room.as_deref(), Some("302"));
}

// ============================================================================
// Course listing (pagination)
// ============================================================================

#[tokio::test]
async fn test_list_courses_walks_all_pages_in_order() {
    let server = MockServer::start().await;

    // Page 1: no pageToken parameter
    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                {"id": "1", "name": "Algebra"},
                {"id": "2", "name": "Biology"}
            ],
            "nextPageToken": "tok-2"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Page 2
    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                {"id": "3", "name": "Chemistry"}
            ],
            "nextPageToken": "tok-3"
        })))
        .mount(&server)
        .await;

    // Page 3: final, no next token
    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("pageToken", "tok-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                {"id": "4", "name": "Drama"}
            ]
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let courses = classroom
        .courses()
        .list(&ListCoursesRequest::new())
        .await
        .unwrap();

    let ids: Vec<&str> = courses.iter().map(Course::id_str).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_list_courses_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                {"id": "1", "name": "Algebra"},
                {"id": "2", "name": "Biology"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let courses = classroom
        .courses()
        .list(&ListCoursesRequest::new())
        .await
        .unwrap();
    assert_eq!(courses.len(), 2);
}

#[tokio::test]
async fn test_list_courses_empty_collection() {
    let server = MockServer::start().await;

    // The service omits the `courses` key entirely when there is nothing
    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let courses = classroom
        .courses()
        .list(&ListCoursesRequest::new())
        .await
        .unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_list_courses_passes_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("teacherId", "alice@example.edu"))
        .and(query_param("courseStates", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "1", "name": "Algebra", "courseState": "ACTIVE"}]
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let request = ListCoursesRequest::new()
        .teacher("alice@example.edu")
        .state(CourseState::Active);
    let courses = classroom.courses().list(&request).await.unwrap();
    assert_eq!(courses.len(), 1);
}

#[tokio::test]
async fn test_list_courses_mid_walk_failure_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(error_body(503, "Try later", "UNAVAILABLE")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "1", "name": "Algebra"}],
            "nextPageToken": "tok-2"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let err = classroom
        .courses()
        .list(&ListCoursesRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_list_courses_page_limit_cuts_off_looping_server() {
    let server = MockServer::start().await;

    // Always hands back the same token: would loop forever unguarded
    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "1", "name": "Algebra"}],
            "nextPageToken": "again"
        })))
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        max_pages: 5,
        ..Default::default()
    };
    let classroom = Classroom::new(&config).unwrap();

    let err = classroom
        .courses()
        .list(&ListCoursesRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PageLimitExceeded { pages: 5 }));
}

// ============================================================================
// Aliases
// ============================================================================

#[tokio::test]
async fn test_add_alias_to_existing_course() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/aliases"))
        .and(body_partial_json(json!({"alias": "d:school_math_101"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"alias": "d:school_math_101"})),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let alias = classroom
        .aliases("123456")
        .create("d:school_math_101")
        .await
        .unwrap();
    assert_eq!(alias.alias, "d:school_math_101");
}

#[tokio::test]
async fn test_list_aliases() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456/aliases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "aliases": [{"alias": "d:school_math_101"}, {"alias": "p:2024_math"}]
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let aliases = classroom.aliases("123456").list().await.unwrap();
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases[0].alias, "d:school_math_101");
}

// ============================================================================
// Roster
// ============================================================================

#[tokio::test]
async fn test_add_teacher() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/teachers"))
        .and(body_partial_json(json!({"userId": "alice@example.edu"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courseId": "123456",
            "userId": "9876",
            "profile": {
                "id": "9876",
                "name": {"fullName": "Alice Jones"}
            }
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    match classroom
        .teachers("123456")
        .create("alice@example.edu")
        .await
        .unwrap()
    {
        Enrollment::Added(teacher) => {
            assert_eq!(teacher.profile.unwrap().full_name(), "Alice Jones");
        }
        Enrollment::AlreadyMember { user_id } => panic!("{user_id} should be new"),
    }
}

#[tokio::test]
async fn test_add_teacher_409_is_recovered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/teachers"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(error_body(409, "Requested entity already exists", "ALREADY_EXISTS")),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let outcome = classroom
        .teachers("123456")
        .create("alice@example.edu")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Enrollment::AlreadyMember {
            user_id: "alice@example.edu".to_string()
        }
    );
}

#[tokio::test]
async fn test_add_teacher_500_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/teachers"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_body(500, "Internal error", "INTERNAL")),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let err = classroom
        .teachers("123456")
        .create("alice@example.edu")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_add_student_with_enrollment_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/students"))
        .and(query_param("enrollmentCode", "abcdef"))
        .and(body_partial_json(json!({"userId": "me"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courseId": "123456",
            "userId": "5555",
            "profile": {"name": {"fullName": "Bob Stone"}}
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let outcome = classroom
        .students("123456")
        .create("me", Some("abcdef"))
        .await
        .unwrap();
    assert!(outcome.is_added());
}

#[tokio::test]
async fn test_add_student_409_is_recovered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/students"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(error_body(409, "Requested entity already exists", "ALREADY_EXISTS")),
        )
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let outcome = classroom
        .students("123456")
        .create("me", None)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Enrollment::AlreadyMember {
            user_id: "me".to_string()
        }
    );
}

// ============================================================================
// Coursework and submissions
// ============================================================================

#[tokio::test]
async fn test_create_coursework() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/courses/123456/courseWork"))
        .and(body_partial_json(json!({
            "title": "Ant colonies",
            "workType": "ASSIGNMENT",
            "state": "PUBLISHED",
            "materials": [
                {"link": {"url": "http://example.com/ant-colonies"}},
                {"link": {"url": "http://example.com/ant-quiz"}}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "654321",
            "courseId": "123456",
            "title": "Ant colonies"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let work = CourseWork {
        title: Some("Ant colonies".to_string()),
        description: Some("Read the article and complete the quiz.".to_string()),
        materials: vec![
            Material::link("http://example.com/ant-colonies"),
            Material::link("http://example.com/ant-quiz"),
        ],
        work_type: Some(CourseWorkType::Assignment),
        state: Some(CourseWorkState::Published),
        ..Default::default()
    };

    let created = classroom.course_work("123456").create(&work).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("654321"));
}

#[tokio::test]
async fn test_list_submissions_paginates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456/courseWork/654321/studentSubmissions"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studentSubmissions": [
                {"id": "sub-3", "creationTime": "2025-03-02T09:00:00Z"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456/courseWork/654321/studentSubmissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studentSubmissions": [
                {"id": "sub-1", "creationTime": "2025-03-01T12:30:00Z"},
                {"id": "sub-2", "creationTime": "2025-03-01T13:00:00Z"}
            ],
            "nextPageToken": "tok-2"
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let submissions = classroom
        .submissions("123456", "654321")
        .list(&ListSubmissionsRequest::new())
        .await
        .unwrap();

    let ids: Vec<&str> = submissions
        .iter()
        .map(|s| s.id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(ids, vec!["sub-1", "sub-2", "sub-3"]);
}

#[tokio::test]
async fn test_list_submissions_for_one_student_across_all_work() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456/courseWork/-/studentSubmissions"))
        .and(query_param("userId", "5555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studentSubmissions": [
                {"id": "sub-1", "courseWorkId": "654321"},
                {"id": "sub-9", "courseWorkId": "777777"}
            ]
        })))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let submissions = classroom
        .submissions("123456", ALL_COURSE_WORK)
        .list(&ListSubmissionsRequest::new().user("5555"))
        .await
        .unwrap();
    assert_eq!(submissions.len(), 2);
}

#[tokio::test]
async fn test_list_submissions_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/123456/courseWork/654321/studentSubmissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let classroom = client_for(&server);
    let submissions = classroom
        .submissions("123456", "654321")
        .list(&ListSubmissionsRequest::new())
        .await
        .unwrap();
    assert!(submissions.is_empty());
}
