//! CLI runner - executes commands
//!
//! All user-facing printing lives here; the library itself never prints.

use crate::api::Classroom;
use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::outcome::{Enrollment, Fetched};
use crate::types::{Course, CourseState, CourseWork, CourseWorkState, CourseWorkType, Material};
use crate::{ListCoursesRequest, ListSubmissionsRequest};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let classroom = self.build_client()?;

        match &self.cli.command {
            Commands::CreateCourse {
                name,
                section,
                room,
                description,
                owner,
                alias,
            } => {
                let course = Course {
                    id: alias.clone(),
                    name: Some(name.clone()),
                    section: section.clone(),
                    room: room.clone(),
                    description: description.clone(),
                    owner_id: Some(owner.clone()),
                    course_state: Some(CourseState::Provisioned),
                    ..Default::default()
                };
                let created = classroom.courses().create(&course).await?;
                println!("Course created: {} {}", created.name_str(), created.id_str());
            }

            Commands::GetCourse { id } => match classroom.courses().get(id).await? {
                Fetched::Found(course) => {
                    println!("Course \"{}\" found.", course.name_str());
                }
                Fetched::NotFound { id } => {
                    println!("Course with ID \"{id}\" not found.");
                }
            },

            Commands::ListCourses { teacher, student } => {
                let mut request = ListCoursesRequest::new();
                if let Some(teacher) = teacher {
                    request = request.teacher(teacher);
                }
                if let Some(student) = student {
                    request = request.student(student);
                }

                let courses = classroom.courses().list(&request).await?;
                if courses.is_empty() {
                    println!("No courses found.");
                } else {
                    println!("Courses:");
                    for course in &courses {
                        println!("{} {}", course.name_str(), course.id_str());
                    }
                }
            }

            Commands::UpdateCourse { id, section, room } => {
                let mut course = classroom.courses().get_required(id).await?;
                course.section = Some(section.clone());
                course.room = Some(room.clone());
                let updated = classroom.courses().update(id, &course).await?;
                println!("Course {} updated.", updated.name_str());
            }

            Commands::PatchCourse { id, section, room } => {
                let mut changes = Course::default();
                let mut mask = Vec::new();
                if let Some(section) = section {
                    changes.section = Some(section.clone());
                    mask.push("section");
                }
                if let Some(room) = room {
                    changes.room = Some(room.clone());
                    mask.push("room");
                }
                if mask.is_empty() {
                    println!("Nothing to update.");
                    return Ok(());
                }
                let patched = classroom.courses().patch(id, &changes, &mask).await?;
                println!("Course \"{}\" updated.", patched.name_str());
            }

            Commands::AddAlias { id, alias } => {
                let created = classroom.aliases(id.clone()).create(alias.clone()).await?;
                println!("Alias \"{}\" created.", created.alias);
            }

            Commands::AddTeacher { id, teacher } => {
                match classroom.teachers(id.clone()).create(teacher).await? {
                    Enrollment::Added(added) => {
                        let name = added
                            .profile
                            .as_ref()
                            .map(|p| p.full_name().to_string())
                            .filter(|n| !n.is_empty())
                            .unwrap_or_else(|| teacher.clone());
                        println!(
                            "User {name} was added as a teacher to the course with ID {id}"
                        );
                    }
                    Enrollment::AlreadyMember { user_id } => {
                        println!("User \"{user_id}\" is already a member of this course.");
                    }
                }
            }

            Commands::AddStudent {
                id,
                student,
                enrollment_code,
            } => {
                match classroom
                    .students(id.clone())
                    .create(student, enrollment_code.as_deref())
                    .await?
                {
                    Enrollment::Added(added) => {
                        let name = added
                            .profile
                            .as_ref()
                            .map(|p| p.full_name().to_string())
                            .filter(|n| !n.is_empty())
                            .unwrap_or_else(|| student.clone());
                        println!(
                            "User {name} was enrolled as a student in the course with ID \"{id}\""
                        );
                    }
                    Enrollment::AlreadyMember { .. } => {
                        println!("You are already a member of this course.");
                    }
                }
            }

            Commands::CreateWork {
                id,
                title,
                description,
                links,
            } => {
                let work = CourseWork {
                    title: Some(title.clone()),
                    description: description.clone(),
                    materials: links.iter().map(|url| Material::link(url.as_str())).collect(),
                    work_type: Some(CourseWorkType::Assignment),
                    state: Some(CourseWorkState::Published),
                    ..Default::default()
                };
                let created = classroom.course_work(id.clone()).create(&work).await?;
                println!(
                    "Assignment created with ID {}",
                    created.id.as_deref().unwrap_or("")
                );
            }

            Commands::ListSubmissions { id, work, user } => {
                let mut request = ListSubmissionsRequest::new();
                if let Some(user) = user {
                    request = request.user(user);
                }

                let submissions = classroom
                    .submissions(id.clone(), work.clone())
                    .list(&request)
                    .await?;
                if submissions.is_empty() {
                    println!("No student submissions found.");
                } else {
                    println!("Student Submissions:");
                    for submission in &submissions {
                        let when = submission
                            .creation_time
                            .map(|t| t.to_rfc3339())
                            .unwrap_or_default();
                        println!(
                            "{} was submitted at {}",
                            submission.id.as_deref().unwrap_or(""),
                            when
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Assemble the client config from profile file, env, and flags
    fn build_client(&self) -> Result<Classroom> {
        let mut config = match &self.cli.profile {
            Some(path) => ClientConfig::from_yaml_file(path)?,
            None => ClientConfig::default(),
        };

        config.apply_env();

        if let Some(base_url) = &self.cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(token) = &self.cli.token {
            config.access_token = Some(token.clone());
        }

        Classroom::new(&config)
    }
}
