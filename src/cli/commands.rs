//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// edukit - classroom API client CLI
#[derive(Parser, Debug)]
#[command(name = "edukit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile file (YAML) with endpoint and token
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the access token (EDUKIT_ACCESS_TOKEN also works)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a course
    CreateCourse {
        /// Course name
        #[arg(long)]
        name: String,

        /// Section label
        #[arg(long)]
        section: Option<String>,

        /// Room label
        #[arg(long)]
        room: Option<String>,

        /// Course description
        #[arg(long)]
        description: Option<String>,

        /// Owner (id, email, or "me")
        #[arg(long, default_value = "me")]
        owner: String,

        /// Alias to register at creation (e.g. "d:school_math_101")
        #[arg(long)]
        alias: Option<String>,
    },

    /// Look up a course by id
    GetCourse {
        /// Course id
        id: String,
    },

    /// List every visible course
    ListCourses {
        /// Restrict to courses taught by this user
        #[arg(long)]
        teacher: Option<String>,

        /// Restrict to courses taken by this user
        #[arg(long)]
        student: Option<String>,
    },

    /// Update a course's section and room (full get-modify-update)
    UpdateCourse {
        /// Course id
        id: String,

        /// New section label
        #[arg(long)]
        section: String,

        /// New room label
        #[arg(long)]
        room: String,
    },

    /// Partially update a course's section and room
    PatchCourse {
        /// Course id
        id: String,

        /// New section label
        #[arg(long)]
        section: Option<String>,

        /// New room label
        #[arg(long)]
        room: Option<String>,
    },

    /// Attach an alias to an existing course
    AddAlias {
        /// Course id
        id: String,

        /// Alias (e.g. "d:school_math_101")
        alias: String,
    },

    /// Add a teacher to a course roster
    AddTeacher {
        /// Course id
        id: String,

        /// Teacher (id, email, or "me")
        teacher: String,
    },

    /// Enroll a student in a course
    AddStudent {
        /// Course id
        id: String,

        /// Student (id, email, or "me")
        #[arg(long, default_value = "me")]
        student: String,

        /// Enrollment code, required for self-enrollment
        #[arg(long)]
        enrollment_code: Option<String>,
    },

    /// Post an assignment to a course
    CreateWork {
        /// Course id
        id: String,

        /// Assignment title
        #[arg(long)]
        title: String,

        /// Assignment description
        #[arg(long)]
        description: Option<String>,

        /// Link materials (repeatable)
        #[arg(long = "link")]
        links: Vec<String>,
    },

    /// List student submissions for coursework
    ListSubmissions {
        /// Course id
        id: String,

        /// Coursework id, or "-" for all coursework
        #[arg(long, default_value = "-")]
        work: String,

        /// Restrict to one student (id, email, or "me")
        #[arg(long)]
        user: Option<String>,
    },
}
