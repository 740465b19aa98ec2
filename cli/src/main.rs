use std::path::PathBuf;
use std::process::ExitCode;

use access::{Navigation, NewUser, RouteTable, SessionStore, messages};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

mod error;
mod http;
mod school;
mod storage;

use error::CliError;
use http::Backend;
use school::SchoolClient;
use storage::{FileStorage, default_session_file};


#[derive(Parser, Debug)]
#[command(name = "school-cli", about = "Course enrollment command-line client")]
struct Cli {
    #[arg(long, env = "SCHOOL_API_URL", default_value = access::api::DEFAULT_BASE_URL)]
    base_url: String,

    /// Where the signed-in session is kept.
    #[arg(long, env = "SCHOOL_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login {
        username: String,
        #[arg(long, env = "SCHOOL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored session.
    Logout,
    /// Show the stored session.
    Whoami,
    /// Create a student account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "SCHOOL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// List courses on offer.
    Courses,
    /// Enroll the signed-in user in a course.
    Enroll { course_id: i64 },
    /// Courses of the signed-in student.
    MyCourses,
    /// Students of the signed-in teacher.
    Students,
    /// All enrollments (manager).
    Enrollments,
    /// Evaluate the route gate for a client path.
    Route { path: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let storage = FileStorage::new(cli.session_file.unwrap_or_else(default_session_file));
    let backend = Backend::new(&cli.base_url)?;
    tracing::debug!(
        base_url = backend.base_url(),
        session_file = %storage.path().display(),
        "cli configured"
    );
    let client = SchoolClient::new(backend, SessionStore::new(storage));

    match cli.command {
        Command::Login { username, password } => {
            let session = client.login(&username, &password).await?;
            println!("signed in as {} ({})", session.display_name(), session.role);
        }
        Command::Logout => {
            client.logout().await?;
            println!("signed out");
        }
        Command::Whoami => match client.current() {
            Some(session) => print_json(&serde_json::to_value(session.user())?)?,
            None => return Err(CliError::Refused(messages::SIGN_IN_REQUIRED)),
        },
        Command::Register { name, username, password } => {
            client.register(&NewUser { name, username, password }).await?;
            println!("account created; sign in with `school-cli login`");
        }
        Command::Courses => print_json(&serde_json::to_value(client.courses().await?)?)?,
        Command::Enroll { course_id } => {
            client.enroll(course_id).await?;
            println!("{}", messages::ENROLLED);
        }
        Command::MyCourses => print_json(&serde_json::to_value(client.my_courses().await?)?)?,
        Command::Students => print_json(&serde_json::to_value(client.my_students().await?)?)?,
        Command::Enrollments => print_json(&serde_json::to_value(client.enrollments().await?)?)?,
        Command::Route { path } => {
            let navigation = RouteTable::standard().navigate(&path, client.current().as_ref());
            println!("{}", describe_navigation(&navigation));
        }
    }
    Ok(())
}

fn describe_navigation(navigation: &Navigation) -> String {
    match navigation {
        Navigation::Redirect(target) => format!("redirect {target}"),
        Navigation::Render { page, params } if params.is_empty() => format!("render {page:?}"),
        Navigation::Render { page, params } => {
            let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("render {page:?} {}", rendered.join(" "))
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
