//! Command-line interface implementation for mason.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for mason.
#[derive(Parser, Debug)]
#[command(author, version, about = "mason: Django project provisioning tool", long_about = None)]
pub struct Args {
    /// Where the new Django project should be made, including the
    /// project name at the end (e.g. /home/username/code/project_name)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Quiet all output except the finish message
    #[arg(short, long)]
    pub quiet: bool,

    /// Include Bootstrap as the template and media base of the project
    #[arg(long)]
    pub bootstrap: bool,

    /// Include Foundation as the template and media base of the project
    #[arg(long)]
    pub foundation: bool,

    /// Install py-bcrypt and use bcrypt as the main password hashing
    /// for the project
    #[arg(long)]
    pub bcrypt: bool,

    /// Install the Django Debug Toolbar package for the project
    #[arg(long)]
    pub debug: bool,

    /// Install Jinja2 and Coffin as the default templating engine of
    /// the project
    #[arg(long)]
    pub jinja2: bool,

    /// Bundle flag: enables Foundation, Jinja2, bcrypt and the Debug
    /// Toolbar in one go
    #[arg(long)]
    pub batteries: bool,

    /// Directory holding the django-files templates and theme subtrees.
    /// Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub template_root: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
