//! External collaborators: git, virtualenvwrapper and pip.
//! Each is invoked as a synchronous `bash -c` command with captured
//! output. Exit status is checked and failures surface as
//! `Error::Tool`; captured stdout is returned for progress display.

use crate::constants::{INITIAL_COMMIT_MESSAGE, VIRTUALENV_WRAPPER_FALLBACK};
use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;
use std::process::Command;

/// Runs a shell command to completion and returns its trimmed stdout.
///
/// # Errors
/// * `Error::Io` when the shell itself cannot be spawned
/// * `Error::Tool` when the command exits non-zero
pub fn run_shell(script: &str) -> Result<String> {
    debug!("Running: bash -c \"{}\"", script);
    let output = Command::new("bash").arg("-c").arg(script).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Tool {
            command: script.to_string(),
            details: if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates the project root as a git repository.
pub fn git_init(project_path: &str) -> Result<String> {
    run_shell(&format!("git init {}", project_path))
}

/// Stages and commits everything under the project root.
pub fn initial_commit(project_path: &str) -> Result<String> {
    run_shell(&format!(
        "cd {} && git add . && git commit -m '{}'",
        project_path, INITIAL_COMMIT_MESSAGE
    ))
}

/// Locates virtualenvwrapper.sh on PATH, falling back to its usual
/// install location.
pub fn virtualenv_wrapper() -> PathBuf {
    which::which("virtualenvwrapper.sh")
        .unwrap_or_else(|_| PathBuf::from(VIRTUALENV_WRAPPER_FALLBACK))
}

/// Creates a named virtualenv for the project.
pub fn make_virtualenv(project_name: &str) -> Result<String> {
    run_shell(&format!(
        "source {} && mkvirtualenv {}",
        virtualenv_wrapper().display(),
        project_name
    ))
}

/// Installs the project's requirements inside its virtualenv and
/// rewrites the manifest with the resolved versions.
pub fn install_requirements(project_name: &str, project_path: &str) -> Result<String> {
    run_shell(&format!(
        "source {} && workon {} && cd {} && pip install -r requirements.txt && pip freeze > requirements.txt",
        virtualenv_wrapper().display(),
        project_name,
        project_path
    ))
}
