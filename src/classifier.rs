//! Template file classification.
//! Scans the django-files directory for template files, derives each
//! one's clean destination name, drops files whose feature flag is off,
//! and resolves the static destination table.

use crate::config::FeatureFlags;
use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// One active template file: where it comes from, what it is called
/// after the marker suffix is stripped, and the destination subpath
/// patterns it must be materialized under.
#[derive(Debug)]
pub struct TemplateFile {
    pub source: PathBuf,
    pub clean_name: String,
    pub destinations: &'static [&'static str],
}

/// Maps clean filenames to where each file should be copied relative to
/// the project root. Patterns may contain placeholder tokens. Adding an
/// optional feature means adding entries here, not editing call sites.
const DESTINATIONS: &[(&str, &[&str])] = &[
    (".gitignore", &[""]),
    ("__init__.py", &["%(PROJECT_NAME)s/", "%(APP_NAME)s/"]),
    ("admin.py", &["%(APP_NAME)s/"]),
    ("appurls.py", &["%(APP_NAME)s/"]),
    ("django.wsgi", &["apache/"]),
    ("forms.py", &["%(APP_NAME)s/"]),
    ("jinja2.py", &["%(PROJECT_NAME)s/"]),
    ("manage.py", &[""]),
    ("model_forms.py", &["%(APP_NAME)s/"]),
    ("models.py", &["%(APP_NAME)s/"]),
    ("notes.txt", &[""]),
    ("README.md", &[""]),
    ("requirements.txt", &[""]),
    ("settings.py", &["%(PROJECT_NAME)s/"]),
    ("settings_local.py", &["%(PROJECT_NAME)s/"]),
    ("tests.py", &["%(APP_NAME)s/"]),
    ("urls.py", &["%(PROJECT_NAME)s/"]),
    ("views.py", &["%(APP_NAME)s/"]),
    ("wsgi.py", &["%(PROJECT_NAME)s/"]),
];

/// Looks up the destination subpath patterns for a clean filename.
///
/// # Errors
/// * `Error::Config` when the name has no table entry. This means the
///   shipped template set and the table disagree and is not
///   user-recoverable.
pub fn destinations(clean_name: &str) -> Result<&'static [&'static str]> {
    DESTINATIONS
        .iter()
        .find(|(name, _)| *name == clean_name)
        .map(|(_, dirs)| *dirs)
        .ok_or_else(|| {
            Error::Config(format!("template '{}' has no destination table entry", clean_name))
        })
}

/// Lists the active template files for the current flag set.
///
/// Only directory entries ending in the template marker are considered;
/// the listing is sorted so the result is deterministic within a run.
pub fn classify(django_files: &Path, flags: &FeatureFlags) -> Result<Vec<TemplateFile>> {
    let mut raw_names = Vec::new();
    for entry in fs::read_dir(django_files)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(TEMPLATE_SUFFIX) {
            raw_names.push(file_name);
        }
    }
    raw_names.sort();

    let mut files = Vec::new();
    for raw_name in raw_names {
        let clean_name = match raw_name.strip_suffix(TEMPLATE_SUFFIX) {
            Some(clean) => clean.to_string(),
            None => continue,
        };
        if !is_active(&clean_name, flags) {
            debug!("Skipping inactive template: {}", raw_name);
            continue;
        }
        files.push(TemplateFile {
            source: django_files.join(&raw_name),
            destinations: destinations(&clean_name)?,
            clean_name,
        });
    }
    Ok(files)
}

/// Clean names gated by an optional feature flag.
fn is_active(clean_name: &str, flags: &FeatureFlags) -> bool {
    match clean_name {
        "jinja2.py" => flags.jinja2,
        _ => true,
    }
}
