//! Replacement value resolution for a mason run.
//! Derives the project, app and base names from the requested output path,
//! generates the secret key and project password, and applies admin
//! identity defaults. Computed once per run; immutable afterwards.

use crate::constants::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use rand::Rng;
use regex::Regex;
use std::path::Path;

/// Characters the generated secret key is drawn from: digits, ASCII
/// letters and punctuation, minus the single quote so the value can sit
/// inside a quoted Python string.
pub const SECRET_KEY_CHARSET: &str = r##"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!"#$%&()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters the generated project password is drawn from.
pub const PROJECT_PASSWORD_CHARSET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const SECRET_KEY_LENGTH: usize = 50;
pub const PROJECT_PASSWORD_LENGTH: usize = 30;

/// The resolved replacement value set for one run.
///
/// `values` holds every key a `%(KEY)s` token may reference; the named
/// fields exist for the few values the orchestration itself needs.
#[derive(Debug)]
pub struct Context {
    /// Derived project name (path component, truncated at the first `_`)
    pub project_name: String,
    /// Project name with a fixed `_app` suffix
    pub app_name: String,
    /// Normalized output path, always with a trailing separator
    pub project_path: String,
    values: IndexMap<&'static str, String>,
}

impl Context {
    /// Resolves the full value set from the raw output path.
    ///
    /// `admin_name` / `admin_email` are environment-provided overrides;
    /// the randomness source is injected so tests can seed it.
    ///
    /// # Errors
    /// * `Error::Validation` when the derived project name is not a
    ///   valid Python identifier. Nothing has touched the filesystem at
    ///   that point.
    pub fn resolve<R: Rng>(
        raw_path: &str,
        admin_name: Option<String>,
        admin_email: Option<String>,
        rng: &mut R,
    ) -> Result<Self> {
        // Trailing separator may be included or excluded up to this point
        let project_path = format!("{}/", raw_path.trim_end_matches('/'));
        let parts: Vec<&str> = project_path.split('/').collect();
        let component = parts[parts.len() - 2];
        let project_name = component.split('_').next().unwrap_or_default().to_string();
        validate_project_name(&project_name)?;

        let app_name = format!("{}_app", project_name);
        let base_path = format!("{}/", parts[..parts.len() - 2].join("/"));

        let secret_key = random_string(rng, SECRET_KEY_CHARSET, SECRET_KEY_LENGTH);
        let project_password =
            random_string(rng, PROJECT_PASSWORD_CHARSET, PROJECT_PASSWORD_LENGTH);

        let mut values = IndexMap::new();
        values.insert("PROJECT_NAME", project_name.clone());
        values.insert("PROJECT_NAME_CAP", capitalize(&project_name));
        values.insert("APP_NAME", app_name.clone());
        values.insert("PROJECT_PASSWORD", project_password);
        values.insert("BASE_PATH", base_path);
        values.insert("SECRET_KEY", secret_key);
        values.insert("PROJECT_PATH", project_path.clone());
        values.insert("ADMIN_NAME", admin_name.unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()));
        values
            .insert("ADMIN_EMAIL", admin_email.unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()));

        Ok(Self { project_name, app_name, project_path, values })
    }

    /// The full replacement value set, in insertion order.
    pub fn values(&self) -> &IndexMap<&'static str, String> {
        &self.values
    }

    /// Looks up a single replacement value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The project root as a path.
    pub fn root(&self) -> &Path {
        Path::new(&self.project_path)
    }
}

/// Checks the derived name against Django's module-name restrictions.
pub fn validate_project_name(name: &str) -> Result<()> {
    let valid = Regex::new(r"^[_a-zA-Z]\w*$").expect("static pattern");
    if valid.is_match(name) {
        return Ok(());
    }

    let starts_ok = Regex::new(r"^[_a-zA-Z]").expect("static pattern");
    let reason = if !starts_ok.is_match(name) {
        "make sure the name begins with a letter or underscore"
    } else {
        "use only numbers, letters and underscores"
    };
    Err(Error::Validation(format!("'{}' is not a valid project name. Please {}.", name, reason)))
}

fn random_string<R: Rng>(rng: &mut R, charset: &str, length: usize) -> String {
    let pool: Vec<char> = charset.chars().collect();
    (0..length).map(|_| pool[rng.random_range(0..pool.len())]).collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
