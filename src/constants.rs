//! Common constants used throughout the mason application.

/// Suffix marking a file in the template directory as a template.
/// Stripping it yields the clean destination name.
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Subdirectory of the template root holding the per-file templates.
pub const DJANGO_FILES_DIR: &str = "django-files";

/// Subtrees copied wholesale from the selected theme variant.
pub const THEME_SUBTREES: [&str; 2] = ["media", "templates"];

/// Skeleton directories created under the project root before the copy
/// pass. Entries may contain placeholder tokens.
pub const SKELETON_DIRS: [&str; 4] = ["static", "apache", "%(PROJECT_NAME)s", "%(APP_NAME)s"];

/// Files inside the copied `templates/` subtree that get a whole-content
/// placeholder rewrite after the bulk theme copy.
pub const RETOUCH_TEMPLATES: [&str; 5] =
    ["base.html", "index.html", "template.html", "login.html", "500.html"];

/// Admin identity defaults, used when the environment provides no override.
pub const DEFAULT_ADMIN_NAME: &str = "Agent Smith";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Message used for the generated project's initial commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "first commit";

/// Fallback location of virtualenvwrapper.sh when it is not on PATH.
pub const VIRTUALENV_WRAPPER_FALLBACK: &str = "/usr/local/bin/virtualenvwrapper.sh";
