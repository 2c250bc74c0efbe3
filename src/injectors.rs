//! Flag-gated content injection.
//! Each injector is a named, pure `(text, filename) -> text` transform
//! registered against a feature flag and an explicit set of target
//! filenames, applied in a fixed order: bcrypt, debug toolbar, Jinja2
//! swap, then the unconditional README comment justification.

use crate::config::FeatureFlags;
use crate::render;
use indexmap::IndexMap;

/// The one file whose trailing comments are re-justified on every run.
pub const JUSTIFY_TARGET: &str = "README.md";

/// Column trailing `#` comments are aligned to in the justified file.
const COMMENT_COLUMN: usize = 40;

/// A named conditional text transform.
pub struct Injector {
    pub name: &'static str,
    enabled: fn(&FeatureFlags) -> bool,
    targets: &'static [&'static str],
    /// Target filenames whose injected block introduces new placeholder
    /// tokens and must be re-substituted afterwards.
    resubstitutes: &'static [&'static str],
    transform: fn(&str, &str) -> String,
}

impl Injector {
    /// True when the gating flag is set and the filename is a target.
    pub fn applies(&self, flags: &FeatureFlags, filename: &str) -> bool {
        (self.enabled)(flags) && self.targets.contains(&filename)
    }

    pub fn transform(&self, content: &str, filename: &str) -> String {
        (self.transform)(content, filename)
    }

    pub fn needs_resubstitution(&self, filename: &str) -> bool {
        self.resubstitutes.contains(&filename)
    }
}

/// All flag-gated injectors, in application order.
pub const INJECTORS: [Injector; 3] = [
    Injector {
        name: "bcrypt",
        enabled: |flags| flags.bcrypt,
        targets: &["settings.py", "requirements.txt"],
        resubstitutes: &[],
        transform: bcryptify,
    },
    Injector {
        name: "debug-toolbar",
        enabled: |flags| flags.debug,
        targets: &["settings.py", "requirements.txt"],
        resubstitutes: &[],
        transform: debugify,
    },
    Injector {
        name: "jinja2",
        enabled: |flags| flags.jinja2,
        targets: &["settings.py", "requirements.txt", "appurls.py", "base.html"],
        resubstitutes: &["appurls.py"],
        transform: jinjaify,
    },
];

/// Runs every applicable injector over the content in declaration order,
/// re-substituting placeholders where an injected block requires it.
/// Injectors whose precondition is unmet are skipped silently.
pub fn apply_all(
    content: String,
    filename: &str,
    flags: &FeatureFlags,
    values: &IndexMap<&'static str, String>,
) -> String {
    let mut content = content;
    for injector in &INJECTORS {
        if injector.applies(flags, filename) {
            content = injector.transform(&content, filename);
            if injector.needs_resubstitution(filename) {
                content = render::substitute(&content, values);
            }
        }
    }
    content
}

const BCRYPT_SETTINGS: &str = "\
# bcrypt password hashing
PASSWORD_HASHERS = (
    'django.contrib.auth.hashers.BCryptPasswordHasher',
    'django.contrib.auth.hashers.PBKDF2PasswordHasher',
    'django.contrib.auth.hashers.PBKDF2SHA1PasswordHasher',
    'django.contrib.auth.hashers.SHA1PasswordHasher',
    'django.contrib.auth.hashers.MD5PasswordHasher',
    'django.contrib.auth.hashers.CryptPasswordHasher',
)
";

fn bcryptify(content: &str, filename: &str) -> String {
    match filename {
        "settings.py" => append_block(content, BCRYPT_SETTINGS),
        "requirements.txt" => append_line(content, "py-bcrypt"),
        _ => content.to_string(),
    }
}

const DEBUG_TOOLBAR_SETTINGS: &str = "\
# django-debug-toolbar
INSTALLED_APPS += ('debug_toolbar',)
MIDDLEWARE_CLASSES += ('debug_toolbar.middleware.DebugToolbarMiddleware',)
INTERNAL_IPS = ('127.0.0.1',)
DEBUG_TOOLBAR_CONFIG = {
    'INTERCEPT_REDIRECTS': False,
}
";

fn debugify(content: &str, filename: &str) -> String {
    match filename {
        "settings.py" => append_block(content, DEBUG_TOOLBAR_SETTINGS),
        "requirements.txt" => append_line(content, "django-debug-toolbar"),
        _ => content.to_string(),
    }
}

const JINJA2_SETTINGS: &str = "\
# Jinja2 templating via Coffin
JINJA2_TEMPLATE_LOADERS = (
    'django.template.loaders.filesystem.Loader',
    'django.template.loaders.app_directories.Loader',
)
JINJA2_DISABLED_APPS = ('admin',)
";

/// Appended to appurls.py; the app name token is resolved by the
/// re-substitution pass that follows this injector.
const JINJA2_APPURLS: &str = "\
# Jinja2 javascript catalog for %(APP_NAME)s
js_info_dict = {
    'packages': ('%(APP_NAME)s',),
}
";

fn jinjaify(content: &str, filename: &str) -> String {
    match filename {
        "settings.py" => append_block(content, JINJA2_SETTINGS),
        "requirements.txt" => {
            let content = append_line(content, "Jinja2");
            append_line(&content, "Coffin")
        }
        "appurls.py" => {
            // Coffin's url helpers understand both Django and Jinja2 views
            let swapped = content.replace(
                "from django.conf.urls.defaults import",
                "from coffin.conf.urls.defaults import",
            );
            append_block(&swapped, JINJA2_APPURLS)
        }
        // Django-only loader tags have no Jinja2 counterpart
        "base.html" => strip_load_tags(content),
        _ => content.to_string(),
    }
}

/// Re-aligns trailing `#` comments on command lines to a fixed column.
pub fn justify(content: &str) -> String {
    let justified: Vec<String> = content
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            match line.find(" #") {
                Some(split) => {
                    let code = line[..split].trim_end();
                    let comment = line[split..].trim_start();
                    if code.len() >= COMMENT_COLUMN {
                        format!("{} {}", code, comment)
                    } else {
                        format!("{:<width$}{}", code, comment, width = COMMENT_COLUMN)
                    }
                }
                None => line.to_string(),
            }
        })
        .collect();

    let mut result = justified.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    result
}

fn strip_load_tags(content: &str) -> String {
    let kept: Vec<&str> =
        content.lines().filter(|line| !line.trim_start().starts_with("{% load")).collect();
    let mut result = kept.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Appends a settings block, separated from the existing content by one
/// blank line.
fn append_block(content: &str, block: &str) -> String {
    let mut result = content.to_string();
    if !result.ends_with('\n') {
        result.push('\n');
    }
    result.push('\n');
    result.push_str(block);
    result
}

/// Appends a single line, for requirement manifests.
fn append_line(content: &str, line: &str) -> String {
    let mut result = content.to_string();
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(line);
    result.push('\n');
    result
}
