//! Feature flag handling for mason runs.
//! The flag set decides which template files are active, which content
//! injectors run, and which theme variant supplies the bulk assets.

use crate::cli::Args;

/// Optional features requested for the generated project.
///
/// Immutable after construction; `from_args` is the only place the
/// `batteries` bundle is expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFlags {
    /// Use Bootstrap as the template and media base
    pub bootstrap: bool,
    /// Use Foundation as the template and media base
    pub foundation: bool,
    /// Install py-bcrypt and make bcrypt the main password hasher
    pub bcrypt: bool,
    /// Install the Django Debug Toolbar
    pub debug: bool,
    /// Install Jinja2 and Coffin as the templating engine
    pub jinja2: bool,
}

impl FeatureFlags {
    /// Builds the flag set from parsed arguments, expanding the
    /// `--batteries` bundle into its component flags.
    pub fn from_args(args: &Args) -> Self {
        let mut flags = Self {
            bootstrap: args.bootstrap,
            foundation: args.foundation,
            bcrypt: args.bcrypt,
            debug: args.debug,
            jinja2: args.jinja2,
        };
        if args.batteries {
            flags.foundation = true;
            flags.jinja2 = true;
            flags.bcrypt = true;
            flags.debug = true;
        }
        flags
    }

    /// Resolves the theme variant for this flag set.
    pub fn theme(&self) -> Theme {
        Theme::select(self)
    }
}

/// Bulk-content variant for the `media` and `templates` subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Generic,
    Bootstrap,
    Foundation,
}

impl Theme {
    /// Picks exactly one variant. Bootstrap takes priority over
    /// Foundation when both flags are set.
    pub fn select(flags: &FeatureFlags) -> Self {
        if flags.bootstrap {
            Theme::Bootstrap
        } else if flags.foundation {
            Theme::Foundation
        } else {
            Theme::Generic
        }
    }

    /// Suffix of the theme's source directories (`media-<suffix>`,
    /// `templates-<suffix>`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Theme::Generic => "generic",
            Theme::Bootstrap => "bootstrap",
            Theme::Foundation => "foundation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_precedence() {
        let both = FeatureFlags { bootstrap: true, foundation: true, ..Default::default() };
        assert_eq!(Theme::select(&both), Theme::Bootstrap);

        let foundation = FeatureFlags { foundation: true, ..Default::default() };
        assert_eq!(Theme::select(&foundation), Theme::Foundation);

        let neither = FeatureFlags::default();
        assert_eq!(Theme::select(&neither), Theme::Generic);
    }
}
