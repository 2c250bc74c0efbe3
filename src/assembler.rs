//! Output tree assembly.
//! Creates the directory skeleton under the git-initialized project
//! root, copies the selected theme's bulk subtrees wholesale, and
//! re-runs placeholder substitution over the fixed list of copied
//! template files.

use crate::config::{FeatureFlags, Theme};
use crate::constants::{RETOUCH_TEMPLATES, SKELETON_DIRS, THEME_SUBTREES};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::{injectors, render};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Creates the fixed skeleton directories under the project root.
/// Placeholder-bearing names are resolved first. The root itself must
/// already exist (git init creates it).
pub fn create_skeleton(context: &Context) -> Result<()> {
    for dir_name in SKELETON_DIRS {
        let resolved = render::substitute(dir_name, context.values());
        debug!("Creating directory: {}", resolved);
        fs::create_dir(context.root().join(resolved))?;
    }
    Ok(())
}

/// Copies the chosen theme's `media` and `templates` source subtrees
/// into the project tree in full.
pub fn install_theme(template_root: &Path, context: &Context, theme: Theme) -> Result<()> {
    for subtree in THEME_SUBTREES {
        let source = template_root.join(format!("{}-{}", subtree, theme.suffix()));
        let target = context.root().join(subtree);
        debug!("Copying {} -> {}", source.display(), target.display());
        copy_tree(&source, &target)?;
    }
    Ok(())
}

/// Rewrites the fixed list of copied template files, replacing every
/// known placeholder token. When the Bootstrap theme was chosen the
/// flag-gated injectors run over these files as well.
pub fn retouch_templates(context: &Context, flags: &FeatureFlags) -> Result<()> {
    let templates_dir = context.root().join("templates");
    let inject = flags.theme() == Theme::Bootstrap;

    for name in RETOUCH_TEMPLATES {
        let path = templates_dir.join(name);
        debug!("Retouching template: {}", path.display());

        let raw = fs::read_to_string(&path)?;
        let mut content = render::substitute(&raw, context.values());
        if inject {
            content = injectors::apply_all(content, name, flags, context.values());
        }
        fs::write(&path, content)?;
    }
    Ok(())
}

fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::Config(e.to_string()))?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
