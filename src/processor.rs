//! Core copy/substitute pass.
//! Reads each active template once and, for every destination subpath
//! pattern, substitutes placeholder tokens, applies the content
//! injectors and appends the result to the destination file.

use crate::classifier::TemplateFile;
use crate::config::FeatureFlags;
use crate::context::Context;
use crate::error::Result;
use crate::{injectors, render};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Copies every classified template to each of its destinations.
///
/// Destinations are opened in append mode so several sources may build
/// up one output file across calls. Destination directories must
/// already exist; a missing one surfaces as an IO error because
/// skeleton creation is the assembler's job and runs first.
pub fn copy_templates(
    files: &[TemplateFile],
    context: &Context,
    flags: &FeatureFlags,
) -> Result<()> {
    for file in files {
        debug!("Reading template: {}", file.source.display());
        let raw = fs::read_to_string(&file.source)?;

        for pattern in file.destinations {
            let directory = render::substitute(pattern, context.values());
            let target = context.root().join(&directory).join(&file.clean_name);
            let content = transform(&raw, &file.clean_name, context, flags);

            debug!("Writing file: {}", target.display());
            let mut dest = OpenOptions::new().append(true).create(true).open(&target)?;
            dest.write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

/// Transforms one template's raw content for a destination: placeholder
/// substitution, then the flag-gated injectors, then the unconditional
/// README comment justification.
pub fn transform(raw: &str, clean_name: &str, context: &Context, flags: &FeatureFlags) -> String {
    let content = render::substitute(raw, context.values());
    let content = injectors::apply_all(content, clean_name, flags, context.values());
    if clean_name == injectors::JUSTIFY_TARGET {
        injectors::justify(&content)
    } else {
        content
    }
}
