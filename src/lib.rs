//! mason is a Django project provisioning tool.
//! Given an output path and a set of feature flags it creates a new
//! project tree from a directory of template files, substitutes
//! placeholder values, layers in optional themes and add-on packages,
//! and initializes a git repository and virtualenv for the result.

/// Output tree assembly: skeleton directories, theme subtree copy and
/// the template retouch pass
pub mod assembler;

/// Template file classification against the static destination table
pub mod classifier;

/// Command-line interface module for the mason application
pub mod cli;

/// Feature flags and theme selection
pub mod config;

/// Common constants: marker suffix, directory names, fixed file lists
pub mod constants;

/// Replacement value resolution: derived names, generated secrets,
/// admin identity
pub mod context;

/// Error types and handling for the mason application
pub mod error;

/// Flag-gated content injection for optional add-on packages
pub mod injectors;

/// Core copy/substitute pass over the classified template files
pub mod processor;

/// Placeholder token substitution
pub mod render;

/// External collaborators: git, virtualenvwrapper, pip
pub mod tools;
