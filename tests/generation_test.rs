//! Full generation pass over a fixture template root, covering the
//! stages between name validation and the external tool invocations.

mod common;

use mason::assembler;
use mason::classifier::classify;
use mason::config::FeatureFlags;
use mason::processor::copy_templates;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn generate(flags: FeatureFlags) -> (TempDir, mason::context::Context) {
    let temp_dir = TempDir::new().unwrap();
    let root = common::template_root(temp_dir.path());
    let context = common::blog_context(temp_dir.path());

    fs::create_dir_all(context.root()).unwrap();
    assembler::create_skeleton(&context).unwrap();
    let files = classify(&root.join("django-files"), &flags).unwrap();
    copy_templates(&files, &context, &flags).unwrap();
    assembler::install_theme(&root, &context, flags.theme()).unwrap();
    assembler::retouch_templates(&context, &flags).unwrap();

    (temp_dir, context)
}

#[test]
fn test_default_run_layout() {
    let (_dir, context) = generate(FeatureFlags::default());

    assert!(context.root().join("manage.py").is_file());
    assert!(context.root().join("blog/settings.py").is_file());
    assert!(context.root().join("blog/urls.py").is_file());
    assert!(context.root().join("blog_app/models.py").is_file());

    // jinja2.py appears nowhere without its flag
    let jinja_copies = WalkDir::new(context.root())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() == "jinja2.py")
        .count();
    assert_eq!(jinja_copies, 0);

    let settings = fs::read_to_string(context.root().join("blog/settings.py")).unwrap();
    assert!(settings.contains(context.get("SECRET_KEY").unwrap()));
    assert!(!settings.contains("%(SECRET_KEY)s"));
}

#[test]
fn test_jinja2_run_places_engine_file() {
    let flags = FeatureFlags { jinja2: true, ..Default::default() };
    let (_dir, context) = generate(flags);

    assert!(context.root().join("blog/jinja2.py").is_file());

    let appurls = fs::read_to_string(context.root().join("blog_app/appurls.py")).unwrap();
    assert!(appurls.contains("from coffin.conf.urls.defaults import"));
    assert!(!appurls.contains("%(APP_NAME)s"));
}

#[test]
fn test_no_known_tokens_survive_anywhere() {
    let flags = FeatureFlags { foundation: true, bcrypt: true, debug: true, jinja2: true, ..Default::default() };
    let (_dir, context) = generate(flags);

    let keys = [
        "PROJECT_NAME",
        "PROJECT_NAME_CAP",
        "APP_NAME",
        "PROJECT_PASSWORD",
        "BASE_PATH",
        "SECRET_KEY",
        "PROJECT_PATH",
        "ADMIN_NAME",
        "ADMIN_EMAIL",
    ];
    for entry in WalkDir::new(context.root()).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let content = fs::read_to_string(entry.path()).unwrap();
        for key in keys {
            assert!(
                !content.contains(&format!("%({})s", key)),
                "unresolved {} token in {}",
                key,
                entry.path().display()
            );
        }
    }
}
