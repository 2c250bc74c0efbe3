//! Shared fixtures: a minimal template root with django-files and the
//! three theme variants, plus a resolved context for a scratch project.
#![allow(dead_code)]

use mason::context::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANAGE_PY: &str = r#"#!/usr/bin/env python
import os
import sys

if __name__ == "__main__":
    os.environ.setdefault("DJANGO_SETTINGS_MODULE", "%(PROJECT_NAME)s.settings")
    from django.core.management import execute_from_command_line
    execute_from_command_line(sys.argv)
"#;

pub const SETTINGS_PY: &str = r#"# Django settings for %(PROJECT_NAME)s project.

DEBUG = True
TEMPLATE_DEBUG = DEBUG

ADMINS = (
    ('%(ADMIN_NAME)s', '%(ADMIN_EMAIL)s'),
)

SECRET_KEY = '%(SECRET_KEY)s'

ROOT_URLCONF = '%(PROJECT_NAME)s.urls'

INSTALLED_APPS = (
    'django.contrib.auth',
    'django.contrib.contenttypes',
    '%(APP_NAME)s',
)
"#;

pub const URLS_PY: &str = r#"from django.conf.urls.defaults import patterns, include, url

urlpatterns = patterns('',
    url(r'^', include('%(APP_NAME)s.urls')),
)
"#;

pub const APPURLS_PY: &str = r#"from django.conf.urls.defaults import patterns, url

urlpatterns = patterns('%(APP_NAME)s.views',
    url(r'^$', 'index'),
)
"#;

pub const MODELS_PY: &str = r#"from django.db import models


class Entry(models.Model):
    title = models.CharField(max_length=200)
"#;

pub const REQUIREMENTS_TXT: &str = "Django==1.4\npsycopg2\n";

pub const README_MD: &str = r#"# %(PROJECT_NAME_CAP)s

Setup:

    mkvirtualenv %(PROJECT_NAME)s # one-time setup
    pip install -r requirements.txt       # install deps
"#;

pub const JINJA2_PY: &str = r#"from jinja2 import Environment

env = Environment()
"#;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Builds a template root under `dir` with django-files and all three
/// theme variants. Theme files carry the variant name so tests can tell
/// which one was copied.
pub fn template_root(dir: &Path) -> PathBuf {
    let root = dir.join("skeleton");
    let django = root.join("django-files");

    write_file(&django.join("manage.py.in"), MANAGE_PY);
    write_file(&django.join("settings.py.in"), SETTINGS_PY);
    write_file(&django.join("urls.py.in"), URLS_PY);
    write_file(&django.join("appurls.py.in"), APPURLS_PY);
    write_file(&django.join("models.py.in"), MODELS_PY);
    write_file(&django.join("__init__.py.in"), "");
    write_file(&django.join("requirements.txt.in"), REQUIREMENTS_TXT);
    write_file(&django.join("README.md.in"), README_MD);
    write_file(&django.join("jinja2.py.in"), JINJA2_PY);

    for theme in ["generic", "bootstrap", "foundation"] {
        let templates = root.join(format!("templates-{}", theme));
        for name in ["base.html", "index.html", "template.html", "login.html", "500.html"] {
            write_file(
                &templates.join(name),
                &format!(
                    "<!-- {theme} -->\n{{% load static %}}\n<title>%(PROJECT_NAME_CAP)s</title>\n<h1>%(PROJECT_NAME)s</h1>\n"
                ),
            );
        }
        write_file(&root.join(format!("media-{}", theme)).join("css/style.css"), &format!("/* {theme} */\n"));
    }

    root
}

/// Resolves a context for `<dir>/blog_site` with a seeded rng.
pub fn blog_context(dir: &Path) -> Context {
    let mut rng = StdRng::seed_from_u64(7);
    let path = dir.join("blog_site");
    Context::resolve(path.to_str().unwrap(), None, None, &mut rng).unwrap()
}
