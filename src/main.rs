//! mason's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the provisioning flow, and
//! coordinates interactions between different modules.

use std::path::PathBuf;

use mason::{
    assembler,
    classifier,
    cli::{get_args, Args},
    config::FeatureFlags,
    constants::DJANGO_FILES_DIR,
    context::Context,
    error::{default_error_handler, Result},
    processor, tools,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration; progress output goes to stdout separately
    env_logger::init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the replacement value set (aborts on an invalid name
///    before anything touches the filesystem)
/// 2. git-inits the project root and creates the skeleton directories
/// 3. Classifies and copies the per-file templates
/// 4. Copies the selected theme's bulk subtrees and retouches them
/// 5. Creates the virtualenv and installs requirements
/// 6. Stages and commits the generated tree
fn run(args: Args) -> Result<()> {
    let flags = FeatureFlags::from_args(&args);
    let template_root = args.template_root.clone().unwrap_or_else(|| PathBuf::from("."));

    let admin_name = std::env::var("ADMIN_NAME").ok();
    let admin_email = std::env::var("ADMIN_EMAIL").ok();

    let mut rng = rand::rng();
    let context = Context::resolve(&args.path, admin_name, admin_email, &mut rng)?;

    report(&args, "Creating directories...");
    let output = tools::git_init(&context.project_path)?;
    report(&args, &output);
    assembler::create_skeleton(&context)?;

    report(&args, "Creating django files...");
    let files = classifier::classify(&template_root.join(DJANGO_FILES_DIR), &flags)?;
    processor::copy_templates(&files, &context, &flags)?;

    report(&args, "Copying directories...");
    assembler::install_theme(&template_root, &context, flags.theme())?;
    assembler::retouch_templates(&context, &flags)?;

    report(&args, "Making virtualenv...");
    let output = tools::make_virtualenv(&context.project_name)?;
    report(&args, &output);

    report(
        &args,
        "Running 'pip install -r requirements.txt'. This could take a while... (don't press control-c!)",
    );
    let output = tools::install_requirements(&context.project_name, &context.project_path)?;
    report(&args, &output);

    report(&args, "Creating git repo...");
    let output = tools::initial_commit(&context.project_path)?;
    report(&args, &output);

    // The finish message prints even in quiet mode
    println!("\nDone! Now run\n");
    println!(
        "    cd {} && workon {} && python manage.py syncdb\n",
        context.project_path, context.project_name
    );
    println!("Get to work!");
    Ok(())
}

/// Prints a progress message unless quiet mode is set.
fn report(args: &Args, message: &str) {
    if !args.quiet && !message.is_empty() {
        println!("{}", message);
    }
}
