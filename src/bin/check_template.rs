use clap::Parser;
use colored::*;
use form_email_validator::template::{
    DEFAULT_TEMPLATE_PATH, default_checks, load_template, run_checks,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "check-template")]
#[command(about = "Checks the contact form template for required fragments")]
struct Args {
    /// Path to the HTML template
    #[arg(default_value = DEFAULT_TEMPLATE_PATH)]
    path: String,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let html = match load_template(&args.path) {
        Ok(html) => html,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {}", "✗".red(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format!("Checking {}", args.path).bold());
    println!();

    let report = run_checks(&html, &default_checks());
    for outcome in &report.outcomes {
        match &outcome.failure {
            None => println!("{} {}", "✓".green(), outcome.name),
            Some(reason) => {
                println!("{} {}", "✗".red(), outcome.name);
                println!("  {}", reason.red());
            }
        }
    }

    println!();
    println!("Total:  {}", report.total());
    println!("Passed: {}", report.passed().to_string().green());
    println!("Failed: {}", report.failed().to_string().red());

    if report.is_success() {
        println!("{}", "All checks passed".green().bold());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
