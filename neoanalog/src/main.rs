use clap::{Parser, Subcommand};
use neoanalog_lib::config::{DriftConfig, ExtractConfig};
use neoanalog_lib::drift::{check_class_string, LintRule};
use neoanalog_lib::generate::{drift_police, headless_map};
use std::path::PathBuf;
use std::process;

const NEOANALOG_INTRO: &str = r#"
     _   _                    _                _
    | \ | | ___  ___         / \   _ __   __ _| | ___   __ _
    |  \| |/ _ \/ _ \ _____ / _ \ | '_ \ / _` | |/ _ \ / _` |
    | |\  |  __/ (_) |_____/ ___ \| | | | (_| | | (_) | (_| |
    |_| \_|\___|\___/     /_/   \_\_| |_|\__,_|_|\___/ \__, |
                                                       |___/
    Neo-Analog design system governance
"#;

#[derive(Parser)]
#[command(name = "neoanalog")]
#[command(about = "Extract the headless design map and police design drift")]
struct Args {
    /// Project root that input.css, dist/ and the scanned sources live under.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write dist/headless-map.json from input.css (the default).
    Extract,
    /// Scan project sources for arbitrary values that bypass semantic classes.
    Drift,
    /// Check class strings against the lint rules.
    Lint {
        /// Class strings, e.g. "text-[14px] p-4".
        #[arg(required = true)]
        classes: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    println!("{}", NEOANALOG_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();
    log::debug!("project root: {}", args.root.display());

    let code = match args.command.unwrap_or(Command::Extract) {
        Command::Extract => extract(&ExtractConfig::for_project(&args.root)),
        Command::Drift => drift(&DriftConfig::for_project(&args.root)),
        Command::Lint { classes } => lint(&classes),
    };
    process::exit(code);
}

fn extract(config: &ExtractConfig) -> i32 {
    println!("🧠 Extracting Headless Design Logic...");

    match headless_map::generate(config) {
        Ok(summary) => {
            println!("✅ Headless Map generated at: {}", summary.output.display());
            println!("   Captured {} semantic classes.", summary.class_count);
            0
        }
        Err(e) => {
            eprintln!("❌ Error extracting headless map: {}", e);
            1
        }
    }
}

fn drift(config: &DriftConfig) -> i32 {
    println!("👮 Neo-Analog Drift Police: Scanning for semantic violations...");

    match drift_police::run(config) {
        Ok(report) => {
            println!("{}", report);
            if report.is_clean() {
                0
            } else {
                println!("   Refactor using 'AI_DESIGN_PROTOCOL.md' standards.");
                1
            }
        }
        Err(e) => {
            eprintln!("Error scanning project files: {}", e);
            1
        }
    }
}

/// Suggestions are printed but only arbitrary values fail the run.
fn lint(classes: &[String]) -> i32 {
    let mut errors = 0;
    for text in classes {
        for diagnostic in check_class_string(text) {
            println!("{:?}: {}", text, diagnostic);
            if diagnostic.rule == LintRule::NoArbitraryValues {
                errors += 1;
            }
        }
    }
    if errors == 0 {
        println!("✅ No arbitrary values.");
        0
    } else {
        println!("🚨 {} arbitrary values found.", errors);
        1
    }
}
