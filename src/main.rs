use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nativecn")]
#[command(version)]
#[command(
    about = "Install nativecn UI component source into your project",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default nativecn.config.toml in the current directory
    #[clap(visible_alias = "i")]
    Init,
    /// Copy one or more components into the project
    #[clap(visible_alias = "a")]
    Add {
        /// Component names, e.g. button alert
        #[arg(required = true)]
        components: Vec<String>,
        /// Directory the component folders are created under
        #[arg(long, default_value = "components/ui")]
        dir: PathBuf,
        /// Replace an existing installation (discards local edits)
        #[arg(long)]
        overwrite: bool,
        /// Stop at the first failed component instead of continuing
        #[arg(long)]
        fail_fast: bool,
    },
    /// List the components available in this release
    #[clap(visible_alias = "ls")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            if let Err(e) = nativecn::init_config() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Add { components, dir, overwrite, fail_fast } => {
            add_all(&components, &dir, overwrite, fail_fast);
        }
        Commands::List => {
            for name in nativecn::components() {
                println!("{name}");
            }
        }
    }
}

/// Install each component in argument order. Skips are success; a failed
/// item is reported and the batch continues unless `fail_fast` is set.
/// Exits non-zero when any item failed.
fn add_all(components: &[String], dir: &Path, overwrite: bool, fail_fast: bool) {
    let mut failures = 0usize;

    for component in components {
        if let Err(e) = nativecn::add(component, dir, overwrite) {
            eprintln!("Error: {}", e);
            failures += 1;
            if fail_fast {
                break;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
