use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stylconv_ast::Root;
use stylconv_codegen::Target;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stylconv")]
#[command(about = "Convert Stylus syntax trees to SCSS, keeping the source layout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Stylus syntax tree (JSON dump of the parser output) to SCSS
    Convert {
        /// Input .json tree file
        path: String,

        /// Output dialect
        #[arg(long = "to", default_value = "scss")]
        target: String,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a tree file loads without converting it
    Check {
        /// Input .json tree file
        path: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stylconv=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            path,
            target,
            output,
        } => cmd_convert(&path, &target, output.as_deref()),
        Command::Check { path } => cmd_check(&path),
    }
}

/// Read a tree file, exiting with a message when it is missing or unreadable.
fn read_tree_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        match e.kind() {
            std::io::ErrorKind::NotFound => eprintln!("Error: tree file not found: {path}"),
            _ => eprintln!("Error: cannot read tree file {path}: {e}"),
        }
        std::process::exit(1)
    })
}

fn load_tree(path: &str) -> Root {
    let source = read_tree_file(path);
    tracing::debug!(path, bytes = source.len(), "loading tree");
    match Root::from_json(&source) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_convert(path: &str, target: &str, output: Option<&Path>) {
    let root = load_tree(path);
    let scss = stylconv_codegen::convert(&root, Target::from_name(target));

    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, &scss) {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            }
            eprintln!("Converted: {}", out_path.display());
        }
        None => println!("{scss}"),
    }
}

fn cmd_check(path: &str) {
    let root = load_tree(path);
    eprintln!("OK: {path} ({} top-level nodes)", root.nodes.len());
}
