//! Command-line interface for the ingredient tokenizer
//! Reads ingredient lines from a file or stdin and prints their tokens.
//!
//! Usage:
//!   ingredient-tokens `[path]` [--transform `<name>`] [--config `<file>`]  - Tokenize ingredient lines
//!   ingredient-tokens --list-transforms                                  - List all available transforms
//!
//! Without a path, or with `-`, lines are read from stdin.

mod transforms;

use clap::{Arg, ArgAction, Command};
use ingredient_config::{ConfigError, IngredientConfig, Loader};
use ingredient_tokenizer::ingredient::loader::{LineOptions, PhraseLoader};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("ingredient-tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and tokenize recipe ingredient lines")
        .arg(
            Arg::new("path")
                .help("File with one ingredient per line ('-' or absent for stdin)")
                .index(1),
        )
        .arg(
            Arg::new("transform")
                .long("transform")
                .short('t')
                .help("Transform to run (default from configuration: tokens-simple)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("transform"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config);

    // Reject unknown names before touching the input, stdin may never reach EOF
    if !transforms::is_available(&config.output.transform) {
        exit_with_transform_error(&format!("Unknown transform: {}", config.output.transform));
    }

    let path = matches.get_one::<String>("path").map(String::as_str);
    handle_tokenize_command(path, &config);
}

/// Load the embedded defaults, layered with the user's file and the command line
fn load_config(
    path: Option<&String>,
    transform: Option<&String>,
) -> Result<IngredientConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(transform) = transform {
        loader = loader.set_override("output.transform", transform.as_str())?;
    }
    loader.build()
}

/// Log to stderr; RUST_LOG wins over the configured level
fn init_tracing(config: &IngredientConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the tokenize command
fn handle_tokenize_command(path: Option<&str>, config: &IngredientConfig) {
    let loaded = match path {
        None | Some("-") => PhraseLoader::from_reader(std::io::stdin().lock()),
        Some(path) => PhraseLoader::from_path(path),
    };
    let loader = loaded
        .unwrap_or_else(|e| {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        })
        .with_options(LineOptions {
            skip_blank_lines: config.input.skip_blank_lines,
            trim: config.input.trim,
        });

    let transform = config.output.transform.as_str();
    tracing::debug!(transform, phrases = loader.phrases().len(), "tokenizing input");
    let output = transforms::execute_transform(&loader, transform, &config.output.separator)
        .unwrap_or_else(|e| exit_with_transform_error(&e));

    print!("{}", output);
}

/// Report a failed transform along with the ones that exist
fn exit_with_transform_error(message: &str) -> ! {
    eprintln!("Execution error: {}", message);
    eprintln!("\nAvailable transforms:");
    for (name, _) in transforms::AVAILABLE_TRANSFORMS {
        eprintln!("  {}", name);
    }
    std::process::exit(1);
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");

    for (name, description) in transforms::AVAILABLE_TRANSFORMS {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
