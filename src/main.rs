//! Discolor - compose Discord ANSI colored-text blocks.
//!
//! This binary drives the discolor library crates: it reads styled
//! markup from files or stdin, sanitizes it, serializes it to Discord's
//! escape-coded wire format, and prints the fenced block (optionally
//! copying it to the clipboard via OSC 52).

mod cli;
mod clipboard;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use discolor_ansi::{fenced, serialize};
use discolor_config::Config;
use discolor_editor::sanitize;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Discolor v{}", env!("CARGO_PKG_VERSION"));

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    // Load and merge configuration
    let config = load_config(cli);

    if let Err(e) = config.palette.validate() {
        error!("Invalid palette configuration: {}", e);
    }

    // Handle --palette flag
    if cli.show_palette {
        cli::show_palette(&config);
        return Ok(());
    }

    let raw = read_input(cli)?;
    debug!("Read {} bytes of markup", raw.len());

    let (tree, _) = sanitize(&raw, None);
    let payload = serialize(&tree);
    let output = if cli.raw {
        payload
    } else {
        fenced(&payload)
    };

    if cli.show_escapes {
        println!("{}", output.replace('\x1b', "\\x1b"));
    } else {
        println!("{}", output);
    }

    if cli.copy {
        write_clipboard(&config, &output);
    }

    Ok(())
}

/// Read markup input from files or stdin.
fn read_input(cli: &Cli) -> io::Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        let mut buf = String::new();
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            buf.push_str(&fs::read_to_string(path)?);
        }
        Ok(buf)
    }
}

/// Attempt the OSC 52 clipboard write, reporting failures visibly.
///
/// Failure is not retried; the serialized block was already printed, so
/// the user can still copy it by hand.
fn write_clipboard(config: &Config, output: &str) {
    if !config.features.clipboard {
        error!("Clipboard integration is disabled in the configuration");
        return;
    }
    if !clipboard::is_tty() {
        error!("Clipboard copy needs a terminal on stdout; output was not copied");
        return;
    }
    match clipboard::copy_to_clipboard(output, &mut io::stdout()) {
        Ok(()) => info!("Copied to clipboard"),
        Err(e) => error!("Clipboard copy failed: {}", e),
    }
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_default();

    // Apply config override if provided
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            // It's a file path
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    config
}
