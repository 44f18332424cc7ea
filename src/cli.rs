//! Command-line interface for discolor.

use clap::Parser;
use std::path::PathBuf;

/// Discolor - compose Discord ANSI colored-text blocks.
///
/// Reads styled markup (the editable surface's serialized content),
/// sanitizes it to the allowed vocabulary, and prints the fenced
/// ` ```ansi ` block Discord renders as colored text.
#[derive(Parser, Debug)]
#[command(
    name = "discolor",
    version,
    about = "Compose Discord ANSI colored-text blocks from styled markup",
    after_help = "Examples:\n  \
                  echo 'Hi <span class=\"ansi-31\">red</span>' | discolor\n  \
                  discolor message.html\n  \
                  discolor --copy message.html\n  \
                  discolor --palette"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print the bare escape-coded payload without fence markers
    #[arg(long = "raw")]
    pub raw: bool,

    /// Render escape characters as \x1b for inspection
    #[arg(long = "show-escapes")]
    pub show_escapes: bool,

    /// Also copy the output to the clipboard (OSC 52)
    #[arg(long = "copy")]
    pub copy: bool,

    /// Show the style palette legend and exit
    #[arg(long = "palette")]
    pub show_palette: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use discolor_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    println!("Config: {}", config_path);
}

/// Print the style palette legend.
///
/// Color rows render their own code so the legend doubles as a live
/// preview in terminals that understand 4-bit SGR.
pub fn show_palette(config: &discolor_config::Config) {
    println!("Text styles:");
    for swatch in &config.palette.styles {
        println!("  {:>2}  {}", swatch.code, swatch.name);
    }
    println!("Foreground colors:");
    for swatch in &config.palette.foreground {
        print_color_row(swatch);
    }
    println!("Background colors:");
    for swatch in &config.palette.background {
        print_color_row(swatch);
    }
}

fn print_color_row(swatch: &discolor_config::Swatch) {
    println!(
        "  {:>2}  \x1b[{}m{:<18}\x1b[0m {}",
        swatch.code,
        swatch.code,
        swatch.name,
        swatch.hex.as_deref().unwrap_or("")
    );
}
