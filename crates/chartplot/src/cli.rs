// File: crates/chartplot/src/cli.rs
// Summary: Command-line arguments.

use std::path::PathBuf;

use chartplot_core::types::{HEIGHT, WIDTH};
use clap::{ArgAction, Parser};

pub const DEFAULT_OUTPUT: &str = "chart_plot.png";

#[derive(Parser, Debug)]
#[command(name = "chartplot", version, about = "Plot digitized chart data from JSON")]
pub struct Cli {
    /// Path to exported JSON file
    pub json_file: PathBuf,

    /// Output image file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(64..=16_384))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(64..=16_384))]
    pub height: i32,

    /// Color theme (light, dark, solarized-light, solarized-dark, high-contrast-dark)
    #[arg(long, env = "CHARTPLOT_THEME", default_value = "light")]
    pub theme: String,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["chartplot", "data.json"]).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!((cli.width, cli.height), (WIDTH, HEIGHT));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "chartplot", "data.json", "--output", "out.png", "--width", "1000", "--height", "600", "--theme", "dark", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!((cli.width, cli.height), (1000, 600));
        assert_eq!(cli.theme, "dark");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_tiny_sizes_and_missing_input() {
        assert!(Cli::try_parse_from(["chartplot", "data.json", "--width", "10"]).is_err());
        assert!(Cli::try_parse_from(["chartplot"]).is_err());
    }
}
