use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// North Light — chat with the North Light answering service from a terminal.
#[derive(Parser, Debug)]
#[command(name = "northlight", version, about)]
pub struct Args {
    /// Which front-end to run.
    #[arg(short, long, value_enum, default_value_t = Mode::Playground)]
    pub mode: Mode,

    /// Answering service base URL (overrides `backend.base_url`).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Embedded chat bubble with a canned local reply.
    Widget,
    /// Full-page playground backed by the remote service.
    Playground,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_playground() {
        let args = Args::try_parse_from(["northlight"]).unwrap();
        assert_eq!(args.mode, Mode::Playground);
        assert!(args.base_url.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn parses_widget_mode_and_overrides() {
        let args = Args::try_parse_from([
            "northlight",
            "--mode",
            "widget",
            "--base-url",
            "https://abc.ngrok.io",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Widget);
        assert_eq!(args.base_url.as_deref(), Some("https://abc.ngrok.io"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["northlight", "--mode", "kiosk"]).is_err());
    }
}
