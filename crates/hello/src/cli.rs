//! Command-line interface definitions

use clap::Parser;

/// Version string with the build date embedded at build time
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("HELLO_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(about = "Print a banner, host facts, the current time and project info", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Locale for the weekday name (e.g. "ja_JP", "de_DE.UTF-8")
    #[arg(long, value_name = "LOCALE", default_value = "en_US")]
    pub locale: String,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_defaults() {
        let cli = Cli::try_parse_from(["hello"]).unwrap();
        assert!(!cli.json);
        assert!(!cli.no_color);
        assert!(!cli.verbose);
        assert_eq!(cli.locale, "en_US");
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["hello", "--json", "--locale", "ja_JP", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.locale, "ja_JP");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["hello", "--bogus"]).is_err());
    }
}
