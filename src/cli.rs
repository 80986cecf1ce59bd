use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// ECF Chess Rating Batch Lookup
///
/// Resolves a list of player names into current ECF ratings. Each name is
/// fuzzy-searched against the ECF rating database; every matching player is
/// looked up for today's rating and the combined results are printed sorted
/// by rating, highest first.
///
/// Names can be passed as arguments, read line-by-line from a file (--input),
/// or entered interactively (semicolon-separated) when neither is given.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Player names to look up. Quote multi-word names ("Magnus Carlsen").
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Read player names from a file, one name per line. Blank lines are skipped.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Look up ratings as of a specific date in YYYY-MM-DD format.
    /// If not provided, today's date is used for the whole batch.
    #[arg(long = "date", short = 'd', help_heading = "Lookup Options")]
    pub date: Option<String>,

    /// Print results as JSON instead of formatted text.
    #[arg(long = "json", short = 'j', help_heading = "Lookup Options")]
    pub json: bool,

    /// Override the delay between consecutive API requests in milliseconds.
    /// Lower values risk hitting the ECF API's request limits.
    #[arg(long = "delay-ms", help_heading = "Lookup Options")]
    pub delay_ms: Option<u64>,

    /// Update API domain in config. Uses the default ECF endpoint if no value given.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: logs are echoed to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// True when the invocation only manages configuration and performs no lookups.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_names() {
        let args = Args::parse_from(["ecf_ratings", "Magnus Carlsen", "John Smythe"]);
        assert_eq!(args.names, vec!["Magnus Carlsen", "John Smythe"]);
        assert!(!args.json);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_args_parse_lookup_options() {
        let args = Args::parse_from([
            "ecf_ratings",
            "--json",
            "--date",
            "2026-08-07",
            "--delay-ms",
            "0",
            "Smith",
        ]);
        assert!(args.json);
        assert_eq!(args.date.as_deref(), Some("2026-08-07"));
        assert_eq!(args.delay_ms, Some(0));
    }

    #[test]
    fn test_is_config_operation() {
        let lookup = Args::parse_from(["ecf_ratings", "Smith"]);
        assert!(!is_config_operation(&lookup));

        let list = Args::parse_from(["ecf_ratings", "--list-config"]);
        assert!(is_config_operation(&list));

        // --config with no value falls back to the default domain marker
        let set_domain = Args::parse_from(["ecf_ratings", "--config"]);
        assert_eq!(set_domain.new_api_domain.as_deref(), Some(""));
        assert!(is_config_operation(&set_domain));
    }
}
