//! CLI definitions for the `yaaya` binary.
//!
//! Process settings are global flags, each backed by an environment
//! variable, so `yaaya`, `yaaya serve --port 8080` and `PORT=8080 yaaya`
//! all behave the same. With no subcommand the server starts.

pub mod ask;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use yaaya_infra::llm::hf_inference::client::DEFAULT_BASE_URL;

/// YAAYA chat assistant.
#[derive(Parser)]
#[command(name = "yaaya", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default).
    Serve,

    /// Send one message through the chat pipeline and print the reply.
    Ask {
        /// Message text; multiple words are joined with spaces.
        #[arg(required = true)]
        message: Vec<String>,
    },
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Interface to bind.
    #[arg(long, env = "YAAYA_HOST", default_value = "0.0.0.0", global = true)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 10000, global = true)]
    pub port: u16,

    /// Model id, or `none` for rule-based replies only.
    #[arg(long, env = "YAAYA_MODEL", default_value = "distilgpt2", global = true)]
    pub model: String,

    /// Base URL of the text-generation inference server.
    #[arg(long, env = "YAAYA_INFERENCE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub inference_url: String,

    /// Access token for the inference server.
    #[arg(long, env = "HF_TOKEN", hide_env_values = true, global = true)]
    pub hf_token: Option<String>,

    /// Key used to sign session cookies.
    #[arg(long, env = "SECRET_KEY", hide_env_values = true, global = true)]
    pub secret_key: Option<String>,

    /// Optional TOML file with chat tuning.
    #[arg(long, env = "YAAYA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, env = "YAAYA_OTEL", global = true)]
    pub otel: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        let serving = !matches!(self.command, Some(Commands::Ask { .. }));
        match self.verbose {
            0 if self.quiet => "error",
            0 if serving => "info",
            0 => "warn",
            1 => "info,yaaya_api=debug,yaaya_core=debug,yaaya_infra=debug",
            _ => "trace",
        }
    }
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
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["yaaya", "--port", "8080", "--model", "none"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.settings.port, 8080);
        assert_eq!(cli.settings.model, "none");
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn test_ask_joins_words_and_logs_quietly() {
        let cli = Cli::try_parse_from(["yaaya", "ask", "who", "made", "you"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                message: vec!["who".into(), "made".into(), "you".into()]
            })
        );
        assert_eq!(cli.default_log_filter(), "warn");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["yaaya", "serve", "--host", "127.0.0.1", "-vv"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.settings.host, "127.0.0.1");
        assert_eq!(cli.default_log_filter(), "trace");
    }

    #[test]
    fn test_host_reads_namespaced_env_var() {
        let cmd = Cli::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .and_then(|env| env.to_str())
                .map(str::to_string)
        };
        assert_eq!(env_of("host").as_deref(), Some("YAAYA_HOST"));
        assert_eq!(env_of("port").as_deref(), Some("PORT"));
    }

    #[test]
    fn test_quiet_wins_over_default() {
        let cli = Cli::try_parse_from(["yaaya", "-q"]).unwrap();
        assert_eq!(cli.default_log_filter(), "error");
    }
}
