//! Command-line interface parsing and handling
//!
//! Each mapping subcommand reads a native response snapshot, runs it
//! through the [`ResponseMapper`] built from the configuration and prints
//! the resulting bridge map as JSON.

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::bridge::OutputMap;
use crate::core::config::data::path_display;
use crate::core::config::Config;
use crate::core::mapper::{ExpirationPolicy, ResponseMapper};
use crate::core::response::{AuthorizationResponse, RegistrationResponse, TokenResponse};
use crate::core::scopes::{scope_string_to_list_with, ScopeSplit};
use crate::utils::input::read_snapshot;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "appauth-bridge")]
#[command(about = "Convert native AppAuth responses into bridge maps")]
#[command(
    long_about = "appauth-bridge converts token, authorization and client registration \
responses captured from a native AppAuth client into the ordered maps handed to the \
application layer, printed as JSON.\n\n\
Input is read from the given file, or from stdin when the file is omitted or '-'.\n\n\
Environment Variables:\n\
  RUST_LOG          tracing filter (overrides the log-filter setting)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this configuration file instead of the platform default
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Keep every scope token, including the last one
    #[arg(long, global = true)]
    pub complete_scopes: bool,

    /// Emit accessTokenExpirationTime as null when the token has no expiry
    #[arg(long, global = true)]
    pub null_expiration: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a token response snapshot
    Token {
        /// Snapshot file (stdin when omitted or '-')
        input: Option<PathBuf>,
    },
    /// Map an authorization response snapshot
    Authorization {
        /// Snapshot file (stdin when omitted or '-')
        input: Option<PathBuf>,
    },
    /// Map a client registration response snapshot
    Registration {
        /// Snapshot file (stdin when omitted or '-')
        input: Option<PathBuf>,
    },
    /// Print the scope list produced for a scope string
    Scopes {
        /// Space-delimited scope string
        #[arg(allow_hyphen_values = true)]
        scope: String,
    },
    /// Print the effective configuration
    Config,
    /// Set a configuration value (scope-split, expiration, log-filter)
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        value: String,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

impl Args {
    /// Applies the per-invocation overrides on top of the configured mapper.
    pub fn mapper(&self, config: &Config) -> ResponseMapper {
        let mut mapper = config.mapper();
        if self.complete_scopes {
            mapper.scope_split = ScopeSplit::Complete;
        }
        if self.null_expiration {
            mapper.expiration = ExpirationPolicy::Null;
        }
        mapper
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = Config::resolve_path(args.config.as_deref())?;
    let config = Config::load_from_path(&config_path)?;
    init_tracing(config.log_filter());
    log_config_source(&config_path);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, config, &config_path, &mut out)
}

pub fn run<W: Write>(
    args: &Args,
    mut config: Config,
    config_path: &Path,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let mapper = args.mapper(&config);

    match &args.command {
        Commands::Token { input } => {
            let response: TokenResponse = read_snapshot(input.as_deref())?;
            let map = mapper.token_response_to_map(&response);
            write_map(out, &map, args.compact)
        }
        Commands::Authorization { input } => {
            let response: AuthorizationResponse = read_snapshot(input.as_deref())?;
            let map = mapper.authorization_response_to_map(&response);
            write_map(out, &map, args.compact)
        }
        Commands::Registration { input } => {
            let response: RegistrationResponse = read_snapshot(input.as_deref())?;
            let map = mapper.registration_response_to_map(&response);
            write_map(out, &map, args.compact)
        }
        Commands::Scopes { scope } => {
            let scopes = scope_string_to_list_with(Some(scope.as_str()), mapper.scope_split);
            let rendered = if args.compact {
                serde_json::to_string(&scopes)?
            } else {
                serde_json::to_string_pretty(&scopes)?
            };
            writeln!(out, "{rendered}")?;
            Ok(())
        }
        Commands::Config => {
            config.print_all(out)?;
            Ok(())
        }
        Commands::Set { key, value } => {
            config.apply_setting(key, Some(value.as_str()))?;
            config.save_to_path(config_path)?;
            writeln!(out, "✅ Set {key} to: {value}")?;
            Ok(())
        }
        Commands::Unset { key } => {
            config.apply_setting(key, None)?;
            config.save_to_path(config_path)?;
            writeln!(out, "✅ Unset {key}")?;
            Ok(())
        }
    }
}

/// Logs where the configuration came from. Call after `init_tracing`.
pub(crate) fn log_config_source(config_path: &Path) {
    if config_path.exists() {
        debug!(path = %path_display(config_path), "loaded config");
    } else {
        debug!(path = %path_display(config_path), "no config file, using defaults");
    }
}

fn write_map<W: Write>(out: &mut W, map: &OutputMap, compact: bool) -> Result<(), Box<dyn Error>> {
    let rendered = if compact {
        serde_json::to_string(map)?
    } else {
        serde_json::to_string_pretty(map)?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
