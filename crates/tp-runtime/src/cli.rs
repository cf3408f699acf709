//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use tp_01_address_suggest::{DetailLevel, SuggestConfig};
use tp_02_address_resolver::ResolverConfig;

/// Address suggestion and cascading form tool.
#[derive(Parser, Debug)]
#[command(name = "tp-runtime")]
#[command(about = "Address suggestions and cascading address entry")]
pub struct Cli {
    /// Suggestion endpoint URL (overrides TP_DADATA_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API token (overrides TP_DADATA_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in milliseconds (overrides TP_DADATA_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one suggestion query and print the candidates
    Suggest {
        /// Detail level the results are restricted to
        #[arg(short, long, value_enum, default_value_t = LevelArg::Region)]
        level: LevelArg,

        /// Maximum number of candidates
        #[arg(short, long)]
        count: Option<usize>,

        /// Print the raw candidates as JSON
        #[arg(long)]
        json: bool,

        /// Free-text query
        query: String,
    },

    /// Interactive cascading address form on stdin
    Form {
        /// Shortest text that triggers a lookup (overrides TP_MIN_QUERY_CHARS)
        #[arg(long)]
        min_chars: Option<usize>,

        /// Most candidates shown per field (overrides TP_MAX_CANDIDATES)
        #[arg(long)]
        max_candidates: Option<usize>,
    },
}

/// Detail level accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// Regions
    Region,
    /// Cities and settlements
    City,
    /// Streets
    Street,
    /// Houses
    House,
}

impl From<LevelArg> for DetailLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Region => DetailLevel::Region,
            LevelArg::City => DetailLevel::City,
            LevelArg::Street => DetailLevel::Street,
            LevelArg::House => DetailLevel::House,
        }
    }
}

impl Cli {
    /// Client configuration: environment first, then flags.
    pub fn suggest_config(&self) -> SuggestConfig {
        let mut config = SuggestConfig::from_env();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(token) = &self.token {
            config.api_token = token.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }
}

/// Resolver configuration: environment first, then flags.
pub fn resolver_config(min_chars: Option<usize>, max_candidates: Option<usize>) -> ResolverConfig {
    let mut config = ResolverConfig::from_env();
    if let Some(min_chars) = min_chars.filter(|v| *v > 0) {
        config.min_query_chars = min_chars;
    }
    if let Some(max_candidates) = max_candidates.filter(|v| *v > 0) {
        config.max_candidates = max_candidates;
    }
    config
}
