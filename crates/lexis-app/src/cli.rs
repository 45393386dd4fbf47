use clap::Parser;
use lexis_config::Config;

const LOG_TARGETS: [&str; 5] = [
    "lexis_app",
    "lexis_config",
    "lexis_core",
    "lexis_lookup",
    "lexis_ui",
];

#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(about = "Look up words and compare how often they are used")]
#[command(version)]
pub struct Cli {
    /// Words to look up in order. Reads queries from stdin when empty
    pub words: Vec<String>,

    /// Config profile to load
    #[arg(long, short = 'p', default_value = "main")]
    pub profile: String,

    /// Create a profile from the main profile and exit
    #[arg(long, value_name = "NAME")]
    pub create_profile: Option<String>,

    /// Print the final chart data and options as JSON before exiting
    #[arg(long)]
    pub json: bool,

    /// Number of recent words kept in the chart
    #[arg(long, short = 'n')]
    pub max_history: Option<usize>,

    /// WordsAPI key, overrides profile and WORDS_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Command line flags take precedence over profile and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(max_history) = self.max_history {
            config.history.max_size = max_history;
        }

        if let Some(api_key) = &self.api_key {
            config.api.api_key = api_key.clone();
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    /// Dependencies stay at `warn`, lexis crates start at `info`.
    pub fn log_filter(&self) -> String {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        LOG_TARGETS
            .iter()
            .fold(String::from("warn"), |filter, target| {
                format!("{filter},{target}={level}")
            })
    }
}
