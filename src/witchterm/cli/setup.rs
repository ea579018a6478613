use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "witchterm", bin_name = "witchterm", version = get_version())]
#[command(about = "Draw tarot cards from a witchy terminal prompt", long_about = None)]
pub struct Cli {
    /// cards.json to load; repeat to give fallbacks, tried in order
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read whole lines from stdin instead of single keys
    #[arg(long)]
    pub line_mode: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter, e.g. "info" or "witchterm=trace"
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
