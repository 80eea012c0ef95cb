use clap::{Parser, Subcommand};
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
#[command(name = "swatch", bin_name = "swatch", version = get_version())]
#[command(about = "Keep a small palette of colors in a plain CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Home directory holding config.json and the default data file
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a color
    #[command(alias = "a")]
    Add {
        /// Color value, e.g. "#ff0000"
        hex: String,
    },

    /// List colors
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// View one or more colors
    #[command(alias = "v")]
    View {
        /// Ids of the colors (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the value of a color
    #[command(alias = "u")]
    Update {
        /// Id of the color
        id: String,

        /// New color value
        hex: String,
    },

    /// Delete one or more colors
    #[command(alias = "rm")]
    Delete {
        /// Ids of the colors (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove every color
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a CSS theme block for a color
    Css {
        /// Id of the color
        id: String,
    },

    /// Print the path of the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, min-length, max-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
