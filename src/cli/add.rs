use clap::Parser;

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_RAW_BASE_URL};
use crate::installer::Discovery;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a theme into the current directory:\n    honu-saas-cli add minimal\n\n\
                   Install into another project:\n    honu-saas-cli add corporate -w ../my-app\n\n\
                   Install every file the repository lists:\n    honu-saas-cli add playful --discovery listing")]
pub struct AddArgs {
    /// Theme to install (see `honu-saas-cli list`)
    #[arg(value_name = "THEME_NAME")]
    pub theme: String,

    /// How component files are discovered
    #[arg(long, value_enum, default_value_t = Discovery::Fixed)]
    pub discovery: Discovery,

    /// Root URL for raw theme files
    #[arg(long, env = "HONU_RAW_BASE_URL", default_value = DEFAULT_RAW_BASE_URL, hide_default_value = true)]
    pub raw_base_url: String,

    /// Root URL of the contents API used by listing discovery
    #[arg(long, env = "HONU_API_BASE_URL", default_value = DEFAULT_API_BASE_URL, hide_default_value = true)]
    pub api_base_url: String,

    /// GitHub token for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}
