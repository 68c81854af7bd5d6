use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use hello_page_view::BaseUrl;
use snafu::ResultExt;
use tokio::runtime::Runtime;

use crate::{config::Config, error, error::Error, shadow, tui};

#[derive(Parser)]
#[command(
    name = hello_page_base::TUI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    #[arg(long = "log-level", env = "HELLO_PAGE_TUI_LOG_LEVEL", help = "Specify a log level")]
    log_level: Option<tracing::Level>,

    #[arg(
        long = "config",
        short = 'C',
        env = "HELLO_PAGE_TUI_CONFIG_FILE_PATH",
        help = "Specify a configuration file"
    )]
    config_file: Option<PathBuf>,

    #[arg(
        long = "backend-url",
        env = hello_page_base::BACKEND_URL_ENV,
        help = "Specify the base URL of the backend, `/api/hello` is appended to it"
    )]
    backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[clap(about = "Print version information")]
    Version,

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        let Self { commands, log_level, config_file, backend_url } = self;

        match commands {
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(());
            }
            Some(Commands::DefaultConfig) => {
                let config_text =
                    toml::to_string_pretty(&Config::default()).expect("Config is serializable");
                std::io::stdout()
                    .write_all(config_text.as_bytes())
                    .expect("Failed to write to stdout");
                return Ok(());
            }
            _ => {}
        }

        let mut config = Config::load_or_default(config_file.unwrap_or_else(Config::default_path));
        if let Some(log_level) = log_level {
            config.log.level = log_level;
        }

        let _installed = config.log.registry();

        match commands {
            Some(Commands::Completions { .. } | Commands::DefaultConfig) => {
                unreachable!("these commands should be handled previously");
            }
            Some(Commands::Version) => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                Ok(())
            }
            None => {
                let base_url = resolve_base_url(backend_url.as_deref(), &config);
                if let Some(ref base_url) = base_url {
                    tracing::info!("Backend base URL: {base_url}");
                } else {
                    tracing::warn!(
                        "Backend base URL is not set, provide `{}` to call the API",
                        hello_page_base::BACKEND_URL_ENV
                    );
                }

                Runtime::new()
                    .context(error::InitializeTokioRuntimeSnafu)?
                    .block_on(async move { tui::run(base_url).await })
            }
        }
    }
}

/// The command line (or environment) wins over the configuration file.
fn resolve_base_url(backend_url: Option<&str>, config: &Config) -> Option<BaseUrl> {
    backend_url.and_then(BaseUrl::new).or_else(|| config.backend.base_url())
}
