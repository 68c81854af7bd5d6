pub mod text;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;
use lazy_static::lazy_static;

pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static! {
    pub static ref PROJECT_SEMVER: semver::Version = semver::Version::parse(PROJECT_VERSION)
        .unwrap_or(semver::Version {
            major: 0,
            minor: 0,
            patch: 0,
            pre: semver::Prerelease::EMPTY,
            build: semver::BuildMetadata::EMPTY
        });
}

pub const PROJECT_NAME: &str = "hello-page";
pub const PROJECT_NAME_WITH_INITIAL_CAPITAL: &str = "HelloPage";

pub const TUI_PROGRAM_NAME: &str = "hello-page-tui";
pub const TUI_CONFIG_NAME: &str = "hello-page-tui.toml";

/// Name of the environment variable carrying the backend base URL, as a literal.
///
/// A macro so that `concat!` and `option_env!` can take it.
#[macro_export]
macro_rules! backend_url_env {
    () => {
        "HELLO_PAGE_BACKEND_URL"
    };
}

pub const BACKEND_URL_ENV: &str = backend_url_env!();

#[cfg(not(target_arch = "wasm32"))]
lazy_static::lazy_static! {
pub static ref PROJECT_CONFIG_DIR: PathBuf = ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME)
            .map_or_else(|| PathBuf::from("."), |dirs| dirs.config_dir().to_path_buf());
}

#[must_use]
pub fn user_agent() -> String { format!("{PROJECT_NAME_WITH_INITIAL_CAPITAL}/{PROJECT_VERSION}") }
