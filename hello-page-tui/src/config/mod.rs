mod backend;
mod error;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use resolve_path::PathResolveExt as _;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{backend::BackendConfig, error::Error};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub log: hello_page_cli::config::LogConfig,
}

impl Config {
    #[inline]
    pub fn default_path() -> PathBuf {
        [
            hello_page_base::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(hello_page_base::TUI_CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().try_resolve().map_or_else(
            |_| path.as_ref().to_path_buf(),
            Cow::into_owned,
        );
        let data = std::fs::read_to_string(&path)
            .context(error::OpenConfigSnafu { filename: path.clone() })?;

        toml::from_str(&data).context(error::ParseConfigSnafu { filename: path })
    }

    #[inline]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to read config file ({:?}), error: {err:?}", &path.as_ref(),);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::Config;

    #[test]
    fn test_default_config_has_no_backend() {
        let config = Config::default();
        assert!(config.backend.base_url().is_none());
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            base_url = "http://localhost:8080/"

            [log]
            level = "WARN"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.backend.base_url().unwrap().hello_endpoint(),
            "http://localhost:8080/api/hello"
        );
        assert_eq!(config.log.level, tracing::Level::WARN);
    }

    #[test]
    fn test_blank_base_url_is_not_configured() {
        let config: Config = toml::from_str("[backend]\nbase_url = \"\"").unwrap();
        assert!(config.backend.base_url().is_none());
    }

    #[test]
    fn test_load_or_default() {
        let dir = std::env::temp_dir().join(format!("hello-page-tui-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let valid = dir.join("valid.toml");
        std::fs::File::create(&valid)
            .unwrap()
            .write_all(b"[backend]\nbase_url = \"http://127.0.0.1:9000\"\n")
            .unwrap();
        let config = Config::load_or_default(&valid);
        assert_eq!(config.backend.base_url.as_deref(), Some("http://127.0.0.1:9000"));

        let broken = dir.join("broken.toml");
        std::fs::File::create(&broken).unwrap().write_all(b"[backend\n").unwrap();
        assert!(Config::load(&broken).is_err());
        assert!(Config::load_or_default(&broken).backend.base_url.is_none());

        assert!(Config::load_or_default(dir.join("missing.toml")).backend.base_url.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
