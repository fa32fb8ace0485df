use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::AppConfig;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub paths: ConfigPaths,
    pub config_exists: bool,
    /// Problems that did not stop loading, logged once logging is up.
    pub warnings: Vec<String>,
}

/// Reads the config file. A missing file yields the defaults; nothing is
/// ever written back.
pub fn load_config(path_override: Option<std::path::PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let paths = ConfigPaths::resolve(path_override)?;
    fs::create_dir_all(&paths.logs_dir)?;
    let read = read_config(&paths.config_file)?;
    let warnings = permission_warning(&paths.config_file, secure_file_permissions(&paths.config_file))
        .into_iter()
        .collect();
    Ok(LoadedConfig {
        config: read.config,
        paths,
        config_exists: read.exists,
        warnings,
    })
}

fn read_config(path: &Path) -> Result<ConfigRead, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(ConfigRead {
            config: toml::from_str(&contents)?,
            exists: true,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigRead {
            config: AppConfig::default(),
            exists: false,
        }),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

struct ConfigRead {
    config: AppConfig,
    exists: bool,
}

/// A config we cannot chmod (another owner, read-only mount) is still
/// usable, so the failure is only reported.
fn permission_warning(path: &Path, result: Result<(), ConfigError>) -> Option<String> {
    result.err().map(|err| {
        format!(
            "could not restrict permissions on {}: {err}",
            path.display()
        )
    })
}

/// The config may hold an API key, keep it private to the owner.
fn secure_file_permissions(path: &Path) -> Result<(), ConfigError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let mut perms = metadata.permissions();
            let mode = perms.mode() & 0o777;
            if mode & 0o077 != 0 {
                perms.set_mode(0o600);
                fs::set_permissions(path, perms)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let read = read_config(&dir.path().join("config.toml")).unwrap();
        assert!(!read.exists);
        assert_eq!(read.config.chat.reveal_delay_ms, 8);
        assert!(read.config.models.is_empty());
        assert_eq!(read.config.logging.level, "info");
    }

    #[test]
    fn parses_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_model = "Grok 3 Mini"

[chat]
max_tokens = 512
temperature = 0.2
timeout_seconds = 30

[openrouter]
base_url = "http://localhost:8080/v1"

[[models]]
label = "Local"
id = "local/model"
"#
        )
        .unwrap();
        let read = read_config(file.path()).unwrap();
        assert!(read.exists);
        let config = read.config;
        assert_eq!(config.default_model.as_deref(), Some("Grok 3 Mini"));
        assert_eq!(config.chat.max_tokens, Some(512));
        assert_eq!(config.chat.temperature, Some(0.2));
        assert_eq!(config.chat.timeout_seconds, Some(30));
        assert_eq!(config.openrouter.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.models.len(), 1);
        assert_eq!(config.models[0].id, "local/model");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_model = ").unwrap();
        assert!(matches!(read_config(file.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn chmod_failure_is_a_warning_not_an_error() {
        let path = Path::new("/etc/confab/config.toml");
        let denied = Err(ConfigError::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )));
        let warning = permission_warning(path, denied).unwrap();
        assert!(warning.contains("/etc/confab/config.toml"));
        assert!(permission_warning(path, Ok(())).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn tightens_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644)).unwrap();
        secure_file_permissions(file.path()).unwrap();
        let mode = fs::metadata(file.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
