//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path (or the standard locations) and
    /// apply environment overrides.
    ///
    /// An explicitly given path must exist; the standard locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let mut schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        apply_overrides(&mut schema, |key| std::env::var(key).ok());
        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Defaults only (no file, no environment)
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("sfx.toml"), PathBuf::from(".sfx.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("sfx").join("config.toml"));
    }

    candidates.into_iter().find(|c| c.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}", path.display())).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}", path.display()),
        )
        .with_source(e)
    })
}

/// Apply environment overrides using the given lookup
pub(crate) fn apply_overrides<F>(schema: &mut ConfigSchema, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let first = |keys: &[&str]| keys.iter().find_map(|&k| lookup(k).filter(|v| !v.is_empty()));

    if let Some(url) = first(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"]) {
        schema.store.url = Some(url);
    }
    if let Some(key) = first(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"]) {
        schema.store.anon_key = Some(key);
    }
    if let Some(secs) = first(&["SFX_TIMEOUT_SECS"]).and_then(|s| s.parse().ok()) {
        schema.store.timeout_secs = secs;
    }
    if let Some(dir) = first(&["SFX_DATA_DIR"]) {
        schema.library.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(owner) = first(&["SFX_OWNER_ID"]) {
        schema.library.owner_id = Some(owner);
    }
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    if let Some(url) = schema.store.url.as_deref() {
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::new(
                ErrorCode::InvalidConfigValue,
                format!("store.url must start with http:// or https://, got {url}"),
            ));
        }
    }
    if schema.search.suggestion_limit == 0 {
        return Err(Error::new(
            ErrorCode::InvalidConfigValue,
            "search.suggestion_limit must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.store.table, "sound_effects");
        assert_eq!(config.schema.search.suggestion_limit, 5);
        assert!(!config.schema.store.is_configured());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here/sfx.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[store]\nurl = \"https://abc.supabase.co\"\ntable = \"sfx\"\n\n[search]\nsuggestion_limit = 8"
        )
        .unwrap();

        let schema = load_config_file(file.path()).unwrap();
        assert_eq!(schema.store.url.as_deref(), Some("https://abc.supabase.co"));
        assert_eq!(schema.store.table, "sfx");
        assert_eq!(schema.search.suggestion_limit, 8);
        assert_eq!(schema.store.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store\nurl =").unwrap();

        let err = load_config_file(file.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("NEXT_PUBLIC_SUPABASE_URL", "https://env.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SFX_DATA_DIR", "/tmp/sfx-data"),
            ("SFX_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let mut schema = ConfigSchema::default();
        apply_overrides(&mut schema, |k| env.get(k).map(|v| (*v).to_string()));

        assert_eq!(schema.store.url.as_deref(), Some("https://env.supabase.co"));
        assert_eq!(schema.store.anon_key.as_deref(), Some("anon"));
        assert_eq!(schema.store.timeout_secs, 5);
        assert_eq!(
            schema.library.resolved_data_dir(),
            PathBuf::from("/tmp/sfx-data")
        );
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut schema = ConfigSchema::default();
        schema.store.url = Some("ftp://nope".to_string());
        assert!(validate(&schema).is_err());
    }
}
