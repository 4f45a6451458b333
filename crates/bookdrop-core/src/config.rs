use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/bookdrop/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookdropConfig {
    /// Root directory of the local book library. When unset, books live
    /// under the XDG data home (`~/.local/share/bookdrop/books`).
    #[serde(default)]
    pub books_dir: Option<PathBuf>,
}

impl BookdropConfig {
    /// Effective library root: the configured override, or the XDG default.
    pub fn books_root(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.books_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("bookdrop")?;
        Ok(xdg_dirs.get_data_home().join("books"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bookdrop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BookdropConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BookdropConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BookdropConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_override() {
        let cfg = BookdropConfig::default();
        assert!(cfg.books_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = BookdropConfig {
            books_dir: Some(PathBuf::from("/srv/books")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: BookdropConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.books_dir, cfg.books_dir);
    }

    #[test]
    fn config_toml_custom_books_dir() {
        let toml = r#"
            books_dir = "/mnt/library"
        "#;
        let cfg: BookdropConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.books_dir, Some(PathBuf::from("/mnt/library")));
    }

    #[test]
    fn empty_config_parses_to_default() {
        let cfg: BookdropConfig = toml::from_str("").unwrap();
        assert!(cfg.books_dir.is_none());
    }

    #[test]
    fn books_root_prefers_override() {
        let cfg = BookdropConfig {
            books_dir: Some(PathBuf::from("/srv/books")),
        };
        assert_eq!(cfg.books_root().unwrap(), PathBuf::from("/srv/books"));
    }
}
