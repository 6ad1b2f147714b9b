use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use toml_edit::DocumentMut;
use tracing::debug;

use crate::archive::Site;
use crate::errors::{Error, Result};

const TABLE_NAME: &str = "preferences";

pub const QUALITY_KEY: &str = "preferred_quality";
pub const DEFAULT_QUALITY: &str = "1080";
/// Accepted values for [`QUALITY_KEY`]
pub const QUALITIES: [&str; 7] = ["1080", "720", "480", "360", "240", "Dood", "Uqload"];

const TIMEOUT_KEY: &str = "timeout";
const DEFAULT_TIMEOUT: u64 = 30;

/// Preferences persisted in a TOML file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(config_path())
    }
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads a value, `default` when the file or the key is missing
    pub fn get(&self, key: &str, default: &str) -> String {
        self.load_toml()
            .ok()
            .and_then(|toml| Some(toml.get(TABLE_NAME)?.get(key)?.as_str()?.to_string()))
            .unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut doc = match self.load_toml() {
            Ok(t) => t,
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                if let Some(p) = self.path.parent() {
                    fs::create_dir_all(p)?;
                }

                DocumentMut::new()
            }
            Err(e) => return Err(e),
        };

        if !doc.contains_table(TABLE_NAME) {
            doc[TABLE_NAME] = toml_edit::table();
        }
        doc[TABLE_NAME][key] = toml_edit::value(value);
        doc.fmt();

        safe_save(&doc.to_string(), &self.path)?;
        debug!(key, value, "preference saved");

        Ok(())
    }

    /// Deletes the configuration file
    pub fn clean(&self) -> Result<()> {
        fs::remove_file(&self.path)?;

        Ok(())
    }

    pub fn quality(&self) -> String {
        self.get(QUALITY_KEY, DEFAULT_QUALITY)
    }

    pub fn set_quality(&self, value: &str) -> Result<()> {
        if !QUALITIES.contains(&value) {
            let valid = QUALITIES.join(", ");
            return Err(Error::Custom(format!(
                "Invalid quality `{value}`, expected one of: {valid}"
            )));
        }

        self.set(QUALITY_KEY, value)
    }

    /// Origin override for `site`
    pub fn origin(&self, site: Site) -> Option<String> {
        let key = format!("{}_origin", site.key());

        Some(self.get(&key, "")).filter(|o| !o.is_empty())
    }

    /// Request timeout, written either as `timeout = 5` or `timeout = "5"`
    pub fn timeout(&self) -> Duration {
        let secs = self
            .load_toml()
            .ok()
            .and_then(|toml| {
                let item = toml.get(TABLE_NAME)?.get(TIMEOUT_KEY)?;

                match item.as_integer() {
                    Some(i) => u64::try_from(i).ok(),
                    None => item.as_str()?.trim().parse().ok(),
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        Duration::from_secs(secs)
    }

    fn load_toml(&self) -> Result<DocumentMut> {
        let content = fs::read_to_string(&self.path)?;

        Ok(content.parse::<DocumentMut>()?)
    }
}

/// Writes through a temporary file to avoid corruption
fn safe_save(content: &str, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("toml.tmp");

    fs::write(&tmp_path, content)?;
    fs::rename(tmp_path, path)?;

    Ok(())
}

#[cfg(not(windows))]
const CONFIG_PATH: &str = ".config/egybest-dl/config.toml";

#[cfg(windows)]
const CONFIG_PATH: &str = r"AppData\Roaming\egybest-dl\config.toml";

/// Returns the configuration file path for the current OS
fn config_path() -> PathBuf {
    #[cfg(windows)]
    let root = std::env::var("USERPROFILE").ok();

    #[cfg(not(windows))]
    let root = std::env::var("HOME").ok();

    let mut path = PathBuf::new();
    if let Some(r) = root {
        path.push(PathBuf::from(r));
    }
    path.push(CONFIG_PATH);

    path
}
