use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Published spreadsheet identifier.
    pub sheet_id: String,

    /// Row endpoint; each tab is served at {base_url}/{sheet_id}/{tab}.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Ordered trip registry; the first entry is the default for `show`.
    #[serde(default)]
    pub trips: Vec<Trip>,
}

fn default_base_url() -> String {
    "https://opensheet.elk.sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: "1C6YKplUWHzLTxtJKhmdUocJjKaf7a2JAdsO6Y2RVlxM".to_string(),
            base_url: default_base_url(),
            trips: vec![
                Trip::new("New York", "New York Feb 26"),
                Trip::new("Steffi's Wedding", "Pisa May 26"),
                Trip::new("Virgin Voyage", "Virgin Voyage June 26"),
                Trip::new("Center Parcs", "Center Parcs June 26"),
                Trip::new("Norway", "P&O July 26"),
                Trip::new("Paris", "Paris Aug 26"),
                Trip::new("LAX", "LAX Aug 26"),
                Trip::new("Orlando", "Orlando Aug 26"),
                Trip::new("Virgin Voyage 27", "Virgin Voyage May 27"),
            ],
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tripline")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tripline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tripline.conf")
    }

    fn resolve(path_override: Option<&str>) -> PathBuf {
        match path_override {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve(path_override);

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration to its file, creating the directory if needed.
    pub fn save(&self, path_override: Option<&str>) -> AppResult<PathBuf> {
        let path = Self::resolve(path_override);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
