use std::env;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};

use yaml_rust::{ScanError, Yaml, YamlLoader};

use crate::report::CONSOLE_WIDTH;

pub const DEFAULT_CONFIG_FILE: &'static str = ".verdict.yml";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    On,
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub width: usize,
    pub colors: ColorMode,
    pub split_log: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            width: CONSOLE_WIDTH,
            colors: ColorMode::Auto,
            split_log: false,
        }
    }
}

#[derive(Debug)]
pub enum LoadConfigError {
    Io(io::Error),
    Yaml(ScanError),
    Invalid(String),
    UnknownOption(String),
    NotFound,
}

impl ReportConfig {
    pub fn load_from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, LoadConfigError> {
        let mut file = File::open(filepath).map_err(|err| LoadConfigError::Io(err))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|err| LoadConfigError::Io(err))?;

        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, LoadConfigError> {
        let yaml = YamlLoader::load_from_str(content).map_err(|err| LoadConfigError::Yaml(err))?;

        let config = yaml
            .get(0)
            .ok_or(LoadConfigError::Invalid("Empty file".to_string()))
            .and_then(|item| {
                item.as_hash()
                    .ok_or(LoadConfigError::Invalid("Invalid format".to_string()))
            })?;

        let mut result = ReportConfig::default();

        for (key, value) in config {
            match key
                .as_str()
                .ok_or(LoadConfigError::Invalid("Invalid format".to_string()))?
            {
                "width" => {
                    let width = value
                        .as_i64()
                        .ok_or(LoadConfigError::Invalid("Invalid format".to_string()))?;
                    if width <= 0 {
                        return Err(LoadConfigError::Invalid(
                            "Width must be positive".to_string(),
                        ));
                    }
                    result.width = width as usize;
                }
                "colors" => {
                    result.colors = match value {
                        Yaml::String(mode) => match mode.as_str() {
                            "auto" => ColorMode::Auto,
                            "on" => ColorMode::On,
                            "off" => ColorMode::Off,
                            _ => {
                                return Err(LoadConfigError::Invalid(
                                    "Invalid format".to_string(),
                                ))
                            }
                        },
                        _ => return Err(LoadConfigError::Invalid("Invalid format".to_string())),
                    };
                }
                "split_log" => {
                    result.split_log = value
                        .as_bool()
                        .ok_or(LoadConfigError::Invalid("Invalid format".to_string()))?;
                }
                option => return Err(LoadConfigError::UnknownOption(option.to_string())),
            }
        }

        Ok(result)
    }

    /// Finds `.verdict.yml` in the current directory or any of its parents.
    pub fn discover() -> Result<(Self, PathBuf), LoadConfigError> {
        let current_dir = env::current_dir().map_err(|err| LoadConfigError::Io(err))?;

        let mut current_dir = Some(current_dir.as_path());
        while let Some(dir) = current_dir {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                return Self::load_from_file(&candidate).map(|config| (config, candidate));
            }
            current_dir = dir.parent();
        }

        Err(LoadConfigError::NotFound)
    }
}
