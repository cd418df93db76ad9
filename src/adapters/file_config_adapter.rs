//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    /// All-defaults adapter, used when the config file is missing or broken.
    pub fn empty() -> Self {
        Self { config: Ini::new() }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str) -> Option<Result<i64, String>> {
        self.config
            .get(section, key)
            .map(|raw| raw.trim().parse::<i64>().map_err(|_| raw))
    }

    fn get_double(&self, section: &str, key: &str) -> Option<Result<f64, String>> {
        self.config
            .get(section, key)
            .map(|raw| raw.trim().parse::<f64>().map_err(|_| raw))
    }

    fn get_bool(&self, section: &str, key: &str) -> Option<Result<bool, String>> {
        self.config
            .get(section, key)
            .map(|raw| Self::parse_bool(&raw).ok_or(raw))
    }

    fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        self.config.get(section, key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}
