use crate::core::catalog::Platform;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "komodo.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub general: General,
    #[serde(default)]
    pub download: DownloadSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct General {
    pub os: HostOs,
}

/// Operating system recorded in `komodo.toml` on first run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Linux,
    Windows,
    Unknown,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DownloadSettings {
    /// Remove the partially written file when a download fails. Off by
    /// default: a partial file is left where the download stopped.
    pub cleanup_partial: bool,
}

impl Config {
    /// Loads `komodo.toml` from `dir`, creating it from host detection on
    /// first run.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);

        if !path.exists() {
            let config = Config {
                general: General {
                    os: detect_host_os(),
                },
                download: DownloadSettings::default(),
            };
            config.save(dir)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Platform implied by the configured host OS, if it maps to one.
    pub fn default_platform(&self) -> Option<Platform> {
        match self.general.os {
            HostOs::Linux => Some(Platform::Linux),
            HostOs::Windows => Some(Platform::Windows),
            HostOs::Unknown => None,
        }
    }
}

/// Filesystem locations that mark a Windows host, including WSL mounts.
const WINDOWS_MARKERS: [&str; 3] = [
    "/c/windows/System32",
    "/mnt/c/windows/System32",
    "/windows/System32",
];

/// Detects the host OS the way the shell expects it: Windows marker paths
/// and the WSL interop variable first, then the compile target.
pub fn detect_host_os() -> HostOs {
    let windows = WINDOWS_MARKERS.iter().any(|p| Path::new(p).exists())
        || std::env::var_os("WSL_INTEROP").is_some()
        || cfg!(target_os = "windows");

    if windows {
        HostOs::Windows
    } else if cfg!(target_os = "linux") {
        HostOs::Linux
    } else {
        HostOs::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_load_bootstraps_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.contains("[general]"));
        assert!(written.contains("os ="));

        // A second load reads back the same value.
        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.general.os, config.general.os);
    }

    #[test]
    fn parses_a_minimal_file_without_a_download_section() {
        let config: Config = toml::from_str("[general]\nos = \"linux\"\n").unwrap();
        assert_eq!(config.general.os, HostOs::Linux);
        assert!(!config.download.cleanup_partial);
        assert_eq!(config.default_platform(), Some(Platform::Linux));
    }

    #[test]
    fn cleanup_partial_is_read_from_the_download_section() {
        let config: Config =
            toml::from_str("[general]\nos = \"windows\"\n\n[download]\ncleanup_partial = true\n")
                .unwrap();
        assert!(config.download.cleanup_partial);
        assert_eq!(config.default_platform(), Some(Platform::Windows));
    }

    #[test]
    fn unknown_os_has_no_default_platform() {
        let config: Config = toml::from_str("[general]\nos = \"unknown\"\n").unwrap();
        assert_eq!(config.default_platform(), None);
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            general: General { os: HostOs::Linux },
            download: DownloadSettings {
                cleanup_partial: true,
            },
        };
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.general.os, HostOs::Linux);
        assert!(reloaded.download.cleanup_partial);
    }
}
