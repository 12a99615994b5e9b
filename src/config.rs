use crate::collectors::lsblk::DEFAULT_LSBLK;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Upper bound on each df / mount / lsblk / blkid invocation, in seconds
    pub command_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Kernel mount table; read instead of running `mount` when present
    pub proc_mounts: PathBuf,
    /// lsblk is used for identity data only when this binary exists, otherwise blkid
    pub lsblk_path: PathBuf,
    /// Collect UUID / label / type at all
    pub identity: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { command_timeout_secs: 120 }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            proc_mounts: PathBuf::from("/proc/mounts"),
            lsblk_path:  PathBuf::from(DEFAULT_LSBLK),
            identity:    true,
        }
    }
}

impl GeneralConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                tracing::debug!("using default config: {:#}", e);
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fsinv").join("fsinv.toml"))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid fsinv config")
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    Config::from_toml(&text)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# fsinv configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}
