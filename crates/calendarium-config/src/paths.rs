use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que activa el modo portable.
pub const BASE_DIR_ENV: &str = "CALENDARIUM_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas en disco usadas por Calendarium.
///
/// - modo portable: todo cuelga de `$CALENDARIUM_BASE_DIR`
/// - modo sistema: directorios estándar de la plataforma (`ProjectDirs`)
#[derive(Debug, Clone)]
pub struct CalendariumPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl CalendariumPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::portable(env_base);
    }

    let proj_dirs =
      ProjectDirs::from("com", "calendarium", "calendarium").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  /// Modo portable: la configuración vive en `<base>/config`.
  pub fn portable(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base_dir = base.as_ref().to_path_buf();
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir, config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("calendarium.toml")
  }
}
