use calendarium_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use calendarium_core::services::EditorOptions;
use calendarium_core::services::numeric::DEFAULT_DURATION_PRECISION;
use serde::{Deserialize, Serialize};

use crate::random::{DEFAULT_ID_LENGTH, Luminosity};

const SECTION: &str = "creator";

/// Sección `[creator]` de `calendarium.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatorConfig {
  /// Símbolos de los ids de estaciones nuevas.
  #[serde(default = "default_id_length")]
  pub id_length: usize,

  /// Cifras significativas al autocompletar la duración restante.
  #[serde(default = "default_duration_precision")]
  pub duration_precision: usize,

  /// Familia de colores para estaciones nuevas.
  #[serde(default)]
  pub luminosity: Luminosity,
}

fn default_id_length() -> usize {
  DEFAULT_ID_LENGTH
}

fn default_duration_precision() -> usize {
  DEFAULT_DURATION_PRECISION
}

impl Default for CreatorConfig {
  fn default() -> Self {
    CreatorConfig {
      id_length: default_id_length(),
      duration_precision: default_duration_precision(),
      luminosity: Luminosity::default(),
    }
  }
}

impl CreatorConfig {
  /// Carga desde el backend global y reescribe la sección con los valores
  /// efectivos, así el usuario ve todas las claves disponibles.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_with(&*CONFIG_BACKEND)
  }

  /// [`Self::load`] sobre un backend concreto.
  pub fn load_with<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = Self::load_from(backend)?;
    cfg.save_to(backend)?;
    tracing::debug!(
      id_length = cfg.id_length,
      duration_precision = cfg.duration_precision,
      luminosity = ?cfg.luminosity,
      "creator config loaded"
    );
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default(SECTION)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(&*CONFIG_BACKEND)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }

  pub fn editor_options(&self) -> EditorOptions {
    EditorOptions { duration_precision: self.duration_precision }
  }
}
