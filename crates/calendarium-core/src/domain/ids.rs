use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador opaco de una estación.
///
/// Es estable: una vez asignado no cambia, ni siquiera al editar la estación.
/// El formato lo decide el generador (por defecto, 6 símbolos estilo nanoid).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
  pub fn new(id: impl Into<String>) -> Self {
    SeasonId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<String> for SeasonId {
  fn from(s: String) -> Self {
    SeasonId(s)
  }
}

impl From<&str> for SeasonId {
  fn from(s: &str) -> Self {
    SeasonId(s.to_string())
  }
}

impl From<SeasonId> for String {
  fn from(id: SeasonId) -> Self {
    id.0
  }
}

impl fmt::Display for SeasonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
