use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::ids::SeasonId;
use crate::errors::CoreError;

/// Discriminante de [`SeasonKind`], sin datos.
///
/// Es lo que se pide a la factoría ("quiero una estación periódica") antes de
/// que exista ningún valor concreto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
  /// Anclada a un día concreto del calendario.
  Dated,
  /// Definida por su duración relativa al largo del año.
  Periodic,
}

impl fmt::Display for SeasonType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SeasonType::Dated => write!(f, "Dated"),
      SeasonType::Periodic => write!(f, "Periodic"),
    }
  }
}

impl FromStr for SeasonType {
  type Err = CoreError;

  /// Acepta el nombre de la variante sin distinguir mayúsculas.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "dated" => Ok(SeasonType::Dated),
      "periodic" => Ok(SeasonType::Periodic),
      _ => Err(CoreError::UnknownSeasonType(s.to_string())),
    }
  }
}

/// Datos propios de cada variante de estación.
///
/// Se serializa con una etiqueta interna `type`, de modo que los campos de la
/// otra variante simplemente no existen en el registro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeasonKind {
  Dated {
    /// Índice (base 0) en la lista de meses del calendario.
    month: usize,
    /// Día del mes, base 1. El rango válido depende del mes.
    day: u32,
  },
  Periodic {
    /// Días que ocupa la estación, transición incluida.
    duration: f64,
    /// Días en pleno efecto antes de empezar la transición (`<= duration`).
    peak: f64,
  },
}

impl SeasonKind {
  /// Valores "a cero" de cada variante: 1 del primer mes, o duración nula.
  pub fn zeroed(season_type: SeasonType) -> Self {
    match season_type {
      SeasonType::Dated => SeasonKind::Dated { month: 0, day: 1 },
      SeasonType::Periodic => SeasonKind::Periodic { duration: 0.0, peak: 0.0 },
    }
  }

  pub fn season_type(&self) -> SeasonType {
    match self {
      SeasonKind::Dated { .. } => SeasonType::Dated,
      SeasonKind::Periodic { .. } => SeasonType::Periodic,
    }
  }
}

/// Una estación del calendario.
///
/// El `id` es privado: se asigna al crear la estación y no hay forma de
/// reescribirlo. El resto de campos los edita libremente el editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
  id: SeasonId,

  /// Nombre visible; puede estar vacío.
  pub name: String,

  /// Color de la estación, normalmente un hex (`#rrggbb`).
  pub color: String,

  #[serde(flatten)]
  pub kind: SeasonKind,
}

impl Season {
  pub fn new(id: SeasonId, name: impl Into<String>, color: impl Into<String>, kind: SeasonKind) -> Self {
    Self { id, name: name.into(), color: color.into(), kind }
  }

  pub fn id(&self) -> &SeasonId {
    &self.id
  }

  pub fn season_type(&self) -> SeasonType {
    self.kind.season_type()
  }

  /// Duración si la estación es periódica.
  pub fn duration(&self) -> Option<f64> {
    match self.kind {
      SeasonKind::Periodic { duration, .. } => Some(duration),
      SeasonKind::Dated { .. } => None,
    }
  }
}

/// Cambio de fecha emitido por el sub-editor de fechas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateChange {
  pub month: usize,
  pub day: u32,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_season_type_roundtrip_through_str() {
    assert_eq!("periodic".parse::<SeasonType>().unwrap(), SeasonType::Periodic);
    assert_eq!(" Dated ".parse::<SeasonType>().unwrap(), SeasonType::Dated);
    assert_eq!(SeasonType::Periodic.to_string(), "Periodic");
    assert_eq!(
      "solstice".parse::<SeasonType>(),
      Err(CoreError::UnknownSeasonType("solstice".to_string()))
    );
  }

  #[test]
  fn test_zeroed_kinds() {
    assert_eq!(SeasonKind::zeroed(SeasonType::Dated), SeasonKind::Dated { month: 0, day: 1 });
    assert_eq!(
      SeasonKind::zeroed(SeasonType::Periodic),
      SeasonKind::Periodic { duration: 0.0, peak: 0.0 }
    );
  }

  #[test]
  fn test_serialized_shape_only_has_own_variant_fields() {
    let season = Season::new(
      SeasonId::from("abc123"),
      "Winter",
      "#112233",
      SeasonKind::Periodic { duration: 90.5, peak: 10.0 },
    );

    let value = serde_json::to_value(&season).unwrap();
    assert_eq!(
      value,
      json!({
        "id": "abc123",
        "name": "Winter",
        "color": "#112233",
        "type": "Periodic",
        "duration": 90.5,
        "peak": 10.0
      })
    );
    assert!(value.get("month").is_none());
  }

  #[test]
  fn test_deserialize_dated_record() {
    let raw = json!({
      "id": "xyz789",
      "name": "",
      "type": "Dated",
      "color": "#ffffff",
      "month": 3,
      "day": 21
    });

    let season: Season = serde_json::from_value(raw).unwrap();
    assert_eq!(season.id().as_str(), "xyz789");
    assert_eq!(season.kind, SeasonKind::Dated { month: 3, day: 21 });
    assert_eq!(season.duration(), None);
  }
}
