// crates/calendarium-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Calendarium.
///
/// Los setters del editor nunca fallan; esto sólo aparece en conversiones
/// y al confirmar una edición.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("invalid date: month {month}, day {day}")]
  InvalidDate { month: usize, day: u32 },

  #[error("unknown season type: {0}")]
  UnknownSeasonType(String),
}
