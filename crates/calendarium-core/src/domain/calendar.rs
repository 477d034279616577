use serde::{Deserialize, Serialize};

use crate::domain::ids::SeasonId;
use crate::domain::season::Season;

/// Tipo de mes.
///
/// Los intercalares no cuentan para la numeración de meses "normales", pero
/// sus días sí forman parte del año.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonthKind {
  #[default]
  Month,
  Intercalary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Month {
  pub name: String,
  /// Número de días del mes en un año sin bisiesto.
  pub length: u32,
  #[serde(default)]
  pub kind: MonthKind,
}

impl Month {
  pub fn new(name: impl Into<String>, length: u32) -> Self {
    Self { name: name.into(), length, kind: MonthKind::Month }
  }

  pub fn intercalary(name: impl Into<String>, length: u32) -> Self {
    Self { name: name.into(), length, kind: MonthKind::Intercalary }
  }
}

/// Día bisiesto: añade un día a `month` cada `interval` años.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeapDay {
  pub name: String,
  pub month: usize,
  pub interval: u32,
}

/// Resultado de confirmar una estación en la colección del calendario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonUpsert {
  /// No existía ninguna estación con ese id: se añadió al final.
  Inserted,
  /// Se reemplazó la estación con el mismo id, en su misma posición.
  Replaced,
}

/// Calendario anfitrión, tal como lo ve el editor de estaciones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
  pub name: String,
  pub months: Vec<Month>,
  #[serde(default)]
  pub leap_days: Vec<LeapDay>,
  #[serde(default)]
  pub seasons: Vec<Season>,
}

impl Calendar {
  pub fn new(name: impl Into<String>, months: Vec<Month>) -> Self {
    Self { name: name.into(), months, leap_days: Vec::new(), seasons: Vec::new() }
  }

  /// Largo medio del año en días.
  ///
  /// Suma los días de todos los meses (intercalares incluidos) y reparte cada
  /// día bisiesto entre los años de su ciclo: uno cada 4 años suma `0.25`.
  pub fn effective_year_length(&self) -> f64 {
    let base: u64 = self.months.iter().map(|m| u64::from(m.length)).sum();

    let leap: f64 = self
      .leap_days
      .iter()
      .filter(|l| l.interval > 0)
      .map(|l| 1.0 / f64::from(l.interval))
      .sum();

    base as f64 + leap
  }

  pub fn find_season(&self, id: &SeasonId) -> Option<&Season> {
    self.seasons.iter().find(|s| s.id() == id)
  }

  pub fn contains_season(&self, id: &SeasonId) -> bool {
    self.find_season(id).is_some()
  }

  /// Guarda una estación confirmada: reemplaza por id o la añade al final.
  pub fn upsert_season(&mut self, season: Season) -> SeasonUpsert {
    match self.seasons.iter_mut().find(|s| s.id() == season.id()) {
      Some(slot) => {
        *slot = season;
        SeasonUpsert::Replaced
      }
      None => {
        self.seasons.push(season);
        SeasonUpsert::Inserted
      }
    }
  }
}
