use crate::domain::calendar::Calendar;
use crate::domain::ids::SeasonId;
use crate::domain::season::Season;

/// Lo único que el editor necesita leer del calendario anfitrión.
///
/// El editor nunca escribe a través de este port.
pub trait SeasonalCalendar {
  /// Largo medio del año en días, según el calendario.
  fn effective_year_length(&self) -> f64;

  /// Estaciones ya guardadas en el calendario.
  fn seasons(&self) -> &[Season];

  fn contains_season(&self, id: &SeasonId) -> bool {
    self.seasons().iter().any(|s| s.id() == id)
  }
}

impl SeasonalCalendar for Calendar {
  fn effective_year_length(&self) -> f64 {
    Calendar::effective_year_length(self)
  }

  fn seasons(&self) -> &[Season] {
    &self.seasons
  }

  fn contains_season(&self, id: &SeasonId) -> bool {
    Calendar::contains_season(self, id)
  }
}
