use crate::domain::ids::SeasonId;
use crate::domain::season::{Season, SeasonKind, SeasonType};
use crate::ports::{ColorGenerator, IdGenerator, SeasonalCalendar};

/// Fabrica estaciones nuevas con id fresco, color aleatorio y valores a cero.
pub struct SeasonFactory<I, C>
where
  I: IdGenerator,
  C: ColorGenerator,
{
  ids: I,
  colors: C,
}

impl<I, C> SeasonFactory<I, C>
where
  I: IdGenerator,
  C: ColorGenerator,
{
  /// Intentos de generar un id libre antes de rendirse en [`Self::create_for`].
  pub const MAX_ID_ATTEMPTS: usize = 16;

  pub fn new(ids: I, colors: C) -> Self {
    Self { ids, colors }
  }

  /// Estación por defecto de la variante pedida.
  ///
  /// - Dated: día 1 del primer mes
  /// - Periodic: duración y pico a 0
  ///
  /// Sin nombre, queda vacío.
  pub fn create_default(&mut self, variant: SeasonType, name: Option<&str>) -> Season {
    let id = self.ids.next_id();
    self.build(id, variant, name)
  }

  /// Como [`Self::create_default`], pero regenera el id mientras choque con
  /// una estación ya guardada en `calendar`.
  pub fn create_for<K>(&mut self, calendar: &K, variant: SeasonType, name: Option<&str>) -> Season
  where
    K: SeasonalCalendar + ?Sized,
  {
    let mut id = self.ids.next_id();
    let mut attempts = 1;

    while calendar.contains_season(&id) {
      if attempts >= Self::MAX_ID_ATTEMPTS {
        tracing::warn!(season_id = %id, attempts, "could not generate a free season id");
        break;
      }
      id = self.ids.next_id();
      attempts += 1;
    }

    self.build(id, variant, name)
  }

  fn build(&mut self, id: SeasonId, variant: SeasonType, name: Option<&str>) -> Season {
    let color = self.colors.next_color();
    tracing::debug!(season_id = %id, %variant, %color, "default season created");

    Season::new(id, name.unwrap_or_default(), color, SeasonKind::zeroed(variant))
  }
}
