use calendarium_core::domain::{Season, SeasonType};
use calendarium_core::ports::{ColorGenerator, EditorHost, IdGenerator, SeasonalCalendar};
use calendarium_core::services::{EditorOptions, SeasonEditor, SeasonFactory};

use crate::config::CreatorConfig;
use crate::random::{NanoIdGenerator, RandomColorGenerator};

/// Punto de entrada para el host: factoría + opciones del editor, ya
/// cableados a partir de la configuración.
pub struct SeasonCreator<I = NanoIdGenerator, C = RandomColorGenerator>
where
  I: IdGenerator,
  C: ColorGenerator,
{
  factory: SeasonFactory<I, C>,
  options: EditorOptions,
}

impl SeasonCreator {
  pub fn from_config(cfg: &CreatorConfig) -> Self {
    log_wiring(cfg, None);
    let factory = SeasonFactory::new(
      NanoIdGenerator::from_entropy(cfg.id_length),
      RandomColorGenerator::from_entropy(cfg.luminosity),
    );
    Self::new(factory, cfg.editor_options())
  }

  /// Igual que [`Self::from_config`] pero reproducible.
  pub fn seeded(cfg: &CreatorConfig, seed: u64) -> Self {
    log_wiring(cfg, Some(seed));
    let factory = SeasonFactory::new(
      NanoIdGenerator::seeded(seed, cfg.id_length),
      RandomColorGenerator::seeded(seed.wrapping_add(1), cfg.luminosity),
    );
    Self::new(factory, cfg.editor_options())
  }
}

fn log_wiring(cfg: &CreatorConfig, seed: Option<u64>) {
  tracing::debug!(
    id_length = cfg.id_length,
    duration_precision = cfg.duration_precision,
    luminosity = ?cfg.luminosity,
    seed = ?seed,
    "season creator wired"
  );
}

impl<I, C> SeasonCreator<I, C>
where
  I: IdGenerator,
  C: ColorGenerator,
{
  pub fn new(factory: SeasonFactory<I, C>, options: EditorOptions) -> Self {
    Self { factory, options }
  }

  pub fn options(&self) -> EditorOptions {
    self.options
  }

  pub fn create_default(&mut self, variant: SeasonType, name: Option<&str>) -> Season {
    self.factory.create_default(variant, name)
  }

  /// Abre un editor sobre `existing`, o sobre una estación nueva de `variant`.
  pub fn edit<K, H>(
    &mut self,
    calendar: &K,
    variant: SeasonType,
    name: Option<&str>,
    existing: Option<&Season>,
    host: H,
  ) -> SeasonEditor<H>
  where
    K: SeasonalCalendar + ?Sized,
    H: EditorHost,
  {
    SeasonEditor::open(calendar, &mut self.factory, variant, name, existing, host).with_options(self.options)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use calendarium_core::domain::{Calendar, Month, SeasonKind};

  #[test]
  fn test_seeded_creator_uses_config() {
    let cfg = CreatorConfig { id_length: 9, duration_precision: 2, ..CreatorConfig::default() };
    let mut creator = SeasonCreator::seeded(&cfg, 11);

    let season = creator.create_default(SeasonType::Periodic, None);

    assert_eq!(season.id().as_str().len(), 9);
    assert_eq!(creator.options().duration_precision, 2);
  }

  #[test]
  fn test_edit_applies_configured_precision() {
    let cfg = CreatorConfig { duration_precision: 2, ..CreatorConfig::default() };
    let mut creator = SeasonCreator::seeded(&cfg, 5);
    let calendar = Calendar::new("Odd", vec![Month::new("A", 123)]);

    let mut editor = creator.edit(&calendar, SeasonType::Periodic, Some("Long"), None, ());
    editor.compute_remaining_duration(&calendar);

    assert_eq!(editor.season().kind, SeasonKind::Periodic { duration: 120.0, peak: 0.0 });
  }
}
