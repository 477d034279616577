use crate::domain::ids::SeasonId;

/// Fuente de ids para estaciones nuevas.
///
/// Se inyecta en la factoría para poder sembrarla en tests; la
/// implementación por defecto vive en `calendarium-creator`.
pub trait IdGenerator {
  fn next_id(&mut self) -> SeasonId;
}

/// Fuente de colores aleatorios (visualmente distintos) para estaciones nuevas.
pub trait ColorGenerator {
  fn next_color(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
  fn next_id(&mut self) -> SeasonId {
    (**self).next_id()
  }
}

impl<G: ColorGenerator + ?Sized> ColorGenerator for &mut G {
  fn next_color(&mut self) -> String {
    (**self).next_color()
  }
}
