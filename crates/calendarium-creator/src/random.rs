use calendarium_core::domain::SeasonId;
use calendarium_core::ports::{ColorGenerator, IdGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Alfabeto URL-safe de nanoid (64 símbolos).
pub const NANOID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Largo por defecto de los ids de estación.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Ids cortos estilo nanoid.
///
/// Con 6 símbolos hay 64^6 (~6.9e10) ids posibles; la factoría además
/// descarta los que ya existen en el calendario.
pub struct NanoIdGenerator<R: Rng = StdRng> {
  rng: R,
  length: usize,
}

impl NanoIdGenerator<StdRng> {
  pub fn from_entropy(length: usize) -> Self {
    Self::with_rng(StdRng::from_entropy(), length)
  }

  /// Generador reproducible, para tests y demos.
  pub fn seeded(seed: u64, length: usize) -> Self {
    Self::with_rng(StdRng::seed_from_u64(seed), length)
  }
}

impl<R: Rng> NanoIdGenerator<R> {
  pub fn with_rng(rng: R, length: usize) -> Self {
    Self { rng, length: length.max(1) }
  }

  pub fn length(&self) -> usize {
    self.length
  }
}

impl<R: Rng> IdGenerator for NanoIdGenerator<R> {
  fn next_id(&mut self) -> SeasonId {
    let id: String = (0..self.length)
      .map(|_| char::from(NANOID_ALPHABET[self.rng.gen_range(0..NANOID_ALPHABET.len())]))
      .collect();
    SeasonId::new(id)
  }
}

/// Familia de colores que produce [`RandomColorGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Luminosity {
  /// Saturados y luminosos: se distinguen bien entre sí.
  #[default]
  Bright,
  /// Pastel.
  Light,
  Dark,
  /// Cualquier saturación y brillo.
  Random,
}

impl Luminosity {
  /// Rangos (saturación, brillo) en porcentaje, modelo HSV.
  fn ranges(self) -> ((u32, u32), (u32, u32)) {
    match self {
      Luminosity::Bright => ((55, 100), (80, 100)),
      Luminosity::Light => ((25, 55), (90, 100)),
      Luminosity::Dark => ((55, 100), (35, 60)),
      Luminosity::Random => ((0, 100), (0, 100)),
    }
  }
}

/// Colores aleatorios en hex (`#rrggbb`): tono libre, saturación y brillo
/// acotados según la [`Luminosity`].
pub struct RandomColorGenerator<R: Rng = StdRng> {
  rng: R,
  luminosity: Luminosity,
}

impl RandomColorGenerator<StdRng> {
  pub fn from_entropy(luminosity: Luminosity) -> Self {
    Self::with_rng(StdRng::from_entropy(), luminosity)
  }

  pub fn seeded(seed: u64, luminosity: Luminosity) -> Self {
    Self::with_rng(StdRng::seed_from_u64(seed), luminosity)
  }
}

impl<R: Rng> RandomColorGenerator<R> {
  pub fn with_rng(rng: R, luminosity: Luminosity) -> Self {
    Self { rng, luminosity }
  }
}

impl<R: Rng> ColorGenerator for RandomColorGenerator<R> {
  fn next_color(&mut self) -> String {
    let ((s_min, s_max), (v_min, v_max)) = self.luminosity.ranges();

    let hue = self.rng.gen_range(0..360u32);
    let saturation = self.rng.gen_range(s_min..=s_max);
    let value = self.rng.gen_range(v_min..=v_max);

    let (r, g, b) = hsv_to_rgb(hue as f64, saturation as f64 / 100.0, value as f64 / 100.0);
    format!("#{r:02x}{g:02x}{b:02x}")
  }
}

/// HSV (h en grados, s y v en `[0, 1]`) a RGB de 8 bits.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
  let c = v * s;
  let sector = (h / 60.0) % 6.0;
  let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());
  let m = v - c;

  let (r, g, b) = match sector as u32 {
    0 => (c, x, 0.0),
    1 => (x, c, 0.0),
    2 => (0.0, c, x),
    3 => (0.0, x, c),
    4 => (x, 0.0, c),
    _ => (c, 0.0, x),
  };

  let to_byte = |channel: f64| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
  (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_ids_use_alphabet_and_length() {
    let mut ids = NanoIdGenerator::seeded(7, DEFAULT_ID_LENGTH);

    for _ in 0..100 {
      let id = ids.next_id();
      assert_eq!(id.as_str().len(), 6);
      assert!(id.as_str().bytes().all(|b| NANOID_ALPHABET.contains(&b)));
    }
  }

  #[test]
  fn test_zero_length_is_bumped_to_one() {
    let mut ids = NanoIdGenerator::seeded(1, 0);
    assert_eq!(ids.length(), 1);
    assert_eq!(ids.next_id().as_str().len(), 1);
  }

  #[test]
  fn test_seeded_ids_are_reproducible() {
    let a: Vec<_> = {
      let mut ids = NanoIdGenerator::seeded(42, 6);
      (0..5).map(|_| ids.next_id()).collect()
    };
    let b: Vec<_> = {
      let mut ids = NanoIdGenerator::seeded(42, 6);
      (0..5).map(|_| ids.next_id()).collect()
    };
    assert_eq!(a, b);
  }

  #[test]
  fn test_ten_thousand_ids_do_not_collide() {
    let mut ids = NanoIdGenerator::seeded(2024, DEFAULT_ID_LENGTH);

    let unique: HashSet<_> = (0..10_000).map(|_| ids.next_id()).collect();

    assert_eq!(unique.len(), 10_000);
  }

  #[test]
  fn test_colors_are_hex() {
    for luminosity in [Luminosity::Bright, Luminosity::Light, Luminosity::Dark, Luminosity::Random] {
      let mut colors = RandomColorGenerator::seeded(3, luminosity);
      for _ in 0..50 {
        let color = colors.next_color();
        assert_eq!(color.len(), 7, "{color}");
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
      }
    }
  }

  /// Saturación y brillo HSV de un `#rrggbb`.
  fn saturation_value(hex: &str) -> (f64, f64) {
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap() as f64 / 255.0;
    let (r, g, b) = (channel(1), channel(3), channel(5));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
    (saturation, max)
  }

  #[test]
  fn test_seeded_colors_are_reproducible() {
    let run = |seed| {
      let mut colors = RandomColorGenerator::seeded(seed, Luminosity::Bright);
      (0..20).map(|_| colors.next_color()).collect::<Vec<_>>()
    };

    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
  }

  #[test]
  fn test_colors_stay_within_luminosity_ranges() {
    // el redondeo a 8 bits mueve algo la saturación en colores oscuros
    let tolerance = 0.02;

    for luminosity in [Luminosity::Bright, Luminosity::Light, Luminosity::Dark] {
      let ((s_min, s_max), (v_min, v_max)) = luminosity.ranges();
      let mut colors = RandomColorGenerator::seeded(17, luminosity);

      for _ in 0..200 {
        let color = colors.next_color();
        let (saturation, value) = saturation_value(&color);

        assert!(
          saturation >= s_min as f64 / 100.0 - tolerance && saturation <= s_max as f64 / 100.0 + tolerance,
          "{luminosity:?} {color}: saturation {saturation}"
        );
        assert!(
          value >= v_min as f64 / 100.0 - tolerance && value <= v_max as f64 / 100.0 + tolerance,
          "{luminosity:?} {color}: value {value}"
        );
      }
    }
  }

  #[test]
  fn test_hsv_to_rgb_primaries() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
    assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), (128, 128, 128));
  }
}
