/// Precisión por defecto (cifras significativas) al autocompletar duraciones.
pub const DEFAULT_DURATION_PRECISION: usize = 10;

/// Interpreta lo que el usuario escribió en un campo numérico de días.
///
/// - vacío (o sólo espacios) → `0`, igual que un input numérico borrado
/// - literal decimal o científico (`12.5`, `.5`, `1e3`) → su valor
/// - cualquier otra cosa, `NaN` o infinito → `None`
pub fn parse_days(input: &str) -> Option<f64> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Some(0.0);
  }

  // `f64::from_str` también acepta "inf" y "NaN"; no son días.
  let value: f64 = trimmed.parse().ok()?;
  value.is_finite().then_some(value)
}

/// Redondea a `digits` cifras significativas para quitar el ruido de coma
/// flotante (`0.30000000000000004` → `0.3`) antes de enseñarlo al usuario.
///
/// Nota: los empates exactos se resuelven hacia el par (formato de `core`),
/// no alejándose del cero como `Number.prototype.toPrecision` de JS:
/// `12345678.125` a 10 cifras da `12345678.12`, no `12345678.13`. Sólo afecta
/// al último dígito mostrado.
pub fn round_significant(value: f64, digits: usize) -> f64 {
  if digits == 0 || value == 0.0 || !value.is_finite() {
    return value;
  }

  format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Formatea días como los muestra un input numérico (`50`, `12.5`).
pub fn format_days(value: f64) -> String {
  if value == 0.0 {
    // evita "-0"
    return "0".to_string();
  }
  value.to_string()
}
