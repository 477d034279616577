use serde::Serialize;

/// Acción extra asociada a un campo (el botón con icono junto al input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldAction {
  /// Rellena la duración con lo que queda libre del año.
  FillRemainingDuration,
}

impl FieldAction {
  /// Nombre del icono que debe pintar el host.
  pub fn icon(&self) -> &'static str {
    match self {
      FieldAction::FillRemainingDuration => "calculator",
    }
  }
}

/// Un control del formulario, con su valor actual.
///
/// El host decide cómo pintarlo; el editor sólo describe qué hay y en qué orden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormField {
  Text { label: &'static str, value: String },
  Color { label: &'static str, value: String },
  /// Sub-editor de fecha con validación propia. El año siempre es 0 y no editable.
  Date { month: usize, day: u32, year: i32, enable_year: bool },
  Number {
    label: &'static str,
    description: &'static str,
    /// Valor ya formateado como lo mostraría un input numérico.
    value: String,
    action: Option<FieldAction>,
  },
}

/// Instantánea de todo lo que hay que pintar para una estación.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonForm {
  pub title: String,
  pub creating: bool,
  /// `false` mientras el sub-editor de fecha marque la fecha como inválida.
  /// El host debe bloquear la confirmación.
  pub valid: bool,
  pub fields: Vec<FormField>,
}

/// Port hacia el modal que aloja el editor (título y repintado).
pub trait EditorHost {
  fn set_title(&mut self, title: &str);
  fn render(&mut self, form: &SeasonForm);
}

/// Host nulo, para usar el editor sin interfaz.
impl EditorHost for () {
  fn set_title(&mut self, _title: &str) {}
  fn render(&mut self, _form: &SeasonForm) {}
}

impl<H: EditorHost + ?Sized> EditorHost for &mut H {
  fn set_title(&mut self, title: &str) {
    (**self).set_title(title)
  }

  fn render(&mut self, form: &SeasonForm) {
    (**self).render(form)
  }
}
