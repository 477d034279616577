use crate::domain::season::{DateChange, Season, SeasonKind, SeasonType};
use crate::errors::CoreError;
use crate::ports::{ColorGenerator, EditorHost, FieldAction, FormField, IdGenerator, SeasonForm, SeasonalCalendar};
use crate::services::numeric::{DEFAULT_DURATION_PRECISION, format_days, parse_days, round_significant};
use crate::services::season_factory::SeasonFactory;

pub const CREATE_TITLE: &str = "Create season";
pub const MODIFY_TITLE: &str = "Modify season";

pub const DURATION_DESC: &str = "Seasons will transition to the next season over this number of days.";
pub const PEAK_DESC: &str =
  "Seasons will remain in effect for this number of days before beginning to transition.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
  /// Cifras significativas al autocompletar la duración restante.
  pub duration_precision: usize,
}

impl Default for EditorOptions {
  fn default() -> Self {
    Self { duration_precision: DEFAULT_DURATION_PRECISION }
  }
}

/// Eventos de cambio que emite la superficie del formulario.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
  Name(String),
  Color(String),
  /// Fecha del sub-editor (sólo estaciones fechadas).
  Date(DateChange),
  /// Validez de la fecha según el sub-editor.
  Valid(bool),
  /// Texto crudo del campo de duración.
  Duration(String),
  /// Texto crudo del campo de pico.
  Peak(String),
}

/// Editor de una estación.
///
/// Trabaja siempre sobre una copia: la estación guardada en el calendario no
/// se toca hasta que quien llama confirma con [`SeasonEditor::commit`] y la
/// guarda (p. ej. con [`crate::domain::Calendar::upsert_season`]).
///
/// Ningún setter falla: una entrada numérica que no se puede leer se ignora y
/// la fecha inválida se refleja sólo en [`SeasonEditor::is_valid`].
pub struct SeasonEditor<H>
where
  H: EditorHost,
{
  season: Season,
  creating: bool,
  valid: bool,
  options: EditorOptions,
  host: H,
}

impl<H> SeasonEditor<H>
where
  H: EditorHost,
{
  /// Abre el editor: copia `existing` si viene, o pide una estación nueva a
  /// la factoría. Pone el título del modal y pinta el formulario.
  pub fn open<K, I, C>(
    calendar: &K,
    factory: &mut SeasonFactory<I, C>,
    variant: SeasonType,
    name: Option<&str>,
    existing: Option<&Season>,
    host: H,
  ) -> Self
  where
    K: SeasonalCalendar + ?Sized,
    I: IdGenerator,
    C: ColorGenerator,
  {
    match existing {
      Some(season) => Self::modify(season, host),
      None => Self::create(calendar, factory, variant, name, host),
    }
  }

  pub fn create<K, I, C>(
    calendar: &K,
    factory: &mut SeasonFactory<I, C>,
    variant: SeasonType,
    name: Option<&str>,
    host: H,
  ) -> Self
  where
    K: SeasonalCalendar + ?Sized,
    I: IdGenerator,
    C: ColorGenerator,
  {
    let season = factory.create_for(calendar, variant, name);
    Self::start(season, true, host)
  }

  pub fn modify(existing: &Season, host: H) -> Self {
    Self::start(existing.clone(), false, host)
  }

  fn start(season: Season, creating: bool, host: H) -> Self {
    let mut editor = Self { season, creating, valid: true, options: EditorOptions::default(), host };

    tracing::info!(
      season_id = %editor.season.id(),
      variant = %editor.season.season_type(),
      creating,
      "season editor opened"
    );

    let title = editor.title();
    editor.host.set_title(title);
    editor.display();
    editor
  }

  pub fn with_options(mut self, options: EditorOptions) -> Self {
    self.options = options;
    self
  }

  pub fn title(&self) -> &'static str {
    if self.creating { CREATE_TITLE } else { MODIFY_TITLE }
  }

  pub fn season(&self) -> &Season {
    &self.season
  }

  pub fn is_creating(&self) -> bool {
    self.creating
  }

  pub fn is_valid(&self) -> bool {
    self.valid
  }

  pub fn options(&self) -> EditorOptions {
    self.options
  }

  // -------- Campos comunes --------

  pub fn set_name(&mut self, value: impl Into<String>) {
    self.season.name = value.into();
  }

  pub fn set_color(&mut self, value: impl Into<String>) {
    self.season.color = value.into();
  }

  // -------- Estaciones fechadas --------

  /// Guarda mes y día tal cual llegan; la validación es cosa del sub-editor.
  pub fn set_date(&mut self, date: DateChange) {
    let SeasonKind::Dated { month, day } = &mut self.season.kind else {
      tracing::debug!(season_id = %self.season.id(), "date change ignored on periodic season");
      return;
    };
    *month = date.month;
    *day = date.day;
  }

  pub fn set_valid(&mut self, valid: bool) {
    self.valid = valid;
  }

  // -------- Estaciones periódicas --------

  pub fn set_duration(&mut self, input: &str) {
    let Some(value) = self.parse_periodic_input("duration", input) else {
      return;
    };
    if let SeasonKind::Periodic { duration, .. } = &mut self.season.kind {
      *duration = value;
    }
  }

  pub fn set_peak(&mut self, input: &str) {
    let Some(value) = self.parse_periodic_input("peak", input) else {
      return;
    };
    if let SeasonKind::Periodic { peak, .. } = &mut self.season.kind {
      *peak = value;
    }
  }

  fn parse_periodic_input(&self, field: &'static str, input: &str) -> Option<f64> {
    if self.season.season_type() != SeasonType::Periodic {
      tracing::debug!(season_id = %self.season.id(), field, "numeric edit ignored on dated season");
      return None;
    }

    let parsed = parse_days(input);
    if parsed.is_none() {
      tracing::debug!(season_id = %self.season.id(), field, input, "non-numeric input ignored");
    }
    parsed
  }

  /// Rellena la duración con los días del año que no ocupan las demás
  /// estaciones periódicas.
  ///
  /// `restante = largo efectivo del año - duración de cada OTRA periódica`,
  /// excluyendo por id la que se está editando (su valor guardado no cuenta).
  /// No toca el pico ni otras estaciones. Repinta el formulario.
  ///
  /// Devuelve la nueva duración, o `None` si la estación es fechada.
  pub fn compute_remaining_duration<K>(&mut self, calendar: &K) -> Option<f64>
  where
    K: SeasonalCalendar + ?Sized,
  {
    if self.season.season_type() != SeasonType::Periodic {
      return None;
    }

    let own_id = self.season.id();
    let remaining = calendar
      .seasons()
      .iter()
      .filter(|s| s.id() != own_id)
      .filter_map(Season::duration)
      .fold(calendar.effective_year_length(), |period, other| period - other);

    let filled = round_significant(remaining, self.options.duration_precision);
    if let SeasonKind::Periodic { duration, .. } = &mut self.season.kind {
      *duration = filled;
    }

    tracing::info!(season_id = %self.season.id(), duration = filled, "remaining duration filled");
    self.display();
    Some(filled)
  }

  /// Despacha un evento del formulario al setter correspondiente.
  pub fn handle(&mut self, event: FieldEvent) {
    match event {
      FieldEvent::Name(v) => self.set_name(v),
      FieldEvent::Color(v) => self.set_color(v),
      FieldEvent::Date(d) => self.set_date(d),
      FieldEvent::Valid(v) => self.set_valid(v),
      FieldEvent::Duration(v) => self.set_duration(&v),
      FieldEvent::Peak(v) => self.set_peak(&v),
    }
  }

  // -------- Presentación --------

  pub fn form(&self) -> SeasonForm {
    let mut fields = vec![
      FormField::Text { label: "Name", value: self.season.name.clone() },
      FormField::Color { label: "Color", value: self.season.color.clone() },
    ];

    match self.season.kind {
      SeasonKind::Dated { month, day } => {
        fields.push(FormField::Date { month, day, year: 0, enable_year: false });
      }
      SeasonKind::Periodic { duration, peak } => {
        fields.push(FormField::Number {
          label: "Duration",
          description: DURATION_DESC,
          value: format_days(duration),
          action: Some(FieldAction::FillRemainingDuration),
        });
        fields.push(FormField::Number {
          label: "Peak duration",
          description: PEAK_DESC,
          value: format_days(peak),
          action: None,
        });
      }
    }

    SeasonForm { title: self.title().to_string(), creating: self.creating, valid: self.valid, fields }
  }

  /// Repinta el formulario completo en el host.
  pub fn display(&mut self) {
    let form = self.form();
    self.host.render(&form);
  }

  // -------- Cierre --------

  /// Devuelve la copia de trabajo. Guardarla en el calendario es cosa de quien llama.
  pub fn commit(self) -> Season {
    tracing::info!(season_id = %self.season.id(), creating = self.creating, "season committed");
    self.season
  }

  /// Como [`Self::commit`], pero rechaza la edición mientras la fecha sea inválida.
  pub fn try_commit(self) -> Result<Season, CoreError> {
    if !self.valid {
      if let SeasonKind::Dated { month, day } = self.season.kind {
        return Err(CoreError::InvalidDate { month, day });
      }
    }
    Ok(self.commit())
  }

  /// Descarta la copia de trabajo sin tocar nada más.
  pub fn cancel(self) {
    tracing::info!(season_id = %self.season.id(), "season edit cancelled");
  }
}
