use calendarium_core::CoreError;
use calendarium_core::domain::{Calendar, DateChange, LeapDay, Month, SeasonKind, SeasonType, SeasonUpsert};
use calendarium_core::ports::{EditorHost, FormField, SeasonForm};
use calendarium_core::services::FieldEvent;
use calendarium_creator::{CreatorConfig, SeasonCreator};

#[derive(Default)]
struct RecordingHost {
  titles: Vec<String>,
  renders: Vec<SeasonForm>,
}

impl EditorHost for RecordingHost {
  fn set_title(&mut self, title: &str) {
    self.titles.push(title.to_string());
  }

  fn render(&mut self, form: &SeasonForm) {
    self.renders.push(form.clone());
  }
}

fn gregorian() -> Calendar {
  let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
  let months = lengths.iter().enumerate().map(|(i, len)| Month::new(format!("M{i}"), *len)).collect();
  let mut calendar = Calendar::new("Gregorian", months);
  calendar.leap_days.push(LeapDay { name: "Leap Day".into(), month: 1, interval: 4 });
  calendar
}

#[test]
fn periodic_seasons_fill_the_year() {
  let mut calendar = gregorian();
  let mut creator = SeasonCreator::seeded(&CreatorConfig::default(), 99);

  for (name, days) in [("Winter", "100"), ("Spring", "50")] {
    let mut editor = creator.edit(&calendar, SeasonType::Periodic, Some(name), None, ());
    editor.handle(FieldEvent::Duration(days.to_string()));
    assert_eq!(calendar.upsert_season(editor.commit()), SeasonUpsert::Inserted);
  }

  let mut host = RecordingHost::default();
  let mut editor = creator.edit(&calendar, SeasonType::Periodic, Some("Rest"), None, &mut host);
  assert_eq!(editor.compute_remaining_duration(&calendar), Some(215.25));
  let rest = editor.commit();
  calendar.upsert_season(rest.clone());

  assert_eq!(host.titles, vec!["Create season"]);
  let last = host.renders.last().unwrap();
  assert!(last.fields.contains(&FormField::Number {
    label: "Duration",
    description: "Seasons will transition to the next season over this number of days.",
    value: "215.25".into(),
    action: Some(calendarium_core::ports::FieldAction::FillRemainingDuration),
  }));

  let total: f64 = calendar.seasons.iter().filter_map(|s| s.duration()).sum();
  assert_eq!(total, calendar.effective_year_length());

  // reabrir la misma estación y recalcular da el mismo valor: se excluye a sí misma
  let mut again = creator.edit(&calendar, SeasonType::Periodic, None, Some(&rest), ());
  assert_eq!(again.compute_remaining_duration(&calendar), Some(215.25));
}

#[test]
fn modifying_replaces_by_id_and_cancel_discards() {
  let mut calendar = gregorian();
  let mut creator = SeasonCreator::seeded(&CreatorConfig::default(), 3);

  let editor = creator.edit(&calendar, SeasonType::Dated, Some("Solstice"), None, ());
  let solstice = editor.commit();
  calendar.upsert_season(solstice.clone());

  let mut cancelled = creator.edit(&calendar, SeasonType::Dated, None, Some(&solstice), ());
  cancelled.set_name("Renamed");
  cancelled.cancel();
  assert_eq!(calendar.seasons, vec![solstice.clone()]);

  let mut editor = creator.edit(&calendar, SeasonType::Dated, None, Some(&solstice), ());
  assert!(!editor.is_creating());
  editor.set_date(DateChange { month: 5, day: 21 });
  editor.set_color("#ff0000");
  let edited = editor.try_commit().unwrap();

  assert_eq!(edited.id(), solstice.id());
  assert_eq!(calendar.upsert_season(edited), SeasonUpsert::Replaced);
  assert_eq!(calendar.seasons.len(), 1);
  assert_eq!(calendar.seasons[0].kind, SeasonKind::Dated { month: 5, day: 21 });
  assert_eq!(calendar.seasons[0].color, "#ff0000");
}

#[test]
fn invalid_date_blocks_try_commit() {
  let calendar = gregorian();
  let mut creator = SeasonCreator::seeded(&CreatorConfig::default(), 8);

  let mut editor = creator.edit(&calendar, SeasonType::Dated, None, None, ());
  editor.handle(FieldEvent::Date(DateChange { month: 1, day: 30 }));
  editor.handle(FieldEvent::Valid(false));

  assert!(editor.form().fields.contains(&FormField::Date { month: 1, day: 30, year: 0, enable_year: false }));
  assert_eq!(editor.try_commit(), Err(CoreError::InvalidDate { month: 1, day: 30 }));
}
