use calendarium_core::domain::{Calendar, DateChange, LeapDay, Month, SeasonType};
use calendarium_creator::{CreatorConfig, SeasonCreator};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  // ajusta CALENDARIUM_BASE_DIR si no quieres tocar tu config real
  let cfg = CreatorConfig::load().expect("failed to load [creator] config");
  let mut creator = SeasonCreator::from_config(&cfg);

  let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
  let months = lengths.iter().enumerate().map(|(i, len)| Month::new(format!("Month {}", i + 1), *len)).collect();
  let mut calendar = Calendar::new("Gregorian", months);
  calendar.leap_days.push(LeapDay { name: "Leap Day".into(), month: 1, interval: 4 });

  for (name, days) in [("Winter", "90"), ("Spring", "92.5"), ("Summer", "93")] {
    let mut editor = creator.edit(&calendar, SeasonType::Periodic, Some(name), None, ());
    editor.set_duration(days);
    calendar.upsert_season(editor.commit());
  }

  let mut autumn = creator.edit(&calendar, SeasonType::Periodic, Some("Autumn"), None, ());
  autumn.compute_remaining_duration(&calendar);
  autumn.set_peak("30");
  calendar.upsert_season(autumn.commit());

  let mut solstice = creator.edit(&calendar, SeasonType::Dated, Some("Solstice"), None, ());
  solstice.set_date(DateChange { month: 5, day: 21 });
  calendar.upsert_season(solstice.commit());

  println!("Effective year length: {}", calendar.effective_year_length());
  println!("{}", serde_json::to_string_pretty(&calendar.seasons).expect("failed to serialize seasons"));
}
