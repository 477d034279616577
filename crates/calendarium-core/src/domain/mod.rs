pub mod calendar;
pub mod ids;
pub mod season;

pub use calendar::{Calendar, LeapDay, Month, MonthKind, SeasonUpsert};
pub use ids::SeasonId;
pub use season::{DateChange, Season, SeasonKind, SeasonType};
