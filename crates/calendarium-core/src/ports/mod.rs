pub mod calendar;
pub mod host;
pub mod randomness;

pub use calendar::SeasonalCalendar;
pub use host::{EditorHost, FieldAction, FormField, SeasonForm};
pub use randomness::{ColorGenerator, IdGenerator};
