pub mod numeric;
pub mod season_editor;
pub mod season_factory;

pub use season_editor::{EditorOptions, FieldEvent, SeasonEditor};
pub use season_factory::SeasonFactory;
