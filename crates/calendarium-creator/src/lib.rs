pub mod config;
pub mod creator;
pub mod random;

pub use config::CreatorConfig;
pub use creator::SeasonCreator;
pub use random::{Luminosity, NanoIdGenerator, RandomColorGenerator};
