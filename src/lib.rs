pub mod error;
pub mod settings;
pub mod utils;

pub use error::{GameConfigError, ParseError, ValidationError};
pub use settings::Game;
