//! Game settings model
//!
//! Schema, loading, validation and server argument rendering for a game.

pub mod document;
pub mod era;
pub mod game;
pub mod story_events;
pub mod victory;

pub use document::{GameDocument, VictoryDocument};
pub use era::Era;
pub use game::Game;
pub use story_events::StoryEvents;
pub use victory::{VictoryMode, VictoryOptions};
