use std::str::FromStr;

use crate::error::ValidationError;

/// How many random story events the server generates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoryEvents {
    All,
    #[default]
    Some,
    None,
}

impl StoryEvents {
    /// Server flag selecting this story event level.
    pub fn to_arg(self) -> &'static str {
        match self {
            StoryEvents::All => "--allstoryevents",
            StoryEvents::Some => "--storyevents",
            StoryEvents::None => "--nostoryevents",
        }
    }
}

impl FromStr for StoryEvents {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(StoryEvents::All),
            "some" => Ok(StoryEvents::Some),
            "none" => Ok(StoryEvents::None),
            other => Err(ValidationError::InvalidValue {
                field: "story_events",
                value: other.to_string(),
            }),
        }
    }
}
