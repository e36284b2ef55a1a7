//! Game settings
//!
//! The validated settings for one server launch and their rendering into the
//! server's command-line arguments.

use log::{debug, info};
use std::fmt;
use std::path::Path;

use crate::error::{GameConfigError, ValidationError};
use crate::settings::document::{self, GameDocument, VictoryDocument};
use crate::settings::era::Era;
use crate::settings::story_events::StoryEvents;
use crate::settings::victory::VictoryOptions;

pub const DEFAULT_HOF_SIZE: u32 = 20;
pub const DEFAULT_PORT: u16 = 9191;

/// Validated settings for a single game
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    name: String,
    era: Era,
    master_password: String,

    renaming: bool,
    hof_size: u32,
    story_events: StoryEvents,
    victory: VictoryOptions,

    port: u16,
    cheat_detection: bool,
    steam: bool,
    text_only: bool,
    tcp_server: bool,
}

impl Game {
    /// Load and validate the game document at `path`.
    pub fn from_document(path: &Path) -> Result<Self, GameConfigError> {
        let doc = document::read_document(path)?;
        let game = Game::try_from(doc)?;
        info!(
            "Loaded game '{}' ({} era) from {}",
            game.name,
            game.era,
            path.display()
        );
        Ok(game)
    }

    /// Like [`Game::from_document`], with `DOM5_*` environment variables
    /// overriding document keys.
    pub fn load(path: &Path) -> Result<Self, GameConfigError> {
        let doc = document::read_document_with_env(path, document::ENV_PREFIX)?;
        let game = Game::try_from(doc)?;
        info!(
            "Loaded game '{}' ({} era) from {}",
            game.name,
            game.era,
            path.display()
        );
        Ok(game)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn master_password(&self) -> &str {
        &self.master_password
    }

    pub fn renaming(&self) -> bool {
        self.renaming
    }

    pub fn hof_size(&self) -> u32 {
        self.hof_size
    }

    pub fn story_events(&self) -> StoryEvents {
        self.story_events
    }

    pub fn victory(&self) -> &VictoryOptions {
        &self.victory
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn cheat_detection(&self) -> bool {
        self.cheat_detection
    }

    pub fn steam(&self) -> bool {
        self.steam
    }

    pub fn text_only(&self) -> bool {
        self.text_only
    }

    pub fn tcp_server(&self) -> bool {
        self.tcp_server
    }

    /// Server arguments as separate tokens, game name last.
    pub fn server_arg_tokens(&self) -> Vec<String> {
        let mut args = vec![
            "--era".to_string(),
            self.era.to_int().to_string(),
            "--masterpass".to_string(),
            self.master_password.clone(),
            "--hofsize".to_string(),
            self.hof_size.to_string(),
            self.story_events.to_arg().to_string(),
        ];

        if self.text_only {
            args.push("--textonly".to_string());
        }

        if !self.cheat_detection {
            args.push("--nocheatdet".to_string());
        }

        if !self.steam {
            args.push("--nosteam".to_string());
        }

        args.extend(self.victory.arg_tokens());
        args.push(self.name.clone());
        args
    }

    /// Server arguments joined into the single string the server script expects.
    pub fn to_server_args(&self) -> String {
        self.server_arg_tokens().join(" ")
    }
}

/// Required single-token string field.
fn token_field(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;

    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    if value.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidValue { field, value });
    }

    Ok(value)
}

/// Fold the older top-level `cataclysm` key into the victory section.
/// Turn 0 on either side counts as unset.
fn merge_cataclysm(
    mut victory: VictoryDocument,
    legacy: Option<u32>,
) -> Result<VictoryDocument, ValidationError> {
    let legacy = legacy.filter(|&turn| turn != 0);
    let current = victory.cataclysm.filter(|&turn| turn != 0);

    match (legacy, current) {
        (Some(legacy), Some(current)) if legacy != current => {
            Err(ValidationError::ConflictingCataclysm {
                legacy,
                victory: current,
            })
        }
        (Some(legacy), None) => {
            debug!("Using top-level cataclysm {} as victory.cataclysm", legacy);
            victory.cataclysm = Some(legacy);
            Ok(victory)
        }
        _ => Ok(victory),
    }
}

impl TryFrom<GameDocument> for Game {
    type Error = ValidationError;

    fn try_from(doc: GameDocument) -> Result<Self, Self::Error> {
        let name = token_field(doc.name, "name")?;
        let era = doc
            .era
            .ok_or(ValidationError::MissingField("era"))?
            .parse::<Era>()?;
        let master_password = token_field(doc.master_password, "master_password")?;

        let victory = doc.victory.ok_or(ValidationError::MissingField("victory"))?;
        let victory = VictoryOptions::try_from(merge_cataclysm(victory, doc.cataclysm)?)?;

        let story_events = match doc.story_events {
            Some(value) => value.parse::<StoryEvents>()?,
            None => StoryEvents::default(),
        };

        let port = doc.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(ValidationError::InvalidValue {
                field: "port",
                value: port.to_string(),
            });
        }

        Ok(Game {
            name,
            era,
            master_password,
            renaming: doc.renaming.unwrap_or(true),
            hof_size: doc.hof_size.unwrap_or(DEFAULT_HOF_SIZE),
            story_events,
            victory,
            port,
            cheat_detection: doc.cheat_detection.unwrap_or(false),
            steam: doc.steam.unwrap_or(false),
            text_only: doc.text_only.unwrap_or(true),
            tcp_server: doc.tcp_server.unwrap_or(true),
        })
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("name", &self.name)
            .field("era", &self.era)
            .field("master_password", &"<redacted>")
            .field("renaming", &self.renaming)
            .field("hof_size", &self.hof_size)
            .field("story_events", &self.story_events)
            .field("victory", &self.victory)
            .field("port", &self.port)
            .field("cheat_detection", &self.cheat_detection)
            .field("steam", &self.steam)
            .field("text_only", &self.text_only)
            .field("tcp_server", &self.tcp_server)
            .finish()
    }
}
