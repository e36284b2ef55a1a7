//! Victory conditions
//!
//! A game ends either when one nation conquers everyone else, or when a nation holds
//! enough thrones of ascension to reach the required ascension points. Exactly one of
//! these modes is active for a game.

use crate::error::ValidationError;
use crate::settings::document::VictoryDocument;

/// The active victory mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryMode {
    ConquerAll,
    Thrones { required_ascension_points: u32 },
}

/// Validated victory settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryOptions {
    thrones: [u32; 3],
    mode: VictoryMode,
    cataclysm: Option<u32>,
}

impl VictoryOptions {
    /// Builds victory options from flat settings.
    ///
    /// `conquer_all` and `ascension_points` are mutually exclusive, and one of them
    /// must be given. A cataclysm turn of 0 means no cataclysm.
    pub fn new(
        thrones: [u32; 3],
        ascension_points: Option<u32>,
        cataclysm: Option<u32>,
        conquer_all: bool,
    ) -> Result<Self, ValidationError> {
        let mode = match (conquer_all, ascension_points) {
            (true, Some(_)) => return Err(ValidationError::ConflictingVictoryConditions),
            (false, None) => return Err(ValidationError::NoVictoryCondition),
            (true, None) => VictoryMode::ConquerAll,
            (false, Some(points)) => VictoryMode::Thrones {
                required_ascension_points: points,
            },
        };

        Ok(Self {
            thrones,
            mode,
            cataclysm: cataclysm.filter(|&turn| turn != 0),
        })
    }

    pub fn mode(&self) -> VictoryMode {
        self.mode
    }

    /// Throne counts for levels 1, 2 and 3
    pub fn thrones(&self) -> [u32; 3] {
        self.thrones
    }

    pub fn conquer_all(&self) -> bool {
        self.mode == VictoryMode::ConquerAll
    }

    pub fn ascension_points(&self) -> Option<u32> {
        match self.mode {
            VictoryMode::ConquerAll => None,
            VictoryMode::Thrones {
                required_ascension_points,
            } => Some(required_ascension_points),
        }
    }

    pub fn cataclysm(&self) -> Option<u32> {
        self.cataclysm
    }

    /// Victory flags as separate argument tokens.
    pub fn arg_tokens(&self) -> Vec<String> {
        let mut args = Vec::new();

        match self.mode {
            VictoryMode::ConquerAll => args.push("--conqall".to_string()),
            VictoryMode::Thrones {
                required_ascension_points,
            } => {
                let [l1, l2, l3] = self.thrones;
                args.push("--thrones".to_string());
                args.push(l1.to_string());
                args.push(l2.to_string());
                args.push(l3.to_string());
                args.push("--requiredap".to_string());
                args.push(required_ascension_points.to_string());
            }
        }

        if let Some(turn) = self.cataclysm {
            args.push("--cataclysm".to_string());
            args.push(turn.to_string());
        }

        args
    }

    /// Victory flags joined into a single argument string.
    pub fn to_args(&self) -> String {
        self.arg_tokens().join(" ")
    }
}

impl TryFrom<VictoryDocument> for VictoryOptions {
    type Error = ValidationError;

    fn try_from(doc: VictoryDocument) -> Result<Self, Self::Error> {
        VictoryOptions::new(
            [doc.l1_thrones, doc.l2_thrones, doc.l3_thrones],
            doc.ascension_points,
            doc.cataclysm,
            doc.conquer_all,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrones_with_cataclysm() {
        let victory = VictoryOptions::new([5, 10, 0], Some(8), Some(75), false).unwrap();
        assert_eq!(
            victory.to_args(),
            "--thrones 5 10 0 --requiredap 8 --cataclysm 75"
        );
        assert_eq!(victory.ascension_points(), Some(8));
        assert!(!victory.conquer_all());
    }

    #[test]
    fn test_conquer_all_with_cataclysm() {
        let victory = VictoryOptions::new([0, 0, 0], None, Some(3), true).unwrap();
        assert_eq!(victory.to_args(), "--conqall --cataclysm 3");
        assert_eq!(victory.mode(), VictoryMode::ConquerAll);
        assert_eq!(victory.ascension_points(), None);
    }

    #[test]
    fn test_thrones_without_cataclysm() {
        let victory = VictoryOptions::new([3, 1, 0], Some(5), None, false).unwrap();
        assert_eq!(victory.to_args(), "--thrones 3 1 0 --requiredap 5");
    }

    #[test]
    fn test_conquer_all_and_ascension_points_conflict() {
        for points in [0, 1, 8, u32::MAX] {
            assert_eq!(
                VictoryOptions::new([0, 0, 0], Some(points), None, true),
                Err(ValidationError::ConflictingVictoryConditions)
            );
        }
    }

    #[test]
    fn test_no_victory_condition() {
        assert_eq!(
            VictoryOptions::new([5, 10, 0], None, Some(75), false),
            Err(ValidationError::NoVictoryCondition)
        );
    }

    #[test]
    fn test_cataclysm_turn_zero_means_no_cataclysm() {
        let victory = VictoryOptions::new([0, 0, 0], None, Some(0), true).unwrap();
        assert_eq!(victory.cataclysm(), None);
        assert_eq!(victory.to_args(), "--conqall");

        let victory = VictoryOptions::new([2, 0, 0], Some(3), Some(0), false).unwrap();
        assert_eq!(victory.to_args(), "--thrones 2 0 0 --requiredap 3");
    }

    #[test]
    fn test_from_document_defaults() {
        let doc = VictoryDocument {
            ascension_points: Some(4),
            ..VictoryDocument::default()
        };
        let victory = VictoryOptions::try_from(doc).unwrap();
        assert_eq!(victory.thrones(), [0, 0, 0]);
        assert_eq!(victory.cataclysm(), None);
        assert_eq!(victory.to_args(), "--thrones 0 0 0 --requiredap 4");
    }
}
