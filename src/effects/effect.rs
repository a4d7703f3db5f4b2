//! Card effect definitions.
//!
//! Effects are the extra abilities a card carries beyond plain damage and
//! armor. On the wire each effect is a short tag such as `"vulnerable_2"`;
//! in the engine it is a typed variant, so resolution is an exhaustive
//! match and an unknown tag fails when the card is loaded, not when played.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, StatusKind};

/// Turns a temporary Strength buff lasts (expires at the player's next
/// end-of-turn).
pub const TEMPORARY_STRENGTH_TURNS: u32 = 1;

/// Enemy turns Vulnerable lasts after (re)application.
pub const VULNERABLE_TURNS: u32 = 3;

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Player,
    Enemy,
}

/// An extra card ability.
///
/// ## Tags
///
/// | Tag                     | Effect                                   |
/// |-------------------------|------------------------------------------|
/// | `strength_N`            | +N Strength on the player until turn end |
/// | `strength_permanent_N`  | +N Strength on the player, permanent     |
/// | `vulnerable_N`          | +N Vulnerable on the enemy for 3 turns   |
/// | `draw_N`                | Draw N cards                             |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CardEffect {
    Strength { amount: u32 },
    PermanentStrength { amount: u32 },
    Vulnerable { amount: u32 },
    Draw { count: u32 },
}

/// A status effect application described by a `CardEffect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusApplication {
    pub target: Target,
    pub status: StatusKind,
    pub amount: u32,
    pub duration: Option<u32>,
}

impl CardEffect {
    /// The status this effect applies, if it applies one.
    #[must_use]
    pub fn status_application(self) -> Option<StatusApplication> {
        match self {
            CardEffect::Strength { amount } => Some(StatusApplication {
                target: Target::Player,
                status: StatusKind::Strength,
                amount,
                duration: Some(TEMPORARY_STRENGTH_TURNS),
            }),
            CardEffect::PermanentStrength { amount } => Some(StatusApplication {
                target: Target::Player,
                status: StatusKind::Strength,
                amount,
                duration: None,
            }),
            CardEffect::Vulnerable { amount } => Some(StatusApplication {
                target: Target::Enemy,
                status: StatusKind::Vulnerable,
                amount,
                duration: Some(VULNERABLE_TURNS),
            }),
            CardEffect::Draw { .. } => None,
        }
    }
}

impl FromStr for CardEffect {
    type Err = GameError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unknown = || GameError::UnknownEffect(tag.to_string());

        let (kind, value) = tag.rsplit_once('_').ok_or_else(unknown)?;
        let value: u32 = value.parse().map_err(|_| unknown())?;

        match kind {
            "strength" => Ok(CardEffect::Strength { amount: value }),
            "strength_permanent" => Ok(CardEffect::PermanentStrength { amount: value }),
            "vulnerable" => Ok(CardEffect::Vulnerable { amount: value }),
            "draw" => Ok(CardEffect::Draw { count: value }),
            _ => Err(unknown()),
        }
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardEffect::Strength { amount } => write!(f, "strength_{}", amount),
            CardEffect::PermanentStrength { amount } => write!(f, "strength_permanent_{}", amount),
            CardEffect::Vulnerable { amount } => write!(f, "vulnerable_{}", amount),
            CardEffect::Draw { count } => write!(f, "draw_{}", count),
        }
    }
}

impl TryFrom<String> for CardEffect {
    type Error = GameError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<CardEffect> for String {
    fn from(effect: CardEffect) -> Self {
        effect.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("strength_2".parse::<CardEffect>().unwrap(), CardEffect::Strength { amount: 2 });
        assert_eq!(
            "strength_permanent_2".parse::<CardEffect>().unwrap(),
            CardEffect::PermanentStrength { amount: 2 }
        );
        assert_eq!("vulnerable_2".parse::<CardEffect>().unwrap(), CardEffect::Vulnerable { amount: 2 });
        assert_eq!("draw_1".parse::<CardEffect>().unwrap(), CardEffect::Draw { count: 1 });
    }

    #[test]
    fn test_parse_unknown_tags() {
        for tag in ["", "strength", "weak_2", "draw_x", "vulnerable_-1", "draw_1_extra"] {
            assert!(
                matches!(tag.parse::<CardEffect>(), Err(GameError::UnknownEffect(_))),
                "{tag} should not parse"
            );
        }
    }

    #[test]
    fn test_display_is_tag() {
        assert_eq!(CardEffect::PermanentStrength { amount: 3 }.to_string(), "strength_permanent_3");
        assert_eq!(CardEffect::Draw { count: 1 }.to_string(), "draw_1");
    }

    #[test]
    fn test_status_applications() {
        let flex = CardEffect::Strength { amount: 2 }.status_application().unwrap();
        assert_eq!(flex.target, Target::Player);
        assert_eq!(flex.duration, Some(1));

        let bash = CardEffect::Vulnerable { amount: 2 }.status_application().unwrap();
        assert_eq!(bash.target, Target::Enemy);
        assert_eq!(bash.status, StatusKind::Vulnerable);
        assert_eq!(bash.duration, Some(3));

        let inflame = CardEffect::PermanentStrength { amount: 2 }.status_application().unwrap();
        assert_eq!(inflame.duration, None);

        assert!(CardEffect::Draw { count: 1 }.status_application().is_none());
    }

    #[test]
    fn test_serde_as_tag() {
        let json = serde_json::to_string(&CardEffect::Vulnerable { amount: 2 }).unwrap();
        assert_eq!(json, r#""vulnerable_2""#);

        let parsed: CardEffect = serde_json::from_str(r#""draw_1""#).unwrap();
        assert_eq!(parsed, CardEffect::Draw { count: 1 });

        assert!(serde_json::from_str::<CardEffect>(r#""fly_1""#).is_err());
    }
}
