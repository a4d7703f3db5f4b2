//! Status effects attached to combatants.
//!
//! A combatant holds at most one effect per [`StatusKind`]. Reapplying an
//! effect adds to its magnitude and replaces its remaining duration.
//! Effects without a duration are permanent; timed ones tick down once at
//! the end of their owner's turn and are removed when they reach zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Known status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Strength,
    Vulnerable,
}

impl StatusKind {
    /// Display name, also the wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusKind::Strength => "Strength",
            StatusKind::Vulnerable => "Vulnerable",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single status effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(rename = "name")]
    pub kind: StatusKind,

    #[serde(rename = "value")]
    pub magnitude: u32,

    /// Remaining owner turns. `None` = permanent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// The status effects of one combatant, unique by kind.
///
/// SmallVec keeps the usual handful of effects inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEffects {
    effects: SmallVec<[StatusEffect; 4]>,
}

impl StatusEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect, stacking onto an existing one of the same kind.
    ///
    /// Magnitudes add; the duration is reset to `duration`, not summed.
    pub fn apply(&mut self, kind: StatusKind, magnitude: u32, duration: Option<u32>) {
        match self.effects.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => {
                existing.magnitude += magnitude;
                existing.duration = duration;
            }
            None => self.effects.push(StatusEffect {
                kind,
                magnitude,
                duration,
            }),
        }
    }

    /// Tick down every timed effect and drop the expired ones.
    ///
    /// Returns the kinds removed, in list order.
    pub fn decay(&mut self) -> Vec<StatusKind> {
        let mut expired = Vec::new();
        self.effects.retain(|effect| match effect.duration.as_mut() {
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                if *turns == 0 {
                    expired.push(effect.kind);
                    false
                } else {
                    true
                }
            }
            None => true,
        });
        expired
    }

    /// Look up an effect by kind.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Magnitude of an effect, 0 if absent.
    #[must_use]
    pub fn magnitude(&self, kind: StatusKind) -> u32 {
        self.get(kind).map_or(0, |e| e.magnitude)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
