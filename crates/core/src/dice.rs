use crate::EffectKind;
use serde::{Deserialize, Serialize};

pub const FACES_PER_DIE: usize = 6;

/// Variant-specific rule, carried by the catalog template and by every
/// player copy. Rolling a 1 busts under every rule; the variants layer
/// extra behavior on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DieRule {
    Standard,
    /// Also busts on a 2 rolled twice in a row.
    Safe,
    /// A bust additionally deducts `penalty` from the busting player's
    /// banked score, saturating at 0.
    Risky { penalty: i64 },
    /// Non-bust rolls double a non-zero turn score instead of adding
    /// the face value.
    Coin,
    /// Three equal rolls in a row pay `(value - 1) * bonus_step` on top
    /// of the face value.
    Slot { bonus_step: i64 },
    /// Adopts a fresh non-random catalog sample at every turn entry.
    Random,
}

/// Immutable catalog template for a die variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DieDef {
    pub id: String,
    pub name: String,
    pub faces: [u8; FACES_PER_DIE],
    pub max_rolls: u8,
    pub rule: DieRule,
    #[serde(default)]
    pub description: String,
}

/// One face slot of a player-owned die. The effect slot is set by the
/// milestone flow and survives Random-class adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieFace {
    pub value: u8,
    pub effect: Option<EffectKind>,
}

/// A player's own die: a deep copy of a catalog template, so effect
/// assignments never leak across players or matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDie {
    pub def_id: String,
    pub name: String,
    pub rule: DieRule,
    pub max_rolls: u8,
    pub faces: Vec<DieFace>,
}

impl PlayerDie {
    pub fn from_def(def: &DieDef) -> Self {
        Self {
            def_id: def.id.clone(),
            name: def.name.clone(),
            rule: def.rule,
            max_rolls: def.max_rolls,
            faces: def
                .faces
                .iter()
                .map(|&value| DieFace {
                    value,
                    effect: None,
                })
                .collect(),
        }
    }

    /// Replaces identity, face values, rule and roll cap while keeping the
    /// per-slot effect assignments.
    pub fn adopt(&mut self, def: &DieDef) {
        self.def_id = def.id.clone();
        self.name = def.name.clone();
        self.rule = def.rule;
        self.max_rolls = def.max_rolls;
        for (slot, &value) in self.faces.iter_mut().zip(def.faces.iter()) {
            slot.value = value;
        }
    }
}
