use serde::{Deserialize, Serialize};

/// Scoring modifier a milestone can attach to one face of a player's die.
///
/// Fires every time the carrying face is rolled, in addition to the normal
/// face-value scoring and the die's bust rule. Steal and sap only ever touch
/// the opponent's banked score, clamped at zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectKind {
    /// Flat bonus banked directly by the roller.
    Bonus { amount: i64 },
    /// Transfer up to `amount` from the opponent's banked score.
    Steal { amount: i64 },
    /// Flat debuff to the opponent's banked score.
    Sap { amount: i64 },
    /// Bonus added to the in-progress turn score.
    Surge { amount: i64 },
    /// Refunds the roll the triggering face consumed.
    Reroll,
}

impl EffectKind {
    pub fn label(&self) -> String {
        match self {
            Self::Bonus { amount } => format!("bank +{amount}"),
            Self::Steal { amount } => format!("steal {amount}"),
            Self::Sap { amount } => format!("sap {amount}"),
            Self::Surge { amount } => format!("turn +{amount}"),
            Self::Reroll => "free roll".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectDef {
    pub id: String,
    pub name: String,
    pub kind: EffectKind,
    #[serde(default)]
    pub description: String,
}
