use crate::{EffectDef, EffectKind, PlayerState};

/// Display snapshot of the most recent roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolledFace {
    pub slot: usize,
    pub value: u8,
    pub effect: Option<EffectKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Roll and hold are both legal for the current player, up to the
    /// roll cap.
    Turn,
    /// Milestone sub-flow: blocks roll/hold until the chooser picks one
    /// of the offered effects and then a face of their own die.
    EffectAssign {
        chooser: usize,
        choices: [EffectDef; 2],
        picked: Option<EffectDef>,
    },
    /// Terminal. No further intent mutates state.
    Over { winner: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub players: [PlayerState; 2],
    pub current: usize,
    pub turn_score: i64,
    pub last_face: Option<RolledFace>,
    pub phase: Phase,
}

impl MatchState {
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current]
    }

    pub fn opponent_index(&self) -> usize {
        1 - self.current
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            _ => None,
        }
    }
}
