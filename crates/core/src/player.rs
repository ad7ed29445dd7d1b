use crate::{DieRule, PlayerDie};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub score: i64,
    pub die: PlayerDie,
    pub rolls_used: u8,
    pub last_roll: Option<u8>,
    pub prev_roll: Option<u8>,
    pub milestone_level: i64,
    /// Selected a Random-class die; the copy re-adopts at every turn entry.
    pub randomized: bool,
}

impl PlayerState {
    pub fn new(die: PlayerDie) -> Self {
        let randomized = matches!(die.rule, DieRule::Random);
        Self {
            score: 0,
            die,
            rolls_used: 0,
            last_roll: None,
            prev_roll: None,
            milestone_level: 0,
            randomized,
        }
    }

    /// Entry action on every player switch, bust or bank alike.
    pub fn reset_turn(&mut self) {
        self.rolls_used = 0;
        self.last_roll = None;
        self.prev_roll = None;
    }

    /// Shift the two-roll memory used by the Safe and Slot rules.
    pub fn note_roll(&mut self, value: u8) {
        self.prev_roll = self.last_roll;
        self.last_roll = Some(value);
    }

    pub fn can_roll(&self) -> bool {
        self.rolls_used < self.die.max_rolls
    }
}
