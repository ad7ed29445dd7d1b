use crate::EffectKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TurnStarted {
        player: usize,
        die: String,
    },
    /// A Random-class die adopted a fresh catalog sample at turn entry.
    DieAdopted {
        player: usize,
        was: String,
        now: String,
    },
    Rolled {
        player: usize,
        value: u8,
        rolls_used: u8,
        max_rolls: u8,
    },
    /// `applied` is the magnitude that actually landed (a bounded steal
    /// reports the transferred amount, not the nominal one).
    EffectFired {
        player: usize,
        effect: EffectKind,
        applied: i64,
    },
    TurnDoubled {
        player: usize,
        turn_score: i64,
    },
    StreakBonus {
        player: usize,
        value: u8,
        bonus: i64,
    },
    Busted {
        player: usize,
        value: u8,
        forfeited: i64,
        penalty: i64,
    },
    Banked {
        player: usize,
        banked: i64,
        total: i64,
    },
    MilestoneReached {
        player: usize,
        level: i64,
    },
    EffectsOffered {
        chooser: usize,
        first: String,
        second: String,
    },
    EffectChosen {
        chooser: usize,
        effect: String,
    },
    EffectAttached {
        player: usize,
        slot: usize,
        effect: String,
    },
    MatchWon {
        winner: usize,
        score: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
