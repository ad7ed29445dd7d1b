use riskroll_core::{Event, EventBus, MatchRun, Phase, FACES_PER_DIE};
use riskroll_data::ContentPack;
use std::collections::VecDeque;

pub const DEFAULT_MATCH_SEED: u64 = 0xD1CE;
const MAX_EVENT_LOG: usize = 200;

#[derive(Debug)]
pub enum Stage {
    PickDie {
        player: usize,
        first_pick: Option<usize>,
    },
    Table {
        run: MatchRun,
    },
}

enum Confirm {
    FirstDie(usize),
    SecondDie([usize; 2]),
    Effect(usize),
    Face(usize),
    Nothing,
}

pub struct App {
    pub seed: u64,
    pub pack: ContentPack,
    pub stage: Stage,
    pub cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
    events: EventBus,
}

impl App {
    pub fn bootstrap(pack: ContentPack, seed: u64) -> Self {
        Self {
            seed,
            pack,
            stage: Stage::PickDie {
                player: 0,
                first_pick: None,
            },
            cursor: 0,
            event_log: VecDeque::new(),
            status_line: "Player 1: pick a die (enter)".to_string(),
            show_help: false,
            should_quit: false,
            events: EventBus::default(),
        }
    }

    /// Number of entries the cursor can move across in the current context.
    pub fn cursor_len(&self) -> usize {
        match &self.stage {
            Stage::PickDie { .. } => self.pack.catalog.dice.len(),
            Stage::Table { run } => match &run.state.phase {
                Phase::EffectAssign {
                    picked: None,
                    choices,
                    ..
                } => choices.len(),
                Phase::EffectAssign {
                    picked: Some(_), ..
                } => FACES_PER_DIE,
                _ => 0,
            },
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    pub fn quick_pick(&mut self, index: usize) {
        if index < self.cursor_len() {
            self.cursor = index;
            self.confirm();
        }
    }

    pub fn confirm(&mut self) {
        let action = match &self.stage {
            Stage::PickDie {
                first_pick: None, ..
            } => Confirm::FirstDie(self.cursor),
            Stage::PickDie {
                first_pick: Some(first),
                ..
            } => Confirm::SecondDie([*first, self.cursor]),
            Stage::Table { run } => match &run.state.phase {
                Phase::EffectAssign { picked: None, .. } => Confirm::Effect(self.cursor),
                Phase::EffectAssign {
                    picked: Some(_), ..
                } => Confirm::Face(self.cursor),
                _ => Confirm::Nothing,
            },
        };
        match action {
            Confirm::FirstDie(pick) => {
                self.stage = Stage::PickDie {
                    player: 1,
                    first_pick: Some(pick),
                };
                self.cursor = 0;
                self.status_line = "Player 2: pick a die (enter)".to_string();
            }
            Confirm::SecondDie(picks) => self.start_match(picks),
            Confirm::Effect(index) => self.pick_effect(index),
            Confirm::Face(slot) => self.pick_face(slot),
            Confirm::Nothing => {
                self.status_line = "nothing to confirm; r rolls, h holds".to_string();
            }
        }
    }

    pub fn roll(&mut self) {
        let applied = match &mut self.stage {
            Stage::Table { run } => run.roll(&mut self.events),
            _ => {
                self.status_line = "pick dice first".to_string();
                return;
            }
        };
        self.status_line = if applied {
            "r roll, h hold, ? help".to_string()
        } else {
            self.ignored_reason("roll")
        };
        self.drain_events();
        self.after_change();
    }

    pub fn hold(&mut self) {
        let applied = match &mut self.stage {
            Stage::Table { run } => run.hold(&mut self.events),
            _ => {
                self.status_line = "pick dice first".to_string();
                return;
            }
        };
        self.status_line = if applied {
            "r roll, h hold, ? help".to_string()
        } else {
            self.ignored_reason("hold")
        };
        self.drain_events();
        self.after_change();
    }

    fn pick_effect(&mut self, index: usize) {
        if let Stage::Table { run } = &mut self.stage {
            if run.choose_effect(index, &mut self.events) {
                self.cursor = 0;
            }
        }
        self.drain_events();
        self.after_change();
    }

    fn pick_face(&mut self, slot: usize) {
        if let Stage::Table { run } = &mut self.stage {
            if run.choose_face(slot, &mut self.events) {
                self.cursor = 0;
            }
        }
        self.drain_events();
        self.after_change();
    }

    fn start_match(&mut self, picks: [usize; 2]) {
        match MatchRun::new(
            self.pack.rules.clone(),
            self.pack.catalog.clone(),
            self.seed,
            picks,
        ) {
            Ok(mut run) => {
                run.start(&mut self.events);
                self.stage = Stage::Table { run };
                self.cursor = 0;
                self.status_line = "r roll, h hold, ? help".to_string();
                self.drain_events();
            }
            Err(err) => self.status_line = err.to_string(),
        }
    }

    fn ignored_reason(&self, intent: &str) -> String {
        match &self.stage {
            Stage::Table { run } => match &run.state.phase {
                Phase::Over { .. } => format!("{intent} ignored: match is over"),
                Phase::EffectAssign { .. } => {
                    format!("{intent} ignored: effect assignment pending")
                }
                Phase::Turn => format!("{intent} ignored: roll cap reached"),
            },
            _ => format!("{intent} ignored"),
        }
    }

    fn after_change(&mut self) {
        let status = match &self.stage {
            Stage::Table { run } => match &run.state.phase {
                Phase::EffectAssign {
                    chooser,
                    picked: None,
                    ..
                } => Some(format!("Player {}: pick an effect", chooser + 1)),
                Phase::EffectAssign {
                    chooser,
                    picked: Some(effect),
                    ..
                } => Some(format!(
                    "Player {}: pick a face for {}",
                    chooser + 1,
                    effect.name
                )),
                Phase::Over { winner } => Some(format!("Player {} wins! q quits", winner + 1)),
                Phase::Turn => None,
            },
            _ => None,
        };
        if let Some(status) = status {
            self.status_line = status;
        }
        let len = self.cursor_len();
        if len > 0 && self.cursor >= len {
            self.cursor = 0;
        }
    }

    fn drain_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            if self.event_log.len() == MAX_EVENT_LOG {
                self.event_log.pop_front();
            }
            self.event_log.push_back(describe_event(&event));
        }
    }
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::TurnStarted { player, die } => format!("P{} turn with {}", player + 1, die),
        Event::DieAdopted { player, was, now } => {
            format!("P{} wildcard shifts: {} -> {}", player + 1, was, now)
        }
        Event::Rolled {
            player,
            value,
            rolls_used,
            max_rolls,
        } => format!("P{} rolled {} ({}/{})", player + 1, value, rolls_used, max_rolls),
        Event::EffectFired {
            player,
            effect,
            applied,
        } => format!("P{} face effect: {} ({})", player + 1, effect.label(), applied),
        Event::TurnDoubled { player, turn_score } => {
            format!("P{} doubled the pot to {}", player + 1, turn_score)
        }
        Event::StreakBonus {
            player,
            value,
            bonus,
        } => format!("P{} streak of {}s pays +{}", player + 1, value, bonus),
        Event::Busted {
            player,
            value,
            forfeited,
            penalty,
        } => {
            if *penalty > 0 {
                format!(
                    "P{} busted on {} (lost {} pot, {} banked)",
                    player + 1,
                    value,
                    forfeited,
                    penalty
                )
            } else {
                format!("P{} busted on {} (lost {} pot)", player + 1, value, forfeited)
            }
        }
        Event::Banked {
            player,
            banked,
            total,
        } => format!("P{} banked {} ({} total)", player + 1, banked, total),
        Event::MilestoneReached { player, level } => {
            format!("P{} hit milestone {}", player + 1, level)
        }
        Event::EffectsOffered {
            chooser,
            first,
            second,
        } => format!("P{} may take {} or {}", chooser + 1, first, second),
        Event::EffectChosen { chooser, effect } => {
            format!("P{} chose {}", chooser + 1, effect)
        }
        Event::EffectAttached {
            player,
            slot,
            effect,
        } => format!("P{} put {} on face {}", player + 1, effect, slot + 1),
        Event::MatchWon { winner, score } => {
            format!("P{} wins with {}", winner + 1, score)
        }
    }
}
