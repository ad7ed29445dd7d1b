use crate::{
    Catalog, CatalogError, DieRule, EffectKind, Event, EventBus, MatchRules, MatchState, Phase,
    PlayerDie, PlayerState, RngState, RolledFace, FACES_PER_DIE,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("player {player} picked die {pick}, catalog has {count}")]
    UnknownDie {
        player: usize,
        pick: usize,
        count: usize,
    },
}

/// A running two-player match. The engine is the sole mutator of
/// `MatchState`; the presentation layer reads it and feeds intents back.
///
/// Intent methods return `true` when the intent applied and `false` when
/// it was ignored: rolling past the cap, or any action outside its phase,
/// is a no-op rather than an error.
#[derive(Debug)]
pub struct MatchRun {
    pub rules: MatchRules,
    pub catalog: Catalog,
    pub rng: RngState,
    pub state: MatchState,
}

impl MatchRun {
    /// `picks` are catalog die indices, one per player. Each player gets
    /// an independent copy of the picked template.
    pub fn new(
        rules: MatchRules,
        catalog: Catalog,
        seed: u64,
        picks: [usize; 2],
    ) -> Result<Self, MatchError> {
        catalog.validate()?;
        for (player, &pick) in picks.iter().enumerate() {
            if pick >= catalog.dice.len() {
                return Err(MatchError::UnknownDie {
                    player,
                    pick,
                    count: catalog.dice.len(),
                });
            }
        }
        let players = [
            PlayerState::new(PlayerDie::from_def(&catalog.dice[picks[0]])),
            PlayerState::new(PlayerDie::from_def(&catalog.dice[picks[1]])),
        ];
        Ok(Self {
            rules,
            catalog,
            rng: RngState::from_seed(seed),
            state: MatchState {
                players,
                current: 0,
                turn_score: 0,
                last_face: None,
                phase: Phase::Turn,
            },
        })
    }

    /// Runs the first player's turn-entry action. Call once after `new`,
    /// before the first intent.
    pub fn start(&mut self, events: &mut EventBus) {
        self.enter_turn(self.state.current, events);
    }

    /// Roll intent: sample one face slot uniformly from the six (face
    /// values repeat, so a value's probability is its face count over 6),
    /// fire any attached effect, then apply the die rule.
    pub fn roll(&mut self, events: &mut EventBus) -> bool {
        if self.state.phase != Phase::Turn {
            return false;
        }
        let current = self.state.current;
        if !self.state.players[current].can_roll() {
            return false;
        }
        self.state.players[current].rolls_used += 1;
        let slot = (self.rng.next_u64() % FACES_PER_DIE as u64) as usize;
        self.resolve_roll(slot, events);
        true
    }

    /// Hold intent: bank the turn score, then resolve win, milestone, or
    /// turn pass, in that order.
    pub fn hold(&mut self, events: &mut EventBus) -> bool {
        if self.state.phase != Phase::Turn {
            return false;
        }
        let current = self.state.current;
        let banked = self.state.turn_score;
        self.state.turn_score = 0;
        self.state.players[current].score += banked;
        let total = self.state.players[current].score;
        events.push(Event::Banked {
            player: current,
            banked,
            total,
        });
        if total >= self.rules.target_score {
            self.state.phase = Phase::Over { winner: current };
            events.push(Event::MatchWon {
                winner: current,
                score: total,
            });
            return true;
        }
        let level = self.rules.milestone_for(total);
        if level > self.state.players[current].milestone_level {
            // One sub-flow per bank, even when the bank crosses several
            // levels at once.
            self.state.players[current].milestone_level = level;
            if let Some(choices) = self.catalog.pick_effect_pair(&mut self.rng) {
                let chooser = self.state.opponent_index();
                events.push(Event::MilestoneReached {
                    player: current,
                    level,
                });
                events.push(Event::EffectsOffered {
                    chooser,
                    first: choices[0].name.clone(),
                    second: choices[1].name.clone(),
                });
                self.state.phase = Phase::EffectAssign {
                    chooser,
                    choices,
                    picked: None,
                };
                return true;
            }
        }
        self.pass_turn(events);
        true
    }

    /// First half of the milestone sub-flow: pick one of the two offered
    /// effects.
    pub fn choose_effect(&mut self, index: usize, events: &mut EventBus) -> bool {
        match &mut self.state.phase {
            Phase::EffectAssign {
                chooser,
                choices,
                picked,
            } if picked.is_none() && index < choices.len() => {
                let choice = choices[index].clone();
                events.push(Event::EffectChosen {
                    chooser: *chooser,
                    effect: choice.name.clone(),
                });
                *picked = Some(choice);
                true
            }
            _ => false,
        }
    }

    /// Second half: attach the picked effect to a face of the chooser's
    /// own die, overwriting any effect already there, then resume play.
    pub fn choose_face(&mut self, slot: usize, events: &mut EventBus) -> bool {
        let (chooser, effect) = match &self.state.phase {
            Phase::EffectAssign {
                chooser,
                picked: Some(effect),
                ..
            } if slot < FACES_PER_DIE => (*chooser, effect.clone()),
            _ => return false,
        };
        self.state.players[chooser].die.faces[slot].effect = Some(effect.kind);
        events.push(Event::EffectAttached {
            player: chooser,
            slot,
            effect: effect.name,
        });
        self.state.phase = Phase::Turn;
        self.pass_turn(events);
        true
    }

    fn resolve_roll(&mut self, slot: usize, events: &mut EventBus) {
        let current = self.state.current;
        let face = self.state.players[current].die.faces[slot];
        self.state.last_face = Some(RolledFace {
            slot,
            value: face.value,
            effect: face.effect,
        });
        events.push(Event::Rolled {
            player: current,
            value: face.value,
            rolls_used: self.state.players[current].rolls_used,
            max_rolls: self.state.players[current].die.max_rolls,
        });
        // Effects fire before the bust rule: steal and sap land even on a
        // busting face, and a surge on a busting roll is wiped with the
        // rest of the turn score.
        if let Some(effect) = face.effect {
            self.apply_effect(effect, events);
        }
        let rule = self.state.players[current].die.rule;
        let busted = match rule {
            DieRule::Safe => {
                face.value == 1
                    || (face.value == 2 && self.state.players[current].last_roll == Some(2))
            }
            _ => face.value == 1,
        };
        if busted {
            self.resolve_bust(face.value, rule, events);
            return;
        }
        match rule {
            DieRule::Coin if self.state.turn_score > 0 => {
                self.state.turn_score *= 2;
                events.push(Event::TurnDoubled {
                    player: current,
                    turn_score: self.state.turn_score,
                });
            }
            DieRule::Slot { bonus_step } => {
                self.state.turn_score += face.value as i64;
                let streak = {
                    let player = &self.state.players[current];
                    player.last_roll == Some(face.value) && player.prev_roll == Some(face.value)
                };
                if streak {
                    let bonus = (face.value as i64 - 1) * bonus_step;
                    self.state.turn_score += bonus;
                    events.push(Event::StreakBonus {
                        player: current,
                        value: face.value,
                        bonus,
                    });
                }
            }
            _ => {
                self.state.turn_score += face.value as i64;
            }
        }
        self.state.players[current].note_roll(face.value);
    }

    fn apply_effect(&mut self, effect: EffectKind, events: &mut EventBus) {
        let current = self.state.current;
        let opponent = self.state.opponent_index();
        let applied = match effect {
            EffectKind::Bonus { amount } => {
                self.state.players[current].score += amount;
                amount
            }
            EffectKind::Steal { amount } => {
                let taken = amount.min(self.state.players[opponent].score).max(0);
                self.state.players[opponent].score -= taken;
                self.state.players[current].score += taken;
                taken
            }
            EffectKind::Sap { amount } => {
                let before = self.state.players[opponent].score;
                self.state.players[opponent].score = (before - amount).max(0);
                before - self.state.players[opponent].score
            }
            EffectKind::Surge { amount } => {
                self.state.turn_score += amount;
                amount
            }
            EffectKind::Reroll => {
                let player = &mut self.state.players[current];
                player.rolls_used = player.rolls_used.saturating_sub(1);
                0
            }
        };
        events.push(Event::EffectFired {
            player: current,
            effect,
            applied,
        });
    }

    fn resolve_bust(&mut self, value: u8, rule: DieRule, events: &mut EventBus) {
        let current = self.state.current;
        let forfeited = self.state.turn_score;
        self.state.turn_score = 0;
        let mut penalty = 0;
        if let DieRule::Risky { penalty: amount } = rule {
            let before = self.state.players[current].score;
            self.state.players[current].score = (before - amount).max(0);
            penalty = before - self.state.players[current].score;
        }
        events.push(Event::Busted {
            player: current,
            value,
            forfeited,
            penalty,
        });
        self.pass_turn(events);
    }

    fn pass_turn(&mut self, events: &mut EventBus) {
        let next = self.state.opponent_index();
        self.state.current = next;
        self.enter_turn(next, events);
    }

    /// Turn-entry action: counters and two-roll memory reset, and a
    /// randomized player's die adopts a fresh non-random sample, keeping
    /// its face slot effects.
    fn enter_turn(&mut self, player: usize, events: &mut EventBus) {
        self.state.last_face = None;
        self.state.players[player].reset_turn();
        if self.state.players[player].randomized {
            if let Some(def) = self.catalog.pick_adopt_target(&mut self.rng).cloned() {
                let was = self.state.players[player].die.name.clone();
                self.state.players[player].die.adopt(&def);
                events.push(Event::DieAdopted {
                    player,
                    was,
                    now: def.name,
                });
            }
        }
        events.push(Event::TurnStarted {
            player,
            die: self.state.players[player].die.name.clone(),
        });
    }
}
