use crate::{DieDef, DieRule, EffectDef, RngState};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog defines no dice")]
    NoDice,
    #[error("duplicate die id {0}")]
    DuplicateDie(String),
    #[error("die {id} carries face value {value}, outside 1..=6")]
    FaceOutOfRange { id: String, value: u8 },
    #[error("die {0} allows zero rolls per turn")]
    ZeroRollCap(String),
    #[error("milestone offers need at least two effects, catalog has {0}")]
    NotEnoughEffects(usize),
    #[error("duplicate effect id {0}")]
    DuplicateEffect(String),
    #[error("random-class die {0} has no non-random die to adopt")]
    NoAdoptTarget(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub dice: Vec<DieDef>,
    pub effects: Vec<EffectDef>,
}

impl Catalog {
    /// Startup-time content check. A malformed catalog is a fatal
    /// configuration fault, never a runtime engine error.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.dice.is_empty() {
            return Err(CatalogError::NoDice);
        }
        let mut die_ids = HashSet::new();
        for die in &self.dice {
            if !die_ids.insert(die.id.as_str()) {
                return Err(CatalogError::DuplicateDie(die.id.clone()));
            }
            for &value in &die.faces {
                if !(1..=6).contains(&value) {
                    return Err(CatalogError::FaceOutOfRange {
                        id: die.id.clone(),
                        value,
                    });
                }
            }
            if die.max_rolls == 0 {
                return Err(CatalogError::ZeroRollCap(die.id.clone()));
            }
        }
        if self.effects.len() < 2 {
            return Err(CatalogError::NotEnoughEffects(self.effects.len()));
        }
        let mut effect_ids = HashSet::new();
        for effect in &self.effects {
            if !effect_ids.insert(effect.id.as_str()) {
                return Err(CatalogError::DuplicateEffect(effect.id.clone()));
            }
        }
        let has_adopt_target = self
            .dice
            .iter()
            .any(|die| !matches!(die.rule, DieRule::Random));
        if let Some(die) = self
            .dice
            .iter()
            .find(|die| matches!(die.rule, DieRule::Random))
        {
            if !has_adopt_target {
                return Err(CatalogError::NoAdoptTarget(die.id.clone()));
            }
        }
        Ok(())
    }

    pub fn die_by_id(&self, id: &str) -> Option<&DieDef> {
        self.dice.iter().find(|die| die.id == id)
    }

    /// Sample a non-random die for a Random-class turn-entry adoption.
    pub fn pick_adopt_target(&self, rng: &mut RngState) -> Option<&DieDef> {
        let indices: Vec<usize> = self
            .dice
            .iter()
            .enumerate()
            .filter(|(_, die)| !matches!(die.rule, DieRule::Random))
            .map(|(idx, _)| idx)
            .collect();
        pick_index(&indices, rng).map(|idx| &self.dice[idx])
    }

    /// Two distinct effects for a milestone offer, sampled without
    /// replacement.
    pub fn pick_effect_pair(&self, rng: &mut RngState) -> Option<[EffectDef; 2]> {
        if self.effects.len() < 2 {
            return None;
        }
        let first = (rng.next_u64() % self.effects.len() as u64) as usize;
        let mut second = (rng.next_u64() % (self.effects.len() - 1) as u64) as usize;
        if second >= first {
            second += 1;
        }
        Some([self.effects[first].clone(), self.effects[second].clone()])
    }
}

fn pick_index(items: &[usize], rng: &mut RngState) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let idx = (rng.next_u64() % items.len() as u64) as usize;
    items.get(idx).copied()
}
