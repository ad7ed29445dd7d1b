use crate::schema::ContentPack;
use anyhow::Context;
use riskroll_core::{Catalog, DieDef, EffectDef, MatchRules};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const DICE_FILE: &str = "dice.json";
const EFFECTS_FILE: &str = "effects.json";
const RULES_FILE: &str = "rules.json";

const BUILTIN_DICE: &str = include_str!("../assets/dice.json");
const BUILTIN_EFFECTS: &str = include_str!("../assets/effects.json");
const BUILTIN_RULES: &str = include_str!("../assets/rules.json");

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let dice: Vec<DieDef> = load_json(dir.join(DICE_FILE))?;
    let effects: Vec<EffectDef> = load_json(dir.join(EFFECTS_FILE))?;
    let catalog = Catalog { dice, effects };
    catalog
        .validate()
        .with_context(|| format!("validate catalog from {}", dir.display()))?;
    Ok(catalog)
}

pub fn load_match_rules(dir: &Path) -> anyhow::Result<MatchRules> {
    load_json(dir.join(RULES_FILE))
}

pub fn load_pack(dir: &Path) -> anyhow::Result<ContentPack> {
    Ok(ContentPack {
        catalog: load_catalog(dir)?,
        rules: load_match_rules(dir)?,
    })
}

/// Content embedded at build time, so the binaries run without an assets
/// directory.
pub fn builtin_pack() -> anyhow::Result<ContentPack> {
    let dice: Vec<DieDef> =
        serde_json::from_str(BUILTIN_DICE).context("parse builtin dice")?;
    let effects: Vec<EffectDef> =
        serde_json::from_str(BUILTIN_EFFECTS).context("parse builtin effects")?;
    let catalog = Catalog { dice, effects };
    catalog.validate().context("validate builtin catalog")?;
    let rules: MatchRules =
        serde_json::from_str(BUILTIN_RULES).context("parse builtin rules")?;
    Ok(ContentPack { catalog, rules })
}

fn load_json<T: DeserializeOwned>(path: PathBuf) -> anyhow::Result<T> {
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use riskroll_core::{DieDef, DieRule, EffectDef, EffectKind};

    #[test]
    fn die_rule_tags_round_trip() {
        let raw = r#"{
            "id": "risky",
            "name": "Risky",
            "faces": [1, 1, 1, 6, 6, 6],
            "max_rolls": 5,
            "rule": { "type": "risky", "penalty": 6 },
            "description": "High risk, high return."
        }"#;
        let def: DieDef = serde_json::from_str(raw).expect("parse die");
        assert_eq!(def.rule, DieRule::Risky { penalty: 6 });
        assert_eq!(def.faces, [1, 1, 1, 6, 6, 6]);
    }

    #[test]
    fn effect_kind_tags_round_trip() {
        let raw = r#"{
            "id": "second_wind",
            "name": "Second Wind",
            "kind": { "type": "reroll" }
        }"#;
        let def: EffectDef = serde_json::from_str(raw).expect("parse effect");
        assert_eq!(def.kind, EffectKind::Reroll);
        assert!(def.description.is_empty());
    }
}
