pub use riskroll_core::{Catalog, DieDef, DieRule, EffectDef, EffectKind, MatchRules};

/// A fully loaded, validated content set: everything one match needs.
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub catalog: Catalog,
    pub rules: MatchRules,
}
