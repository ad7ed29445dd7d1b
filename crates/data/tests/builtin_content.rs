use riskroll_core::{DieRule, EffectKind, EventBus, MatchRun};
use riskroll_data::builtin_pack;

#[test]
fn builtin_pack_loads_and_validates() {
    let pack = builtin_pack().expect("builtin content");
    assert_eq!(pack.catalog.dice.len(), 7);
    assert_eq!(pack.catalog.effects.len(), 5);
    assert_eq!(pack.rules.target_score, 100);
    assert_eq!(pack.rules.milestone_step, 20);
}

#[test]
fn builtin_roster_carries_the_expected_rules() {
    let pack = builtin_pack().expect("builtin content");
    let catalog = &pack.catalog;
    for id in [
        "balanced",
        "aggressive",
        "safe",
        "risky",
        "coin",
        "slot",
        "wildcard",
    ] {
        assert!(catalog.die_by_id(id).is_some(), "missing die {id}");
    }
    assert_eq!(
        catalog.die_by_id("risky").unwrap().rule,
        DieRule::Risky { penalty: 6 }
    );
    assert_eq!(
        catalog.die_by_id("slot").unwrap().rule,
        DieRule::Slot { bonus_step: 5 }
    );
    assert_eq!(catalog.die_by_id("wildcard").unwrap().rule, DieRule::Random);

    // The Safe die never carries a bust face of its own.
    let safe = catalog.die_by_id("safe").unwrap();
    assert!(safe.faces.iter().all(|&value| value != 1));

    let kinds: Vec<EffectKind> = catalog.effects.iter().map(|effect| effect.kind).collect();
    assert!(kinds.contains(&EffectKind::Bonus { amount: 5 }));
    assert!(kinds.contains(&EffectKind::Steal { amount: 3 }));
    assert!(kinds.contains(&EffectKind::Sap { amount: 4 }));
    assert!(kinds.contains(&EffectKind::Surge { amount: 6 }));
    assert!(kinds.contains(&EffectKind::Reroll));
}

#[test]
fn a_match_starts_from_builtin_content() {
    let pack = builtin_pack().expect("builtin content");
    let mut events = EventBus::default();
    let mut run =
        MatchRun::new(pack.rules, pack.catalog, 0xD1CE, [0, 3]).expect("valid setup");
    run.start(&mut events);
    assert_eq!(run.state.current, 0);
    assert_eq!(run.state.players[0].die.name, "Balanced");
    assert_eq!(run.state.players[1].die.name, "Risky");
    assert!(!run.state.game_over());
}
