// Tab registry properties: id uniqueness, active consistency and the
// removal tie-break.

use std::collections::HashSet;
use std::sync::Arc;

use quire_tabs::{ChangeCallback, DocumentChange, QuireConfig, TabRegistry};

fn noop() -> ChangeCallback {
    Arc::new(|_: &DocumentChange| {})
}

/// Registry holding exactly three tabs `[A, B, C]`.
fn three_tabs() -> (TabRegistry, [String; 3]) {
    let mut registry = TabRegistry::empty(QuireConfig::default(), noop());
    let a = registry.add_tab().id().to_string();
    let b = registry.add_tab().id().to_string();
    let c = registry.add_tab().id().to_string();
    (registry, [a, b, c])
}

fn ids(registry: &TabRegistry) -> Vec<String> {
    registry.tabs().iter().map(|tab| tab.id().to_string()).collect()
}

fn assert_active_consistent(registry: &TabRegistry) {
    match registry.active_id() {
        Some(active) => assert!(registry.get(active.as_str()).is_some()),
        None => assert!(registry.is_empty()),
    }
    if !registry.is_empty() {
        assert!(registry.active_id().is_some());
    }
}

#[test]
fn test_added_ids_are_unique() {
    let mut registry = TabRegistry::new(QuireConfig::default(), noop());
    for _ in 0..200 {
        registry.add_tab();
    }

    let unique: HashSet<_> = ids(&registry).into_iter().collect();
    assert_eq!(unique.len(), registry.len());
    assert_eq!(registry.len(), 202);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut registry = TabRegistry::empty(QuireConfig::default(), noop());
    let first = registry.add_tab().id().to_string();
    registry.remove_tab(&first);
    let second = registry.add_tab().id().to_string();
    assert_ne!(first, second);
}

#[test]
fn test_remove_active_first_selects_next_first() {
    let (mut registry, [a, b, c]) = three_tabs();
    assert!(registry.switch_to(&a));

    registry.remove_tab(&a);
    assert_eq!(ids(&registry), [b.clone(), c]);
    assert_eq!(registry.active_id().unwrap(), b.as_str());
}

#[test]
fn test_remove_active_middle_selects_first() {
    let (mut registry, [a, b, c]) = three_tabs();
    assert!(registry.switch_to(&b));

    registry.remove_tab(&b);
    assert_eq!(ids(&registry), [a.clone(), c]);
    assert_eq!(registry.active_id().unwrap(), a.as_str());
}

#[test]
fn test_remove_unknown_is_noop() {
    let (mut registry, [_, b, _]) = three_tabs();
    registry.switch_to(&b);
    let before = ids(&registry);

    assert!(registry.remove_tab("nonexistent").is_none());
    assert_eq!(ids(&registry), before);
    assert_eq!(registry.active_id().unwrap(), b.as_str());
}

#[test]
fn test_active_consistent_across_operations() {
    let mut registry = TabRegistry::new(QuireConfig::default(), noop());
    assert_active_consistent(&registry);

    let mut opened = Vec::new();
    for round in 0..12 {
        let id = registry.add_tab().id().to_string();
        assert_active_consistent(&registry);
        opened.push(id);

        if round % 3 == 0 {
            registry.switch_to("test-case");
            assert_active_consistent(&registry);
        }
        if round % 2 == 1 {
            let victim = opened.remove(0);
            registry.remove_tab(&victim);
            assert_active_consistent(&registry);
        }
        registry.switch_to("missing");
        assert_active_consistent(&registry);
    }

    let all = ids(&registry);
    for id in all {
        registry.remove_tab(&id);
        assert_active_consistent(&registry);
    }
    assert!(registry.active_id().is_none());
}
