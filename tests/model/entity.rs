//! Property store round-trip tests
//!
//! Tests the ordered multi-valued property bag through the public Entity
//! API, including the typed readers and their sentinel defaults.

use osidb::{AsEntity, Device, Entity};

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn add_then_list_preserves_exact_order() {
    let e = Entity::new("x");
    for value in ["v1", "v2", "v3", "v4"] {
        e.add_param("k", value);
    }
    assert_eq!(e.param_value_list("k"), vec!["v1", "v2", "v3", "v4"]);
    assert_eq!(e.param_value("k").as_deref(), Some("v1"));
}

#[test]
fn set_collapses_then_clear_empties() {
    let e = Entity::new("x");
    e.add_param("k", "v1");
    e.add_param("k", "v2");

    e.set_param("k", "only");
    assert_eq!(e.param_value_list("k"), vec!["only"]);

    e.clear_param("k");
    assert!(e.param_value_list("k").is_empty());
    assert!(e.param_value("k").is_none());
}

#[test]
fn key_iteration_follows_insertion_order() {
    let e = Entity::new("x");
    e.add_param("vendor", "Acme");
    e.add_param("class", "network");
    e.add_param("bus-type", "pci");
    assert_eq!(e.param_keys(), vec!["vendor", "class", "bus-type"]);
}

// ============================================================================
// Aliasing
// ============================================================================

#[test]
fn entity_mutation_is_visible_through_every_holder() {
    let dev = Device::new("dev/shared");
    let same = dev.clone();

    dev.entity().set_param("class", "network");
    assert_eq!(
        same.entity().param_value("class").as_deref(),
        Some("network")
    );
    assert!(Entity::ptr_eq(dev.entity(), same.entity()));
}

// ============================================================================
// Typed readers on a realistic device
// ============================================================================

#[test]
fn typed_readers_and_sentinels() {
    let dev = Device::new("dev/sound");
    dev.entity().set_param("class", "audio");
    dev.entity().set_param("channels", "8");
    dev.entity().set_param("hotplug", "true");

    assert_eq!(dev.entity().param_value_i64("channels"), 8);
    assert!(dev.entity().param_value_bool("hotplug"));

    // absent keys fall to the documented sentinels, never an error
    assert_eq!(dev.entity().param_value_i64("slots"), -1);
    assert!(!dev.entity().param_value_bool("removable"));
    assert_eq!(dev.entity().param_value_i64_with_default("slots", 2), 2);
}
