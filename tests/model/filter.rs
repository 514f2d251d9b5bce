//! Filter matching semantics
//!
//! Constraints are AND-composed everywhere: across distinct keys, and
//! across multiple values registered under the same key.

use osidb::{AsEntity, Device, Entity, Filter, Matcher};

fn device(id: &str) -> Device {
    Device::new(id)
}

#[test]
fn empty_filter_matches_any_entity() {
    let filter = Filter::new();
    assert!(filter.matches(&Entity::new("anything")));
    assert!(filter.matches(&device("dev/blank")));
}

#[test]
fn value_mismatch_fails() {
    let dev = device("dev/kbd");
    dev.entity().set_param("class", "input");

    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    assert!(!filter.matches(&dev));
}

#[test]
fn constrained_key_never_set_fails() {
    let dev = device("dev/bare");

    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    assert!(!filter.matches(&dev));
}

#[test]
fn distinct_keys_must_all_pass() {
    let dev = device("dev/nic");
    dev.entity().set_param("class", "network");
    dev.entity().set_param("bus-type", "pci");

    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    filter.add_constraint("bus-type", "isa");
    assert!(!filter.matches(&dev));

    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    filter.add_constraint("bus-type", "pci");
    assert!(filter.matches(&dev));
}

#[test]
fn repeated_key_narrows_the_filter() {
    // a filter requiring both usb and pci under bus-type only matches an
    // entity carrying both values
    let mut filter = Filter::new();
    filter.add_constraint("bus-type", "usb");
    filter.add_constraint("bus-type", "pci");

    let single = device("dev/single");
    single.entity().set_param("bus-type", "pci");
    assert!(!filter.matches(&single));

    let both = device("dev/both");
    both.entity().add_param("bus-type", "usb");
    both.entity().add_param("bus-type", "pci");
    assert!(filter.matches(&both));
}

#[test]
fn multi_valued_entity_satisfies_single_constraint() {
    let dev = device("dev/combo");
    dev.entity().add_param("class", "network");
    dev.entity().add_param("class", "audio");

    let mut filter = Filter::new();
    filter.add_constraint("class", "audio");
    assert!(filter.matches(&dev));
}

#[test]
fn filter_state_is_inspectable_and_resettable() {
    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    filter.add_constraint("class", "audio");
    filter.add_constraint("bus-type", "pci");

    assert_eq!(filter.constraint_keys(), vec!["class", "bus-type"]);
    assert_eq!(filter.constraint_values("class"), ["network", "audio"]);

    filter.clear_constraint("class");
    assert_eq!(filter.constraint_keys(), vec!["bus-type"]);

    filter.clear_constraints();
    assert!(filter.is_empty());
    assert!(filter.matches(&device("dev/blank")));
}
