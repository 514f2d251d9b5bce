//! Relationship-target collection across the catalog
//!
//! Only edge **targets** are collected. A product that merely points at
//! others never shows up, however many outgoing edges it has.

use osidb::{Db, Platform, Product, Os, RelationshipKind};

#[test]
fn targets_are_collected_sources_are_not() {
    let os1 = Os::new("os/1");
    let os2 = Os::new("os/2");
    let os3 = Os::new("os/3");
    os1.add_related(RelationshipKind::DerivesFrom, &os2);
    os1.add_related(RelationshipKind::DerivesFrom, &os3);

    let mut db = Db::new();
    db.add_os(os1);
    db.add_os(os2);
    db.add_os(os3);

    let targets = db.unique_values_for_os_relationship(RelationshipKind::DerivesFrom);
    let mut ids = targets.ids();
    ids.sort();
    assert_eq!(ids, vec!["os/2", "os/3"]);
    assert!(!targets.contains_id("os/1"));
}

#[test]
fn shared_targets_are_deduplicated() {
    let parent = Os::new("os/parent");
    let child1 = Os::new("os/child1");
    let child2 = Os::new("os/child2");
    child1.add_related(RelationshipKind::DerivesFrom, &parent);
    child2.add_related(RelationshipKind::DerivesFrom, &parent);

    let mut db = Db::new();
    for os in [parent, child1, child2] {
        db.add_os(os);
    }

    let targets = db.unique_values_for_os_relationship(RelationshipKind::DerivesFrom);
    assert_eq!(targets.ids(), vec!["os/parent"]);
}

#[test]
fn kinds_are_queried_independently() {
    let rhel = Os::new("os/rhel/9");
    let centos = Os::new("os/centos/9");
    let fedora = Os::new("os/fedora/34");
    centos.add_related(RelationshipKind::Clones, &rhel);
    rhel.add_related(RelationshipKind::DerivesFrom, &fedora);

    let mut db = Db::new();
    for os in [rhel, centos, fedora] {
        db.add_os(os);
    }

    assert_eq!(
        db.unique_values_for_os_relationship(RelationshipKind::Clones).ids(),
        vec!["os/rhel/9"]
    );
    assert_eq!(
        db.unique_values_for_os_relationship(RelationshipKind::DerivesFrom).ids(),
        vec!["os/fedora/34"]
    );
    assert!(db
        .unique_values_for_os_relationship(RelationshipKind::Upgrades)
        .is_empty());
}

#[test]
fn platform_relationships_use_the_platform_lists() {
    let qemu62 = Platform::new("platform/qemu/6.2");
    let qemu61 = Platform::new("platform/qemu/6.1");
    qemu62.add_related(RelationshipKind::Upgrades, &qemu61);

    let mut db = Db::new();
    db.add_platform(qemu62);
    db.add_platform(qemu61);

    assert_eq!(
        db.unique_values_for_platform_relationship(RelationshipKind::Upgrades)
            .ids(),
        vec!["platform/qemu/6.1"]
    );
    // the os-side query is untouched by platform edges
    assert!(db
        .unique_values_for_os_relationship(RelationshipKind::Upgrades)
        .is_empty());
}
