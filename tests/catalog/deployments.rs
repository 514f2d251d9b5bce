//! Deployment resolution against the catalog

use osidb::{AsEntity, Db, Deployment, Os, Platform};

#[test]
fn find_deployment_compares_by_identity() {
    let os = Os::new("os/x");
    let platform = Platform::new("platform/x");

    let mut db = Db::new();
    db.add_deployment(Deployment::new("deployment/1", &os, &platform));
    db.add_os(os.clone());
    db.add_platform(platform.clone());

    let found = db.find_deployment(&os, &platform).unwrap();
    assert_eq!(found.id(), "deployment/1");

    // same ids, different allocations: no match
    let impostor_os = Os::new("os/x");
    let impostor_platform = Platform::new("platform/x");
    assert!(db.find_deployment(&impostor_os, &platform).is_none());
    assert!(db.find_deployment(&os, &impostor_platform).is_none());
}

#[test]
fn both_legs_must_match() {
    let os_a = Os::new("os/a");
    let os_b = Os::new("os/b");
    let platform = Platform::new("platform/x");

    let mut db = Db::new();
    db.add_deployment(Deployment::new("deployment/a", &os_a, &platform));

    assert!(db.find_deployment(&os_a, &platform).is_some());
    assert!(db.find_deployment(&os_b, &platform).is_none());
}

#[test]
fn first_matching_deployment_wins() {
    let os = Os::new("os/x");
    let platform = Platform::new("platform/x");

    let mut db = Db::new();
    db.add_deployment(Deployment::new("deployment/first", &os, &platform));
    db.add_deployment(Deployment::new("deployment/second", &os, &platform));

    assert_eq!(
        db.find_deployment(&os, &platform).unwrap().id(),
        "deployment/first"
    );
}

#[test]
fn empty_catalog_has_no_deployments() {
    let db = Db::new();
    assert!(db
        .find_deployment(&Os::new("os/x"), &Platform::new("platform/x"))
        .is_none());
}
