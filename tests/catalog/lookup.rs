//! Catalog registration and id lookup

use osidb::{AsEntity, Datamap, Db, Deployment, Device, Entity, InstallScript, Os, Platform};

fn populated_db() -> Db {
    let mut db = Db::new();
    let os = Os::new("os/fedora/39");
    let platform = Platform::new("platform/qemu/6.2");
    db.add_deployment(Deployment::new("deployment/1", &os, &platform));
    db.add_os(os);
    db.add_platform(platform);
    db.add_device(Device::new("pci/8086/10d3"));
    db.add_datamap(Datamap::new("datamap/x11-keyboard"));
    db.add_install_script(InstallScript::new("script/fedora/jeos"));
    db
}

#[test]
fn every_kind_is_retrievable_by_id() {
    let db = populated_db();
    assert_eq!(db.os("os/fedora/39").unwrap().id(), "os/fedora/39");
    assert_eq!(
        db.platform("platform/qemu/6.2").unwrap().id(),
        "platform/qemu/6.2"
    );
    assert_eq!(db.device("pci/8086/10d3").unwrap().id(), "pci/8086/10d3");
    assert_eq!(db.deployment("deployment/1").unwrap().id(), "deployment/1");
    assert_eq!(
        db.datamap("datamap/x11-keyboard").unwrap().id(),
        "datamap/x11-keyboard"
    );
    assert_eq!(
        db.install_script("script/fedora/jeos").unwrap().id(),
        "script/fedora/jeos"
    );
}

#[test]
fn lookup_miss_is_none_not_an_error() {
    let db = populated_db();
    assert!(db.os("os/fedora/40").is_none());
    assert!(db.device("pci/ffff/0000").is_none());
}

#[test]
fn kind_lists_reflect_registration() {
    let db = populated_db();
    assert_eq!(db.os_list().len(), 1);
    assert_eq!(db.platform_list().len(), 1);
    assert_eq!(db.device_list().len(), 1);
    assert_eq!(db.deployment_list().len(), 1);
    assert_eq!(db.datamap_list().len(), 1);
    assert_eq!(db.install_script_list().len(), 1);

    let stats = db.stats();
    assert_eq!(stats.oses, 1);
    assert_eq!(stats.deployments, 1);
}

#[test]
fn catalog_holds_handles_not_copies() {
    let db = populated_db();
    let from_db = db.os("os/fedora/39").unwrap();
    let again = db.os("os/fedora/39").unwrap();
    assert!(Entity::ptr_eq(from_db.entity(), again.entity()));

    from_db.entity().set_param("vendor", "Fedora Project");
    assert_eq!(
        again.entity().param_value("vendor").as_deref(),
        Some("Fedora Project")
    );
}

#[test]
fn reregistering_an_id_replaces_the_entry() {
    let mut db = populated_db();
    let replacement = Os::new("os/fedora/39");
    replacement.entity().set_param("vendor", "replacement");
    db.add_os(replacement);

    assert_eq!(db.os_list().len(), 1);
    assert_eq!(
        db.os("os/fedora/39")
            .unwrap()
            .entity()
            .param_value("vendor")
            .as_deref(),
        Some("replacement")
    );
}
