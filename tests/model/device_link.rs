//! DeviceLink filtering: the link axis vs the target axis

use osidb::{AsEntity, Device, DeviceLink, DeviceLinkFilter, Filter, Matcher};

fn network_device(id: &str) -> Device {
    let dev = Device::new(id);
    dev.entity().set_param("class", "network");
    dev
}

#[test]
fn target_filter_decides_on_the_device_alone() {
    // the nested filter matches the link's target device, independent of
    // any properties set directly on the link entity
    let mut target = Filter::new();
    target.add_constraint("class", "network");
    let mut filter = DeviceLinkFilter::new();
    filter.set_target_filter(target);

    let net_link = DeviceLink::new(&network_device("dev/net"));
    assert!(filter.matches(&net_link));

    // class on the link itself must not satisfy the target filter
    let decoy = DeviceLink::new(&Device::new("dev/bare"));
    decoy.entity().set_param("class", "network");
    assert!(!filter.matches(&decoy));
}

#[test]
fn link_constraints_and_target_filter_compose() {
    let link = DeviceLink::new(&network_device("dev/net"));
    link.entity().set_param("driver", "virtio-net");

    let mut target = Filter::new();
    target.add_constraint("class", "network");

    let mut filter = DeviceLinkFilter::new();
    filter.add_constraint("driver", "virtio-net");
    filter.set_target_filter(target);
    assert!(filter.matches(&link));

    // base constraint fails: the target filter never runs
    let mut wrong_driver = DeviceLinkFilter::new();
    wrong_driver.add_constraint("driver", "e1000");
    assert!(!wrong_driver.matches(&link));
}

#[test]
fn clearing_the_target_filter_widens_the_match() {
    let bare = DeviceLink::new(&Device::new("dev/bare"));

    let mut target = Filter::new();
    target.add_constraint("class", "network");
    let mut filter = DeviceLinkFilter::new();
    filter.set_target_filter(target);
    assert!(!filter.matches(&bare));

    filter.clear_target_filter();
    assert!(filter.target_filter().is_none());
    assert!(filter.matches(&bare));
}

#[test]
fn link_shares_its_target() {
    let dev = network_device("dev/net");
    let link = DeviceLink::new(&dev);

    // metadata added to the device after linking is seen through the link
    dev.entity().set_param("vendor", "Acme");
    assert_eq!(
        link.target().entity().param_value("vendor").as_deref(),
        Some("Acme")
    );
}
