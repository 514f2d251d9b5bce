//! Deployment device resolution

use osidb::{
    AsEntity, Deployment, Device, DeviceLinkFilter, Filter, Os, Platform,
};

fn deployment() -> Deployment {
    Deployment::new(
        "deployment/test",
        &Os::new("os/test"),
        &Platform::new("platform/test"),
    )
}

fn classed_device(id: &str, class: &str) -> Device {
    let dev = Device::new(id);
    dev.entity().set_param("class", class);
    dev
}

#[test]
fn links_scan_most_recently_added_first() {
    let dep = deployment();
    dep.add_device(&classed_device("dev/old", "network"));
    dep.add_device(&classed_device("dev/mid", "network"));
    dep.add_device(&classed_device("dev/new", "network"));

    assert_eq!(
        dep.device_links(None).ids(),
        vec!["dev/new", "dev/mid", "dev/old"]
    );
    assert_eq!(dep.preferred_device_link(None).unwrap().id(), "dev/new");
}

#[test]
fn preferred_link_matches_the_link_entity() {
    let dep = deployment();
    let fallback = dep.add_device(&classed_device("dev/rtl", "network"));
    fallback.entity().set_param("driver", "rtl8139");
    let preferred = dep.add_device(&classed_device("dev/virtio", "network"));
    preferred.entity().set_param("driver", "virtio-net");

    let mut filter = DeviceLinkFilter::new();
    filter.add_constraint("driver", "rtl8139");
    let link = dep.preferred_device_link(Some(&filter)).unwrap();
    assert_eq!(link.id(), "dev/rtl");
    assert_eq!(link.driver().as_deref(), Some("rtl8139"));

    // without constraints the newest link wins
    assert_eq!(dep.preferred_device_link(None).unwrap().id(), "dev/virtio");
}

#[test]
fn devices_matches_the_target_not_the_link() {
    let dep = deployment();
    let audio_link = dep.add_device(&classed_device("dev/ac97", "audio"));
    dep.add_device(&classed_device("dev/e1000", "network"));

    // tag the audio link (not its device) as network: must not leak into
    // the target-axis query
    audio_link.entity().set_param("class", "network");

    let mut by_class = Filter::new();
    by_class.add_constraint("class", "network");
    assert_eq!(dep.devices(Some(&by_class)).ids(), vec!["dev/e1000"]);

    // but the link-axis query sees it
    let mut link_filter = DeviceLinkFilter::new();
    link_filter.add_constraint("class", "network");
    assert_eq!(
        dep.device_links(Some(&link_filter)).ids(),
        vec!["dev/ac97"]
    );
}

#[test]
fn no_match_yields_none_or_empty() {
    let dep = deployment();
    dep.add_device(&classed_device("dev/kbd", "input"));

    let mut filter = DeviceLinkFilter::new();
    filter.add_constraint("driver", "missing");
    assert!(dep.preferred_device_link(Some(&filter)).is_none());

    let mut by_class = Filter::new();
    by_class.add_constraint("class", "display");
    assert!(dep.devices(Some(&by_class)).is_empty());
}
