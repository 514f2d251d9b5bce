//! List identity semantics and set algebra

use osidb::{AsEntity, Device, Entity, Filter, List};

fn device(id: &str, class: &str) -> Device {
    let dev = Device::new(id);
    dev.entity().set_param("class", class);
    dev
}

// ============================================================================
// Identity semantics
// ============================================================================

#[test]
fn same_id_replaces_at_the_same_slot() {
    let mut list = List::new();
    list.add(device("dev/a", "network"));
    list.add(device("dev/b", "audio"));
    list.add(device("dev/c", "input"));

    let replacement = device("dev/b", "display");
    list.add(replacement.clone());

    assert_eq!(list.len(), 3);
    assert_eq!(list.ids(), vec!["dev/a", "dev/b", "dev/c"]);
    let held = list.get(1).unwrap();
    assert!(Entity::ptr_eq(held.entity(), replacement.entity()));
    assert_eq!(held.class().as_deref(), Some("display"));
}

#[test]
fn length_counts_unique_ids_only() {
    let mut list = List::new();
    for _ in 0..3 {
        list.add(device("dev/a", "network"));
    }
    assert_eq!(list.len(), 1);
}

// ============================================================================
// Set algebra
// ============================================================================

#[test]
fn union_length_and_order() {
    let a: List<Device> = ["dev/1", "dev/2", "dev/3"]
        .into_iter()
        .map(|id| device(id, "network"))
        .collect();
    let b: List<Device> = ["dev/3", "dev/4"]
        .into_iter()
        .map(|id| device(id, "audio"))
        .collect();

    let union = List::new_union(&a, &b);
    assert_eq!(union.len(), a.len() + 1); // |A| + |B \ A|
    assert_eq!(union.ids(), vec!["dev/1", "dev/2", "dev/3", "dev/4"]);
    // the colliding id keeps a's element
    assert_eq!(union.find("dev/3").unwrap().class().as_deref(), Some("network"));
}

#[test]
fn intersection_is_a_subset_of_both() {
    let a: List<Device> = ["dev/1", "dev/2", "dev/3"]
        .into_iter()
        .map(|id| device(id, "network"))
        .collect();
    let b: List<Device> = ["dev/2", "dev/3", "dev/4"]
        .into_iter()
        .map(|id| device(id, "audio"))
        .collect();

    let inter = List::new_intersection(&a, &b);
    assert_eq!(inter.ids(), vec!["dev/2", "dev/3"]);
    for element in &inter {
        assert!(a.contains_id(element.id()));
        assert!(b.contains_id(element.id()));
        // elements come from a
        assert_eq!(element.class().as_deref(), Some("network"));
    }
}

#[test]
fn filtered_copy_with_empty_filter_equals_source() {
    let a: List<Device> = ["dev/1", "dev/2"]
        .into_iter()
        .map(|id| device(id, "network"))
        .collect();
    let copy = List::new_filtered(&a, Some(&Filter::new()));
    assert_eq!(copy.ids(), a.ids());
    // still a separate list: adding to the copy leaves the source alone
    let mut copy = copy;
    copy.add(device("dev/9", "input"));
    assert_eq!(a.len(), 2);
}

#[test]
fn filtered_copy_selects_in_source_order() {
    let mut list = List::new();
    list.add(device("dev/net1", "network"));
    list.add(device("dev/snd", "audio"));
    list.add(device("dev/net2", "network"));

    let mut filter = Filter::new();
    filter.add_constraint("class", "network");
    let matched = List::new_filtered(&list, Some(&filter));
    assert_eq!(matched.ids(), vec!["dev/net1", "dev/net2"]);
}
