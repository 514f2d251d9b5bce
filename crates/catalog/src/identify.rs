//! Matching probed media/trees against catalog entries
//!
//! A probe is an ordinary [`Media`]/[`Tree`] entity whose properties were
//! filled in by whatever inspected the actual artifact. Matching compares
//! only the fields the catalog entry defines; a catalog entry that defines
//! no identifying field at all never matches (it would match everything).
//!
//! Media identifiers are compared by prefix: volume ids in the wild carry
//! suffixes (arch, build number) that the catalog entry leaves out. The
//! treeinfo fields are exact. Architecture matches exactly, with an absent
//! or `all` catalog value acting as a wildcard.

use osidb_model::{Media, Tree};

fn prefix_field(reference: Option<String>, probe: Option<String>) -> bool {
    match reference {
        None => true,
        Some(r) => probe.is_some_and(|p| p.starts_with(&r)),
    }
}

fn exact_field(reference: Option<String>, probe: Option<String>) -> bool {
    match reference {
        None => true,
        Some(r) => probe.as_deref() == Some(r.as_str()),
    }
}

fn arch_matches(reference: Option<String>, probe: Option<String>) -> bool {
    match reference.as_deref() {
        None | Some("all") => true,
        Some(r) => probe.as_deref() == Some(r),
    }
}

/// Whether `probe` is an instance of the catalog entry `reference`.
pub(crate) fn media_matches(reference: &Media, probe: &Media) -> bool {
    let has_identifier = reference.volume_id().is_some()
        || reference.system_id().is_some()
        || reference.publisher_id().is_some()
        || reference.application_id().is_some();
    if !has_identifier {
        return false;
    }
    arch_matches(reference.arch(), probe.arch())
        && prefix_field(reference.volume_id(), probe.volume_id())
        && prefix_field(reference.system_id(), probe.system_id())
        && prefix_field(reference.publisher_id(), probe.publisher_id())
        && prefix_field(reference.application_id(), probe.application_id())
}

/// Whether `probe` is an instance of the catalog entry `reference`.
pub(crate) fn tree_matches(reference: &Tree, probe: &Tree) -> bool {
    let has_identifier = reference.treeinfo_family().is_some()
        || reference.treeinfo_variant().is_some()
        || reference.treeinfo_version().is_some()
        || reference.treeinfo_arch().is_some();
    if !has_identifier {
        return false;
    }
    arch_matches(reference.arch(), probe.arch())
        && exact_field(reference.treeinfo_family(), probe.treeinfo_family())
        && exact_field(reference.treeinfo_variant(), probe.treeinfo_variant())
        && exact_field(reference.treeinfo_version(), probe.treeinfo_version())
        && exact_field(reference.treeinfo_arch(), probe.treeinfo_arch())
}
