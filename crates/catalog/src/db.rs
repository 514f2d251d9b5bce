//! Db: the aggregate root of the catalog
//!
//! ## Design
//!
//! A `Db` owns one typed [`List`] per entity kind. Loaders build entities,
//! wire up relationships and device links, then register everything here;
//! queries never mutate. Registration takes `&mut self`, queries take
//! `&self`, so the two phases are kept apart by the borrow checker rather
//! than by locking.
//!
//! Registered elements are shared handles: the same os can sit in this
//! catalog, in filtered result lists and behind deployments simultaneously.

use crate::identify;
use osidb_core::{AsEntity, Entity, List};
use osidb_model::{
    Datamap, Deployment, Device, InstallScript, Media, Os, Platform, Product, RelationshipKind,
    Tree,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-kind element counts, for logging and sanity checks after a bulk
/// load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of operating systems.
    pub oses: usize,
    /// Number of platforms.
    pub platforms: usize,
    /// Number of devices.
    pub devices: usize,
    /// Number of deployments.
    pub deployments: usize,
    /// Number of datamaps.
    pub datamaps: usize,
    /// Number of install scripts.
    pub install_scripts: usize,
}

/// The top-level catalog aggregate.
///
/// # Example
///
/// ```
/// use osidb_catalog::Db;
/// use osidb_model::Os;
///
/// let mut db = Db::new();
/// db.add_os(Os::new("os/fedora/39"));
///
/// assert!(db.os("os/fedora/39").is_some());
/// assert!(db.os("os/fedora/40").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Db {
    oses: List<Os>,
    platforms: List<Platform>,
    devices: List<Device>,
    deployments: List<Deployment>,
    datamaps: List<Datamap>,
    install_scripts: List<InstallScript>,
}

impl Db {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Registration (bulk-load boundary) ==========

    /// Register an os. An existing os with the same id is replaced.
    pub fn add_os(&mut self, os: Os) {
        debug!(id = %os.id(), "registering os");
        self.oses.add(os);
    }

    /// Register a platform. An existing platform with the same id is
    /// replaced.
    pub fn add_platform(&mut self, platform: Platform) {
        debug!(id = %platform.id(), "registering platform");
        self.platforms.add(platform);
    }

    /// Register a device. An existing device with the same id is replaced.
    pub fn add_device(&mut self, device: Device) {
        debug!(id = %device.id(), "registering device");
        self.devices.add(device);
    }

    /// Register a deployment. An existing deployment with the same id is
    /// replaced.
    pub fn add_deployment(&mut self, deployment: Deployment) {
        debug!(id = %deployment.id(), "registering deployment");
        self.deployments.add(deployment);
    }

    /// Register a datamap. An existing datamap with the same id is
    /// replaced.
    pub fn add_datamap(&mut self, datamap: Datamap) {
        debug!(id = %datamap.id(), "registering datamap");
        self.datamaps.add(datamap);
    }

    /// Register an install script. An existing script with the same id is
    /// replaced.
    pub fn add_install_script(&mut self, script: InstallScript) {
        debug!(id = %script.id(), "registering install script");
        self.install_scripts.add(script);
    }

    // ========== Id lookup ==========

    /// The os with the given id.
    pub fn os(&self, id: &str) -> Option<Os> {
        self.oses.find(id)
    }

    /// The platform with the given id.
    pub fn platform(&self, id: &str) -> Option<Platform> {
        self.platforms.find(id)
    }

    /// The device with the given id.
    pub fn device(&self, id: &str) -> Option<Device> {
        self.devices.find(id)
    }

    /// The deployment with the given id.
    pub fn deployment(&self, id: &str) -> Option<Deployment> {
        self.deployments.find(id)
    }

    /// The datamap with the given id.
    pub fn datamap(&self, id: &str) -> Option<Datamap> {
        self.datamaps.find(id)
    }

    /// The install script with the given id.
    pub fn install_script(&self, id: &str) -> Option<InstallScript> {
        self.install_scripts.find(id)
    }

    // ========== Kind lists ==========

    /// All registered oses.
    pub fn os_list(&self) -> &List<Os> {
        &self.oses
    }

    /// All registered platforms.
    pub fn platform_list(&self) -> &List<Platform> {
        &self.platforms
    }

    /// All registered devices.
    pub fn device_list(&self) -> &List<Device> {
        &self.devices
    }

    /// All registered deployments.
    pub fn deployment_list(&self) -> &List<Deployment> {
        &self.deployments
    }

    /// All registered datamaps.
    pub fn datamap_list(&self) -> &List<Datamap> {
        &self.datamaps
    }

    /// All registered install scripts.
    pub fn install_script_list(&self) -> &List<InstallScript> {
        &self.install_scripts
    }

    // ========== Cross-cutting queries ==========

    /// Distinct values of `key` across every registered os.
    pub fn unique_values_for_property_in_os(&self, key: &str) -> Vec<String> {
        unique_property_values(self.oses.iter().map(AsEntity::entity), key)
    }

    /// Distinct values of `key` across every registered platform.
    pub fn unique_values_for_property_in_platform(&self, key: &str) -> Vec<String> {
        unique_property_values(self.platforms.iter().map(AsEntity::entity), key)
    }

    /// Distinct values of `key` across every registered device.
    pub fn unique_values_for_property_in_device(&self, key: &str) -> Vec<String> {
        unique_property_values(self.devices.iter().map(AsEntity::entity), key)
    }

    /// Every os that appears as a **target** of a `kind` edge anywhere in
    /// the catalog, deduplicated by id.
    ///
    /// Edge direction matters: an os that only ever points at others (the
    /// root of a derives-from chain, say) does not appear in the result.
    pub fn unique_values_for_os_relationship(&self, kind: RelationshipKind) -> List<Os> {
        let mut out = List::new();
        for os in &self.oses {
            for target in &os.related(kind) {
                out.add(target.clone());
            }
        }
        out
    }

    /// Every platform that appears as a **target** of a `kind` edge
    /// anywhere in the catalog, deduplicated by id.
    pub fn unique_values_for_platform_relationship(
        &self,
        kind: RelationshipKind,
    ) -> List<Platform> {
        let mut out = List::new();
        for platform in &self.platforms {
            for target in &platform.related(kind) {
                out.add(target.clone());
            }
        }
        out
    }

    /// The first deployment whose os and platform are **identity-equal** to
    /// the given handles. Two entities with equal ids but separate
    /// allocations do not match.
    pub fn find_deployment(&self, os: &Os, platform: &Platform) -> Option<Deployment> {
        self.deployments
            .iter()
            .find(|d| {
                Entity::ptr_eq(d.os().entity(), os.entity())
                    && Entity::ptr_eq(d.platform().entity(), platform.entity())
            })
            .cloned()
    }

    // ========== Identification ==========

    /// Identify a probed medium against the catalog: the first os (in
    /// catalog order) owning a media entry whose identifying fields all
    /// match the probe, together with that entry.
    pub fn identify_media(&self, probe: &Media) -> Option<(Os, Media)> {
        for os in &self.oses {
            for media in &os.media_list() {
                if identify::media_matches(media, probe) {
                    debug!(probe = %probe.id(), os = %os.id(), "identified media");
                    return Some((os.clone(), media.clone()));
                }
            }
        }
        debug!(probe = %probe.id(), "media not identified");
        None
    }

    /// Identify a probed installable tree against the catalog, like
    /// [`Db::identify_media`] but over the `treeinfo-*` fields.
    pub fn identify_tree(&self, probe: &Tree) -> Option<(Os, Tree)> {
        for os in &self.oses {
            for tree in &os.tree_list() {
                if identify::tree_matches(tree, probe) {
                    debug!(probe = %probe.id(), os = %os.id(), "identified tree");
                    return Some((os.clone(), tree.clone()));
                }
            }
        }
        debug!(probe = %probe.id(), "tree not identified");
        None
    }

    /// Per-kind element counts.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            oses: self.oses.len(),
            platforms: self.platforms.len(),
            devices: self.devices.len(),
            deployments: self.deployments.len(),
            datamaps: self.datamaps.len(),
            install_scripts: self.install_scripts.len(),
        }
    }
}

/// Distinct property values across a set of entities, first-seen order.
fn unique_property_values<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    key: &str,
) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for entity in entities {
        for value in entity.param_value_list(key) {
            if seen.insert(value.clone()) {
                out.push(value);
            }
        }
    }
    out
}
