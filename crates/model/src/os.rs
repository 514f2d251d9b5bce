//! Os: an operating system and everything hanging off it
//!
//! An os is a [`Product`]: it has vendor/version metadata, a support window
//! and relationship edges to other oses. On top of that it owns the
//! collections a distribution ships with: installation media, installable
//! trees, pre-installed disk images, firmware support entries, resource
//! requirement sets, and device support expressed as
//! [`DeviceLink`](crate::DeviceLink)s.
//!
//! Device links are kept most-recently-added first, so "first match" in
//! preference resolution means "newest entry wins".

use crate::device::Device;
use crate::device_link::{self, DeviceLink, DeviceLinkFilter};
use crate::firmware::Firmware;
use crate::image::Image;
use crate::media::Media;
use crate::product::{Product, Relationships};
use crate::resources::Resources;
use crate::tree::Tree;
use osidb_core::{AsEntity, Entity, Filter, List, ParamEnum};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};

/// Property key for the os family (linux, winnt, ...).
pub const PROP_FAMILY: &str = "family";
/// Property key for the distribution (fedora, debian, ...).
pub const PROP_DISTRO: &str = "distro";
/// Property key for the release status.
pub const PROP_RELEASE_STATUS: &str = "release-status";

/// Release status of an os.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// A released, generally available version.
    Released,
    /// A development snapshot.
    Snapshot,
    /// A pre-release (alpha, beta, rc).
    Prerelease,
    /// A rolling release without discrete versions.
    Rolling,
}

impl ParamEnum for ReleaseStatus {
    fn from_param(value: &str) -> Option<Self> {
        match value {
            "released" => Some(ReleaseStatus::Released),
            "snapshot" => Some(ReleaseStatus::Snapshot),
            "prerelease" => Some(ReleaseStatus::Prerelease),
            "rolling" => Some(ReleaseStatus::Rolling),
            _ => None,
        }
    }
}

struct OsInner {
    entity: Entity,
    relationships: Relationships<Os>,
    device_links: RwLock<Vec<DeviceLink>>,
    medias: RwLock<List<Media>>,
    trees: RwLock<List<Tree>>,
    images: RwLock<List<Image>>,
    firmwares: RwLock<List<Firmware>>,
    minimum_resources: RwLock<List<Resources>>,
    recommended_resources: RwLock<List<Resources>>,
    maximum_resources: RwLock<List<Resources>>,
}

/// An operating system.
#[derive(Clone)]
pub struct Os {
    inner: Arc<OsInner>,
}

/// Non-owning handle to an [`Os`], used where a back-reference must not keep
/// the os alive (an image does not own its os).
#[derive(Clone, Default)]
pub struct WeakOs {
    inner: Weak<OsInner>,
}

impl WeakOs {
    /// Recover a strong handle if the os is still alive.
    pub fn upgrade(&self) -> Option<Os> {
        self.inner.upgrade().map(|inner| Os { inner })
    }
}

impl Os {
    /// Create an os with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(OsInner {
                entity: Entity::new(id),
                relationships: Relationships::new(),
                device_links: RwLock::new(Vec::new()),
                medias: RwLock::new(List::new()),
                trees: RwLock::new(List::new()),
                images: RwLock::new(List::new()),
                firmwares: RwLock::new(List::new()),
                minimum_resources: RwLock::new(List::new()),
                recommended_resources: RwLock::new(List::new()),
                maximum_resources: RwLock::new(List::new()),
            }),
        }
    }

    /// Non-owning handle to this os.
    pub fn downgrade(&self) -> WeakOs {
        WeakOs {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Os family (linux, winnt, ...).
    pub fn family(&self) -> Option<String> {
        self.entity().param_value(PROP_FAMILY)
    }

    /// Distribution name (fedora, debian, ...).
    pub fn distro(&self) -> Option<String> {
        self.entity().param_value(PROP_DISTRO)
    }

    /// Release status; an absent or unknown value reads as released.
    pub fn release_status(&self) -> ReleaseStatus {
        self.entity()
            .param_value_enum(PROP_RELEASE_STATUS, ReleaseStatus::Released)
    }

    // ========== Installation media / trees / images / firmware ==========

    /// Register an installation medium.
    pub fn add_media(&self, media: Media) {
        self.inner.medias.write().add(media);
    }

    /// The os's installation media.
    pub fn media_list(&self) -> List<Media> {
        self.inner.medias.read().clone()
    }

    /// Register an installable tree.
    pub fn add_tree(&self, tree: Tree) {
        self.inner.trees.write().add(tree);
    }

    /// The os's installable trees.
    pub fn tree_list(&self) -> List<Tree> {
        self.inner.trees.read().clone()
    }

    /// Register a pre-installed image. The image's os back-reference is set
    /// to this os (weakly: the image does not keep the os alive).
    pub fn add_image(&self, image: Image) {
        image.set_os(self);
        self.inner.images.write().add(image);
    }

    /// The os's pre-installed images.
    pub fn image_list(&self) -> List<Image> {
        self.inner.images.read().clone()
    }

    /// Register a firmware support entry.
    pub fn add_firmware(&self, firmware: Firmware) {
        self.inner.firmwares.write().add(firmware);
    }

    /// The os's firmware support entries.
    pub fn firmware_list(&self) -> List<Firmware> {
        self.inner.firmwares.read().clone()
    }

    // ========== Resource requirements ==========

    /// Register a minimum resource requirement set.
    pub fn add_minimum_resources(&self, resources: Resources) {
        self.inner.minimum_resources.write().add(resources);
    }

    /// Minimum resource requirements, one entry per architecture.
    pub fn minimum_resources_list(&self) -> List<Resources> {
        self.inner.minimum_resources.read().clone()
    }

    /// Register a recommended resource requirement set.
    pub fn add_recommended_resources(&self, resources: Resources) {
        self.inner.recommended_resources.write().add(resources);
    }

    /// Recommended resource requirements, one entry per architecture.
    pub fn recommended_resources_list(&self) -> List<Resources> {
        self.inner.recommended_resources.read().clone()
    }

    /// Register a maximum supported resource set.
    pub fn add_maximum_resources(&self, resources: Resources) {
        self.inner.maximum_resources.write().add(resources);
    }

    /// Maximum supported resources, one entry per architecture.
    pub fn maximum_resources_list(&self) -> List<Resources> {
        self.inner.maximum_resources.read().clone()
    }

    // ========== Device support ==========

    /// Associate a device with this os, returning the new link so the
    /// caller can attach driver metadata. The link goes in front of
    /// existing ones.
    pub fn add_device(&self, device: &Device) -> DeviceLink {
        let link = DeviceLink::new(device);
        self.add_device_link(link.clone());
        link
    }

    /// Attach an already-built device link, in front of existing ones.
    pub fn add_device_link(&self, link: DeviceLink) {
        self.inner.device_links.write().insert(0, link);
    }

    /// Device links accepted by `filter` (on the link entity), newest
    /// first.
    pub fn device_links(&self, filter: Option<&DeviceLinkFilter>) -> List<DeviceLink> {
        device_link::links_matching(&self.inner.device_links.read(), filter)
    }

    /// Devices whose **target device** is accepted by `filter`, newest link
    /// first.
    pub fn devices(&self, filter: Option<&Filter>) -> List<Device> {
        device_link::devices_matching(&self.inner.device_links.read(), filter)
    }

    /// Newest device link accepted by `filter` (on the link entity).
    pub fn preferred_device_link(&self, filter: Option<&DeviceLinkFilter>) -> Option<DeviceLink> {
        device_link::preferred_link(&self.inner.device_links.read(), filter)
    }
}

impl AsEntity for Os {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl Product for Os {
    fn relationships(&self) -> &Relationships<Os> {
        &self.inner.relationships
    }
}

impl fmt::Debug for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Os").field("id", &self.id()).finish()
    }
}
