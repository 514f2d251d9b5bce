//! Platform: a virtualization or hardware platform
//!
//! A platform (qemu-6.2, some hypervisor release, ...) is a [`Product`]
//! like an os: versioned, with a support window and relationship edges to
//! other platforms. Its main payload is the set of devices it exposes,
//! stored as [`DeviceLink`](crate::DeviceLink)s, newest first.

use crate::device::Device;
use crate::device_link::{self, DeviceLink, DeviceLinkFilter};
use crate::product::{Product, Relationships};
use osidb_core::{AsEntity, Entity, Filter, List};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

struct PlatformInner {
    entity: Entity,
    relationships: Relationships<Platform>,
    device_links: RwLock<Vec<DeviceLink>>,
}

/// A virtualization or hardware platform.
#[derive(Clone)]
pub struct Platform {
    inner: Arc<PlatformInner>,
}

impl Platform {
    /// Create a platform with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(PlatformInner {
                entity: Entity::new(id),
                relationships: Relationships::new(),
                device_links: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Associate a device with this platform, returning the new link. The
    /// link goes in front of existing ones.
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

impl AsEntity for Platform {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl Product for Platform {
    fn relationships(&self) -> &Relationships<Platform> {
        &self.inner.relationships
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").field("id", &self.id()).finish()
    }
}
