//! Deployment: one os installed on one platform
//!
//! A deployment pins an os/platform pair (both shared handles, fixed at
//! construction) and carries the device links that describe which devices
//! that combination actually uses, with what drivers. Links are kept
//! most-recently-added first; preference resolution takes the newest match.

use crate::device::Device;
use crate::device_link::{self, DeviceLink, DeviceLinkFilter};
use crate::os::Os;
use crate::platform::Platform;
use osidb_core::{AsEntity, Entity, Filter, List};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

struct DeploymentInner {
    entity: Entity,
    os: Os,
    platform: Platform,
    device_links: RwLock<Vec<DeviceLink>>,
}

/// An os/platform combination with its device configuration.
#[derive(Clone)]
pub struct Deployment {
    inner: Arc<DeploymentInner>,
}

impl Deployment {
    /// Create a deployment of `os` on `platform`.
    pub fn new(id: impl Into<String>, os: &Os, platform: &Platform) -> Self {
        Self {
            inner: Arc::new(DeploymentInner {
                entity: Entity::new(id),
                os: os.clone(),
                platform: platform.clone(),
                device_links: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The deployed os.
    pub fn os(&self) -> &Os {
        &self.inner.os
    }

    /// The platform the os is deployed on.
    pub fn platform(&self) -> &Platform {
        &self.inner.platform
    }

    /// Associate a device with this deployment, returning the new link so
    /// the caller can attach driver metadata. The link goes in front of
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

    /// Device links accepted by `filter` (matched against the **link**
    /// entity), newest first.
    pub fn device_links(&self, filter: Option<&DeviceLinkFilter>) -> List<DeviceLink> {
        device_link::links_matching(&self.inner.device_links.read(), filter)
    }

    /// Devices whose **target device** is accepted by `filter`, newest link
    /// first. A different matching axis than [`Deployment::device_links`].
    pub fn devices(&self, filter: Option<&Filter>) -> List<Device> {
        device_link::devices_matching(&self.inner.device_links.read(), filter)
    }

    /// Newest device link accepted by `filter` (matched against the
    /// **link** entity), or `None` when nothing matches.
    pub fn preferred_device_link(&self, filter: Option<&DeviceLinkFilter>) -> Option<DeviceLink> {
        device_link::preferred_link(&self.inner.device_links.read(), filter)
    }
}

impl AsEntity for Deployment {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl fmt::Debug for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deployment")
            .field("id", &self.id())
            .field("os", &self.inner.os.id())
            .field("platform", &self.inner.platform.id())
            .finish()
    }
}
