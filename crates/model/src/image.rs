//! Image: a pre-installed disk image
//!
//! An image remembers which os it contains through a **weak** back
//! reference: the os owns its images, images never keep an os alive.

use crate::os::{Os, WeakOs};
use osidb_core::{AsEntity, Entity};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Property key for the architecture the image targets.
pub const PROP_ARCHITECTURE: &str = "architecture";
/// Property key for the download url.
pub const PROP_URL: &str = "url";
/// Property key for the on-disk format (qcow2, raw, ...).
pub const PROP_FORMAT: &str = "format";
/// Property key for the cloud-init flag.
pub const PROP_CLOUD_INIT: &str = "cloud-init";

struct ImageInner {
    entity: Entity,
    os: RwLock<WeakOs>,
}

/// A pre-installed disk image.
#[derive(Clone)]
pub struct Image {
    inner: Arc<ImageInner>,
}

impl Image {
    /// Create an image with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ImageInner {
                entity: Entity::new(id),
                os: RwLock::new(WeakOs::default()),
            }),
        }
    }

    /// Target architecture.
    pub fn arch(&self) -> Option<String> {
        self.inner.entity.param_value(PROP_ARCHITECTURE)
    }

    /// Download url.
    pub fn url(&self) -> Option<String> {
        self.inner.entity.param_value(PROP_URL)
    }

    /// On-disk format (qcow2, raw, ...).
    pub fn format(&self) -> Option<String> {
        self.inner.entity.param_value(PROP_FORMAT)
    }

    /// Whether the image boots with cloud-init seeded. Defaults to false.
    pub fn has_cloud_init(&self) -> bool {
        self.inner.entity.param_value_bool(PROP_CLOUD_INIT)
    }

    /// Record which os the image contains. Stored weakly.
    pub fn set_os(&self, os: &Os) {
        *self.inner.os.write() = os.downgrade();
    }

    /// The os this image contains, if it is still alive.
    pub fn os(&self) -> Option<Os> {
        self.inner.os.read().upgrade()
    }
}

impl AsEntity for Image {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image").field("id", &self.id()).finish()
    }
}
