//! Media: an installation medium (iso image)
//!
//! The identification fields (`volume-id`, `system-id`, `publisher-id`,
//! `application-id`) are what the catalog matches probed media against;
//! reading them off a disc is somebody else's job, the catalog only stores
//! and compares them.

use osidb_core::{AsEntity, Entity};

/// Property key for the architecture the medium targets.
pub const PROP_ARCHITECTURE: &str = "architecture";
/// Property key for the download url.
pub const PROP_URL: &str = "url";
/// Property key for the iso9660 volume id.
pub const PROP_VOLUME_ID: &str = "volume-id";
/// Property key for the iso9660 system id.
pub const PROP_SYSTEM_ID: &str = "system-id";
/// Property key for the iso9660 publisher id.
pub const PROP_PUBLISHER_ID: &str = "publisher-id";
/// Property key for the iso9660 application id.
pub const PROP_APPLICATION_ID: &str = "application-id";
/// Property key for the kernel path inside the medium.
pub const PROP_KERNEL: &str = "kernel";
/// Property key for the initrd path inside the medium.
pub const PROP_INITRD: &str = "initrd";
/// Property key for the live flag.
pub const PROP_LIVE: &str = "live";
/// Property key for the installer flag.
pub const PROP_INSTALLER: &str = "installer";
/// Property key for the number of installer reboots.
pub const PROP_INSTALLER_REBOOTS: &str = "installer-reboots";

/// An installation medium.
#[derive(Debug, Clone)]
pub struct Media {
    entity: Entity,
}

impl Media {
    /// Create a medium with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Target architecture.
    pub fn arch(&self) -> Option<String> {
        self.entity.param_value(PROP_ARCHITECTURE)
    }

    /// Download url.
    pub fn url(&self) -> Option<String> {
        self.entity.param_value(PROP_URL)
    }

    /// iso9660 volume id.
    pub fn volume_id(&self) -> Option<String> {
        self.entity.param_value(PROP_VOLUME_ID)
    }

    /// iso9660 system id.
    pub fn system_id(&self) -> Option<String> {
        self.entity.param_value(PROP_SYSTEM_ID)
    }

    /// iso9660 publisher id.
    pub fn publisher_id(&self) -> Option<String> {
        self.entity.param_value(PROP_PUBLISHER_ID)
    }

    /// iso9660 application id.
    pub fn application_id(&self) -> Option<String> {
        self.entity.param_value(PROP_APPLICATION_ID)
    }

    /// Kernel path inside the medium.
    pub fn kernel_path(&self) -> Option<String> {
        self.entity.param_value(PROP_KERNEL)
    }

    /// Initrd path inside the medium.
    pub fn initrd_path(&self) -> Option<String> {
        self.entity.param_value(PROP_INITRD)
    }

    /// Whether the medium can boot a live session. Defaults to false.
    pub fn is_live(&self) -> bool {
        self.entity.param_value_bool(PROP_LIVE)
    }

    /// Whether the medium can install. Defaults to true.
    pub fn is_installer(&self) -> bool {
        self.entity
            .param_value_bool_with_default(PROP_INSTALLER, true)
    }

    /// Number of reboots a full installation takes. Defaults to 1.
    pub fn installer_reboots(&self) -> i64 {
        self.entity
            .param_value_i64_with_default(PROP_INSTALLER_REBOOTS, 1)
    }
}

impl AsEntity for Media {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
