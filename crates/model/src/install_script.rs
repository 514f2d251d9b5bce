//! InstallScript: metadata about an unattended-install script
//!
//! The catalog stores the script's identity and expectations only; the
//! actual templating lives outside this system.

use osidb_core::{AsEntity, Entity};

/// Property key for the script profile.
pub const PROP_PROFILE: &str = "profile";
/// Property key for the product key format hint.
pub const PROP_PRODUCT_KEY_FORMAT: &str = "product-key-format";
/// Property key for the path format convention the script expects.
pub const PROP_PATH_FORMAT: &str = "path-format";
/// Property key for the file name the installer looks for.
pub const PROP_EXPECTED_FILENAME: &str = "expected-filename";

/// The minimal-install profile value.
pub const PROFILE_JEOS: &str = "jeos";
/// The desktop-install profile value.
pub const PROFILE_DESKTOP: &str = "desktop";

/// Metadata about an unattended-install script.
#[derive(Debug, Clone)]
pub struct InstallScript {
    entity: Entity,
}

impl InstallScript {
    /// Create an install script entry with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Script profile (`jeos`, `desktop`, ...).
    pub fn profile(&self) -> Option<String> {
        self.entity.param_value(PROP_PROFILE)
    }

    /// Product key format hint.
    pub fn product_key_format(&self) -> Option<String> {
        self.entity.param_value(PROP_PRODUCT_KEY_FORMAT)
    }

    /// Path format convention the script expects.
    pub fn path_format(&self) -> Option<String> {
        self.entity.param_value(PROP_PATH_FORMAT)
    }

    /// File name the installer looks for.
    pub fn expected_filename(&self) -> Option<String> {
        self.entity.param_value(PROP_EXPECTED_FILENAME)
    }
}

impl AsEntity for InstallScript {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
