//! Tree: an installable directory tree (network install source)

use osidb_core::{AsEntity, Entity};

/// Property key for the architecture the tree targets.
pub const PROP_ARCHITECTURE: &str = "architecture";
/// Property key for the tree url.
pub const PROP_URL: &str = "url";
/// Property key for the boot iso path inside the tree.
pub const PROP_BOOT_ISO: &str = "boot-iso";
/// Property key for the kernel path inside the tree.
pub const PROP_KERNEL: &str = "kernel";
/// Property key for the initrd path inside the tree.
pub const PROP_INITRD: &str = "initrd";
/// Property key for the treeinfo family field.
pub const PROP_TREEINFO_FAMILY: &str = "treeinfo-family";
/// Property key for the treeinfo variant field.
pub const PROP_TREEINFO_VARIANT: &str = "treeinfo-variant";
/// Property key for the treeinfo version field.
pub const PROP_TREEINFO_VERSION: &str = "treeinfo-version";
/// Property key for the treeinfo arch field.
pub const PROP_TREEINFO_ARCH: &str = "treeinfo-arch";

/// An installable tree. The `treeinfo-*` fields identify a probed tree
/// against the catalog, the same way media identification fields do.
#[derive(Debug, Clone)]
pub struct Tree {
    entity: Entity,
}

impl Tree {
    /// Create a tree with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Target architecture.
    pub fn arch(&self) -> Option<String> {
        self.entity.param_value(PROP_ARCHITECTURE)
    }

    /// Tree url.
    pub fn url(&self) -> Option<String> {
        self.entity.param_value(PROP_URL)
    }

    /// Boot iso path inside the tree.
    pub fn boot_iso_path(&self) -> Option<String> {
        self.entity.param_value(PROP_BOOT_ISO)
    }

    /// Kernel path inside the tree.
    pub fn kernel_path(&self) -> Option<String> {
        self.entity.param_value(PROP_KERNEL)
    }

    /// Initrd path inside the tree.
    pub fn initrd_path(&self) -> Option<String> {
        self.entity.param_value(PROP_INITRD)
    }

    /// treeinfo family field.
    pub fn treeinfo_family(&self) -> Option<String> {
        self.entity.param_value(PROP_TREEINFO_FAMILY)
    }

    /// treeinfo variant field.
    pub fn treeinfo_variant(&self) -> Option<String> {
        self.entity.param_value(PROP_TREEINFO_VARIANT)
    }

    /// treeinfo version field.
    pub fn treeinfo_version(&self) -> Option<String> {
        self.entity.param_value(PROP_TREEINFO_VERSION)
    }

    /// treeinfo arch field.
    pub fn treeinfo_arch(&self) -> Option<String> {
        self.entity.param_value(PROP_TREEINFO_ARCH)
    }
}

impl AsEntity for Tree {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
