//! Resources: hardware requirements of an os on one architecture
//!
//! Quantities use the i64 sentinel convention of the property store: `-1`
//! means "not specified". RAM and storage are in bytes, cpu speed in Hz.

use osidb_core::{AsEntity, Entity};

/// Property key for the architecture the requirements apply to.
pub const PROP_ARCHITECTURE: &str = "architecture";
/// Property key for the cpu speed requirement (Hz).
pub const PROP_CPU: &str = "cpu";
/// Property key for the number of cpus.
pub const PROP_N_CPUS: &str = "n-cpus";
/// Property key for the ram requirement (bytes).
pub const PROP_RAM: &str = "ram";
/// Property key for the storage requirement (bytes).
pub const PROP_STORAGE: &str = "storage";

/// A resource requirement set.
#[derive(Debug, Clone)]
pub struct Resources {
    entity: Entity,
}

impl Resources {
    /// Create a requirement set with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Architecture the requirements apply to.
    pub fn arch(&self) -> Option<String> {
        self.entity.param_value(PROP_ARCHITECTURE)
    }

    /// Required cpu speed in Hz, `-1` when unspecified.
    pub fn cpu(&self) -> i64 {
        self.entity.param_value_i64(PROP_CPU)
    }

    /// Required number of cpus, `-1` when unspecified.
    pub fn n_cpus(&self) -> i64 {
        self.entity.param_value_i64(PROP_N_CPUS)
    }

    /// Required ram in bytes, `-1` when unspecified.
    pub fn ram(&self) -> i64 {
        self.entity.param_value_i64(PROP_RAM)
    }

    /// Required storage in bytes, `-1` when unspecified.
    pub fn storage(&self) -> i64 {
        self.entity.param_value_i64(PROP_STORAGE)
    }

    /// Record the required cpu speed in Hz.
    pub fn set_cpu(&self, hz: i64) {
        self.entity.set_param(PROP_CPU, &hz.to_string());
    }

    /// Record the required number of cpus.
    pub fn set_n_cpus(&self, n: i64) {
        self.entity.set_param(PROP_N_CPUS, &n.to_string());
    }

    /// Record the required ram in bytes.
    pub fn set_ram(&self, bytes: i64) {
        self.entity.set_param(PROP_RAM, &bytes.to_string());
    }

    /// Record the required storage in bytes.
    pub fn set_storage(&self, bytes: i64) {
        self.entity.set_param(PROP_STORAGE, &bytes.to_string());
    }
}

impl AsEntity for Resources {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
