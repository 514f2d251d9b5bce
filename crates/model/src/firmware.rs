//! Firmware: per-architecture firmware support entries of an os

use osidb_core::{AsEntity, Entity, Error, ParamEnum, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property key for the architecture the entry applies to.
pub const PROP_ARCHITECTURE: &str = "architecture";
/// Property key for the firmware kind.
pub const PROP_TYPE: &str = "type";
/// Property key for the supported flag.
pub const PROP_SUPPORTED: &str = "supported";

/// The closed enumeration of firmware kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirmwareKind {
    /// Legacy BIOS boot.
    Bios,
    /// UEFI boot.
    Efi,
}

impl FirmwareKind {
    /// The schema spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            FirmwareKind::Bios => "bios",
            FirmwareKind::Efi => "efi",
        }
    }
}

impl fmt::Display for FirmwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FirmwareKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bios" => Ok(FirmwareKind::Bios),
            "efi" => Ok(FirmwareKind::Efi),
            other => Err(Error::UnknownFirmware(other.to_string())),
        }
    }
}

impl ParamEnum for FirmwareKind {
    fn from_param(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

/// A firmware support entry. An os listing `efi` as unsupported on some
/// architecture masks the default assumption that it works.
#[derive(Debug, Clone)]
pub struct Firmware {
    entity: Entity,
}

impl Firmware {
    /// Create a firmware entry with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Architecture the entry applies to.
    pub fn arch(&self) -> Option<String> {
        self.entity.param_value(PROP_ARCHITECTURE)
    }

    /// Firmware kind, `None` when unset or unknown.
    pub fn kind(&self) -> Option<FirmwareKind> {
        self.entity
            .param_value(PROP_TYPE)
            .and_then(|v| v.parse().ok())
    }

    /// Whether the firmware is supported. Defaults to true.
    pub fn is_supported(&self) -> bool {
        self.entity
            .param_value_bool_with_default(PROP_SUPPORTED, true)
    }
}

impl AsEntity for Firmware {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
