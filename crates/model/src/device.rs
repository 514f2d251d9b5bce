//! Device: a piece of hardware described by the catalog

use osidb_core::{AsEntity, Entity};

/// Property key for the human-readable device name.
pub const PROP_NAME: &str = "name";
/// Property key for the vendor name.
pub const PROP_VENDOR: &str = "vendor";
/// Property key for the vendor id (e.g. a PCI vendor id).
pub const PROP_VENDOR_ID: &str = "vendor-id";
/// Property key for the product name.
pub const PROP_PRODUCT: &str = "product";
/// Property key for the product id.
pub const PROP_PRODUCT_ID: &str = "product-id";
/// Property key for the device class (network, audio, input, display, ...).
pub const PROP_CLASS: &str = "class";
/// Property key for the bus the device sits on (pci, usb, isa, ...).
pub const PROP_BUS_TYPE: &str = "bus-type";
/// Property key for the subsystem.
pub const PROP_SUBSYSTEM: &str = "subsystem";

/// A hardware device.
///
/// Devices are referenced from platforms, oses and deployments through
/// [`DeviceLink`](crate::DeviceLink) edges; the device itself carries only
/// its own identification properties.
#[derive(Debug, Clone)]
pub struct Device {
    entity: Entity,
}

impl Device {
    /// Create a device with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    /// Best-available display name: the name property, falling back to the
    /// product string, falling back to the id.
    pub fn name(&self) -> String {
        self.entity
            .param_value(PROP_NAME)
            .or_else(|| self.entity.param_value(PROP_PRODUCT))
            .unwrap_or_else(|| self.entity.id().to_string())
    }

    /// Vendor name.
    pub fn vendor(&self) -> Option<String> {
        self.entity.param_value(PROP_VENDOR)
    }

    /// Vendor id.
    pub fn vendor_id(&self) -> Option<String> {
        self.entity.param_value(PROP_VENDOR_ID)
    }

    /// Product name.
    pub fn product(&self) -> Option<String> {
        self.entity.param_value(PROP_PRODUCT)
    }

    /// Product id.
    pub fn product_id(&self) -> Option<String> {
        self.entity.param_value(PROP_PRODUCT_ID)
    }

    /// Device class (network, audio, input, display, ...).
    pub fn class(&self) -> Option<String> {
        self.entity.param_value(PROP_CLASS)
    }

    /// Bus the device sits on.
    pub fn bus_type(&self) -> Option<String> {
        self.entity.param_value(PROP_BUS_TYPE)
    }

    /// Subsystem name.
    pub fn subsystem(&self) -> Option<String> {
        self.entity.param_value(PROP_SUBSYSTEM)
    }
}

impl AsEntity for Device {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
