//! DeviceLink: the edge entity tying a device to a platform, os or
//! deployment
//!
//! A link is itself an entity: it carries association-specific metadata
//! (driver name, supported flag) that belongs to neither the device nor the
//! owner. Its id mirrors the target device's id, and the target is a shared
//! handle, never a copy.
//!
//! ## Two matching axes
//!
//! Link collections can be filtered along two distinct axes:
//! - [`DeviceLinkFilter`] matches the **link entity** (plus, optionally, a
//!   nested filter over the target device) — used to pick a preferred link.
//! - A plain [`Filter`] over the **target device** — used to collect the
//!   devices behind the links.
//!
//! The two are easy to conflate and deliberately kept apart in the API.

use crate::device::Device;
use osidb_core::{AsEntity, Entity, Filter, List, Matcher};
use std::fmt;
use std::sync::Arc;

/// Property key for the driver the association uses.
pub const PROP_DRIVER: &str = "driver";
/// Property key for the supported flag.
pub const PROP_SUPPORTED: &str = "supported";

struct DeviceLinkInner {
    entity: Entity,
    target: Device,
}

/// An edge entity associating a [`Device`] with its owner, carrying
/// link-specific metadata.
#[derive(Clone)]
pub struct DeviceLink {
    inner: Arc<DeviceLinkInner>,
}

impl DeviceLink {
    /// Create a link to `target`. The link's id mirrors the target's id.
    pub fn new(target: &Device) -> Self {
        Self {
            inner: Arc::new(DeviceLinkInner {
                entity: Entity::new(target.id()),
                target: target.clone(),
            }),
        }
    }

    /// The linked device (shared handle).
    pub fn target(&self) -> &Device {
        &self.inner.target
    }

    /// Driver used for this association.
    pub fn driver(&self) -> Option<String> {
        self.inner.entity.param_value(PROP_DRIVER)
    }

    /// Whether the association is supported. Defaults to true; an entry has
    /// to be explicitly marked unsupported.
    pub fn is_supported(&self) -> bool {
        self.inner
            .entity
            .param_value_bool_with_default(PROP_SUPPORTED, true)
    }
}

impl AsEntity for DeviceLink {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl fmt::Debug for DeviceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceLink")
            .field("id", &self.id())
            .field("target", &self.inner.target.id())
            .finish()
    }
}

/// Filter over device links: constraints on the link entity itself plus an
/// optional nested filter over the link's target device.
#[derive(Debug, Clone, Default)]
pub struct DeviceLinkFilter {
    base: Filter,
    target_filter: Option<Filter>,
}

impl DeviceLinkFilter {
    /// Create a filter with no constraints. It matches every link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a required property value on the **link** entity.
    pub fn add_constraint(&mut self, key: &str, value: &str) {
        self.base.add_constraint(key, value);
    }

    /// Require the link's target device to match `filter`.
    pub fn set_target_filter(&mut self, filter: Filter) {
        self.target_filter = Some(filter);
    }

    /// Drop the target-device requirement.
    pub fn clear_target_filter(&mut self) {
        self.target_filter = None;
    }

    /// The nested target-device filter, if any.
    pub fn target_filter(&self) -> Option<&Filter> {
        self.target_filter.as_ref()
    }
}

impl Matcher<DeviceLink> for DeviceLinkFilter {
    fn matches(&self, link: &DeviceLink) -> bool {
        // link-entity constraints first
        if !self.base.matches(link) {
            return false;
        }
        match &self.target_filter {
            Some(filter) => filter.matches(link.target()),
            None => true,
        }
    }
}

/// First link accepted by `filter`, scanning in slice order. The caller
/// keeps its links most-recently-added first, so this is "newest match
/// wins".
pub(crate) fn preferred_link(
    links: &[DeviceLink],
    filter: Option<&DeviceLinkFilter>,
) -> Option<DeviceLink> {
    links
        .iter()
        .find(|link| filter.map_or(true, |f| f.matches(*link)))
        .cloned()
}

/// Links accepted by `filter`, in slice order.
pub(crate) fn links_matching(
    links: &[DeviceLink],
    filter: Option<&DeviceLinkFilter>,
) -> List<DeviceLink> {
    links
        .iter()
        .filter(|link| filter.map_or(true, |f| f.matches(*link)))
        .cloned()
        .collect()
}

/// Target devices of the links whose **target** is accepted by `filter`, in
/// slice order. Note the different matching axis from [`links_matching`].
pub(crate) fn devices_matching(links: &[DeviceLink], filter: Option<&Filter>) -> List<Device> {
    links
        .iter()
        .filter(|link| filter.map_or(true, |f| f.matches(link.target())))
        .map(|link| link.target().clone())
        .collect()
}
