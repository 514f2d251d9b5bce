//! Entity kinds and relationship graph for the osidb catalog
//!
//! This crate builds the domain model on top of `osidb-core`:
//! - Product: the trait for relationship-bearing kinds (os, platform),
//!   including support-date logic
//! - RelationshipKind: the closed enumeration of product relationships
//! - Composite kinds: Os, Platform, Device, DeviceLink, Deployment, Media,
//!   Tree, Image, Firmware, Resources, Datamap, InstallScript
//! - Specialized filters: ProductFilter (with OsFilter/PlatformFilter
//!   aliases) and DeviceLinkFilter

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod datamap;
pub mod deployment;
pub mod device;
pub mod device_link;
pub mod firmware;
pub mod image;
pub mod install_script;
pub mod media;
pub mod os;
pub mod platform;
pub mod product;
pub mod product_filter;
pub mod relationship;
pub mod resources;
pub mod tree;

// Re-export commonly used types
pub use datamap::Datamap;
pub use deployment::Deployment;
pub use device::Device;
pub use device_link::{DeviceLink, DeviceLinkFilter};
pub use firmware::{Firmware, FirmwareKind};
pub use image::Image;
pub use install_script::InstallScript;
pub use media::Media;
pub use os::{Os, ReleaseStatus, WeakOs};
pub use platform::Platform;
pub use product::{Product, Relationships};
pub use product_filter::{OsFilter, PlatformFilter, ProductFilter};
pub use relationship::RelationshipKind;
pub use resources::Resources;
pub use tree::Tree;
