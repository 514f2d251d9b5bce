//! osidb - In-memory catalog of operating system, platform and device
//! metadata
//!
//! osidb answers identification and compatibility queries over a catalog of
//! os/platform/device metadata: which os does this installation medium
//! belong to, which devices does this platform expose, what are the minimum
//! resources for this os version.
//!
//! # Quick Start
//!
//! ```
//! use osidb::{Db, Device, Filter, Matcher, Os};
//! use osidb::AsEntity;
//!
//! let mut db = Db::new();
//!
//! let os = Os::new("os/example/1");
//! os.entity().set_param("family", "linux");
//! db.add_os(os);
//!
//! let dev = Device::new("pci/8086/10d3");
//! dev.entity().set_param("class", "network");
//! db.add_device(dev);
//!
//! let mut filter = Filter::new();
//! filter.add_constraint("class", "network");
//! assert!(filter.matches(&db.device("pci/8086/10d3").unwrap()));
//! ```
//!
//! # Architecture
//!
//! The data model and query engine are split across three crates:
//! `osidb-core` (entities, lists, filters), `osidb-model` (the domain
//! kinds and relationship graph) and `osidb-catalog` (the [`Db`]
//! aggregate). This facade re-exports the public API of all three.

// Re-export the public API of the member crates
pub use osidb_catalog::*;
pub use osidb_core::*;
pub use osidb_model::*;
