//! # Warehouse
//!
//! The routing and matching engine behind Depot.
//!
//! * **Intake** ([`Warehouse::submit_delivery`]): first-fit routing over registered
//!   departments, dedicated stock before overflow, with a per-product report.
//! * **Orders** ([`Warehouse::submit_order`], [`Warehouse::pick`]): locate-and-remove the
//!   earliest stored product matching each descriptor.
//! * **Snapshots** ([`Warehouse::save_state`], [`Warehouse::try_restore_state`]): exact,
//!   round-trippable JSON of every department and item.
//!
//! Department behaviour is a static rule table ([`rules`]) keyed by
//! [`DepartmentKind`](depot_domain::DepartmentKind); products are built through the
//! [`ProductRegistry`].
//!
//! ## Example
//!
//! ```rust
//! use depot_domain::{DepartmentKind, ProductSpec};
//! use depot_warehouse::{Department, Warehouse};
//!
//! let mut warehouse = Warehouse::new();
//! warehouse.add_department(Department::new(DepartmentKind::ColdRoomDepartment, 10.0));
//!
//! let report = warehouse
//!     .deliver(&[ProductSpec::new("AstronautsIceCream", "Vanilla", 0.5)])
//!     .expect("known product kind");
//! assert_eq!(report.stored_count(), 1);
//!
//! let order = warehouse.submit_order(r#"{"order": [{"name": "Vanilla"}]}"#);
//! assert_eq!(order.products.len(), 1);
//! ```

pub mod department;
mod error;
pub mod registry;
pub mod rules;
pub mod warehouse;
pub mod wire;

pub use crate::department::Department;
pub use crate::error::{WarehouseError, WarehouseErrorExt};
pub use crate::registry::{Constructor, ProductRegistry};
pub use crate::rules::Eligibility;
pub use crate::warehouse::{Order, Warehouse};
