//! Facade crate for Depot.
//! Re-exports domain/kernel primitives and the warehouse engine, and builds a warehouse
//! from configuration. Keep this crate thin: it composes other crates.
//!
//! ## Usage
//! ```rust
//! use depot::domain::config::DepotConfig;
//!
//! let warehouse = depot::init(&DepotConfig::default());
//! assert_eq!(warehouse.departments().len(), 5);
//! ```

pub use depot_domain as domain;
pub use depot_kernel as kernel;
pub use depot_warehouse as warehouse;

use depot_domain::config::{DepartmentsConfig, DepotConfig};
use depot_warehouse::{Department, Warehouse};
use tracing::info;

/// Builds a warehouse with the configured departments, in configuration order.
#[must_use]
pub fn init(config: &DepotConfig) -> Warehouse {
    let warehouse = with_departments(&config.departments);
    info!(departments = warehouse.departments().len(), "Warehouse initialized");
    warehouse
}

/// Builds a warehouse from a department layout alone.
#[must_use]
pub fn with_departments(layout: &DepartmentsConfig) -> Warehouse {
    let mut warehouse = Warehouse::new();
    for department in layout.iter() {
        warehouse.add_department(Department::new(department.kind, department.max_occupancy));
    }
    warehouse
}
