use crate::department::Department;
use crate::error::{WarehouseError, WarehouseErrorExt};
use crate::registry::ProductRegistry;
use crate::rules::Eligibility;
use crate::wire;
use depot_domain::report::{DeliveryEntry, DeliveryFailure, DeliveryReport, OccupancyReport};
use depot_domain::state::{DepartmentState, WarehouseState};
use depot_domain::{DepartmentKind, OrderRequest, Product, ProductDescriptor, ProductSpec};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Result of an order: the picked products and the request text, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "picked")]
    pub products: Vec<Product>,
    pub receipt: String,
}

/// Departments in registration order plus the registry used to build products.
///
/// Registration order is routing priority and never changes; only
/// [`Warehouse::try_restore_state`] replaces the department list, and it does so whole.
#[derive(Debug)]
pub struct Warehouse {
    departments: Vec<Department>,
    registry: ProductRegistry,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Warehouse {
    /// An empty warehouse using the built-in product registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ProductRegistry::builtin())
    }

    #[must_use]
    pub const fn with_registry(registry: ProductRegistry) -> Self {
        Self { departments: Vec::new(), registry }
    }

    /// Appends a department at the lowest routing priority.
    pub fn add_department(&mut self, department: Department) -> &mut Self {
        debug!(department = department.name(), max_occupancy = department.max_occupancy(), "Department registered");
        self.departments.push(department);
        self
    }

    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    #[must_use]
    pub const fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    /// Routes every product, in order, to the first department that accepts it.
    ///
    /// Departments holding the product kind as dedicated stock are tried first, then those
    /// taking it as overflow, each tier in registration order. Rejected products are dropped
    /// and reported; earlier acceptances stand.
    #[instrument(skip_all, fields(products = products.len()))]
    pub fn submit_delivery(&mut self, products: Vec<Product>) -> DeliveryReport {
        let delivery_report: Vec<_> = products.into_iter().map(|product| self.route(product)).collect();
        let report = DeliveryReport { delivery_report };

        info!(
            stored = report.stored_count(),
            rejected = report.delivery_report.len() - report.stored_count(),
            "Delivery processed"
        );
        report
    }

    /// Builds the products through the registry, then routes them.
    ///
    /// # Errors
    /// Returns the first construction failure; nothing is routed in that case.
    pub fn deliver(&mut self, specs: &[ProductSpec]) -> Result<DeliveryReport, WarehouseError> {
        let products = self.registry.construct_all(specs).context("Building delivery")?;
        Ok(self.submit_delivery(products))
    }

    fn route(&mut self, product: Product) -> DeliveryEntry {
        let name = product.name().to_owned();
        let kind = product.kind();
        let mut pending = product;
        let mut eligible = false;

        for tier in [Eligibility::Dedicated, Eligibility::Overflow] {
            for department in self.departments.iter_mut().filter(|d| d.eligibility(kind) == tier) {
                eligible = true;
                match department.try_accept(pending) {
                    Ok(()) => {
                        debug!(product = %name, department = department.name(), ?tier, "Product stored");
                        return DeliveryEntry::stored(name, department.kind());
                    }
                    Err(rejected) => pending = rejected,
                }
            }
        }

        let failure = if eligible { DeliveryFailure::NoSpace } else { DeliveryFailure::MissingDepartment };
        debug!(product = %name, %kind, ?failure, "Product rejected");
        DeliveryEntry::rejected(name, failure)
    }

    /// Parses `{"order": [...]}` and picks what it asks for.
    ///
    /// Malformed requests pick nothing; the receipt always echoes `request`.
    #[instrument(skip_all)]
    pub fn submit_order(&mut self, request: &str) -> Order {
        let products = match wire::from_json::<OrderRequest>(request) {
            Ok(order) => self.pick(&order.order),
            Err(err) => {
                warn!(error = %err, "Ignoring malformed order");
                Vec::new()
            }
        };
        Order { products, receipt: request.to_owned() }
    }

    /// Extracts one product per descriptor, asking departments in registration order.
    /// Descriptors without a match are skipped.
    pub fn pick(&mut self, descriptors: &[ProductDescriptor]) -> Vec<Product> {
        let picked: Vec<_> = descriptors
            .iter()
            .filter_map(|descriptor| {
                self.departments.iter_mut().find_map(|department| department.extract(descriptor))
            })
            .collect();

        info!(requested = descriptors.len(), picked = picked.len(), "Order picked");
        picked
    }

    #[must_use]
    pub fn occupancy_report(&self) -> OccupancyReport {
        OccupancyReport {
            departments_occupancy: self.departments.iter().map(Department::occupancy_entry).collect(),
        }
    }

    #[must_use]
    pub fn save_state(&self) -> WarehouseState {
        WarehouseState { warehouse_state: self.departments.iter().map(Department::report).collect() }
    }

    /// # Errors
    /// Returns [`WarehouseError::Serialization`] if JSON encoding fails.
    pub fn occupancy_report_json(&self) -> Result<String, WarehouseError> {
        wire::to_json(&self.occupancy_report())
    }

    /// # Errors
    /// Returns [`WarehouseError::Serialization`] if JSON encoding fails.
    pub fn save_state_json(&self) -> Result<String, WarehouseError> {
        wire::to_json(&self.save_state())
    }

    /// Replaces all departments with the ones recorded in `snapshot`.
    ///
    /// Items are rebuilt through the registry and placed without the acceptance checks.
    /// On failure the current departments are left untouched.
    ///
    /// # Errors
    /// * [`WarehouseError::Serialization`] if `snapshot` is not a warehouse state document.
    /// * [`WarehouseError::UnknownDepartmentKind`] / [`WarehouseError::UnknownProductKind`]
    ///   for unrecognized tags.
    /// * [`WarehouseError::InvalidProduct`] for out-of-range item sizes.
    #[instrument(skip_all)]
    pub fn try_restore_state(&mut self, snapshot: &str) -> Result<(), WarehouseError> {
        let state: WarehouseState = wire::from_json(snapshot).context("Reading warehouse state")?;
        self.restore(&state)
    }

    /// Boolean form of [`Warehouse::try_restore_state`].
    pub fn restore_state(&mut self, snapshot: &str) -> bool {
        match self.try_restore_state(snapshot) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Warehouse state rejected");
                false
            }
        }
    }

    /// Typed form of [`Warehouse::try_restore_state`].
    ///
    /// # Errors
    /// Same as [`Warehouse::try_restore_state`], minus decoding errors.
    pub fn restore(&mut self, state: &WarehouseState) -> Result<(), WarehouseError> {
        let departments = state
            .warehouse_state
            .iter()
            .enumerate()
            .map(|(index, department)| {
                self.rebuild(department).context(format!("Restoring department #{index}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(departments = departments.len(), "Warehouse state restored");
        self.departments = departments;
        Ok(())
    }

    fn rebuild(&self, state: &DepartmentState) -> Result<Department, WarehouseError> {
        let kind = DepartmentKind::from_str(&state.class).map_err(|_| {
            WarehouseError::UnknownDepartmentKind { tag: state.class.clone(), context: None }
        })?;

        let mut department = Department::new(kind, state.max_occupancy);
        for item in &state.items {
            department.restore_item(self.registry.from_state(item)?);
        }
        Ok(department)
    }
}
