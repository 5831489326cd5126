use crate::error::WarehouseError;
use crate::rules::{DepartmentRules, Eligibility, rules};
use crate::wire;
use depot_domain::report::OccupancyEntry;
use depot_domain::state::{DepartmentState, ProductState};
use depot_domain::{DepartmentKind, Product, ProductDescriptor, ProductFlags, ProductKind};
use serde::{Serialize, Serializer};

/// An ordered, capacity-bounded store for products of the kinds its rules admit.
///
/// Occupancy is always the sum of the stored item sizes.
#[derive(Debug, Clone)]
pub struct Department {
    kind: DepartmentKind,
    max_occupancy: f64,
    items: Vec<Product>,
}

impl Department {
    pub const fn new(kind: DepartmentKind, max_occupancy: f64) -> Self {
        Self { kind, max_occupancy, items: Vec::new() }
    }

    #[must_use]
    pub const fn kind(&self) -> DepartmentKind {
        self.kind
    }

    /// Wire tag of the department kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.tag()
    }

    #[must_use]
    pub fn rules(&self) -> &'static DepartmentRules {
        rules(self.kind)
    }

    #[must_use]
    pub fn occupancy(&self) -> f64 {
        self.items.iter().map(Product::size).sum()
    }

    #[must_use]
    pub const fn max_occupancy(&self) -> f64 {
        self.max_occupancy
    }

    #[must_use]
    pub fn max_item_size(&self) -> f64 {
        self.rules().max_item_size
    }

    #[must_use]
    pub fn supported_flags(&self) -> ProductFlags {
        self.rules().supported_flags
    }

    #[must_use]
    pub fn eligibility(&self, kind: ProductKind) -> Eligibility {
        self.rules().eligibility(kind)
    }

    /// Stored products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `product` would be stored by [`Department::try_accept`] right now.
    #[must_use]
    pub fn can_accept(&self, product: &Product) -> bool {
        self.eligibility(product.kind()).is_eligible()
            && product.size() <= self.max_item_size()
            && self.occupancy() + product.size() <= self.max_occupancy
    }

    /// Stores the product if its kind is eligible, it fits the item size limit and
    /// the remaining capacity.
    ///
    /// # Errors
    /// Hands the product back untouched when any check fails; the department is unchanged.
    pub fn try_accept(&mut self, product: Product) -> Result<(), Product> {
        if !self.can_accept(&product) {
            return Err(product);
        }
        self.items.push(product);
        Ok(())
    }

    /// Removes and returns the earliest stored product matching `descriptor`.
    pub fn extract(&mut self, descriptor: &ProductDescriptor) -> Option<Product> {
        let position = self.items.iter().position(|item| descriptor.matches(item))?;
        Some(self.items.remove(position))
    }

    /// Appends without consulting the rules; used when replaying a snapshot.
    pub(crate) fn restore_item(&mut self, product: Product) {
        self.items.push(product);
    }

    #[must_use]
    pub fn serialized_items(&self) -> Vec<ProductState> {
        self.items.iter().map(Product::to_state).collect()
    }

    /// Snapshot of the department: class, items, maxOccupancy and occupancy.
    #[must_use]
    pub fn report(&self) -> DepartmentState {
        DepartmentState {
            class: self.name().to_owned(),
            items: self.serialized_items(),
            max_occupancy: self.max_occupancy,
            occupancy: self.occupancy(),
        }
    }

    #[must_use]
    pub fn occupancy_entry(&self) -> OccupancyEntry {
        OccupancyEntry {
            department_name: self.kind,
            max_occupancy: self.max_occupancy,
            occupancy: self.occupancy(),
        }
    }

    /// # Errors
    /// Returns [`WarehouseError::Serialization`] if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, WarehouseError> {
        wire::to_json(self)
    }
}

impl Serialize for Department {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.report().serialize(serializer)
    }
}
