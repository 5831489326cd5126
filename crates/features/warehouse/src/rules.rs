//! Static acceptance rules for every department kind.
//!
//! A product kind is either *dedicated* to a department kind, accepted only as
//! *overflow*, or ineligible. Routing tries dedicated departments before overflow
//! ones; a department itself accepts both.
//!
//! `supported_flags` is reported alongside the department and never consulted when
//! deciding acceptance.

use depot_domain::{DepartmentKind, ProductFlags, ProductKind};

/// How a department kind relates to a product kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Dedicated,
    Overflow,
    Ineligible,
}

impl Eligibility {
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        !matches!(self, Self::Ineligible)
    }
}

#[derive(Debug)]
pub struct DepartmentRules {
    /// Largest single item the department takes; `f64::INFINITY` when unbounded.
    pub max_item_size: f64,
    pub supported_flags: ProductFlags,
    pub dedicated: &'static [ProductKind],
    pub overflow: &'static [ProductKind],
}

impl DepartmentRules {
    #[must_use]
    pub fn eligibility(&self, kind: ProductKind) -> Eligibility {
        if self.dedicated.contains(&kind) {
            Eligibility::Dedicated
        } else if self.overflow.contains(&kind) {
            Eligibility::Overflow
        } else {
            Eligibility::Ineligible
        }
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_item_size.is_finite()
    }
}

static COLD_ROOM: DepartmentRules = DepartmentRules {
    max_item_size: f64::INFINITY,
    supported_flags: ProductFlags::KEEP_DRY.union(ProductFlags::KEEP_FROZEN),
    dedicated: &[ProductKind::AstronautsIceCream],
    overflow: &[],
};

static SMALL_ELECTRONIC: DepartmentRules = DepartmentRules {
    max_item_size: 5.0,
    supported_flags: ProductFlags::KEEP_DRY.union(ProductFlags::ESD_SENSITIVE),
    dedicated: &[ProductKind::ElectronicParts, ProductKind::IndustrialServerRack],
    overflow: &[],
};

static OVERSIZE_ELECTRONIC: DepartmentRules = DepartmentRules {
    max_item_size: f64::INFINITY,
    supported_flags: ProductFlags::KEEP_DRY.union(ProductFlags::ESD_SENSITIVE),
    dedicated: &[ProductKind::ElectronicParts, ProductKind::IndustrialServerRack],
    overflow: &[],
};

static HAZARDOUS: DepartmentRules = DepartmentRules {
    max_item_size: f64::INFINITY,
    supported_flags: ProductFlags::FIRE_HAZARDOUS
        .union(ProductFlags::EXPLOSIVES)
        .union(ProductFlags::KEEP_DRY),
    dedicated: &[ProductKind::AcetoneBarrel, ProductKind::ExplosiveBarrel],
    overflow: &[],
};

static SPECIAL: DepartmentRules = DepartmentRules {
    max_item_size: f64::INFINITY,
    supported_flags: ProductFlags::FRAGILE
        .union(ProductFlags::UP_WARD)
        .union(ProductFlags::KEEP_DRY)
        .union(ProductFlags::HANDLE_WITH_CARE),
    dedicated: &[ProductKind::GlassWare, ProductKind::Tv],
    overflow: &[ProductKind::IndustrialServerRack],
};

/// Rule table lookup.
#[must_use]
pub fn rules(kind: DepartmentKind) -> &'static DepartmentRules {
    match kind {
        DepartmentKind::ColdRoomDepartment => &COLD_ROOM,
        DepartmentKind::SmallElectronicDepartment => &SMALL_ELECTRONIC,
        DepartmentKind::OverSizeElectronicDepartment => &OVERSIZE_ELECTRONIC,
        DepartmentKind::HazardousDepartment => &HAZARDOUS,
        DepartmentKind::SpecialDepartment => &SPECIAL,
    }
}

/// Shorthand for `rules(department).eligibility(product)`.
#[must_use]
pub fn eligibility(department: DepartmentKind, product: ProductKind) -> Eligibility {
    rules(department).eligibility(product)
}
