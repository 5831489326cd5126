//! Closed sets of product and department kinds.
//!
//! The string form of each kind is its wire tag (`"class"` in payloads).

use crate::flags::ProductFlags;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Concrete product kinds known to the warehouse.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ProductKind {
    AcetoneBarrel,
    AstronautsIceCream,
    ElectronicParts,
    ExplosiveBarrel,
    GlassWare,
    IndustrialServerRack,
    #[serde(rename = "TV")]
    #[strum(serialize = "TV")]
    Tv,
}

impl ProductKind {
    /// Fixed handling flags carried by every product of this kind.
    #[must_use]
    pub const fn flags(self) -> ProductFlags {
        match self {
            Self::AcetoneBarrel => ProductFlags::FIRE_HAZARDOUS.union(ProductFlags::ESD_SENSITIVE),
            Self::AstronautsIceCream => ProductFlags::KEEP_DRY.union(ProductFlags::KEEP_FROZEN),
            Self::ElectronicParts => ProductFlags::KEEP_DRY.union(ProductFlags::ESD_SENSITIVE),
            Self::ExplosiveBarrel => ProductFlags::EXPLOSIVES.union(ProductFlags::HANDLE_WITH_CARE),
            Self::GlassWare => ProductFlags::FRAGILE.union(ProductFlags::UP_WARD),
            Self::IndustrialServerRack => ProductFlags::UP_WARD
                .union(ProductFlags::KEEP_DRY)
                .union(ProductFlags::HANDLE_WITH_CARE)
                .union(ProductFlags::ESD_SENSITIVE),
            Self::Tv => ProductFlags::FRAGILE.union(ProductFlags::KEEP_DRY),
        }
    }

    /// Wire tag of the kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

/// Concrete department kinds a warehouse can register.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum DepartmentKind {
    ColdRoomDepartment,
    SmallElectronicDepartment,
    OverSizeElectronicDepartment,
    HazardousDepartment,
    SpecialDepartment,
}

impl DepartmentKind {
    /// Wire tag of the kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }
}
