//! Snapshot documents for saving and restoring a warehouse.
//!
//! Kind tags stay plain strings here; resolving them is the warehouse's job so that an
//! unknown tag surfaces as a typed error rather than a parse failure.
//! `flags` and `occupancy` are informational on input and default when absent.

use crate::flags::ProductFlags;
use crate::number::compact_float;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductState {
    pub class: String,
    #[serde(default)]
    pub flags: ProductFlags,
    pub name: String,
    #[serde(with = "compact_float")]
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentState {
    pub class: String,
    pub items: Vec<ProductState>,
    #[serde(with = "compact_float")]
    pub max_occupancy: f64,
    #[serde(default, with = "compact_float")]
    pub occupancy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseState {
    pub warehouse_state: Vec<DepartmentState>,
}
