//! Delivery and occupancy reports.

use crate::kind::DepartmentKind;
use crate::number::compact_float;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// Department name reported for rejected products.
pub const NO_DEPARTMENT: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DeliveryStatus {
    Success,
    Fail,
}

/// Why a delivered product could not be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum DeliveryFailure {
    /// No registered department may ever hold this kind.
    #[strum(serialize = "Warehouse cannot store this product. Lack of required department.")]
    MissingDepartment,
    /// Eligible departments exist, but none has room.
    #[strum(serialize = "Warehouse cannot store this product. Lack of space in departments.")]
    NoSpace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEntry {
    pub assigned_department: String,
    pub error_log: String,
    pub product_name: String,
    pub status: DeliveryStatus,
}

impl DeliveryEntry {
    pub fn stored(product_name: impl Into<String>, department: DepartmentKind) -> Self {
        Self {
            assigned_department: department.tag().to_owned(),
            error_log: String::new(),
            product_name: product_name.into(),
            status: DeliveryStatus::Success,
        }
    }

    pub fn rejected(product_name: impl Into<String>, failure: DeliveryFailure) -> Self {
        let log: &'static str = failure.into();
        Self {
            assigned_department: NO_DEPARTMENT.to_owned(),
            error_log: log.to_owned(),
            product_name: product_name.into(),
            status: DeliveryStatus::Fail,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == DeliveryStatus::Success
    }
}

/// Per-product outcome of one delivery, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub delivery_report: Vec<DeliveryEntry>,
}

impl DeliveryReport {
    #[must_use]
    pub fn stored_count(&self) -> usize {
        self.delivery_report.iter().filter(|entry| entry.is_success()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyEntry {
    pub department_name: DepartmentKind,
    #[serde(with = "compact_float")]
    pub max_occupancy: f64,
    #[serde(with = "compact_float")]
    pub occupancy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub departments_occupancy: Vec<OccupancyEntry>,
}
