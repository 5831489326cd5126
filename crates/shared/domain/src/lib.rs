//! # Domain Models
//!
//! This crate contains pure warehouse types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, no routing decisions. Just data, wire shapes and simple helpers.

pub mod config;
pub mod descriptor;
pub mod flags;
pub mod kind;
pub mod number;
pub mod product;
pub mod report;
pub mod state;

pub use descriptor::{OrderRequest, ProductDescriptor};
pub use flags::ProductFlags;
pub use kind::{DepartmentKind, ProductKind};
pub use product::{Product, ProductSpec};
