//! Kernel utilities shared across Depot crates.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use depot_kernel::config::load_config;
//! use depot_kernel::domain::config::DepotConfig;
//!
//! let cfg: DepotConfig = load_config(Some("depot.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use depot_domain as domain;
