//! # Depot Shell
//!
//! Command-line front end for the warehouse engine. `depot run` replays a JSON script of
//! deliveries, orders, reports and snapshots against a configured warehouse and prints one
//! JSON document per step on stdout. Logs go to stderr or to files.
//!
//! ## Script
//! ```json
//! [
//!   {"deliver": [{"class": "TV", "name": "Brave", "size": 40}]},
//!   {"order": {"order": [{"class": "TV"}]}},
//!   "occupancy",
//!   "save",
//!   {"restore": {"warehouseState": []}}
//! ]
//! ```

pub mod cli;
pub mod script;

pub use cli::{Cli, Command};
pub use script::{Document, Step, run};
