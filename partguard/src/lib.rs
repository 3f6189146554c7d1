//! PartGuard - PC hardware part catalog and compatibility checking library
//!
//! This library checks that a selection of PC parts (CPU, motherboard, RAM,
//! GPU, PSU, case) fits together: matching sockets and memory generations,
//! GPU clearance in compact cases, and PSU headroom.
//!
//! # Quick Start
//!
//! ```
//! use partguard::{check_compatibility, Category, Part};
//!
//! let selection = vec![
//!     Part::new(1, Category::Cpu, "Ryzen 5 5600X", 199.99, 10)
//!         .with_socket("AM4")
//!         .with_tdp(65),
//!     Part::new(2, Category::Motherboard, "B650 board", 189.99, 3)
//!         .with_socket("AM5")
//!         .with_ram_type("DDR4"),
//! ];
//!
//! let result = check_compatibility(&selection);
//! assert!(!result.ok);
//! assert_eq!(result.messages, vec!["CPU socket mismatch."]);
//! ```
//!
//! # Rules
//!
//! - **socket_match**: CPU and motherboard socket
//! - **ram_generation**: RAM and motherboard memory generation
//! - **gpu_clearance**: GPU length in mATX cases
//! - **power_budget**: PSU wattage against 1.3x CPU + GPU TDP
//!
//! Only the first part of each category in a selection is checked.

pub mod cart;
pub mod catalog;
pub mod core;
pub mod model;
pub mod rules;
pub mod selection;

// Re-export main types
pub use cart::Cart;
pub use catalog::{seed_products, Catalog};
pub use crate::core::{check_compatibility, CheckOptions, CompatibilityResult, PartGuardError};
pub use model::{Category, Part};
pub use rules::{Issue, Rule, RulesEngine, Severity};
pub use selection::SelectedParts;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        check_compatibility, Cart, Catalog, Category, CheckOptions, CompatibilityResult, Issue,
        Part, PartGuardError, RulesEngine, Severity,
    };
}
