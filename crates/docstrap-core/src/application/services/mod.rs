pub mod scaffold_service;

pub use scaffold_service::{RunOptions, ScaffoldReport, ScaffoldService};
