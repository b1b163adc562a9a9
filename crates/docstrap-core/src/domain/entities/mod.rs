pub mod common;
pub mod plan;
pub mod template;
