pub mod build_error;
pub use build_error::*;

pub mod builder_config;
pub use builder_config::*;

pub mod raw_record;
pub use raw_record::*;

pub mod node_registry;
pub use node_registry::*;

pub mod node_builder;
pub use node_builder::*;
