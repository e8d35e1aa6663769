//! Business logic services for the application layer.

pub mod registry;
pub mod resolver;

pub use registry::LinkRegistry;
pub use resolver::LinkResolver;
