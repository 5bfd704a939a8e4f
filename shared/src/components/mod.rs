pub mod catalog;
mod error;
mod kinds;
mod schema;
mod template;

pub use catalog::{default_kinds, tags};
pub use error::ComponentError;
pub use kinds::ComponentKinds;
pub use schema::{fragments, ComponentSchema};
pub use template::{ComponentTemplate, FieldRefs, PropSink};
