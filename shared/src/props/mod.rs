mod element_prop;
mod error;
mod factory;
mod props_map;

pub use element_prop::ElementProp;
pub use error::PropError;
pub use factory::{DiffResult, PropFactory};
pub use props_map::Props;
