mod fiber;
mod reconciler;
mod validate;

pub use reconciler::{Mounted, Reconciler};
