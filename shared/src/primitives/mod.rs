mod codec;
mod error;
mod field_ref;
mod kind;
mod number;
mod value;

pub use error::PrimitiveError;
pub use field_ref::FieldRef;
pub use kind::PrimitiveKind;
pub use number::{format_number, parse_number};
pub use value::{Normalized, PartialVector, PropValue};
