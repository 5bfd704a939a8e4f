use crate::{
    primitives::PrimitiveKind,
    props::{PropError, PropFactory},
};

/// One named entry of a component schema.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementProp {
    /// An input diffed on every render
    Field(PropFactory),
    /// An output slot other instances can reference
    Ref(PropFactory),
}

impl ElementProp {
    pub fn field(kind: PrimitiveKind) -> Self {
        ElementProp::Field(PropFactory::new(kind))
    }

    pub fn try_output(kind: PrimitiveKind) -> Result<Self, PropError> {
        if !kind.is_reference() {
            return Err(PropError::NotAReference { kind });
        }
        Ok(ElementProp::Ref(PropFactory::new(kind)))
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            ElementProp::Field(factory) | ElementProp::Ref(factory) => factory.kind(),
        }
    }
}
