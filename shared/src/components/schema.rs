use crate::{
    components::ComponentTemplate,
    primitives::PrimitiveKind,
    props::{ElementProp, PropError, PropFactory},
};

/// Declares the props of one component kind, in order.
///
/// Schemas are composed from shared fragments with [`extend`](Self::extend).
/// Declaration order is preserved through composition and is the order prop
/// updates are emitted in. Re-declaring a name replaces the earlier entry in
/// place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentSchema {
    props: Vec<(String, ElementProp)>,
    has_children: bool,
}

impl ComponentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input prop of the given kind
    pub fn field(self, name: &str, kind: PrimitiveKind) -> Self {
        self.prop(name, PropFactory::new(kind))
    }

    /// Declare an input prop with a prebuilt factory (e.g. one with a default)
    pub fn prop(mut self, name: &str, factory: PropFactory) -> Self {
        self.insert(name, ElementProp::Field(factory));
        self
    }

    /// Declare an output slot other instances can reference
    pub fn try_output(mut self, name: &str, kind: PrimitiveKind) -> Result<Self, PropError> {
        let output = ElementProp::try_output(kind)?;
        self.insert(name, output);
        Ok(self)
    }

    /// Declare an output slot other instances can reference.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not a reference kind.
    pub fn output(self, name: &str, kind: PrimitiveKind) -> Self {
        match self.try_output(name, kind) {
            Ok(schema) => schema,
            Err(error) => panic!("{}", error),
        }
    }

    /// Mark the kind as able to host child components
    pub fn children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// Append every entry of `other` after this schema's own entries
    pub fn extend(mut self, other: &ComponentSchema) -> Self {
        for (name, prop) in &other.props {
            self.insert(name, prop.clone());
        }
        self.has_children |= other.has_children;
        self
    }

    pub fn get(&self, name: &str) -> Option<&ElementProp> {
        self.props
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, prop)| prop)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    /// Compile into the updater and ref factory used at runtime
    pub fn template(&self) -> ComponentTemplate {
        let mut fields = Vec::new();
        let mut outputs = Vec::new();
        for (name, prop) in &self.props {
            match prop {
                ElementProp::Field(factory) => fields.push((name.clone(), factory.clone())),
                ElementProp::Ref(factory) => outputs.push((name.clone(), factory.clone())),
            }
        }
        ComponentTemplate::new(fields, outputs, self.has_children)
    }

    fn insert(&mut self, name: &str, prop: ElementProp) {
        match self.props.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = prop,
            None => self.props.push((name.to_string(), prop)),
        }
    }
}

/// Shared schema fragments
pub mod fragments {
    use super::ComponentSchema;
    use crate::primitives::PrimitiveKind;

    pub fn base() -> ComponentSchema {
        ComponentSchema::new()
            .field("active", PrimitiveKind::Bool)
            .field("persistent", PrimitiveKind::Bool)
            .field("name", PrimitiveKind::String)
            .field("tag", PrimitiveKind::String)
    }

    /// Has position, rotation and scale
    pub fn base_3d() -> ComponentSchema {
        base()
            .field("position", PrimitiveKind::Float3)
            .field("rotation", PrimitiveKind::FloatQ)
            .field("scale", PrimitiveKind::Float3)
    }

    /// Has 2D anchoring fields
    pub fn base_2d() -> ComponentSchema {
        base()
            .field("anchorMin", PrimitiveKind::Float2)
            .field("anchorMax", PrimitiveKind::Float2)
            .field("offsetMin", PrimitiveKind::Float2)
            .field("offsetMax", PrimitiveKind::Float2)
            .field("pivot", PrimitiveKind::Float2)
    }

    pub fn has_children() -> ComponentSchema {
        ComponentSchema::new().children()
    }
}
