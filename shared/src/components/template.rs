use log::warn;

use crate::{
    primitives::{FieldRef, PrimitiveError},
    props::{DiffResult, PropFactory, Props},
    signal::PropUpdate,
};

/// Receives the output of a component updater
pub trait PropSink {
    /// Called once per changed prop, in declaration order
    fn diff(&mut self, prop: &str, result: DiffResult);

    /// Called when a prop's new value cannot be normalized. The prop is
    /// skipped and the remaining props are still diffed.
    fn invalid(&mut self, prop: &str, error: PrimitiveError) {
        warn!("Skipping invalid value for prop '{}': {}", prop, error);
    }
}

impl PropSink for Vec<PropUpdate> {
    fn diff(&mut self, prop: &str, result: DiffResult) {
        self.push(PropUpdate {
            prop: prop.to_string(),
            kind: result.kind,
            value: result.value,
        });
    }
}

/// Named field references produced for one instance, in declaration order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRefs {
    refs: Vec<(String, FieldRef)>,
}

impl FieldRefs {
    pub fn get(&self, name: &str) -> Option<&FieldRef> {
        self.refs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, field_ref)| field_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRef)> {
        self.refs.iter().map(|(name, field_ref)| (name.as_str(), field_ref))
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// A compiled component schema: the per-kind updater and ref factory.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTemplate {
    fields: Vec<(String, PropFactory)>,
    outputs: Vec<(String, PropFactory)>,
    has_children: bool,
}

impl ComponentTemplate {
    pub(crate) fn new(
        fields: Vec<(String, PropFactory)>,
        outputs: Vec<(String, PropFactory)>,
        has_children: bool,
    ) -> Self {
        Self {
            fields,
            outputs,
            has_children,
        }
    }

    /// Diffs every declared prop between `old` and `new`, forwarding changes
    /// to `sink` in declaration order. Props not declared by the schema are
    /// ignored.
    pub fn update(&self, old: &Props, new: &Props, sink: &mut dyn PropSink) {
        for (name, factory) in &self.fields {
            match factory.diff(old.get(name), new.get(name)) {
                Ok(Some(result)) => sink.diff(name, result),
                Ok(None) => {}
                Err(error) => sink.invalid(name, error),
            }
        }
    }

    /// Collects [`update`](Self::update) into prop updates
    pub fn diffs(&self, old: &Props, new: &Props) -> Vec<PropUpdate> {
        let mut updates = Vec::new();
        self.update(old, new, &mut updates);
        updates
    }

    /// References to every output slot of instance `element_id`
    pub fn refs(&self, element_id: &str) -> FieldRefs {
        let refs = self
            .outputs
            .iter()
            .map(|(name, factory)| {
                (
                    name.clone(),
                    FieldRef::new(factory.kind(), element_id, name.as_str()),
                )
            })
            .collect();
        FieldRefs { refs }
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}
