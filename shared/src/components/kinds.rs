use std::collections::HashMap;

use crate::components::{ComponentError, ComponentSchema, ComponentTemplate};

/// Registry of every component kind a renderer may instantiate
#[derive(Clone, Debug, Default)]
pub struct ComponentKinds {
    templates: HashMap<String, ComponentTemplate>,
    names: Vec<String>,
}

impl ComponentKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind under `name`
    pub fn try_add(&mut self, name: &str, schema: &ComponentSchema) -> Result<(), ComponentError> {
        if self.templates.contains_key(name) {
            return Err(ComponentError::DuplicateKind {
                kind: name.to_string(),
            });
        }
        self.templates.insert(name.to_string(), schema.template());
        self.names.push(name.to_string());
        Ok(())
    }

    /// Register a kind under `name`
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered.
    pub fn add(&mut self, name: &str, schema: &ComponentSchema) {
        if let Err(error) = self.try_add(name, schema) {
            panic!("{}", error);
        }
    }

    pub fn try_template(&self, name: &str) -> Result<&ComponentTemplate, ComponentError> {
        self.templates
            .get(name)
            .ok_or_else(|| ComponentError::KindNotRegistered {
                kind: name.to_string(),
            })
    }

    /// # Panics
    ///
    /// Panics if `name` is not registered.
    pub fn template(&self, name: &str) -> &ComponentTemplate {
        match self.try_template(name) {
            Ok(template) => template,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Kind names in registration order
    pub fn kind_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
