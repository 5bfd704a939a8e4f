use std::{collections::HashMap, fmt, rc::Rc};

use scenewire_shared::{FieldRefs, PropValue, Props};

/// Called with the event argument when the host reports an event
pub type EventHandler = Rc<dyn Fn(&str)>;
/// Called once, after the pass that created the instance, with its refs
pub type MountCallback = Rc<dyn Fn(&FieldRefs)>;

/// A declarative description of one component instance and its subtree.
///
/// Elements are cheap to rebuild; the renderer diffs each new tree against
/// the previous one.
#[derive(Clone)]
pub struct Element {
    pub(crate) kind: String,
    pub(crate) key: Option<String>,
    pub(crate) props: Props,
    pub(crate) children: Vec<Node>,
    pub(crate) handlers: HashMap<String, EventHandler>,
    pub(crate) on_mount: Option<MountCallback>,
}

/// A child of an element: another element, or literal text
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            key: None,
            props: Props::new(),
            children: Vec::new(),
            handlers: HashMap::new(),
            on_mount: None,
        }
    }

    /// Identity among siblings, preserved across reorders
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn prop(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.props.set(name, value);
        self
    }

    /// Sets a prop only when `value` is present
    pub fn prop_opt<V: Into<PropValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.prop(name, value),
            None => self,
        }
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Registers the handler for `event`, replacing any previous one
    pub fn on(mut self, event: &str, handler: impl Fn(&str) + 'static) -> Self {
        self.handlers.insert(event.to_string(), Rc::new(handler));
        self
    }

    pub fn on_mount(mut self, callback: impl Fn(&FieldRefs) + 'static) -> Self {
        self.on_mount = Some(Rc::new(callback));
        self
    }

    pub fn kind_name(&self) -> &str {
        &self.kind
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn prop_values(&self) -> &Props {
        &self.props
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn child_elements(&self) -> Vec<&Element> {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                Node::Text(_) => None,
            })
            .collect()
    }

    pub(crate) fn child_texts(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<&String> = self.handlers.keys().collect();
        events.sort();
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("handlers", &events)
            .field("on_mount", &self.on_mount.is_some())
            .finish()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}
