use std::collections::HashMap;

use scenewire_shared::{ElementId, FieldRefs, Props};

use crate::{element::EventHandler, RenderError};

/// The mutations a reconciler needs from the host it renders into.
///
/// Every structural change the diff decides on goes through this trait, so
/// a host can translate them into whatever output it needs.
pub trait HostConfig {
    /// Id of the container node the tree is mounted under
    fn root_id(&self) -> &str;

    /// Fails for kinds the host cannot instantiate
    fn validate_kind(&self, kind: &str) -> Result<(), RenderError>;

    /// Whether `kind` carries the child marker
    fn accepts_children(&self, kind: &str) -> bool;

    /// Whether literal text children of `kind` become a prop instead of nodes
    fn should_set_text_content(&self, kind: &str) -> bool;

    /// Prop that literal text children are folded into
    fn text_content_prop(&self) -> &str;

    fn create_instance(&mut self, kind: &str, props: &Props) -> Result<ElementId, RenderError>;

    fn commit_update(&mut self, id: &str, old: &Props, new: &Props);

    fn commit_handlers(&mut self, id: &str, handlers: HashMap<String, EventHandler>);

    /// Attach `child` under `parent` directly after `after`, or at the end
    /// when `after` is `None`
    fn insert_child(&mut self, parent: &str, child: &str, after: Option<&str>);

    /// Detach and destroy `child` together with its subtree
    fn remove_child(&mut self, parent: &str, child: &str);

    /// Tear down everything under the container
    fn clear_container(&mut self);

    /// What an element's mount callback receives
    fn public_instance(&self, id: &str) -> Option<FieldRefs>;
}
