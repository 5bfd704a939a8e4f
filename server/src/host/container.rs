use std::{collections::HashMap, mem, sync::Arc};

use log::warn;

use scenewire_shared::{
    ComponentKinds, DiffResult, ElementId, EventSignal, FieldRefs, OutboundSignal, PrimitiveError,
    PropSink, PropUpdate, Props,
};

use crate::{
    element::EventHandler,
    host::{HostConfig, Instance, InstanceIdGenerator},
    RenderError, RendererConfig,
};

/// Owns every live instance of one tree and queues the signals describing
/// each change made to it.
pub struct Container {
    kinds: Arc<ComponentKinds>,
    root_id: ElementId,
    text_kind: String,
    text_prop: String,
    ids: InstanceIdGenerator,
    instances: HashMap<ElementId, Instance>,
    root_children: Vec<ElementId>,
    queue: Vec<OutboundSignal>,
}

impl Container {
    pub fn new(kinds: Arc<ComponentKinds>, config: &RendererConfig) -> Self {
        Self {
            kinds,
            root_id: config.root_id.clone(),
            text_kind: config.text_kind.clone(),
            text_prop: config.text_prop.clone(),
            ids: InstanceIdGenerator::new(config.first_instance_id),
            instances: HashMap::new(),
            root_children: Vec::new(),
            queue: Vec::new(),
        }
    }

    // Queue

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queued(&self) -> &[OutboundSignal] {
        &self.queue
    }

    /// Takes every queued signal, leaving the queue empty
    pub fn drain(&mut self) -> Vec<OutboundSignal> {
        mem::take(&mut self.queue)
    }

    // Instances

    pub fn instance(&self, id: &str) -> Option<&Instance> {
        self.instances.get(id)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn root_children(&self) -> &[ElementId] {
        &self.root_children
    }

    /// The id the next created instance will receive
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    // Events

    /// Finds the handler an inbound event targets.
    ///
    /// Walks the tree depth-first, parents before children. Unknown ids and
    /// unknown event names yield `None`; stale events are expected after an
    /// instance has been removed.
    pub fn handler_for(&self, event: &EventSignal) -> Option<EventHandler> {
        let mut stack: Vec<&ElementId> = self.root_children.iter().rev().collect();
        while let Some(id) = stack.pop() {
            let Some(instance) = self.instances.get(id) else {
                continue;
            };
            if instance.id == event.id {
                return instance.handlers.get(&event.event).cloned();
            }
            stack.extend(instance.children.iter().rev());
        }
        None
    }

    // Internal

    fn children_mut(&mut self, parent: &str) -> Option<&mut Vec<ElementId>> {
        if parent == self.root_id {
            return Some(&mut self.root_children);
        }
        self.instances
            .get_mut(parent)
            .map(|instance| &mut instance.children)
    }

    fn detach(&mut self, child: &str) {
        let parent = match self.instances.get(child) {
            Some(instance) => instance.parent.clone(),
            None => return,
        };
        if let Some(parent) = parent {
            if let Some(siblings) = self.children_mut(&parent) {
                siblings.retain(|id| id != child);
            }
        }
    }

    fn destroy_subtree(&mut self, id: &str) {
        let mut pending = vec![id.to_string()];
        while let Some(id) = pending.pop() {
            if let Some(instance) = self.instances.remove(&id) {
                pending.extend(instance.children);
            }
        }
    }
}

struct UpdateCollector<'a> {
    id: &'a str,
    updates: Vec<PropUpdate>,
}

impl PropSink for UpdateCollector<'_> {
    fn diff(&mut self, prop: &str, result: DiffResult) {
        self.updates.diff(prop, result);
    }

    fn invalid(&mut self, prop: &str, error: PrimitiveError) {
        warn!("Instance {} skipped prop '{}': {}", self.id, prop, error);
    }
}

impl HostConfig for Container {
    fn root_id(&self) -> &str {
        &self.root_id
    }

    fn validate_kind(&self, kind: &str) -> Result<(), RenderError> {
        self.kinds.try_template(kind)?;
        Ok(())
    }

    fn accepts_children(&self, kind: &str) -> bool {
        self.kinds
            .try_template(kind)
            .map(|template| template.has_children())
            .unwrap_or(false)
    }

    fn should_set_text_content(&self, kind: &str) -> bool {
        kind == self.text_kind
    }

    fn text_content_prop(&self) -> &str {
        &self.text_prop
    }

    fn create_instance(&mut self, kind: &str, props: &Props) -> Result<ElementId, RenderError> {
        let template = self.kinds.try_template(kind)?;
        let id = self.ids.generate();

        let mut collector = UpdateCollector {
            id: &id,
            updates: Vec::new(),
        };
        template.update(&Props::new(), props, &mut collector);
        let updates = collector.updates;
        let refs = template.refs(&id);

        self.queue.push(OutboundSignal::Create {
            id: id.clone(),
            kind: kind.to_string(),
        });
        if !updates.is_empty() {
            self.queue.push(OutboundSignal::Update {
                id: id.clone(),
                props: updates,
            });
        }

        self.instances
            .insert(id.clone(), Instance::new(id.clone(), kind, refs));
        Ok(id)
    }

    fn commit_update(&mut self, id: &str, old: &Props, new: &Props) {
        let Some(instance) = self.instances.get(id) else {
            warn!("update for unknown instance {}", id);
            return;
        };
        let Ok(template) = self.kinds.try_template(&instance.kind) else {
            return;
        };
        let mut collector = UpdateCollector {
            id,
            updates: Vec::new(),
        };
        template.update(old, new, &mut collector);
        if !collector.updates.is_empty() {
            self.queue.push(OutboundSignal::Update {
                id: id.to_string(),
                props: collector.updates,
            });
        }
    }

    fn commit_handlers(&mut self, id: &str, handlers: HashMap<String, EventHandler>) {
        if let Some(instance) = self.instances.get_mut(id) {
            instance.handlers = handlers;
        }
    }

    fn insert_child(&mut self, parent: &str, child: &str, after: Option<&str>) {
        self.detach(child);

        let Some(siblings) = self.children_mut(parent) else {
            warn!("setParent under unknown parent {}", parent);
            return;
        };
        let position = after
            .and_then(|after| siblings.iter().position(|id| id == after))
            .map(|index| index + 1)
            .unwrap_or(siblings.len());
        siblings.insert(position, child.to_string());

        if let Some(instance) = self.instances.get_mut(child) {
            instance.parent = Some(parent.to_string());
        }
        self.queue.push(OutboundSignal::SetParent {
            id: child.to_string(),
            parent_id: parent.to_string(),
            after: after.map(str::to_string),
        });
    }

    fn remove_child(&mut self, _parent: &str, child: &str) {
        self.detach(child);
        self.destroy_subtree(child);
        self.queue.push(OutboundSignal::Remove {
            id: child.to_string(),
        });
    }

    fn clear_container(&mut self) {
        self.instances.clear();
        self.root_children.clear();
        self.queue.push(OutboundSignal::Remove {
            id: self.root_id.clone(),
        });
    }

    fn public_instance(&self, id: &str) -> Option<FieldRefs> {
        self.instances.get(id).map(|instance| instance.refs.clone())
    }
}
