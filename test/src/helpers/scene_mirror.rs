use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use scenewire_shared::{try_parse_outbound, OutboundSignal};

/// One node of the mirrored scene
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorNode {
    pub kind: String,
    pub props: BTreeMap<String, String>,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

/// Plain tree view of the mirrored scene, for comparisons
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorTree {
    pub kind: String,
    pub props: BTreeMap<String, String>,
    pub children: Vec<MirrorTree>,
}

/// A stand-in for the scene host.
///
/// Applies outbound signals the way a host would and rejects any signal that
/// breaks the stream's structural rules: ids must be created before use and
/// never created twice, and `setParent` anchors must already sit under the
/// same parent.
pub struct SceneMirror {
    root_id: String,
    nodes: HashMap<String, MirrorNode>,
    root_children: Vec<String>,
    created: HashSet<String>,
}

impl SceneMirror {
    pub fn new(root_id: &str) -> Self {
        Self {
            root_id: root_id.to_string(),
            nodes: HashMap::new(),
            root_children: Vec::new(),
            created: HashSet::new(),
        }
    }

    /// Applies one wire batch
    pub fn apply_wire(&mut self, text: &str) -> Result<(), String> {
        let batch = try_parse_outbound(text).map_err(|error| error.to_string())?;
        self.apply_batch(&batch)
    }

    pub fn apply_batch(&mut self, batch: &[OutboundSignal]) -> Result<(), String> {
        for signal in batch {
            self.apply(signal)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, signal: &OutboundSignal) -> Result<(), String> {
        debug!("mirror applying {:?}", signal);
        match signal {
            OutboundSignal::Create { id, kind } => {
                if !self.created.insert(id.clone()) {
                    return Err(format!("id {} was created twice", id));
                }
                self.nodes.insert(
                    id.clone(),
                    MirrorNode {
                        kind: kind.clone(),
                        props: BTreeMap::new(),
                        parent: None,
                        children: Vec::new(),
                    },
                );
            }
            OutboundSignal::Update { id, props } => {
                let node = self
                    .nodes
                    .get_mut(id)
                    .ok_or_else(|| format!("update of unknown id {}", id))?;
                for update in props {
                    match &update.value {
                        Some(value) => {
                            node.props.insert(update.prop.clone(), value.clone());
                        }
                        None => {
                            node.props.remove(&update.prop);
                        }
                    }
                }
            }
            OutboundSignal::SetParent {
                id,
                parent_id,
                after,
            } => {
                if !self.nodes.contains_key(id) {
                    return Err(format!("setParent of unknown id {}", id));
                }
                if parent_id != &self.root_id && !self.nodes.contains_key(parent_id) {
                    return Err(format!("setParent of {} under unknown parent {}", id, parent_id));
                }
                if after.as_deref() == Some(id.as_str()) {
                    return Err(format!("{} anchored after itself", id));
                }
                self.detach(id);
                let siblings = self.children_mut(parent_id);
                let position = match after {
                    Some(after) => {
                        let index = siblings
                            .iter()
                            .position(|sibling| sibling == after)
                            .ok_or_else(|| {
                                format!("anchor {} is not a child of {}", after, parent_id)
                            })?;
                        index + 1
                    }
                    None => siblings.len(),
                };
                siblings.insert(position, id.clone());
                if let Some(node) = self.nodes.get_mut(id) {
                    node.parent = Some(parent_id.clone());
                }
            }
            OutboundSignal::Remove { id } => {
                if id == &self.root_id {
                    self.nodes.clear();
                    self.root_children.clear();
                    return Ok(());
                }
                if !self.nodes.contains_key(id) {
                    return Err(format!("remove of unknown id {}", id));
                }
                self.detach(id);
                let mut pending = vec![id.clone()];
                while let Some(id) = pending.pop() {
                    if let Some(node) = self.nodes.remove(&id) {
                        pending.extend(node.children);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&MirrorNode> {
        self.nodes.get(id)
    }

    pub fn prop(&self, id: &str, prop: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.props.get(prop))
            .map(String::as_str)
    }

    pub fn children_of(&self, id: &str) -> Vec<String> {
        if id == self.root_id {
            return self.root_children.clone();
        }
        self.nodes
            .get(id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Ids of live nodes that are attached under some parent
    pub fn attached_len(&self) -> usize {
        self.nodes.values().filter(|node| node.parent.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The scene under the root, as plain trees
    pub fn tree(&self) -> Vec<MirrorTree> {
        self.root_children
            .iter()
            .filter_map(|id| self.subtree(id))
            .collect()
    }

    fn subtree(&self, id: &str) -> Option<MirrorTree> {
        let node = self.nodes.get(id)?;
        Some(MirrorTree {
            kind: node.kind.clone(),
            props: node.props.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.subtree(child))
                .collect(),
        })
    }

    fn children_mut(&mut self, parent_id: &str) -> &mut Vec<String> {
        if parent_id == self.root_id {
            return &mut self.root_children;
        }
        &mut self
            .nodes
            .get_mut(parent_id)
            .expect("parent checked before use")
            .children
    }

    fn detach(&mut self, id: &str) {
        let Some(parent) = self.nodes.get(id).and_then(|node| node.parent.clone()) else {
            return;
        };
        self.children_mut(&parent).retain(|child| child != id);
    }
}

impl MirrorTree {
    /// Compact one-line rendering, e.g. `canvas[text(children=a),text(children=b)]`
    pub fn describe(&self) -> String {
        let mut text = self.kind.clone();
        if !self.props.is_empty() {
            let props: Vec<String> = self
                .props
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            text.push_str(&format!("({})", props.join(",")));
        }
        if !self.children.is_empty() {
            let children: Vec<String> = self.children.iter().map(MirrorTree::describe).collect();
            text.push_str(&format!("[{}]", children.join(",")));
        }
        text
    }
}
