use std::{
    collections::{HashMap, HashSet, VecDeque},
    mem,
};

use scenewire_shared::{ElementId, FieldRefs, PropValue, Props};

use crate::{
    element::MountCallback,
    reconciler::{fiber::Fiber, validate::validate_tree},
    Element, HostConfig, RenderError,
};

/// A mount callback paired with the refs it will be called with
pub struct Mounted {
    pub(crate) callback: MountCallback,
    pub(crate) refs: FieldRefs,
}

impl Mounted {
    pub fn notify(&self) {
        (self.callback)(&self.refs);
    }
}

/// Diffs successive element trees and drives a [`HostConfig`] with the
/// resulting mutations.
///
/// Children are matched by key when they have one, otherwise by position
/// among the unkeyed siblings. A match whose kind changed is replaced.
/// Within one child list, removals happen first, then each child is created
/// or updated, placed, and recursed into, in order.
#[derive(Default)]
pub struct Reconciler {
    root: Vec<Fiber>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        !self.root.is_empty()
    }

    /// Reconciles `root` against the previously committed tree.
    ///
    /// Returns the mount callbacks of newly created instances, to be invoked
    /// once the pass is complete.
    pub fn reconcile<H: HostConfig>(
        &mut self,
        host: &mut H,
        root: &Element,
    ) -> Result<Vec<Mounted>, RenderError> {
        validate_tree(host, root)?;

        let root_id = host.root_id().to_string();
        let previous = mem::take(&mut self.root);
        let mut mounted = Vec::new();
        self.root = reconcile_children(host, &root_id, previous, &[root], &mut mounted)?;
        Ok(mounted)
    }

    /// Forgets the committed tree. The next pass mounts from scratch.
    pub fn reset(&mut self) {
        self.root.clear();
    }
}

fn reconcile_children<H: HostConfig>(
    host: &mut H,
    parent_id: &str,
    previous: Vec<Fiber>,
    elements: &[&Element],
    mounted: &mut Vec<Mounted>,
) -> Result<Vec<Fiber>, RenderError> {
    let mut order: Vec<ElementId> = previous.iter().map(|fiber| fiber.id.clone()).collect();

    let mut keyed: HashMap<String, VecDeque<Fiber>> = HashMap::new();
    let mut unkeyed: VecDeque<Fiber> = VecDeque::new();
    for fiber in previous {
        match fiber.key.clone() {
            Some(key) => keyed.entry(key).or_default().push_back(fiber),
            None => unkeyed.push_back(fiber),
        }
    }

    let mut matched: Vec<Option<Fiber>> = Vec::with_capacity(elements.len());
    for element in elements {
        let candidate = match &element.key {
            Some(key) => keyed.get_mut(key).and_then(VecDeque::pop_front),
            None => unkeyed.pop_front(),
        };
        matched.push(candidate.filter(|fiber| fiber.kind == element.kind));
    }

    // Anything not reused goes, in previous order
    let reused: HashSet<ElementId> = matched
        .iter()
        .flatten()
        .map(|fiber| fiber.id.clone())
        .collect();
    for id in order.iter().filter(|id| !reused.contains(*id)) {
        host.remove_child(parent_id, id);
    }
    order.retain(|id| reused.contains(id));

    let mut next: Vec<Fiber> = Vec::with_capacity(elements.len());
    for (element, existing) in elements.iter().zip(matched) {
        let props = folded_props(host, element);
        let mut fiber = match existing {
            Some(mut fiber) => {
                host.commit_update(&fiber.id, &fiber.props, &props);
                fiber.props = props;
                fiber
            }
            None => {
                let id = host.create_instance(&element.kind, &props)?;
                if let Some(callback) = &element.on_mount {
                    mounted.push(Mounted {
                        callback: callback.clone(),
                        refs: host.public_instance(&id).unwrap_or_default(),
                    });
                }
                Fiber {
                    id,
                    kind: element.kind.clone(),
                    key: element.key.clone(),
                    props,
                    children: Vec::new(),
                }
            }
        };
        host.commit_handlers(&fiber.id, element.handlers.clone());

        let previous_sibling = next.last().map(|sibling| sibling.id.as_str());
        place(host, parent_id, &mut order, &fiber.id, previous_sibling);

        let children = mem::take(&mut fiber.children);
        fiber.children =
            reconcile_children(host, &fiber.id, children, &element.child_elements(), mounted)?;
        next.push(fiber);
    }

    Ok(next)
}

/// Moves `id` directly after `previous` unless it is already there.
///
/// `order` mirrors the host's current child order. The first child stays
/// where it is if it already exists; every later child is then pulled in
/// behind its predecessor, which leaves the list in the requested order.
/// A placement at the end of the list is sent without an anchor.
fn place<H: HostConfig>(
    host: &mut H,
    parent_id: &str,
    order: &mut Vec<ElementId>,
    id: &str,
    previous: Option<&str>,
) {
    let current = order.iter().position(|existing| existing == id);
    let in_place = match (previous, current) {
        (None, Some(_)) => true,
        (Some(previous), Some(index)) => index > 0 && order[index - 1] == previous,
        (_, None) => false,
    };
    if in_place {
        return;
    }

    if let Some(index) = current {
        order.remove(index);
    }
    let anchor =
        previous.and_then(|previous| order.iter().position(|existing| existing == previous));
    let after = match anchor {
        Some(index) if index + 1 < order.len() => {
            order.insert(index + 1, id.to_string());
            previous
        }
        _ => {
            order.push(id.to_string());
            None
        }
    };
    host.insert_child(parent_id, id, after);
}

/// Element props, plus literal text children when the kind holds text
fn folded_props<H: HostConfig>(host: &H, element: &Element) -> Props {
    let mut props = element.props.clone();
    if host.should_set_text_content(&element.kind) {
        match element.child_texts().as_slice() {
            [] => {}
            [text] => props.set(host.text_content_prop(), *text),
            texts => props.set(
                host.text_content_prop(),
                PropValue::TextList(texts.iter().map(|text| Some(text.to_string())).collect()),
            ),
        }
    }
    props
}
