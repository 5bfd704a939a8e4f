use crate::primitives::PrimitiveKind;

/// Process-unique id of an instance on the wire. The container root uses a
/// reserved non-numeric id.
pub type ElementId = String;

/// One changed prop inside an `update` signal. `value: None` is an explicit
/// reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropUpdate {
    pub prop: String,
    pub kind: PrimitiveKind,
    pub value: Option<String>,
}

impl PropUpdate {
    pub fn new(prop: &str, kind: PrimitiveKind, value: Option<&str>) -> Self {
        Self {
            prop: prop.to_string(),
            kind,
            value: value.map(str::to_string),
        }
    }
}

/// Signals sent from the renderer to the scene host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundSignal {
    Create {
        id: ElementId,
        kind: String,
    },
    Remove {
        id: ElementId,
    },
    Update {
        id: ElementId,
        props: Vec<PropUpdate>,
    },
    /// Attach `id` under `parent_id`, directly after sibling `after`, or at
    /// the end of the parent's children when `after` is absent
    SetParent {
        id: ElementId,
        parent_id: ElementId,
        after: Option<ElementId>,
    },
}

impl OutboundSignal {
    pub fn id(&self) -> &str {
        match self {
            OutboundSignal::Create { id, .. }
            | OutboundSignal::Remove { id }
            | OutboundSignal::Update { id, .. }
            | OutboundSignal::SetParent { id, .. } => id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutboundSignal::Create { .. } => "create",
            OutboundSignal::Remove { .. } => "remove",
            OutboundSignal::Update { .. } => "update",
            OutboundSignal::SetParent { .. } => "setParent",
        }
    }
}

/// A client-originated event aimed at one handler of one instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSignal {
    pub id: ElementId,
    pub event: String,
    pub arg: String,
}

/// Signals sent from the scene host to the renderer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboundSignal {
    Event(EventSignal),
}

impl InboundSignal {
    pub fn event(id: &str, event: &str, arg: &str) -> Self {
        InboundSignal::Event(EventSignal {
            id: id.to_string(),
            event: event.to_string(),
            arg: arg.to_string(),
        })
    }
}
