//! # Scenewire Shared
//! Prop codec, component schemas and the signal wire format shared by
//! scenewire renderers and the hosts that consume their signal streams.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod components;
pub mod primitives;
pub mod props;
pub mod signal;

pub use components::{
    default_kinds, fragments, tags, ComponentError, ComponentKinds, ComponentSchema,
    ComponentTemplate, FieldRefs, PropSink,
};
pub use primitives::{
    format_number, parse_number, FieldRef, Normalized, PartialVector, PrimitiveError,
    PrimitiveKind, PropValue,
};
pub use props::{DiffResult, ElementProp, PropError, PropFactory, Props};
pub use signal::{
    parse_inbound, stringify_inbound, stringify_signal, stringify_signals, try_parse_inbound,
    try_parse_outbound, ElementId, EventSignal, InboundSignal, OutboundSignal, PropUpdate,
    SignalError, NULL_SYMBOL,
};
