//! # Scenewire Server
//! Reconciles declarative element trees into an ordered stream of scene
//! signals for a remote host, and routes the host's events back to the
//! element handlers that asked for them.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use scenewire_shared::{
        default_kinds, fragments, stringify_signals, tags, ComponentKinds, ComponentSchema,
        FieldRef, FieldRefs, InboundSignal, OutboundSignal, PartialVector, PrimitiveKind,
        PropUpdate, PropValue, Props,
    };
}

mod element;
mod error;
mod host;
mod reconciler;
mod renderer;

pub use element::{Element, EventHandler, MountCallback, Node};
pub use error::RenderError;
pub use host::{Container, HostConfig, Instance, InstanceIdGenerator};
pub use reconciler::{Mounted, Reconciler};
pub use renderer::{RenderInstance, Renderer, RendererConfig, SignalSink, WireSink};
pub use transport::Session;
