mod error;
mod signals;
mod wire;

pub use error::SignalError;
pub use signals::{ElementId, EventSignal, InboundSignal, OutboundSignal, PropUpdate};
pub use wire::{
    parse_inbound, stringify_inbound, stringify_signal, stringify_signals, try_parse_inbound,
    try_parse_outbound, FIELD_SEPARATOR, NULL_SYMBOL, SIGNAL_SEPARATOR,
};
