use scenewire_shared::{stringify_signals, OutboundSignal};

/// Receives each settled batch of outbound signals
pub trait SignalSink {
    fn send(&mut self, batch: Vec<OutboundSignal>);
}

/// Keeps every batch, mostly useful for tests and in-process hosts
impl SignalSink for Vec<Vec<OutboundSignal>> {
    fn send(&mut self, batch: Vec<OutboundSignal>) {
        self.push(batch);
    }
}

/// Serializes every batch into wire text and hands it to a transport
pub struct WireSink<F: FnMut(String)> {
    send: F,
}

impl<F: FnMut(String)> WireSink<F> {
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F: FnMut(String)> SignalSink for WireSink<F> {
    fn send(&mut self, batch: Vec<OutboundSignal>) {
        (self.send)(stringify_signals(&batch));
    }
}
