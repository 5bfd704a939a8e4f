use log::{debug, info, warn};

use scenewire_shared::{try_parse_inbound, InboundSignal, SignalError};

use crate::{Container, Element, HostConfig, Reconciler, RenderError, SignalSink};

/// One mounted tree, bound to one consumer of its signals.
///
/// Every call to [`render`](Self::render) runs to a settled tree and hands
/// exactly one batch (possibly empty) to the sink.
pub struct RenderInstance<S: SignalSink> {
    container: Container,
    reconciler: Reconciler,
    app: Box<dyn FnMut() -> Element>,
    sink: S,
    max_passes: usize,
    renders: u64,
}

impl<S: SignalSink> RenderInstance<S> {
    pub(crate) fn new(
        container: Container,
        app: Box<dyn FnMut() -> Element>,
        sink: S,
        max_passes: usize,
    ) -> Self {
        info!("Render instance created");
        Self {
            container,
            reconciler: Reconciler::new(),
            app,
            sink,
            max_passes,
            renders: 0,
        }
    }

    /// Dispatches `signal` (if any) to its handler, then re-renders until the
    /// queue stops growing and flushes the queued signals as one batch.
    ///
    /// A fatal error aborts the current pass without emitting anything for
    /// it. Signals from passes that completed before the error stay queued
    /// and go out with the next successful render.
    pub fn render(&mut self, signal: Option<InboundSignal>) -> Result<(), RenderError> {
        if let Some(InboundSignal::Event(event)) = signal {
            if let Some(handler) = self.container.handler_for(&event) {
                handler(&event.arg);
            }
        }

        let mut passes = 0;
        loop {
            if passes >= self.max_passes {
                warn!("Render did not settle after {} passes", passes);
                return Err(RenderError::Unstable { passes });
            }
            let before = self.container.queue_len();
            self.pass()?;
            passes += 1;
            if self.container.queue_len() == before {
                break;
            }
        }

        let batch = self.container.drain();
        self.renders += 1;
        debug!(
            "Render {} settled after {} passes with {} signals",
            self.renders,
            passes,
            batch.len()
        );
        self.sink.send(batch);
        Ok(())
    }

    /// Renders in response to one raw client message. Unreadable messages
    /// still trigger a render, just without an event.
    pub fn receive(&mut self, message: &str) -> Result<(), RenderError> {
        let signal = match try_parse_inbound(message) {
            Ok(signal) => Some(signal),
            Err(SignalError::UnknownSignal { prefix }) => {
                debug!("Ignoring inbound signal of unknown type '{}'", prefix);
                None
            }
            Err(error) => {
                warn!("Ignoring malformed inbound message: {}", error);
                None
            }
        };
        self.render(signal)
    }

    /// Tears the tree down and flushes the resulting `remove` of the root.
    /// A later render mounts a fresh tree with fresh ids.
    pub fn unmount(&mut self) {
        self.container.clear_container();
        self.reconciler.reset();
        self.sink.send(self.container.drain());
        info!("Render instance unmounted");
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Number of renders that have settled and flushed
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn pass(&mut self) -> Result<(), RenderError> {
        let root = (self.app)();
        let mounted = self.reconciler.reconcile(&mut self.container, &root)?;
        for mount in &mounted {
            mount.notify();
        }
        Ok(())
    }
}
