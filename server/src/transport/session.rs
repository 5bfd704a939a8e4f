use log::info;

use crate::{Element, RenderError, RenderInstance, Renderer, WireSink};

/// The per-connection half of a transport.
///
/// A transport opens one session per client connection, feeds it every
/// text message the client sends, and writes whatever the `send` callback
/// receives back to the client. Each message is answered with exactly one
/// batch, even when nothing changed.
pub struct Session<F: FnMut(String)> {
    instance: RenderInstance<WireSink<F>>,
    messages: u64,
}

impl<F: FnMut(String)> Session<F> {
    /// Mounts `app` and sends the initial batch
    pub fn open<A>(renderer: &Renderer, app: A, send: F) -> Result<Self, RenderError>
    where
        A: FnMut() -> Element + 'static,
    {
        let mut instance = renderer.create_instance(app, WireSink::new(send));
        instance.render(None)?;
        info!("Session opened");
        Ok(Self {
            instance,
            messages: 0,
        })
    }

    pub fn on_message(&mut self, message: &str) -> Result<(), RenderError> {
        self.messages += 1;
        self.instance.receive(message)
    }

    /// Number of client messages handled so far
    pub fn message_count(&self) -> u64 {
        self.messages
    }

    pub fn instance(&self) -> &RenderInstance<WireSink<F>> {
        &self.instance
    }

    /// Unmounts the tree, sending the final `remove` of the root
    pub fn close(mut self) {
        self.instance.unmount();
        info!("Session closed after {} messages", self.messages);
    }
}
