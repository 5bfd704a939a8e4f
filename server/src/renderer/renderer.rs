use std::sync::Arc;

use scenewire_shared::ComponentKinds;

use crate::{Container, Element, RenderInstance, RendererConfig, SignalSink};

/// Creates render instances that share one component registry
#[derive(Clone)]
pub struct Renderer {
    kinds: Arc<ComponentKinds>,
    config: RendererConfig,
}

impl Renderer {
    /// Create a new Renderer
    pub fn new(kinds: ComponentKinds, config: RendererConfig) -> Self {
        Self::with_shared_kinds(Arc::new(kinds), config)
    }

    pub fn with_shared_kinds(kinds: Arc<ComponentKinds>, config: RendererConfig) -> Self {
        Self { kinds, config }
    }

    pub fn kinds(&self) -> &ComponentKinds {
        &self.kinds
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Binds `app`, the root component, to a fresh container whose settled
    /// batches go to `sink`. Nothing is rendered until the first
    /// [`RenderInstance::render`].
    pub fn create_instance<S, A>(&self, app: A, sink: S) -> RenderInstance<S>
    where
        S: SignalSink,
        A: FnMut() -> Element + 'static,
    {
        let container = Container::new(self.kinds.clone(), &self.config);
        RenderInstance::new(
            container,
            Box::new(app),
            sink,
            self.config.max_render_passes,
        )
    }
}
