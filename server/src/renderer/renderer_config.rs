use std::default::Default;

/// Contains Config properties which will be used by a Renderer
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Id the host uses for the container every tree is mounted under
    pub root_id: String,
    /// First id handed out to an instance. Ids then increase by one and are
    /// never reused.
    pub first_instance_id: u64,
    /// The single component kind allowed to hold literal text
    pub text_kind: String,
    /// Prop of the text kind that literal text children are folded into
    pub text_prop: String,
    /// Upper bound on reconcile passes per render before giving up
    pub max_render_passes: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            root_id: "root".to_string(),
            first_instance_id: 1,
            text_kind: "text".to_string(),
            text_prop: "children".to_string(),
            max_render_passes: 64,
        }
    }
}
