use crate::{
    components::{
        schema::fragments::{base, base_2d, base_3d, has_children},
        ComponentKinds, ComponentSchema,
    },
    primitives::PrimitiveKind,
};

/// Same-named construction tags for every kind in [`default_kinds`].
///
/// These are plain names; the registry attaches no behaviour to them.
pub mod tags {
    pub const TRANSFORM: &str = "transform";
    pub const SMOOTH_TRANSFORM: &str = "smoothTransform";
    pub const SPINNER: &str = "spinner";
    pub const BOX: &str = "box";
    pub const CANVAS: &str = "canvas";
    pub const RECT: &str = "rect";
    pub const IMAGE: &str = "image";
    pub const TEXT: &str = "text";
    pub const HORIZONTAL_LAYOUT: &str = "horizontalLayout";
    pub const VERTICAL_LAYOUT: &str = "verticalLayout";
    pub const BUTTON: &str = "button";
    pub const UNLIT_MATERIAL: &str = "unlitMaterial";
    pub const PBS_SPECULAR_MATERIAL: &str = "pbsSpecularMaterial";
    pub const BOX_MESH: &str = "boxMesh";
    pub const SPHERE_MESH: &str = "sphereMesh";
    pub const MESH_RENDERER: &str = "meshRenderer";
}

/// The text kind's literal text children are folded into this prop
pub const TEXT_CONTENT_PROP: &str = "children";

/// Output slot through which assets expose themselves to other instances
pub const SELF_REF: &str = "self";

/// Every schema of the standard scene host, keyed by tag
pub fn default_schemas() -> Vec<(&'static str, ComponentSchema)> {
    use PrimitiveKind::*;

    let spatial = || base_3d().extend(&has_children());
    let layout = || base_2d().extend(&has_children());

    vec![
        (tags::TRANSFORM, spatial()),
        (
            tags::SMOOTH_TRANSFORM,
            spatial()
                .field("smoothTransformEnabled", Bool)
                .field("smoothSpeed", Float),
        ),
        (
            tags::SPINNER,
            spatial().field("speed", Float3).field("range", Float3),
        ),
        (
            tags::BOX,
            base_3d()
                .field("albedoColor", Color)
                .field("emissiveColor", Color)
                .field("size", Float3)
                .field("colliderActive", Bool)
                .field("characterCollider", Bool)
                .field("ignoreRaycasts", Bool),
        ),
        (tags::CANVAS, spatial()),
        (tags::RECT, layout()),
        (tags::IMAGE, layout().field("color", Color)),
        (tags::HORIZONTAL_LAYOUT, layout()),
        (tags::VERTICAL_LAYOUT, layout()),
        (
            tags::TEXT,
            base_2d()
                .field(TEXT_CONTENT_PROP, String)
                .field("color", Color),
        ),
        (tags::BUTTON, layout()),
        (
            tags::UNLIT_MATERIAL,
            base()
                .field("color", Color)
                .field("texture", Texture2D)
                .output(SELF_REF, Material),
        ),
        (
            tags::PBS_SPECULAR_MATERIAL,
            base()
                .field("color", Color)
                .field("emissiveColor", Color)
                .field("smoothness", Float)
                .field("albedoTexture", Texture2D)
                .output(SELF_REF, Material),
        ),
        (
            tags::BOX_MESH,
            base().field("size", Float3).output(SELF_REF, Mesh),
        ),
        (
            tags::SPHERE_MESH,
            base().field("radius", Float).output(SELF_REF, Mesh),
        ),
        (
            tags::MESH_RENDERER,
            base_3d().field("mesh", Mesh).field("material", Material),
        ),
    ]
}

/// Registry holding [`default_schemas`]
pub fn default_kinds() -> ComponentKinds {
    let mut kinds = ComponentKinds::new();
    for (name, schema) in default_schemas() {
        kinds.add(name, &schema);
    }
    kinds
}
