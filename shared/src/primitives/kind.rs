use std::fmt;

/// Every primitive a prop can carry on the wire.
///
/// Value kinds are diffed and stringified by the codec. Reference kinds
/// (`Slot`, `Material`, `Texture2D`, `Mesh`) only ever carry a
/// [`FieldRef`](crate::FieldRef) pointing at another instance's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int,
    Int2,
    Int3,
    Int4,
    Float,
    Float2,
    Float3,
    Float4,
    FloatQ,
    Color,
    String,
    Bool,
    Slot,
    Material,
    Texture2D,
    Mesh,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 16] = [
        PrimitiveKind::Int,
        PrimitiveKind::Int2,
        PrimitiveKind::Int3,
        PrimitiveKind::Int4,
        PrimitiveKind::Float,
        PrimitiveKind::Float2,
        PrimitiveKind::Float3,
        PrimitiveKind::Float4,
        PrimitiveKind::FloatQ,
        PrimitiveKind::Color,
        PrimitiveKind::String,
        PrimitiveKind::Bool,
        PrimitiveKind::Slot,
        PrimitiveKind::Material,
        PrimitiveKind::Texture2D,
        PrimitiveKind::Mesh,
    ];

    /// Name written into the `type` field of a prop update
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Int2 => "int2",
            PrimitiveKind::Int3 => "int3",
            PrimitiveKind::Int4 => "int4",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Float2 => "float2",
            PrimitiveKind::Float3 => "float3",
            PrimitiveKind::Float4 => "float4",
            PrimitiveKind::FloatQ => "floatQ",
            PrimitiveKind::Color => "color",
            PrimitiveKind::String => "string",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Slot => "Slot",
            PrimitiveKind::Material => "Material",
            PrimitiveKind::Texture2D => "Texture2D",
            PrimitiveKind::Mesh => "Mesh",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Slot
                | PrimitiveKind::Material
                | PrimitiveKind::Texture2D
                | PrimitiveKind::Mesh
        )
    }

    /// Number of numeric components, or 0 for non-numeric kinds.
    /// Scalars report 1.
    pub fn axes(&self) -> usize {
        match self {
            PrimitiveKind::Int | PrimitiveKind::Float => 1,
            PrimitiveKind::Int2 | PrimitiveKind::Float2 => 2,
            PrimitiveKind::Int3 | PrimitiveKind::Float3 | PrimitiveKind::FloatQ => 3,
            PrimitiveKind::Int4 | PrimitiveKind::Float4 | PrimitiveKind::Color => 4,
            _ => 0,
        }
    }

    pub(crate) fn is_integral(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int | PrimitiveKind::Int2 | PrimitiveKind::Int3 | PrimitiveKind::Int4
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
