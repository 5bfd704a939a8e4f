use crate::primitives::FieldRef;

/// Loose vector input where any axis may be left unset.
///
/// Colors reuse the same four slots in `r, g, b, a` order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialVector {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub w: Option<f64>,
}

impl PartialVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new().x(x).y(y)
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new().x(x).y(y).z(z)
    }

    pub fn xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::new().x(x).y(y).z(z).w(w)
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::xyzw(r, g, b, a)
    }

    pub fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn z(mut self, value: f64) -> Self {
        self.z = Some(value);
        self
    }

    pub fn w(mut self, value: f64) -> Self {
        self.w = Some(value);
        self
    }

    pub fn r(self, value: f64) -> Self {
        self.x(value)
    }

    pub fn g(self, value: f64) -> Self {
        self.y(value)
    }

    pub fn b(self, value: f64) -> Self {
        self.z(value)
    }

    pub fn a(self, value: f64) -> Self {
        self.w(value)
    }

    pub(crate) fn axis(&self, index: usize) -> Option<f64> {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => None,
        }
    }
}

/// A raw prop value as written by the element author, before defaulting.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A scalar, or a scalar broadcast to every axis of a vector kind
    Number(f64),
    Vector(PartialVector),
    Text(String),
    /// Fragments joined with single spaces; `None` and empty entries are dropped
    TextList(Vec<Option<String>>),
    Bool(bool),
    Ref(FieldRef),
}

impl PropValue {
    /// Short description of the input shape, used in error messages
    pub fn shape(&self) -> &'static str {
        match self {
            PropValue::Number(_) => "number",
            PropValue::Vector(_) => "vector",
            PropValue::Text(_) => "text",
            PropValue::TextList(_) => "text list",
            PropValue::Bool(_) => "bool",
            PropValue::Ref(_) => "field reference",
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<PartialVector> for PropValue {
    fn from(value: PartialVector) -> Self {
        PropValue::Vector(value)
    }
}

impl From<FieldRef> for PropValue {
    fn from(value: FieldRef) -> Self {
        PropValue::Ref(value)
    }
}

impl From<Vec<Option<String>>> for PropValue {
    fn from(value: Vec<Option<String>>) -> Self {
        PropValue::TextList(value)
    }
}

/// Fully populated canonical form of a prop value.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    Scalar(f64),
    /// Components in declared axis order (x, y, z, w or r, g, b, a)
    Vector(Vec<f64>),
    Text(String),
    Bool(bool),
    Ref(FieldRef),
}
