use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::primitives::{
    number::{format_number, parse_number},
    FieldRef, Normalized, PrimitiveError, PrimitiveKind, PropValue,
};

/// Characters `encodeURIComponent` leaves untouched are alphanumerics and `-_.!~*'()`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl PrimitiveKind {
    /// Converts loose author input into the kind's canonical form.
    ///
    /// A bare number is broadcast to every axis of a vector kind (colors
    /// broadcast to `r, g, b` and keep alpha from the default). Unset axes of
    /// a partial vector come from `default`, and from the kind's zero value
    /// where `default` is absent or itself partial (alpha defaults to `1`).
    /// Integer kinds floor every component.
    pub fn normalize(
        &self,
        raw: &PropValue,
        default: Option<&PropValue>,
    ) -> Result<Normalized, PrimitiveError> {
        let kind = *self;
        match kind {
            PrimitiveKind::Int | PrimitiveKind::Float => match raw {
                PropValue::Number(value) => Ok(Normalized::Scalar(kind.round(*value))),
                other => Err(kind.invalid(other)),
            },
            PrimitiveKind::String => match raw {
                PropValue::Text(text) => Ok(Normalized::Text(text.clone())),
                PropValue::TextList(parts) => Ok(Normalized::Text(join_text(parts))),
                other => Err(kind.invalid(other)),
            },
            PrimitiveKind::Bool => match raw {
                PropValue::Bool(value) => Ok(Normalized::Bool(*value)),
                other => Err(kind.invalid(other)),
            },
            PrimitiveKind::Slot
            | PrimitiveKind::Material
            | PrimitiveKind::Texture2D
            | PrimitiveKind::Mesh => match raw {
                PropValue::Ref(field_ref) if field_ref.kind == kind => {
                    Ok(Normalized::Ref(field_ref.clone()))
                }
                PropValue::Ref(field_ref) => Err(PrimitiveError::RefKindMismatch {
                    expected: kind,
                    actual: field_ref.kind,
                }),
                other => Err(kind.invalid(other)),
            },
            _ => {
                let base = match default {
                    Some(default) => kind.fill(default, &kind.zero_components())?,
                    None => kind.zero_components(),
                };
                Ok(Normalized::Vector(kind.fill(raw, &base)?))
            }
        }
    }

    /// The value a prop takes on the host when it has never been set.
    /// Reference kinds have none.
    pub fn implicit_default(&self) -> Option<Normalized> {
        match self {
            PrimitiveKind::Int | PrimitiveKind::Float => Some(Normalized::Scalar(0.0)),
            PrimitiveKind::String => Some(Normalized::Text(String::new())),
            PrimitiveKind::Bool => Some(Normalized::Bool(false)),
            kind if kind.is_reference() => None,
            kind => Some(Normalized::Vector(kind.zero_components())),
        }
    }

    /// Reads wire text produced by [`Normalized::stringify`] back into a value
    pub fn parse(&self, text: &str) -> Result<Normalized, PrimitiveError> {
        let kind = *self;
        let unparseable = || PrimitiveError::Unparseable {
            kind,
            text: text.to_string(),
        };

        match kind {
            PrimitiveKind::Int | PrimitiveKind::Float => parse_number(text)
                .map(Normalized::Scalar)
                .ok_or_else(unparseable),
            PrimitiveKind::String => percent_decode_str(text)
                .decode_utf8()
                .map(|decoded| Normalized::Text(decoded.into_owned()))
                .map_err(|_| unparseable()),
            PrimitiveKind::Bool => match text {
                "true" => Ok(Normalized::Bool(true)),
                "false" => Ok(Normalized::Bool(false)),
                _ => Err(unparseable()),
            },
            PrimitiveKind::Slot
            | PrimitiveKind::Material
            | PrimitiveKind::Texture2D
            | PrimitiveKind::Mesh => match text.split_once('.') {
                Some((element_id, name)) if !element_id.is_empty() && !name.is_empty() => {
                    Ok(Normalized::Ref(FieldRef::new(kind, element_id, name)))
                }
                _ => Err(unparseable()),
            },
            _ => {
                let inner = text
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .ok_or_else(unparseable)?;
                let components = inner
                    .split(';')
                    .map(parse_number)
                    .collect::<Option<Vec<f64>>>()
                    .ok_or_else(unparseable)?;
                if components.len() != kind.axes() {
                    return Err(unparseable());
                }
                Ok(Normalized::Vector(components))
            }
        }
    }

    fn zero_components(&self) -> Vec<f64> {
        let mut components = vec![0.0; self.axes()];
        if *self == PrimitiveKind::Color {
            components[3] = 1.0;
        }
        components
    }

    fn fill(&self, raw: &PropValue, base: &[f64]) -> Result<Vec<f64>, PrimitiveError> {
        let components: Vec<f64> = match raw {
            PropValue::Number(value) => (0..self.axes())
                .map(|axis| {
                    if *self == PrimitiveKind::Color && axis == 3 {
                        base[axis]
                    } else {
                        *value
                    }
                })
                .collect(),
            PropValue::Vector(vector) => (0..self.axes())
                .map(|axis| vector.axis(axis).unwrap_or(base[axis]))
                .collect(),
            other => return Err(self.invalid(other)),
        };
        Ok(components.into_iter().map(|c| self.round(c)).collect())
    }

    fn round(&self, value: f64) -> f64 {
        if self.is_integral() {
            value.floor()
        } else {
            value
        }
    }

    fn invalid(&self, raw: &PropValue) -> PrimitiveError {
        PrimitiveError::InvalidInput {
            kind: *self,
            shape: raw.shape(),
        }
    }
}

fn join_text(parts: &[Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Normalized {
    /// Canonical wire text for this value
    pub fn stringify(&self) -> String {
        match self {
            Normalized::Scalar(value) => format_number(*value),
            Normalized::Vector(components) => {
                let joined = components
                    .iter()
                    .map(|c| format_number(*c))
                    .collect::<Vec<_>>()
                    .join(";");
                format!("[{}]", joined)
            }
            Normalized::Text(text) => utf8_percent_encode(text, URI_COMPONENT).to_string(),
            Normalized::Bool(value) => value.to_string(),
            Normalized::Ref(field_ref) => field_ref.to_string(),
        }
    }

    /// Component-wise equality. Values of different shapes are never equal.
    pub fn equals(&self, other: &Normalized) -> bool {
        match (self, other) {
            (Normalized::Scalar(a), Normalized::Scalar(b)) => a == b,
            (Normalized::Vector(a), Normalized::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| a == b)
            }
            (Normalized::Text(a), Normalized::Text(b)) => a == b,
            (Normalized::Bool(a), Normalized::Bool(b)) => a == b,
            (Normalized::Ref(a), Normalized::Ref(b)) => a == b,
            _ => false,
        }
    }
}
