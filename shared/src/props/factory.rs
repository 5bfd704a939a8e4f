use crate::{
    primitives::{FieldRef, Normalized, PrimitiveError, PrimitiveKind, PropValue},
    props::PropError,
};

/// Outcome of diffing one prop that changed.
///
/// `value: None` is an explicit reset, sent as the null sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffResult {
    pub kind: PrimitiveKind,
    pub value: Option<String>,
}

/// A prop bound to one primitive kind and, optionally, a default used to
/// fill unset vector axes.
///
/// The default never reaches the host, so resets are always judged against
/// the kind's own zero value.
#[derive(Clone, Debug, PartialEq)]
pub struct PropFactory {
    kind: PrimitiveKind,
    default: Option<PropValue>,
}

impl PropFactory {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            default: None,
        }
    }

    /// Attach a default used to fill the axes partial input leaves unset
    pub fn try_with_default(mut self, default: impl Into<PropValue>) -> Result<Self, PropError> {
        if self.kind.is_reference() {
            return Err(PropError::DefaultNotAllowed { kind: self.kind });
        }
        let default = default.into();
        self.kind.normalize(&default, None)?;
        self.default = Some(default);
        Ok(self)
    }

    /// Attach a default value.
    ///
    /// # Panics
    ///
    /// Panics if the kind is a reference kind or the default does not
    /// normalize. Use [`try_with_default`](Self::try_with_default) to handle
    /// these cases.
    pub fn with_default(self, default: impl Into<PropValue>) -> Self {
        match self.try_with_default(default) {
            Ok(factory) => factory,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn default_value(&self) -> Option<&PropValue> {
        self.default.as_ref()
    }

    pub fn normalize(&self, raw: &PropValue) -> Result<Normalized, PrimitiveError> {
        self.kind.normalize(raw, self.default.as_ref())
    }

    /// Compares the previous and next raw values of this prop.
    ///
    /// Returns `Ok(None)` when nothing observable changed. Removing a prop
    /// yields a reset unless the previous value already equals the kind's
    /// implicit default. A previous value that fails to normalize counts as changed;
    /// a next value that fails to normalize is an error.
    pub fn diff(
        &self,
        old: Option<&PropValue>,
        new: Option<&PropValue>,
    ) -> Result<Option<DiffResult>, PrimitiveError> {
        match (old, new) {
            (None, None) => Ok(None),
            (Some(old), None) => {
                let at_default = match (self.normalize(old), self.kind.implicit_default()) {
                    (Ok(old), Some(implicit)) => old.equals(&implicit),
                    _ => false,
                };
                if at_default {
                    Ok(None)
                } else {
                    Ok(Some(self.result(None)))
                }
            }
            (old, Some(new)) => {
                let next = self.normalize(new)?;
                let changed = match old.map(|old| self.normalize(old)) {
                    Some(Ok(previous)) => !previous.equals(&next),
                    Some(Err(_)) | None => true,
                };
                if changed {
                    Ok(Some(self.result(Some(next.stringify()))))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Derives the reference to output `name` on instance `element_id`.
    /// Pure: nothing is stored.
    pub fn try_ref(&self, element_id: &str, name: &str) -> Result<FieldRef, PropError> {
        if !self.kind.is_reference() {
            return Err(PropError::NotAReference { kind: self.kind });
        }
        Ok(FieldRef::new(self.kind, element_id, name))
    }

    /// Derives the reference to output `name` on instance `element_id`.
    ///
    /// # Panics
    ///
    /// Panics if the factory is not a reference kind.
    pub fn ref_for(&self, element_id: &str, name: &str) -> FieldRef {
        match self.try_ref(element_id, name) {
            Ok(field_ref) => field_ref,
            Err(error) => panic!("{}", error),
        }
    }

    fn result(&self, value: Option<String>) -> DiffResult {
        DiffResult {
            kind: self.kind,
            value,
        }
    }
}
