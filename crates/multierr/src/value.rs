//! A single constituent error of an aggregate.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::kind::ErrorKind;

/// Shared, immutable error value plus the kind it was created with.
///
/// Cloning is cheap: clones share the underlying error. The error itself is
/// never mutated, so clones are indistinguishable from the original.
#[derive(Clone)]
pub struct ErrorValue {
    kind: ErrorKind,
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl ErrorValue {
    /// Wrap a concrete error. The kind is derived from `E`.
    ///
    /// An `ErrorValue` passed in is returned as is, keeping its own kind.
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(value) = (&err as &dyn Any).downcast_ref::<ErrorValue>() {
            return value.clone();
        }
        Self {
            kind: ErrorKind::of::<E>(),
            inner: Arc::new(err),
        }
    }

    /// Wrap anything convertible into a boxed error under an explicit kind.
    ///
    /// ```
    /// use multierr::{ErrorKind, ErrorValue};
    ///
    /// let err = ErrorValue::with_kind(ErrorKind::tag("config"), "missing key `port`");
    /// assert_eq!(err.message(), "missing key `port`");
    /// assert_eq!(err.kind(), ErrorKind::tag("config"));
    /// ```
    pub fn with_kind<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let boxed: Box<dyn Error + Send + Sync> = err.into();
        Self {
            kind,
            inner: Arc::from(boxed),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error's own rendered message.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Error + 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// True when both values share the same underlying error instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Same kind and character-for-character equal messages.
    ///
    /// Two errors saying the same thing but coming from different kinds are
    /// not similar.
    pub fn similar(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message() == other.message()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValue")
            .field("kind", &self.kind.name())
            .field("error", &self.inner)
            .finish()
    }
}

impl Error for ErrorValue {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl Serialize for ErrorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ErrorValue", 2)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct AlsoRefused;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct RequestFailed(#[source] Refused);

    #[test]
    fn new_records_concrete_type_as_kind() {
        let err = ErrorValue::new(Refused);
        assert_eq!(err.kind(), ErrorKind::of::<Refused>());
        assert_eq!(err.message(), "connection refused");
        assert!(err.is::<Refused>());
        assert!(err.downcast_ref::<AlsoRefused>().is_none());
    }

    #[test]
    fn similar_requires_same_kind_and_message() {
        let a = ErrorValue::new(Refused);
        assert!(a.similar(&ErrorValue::new(Refused)));
        assert!(!a.similar(&ErrorValue::new(AlsoRefused)));
    }

    #[test]
    fn tagged_values_compare_by_tag() {
        let a = ErrorValue::with_kind(ErrorKind::tag("net"), "timeout");
        let b = ErrorValue::with_kind(ErrorKind::tag("net"), String::from("timeout"));
        let c = ErrorValue::with_kind(ErrorKind::tag("disk"), "timeout");
        assert!(a.similar(&b));
        assert!(!a.similar(&c));
    }

    #[test]
    fn clones_share_the_error() {
        let a = ErrorValue::new(Refused);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&ErrorValue::new(Refused)));
    }

    #[test]
    fn source_is_delegated() {
        let err = ErrorValue::new(RequestFailed(Refused));
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "connection refused");

        let inner = err.as_error();
        assert!(inner.is::<RequestFailed>());
        assert_eq!(inner.source().map(ToString::to_string).as_deref(), Some("connection refused"));
    }

    #[test]
    fn new_on_an_error_value_keeps_its_kind() {
        let original = ErrorValue::new(Refused);
        let rewrapped = ErrorValue::new(original.clone());

        assert_eq!(rewrapped.kind(), ErrorKind::of::<Refused>());
        assert!(rewrapped.ptr_eq(&original));
        assert!(rewrapped.is::<Refused>());
        assert!(!rewrapped.similar(&ErrorValue::new(ErrorValue::new(AlsoRefused))));

        let tagged = ErrorValue::with_kind(ErrorKind::tag("net"), "timeout");
        assert_eq!(ErrorValue::new(tagged).kind(), ErrorKind::tag("net"));
    }

    #[test]
    fn serializes_kind_and_message() {
        let err = ErrorValue::with_kind(ErrorKind::tag("net"), "timeout");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "net", "message": "timeout" }));
    }
}
