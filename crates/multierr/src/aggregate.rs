//! The aggregate error: many independent errors reported as one.

use std::error::Error;
use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::error::{AccessError, AccessResult};
use crate::value::ErrorValue;

/// Separates one error message from the next in [`MultiError::message`].
pub const SEPARATOR: &str = "; ";

/// Several errors combined into one.
///
/// Invariants:
/// - never empty: construction from an empty sequence yields `None`
/// - immutable: the errors and their order are fixed at construction
///
/// ```
/// use multierr::{ErrorKind, ErrorValue, MultiError};
///
/// let errs = MultiError::new([
///     ErrorValue::with_kind(ErrorKind::tag("io"), "disk full"),
///     ErrorValue::with_kind(ErrorKind::tag("net"), "host unreachable"),
/// ])
/// .expect("two errors");
///
/// assert_eq!(errs.len(), 2);
/// assert_eq!(errs.to_string(), "disk full; host unreachable");
/// assert!(MultiError::new(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MultiError {
    errors: Vec<ErrorValue>,
}

#[allow(clippy::len_without_is_empty)]
impl MultiError {
    /// Combine `errors`, keeping their order.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn new<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ErrorValue>,
    {
        let errors: Vec<ErrorValue> = errors.into_iter().collect();
        if errors.is_empty() {
            return None;
        }
        Some(Self { errors })
    }

    /// Copy `errors` into a new aggregate; the caller keeps its slice.
    pub fn from_slice(errors: &[ErrorValue]) -> Option<Self> {
        Self::new(errors.iter().cloned())
    }

    /// Wrap each concrete error with [`ErrorValue::new`] and combine them.
    pub fn from_errors<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Error + Send + Sync + 'static,
    {
        Self::new(errors.into_iter().map(ErrorValue::new))
    }

    /// `Ok(())` when `errors` is empty, otherwise the combined error.
    ///
    /// ```
    /// use multierr::{ErrorKind, ErrorValue, MultiError};
    ///
    /// fn validate(port: u32, host: &str) -> Result<(), MultiError> {
    ///     let mut errors = Vec::new();
    ///     if port == 0 {
    ///         errors.push(ErrorValue::with_kind(ErrorKind::tag("config"), "port must be non-zero"));
    ///     }
    ///     if host.is_empty() {
    ///         errors.push(ErrorValue::with_kind(ErrorKind::tag("config"), "host must be set"));
    ///     }
    ///     MultiError::check(errors)
    /// }
    ///
    /// assert!(validate(80, "localhost").is_ok());
    /// let err = validate(0, "").unwrap_err();
    /// assert_eq!(err.to_string(), "port must be non-zero; host must be set");
    /// ```
    pub fn check<I>(errors: I) -> Result<(), Self>
    where
        I: IntoIterator<Item = ErrorValue>,
    {
        match Self::new(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Error at `index`, in insertion order.
    ///
    /// Out-of-range indices are reported as [`AccessError::IndexOutOfBounds`].
    /// Indexing with `[]` panics instead, like a slice.
    pub fn get(&self, index: usize) -> AccessResult<&ErrorValue> {
        self.errors
            .get(index)
            .ok_or_else(|| AccessError::out_of_bounds(index, self.errors.len()))
    }

    pub fn first(&self) -> &ErrorValue {
        &self.errors[0]
    }

    /// Number of errors; always at least one.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ErrorValue> {
        self.errors.iter()
    }

    /// A fresh copy of the errors, same order.
    ///
    /// The returned vector is independent: changing it leaves the aggregate
    /// untouched.
    pub fn unwrap_errors(&self) -> Vec<ErrorValue> {
        self.errors.clone()
    }

    pub fn into_errors(self) -> Vec<ErrorValue> {
        self.errors
    }

    /// All messages in insertion order, joined by [`SEPARATOR`].
    pub fn message(&self) -> String {
        let messages: Vec<String> = self.errors.iter().map(ErrorValue::message).collect();
        // `join` reserves the summed length of pieces and separators before copying.
        messages.join(SEPARATOR)
    }

    /// Order-independent comparison with another aggregate.
    ///
    /// Both sides are stably sorted by message, then compared pairwise by
    /// kind and message, as in [`ErrorValue::similar`]. Errors with equal messages keep their
    /// insertion order, so equal messages of different kinds only match when
    /// they were added in the same relative order.
    pub fn similar(&self, other: Option<&MultiError>) -> bool {
        let Some(other) = other else {
            trace!("no aggregate to compare against");
            return false;
        };
        if self.len() != other.len() {
            trace!(left = self.len(), right = other.len(), "aggregate lengths differ");
            return false;
        }

        let left = sorted_by_message(&self.errors);
        let right = sorted_by_message(&other.errors);
        let mismatch = left
            .iter()
            .zip(&right)
            .position(|((ours, a), (theirs, b))| a.kind() != b.kind() || ours != theirs);
        match mismatch {
            Some(index) => {
                let (ours, theirs) = (&left[index].0, &right[index].0);
                trace!(
                    index,
                    ours = %ours,
                    theirs = %theirs,
                    "sorted errors differ"
                );
                false
            }
            None => true,
        }
    }

    /// [`MultiError::similar`] against an arbitrary error.
    ///
    /// Anything that is not a `MultiError` (directly, or wrapped in an
    /// [`ErrorValue`]) is never similar.
    pub fn similar_to(&self, other: Option<&(dyn Error + 'static)>) -> bool {
        let Some(other) = other else {
            return self.similar(None);
        };
        let aggregate = other.downcast_ref::<MultiError>().or_else(|| {
            other
                .downcast_ref::<ErrorValue>()
                .and_then(|value| value.as_error().downcast_ref::<MultiError>())
        });
        if aggregate.is_none() {
            trace!(other = %other, "counterpart is not an aggregate");
            return false;
        }
        self.similar(aggregate)
    }
}

/// Errors paired with their rendered message, stably sorted by message.
///
/// Ties keep insertion order. Each message is rendered once.
fn sorted_by_message(errors: &[ErrorValue]) -> Vec<(String, &ErrorValue)> {
    let mut sorted: Vec<(String, &ErrorValue)> =
        errors.iter().map(|err| (err.message(), err)).collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    sorted
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for MultiError {}

impl Index<usize> for MultiError {
    type Output = ErrorValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a ErrorValue;
    type IntoIter = core::slice::Iter<'a, ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for MultiError {
    type Item = ErrorValue;
    type IntoIter = std::vec::IntoIter<ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Serialize for MultiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}
