use std::any;
use std::time::Duration;

/// One measured invocation: the label it was recorded under and how long it took.
///
/// Timed calls first sit in the pending buffer of a [`Session`](crate::Session) and
/// become part of a [`Block`](crate::Block) when the session is packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedCall {
    name: String,
    elapsed: Duration,
}

impl TimedCall {
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
        }
    }

    /// The label the call was recorded under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wall-clock time the call took.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The wall-clock time the call took, in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }
}

pub(crate) fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Derives a call label from the type name of a callable.
///
/// Function items yield their own name (`my_mod::parse` becomes `parse`). Closures
/// yield the enclosing function followed by `{{closure}}`, as their type name
/// carries no name of their own.
pub(crate) fn label_of<F>() -> &'static str {
    let type_name = any::type_name::<F>();

    // Generic arguments may contain `::` themselves, so only search the path part.
    let path = type_name.split('<').next().unwrap_or(type_name);

    let Some((parent, last)) = path.rsplit_once("::") else {
        return path;
    };

    if !last.starts_with("{{") {
        return last;
    }

    // `parent` is a prefix of `path`, so its separator offsets are valid in `path`.
    parent
        .rfind("::")
        .and_then(|separator| path.get(separator.saturating_add(2)..))
        .unwrap_or(path)
}
