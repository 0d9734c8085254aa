/// Crate-level error types for helpimg validation boundaries.
///
/// None of the ordinary constructors or accessors in this crate can fail;
/// errors arise only when ingesting data from representations that allow
/// incoherent states.
#[allow(clippy::error_impl_error, reason = "crate-internal error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A flag-based resolution record did not match any of the four
    /// coherent resolution states.
    #[error("inconsistent resolution state: {detail}")]
    InconsistentResolution {
        /// Which fields were present and how the flags were set.
        detail: String,
    },

    /// A principal kind string did not name a known category.
    #[error("unknown principal kind: `{kind}`")]
    UnknownPrincipalKind {
        /// The unrecognized kind string as given.
        kind: String,
    },
}
