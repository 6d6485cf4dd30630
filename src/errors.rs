//! Crate-specific error and result types.

use crate::input::keyboard::KeyTransition;

/// Result type returned by functions that resolve symbolic key names or
/// inject synthetic input.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for key resolution and input injection.
#[derive(Clone, Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum Error {
    /// A symbolic key name was not present in the key registry.
    ///
    /// This indicates a caller or configuration bug rather than a transient
    /// fault: the registry is compiled-in and never changes at runtime, so
    /// retrying the same lookup cannot succeed. Raised before any system
    /// call is attempted.
    #[error("no key is registered under the name `{0}`")]
    UnknownKey(String),

    /// The system queued zero events for an injected key transition.
    ///
    /// Carries the platform error code captured at the point of failure.
    /// The action is not retried at this layer. A caller that retries
    /// should repeat the whole logical key action, not just the failed
    /// half, so that down and up events stay paired for the receiving
    /// application.
    #[error("the system queued no events for a key-{transition} injection (os error {code})")]
    Injection {
        /// Which half of the press the system rejected.
        transition: KeyTransition,
        /// The platform error code (`GetLastError` on Windows).
        code: u32,
    },
}
