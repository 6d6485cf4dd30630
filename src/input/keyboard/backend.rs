//! The seam between the emission engine and the operating system.

use super::KeyEvent;
use crate::errors::Result;

/// A sink for synthetic keyboard events.
///
/// The emission engine composes key-down and key-up events and hands them
/// to its backend one at a time, in the exact order they must reach the
/// target application. The production backend queues each event onto the
/// system input stream; tests substitute a recording backend to observe the
/// sequence.
pub trait InputBackend {
    /// Queue a single synthetic key event.
    ///
    /// Fails with [`Error::Injection`] when the system accepts none of the
    /// submitted events, carrying the platform error code.
    ///
    /// [`Error::Injection`]: crate::errors::Error::Injection
    fn inject(&self, event: KeyEvent) -> Result<()>;
}
