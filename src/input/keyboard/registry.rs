//! The process-wide registry mapping symbolic key names to physical
//! scancodes.

use ::lazy_static::lazy_static;
use ::std::collections::HashMap;
use ::strum::IntoEnumIterator;

use super::KeyCode;
use crate::errors::{Error, Result};

/// A registry entry describing one symbolic key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// The unique, case-sensitive symbolic name under which the key is
    /// registered.
    pub name: &'static str,
    /// The physical scancode forwarded to the system. Opaque at this layer
    /// beyond being passed through.
    pub code: u16,
    /// Whether the key is conventionally held while another key is struck.
    pub is_modifier: bool,
}

impl KeyDescriptor {
    /// The descriptor for a typed key. Infallible: every [`KeyCode`] is
    /// registered.
    pub fn of(key: KeyCode) -> Self {
        Self {
            name: key.name(),
            code: key.value(),
            is_modifier: key.is_modifier(),
        }
    }
}

lazy_static! {
    /// The one process-wide lookup table, built on first use by walking the
    /// [`KeyCode`] enumeration and never mutated afterwards. `lazy_static`
    /// provides the happens-before barrier between construction and any
    /// concurrent reader.
    static ref KEY_REGISTRY: HashMap<&'static str, KeyDescriptor> = KeyCode::iter()
        .map(|key| (key.name(), KeyDescriptor::of(key)))
        .collect();
}

/// Looks up a symbolic key name in the registry.
///
/// Fails with [`Error::UnknownKey`] for any name outside the compiled key
/// set. Callers should treat that as a configuration error rather than
/// retry: the registry is fixed for the life of the process.
///
/// # Example
///
/// ```
/// use ::keystrike::input::keyboard::resolve;
///
/// let shift = resolve("SHIFT").unwrap();
/// assert_eq!(shift.code, 0x2A);
/// assert!(shift.is_modifier);
///
/// assert!(resolve("NULL_VALUE").is_err());
/// ```
pub fn resolve(name: &str) -> Result<KeyDescriptor> {
    KEY_REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownKey(name.to_owned()))
}
