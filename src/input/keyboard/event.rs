//! Strongly-typed synthetic key events, the currency between the emission
//! engine and the injection backend.

use ::std::fmt::{self, Display};

use super::KeyCode;

/// Virtual-key identifier for the left Windows key.
///
/// <https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes>
const VK_LWIN: u16 = 0x5B;

/// Virtual-key identifier for the right Windows key.
const VK_RWIN: u16 = 0x5C;

/// Whether a synthetic event presses or releases its key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTransition {
    Down,
    Up,
}

impl Display for KeyTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "down"),
            Self::Up => write!(f, "up"),
        }
    }
}

/// The physical identity carried by a synthetic event. Exactly one of the
/// two addressing modes is used per event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIdentifier {
    /// Address the key by physical scancode. The default path: this is the
    /// form of input that raw-input listeners recognize as a real key.
    ScanCode(u16),
    /// Address the key by Win32 virtual-key code. Only the two Windows keys
    /// travel this way.
    VirtualKey(u16),
}

/// A single synthetic keyboard event, ready for the injection backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Scancode or virtual-key identity of the key.
    pub identifier: KeyIdentifier,
    /// Press or release.
    pub transition: KeyTransition,
}

impl KeyEvent {
    /// A key-down event for the given scancode.
    pub(crate) fn down(code: u16) -> Self {
        Self {
            identifier: Self::identifier_for(code),
            transition: KeyTransition::Down,
        }
    }

    /// A key-up event for the given scancode.
    pub(crate) fn up(code: u16) -> Self {
        Self {
            identifier: Self::identifier_for(code),
            transition: KeyTransition::Up,
        }
    }

    /// Selects the addressing mode for a scancode. The system drops
    /// scancode-addressed events for the two Windows keys, so those travel
    /// as virtual keys; every other key stays on the scancode path.
    fn identifier_for(code: u16) -> KeyIdentifier {
        if code == KeyCode::Win.value() {
            KeyIdentifier::VirtualKey(VK_LWIN)
        } else if code == KeyCode::RWin.value() {
            KeyIdentifier::VirtualKey(VK_RWIN)
        } else {
            KeyIdentifier::ScanCode(code)
        }
    }
}
