//! The compiled-in enumeration of every key the panel can strike.

use ::strum::{Display, EnumIter, IntoStaticStr};

/// A physical key, identified by its DirectInput scancode.
///
/// The enumeration is the single authoritative data source for the key set:
/// the [registry] is populated by walking it, so a key exists exactly when a
/// variant does. Discriminants are the scancode values forwarded to the
/// system and form a compatibility contract with the applications on the
/// receiving end - they must never be renumbered.
///
/// Symbolic names are the uppercase variant names (`"A"`, `"RSHIFT"`,
/// `"NUMPAD7"`, ...). The left-hand modifiers drop their `L` prefix since
/// the left key is almost always the one a panel wiring means: `CTRL`,
/// `SHIFT`, `ALT` and `WIN` are the left keys, with explicit `RCTRL`,
/// `RSHIFT`, `RALT` and `RWIN` variants for the right-hand ones.
///
/// [registry]: super::resolve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u16)]
pub enum KeyCode {
    Escape = 0x01,
    N1 = 0x02,
    N2 = 0x03,
    N3 = 0x04,
    N4 = 0x05,
    N5 = 0x06,
    N6 = 0x07,
    N7 = 0x08,
    N8 = 0x09,
    N9 = 0x0A,
    N0 = 0x0B,
    /// `-` on the main row.
    Minus = 0x0C,
    Equals = 0x0D,
    /// Backspace.
    Back = 0x0E,
    Tab = 0x0F,
    Q = 0x10,
    W = 0x11,
    E = 0x12,
    R = 0x13,
    T = 0x14,
    Y = 0x15,
    U = 0x16,
    I = 0x17,
    O = 0x18,
    P = 0x19,
    LBracket = 0x1A,
    RBracket = 0x1B,
    /// Enter on the main keyboard.
    Return = 0x1C,
    /// Left control.
    Ctrl = 0x1D,
    A = 0x1E,
    S = 0x1F,
    D = 0x20,
    F = 0x21,
    G = 0x22,
    H = 0x23,
    J = 0x24,
    K = 0x25,
    L = 0x26,
    Semicolon = 0x27,
    Apostrophe = 0x28,
    /// Accent grave.
    Grave = 0x29,
    /// Left shift.
    Shift = 0x2A,
    Backslash = 0x2B,
    Z = 0x2C,
    X = 0x2D,
    C = 0x2E,
    V = 0x2F,
    B = 0x30,
    N = 0x31,
    M = 0x32,
    Comma = 0x33,
    /// `.` on the main keyboard.
    Period = 0x34,
    /// `/` on the main keyboard.
    Slash = 0x35,
    RShift = 0x36,
    /// `*` on the numpad.
    Multiply = 0x37,
    /// Left alt.
    Alt = 0x38,
    Space = 0x39,
    /// Caps lock.
    Capital = 0x3A,
    F1 = 0x3B,
    F2 = 0x3C,
    F3 = 0x3D,
    F4 = 0x3E,
    F5 = 0x3F,
    F6 = 0x40,
    F7 = 0x41,
    F8 = 0x42,
    F9 = 0x43,
    F10 = 0x44,
    NumLock = 0x45,
    /// Scroll lock.
    Scroll = 0x46,
    Numpad7 = 0x47,
    Numpad8 = 0x48,
    Numpad9 = 0x49,
    /// `-` on the numpad.
    Subtract = 0x4A,
    Numpad4 = 0x4B,
    Numpad5 = 0x4C,
    Numpad6 = 0x4D,
    /// `+` on the numpad.
    Add = 0x4E,
    Numpad1 = 0x4F,
    Numpad2 = 0x50,
    Numpad3 = 0x51,
    Numpad0 = 0x52,
    /// `.` on the numpad.
    Decimal = 0x53,
    /// `<>` or `\|` on non-US 102-key keyboards.
    #[strum(serialize = "OEM_102")]
    Oem102 = 0x56,
    F11 = 0x57,
    F12 = 0x58,
    /// NEC PC98.
    F13 = 0x64,
    /// NEC PC98.
    F14 = 0x65,
    /// NEC PC98.
    F15 = 0x66,
    /// Japanese keyboards.
    Kana = 0x70,
    /// `/?` on Brazilian keyboards.
    #[strum(serialize = "ABNT_C1")]
    AbntC1 = 0x73,
    /// Japanese keyboards.
    Convert = 0x79,
    /// Japanese keyboards.
    NoConvert = 0x7B,
    /// Japanese keyboards.
    Yen = 0x7D,
    /// Numpad `.` on Brazilian keyboards.
    #[strum(serialize = "ABNT_C2")]
    AbntC2 = 0x7E,
    /// `=` on the numpad (NEC PC98).
    NumpadEquals = 0x8D,
    /// Previous track; circumflex on Japanese keyboards.
    PrevTrack = 0x90,
    /// NEC PC98.
    At = 0x91,
    /// NEC PC98.
    Colon = 0x92,
    /// NEC PC98.
    Underline = 0x93,
    /// Japanese keyboards.
    Kanji = 0x94,
    /// NEC PC98.
    Stop = 0x95,
    /// Japan AX keyboards.
    Ax = 0x96,
    /// J3100 keyboards.
    Unlabeled = 0x97,
    NextTrack = 0x99,
    /// Enter on the numpad.
    NumpadEnter = 0x9C,
    RCtrl = 0x9D,
    Mute = 0xA0,
    Calculator = 0xA1,
    PlayPause = 0xA2,
    MediaStop = 0xA4,
    VolumeDown = 0xAE,
    VolumeUp = 0xB0,
    WebHome = 0xB2,
    /// `,` on the numpad (NEC PC98).
    NumpadComma = 0xB3,
    /// `/` on the numpad.
    Divide = 0xB5,
    SysRq = 0xB7,
    /// Right alt.
    RAlt = 0xB8,
    Pause = 0xC5,
    /// Home on the arrow keypad.
    Home = 0xC7,
    /// Up arrow on the arrow keypad.
    Up = 0xC8,
    /// Page up on the arrow keypad.
    Prior = 0xC9,
    /// Left arrow on the arrow keypad.
    Left = 0xCB,
    /// Right arrow on the arrow keypad.
    Right = 0xCD,
    /// End on the arrow keypad.
    End = 0xCF,
    /// Down arrow on the arrow keypad.
    Down = 0xD0,
    /// Page down on the arrow keypad.
    Next = 0xD1,
    /// Insert on the arrow keypad.
    Insert = 0xD2,
    /// Delete on the arrow keypad.
    Delete = 0xD3,
    /// Left Windows key.
    Win = 0xDB,
    /// Right Windows key.
    RWin = 0xDC,
    /// Application menu key.
    Apps = 0xDD,
    /// System power.
    Power = 0xDE,
    /// System sleep.
    Sleep = 0xDF,
    /// System wake.
    Wake = 0xE3,
    WebSearch = 0xE5,
    WebFavorites = 0xE6,
    WebRefresh = 0xE7,
    WebStop = 0xE8,
    WebForward = 0xE9,
    WebBack = 0xEA,
    MyComputer = 0xEB,
    Mail = 0xEC,
    MediaSelect = 0xED,
}

impl KeyCode {
    /// The physical scancode forwarded to the system for this key.
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Whether this key is conventionally held down while another key is
    /// struck.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::Ctrl | Self::Shift | Self::RShift | Self::RCtrl | Self::Win | Self::RWin | Self::Alt
        )
    }

    /// The symbolic name under which this key is registered.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
