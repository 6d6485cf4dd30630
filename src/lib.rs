//! Synthetic raw keyboard input for arcade cabinet control panels.
//!
//! `keystrike` emulates physical key presses into another application which
//! listens for raw input, such as an emulator. Events are injected at the
//! scancode level rather than as virtual keys, which is the form of input
//! that programs reading the hardware input stream directly (MAME being the
//! canonical case) actually recognize.
//!
//! The crate has two halves:
//!
//! - a process-wide [key registry] which maps stable, symbolic key names
//!   (`"A"`, `"RSHIFT"`, `"NUMPAD7"`, ...) to their physical scancodes, and
//! - an [emission engine] which composes key-down/key-up pairs and modifier
//!   sequences in the strict order the target application requires, with
//!   optional blocking delays between the halves of a press.
//!
//! Callers hand the engine a symbolic name and get back success or a
//! [failure]; button-to-key configuration, panel UI and process management
//! all live outside this crate.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> ::keystrike::errors::Result<()> {
//! use ::keystrike::input::keyboard::KeySender;
//! use ::std::time::Duration;
//!
//! let panel = KeySender::new();
//!
//! // Insert a coin, then press player-one start. MAME wants a short hold
//! // between down and up or it misses the press.
//! panel.send_key_press("N5", Duration::from_millis(50))?;
//! panel.send_key_press("N1", Duration::from_millis(50))?;
//! # Ok(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```
//!
//! [key registry]: crate::input::keyboard::resolve
//! [emission engine]: crate::input::keyboard::KeySender
//! [failure]: crate::errors::Error

pub mod errors;
pub mod input;
