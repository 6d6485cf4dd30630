//! The input emission engine: composes key-down/key-up pairs and modifier
//! sequences and feeds them to the injection backend in strict order.

use ::std::{thread, time::Duration};
use ::tracing::trace;

use super::{resolve, InputBackend, KeyEvent};
use crate::errors::Result;

/// The central object which turns logical key actions into injected input.
///
/// Every operation resolves its symbolic names through the key registry,
/// then injects one low-level event per key transition through the
/// configured [`InputBackend`]. Emission is entirely synchronous on the
/// calling thread: a configured delay is a blocking pause between the down
/// and up halves of a press, not a scheduled deferred action, so the events
/// of one call can never interleave with each other.
///
/// There is no retry. A failed down during a full press-release cycle
/// aborts before the up is attempted, and the error is handed to the
/// caller, who decides whether to repeat the whole logical action.
///
/// # Example
///
/// ```no_run
/// # #[cfg(windows)]
/// # fn main() -> ::keystrike::errors::Result<()> {
/// use ::keystrike::input::keyboard::KeySender;
/// use ::std::time::Duration;
///
/// let panel = KeySender::new();
///
/// // Toggle the emulator in and out of fullscreen.
/// panel.send_key_press_with_modifier("RETURN", "ALT", Duration::ZERO)?;
/// # Ok(())
/// # }
/// # #[cfg(not(windows))]
/// # fn main() {}
/// ```
pub struct KeySender {
    backend: Box<dyn InputBackend>,
}

#[cfg(windows)]
impl Default for KeySender {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySender {
    /// Constructs a sender backed by the platform input stream.
    #[cfg(windows)]
    pub fn new() -> Self {
        ::tracing::debug!("Creating key sender backed by SendInput");
        Self::with_backend(Box::new(super::Win32Backend))
    }

    /// Constructs a sender with an explicit backend. Intended for tests and
    /// for embedding the engine behind a custom injection path.
    pub fn with_backend(backend: Box<dyn InputBackend>) -> Self {
        Self { backend }
    }

    /// The emission primitive.
    ///
    /// Injects a key-down event for `code` if `down` is set; blocks the
    /// calling thread for `delay` if it is nonzero; then injects a key-up
    /// event if `up` is set. The scancode passes through to the system
    /// unvalidated, except that the two Windows-key scancodes are rerouted
    /// through their virtual-key identifiers.
    ///
    /// Each injection is checked independently and the first failure is
    /// returned immediately, so a failed down aborts the call before any up
    /// is attempted.
    pub fn send_key(&self, code: u16, down: bool, up: bool, delay: Duration) -> Result<()> {
        if down {
            self.backend.inject(KeyEvent::down(code))?;
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        if up {
            self.backend.inject(KeyEvent::up(code))?;
        }
        Ok(())
    }

    /// Sends a full press-release cycle for the named key, holding it for
    /// `delay` between the down and up events. Some receivers poll input
    /// rather than consume events and miss zero-length presses, so panels
    /// typically pass a small nonzero hold.
    pub fn send_key_press(&self, name: &str, delay: Duration) -> Result<()> {
        let key = resolve(name)?;
        trace!(key = name, ?delay, "key press");
        self.send_key(key.code, true, true, delay)
    }

    /// Sends only the key-down half for the named key, leaving it held
    /// until a later [`send_key_up`].
    ///
    /// [`send_key_up`]: Self::send_key_up
    pub fn send_key_down(&self, name: &str) -> Result<()> {
        let key = resolve(name)?;
        trace!(key = name, "key down");
        self.send_key(key.code, true, false, Duration::ZERO)
    }

    /// Sends only the key-up half for the named key, releasing an earlier
    /// [`send_key_down`].
    ///
    /// [`send_key_down`]: Self::send_key_down
    pub fn send_key_up(&self, name: &str) -> Result<()> {
        let key = resolve(name)?;
        trace!(key = name, "key up");
        self.send_key(key.code, false, true, Duration::ZERO)
    }

    /// Sends a press-release cycle for `name` while `modifier` is held.
    ///
    /// The sequence is strict: modifier-down, key-down, the configured
    /// delay, key-up, modifier-up. Both names are resolved before any event
    /// is injected, so an unknown name can never leave the modifier held.
    /// Any key in the registry is accepted as the modifier, though the
    /// conventional modifier set is the intended use.
    pub fn send_key_press_with_modifier(
        &self,
        name: &str,
        modifier: &str,
        delay: Duration,
    ) -> Result<()> {
        let key = resolve(name)?;
        let modifier_key = resolve(modifier)?;
        trace!(key = name, modifier, ?delay, "modified key press");

        self.send_key(modifier_key.code, true, false, Duration::ZERO)?;
        self.send_key(key.code, true, true, delay)?;
        self.send_key(modifier_key.code, false, true, Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::Error,
        input::keyboard::{KeyCode, KeyIdentifier, KeyTransition},
    };

    use ::pretty_assertions::assert_eq;
    use ::std::{cell::RefCell, rc::Rc, time::Instant};

    /// A backend which records every event it is handed, optionally
    /// refusing one of the two transitions the way `SendInput` refuses by
    /// queueing zero events.
    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<KeyEvent>>>,
        fail_on: Option<KeyTransition>,
    }

    impl Recorder {
        fn failing_on(transition: KeyTransition) -> Self {
            Self {
                fail_on: Some(transition),
                ..Self::default()
            }
        }

        fn sender(&self) -> KeySender {
            KeySender::with_backend(Box::new(self.clone()))
        }

        fn events(&self) -> Vec<KeyEvent> {
            self.events.borrow().clone()
        }
    }

    impl InputBackend for Recorder {
        fn inject(&self, event: KeyEvent) -> Result<()> {
            if self.fail_on == Some(event.transition) {
                return Err(Error::Injection {
                    transition: event.transition,
                    code: 5, // ERROR_ACCESS_DENIED
                });
            }
            self.events.borrow_mut().push(event);
            Ok(())
        }
    }

    fn scan(code: u16, transition: KeyTransition) -> KeyEvent {
        KeyEvent {
            identifier: KeyIdentifier::ScanCode(code),
            transition,
        }
    }

    fn virtual_key(code: u16, transition: KeyTransition) -> KeyEvent {
        KeyEvent {
            identifier: KeyIdentifier::VirtualKey(code),
            transition,
        }
    }

    /// A plain press issues exactly one down and one up, in that order,
    /// both addressed by the key's scancode.
    #[test]
    fn test_press_is_down_then_up() {
        let recorder = Recorder::default();
        recorder
            .sender()
            .send_key_press("A", Duration::ZERO)
            .unwrap();

        assert_eq!(
            recorder.events(),
            vec![
                scan(0x1E, KeyTransition::Down),
                scan(0x1E, KeyTransition::Up),
            ]
        );
    }

    /// Presses of the Windows keys travel in virtual-key mode, using the
    /// documented identifiers for the left and right keys.
    #[test]
    fn test_windows_keys_use_virtual_key_mode() {
        let recorder = Recorder::default();
        let sender = recorder.sender();

        sender.send_key_press("WIN", Duration::ZERO).unwrap();
        sender.send_key_press("RWIN", Duration::ZERO).unwrap();

        assert_eq!(
            recorder.events(),
            vec![
                virtual_key(0x5B, KeyTransition::Down),
                virtual_key(0x5B, KeyTransition::Up),
                virtual_key(0x5C, KeyTransition::Down),
                virtual_key(0x5C, KeyTransition::Up),
            ]
        );
    }

    /// The down/up halves can be sent separately to hold a key across
    /// calls.
    #[test]
    fn test_separate_down_and_up_halves() {
        let recorder = Recorder::default();
        let sender = recorder.sender();

        sender.send_key_down("SHIFT").unwrap();
        assert_eq!(
            recorder.events(),
            vec![scan(KeyCode::Shift.value(), KeyTransition::Down)]
        );

        sender.send_key_up("SHIFT").unwrap();
        assert_eq!(
            recorder.events(),
            vec![
                scan(KeyCode::Shift.value(), KeyTransition::Down),
                scan(KeyCode::Shift.value(), KeyTransition::Up),
            ]
        );
    }

    /// A modified press surrounds the primary key's full cycle with the
    /// modifier pair: the modifier is fully down before the primary goes
    /// down, and only released after the primary comes up.
    #[test]
    fn test_modified_press_ordering() {
        let recorder = Recorder::default();
        recorder
            .sender()
            .send_key_press_with_modifier("A", "SHIFT", Duration::ZERO)
            .unwrap();

        assert_eq!(
            recorder.events(),
            vec![
                scan(0x2A, KeyTransition::Down),
                scan(0x1E, KeyTransition::Down),
                scan(0x1E, KeyTransition::Up),
                scan(0x2A, KeyTransition::Up),
            ]
        );
    }

    /// The configured hold delay blocks the calling thread between the
    /// down and up halves.
    #[test]
    fn test_delay_blocks_between_down_and_up() {
        let recorder = Recorder::default();
        let start = Instant::now();
        recorder
            .sender()
            .send_key_press_with_modifier("A", "SHIFT", Duration::from_millis(10))
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(10));
        assert_eq!(recorder.events().len(), 4);
    }

    /// An unregistered name fails before anything reaches the backend.
    #[test]
    fn test_unknown_key_precedes_injection() {
        let recorder = Recorder::default();
        let result = recorder.sender().send_key_press("NULL_VALUE", Duration::ZERO);

        assert_eq!(result, Err(Error::UnknownKey("NULL_VALUE".to_owned())));
        assert_eq!(recorder.events(), vec![]);
    }

    /// An unregistered modifier name also fails up front: the primary key
    /// must not be struck and no modifier may be left held.
    #[test]
    fn test_unknown_modifier_precedes_injection() {
        let recorder = Recorder::default();
        let result = recorder
            .sender()
            .send_key_press_with_modifier("A", "BOGUS", Duration::ZERO);

        assert_eq!(result, Err(Error::UnknownKey("BOGUS".to_owned())));
        assert_eq!(recorder.events(), vec![]);
    }

    /// A rejected down phase surfaces the injection error and aborts the
    /// press before any up event is attempted.
    #[test]
    fn test_failed_down_aborts_press() {
        let recorder = Recorder::failing_on(KeyTransition::Down);
        let result = recorder.sender().send_key_press("A", Duration::ZERO);

        assert_eq!(
            result,
            Err(Error::Injection {
                transition: KeyTransition::Down,
                code: 5,
            })
        );
        assert_eq!(recorder.events(), vec![]);
    }

    /// A rejected up phase surfaces its own error; the down half has
    /// already been injected and is not compensated for here. Recovery is
    /// the caller's call.
    #[test]
    fn test_failed_up_reports_after_down() {
        let recorder = Recorder::failing_on(KeyTransition::Up);
        let result = recorder.sender().send_key_press("A", Duration::ZERO);

        assert_eq!(
            result,
            Err(Error::Injection {
                transition: KeyTransition::Up,
                code: 5,
            })
        );
        assert_eq!(recorder.events(), vec![scan(0x1E, KeyTransition::Down)]);
    }
}
