//! Injection backend built on the Win32 `SendInput` call.

use ::tracing::trace;
use ::windows::Win32::{
    Foundation::GetLastError,
    UI::Input::KeyboardAndMouse::{
        SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP,
        KEYEVENTF_SCANCODE, VIRTUAL_KEY,
    },
};

use super::{InputBackend, KeyEvent, KeyIdentifier, KeyTransition};
use crate::errors::{Error, Result};

/// The production backend: queues one keyboard event per [`SendInput`] call
/// onto the system input stream.
///
/// Scancode-addressed events are submitted with `KEYEVENTF_SCANCODE` and an
/// empty virtual-key field; virtual-key-addressed events are submitted the
/// other way around. `SendInput` reports how many of the submitted events it
/// queued, and since we submit exactly one, a return of zero is a total
/// failure and surfaces the thread's last-error code.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Backend;

impl InputBackend for Win32Backend {
    fn inject(&self, event: KeyEvent) -> Result<()> {
        trace!(?event, "SendInput");

        let mut virtual_key = VIRTUAL_KEY(0);
        let mut scan = 0;
        let mut flags = KEYBD_EVENT_FLAGS(0);
        match event.identifier {
            KeyIdentifier::ScanCode(code) => {
                scan = code;
                flags |= KEYEVENTF_SCANCODE;
            }
            KeyIdentifier::VirtualKey(code) => virtual_key = VIRTUAL_KEY(code),
        }
        if event.transition == KeyTransition::Up {
            flags |= KEYEVENTF_KEYUP;
        }

        let input = INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: virtual_key,
                    wScan: scan,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };

        let queued = unsafe { SendInput(&[input], ::std::mem::size_of::<INPUT>() as i32) };
        if queued == 0 {
            return Err(Error::Injection {
                transition: event.transition,
                code: unsafe { GetLastError() }.0,
            });
        }
        Ok(())
    }
}
