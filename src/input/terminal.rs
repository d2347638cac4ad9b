use std::io::{self, Read};
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

use libc::{tcgetattr, tcsetattr, termios, ECHO, ICANON, STDIN_FILENO, TCSAFLUSH, VMIN, VTIME};
use tracing::{debug, warn};

/// Unbuffered reader over standard input. Each `read` is one `read(2)`, so
/// bytes the editor has not asked for stay in the kernel for child
/// processes that share the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl Read for TerminalInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
        let n = unsafe { libc::read(STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }
}

/// Terminal settings captured before raw mode was entered.
#[derive(Clone, Copy)]
pub struct SavedTermios {
    fd: RawFd,
    settings: termios,
}

impl SavedTermios {
    /// Puts the saved settings back. Safe to call from a signal-handling
    /// thread; it only issues `tcsetattr`.
    pub fn restore(&self) -> io::Result<()> {
        // SAFETY: `settings` came from a successful tcgetattr on `fd`.
        if unsafe { tcsetattr(self.fd, TCSAFLUSH, &self.settings) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Keeps the terminal in non-canonical, no-echo mode for as long as it is
/// alive. Dropping it restores the original settings.
pub struct RawMode {
    saved: SavedTermios,
}

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        Self::enable_on(STDIN_FILENO)
    }

    pub fn enable_on(fd: RawFd) -> io::Result<Self> {
        let mut original = MaybeUninit::<termios>::uninit();
        // SAFETY: tcgetattr fills the struct on success, checked below.
        if unsafe { tcgetattr(fd, original.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: initialised by the successful tcgetattr above.
        let original = unsafe { original.assume_init() };

        let mut raw = original;
        raw.c_lflag &= !(ECHO | ICANON);
        raw.c_cc[VMIN] = 1;
        raw.c_cc[VTIME] = 0;

        // SAFETY: `raw` is a valid termios derived from the current settings.
        if unsafe { tcsetattr(fd, TCSAFLUSH, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        debug!(fd, "terminal switched to raw mode");

        Ok(Self {
            saved: SavedTermios {
                fd,
                settings: original,
            },
        })
    }

    pub fn saved(&self) -> SavedTermios {
        self.saved
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        match self.saved.restore() {
            Ok(()) => debug!("terminal settings restored"),
            Err(e) => warn!(error = %e, "failed to restore terminal settings"),
        }
    }
}
