//! Exit handling: signal handlers and terminal restore.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set once the menu has taken over the screen.
static TERMINAL_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Record that the terminal needs restoring on exit.
pub fn claim_terminal() {
    TERMINAL_CLAIMED.store(true, Ordering::SeqCst);
}

/// Put stdin back into canonical, echoing mode.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit and after the signal handler.
extern "C" fn cleanup_on_exit() {
    if !TERMINAL_CLAIMED.load(Ordering::SeqCst) {
        return;
    }
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit with 130 and let atexit clean up.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit hook. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep password material out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
