//! Ctrl+C handling.
//!
//! SIGINT is routed into a flag instead of terminating the process. Child
//! processes share our process group and still receive the signal, so a
//! running command dies on its own; the flag is then picked up at the next
//! prompt or command boundary and surfaces as an [`Interrupted`] error that
//! unwinds to the menu loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Result;

/// The user pressed Ctrl+C, or standard input was closed.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("interrupted by user")]
pub struct Interrupted;

static FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Register the SIGINT handler. Without it Ctrl+C terminates the process.
pub fn install() -> Result<()> {
    #[cfg(unix)]
    {
        use anyhow::Context;

        let flag = FLAG.get_or_init(|| Arc::new(AtomicBool::new(false)));
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(flag))
            .context("Failed to register SIGINT handler")?;
    }
    Ok(())
}

/// Consume a pending interrupt, if any.
pub fn check() -> std::result::Result<(), Interrupted> {
    let pending = FLAG
        .get()
        .is_some_and(|flag| flag.swap(false, Ordering::SeqCst));
    if pending { Err(Interrupted) } else { Ok(()) }
}

/// Whether an error chain was caused by an interrupt
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Interrupted>().is_some()
}
