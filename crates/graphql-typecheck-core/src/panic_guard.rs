//! Panic boundaries that keep the backtrace of where the panic happened.
//!
//! A process-wide panic hook is installed once. While a thread runs inside
//! [`catch_panic()`] the hook records a backtrace for that thread instead of
//! printing the panic; on every other thread it defers to the hook that was
//! installed before it.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::Cell;
use std::cell::RefCell;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Once;

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static CAPTURED_BACKTRACE: RefCell<Option<Backtrace>> = const { RefCell::new(None) };
}

static INSTALL_HOOK: Once = Once::new();

/// A panic caught by [`catch_panic()`].
#[derive(Debug)]
pub(crate) struct CaughtPanic {
    /// Captured inside the panic hook, so it starts at the panic site.
    pub backtrace: Backtrace,
    pub message: String,
}

/// Run `f`, turning a panic into a [`CaughtPanic`].
pub(crate) fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, CaughtPanic> {
    install_hook();
    CAPTURED_BACKTRACE.with(|slot| slot.replace(None));
    let was_capturing = CAPTURING.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.with(|flag| flag.set(was_capturing));

    result.map_err(|payload| CaughtPanic {
        backtrace: CAPTURED_BACKTRACE
            .with(|slot| slot.take())
            .unwrap_or_else(Backtrace::force_capture),
        message: panic_message(payload.as_ref()),
    })
}

fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(Cell::get) {
                CAPTURED_BACKTRACE.with(|slot| slot.replace(Some(Backtrace::force_capture())));
            } else {
                previous(info);
            }
        }));
    });
}

/// Extract the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.to_owned()
    } else {
        "unknown panic payload".to_string()
    }
}
