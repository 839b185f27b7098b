//! Default generator and entry point functions

#![cfg(feature = "std")]

use crate::generator::{with_rand08::Adapter, StdSystemTime};
use crate::{Uuid, V7Generator};
use rand::rngs::ThreadRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V7Generator<Adapter<ThreadRng>, StdSystemTime>> =
        Default::default();
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator and guarantees the per-thread monotonic order
/// of UUIDs generated within the same millisecond. No ordering is guaranteed across threads;
/// cross-thread uniqueness rests on the random bits. On Unix, this function resets the generator
/// when the process ID changes (i.e. upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid7_mono::uuid7();
/// println!("{uuid}"); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuid7() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }

        g.borrow_mut().generate()
    })
}

/// Generates a UUIDv7 value and returns its plain 32-digit lower-case hexadecimal
/// representation, without separators.
///
/// Use [`uuid7()`] and the [`Display`](std::fmt::Display) impl of [`Uuid`] to obtain the
/// canonical 8-4-4-4-12 form instead.
///
/// # Examples
///
/// ```rust
/// let hex = uuid7_mono::uuid7_string();
/// assert_eq!(hex.len(), 32); // e.g. "018094243e597c059219566f82fff672"
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuid7_string() -> String {
    uuid7().encode_hex().to_string()
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
    /// returning true if ThreadRng is reseeded or false otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand 0.8.5, up to fifteen u32 values need to be consumed before reseeding;
                // see rand::rngs::adapter::ReseedingRng docs for details
                let _: [u32; 15] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}
