//! UUIDv7 generator and related types.

use crate::Uuid;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`V7Generator`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// Interface representing timestamp sources that return the current Unix timestamp in
/// milliseconds.
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// Default [`TimeSource`] that reads [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// Represents a UUIDv7 generator that encapsulates a sequence counter and guarantees the
/// monotonic order of UUIDs generated by one instance.
///
/// Each generated value embeds the greater of the current `unix_ts_ms` and the one recorded by
/// the previous call. While the recorded timestamp does not advance, an 18-bit counter occupying
/// the leading bits of the `rand_a || rand_b` region is incremented; when the counter would
/// overflow, the recorded timestamp itself is incremented and may run ahead of the real-time
/// clock. A clock rewind of any magnitude therefore never breaks the increasing order of
/// generated values; the embedded timestamp simply stops tracking the wall clock until the clock
/// catches up.
///
/// An instance must not be shared between concurrent callers; the intended deployment is one
/// generator per thread, as provided by [`uuid7()`](crate::uuid7). Alternatively, any
/// partitioning that admits at most one caller at a time works, as does Rust's standard
/// synchronization:
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid7_mono::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R, C> {
    prev_timestamp: u64,
    counter: u32,

    /// The random number generator used by the generator.
    rng: R,

    /// The timestamp source used by the generator.
    clock: C,
}

/// The counter is 18 bits wide: the 12 bits of `rand_a` plus the leading 6 bits of `rand_b`.
const COUNTER_MAX: u32 = 0x3_ffff;

impl<R: RandSource, C: TimeSource> V7Generator<R, C> {
    /// Creates a generator instance with specified random number and timestamp sources.
    pub const fn with_rand_and_time_sources(rng: R, clock: C) -> Self {
        Self {
            prev_timestamp: 0,
            counter: 0,
            rng,
            clock,
        }
    }

    /// Generates a new UUIDv7 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        let mut timestamp = self.clock.unix_ts_ms();

        if timestamp > self.prev_timestamp {
            // fill ver, rand_a, var, and rand_b with random data
            self.fill_random_block(&mut bytes[6..]);

            // seed the counter from the same bits, with its most significant bit cleared
            // (Fixed-Length Dedicated Counter Seeding, RFC 9562 Section 6.2)
            bytes[6] &= 0xf7;
            self.counter = (u32::from(bytes[6] & 0x0f) << 14)
                | (u32::from(bytes[7]) << 6)
                | u32::from(bytes[8] & 0x3f);
            self.prev_timestamp = timestamp;
        } else {
            self.counter += 1;
            if self.counter > COUNTER_MAX {
                // advance the timestamp ahead of the actual time instead of letting the
                // counter wrap (Counter Rollover Handling, RFC 9562 Section 6.2)
                self.counter = 0;
                self.prev_timestamp += 1;
            }
            timestamp = self.prev_timestamp;

            // fill var and rand_b with random data
            self.fill_random_block(&mut bytes[8..]);

            // 4 most significant bits of the 18-bit counter
            bytes[6] = (self.counter >> 14) as u8;
            // next 8 bits
            bytes[7] = (self.counter >> 6) as u8;
            // 6 least significant bits; the top two bits are overwritten by var below
            bytes[8] = self.counter as u8;
        }

        // fill unix_ts_ms, most significant byte first
        bytes[0] = (timestamp >> 40) as u8;
        bytes[1] = (timestamp >> 32) as u8;
        bytes[2] = (timestamp >> 24) as u8;
        bytes[3] = (timestamp >> 16) as u8;
        bytes[4] = (timestamp >> 8) as u8;
        bytes[5] = timestamp as u8;

        // fill ver (top four bits are 0, 1, 1, 1)
        bytes[6] = (bytes[6] & 0x0f) | 0x70;

        // fill var (top two bits are 1, 0)
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Uuid::from(bytes)
    }

    /// Generates a new UUIDv7 object and returns its plain 32-digit lower-case hexadecimal
    /// representation, without separators.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_string(&mut self) -> String {
        self.generate().encode_hex().to_string()
    }

    /// Fills `block` with random bytes, drawing one `u64` per eight bytes and consuming each
    /// least significant byte first.
    fn fill_random_block(&mut self, block: &mut [u8]) {
        let mut word = self.rng.next_u64();
        for (i, e) in block.iter_mut().enumerate() {
            let k = i % 8;
            if i > 0 && k == 0 {
                word = self.rng.next_u64();
            }
            *e = (word >> (k * 8)) as u8;
        }
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid7_mono::V7Generator;
///
/// V7Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, C: TimeSource> Iterator for V7Generator<R, C> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, C: TimeSource> core::iter::FusedIterator for V7Generator<R, C> {}
