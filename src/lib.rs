//! A monotonic UUID version 7 generator with per-thread state
//!
//! ```rust
//! use uuid7_mono::{uuid7, uuid7_string};
//!
//! let id = uuid7();
//! println!("{}", id); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//!
//! let hex = uuid7_string(); // e.g. "018094243e597c059219566f82fff672"
//! assert_eq!(hex.len(), 32);
//! ```
//!
//! See [RFC 9562 Section 5.7](https://www.rfc-editor.org/rfc/rfc9562#section-5.7).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds, written most significant byte first.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` field and the 62-bit `rand_b` field are filled with
//!   random data, except that the leading 18 bits of `rand_a || rand_b`
//!   accommodate a sequence counter that ensures the monotonic order of IDs
//!   generated within the same millisecond. The counter is seeded from the
//!   random bits whenever `unix_ts_ms` moves forward, with its most
//!   significant bit cleared so that at least 2^17 increments fit before
//!   overflow.
//!
//! When the counter overflows within one millisecond, or when the system
//! clock moves backward, this library keeps incrementing its own copy of
//! `unix_ts_ms` rather than failing; the embedded timestamp may therefore run
//! ahead of the real-time clock under sustained bursts. Generated IDs remain
//! strictly increasing per generator instance in either case.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid};

pub mod generator;
pub use generator::V7Generator;

mod entry;
#[cfg(feature = "std")]
pub use entry::{uuid7, uuid7_string};
