//! Framing schemes for packing several variable-length items into one record.
//!
//! [`sentinel`] is the persisted wire format: items are separated by
//! [`SENTINEL`](crate::SENTINEL). [`length_prefixed`] is an opt-in
//! alternative that writes an item count and per-item lengths instead, which
//! removes the empty-record ambiguity at the cost of compatibility with
//! existing stored data.

pub mod length_prefixed;
pub mod sentinel;
