//! Plain data records produced by the SD file reader.
//!
//! - [`atom`] – One atom-table row: coordinates, element symbol, flag columns.
//! - [`bond`] – One bond-table row: 1-based atom indices, raw bond type, flag columns.
//! - [`property`] – A `> <TAG>` data item and its value lines.
//! - [`molecule`] – The per-molecule record tying the above together.
//!
//! Records are built once by the decoder and handed to the caller; nothing
//! in the crate holds on to them afterwards.

pub mod atom;
pub mod bond;
pub mod molecule;
pub mod property;
