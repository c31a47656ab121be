//! MDL SD file (Molfile V2000) decoding.
//!
//! The pipeline is [`RecordSplitter`] (line stream to `$$$$`-delimited
//! chunks) feeding [`decode_block`] (chunk to [`Molecule`](crate::Molecule)),
//! which in turn uses the atom, bond and property decoders. [`SdfReader`]
//! wires the two together over any [`BufRead`](std::io::BufRead).

mod fields;
mod properties;
mod reader;
mod splitter;

pub use fields::{decode_atom_line, decode_bond_line};
pub use properties::decode_properties;
pub use reader::{BlockError, SdfReader, decode_block};
pub use splitter::{Chunk, RecordSplitter, is_terminator};
