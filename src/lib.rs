//! A streaming reader for MDL SD files (Molfile V2000) that turns each
//! molecule block into a plain, owned [`Molecule`] record.
//!
//! # Features
//!
//! - **Record splitting** — Lazily cuts a line stream into `$$$$`-terminated
//!   blocks, with skip and limit controls that never buffer skipped records
//! - **Fixed-layout decoding** — Header, counts line, atom and bond tables
//!   decoded column-for-column as the V2000 layout prescribes
//! - **Tagged data** — `> <TAG>` items collected in source order, duplicates kept
//! - **Per-molecule isolation** — A malformed block yields a failed record
//!   (exit code 1) and the run continues with the next one
//! - **Transparent gzip** — Paths ending in `.gz` are decompressed on the fly
//!
//! # Quick Start
//!
//! ```
//! use sdfile_parser::io::{ReadOptions, read_sdf};
//!
//! let sdf = "\
//! methanol
//!   example
//!
//!   2  1  0  0  0  0  0  0  0  0999 V2000
//!     0.0000    0.0000    0.0000 C   0  0  0  0  0  0
//!     1.4300    0.0000    0.0000 O   0  0  0  0  0  0
//!   1  2  1  0  0  0  0
//! M  END
//! > <PUBCHEM_COMPOUND_CID>
//! 887
//!
//! $$$$
//! ";
//!
//! let molecules = read_sdf(sdf.as_bytes(), &ReadOptions::default())?;
//! assert_eq!(molecules.len(), 1);
//!
//! let methanol = &molecules[0];
//! assert!(methanol.is_ok());
//! assert_eq!(methanol.order_of_occurrence, 1);
//! assert_eq!(methanol.atoms[1].element, "O");
//! assert_eq!(methanol.bonds[0].bond_type, "  1");
//! assert_eq!(methanol.property("PUBCHEM_COMPOUND_CID").unwrap().values[0], "887");
//! # Ok::<(), sdfile_parser::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Opening files, splitting records, decoding blocks, JSON output
//! - [`io::sdf`] — The V2000 decoders and the streaming [`io::SdfReader`]
//!
//! # Data Types
//!
//! - [`Molecule`] — One decoded block: header, counts, atoms, bonds, properties
//! - [`Atom`] — Coordinates, element symbol, trailing integer flags
//! - [`Bond`] — 1-based atom indices, raw bond-type text, trailing integer flags
//! - [`Property`] — A data tag and its value lines
//! - [`ExitCode`] — Success or failure of a block's decoding

mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::bond::Bond;
pub use model::molecule::{ExitCode, Molecule};
pub use model::property::Property;

pub use io::Error as SdfError;
pub use io::{ReadOptions, read_sdf, read_sdf_file};
