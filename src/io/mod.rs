//! Reading SD files into [`Molecule`] records.
//!
//! [`read_sdf_file`] is the usual entry point; [`SdfReader`] streams records
//! one at a time for large inputs. Files ending in `.gz` are decompressed
//! on the fly.

use std::io::BufRead;
use std::path::Path;

pub mod compress;
pub mod error;
pub mod json;
pub mod sdf;
pub mod util;

pub use error::Error;
pub use json::write_json;
pub use sdf::{BlockError, SdfReader, decode_block};

use crate::model::molecule::Molecule;

/// Which part of an SD stream to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Stop after this many molecules; `0` reads everything.
    pub max_molecules: usize,
    /// Molecules to skip from the start of the stream.
    pub skip: usize,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_molecules(mut self, max_molecules: usize) -> Self {
        self.max_molecules = max_molecules;
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

/// Reads every selected molecule from `reader`.
pub fn read_sdf<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Vec<Molecule>, Error> {
    SdfReader::new(reader, options).collect()
}

/// Reads every selected molecule from the SD file at `path`.
pub fn read_sdf_file(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Vec<Molecule>, Error> {
    SdfReader::from_path(path, options)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn records(count: usize) -> String {
        (1..=count)
            .map(|i| {
                format!(
                    "CID{i}\n  -OEChem-\n\n  2  1  0     0  0  0  0  0  0999 V2000\n\
                     \x20   0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n\
                     \x20   1.5400    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n\
                     \x20 1  2  1  0  0  0  0\nM  END\n> <PUBCHEM_COMPOUND_CID>\n{i}\n\n$$$$\n"
                )
            })
            .collect()
    }

    #[test]
    fn max_molecules_limits_the_run() {
        let text = records(200);
        let mols = read_sdf(text.as_bytes(), &ReadOptions::new().with_max_molecules(10)).unwrap();
        assert_eq!(mols.len(), 10);
        let order: Vec<usize> = mols.iter().map(|m| m.order_of_occurrence).collect();
        assert_eq!(order, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn zero_limit_reads_everything_after_skip() {
        let text = records(12);
        let mols = read_sdf(text.as_bytes(), &ReadOptions::new().with_skip(5)).unwrap();
        assert_eq!(mols.len(), 7);
        assert_eq!(mols[0].order_of_occurrence, 6);
        assert_eq!(mols[0].property("PUBCHEM_COMPOUND_CID").unwrap().values, vec!["6", ""]);
    }

    #[test]
    fn decoded_counts_match_tables() {
        for mol in read_sdf(records(5).as_bytes(), &ReadOptions::default()).unwrap() {
            assert!(mol.is_ok());
            assert_eq!(mol.atoms.len(), mol.num_atoms);
            assert_eq!(mol.bonds.len(), mol.num_bonds);
        }
    }

    #[test]
    fn reads_plain_and_gzip_files() {
        let text = records(40);

        let mut plain = tempfile::NamedTempFile::with_suffix(".sdf").unwrap();
        plain.write_all(text.as_bytes()).unwrap();

        let gz = tempfile::NamedTempFile::with_suffix(".sdf.gz").unwrap();
        let mut encoder = GzEncoder::new(gz.reopen().unwrap(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let options = ReadOptions::new().with_max_molecules(30).with_skip(5);
        let a = read_sdf_file(plain.path(), &options).unwrap();
        let b = read_sdf_file(gz.path(), &options).unwrap();
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_fails_the_run() {
        let err = read_sdf_file("/nonexistent/records.sdf", &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
