use std::io::{BufRead, Lines};
use std::path::Path;
use std::sync::LazyLock;

use log::error;
use regex::Regex;

use super::fields::{decode_atom_line, decode_bond_line};
use super::properties::decode_properties;
use super::splitter::{RecordSplitter, is_terminator};
use crate::io::{ReadOptions, compress, error::Error, util};
use crate::model::molecule::{ExitCode, Molecule};

const VERSION_TAG: &str = "V2000";
const HEADER_LINES: usize = 3;

static END_OF_CTAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M\s+END").expect("invalid end marker pattern"));

/// A molecule block that could not be decoded.
///
/// Holds the partially filled record (exit code [`ExitCode::Failure`]) next
/// to the error that stopped decoding.
#[derive(Debug, thiserror::Error)]
#[error("molecule #{} could not be decoded: {source}", .molecule.order_of_occurrence)]
pub struct BlockError {
    pub molecule: Box<Molecule>,
    #[source]
    pub source: Error,
}

impl BlockError {
    pub fn occurrence(&self) -> usize {
        self.molecule.order_of_occurrence
    }

    pub fn into_molecule(self) -> Molecule {
        *self.molecule
    }
}

/// Decodes one terminator-delimited block of lines into a [`Molecule`].
///
/// `occurrence` is the 1-based position of the block in its source. The
/// trailing `$$$$` line, if present, is not part of the molecule.
pub fn decode_block(occurrence: usize, lines: &[String]) -> Result<Molecule, BlockError> {
    let mut molecule = Molecule::failed(occurrence);
    match fill_molecule(&mut molecule, lines) {
        Ok(()) => {
            molecule.exit_code = ExitCode::Success;
            Ok(molecule)
        }
        Err(source) => Err(BlockError {
            molecule: Box::new(molecule),
            source,
        }),
    }
}

fn fill_molecule(mol: &mut Molecule, lines: &[String]) -> Result<(), Error> {
    let body = match lines.split_last() {
        Some((last, rest)) if is_terminator(last) => rest,
        _ => lines,
    };

    if let Some(name) = body.first() {
        mol.name = util::strip_line_breaks(name).into_owned();
    }
    if let Some(software) = body.get(1) {
        mol.software = util::strip_line_breaks(software).into_owned();
    }

    let counts_line = body
        .get(HEADER_LINES)
        .ok_or_else(|| Error::format(body.len().max(1), "block ended before the counts line"))?;
    decode_counts(mol, HEADER_LINES + 1, counts_line)?;

    let atom_start = HEADER_LINES + 1;
    let bond_start = atom_start + mol.num_atoms;
    let data_start = bond_start + mol.num_bonds;

    for (i, raw) in body.iter().enumerate().take(bond_start).skip(atom_start) {
        mol.atoms.push(decode_atom_line(i + 1, raw)?);
    }
    ensure_complete("atom", body.len(), mol.num_atoms, mol.atoms.len())?;

    for (i, raw) in body.iter().enumerate().take(data_start).skip(bond_start) {
        mol.bonds.push(decode_bond_line(i + 1, raw)?);
    }
    ensure_complete("bond", body.len(), mol.num_bonds, mol.bonds.len())?;

    // Property lists (`M  CHG` etc.) up to `M  END` are not kept.
    let trailer = body.get(data_start..).unwrap_or_default();
    let data_offset = trailer
        .iter()
        .position(|l| END_OF_CTAB.is_match(l))
        .map_or(trailer.len(), |p| p + 1);
    mol.properties = decode_properties(data_start + data_offset + 1, &trailer[data_offset..])?;

    Ok(())
}

fn decode_counts(mol: &mut Molecule, line_no: usize, raw: &str) -> Result<(), Error> {
    let text = util::strip_line_breaks(raw);

    if !text.ends_with(VERSION_TAG) {
        let details = if text.contains("V3000") {
            "V3000 is not supported".to_string()
        } else {
            format!("counts line must end with '{VERSION_TAG}'")
        };
        return Err(Error::format(line_no, details));
    }

    let atoms = util::column(&text, 0, 3).trim();
    mol.num_atoms = atoms
        .parse()
        .map_err(|_| Error::field(line_no, "atom count", atoms))?;
    let bonds = util::column(&text, 3, 6).trim();
    mol.num_bonds = bonds
        .parse()
        .map_err(|_| Error::field(line_no, "bond count", bonds))?;
    mol.misc_counts_tail = util::column(&text, 6, text.len() - VERSION_TAG.len()).to_string();

    Ok(())
}

fn ensure_complete(table: &'static str, last_line: usize, expected: usize, found: usize) -> Result<(), Error> {
    if found < expected {
        return Err(Error::Truncated {
            line: last_line,
            table,
            expected,
            found,
        });
    }
    Ok(())
}

/// Lazily reads molecules from an SD stream.
///
/// Blocks that fail to decode are logged and yielded as failed records, so
/// one bad molecule never stops the stream. Only I/O errors are yielded as
/// `Err`, after which the reader is exhausted.
///
/// ```
/// use sdfile_parser::io::{ReadOptions, SdfReader};
///
/// let text = "ethane\n  demo\n\n  2  1  0  0  0  0            999 V2000\n\
///             0.0 0.0 0.0 C 0 0\n1.5 0.0 0.0 C 0 0\n  1  2  1  0\nM  END\n$$$$\n";
/// let mut reader = SdfReader::new(text.as_bytes(), &ReadOptions::default());
/// let mol = reader.next().unwrap()?;
/// assert!(mol.is_ok());
/// assert_eq!(mol.atoms.len(), 2);
/// assert!(reader.next().is_none());
/// # Ok::<(), sdfile_parser::io::Error>(())
/// ```
pub struct SdfReader<R> {
    chunks: RecordSplitter<Lines<R>>,
}

impl<R: BufRead> SdfReader<R> {
    pub fn new(reader: R, options: &ReadOptions) -> Self {
        Self {
            chunks: RecordSplitter::new(reader.lines(), options.skip, options.max_molecules),
        }
    }
}

impl SdfReader<Box<dyn BufRead>> {
    /// Opens `path` (gzip-compressed if it ends in `.gz`) for reading.
    pub fn from_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self, Error> {
        let reader = compress::open_file(path.as_ref())?;
        Ok(Self::new(reader, options))
    }
}

impl<R: BufRead> Iterator for SdfReader<R> {
    type Item = Result<Molecule, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = match self.chunks.next()? {
            Ok(chunk) => chunk,
            Err(e) => return Some(Err(e.into())),
        };

        let molecule = decode_block(chunk.occurrence, &chunk.lines).unwrap_or_else(|e| {
            error!("Failed to decode molecule #{}: {}", e.occurrence(), e.source);
            e.into_molecule()
        });
        Some(Ok(molecule))
    }
}
