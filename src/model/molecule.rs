use serde::{Serialize, Serializer};

use super::atom::Atom;
use super::bond::Bond;
use super::property::Property;

/// Outcome of decoding one molecule block.
///
/// Serialized as its numeric code: `0` for success, `1` for failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExitCode {
    Success,
    #[default]
    Failure,
}

impl ExitCode {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
        }
    }
}

impl Serialize for ExitCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A single molecule decoded from an SD file.
///
/// A record with [`ExitCode::Failure`] holds whatever fields were assigned
/// before decoding stopped; its atom and bond lists may be shorter than the
/// declared counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Molecule {
    /// 1-based position of the molecule in the source stream, skipped records included.
    #[serde(rename = "OrderOfOccurrence")]
    pub order_of_occurrence: usize,
    #[serde(rename = "ExitCode")]
    pub exit_code: ExitCode,
    #[serde(rename = "MolName")]
    pub name: String,
    #[serde(rename = "Software")]
    pub software: String,
    #[serde(rename = "NumOfAtoms")]
    pub num_atoms: usize,
    #[serde(rename = "NumOfBonds")]
    pub num_bonds: usize,
    /// Counts-line columns after the bond count, up to the version tag.
    #[serde(rename = "MolMiscNumbers")]
    pub misc_counts_tail: String,
    #[serde(rename = "Atoms")]
    pub atoms: Vec<Atom>,
    #[serde(rename = "Bonds")]
    pub bonds: Vec<Bond>,
    #[serde(rename = "Properties")]
    pub properties: Vec<Property>,
}

impl Molecule {
    /// An empty record at `order_of_occurrence`, marked as failed.
    pub fn failed(order_of_occurrence: usize) -> Self {
        Self {
            order_of_occurrence,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.exit_code == ExitCode::Success
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// First property carrying `tag`, if any. Tags may repeat.
    pub fn property(&self, tag: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.tag == tag)
    }
}
