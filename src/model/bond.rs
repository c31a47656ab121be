use serde::Serialize;

/// One row of a Molfile bond table.
///
/// `index1` and `index2` are the 1-based atom numbers exactly as written.
/// They are not checked against the atom count of the owning molecule and
/// may be zero or negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bond {
    #[serde(rename = "Index1")]
    pub index1: i64,
    #[serde(rename = "Index2")]
    pub index2: i64,
    /// Raw text of the bond-type columns (7-9), untrimmed.
    #[serde(rename = "BondType")]
    pub bond_type: String,
    #[serde(rename = "MiscNumbers")]
    pub misc: Vec<i64>,
}

impl Bond {
    pub fn new(index1: i64, index2: i64, bond_type: impl Into<String>) -> Self {
        Self {
            index1,
            index2,
            bond_type: bond_type.into(),
            misc: Vec::new(),
        }
    }

    /// Returns `true` if either endpoint lies outside `1..=atom_count`.
    pub fn is_out_of_range(&self, atom_count: usize) -> bool {
        let valid = 1..=i64::try_from(atom_count).unwrap_or(i64::MAX);
        !valid.contains(&self.index1) || !valid.contains(&self.index2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_detects_zero_negative_and_overflow() {
        assert!(!Bond::new(1, 3, "  1").is_out_of_range(3));
        assert!(Bond::new(0, 1, "  1").is_out_of_range(3));
        assert!(Bond::new(2, 4, "  1").is_out_of_range(3));
        assert!(Bond::new(-1, 2, "  1").is_out_of_range(3));
    }
}
