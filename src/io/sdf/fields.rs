use std::str::FromStr;

use crate::io::error::Error;
use crate::io::util::{column, strip_line_breaks};
use crate::model::atom::Atom;
use crate::model::bond::Bond;

/// Decodes one atom-table line.
///
/// Fields are whitespace separated: `x y z element [flags...]`. Every flag
/// after the element symbol must be an integer.
pub fn decode_atom_line(line_no: usize, raw: &str) -> Result<Atom, Error> {
    let text = strip_line_breaks(raw);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    const REQUIRED: [&str; 4] = ["x coordinate", "y coordinate", "z coordinate", "element symbol"];
    if let Some(&field) = REQUIRED.get(tokens.len()) {
        return Err(Error::MissingField {
            line: line_no,
            field,
        });
    }

    let x = parse_token::<f64>(tokens[0], line_no, "x coordinate")?;
    let y = parse_token::<f64>(tokens[1], line_no, "y coordinate")?;
    let z = parse_token::<f64>(tokens[2], line_no, "z coordinate")?;
    let misc = parse_flags(&tokens[4..], line_no, "atom flag")?;

    Ok(Atom {
        x,
        y,
        z,
        element: tokens[3].to_string(),
        misc,
    })
}

/// Decodes one bond-table line.
///
/// Columns 1-3 and 4-6 hold the atom indices, columns 7-9 the bond type,
/// which is kept as raw text. Indices are signed and never range-checked.
/// Everything after column 9 is read as whitespace-separated integer flags.
pub fn decode_bond_line(line_no: usize, raw: &str) -> Result<Bond, Error> {
    let text = strip_line_breaks(raw);

    let index1 = parse_token::<i64>(column(&text, 0, 3).trim(), line_no, "first atom index")?;
    let index2 = parse_token::<i64>(column(&text, 3, 6).trim(), line_no, "second atom index")?;
    let bond_type = column(&text, 6, 9).to_string();
    let tail: Vec<&str> = column(&text, 9, text.len()).split_whitespace().collect();
    let misc = parse_flags(&tail, line_no, "bond flag")?;

    Ok(Bond {
        index1,
        index2,
        bond_type,
        misc,
    })
}

fn parse_token<T: FromStr>(token: &str, line_no: usize, field: &'static str) -> Result<T, Error> {
    token
        .parse::<T>()
        .map_err(|_| Error::field(line_no, field, token))
}

fn parse_flags(tokens: &[&str], line_no: usize, field: &'static str) -> Result<Vec<i64>, Error> {
    tokens
        .iter()
        .map(|t| parse_token::<i64>(t, line_no, field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_line_with_flags() {
        let atom = decode_atom_line(
            5,
            "   -0.6622    0.5342    0.0000 C   0  0  2  0  0  0  0  0  0  0  0  0",
        )
        .unwrap();
        assert_eq!(atom.position(), [-0.6622, 0.5342, 0.0]);
        assert_eq!(atom.element, "C");
        assert_eq!(atom.misc, vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn atom_line_without_flags() {
        let atom = decode_atom_line(5, "1.0 2.0 3.0 Xx\r\n").unwrap();
        assert_eq!(atom.element, "Xx");
        assert!(atom.misc.is_empty());
    }

    #[test]
    fn atom_line_with_bad_coordinate() {
        let err = decode_atom_line(6, "    1.0000    abc     0.0000 O   0  0").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldDecode { line: 6, field: "y coordinate", ref value } if value == "abc"
        ));
    }

    #[test]
    fn atom_line_with_bad_flag() {
        let err = decode_atom_line(4, "0.0 0.0 0.0 N 0 x").unwrap_err();
        assert!(matches!(err, Error::FieldDecode { field: "atom flag", .. }));
    }

    #[test]
    fn atom_line_too_short() {
        let err = decode_atom_line(4, "0.0 0.0 0.0").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField { line: 4, field: "element symbol" }
        ));
        let err = decode_atom_line(4, "").unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "x coordinate", .. }));
    }

    #[test]
    fn bond_line_fixed_columns() {
        let bond = decode_bond_line(10, "  1  2  2  0  0  0  0").unwrap();
        assert_eq!((bond.index1, bond.index2), (1, 2));
        assert_eq!(bond.bond_type, "  2");
        assert_eq!(bond.misc, vec![0, 0, 0, 0]);
    }

    #[test]
    fn bond_line_wide_indices_use_columns_not_whitespace() {
        let bond = decode_bond_line(10, "123456  1").unwrap();
        assert_eq!((bond.index1, bond.index2), (123, 456));
        assert_eq!(bond.bond_type, "  1");
        assert!(bond.misc.is_empty());
    }

    #[test]
    fn bond_line_keeps_out_of_range_indices() {
        let bond = decode_bond_line(10, "  9 99  1").unwrap();
        assert_eq!((bond.index1, bond.index2), (9, 99));
    }

    #[test]
    fn bond_line_keeps_negative_indices() {
        let bond = decode_bond_line(7, " -1  2  1  0").unwrap();
        assert_eq!((bond.index1, bond.index2), (-1, 2));
        assert_eq!(bond.bond_type, "  1");
        assert_eq!(bond.misc, vec![0]);
    }

    #[test]
    fn bond_line_with_bad_index() {
        let err = decode_bond_line(11, "  a  2  1").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldDecode { line: 11, field: "first atom index", .. }
        ));
        let err = decode_bond_line(11, "  1").unwrap_err();
        assert!(matches!(err, Error::FieldDecode { field: "second atom index", .. }));
    }
}
