use std::io::Write;

use crate::model::molecule::Molecule;

/// Writes `molecules` as an indented JSON array followed by a newline.
pub fn write_json<W: Write>(mut writer: W, molecules: &[Molecule]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, molecules)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::ExitCode;

    #[test]
    fn renders_indented_array() {
        let mol = Molecule {
            order_of_occurrence: 3,
            exit_code: ExitCode::Success,
            name: "empty".into(),
            ..Molecule::default()
        };
        let mut out = Vec::new();
        write_json(&mut out, &[mol]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[\n  {\n    \"OrderOfOccurrence\": 3,"));
        assert!(text.ends_with("]\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["MolName"], "empty");
    }

    #[test]
    fn empty_input_is_empty_array() {
        let mut out = Vec::new();
        write_json(&mut out, &[]).unwrap();
        assert_eq!(out, b"[]\n");
    }
}
