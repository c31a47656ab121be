use std::collections::HashMap;
use std::io::{self, Write};

use sdfile_parser::Molecule;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const TOP_TAGS: usize = 5;

pub fn print_summary(molecules: &[Molecule]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let failed: Vec<usize> = molecules
        .iter()
        .filter(|m| !m.is_ok())
        .map(|m| m.order_of_occurrence)
        .collect();
    let atoms: usize = molecules.iter().map(Molecule::atom_count).sum();
    let bonds: usize = molecules.iter().map(Molecule::bond_count).sum();
    let dangling: usize = molecules
        .iter()
        .map(|m| {
            m.bonds
                .iter()
                .filter(|b| b.is_out_of_range(m.atom_count()))
                .count()
        })
        .sum();

    let mut rows = vec![
        ("Molecules", molecules.len().to_string()),
        ("Decoded", (molecules.len() - failed.len()).to_string()),
        ("Failed", failed.len().to_string()),
        ("Total Atoms", atoms.to_string()),
        ("Total Bonds", bonds.to_string()),
    ];
    if dangling > 0 {
        rows.push(("Dangling Bonds", dangling.to_string()));
    }
    if let (Some(first), Some(last)) = (molecules.first(), molecules.last()) {
        rows.push((
            "Occurrence",
            format!("#{} – #{}", first.order_of_occurrence, last.order_of_occurrence),
        ));
    }
    if !failed.is_empty() {
        let list: Vec<String> = failed.iter().map(|n| format!("#{n}")).collect();
        rows.push(("Failed At", list.join(", ")));
    }

    print_kv_table(&mut out, "Parse Summary", &rows);

    let tags = tag_frequencies(molecules);
    if !tags.is_empty() {
        print_tag_table(&mut out, &tags, molecules.len());
    }
}

fn tag_frequencies(molecules: &[Molecule]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for mol in molecules {
        for prop in &mol.properties {
            *counts.entry(prop.tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(TOP_TAGS);
    sorted
}

fn print_tag_table(out: &mut impl Write, tags: &[(String, usize)], molecules: usize) {
    let count_w = 8usize;
    let sep_overhead = 6;
    let tag_w = SAFE_TABLE_WIDTH.saturating_sub(count_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, "Most Common Tags");
    let _ = writeln!(
        out,
        "{}┌{t_line}┬{c_line}┐",
        INDENT,
        t_line = "─".repeat(tag_w + 2),
        c_line = "─".repeat(count_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<tag_w$} │ {:>count_w$} │",
        INDENT,
        "Tag",
        "Records",
        tag_w = tag_w,
        count_w = count_w
    );
    let _ = writeln!(
        out,
        "{}├{t_line}┼{c_line}┤",
        INDENT,
        t_line = "─".repeat(tag_w + 2),
        c_line = "─".repeat(count_w + 2)
    );

    for (tag, n) in tags {
        let _ = writeln!(
            out,
            "{}│ {:<tag_w$} │ {:>count_w$} │",
            INDENT,
            truncate(tag, tag_w),
            format!("{n}/{molecules}"),
            tag_w = tag_w,
            count_w = count_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{t_line}┴{c_line}┘",
        INDENT,
        t_line = "─".repeat(tag_w + 2),
        c_line = "─".repeat(count_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
