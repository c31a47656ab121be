use anyhow::{Context, Result};

use sdfile_parser::io::{ReadOptions, read_sdf_file, write_json};
use sdfile_parser::Molecule;

use crate::cli::ToJsonArgs;
use crate::display::{Context as DisplayContext, Progress, print_summary};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 2;

pub fn run_tojson(args: ToJsonArgs, ctx: DisplayContext) -> Result<()> {
    let options = ReadOptions::new()
        .with_max_molecules(args.max_molecules)
        .with_skip(args.skip);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading molecules");
    let molecules = read_molecules(&args, &options)?;
    let failed = molecules.iter().filter(|m| !m.is_ok()).count();

    let read_substeps = build_read_substeps(&args, &options, molecules.len(), failed);
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading molecules", &read_substeps_ref);

    progress.step("Writing JSON");
    let output = create_output(args.dest_file.as_deref())?;
    write_json(output, &molecules).context("Failed to write JSON output")?;

    let destination = args
        .dest_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    progress.complete_step("Writing JSON", &[format!("Write JSON → {destination}").as_str()]);

    progress.finish();

    if ctx.interactive {
        print_summary(&molecules);
    }

    Ok(())
}

fn read_molecules(args: &ToJsonArgs, options: &ReadOptions) -> Result<Vec<Molecule>> {
    read_sdf_file(&args.sdfile, options)
        .with_context(|| format!("Failed to read SD file: {}", args.sdfile.display()))
}

fn build_read_substeps(
    args: &ToJsonArgs,
    options: &ReadOptions,
    count: usize,
    failed: usize,
) -> Vec<String> {
    let name = args
        .sdfile
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let mut steps = vec![format!("Parse {name}")];
    if options.skip > 0 {
        steps.push(format!("Skip first {} molecule(s)", options.skip));
    }
    if options.max_molecules > 0 {
        steps.push(format!("Limit to {} molecule(s)", options.max_molecules));
    }
    steps.push(format!("Decoded {} molecule(s), {} failed", count - failed, failed));
    steps
}
