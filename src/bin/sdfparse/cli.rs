use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sdfparse",
    about = "Parse MDL SD files (Molfile V2000) into structured records",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the contents of an SD file as JSON
    #[command(name = "tojson", visible_alias = "j")]
    ToJson(ToJsonArgs),
}

#[derive(Args)]
pub struct ToJsonArgs {
    /// Input file (.sdf, or .sdf.gz for gzip-compressed input)
    #[arg(value_name = "SDFILE")]
    pub sdfile: PathBuf,

    /// Maximum number of molecules to output (0 = all)
    #[arg(
        short = 'n',
        long = "max-molecules",
        visible_alias = "maxNumOfMol",
        value_name = "N",
        default_value_t = 0
    )]
    pub max_molecules: usize,

    /// Number of molecules to skip from the head of the file
    #[arg(
        short,
        long,
        visible_alias = "numOfSkippedMol",
        value_name = "N",
        default_value_t = 0
    )]
    pub skip: usize,

    /// Output file (stdout if omitted)
    #[arg(
        short = 'o',
        long = "dest-file",
        visible_alias = "destFile",
        value_name = "FILE"
    )]
    pub dest_file: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(argv: &[&str]) -> ToJsonArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::ToJson(args) => args,
        }
    }

    #[test]
    fn defaults() {
        let args = to_json(&["sdfparse", "tojson", "records.sdf"]);
        assert_eq!(args.sdfile, PathBuf::from("records.sdf"));
        assert_eq!(args.max_molecules, 0);
        assert_eq!(args.skip, 0);
        assert!(args.dest_file.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn short_and_long_flags() {
        let args = to_json(&["sdfparse", "j", "in.sdf.gz", "-n", "10", "--skip", "5", "-o", "out.json", "-q"]);
        assert_eq!(args.max_molecules, 10);
        assert_eq!(args.skip, 5);
        assert_eq!(args.dest_file, Some(PathBuf::from("out.json")));
        assert!(args.quiet);
    }

    #[test]
    fn legacy_flag_names() {
        let args = to_json(&[
            "sdfparse",
            "tojson",
            "in.sdf",
            "--maxNumOfMol",
            "3",
            "--numOfSkippedMol",
            "2",
            "--destFile",
            "x.json",
        ]);
        assert_eq!((args.max_molecules, args.skip), (3, 2));
        assert_eq!(args.dest_file, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["sdfparse"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
