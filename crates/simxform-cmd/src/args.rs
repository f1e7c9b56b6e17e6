//! Command-line argument handling

use crate::error::{CmdError, CmdResult};

pub const USAGE: &str = "\
USAGE

    simxform [--json]

Fits the similarity transform between the built-in source and target
point triples and prints scale, rotation, Euler angles (XYZ, degrees),
translation and the 4x4 matrix world.

OPTIONS

    --json      print the report as a single JSON object
    -h, --help  print this help

Set RUST_LOG=debug to trace the solver.";

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Report(OutputFormat),
    Help,
}

/// Parse arguments (program name already stripped)
pub fn parse_args<I, S>(args: I) -> CmdResult<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut format = OutputFormat::Text;
    for arg in args {
        match arg.as_ref() {
            "--json" => format = OutputFormat::Json,
            "-h" | "--help" => return Ok(Invocation::Help),
            other => return Err(CmdError::UnknownArgument(other.to_string())),
        }
    }
    Ok(Invocation::Report(format))
}
