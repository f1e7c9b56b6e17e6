//! simxform entry point
//!
//! Run with:
//! ```bash
//! cargo run -p simxform-cmd
//! cargo run -p simxform-cmd -- --json
//! ```

use std::process::ExitCode;

use simxform_cmd::{parse_args, run, CmdError, USAGE};

fn main() -> ExitCode {
    // Quiet by default so the report is the only output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = parse_args(std::env::args().skip(1))
        .and_then(|invocation| run(invocation, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CmdError::UnknownArgument(_)) => {
            eprintln!("{e}\n\n{USAGE}");
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
