//! `coinbook` executable: interactive coin list on stdin/stdout.

use coinbook_cli::run_session;
use coinbook_core::{core_version, flush_logging, init_logging, LogConfig};
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // stdout is the UI, so logging problems go to stderr and are not fatal.
    if let Err(err) = init_logging(&LogConfig::default()) {
        eprintln!("coinbook: file logging disabled: {err}");
    }
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let exit_code = match run_session(stdin.lock(), &mut output) {
        Ok(reason) => {
            info!("event=app_exit module=cli status=ok reason={reason:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("coinbook: failed to write output: {err}");
            ExitCode::FAILURE
        }
    };

    flush_logging();
    exit_code
}
