//! Repilot binary entry point.
//!
//! Editor callback dispatch happens before CLI parsing: when Git invokes
//! this executable through its editor hooks, the fixed flags must never
//! reach the argument parser. Anything the dispatcher does not recognize
//! falls through to normal application startup.

use std::ffi::OsString;
use std::process::ExitCode;

use repilot::editor::{self, EditorRequest};
use repilot::ui::output;

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    if let Some(request) = EditorRequest::from_args(&args) {
        // A recognized callback is terminal: exit 0 whether rewritten or
        // declined, non-zero only on a fatal error so Git halts the rebase
        // step instead of consuming a garbage file.
        return match editor::service(&request) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                output::error(err);
                ExitCode::FAILURE
            }
        };
    }

    match repilot::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
