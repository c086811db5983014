use std::{
    process::{ExitCode, Termination},
    time::{Duration, Instant},
};

use log::debug;

use uri_template_cli::{args, entry, errors::CliError, logging::logging};

fn main() -> MainExit {
    let args = args::parse();

    if let Err(err) = logging(args.log_level, args.json_output) {
        return MainExit::Error(err);
    }

    let start = Instant::now();

    entry::run(args).map_or_else(MainExit::Error, |()| MainExit::Success(start.elapsed()))
}

enum MainExit {
    Success(Duration),
    Error(CliError),
}

impl Termination for MainExit {
    fn report(self) -> ExitCode {
        match self {
            Self::Success(spent) => {
                debug!(target: "uri_template_cli", "Done in {spent:?}");
                ExitCode::SUCCESS
            }
            Self::Error(err) => err.report(),
        }
    }
}
