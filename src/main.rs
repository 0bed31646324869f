// SPDX-License-Identifier: MPL-2.0
use iced_peek::app;
use iced_peek::cli::{self, USAGE};
use iced_peek::error::Error;
use iced_peek::media::ConsoleReporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let flags = match cli::parse(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let session = match app::prepare_session(&flags, &mut ConsoleReporter::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(session).map_err(Error::from) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
