use std::io;
use std::process::ExitCode;

use math_adventures::config::Config;
use math_adventures::logging::init_tracing;
use math_adventures::session::Session;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> math_adventures::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;
    Ok(())
}
