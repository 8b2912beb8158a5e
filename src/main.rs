use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match chess_core::console::run_console_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
