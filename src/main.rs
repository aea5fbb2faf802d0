use std::process::ExitCode;

fn main() -> ExitCode {
    match certora_build::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
