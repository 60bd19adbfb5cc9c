use std::fs;
use std::process::ExitCode;

const DEFAULT_PATH: &str = "raw.bin";

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PATH.to_string());

    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            log::error!("cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("read {} bytes from {}", data.len(), path);

    match tagpack_ascii::roundtrip(&data) {
        Ok(same) => {
            println!("{}", u8::from(same));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}
