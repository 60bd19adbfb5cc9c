use std::error::Error;
use std::fs;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let data = match args.get(1).map(|s| s.as_str()) {
        None | Some("-") => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        Some(path) => fs::read(path)?,
    };
    log::debug!("read {} bytes", data.len());

    let ascii = tagpack_ascii::tagpack2ascii(&data)?;
    println!("{}", ascii);
    Ok(())
}
