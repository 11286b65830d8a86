use bmpinfo::bmp::BmpHeaderDecoder;

use std::{path::Path, process::ExitCode};

/// Used when no path is given on the command line.
const DEFAULT_BMP_PATH: &str = "assets/sample.bmp";

fn main() -> ExitCode {
  env_logger::init();

  let args: Vec<String> = std::env::args().collect();
  log::trace!("ARGS: {args:?}");
  let path = Path::new(args.get(1).map(String::as_str).unwrap_or(DEFAULT_BMP_PATH));

  let headers = match BmpHeaderDecoder::open(path) {
    Ok(headers) => headers,
    Err(e) => {
      eprintln!("error: {}: {e}", path.display());
      return ExitCode::FAILURE;
    }
  };

  match std::fs::metadata(path) {
    Ok(metadata) => {
      let consistency = headers.consistency(metadata.len());
      if !consistency.file_size_matches {
        log::warn!(
          "{}: header says {} bytes but the file has {}",
          path.display(),
          headers.file_header().file_size(),
          metadata.len()
        );
      }
      if !consistency.data_address_in_bounds {
        log::warn!(
          "{}: pixel data offset {:#x} is outside the file",
          path.display(),
          headers.file_header().data_address()
        );
      }
    }
    Err(e) => log::warn!("{}: can't stat file: {e}", path.display()),
  }

  print!("{}", headers.report());
  ExitCode::SUCCESS
}
