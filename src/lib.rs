use std::{fs::File, io::BufReader, path::Path};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod printer;

pub const VERSION: &str = "0.1.0";

pub use config::Dialect;
pub use frontend::lexer::{scan, scan_str};
pub use frontend::parser::{parse, parse_str};
pub use printer::{print_token, print_tree, render_ast};

use crate::errors::{FrontError, FrontResult};

// Open a source file for line-buffered scanning
pub fn open(filename: &Path) -> FrontResult<BufReader<File>> {
    let file = File::open(filename).map_err(|err| {
        FrontError::FileReadError(format!("File {} not found ({})", filename.display(), err))
    })?;
    Ok(BufReader::new(file))
}

pub fn has_source_extension(filename: &Path) -> bool {
    filename
        .extension()
        .map_or(false, |ext| ext == config::source::FILE_EXTENSION)
}
