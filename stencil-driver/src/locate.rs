//! Locating the generator executable.

use std::path::{Path, PathBuf};

use crate::{DriverError, Result};

/// Resolve `program` to an executable path.
///
/// Anything that looks like a path must name an existing file; a bare name
/// is looked up on `PATH`.
pub fn locate_generator(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);
    if path.is_absolute() || path.components().count() > 1 {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(DriverError::GeneratorNotFound {
                program: program.to_string(),
                reason: "no such file".to_string(),
            })
        };
    }

    which::which(program).map_err(|e| DriverError::GeneratorNotFound {
        program: program.to_string(),
        reason: e.to_string(),
    })
}
