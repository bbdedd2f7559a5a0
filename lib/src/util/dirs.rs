//! Wrapper for getting default storage paths.
//!
//! Follows these rules:
//!
//! - XDG base directory (all platforms if environment variable is set)
//! - Platform-specific well known directory (see [`dirs`])
//! - Home directory
//! - Current directory

use std::env;
use std::io;
use std::path::PathBuf;

const XDG_DATA_HOME: &str = "XDG_DATA_HOME";

/// Gets the data directory for `name`. Creates it if it does not exist.
///
/// # Errors
///
/// - If none of the rules yields a directory
/// - If the directory cannot be created
pub fn data_dir(name: &str) -> io::Result<PathBuf> {
    let dir = if let Some(path) = env::var_os(XDG_DATA_HOME).filter(|p| !p.is_empty()) {
        PathBuf::from(path).join(name)
    } else if let Some(path) = dirs::data_dir() {
        path.join(name)
    } else if let Some(path) = dirs::home_dir() {
        path.join(format!(".{name}"))
    } else {
        env::current_dir()?.join(format!(".{name}"))
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

