//! Loading CIDR entries from a plain-text config file.
//!
//! The file holds one CIDR per line; blank lines and `#` comments are
//! skipped and surrounding whitespace is trimmed. Default location is
//! `~/.cidr`.

use std::error::Error;
use std::path::PathBuf;

/// File name looked up in the home directory when no path is given.
const DEFAULT_FILE_NAME: &str = ".cidr";

/// Read CIDR entries from `path`, or from `~/.cidr` when `path` is
/// `None`. Returns the entries together with the path actually read.
pub fn load_cidr_file(path: Option<&str>) -> Result<(Vec<String>, PathBuf), Box<dyn Error>> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => dirs::home_dir()
            .ok_or("could not locate home directory")?
            .join(DEFAULT_FILE_NAME),
    };

    let data = std::fs::read_to_string(&path)
        .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
    log::info!("loaded config file {}", path.display());

    Ok((parse_cidr_lines(&data), path))
}

/// Split file contents into CIDR entries, dropping blanks and comments.
pub fn parse_cidr_lines(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_lines() {
        let data = "\
# home ranges
192.168.1.0/24

  10.0.0.0/8  \t
# trailing comment
2001:db8::/32";
        assert_eq!(
            parse_cidr_lines(data),
            vec!["192.168.1.0/24", "10.0.0.0/8", "2001:db8::/32"]
        );
    }

    #[test]
    fn test_parse_cidr_lines_empty_input() {
        assert!(parse_cidr_lines("").is_empty());
        assert!(parse_cidr_lines("# only comments\n\n").is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_cidr_file(Some("/nonexistent/.cidr")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/.cidr"));
    }
}
