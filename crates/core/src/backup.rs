use crate::error::{ConfError, ConfResult};
use std::fs;
use std::path::Path;

/// Copy `source` to `destination`, replacing any earlier backup.
///
/// A missing source is reported as [`ConfError::NotFound`] and nothing is
/// written. Returns the number of bytes copied.
pub fn backup<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> ConfResult<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.is_file() {
        return Err(ConfError::NotFound(source.to_path_buf()));
    }

    let bytes = fs::copy(source, destination)?;
    tracing::info!("Backed up {:?} to {:?} ({} bytes)", source, destination, bytes);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_missing_source() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("hyprland.conf");
        let dest = temp_dir.path().join("hyprland.conf.backup");

        let result = backup(&source, &dest);
        assert!(matches!(result, Err(ConfError::NotFound(_))));
        assert!(!dest.exists());
    }

    #[test]
    fn test_backup_is_byte_identical() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("hyprland.conf");
        let dest = temp_dir.path().join("hyprland.conf.backup");
        let content = b"monitor = ,preferred,auto,1\n# trailing \xc3\xa9\n";
        fs::write(&source, content).unwrap();

        let copied = backup(&source, &dest).unwrap();
        assert_eq!(copied, content.len() as u64);
        assert_eq!(fs::read(&dest).unwrap(), content);
    }

    #[test]
    fn test_backup_overwrites_previous() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("hyprland.conf");
        let dest = temp_dir.path().join("hyprland.conf.backup");
        fs::write(&dest, "stale backup with more bytes than the source").unwrap();
        fs::write(&source, "fresh").unwrap();

        backup(&source, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh");
    }
}
