use crate::errors::{BootstrapError, Result};
use crate::log_debug;
use crate::schemas::plan::RcFile;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Resolves the invoking user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(BootstrapError::HomeDirNotFound)
}

/// Absolute path of `rc_file` under `home`.
pub fn rc_file_path(home: &Path, rc_file: RcFile) -> PathBuf {
    home.join(rc_file.file_name())
}

/// Returns `true` if any line of `content` equals `line` once both are trimmed.
pub fn contains_line(content: &str, line: &str) -> bool {
    let wanted = line.trim();
    content.lines().any(|existing| existing.trim() == wanted)
}

/// Appends `line` to `rc_path` unless a trim-equal line is already there.
///
/// The file is created if missing. The check and the append happen under an
/// exclusive advisory lock on the file. Returns `true` when the line was written.
pub fn append_line_if_missing(rc_path: &Path, line: &str) -> Result<bool> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(rc_path)
        .map_err(|source| BootstrapError::RcFileWrite {
            path: rc_path.to_path_buf(),
            source,
        })?;

    file.lock_exclusive()
        .map_err(|source| BootstrapError::RcFileLock {
            path: rc_path.to_path_buf(),
            source,
        })?;

    let outcome = check_and_append(&mut file, rc_path, line);

    // Closing the handle releases the lock as well.
    if let Err(e) = FileExt::unlock(&file) {
        log_debug!("[Shell Config] Unlocking {} failed: {}", rc_path.display(), e);
    }

    outcome
}

fn check_and_append(file: &mut File, rc_path: &Path, line: &str) -> Result<bool> {
    // Only the init lines have to be UTF-8. Stray bytes elsewhere in the file
    // are matched lossily and never rewritten.
    let mut raw = Vec::new();
    file.read_to_end(&mut raw)
        .map_err(|source| BootstrapError::RcFileRead {
            path: rc_path.to_path_buf(),
            source,
        })?;

    if contains_line(&String::from_utf8_lossy(&raw), line) {
        log_debug!("[Shell Config] '{}' already in {}", line, rc_path.display());
        return Ok(false);
    }

    // Keep the previous last line intact when the file lacks a trailing newline.
    let mut addition = String::new();
    if !raw.is_empty() && !raw.ends_with(b"\n") {
        addition.push('\n');
    }
    addition.push_str(line.trim());
    addition.push('\n');

    file.write_all(addition.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| BootstrapError::RcFileWrite {
            path: rc_path.to_path_buf(),
            source,
        })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Barrier;
    use std::thread;
    use tempfile::TempDir;

    const LINE: &str = r#"eval "$(rbenv init -)""#;

    #[test]
    fn contains_line_matches_after_trimming() {
        let content = "export PATH=/usr/bin\n   eval \"$(rbenv init -)\"  \n";
        assert!(contains_line(content, LINE));
        assert!(!contains_line("# eval \"$(rbenv init -)\"\n", LINE));
        assert!(!contains_line("", LINE));
    }

    #[test]
    fn appends_once_and_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, "export EDITOR=vim\nalias ll='ls -la'\n").unwrap();

        assert!(append_line_if_missing(&rc, LINE).unwrap());

        let content = fs::read_to_string(&rc).unwrap();
        assert_eq!(
            content,
            format!("export EDITOR=vim\nalias ll='ls -la'\n{LINE}\n")
        );
        assert_eq!(content.lines().filter(|l| l.trim() == LINE).count(), 1);
    }

    #[test]
    fn skips_file_that_already_has_the_line() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        let original = format!("export EDITOR=vim\n\t  {LINE}   \nalias g=git\n");
        fs::write(&rc, &original).unwrap();
        let before = fs::metadata(&rc).unwrap().modified().unwrap();

        assert!(!append_line_if_missing(&rc, LINE).unwrap());

        assert_eq!(fs::read_to_string(&rc).unwrap(), original);
        assert_eq!(fs::metadata(&rc).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zprofile");

        assert!(append_line_if_missing(&rc, LINE).unwrap());
        assert_eq!(fs::read_to_string(&rc).unwrap(), format!("{LINE}\n"));
    }

    #[test]
    fn terminates_unfinished_last_line_before_appending() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, "export EDITOR=vim").unwrap();

        append_line_if_missing(&rc, LINE).unwrap();

        assert_eq!(
            fs::read_to_string(&rc).unwrap(),
            format!("export EDITOR=vim\n{LINE}\n")
        );
    }

    #[test]
    fn second_append_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");

        assert!(append_line_if_missing(&rc, LINE).unwrap());
        let after_first = fs::read_to_string(&rc).unwrap();
        assert!(!append_line_if_missing(&rc, LINE).unwrap());
        assert_eq!(fs::read_to_string(&rc).unwrap(), after_first);
    }

    #[test]
    fn non_utf8_bytes_elsewhere_do_not_block_the_append() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, b"# caf\xe9\nexport A=1\n").unwrap();

        assert!(append_line_if_missing(&rc, LINE).unwrap());

        let mut expected = b"# caf\xe9\nexport A=1\n".to_vec();
        expected.extend_from_slice(format!("{LINE}\n").as_bytes());
        assert_eq!(fs::read(&rc).unwrap(), expected);
        assert!(!append_line_if_missing(&rc, LINE).unwrap());
    }

    #[test]
    fn concurrent_appends_write_the_line_once() {
        const WRITERS: usize = 16;
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, "export EDITOR=vim\n").unwrap();
        let barrier = Barrier::new(WRITERS);
        let (start, rc_path) = (&barrier, rc.as_path());

        let added = thread::scope(|scope| {
            let handles: Vec<_> = (0..WRITERS)
                .map(|_| {
                    scope.spawn(move || {
                        start.wait();
                        append_line_if_missing(rc_path, LINE).unwrap()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|added| *added)
                .count()
        });

        assert_eq!(added, 1);
        let content = fs::read_to_string(&rc).unwrap();
        assert_eq!(content, format!("export EDITOR=vim\n{LINE}\n"));
    }

    #[test]
    fn rc_paths_live_in_home() {
        let home = Path::new("/home/dev");
        assert_eq!(
            rc_file_path(home, RcFile::Zprofile),
            PathBuf::from("/home/dev/.zprofile")
        );
    }
}
