//! Platform collaborators
//!
//! Thin adapters over the filesystem and process APIs.
//! Commands reach the system only through [`Platform`], so they can be driven against a fake.
//!
//! All relative paths resolve against the process's current directory.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// The output of an external program
///
/// Holds what the program wrote to `stdout` and `stderr`, and how it exited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// The data that the program wrote to `stdout`
    stdout: Vec<u8>,
    /// The data that the program wrote to `stderr`
    stderr: Vec<u8>,
    /// Exit code, `None` if the program was killed by a signal
    code: Option<i32>,
}

impl Output {
    /// Constructs a new instance, filling the `stdout`, `stderr` and `code` fields.
    pub fn new(stdout: &[u8], stderr: &[u8], code: Option<i32>) -> Self {
        Self {
            stdout: stdout.to_owned(),
            stderr: stderr.to_owned(),
            code,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Gets the `stdout` and `stderr` data fields for reading.
    pub fn get(self) -> (Vec<u8>, Vec<u8>) {
        (self.stdout, self.stderr)
    }
}

/// Side effects the commands need from the host system
pub trait Platform {
    /// Names of the entries in `dir`.
    fn list_dir(&mut self, dir: &Path) -> io::Result<Vec<String>>;

    /// Creates a directory with permissive mode.
    fn create_dir(&mut self, name: &str) -> io::Result<()>;

    /// Deletes a file, a symlink or an empty directory.
    fn remove_item(&mut self, name: &str) -> io::Result<()>;

    /// Opens a file for reading.
    fn open_file(&mut self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Creates or truncates a file for writing.
    fn create_file(&mut self, path: &Path) -> io::Result<Box<dyn Write>>;

    /// Runs a program without arguments and collects its output.
    fn run_program(&mut self, program: &str) -> io::Result<Output>;
}

/// [`Platform`] backed by the real operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    /// Entries are sorted by name; `.` and `..` are not included.
    fn list_dir(&mut self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(dir)?
            .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn create_dir(&mut self, name: &str) -> io::Result<()> {
        debug!(name, "creating directory");

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            fs::DirBuilder::new().mode(0o777).create(name)
        }
        #[cfg(not(unix))]
        {
            fs::create_dir(name)
        }
    }

    fn remove_item(&mut self, name: &str) -> io::Result<()> {
        debug!(name, "removing item");

        match fs::symlink_metadata(name)?.is_dir() {
            true => fs::remove_dir(name),
            false => fs::remove_file(name),
        }
    }

    fn open_file(&mut self, path: &Path) -> io::Result<Box<dyn Read>> {
        debug!(path = %path.display(), "opening file");
        Ok(Box::new(File::open(path)?))
    }

    fn create_file(&mut self, path: &Path) -> io::Result<Box<dyn Write>> {
        debug!(path = %path.display(), "creating file");
        Ok(Box::new(File::create(path)?))
    }

    fn run_program(&mut self, program: &str) -> io::Result<Output> {
        debug!(program, "running program");
        let output = Command::new(program).output()?;
        Ok(Output::new(
            &output.stdout,
            &output.stderr,
            output.status.code(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_and_remove_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("made");
        let dir = dir.to_str().unwrap();

        let mut platform = SystemPlatform;
        platform.create_dir(dir).unwrap();
        assert!(Path::new(dir).is_dir());

        let err = platform.create_dir(dir).unwrap_err();
        assert_eq!(io::ErrorKind::AlreadyExists, err.kind());

        platform.remove_item(dir).unwrap();
        assert!(!Path::new(dir).exists());
    }

    #[test]
    fn remove_file_and_refuse_non_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("note.txt");
        fs::write(&file, b"hi").unwrap();

        let mut platform = SystemPlatform;
        assert!(platform.remove_item(tmp.path().to_str().unwrap()).is_err());
        platform.remove_item(file.to_str().unwrap()).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn remove_missing_item_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        let err = SystemPlatform.remove_item(missing.to_str().unwrap()).unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn file_round_trip_through_platform() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");

        let mut platform = SystemPlatform;
        let mut writer = platform.create_file(&path).unwrap();
        writer.write_all(b"\x00bytes\n").unwrap();
        drop(writer);

        let mut contents = Vec::new();
        platform
            .open_file(&path)
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();
        assert_eq!(b"\x00bytes\n".to_vec(), contents);
    }

    #[test]
    fn list_dir_is_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), b"").unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();

        let names = SystemPlatform.list_dir(tmp.path()).unwrap();
        assert_eq!(vec!["a".to_string(), "b.txt".to_string()], names);
    }

    #[test]
    fn missing_program_fails_to_launch() {
        let err = SystemPlatform
            .run_program("sayx-no-such-program-here")
            .unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn output_accessors() {
        let output = Output::new(b"out", b"err", Some(0));
        assert!(output.success());
        assert_eq!(Some(0), output.code());
        assert_eq!((b"out".to_vec(), b"err".to_vec()), output.get());
        assert!(!Output::new(b"", b"", None).success());
    }
}
