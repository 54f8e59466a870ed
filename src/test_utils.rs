use crate::platform::{Output, Platform};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A call made on [`FakePlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListDir(PathBuf),
    CreateDir(String),
    RemoveItem(String),
    OpenFile(PathBuf),
    CreateFile(PathBuf),
    RunProgram(String),
}

/// In-memory [`Platform`] that records every call
#[derive(Default)]
pub struct FakePlatform {
    pub calls: Vec<Call>,
    pub entries: Vec<String>,
    pub files: HashMap<PathBuf, Vec<u8>>,
    pub written: HashMap<PathBuf, Rc<RefCell<Vec<u8>>>>,
    pub program_output: Option<Output>,
    /// Makes every call fail with this kind
    pub fail_with: Option<io::ErrorKind>,
}

impl FakePlatform {
    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    pub fn written_to(&self, path: &str) -> Option<Vec<u8>> {
        self.written
            .get(Path::new(path))
            .map(|buffer| buffer.borrow().clone())
    }

    fn record(&mut self, call: Call) -> io::Result<()> {
        self.calls.push(call);
        match self.fail_with {
            Some(kind) => Err(io::Error::from(kind)),
            None => Ok(()),
        }
    }
}

struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Platform for FakePlatform {
    fn list_dir(&mut self, dir: &Path) -> io::Result<Vec<String>> {
        self.record(Call::ListDir(dir.to_path_buf()))?;
        Ok(self.entries.clone())
    }

    fn create_dir(&mut self, name: &str) -> io::Result<()> {
        self.record(Call::CreateDir(name.to_string()))
    }

    fn remove_item(&mut self, name: &str) -> io::Result<()> {
        self.record(Call::RemoveItem(name.to_string()))
    }

    fn open_file(&mut self, path: &Path) -> io::Result<Box<dyn Read>> {
        self.record(Call::OpenFile(path.to_path_buf()))?;
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(io::Cursor::new(contents.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }

    fn create_file(&mut self, path: &Path) -> io::Result<Box<dyn Write>> {
        self.record(Call::CreateFile(path.to_path_buf()))?;
        let buffer = Rc::new(RefCell::new(Vec::new()));
        self.written.insert(path.to_path_buf(), Rc::clone(&buffer));
        Ok(Box::new(SharedBuffer(buffer)))
    }

    fn run_program(&mut self, program: &str) -> io::Result<Output> {
        self.record(Call::RunProgram(program.to_string()))?;
        self.program_output
            .clone()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
