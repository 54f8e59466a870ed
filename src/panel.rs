//! Panels
//!
//! Every response is framed in a fixed-width box:
//!
//! ```text
//! +-----------------------------------------------+
//! | File List                                     |
//! +-----------------------------------------------+
//! | Cargo.toml                                    |
//! +-----------------------------------------------+
//! ```
//!
//! Text longer than [`PANEL_WIDTH`] is not cut, the row simply grows.

use crate::constants::PANEL_WIDTH;
use std::io::{self, Read, Write};

const RESET: &str = "\x1B[0m";

/// Colour of a panel line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Borders, titles and regular output
    Accent,
    /// Status notes and errors
    Notice,
    /// The help listing
    Listing,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Accent => "\x1B[92m",
            Tone::Notice => "\x1B[38;5;64m",
            Tone::Listing => "\x1B[32m",
        }
    }
}

/// Returns the horizontal border line.
pub fn border() -> String {
    format!("+{}+", "-".repeat(PANEL_WIDTH + 2))
}

/// Returns `text` as a framed row.
pub fn row(text: &str) -> String {
    format!("| {text:<PANEL_WIDTH$} |")
}

/// Returns the lines of a panel header: border, title row, border.
pub fn render_panel(title: &str) -> Vec<String> {
    vec![border(), row(title), border()]
}

/// Writes panel lines to the terminal, with or without colour
///
/// Regular output goes to `out`, errors go to `err`.
pub struct Terminal<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    color: bool,
}

impl<'a> Terminal<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, color: bool) -> Self {
        Self { out, err, color }
    }

    fn paint(&self, tone: Tone, line: &str) -> String {
        match self.color {
            true => format!("{}{line}{RESET}", tone.code()),
            false => line.to_string(),
        }
    }

    /// Writes a single line to stdout.
    pub fn line(&mut self, tone: Tone, line: &str) -> io::Result<()> {
        let line = self.paint(tone, line);
        writeln!(self.out, "{line}")
    }

    pub fn border(&mut self) -> io::Result<()> {
        self.line(Tone::Accent, &border())?;
        self.out.flush()
    }

    pub fn header(&mut self, title: &str) -> io::Result<()> {
        for line in render_panel(title) {
            self.line(Tone::Accent, &line)?;
        }
        Ok(())
    }

    pub fn row(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.line(tone, &row(text))
    }

    /// Streams raw bytes to stdout, unframed, and returns how many were copied.
    ///
    /// A newline is added if the data does not end in one, so the closing border
    /// starts on its own line. Colour, if enabled, wraps the whole stream.
    pub fn raw(&mut self, reader: &mut dyn Read) -> io::Result<u64> {
        if self.color {
            write!(self.out, "{}", Tone::Accent.code())?;
        }
        let copied = self.copy_from(reader);
        if self.color {
            write!(self.out, "{RESET}")?;
        }
        let (total, last) = copied?;
        if last.is_some_and(|byte| byte != b'\n') {
            writeln!(self.out)?;
        }
        Ok(total)
    }

    fn copy_from(&mut self, reader: &mut dyn Read) -> io::Result<(u64, Option<u8>)> {
        let mut buf = [0u8; 8 * 1024];
        let mut total = 0;
        let mut last = None;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => return Ok((total, last)),
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            self.out.write_all(&buf[..n])?;
            total += n as u64;
            last = Some(buf[n - 1]);
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Writes `message` as an error row to stderr, then closes the panel on stdout.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(Tone::Notice, &row(message));
        writeln!(self.err, "{line}")?;
        self.err.flush()?;
        self.border()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_and_rows_have_equal_width() {
        assert_eq!("+-----------------------------------------------+", border());
        assert_eq!(border().len(), row("File List").len());
        assert_eq!(
            "| File List                                     |",
            row("File List")
        );
    }

    #[test]
    fn empty_row_is_blank_body() {
        assert_eq!(format!("| {} |", " ".repeat(PANEL_WIDTH)), row(""));
    }

    #[test]
    fn long_row_is_not_truncated() {
        let text = "x".repeat(PANEL_WIDTH + 10);
        assert_eq!(format!("| {text} |"), row(&text));
    }

    #[test]
    fn render_panel_frames_title() {
        let lines = render_panel("Help");
        assert_eq!(3, lines.len());
        assert_eq!(border(), lines[0]);
        assert_eq!(row("Help"), lines[1]);
        assert_eq!(border(), lines[2]);
    }

    #[test]
    fn plain_terminal_writes_no_escapes() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut term = Terminal::new(&mut out, &mut err, false);
        term.header("Calculator").unwrap();
        term.error("Error: Invalid input.").unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(!out.contains('\x1B'));
        assert_eq!(format!("{}\n", row("Error: Invalid input.")), err);
        assert_eq!(4, out.lines().count());
    }

    #[test]
    fn coloured_terminal_wraps_lines() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut term = Terminal::new(&mut out, &mut err, true);
        term.row(Tone::Listing, "help").unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\x1B[32m|"));
        assert!(out.ends_with("|\x1B[0m\n"));
    }

    #[test]
    fn raw_copies_bytes_verbatim() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut term = Terminal::new(&mut out, &mut err, false);
        let mut data: &[u8] = b"line one\n\xFFbinary";
        assert_eq!(data.len() as u64, term.raw(&mut data).unwrap());
        assert_eq!(b"line one\n\xFFbinary\n".to_vec(), out);
    }

    #[test]
    fn raw_adds_nothing_after_trailing_newline_or_empty_data() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut term = Terminal::new(&mut out, &mut err, false);
        let mut data: &[u8] = b"done\n";
        term.raw(&mut data).unwrap();
        let mut empty: &[u8] = b"";
        assert_eq!(0, term.raw(&mut empty).unwrap());
        assert_eq!(b"done\n".to_vec(), out);
    }
}
