//! Byte-at-a-time line editing over a terminal in raw mode.

use std::io::{self, Read, Write};

use tracing::warn;

use super::history::{HistoryStore, Navigation};

const ESC: u8 = 0x1B;
const DELETE: u8 = 0x7F;
const BACKSPACE: u8 = 0x08;
const CLEAR_LINE: &[u8] = b"\x1b[2K\r";
const ERASE_CHAR: &[u8] = b"\x08 \x08";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The input stream reached end of file.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Reading,
    EscapeSeq1,
    EscapeSeq2(u8),
    Done,
}

pub struct LineEditor<R, W> {
    input: R,
    output: W,
    line_capacity: usize,
}

impl<R: Read, W: Write> LineEditor<R, W> {
    pub fn new(input: R, output: W, line_capacity: usize) -> Self {
        Self {
            input,
            output,
            line_capacity,
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }

    /// Prints `prompt` and edits one line. Arrow keys walk `history`; the
    /// prompt is reprinted whenever the line is replaced.
    pub fn read_line(
        &mut self,
        history: &mut HistoryStore,
        prompt: &str,
    ) -> io::Result<ReadOutcome> {
        history.reset_browse_cursor();
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut buffer: Vec<u8> = Vec::new();
        let mut state = EditorState::Reading;

        while state != EditorState::Done {
            let Some(byte) = self.read_byte()? else {
                return Ok(ReadOutcome::Closed);
            };

            state = match state {
                EditorState::Reading => self.on_byte(byte, &mut buffer)?,
                EditorState::EscapeSeq1 => EditorState::EscapeSeq2(byte),
                EditorState::EscapeSeq2(first) => {
                    self.on_escape([first, byte], &mut buffer, history, prompt)?;
                    EditorState::Reading
                }
                EditorState::Done => EditorState::Done,
            };
            self.output.flush()?;
        }

        Ok(ReadOutcome::Line(
            String::from_utf8_lossy(&buffer).into_owned(),
        ))
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // A hung-up or unreadable terminal ends the session like EOF.
                    warn!(error = %e, "input unreadable, closing");
                    return Ok(None);
                }
            }
        }
    }

    fn on_byte(&mut self, byte: u8, buffer: &mut Vec<u8>) -> io::Result<EditorState> {
        match byte {
            b'\r' | b'\n' => {
                self.output.write_all(b"\n")?;
                return Ok(EditorState::Done);
            }
            DELETE | BACKSPACE => {
                if pop_char(buffer) {
                    self.output.write_all(ERASE_CHAR)?;
                }
            }
            ESC => return Ok(EditorState::EscapeSeq1),
            _ => {
                if buffer.len() < self.line_capacity {
                    buffer.push(byte);
                    self.output.write_all(&[byte])?;
                }
            }
        }
        Ok(EditorState::Reading)
    }

    fn on_escape(
        &mut self,
        sequence: [u8; 2],
        buffer: &mut Vec<u8>,
        history: &mut HistoryStore,
        prompt: &str,
    ) -> io::Result<()> {
        match &sequence {
            b"[A" => {
                if let Some(entry) = history.navigate_previous() {
                    let entry = entry.as_bytes().to_vec();
                    self.replace_line(buffer, &entry, prompt)?;
                }
            }
            b"[B" => match history.navigate_next() {
                Navigation::Nothing => {}
                Navigation::Cleared => self.replace_line(buffer, &[], prompt)?,
                Navigation::Entry(entry) => {
                    let entry = entry.as_bytes().to_vec();
                    self.replace_line(buffer, &entry, prompt)?;
                }
            },
            _ => {}
        }
        Ok(())
    }

    fn replace_line(&mut self, buffer: &mut Vec<u8>, text: &[u8], prompt: &str) -> io::Result<()> {
        buffer.clear();
        buffer.extend_from_slice(text);
        self.output.write_all(CLEAR_LINE)?;
        self.output.write_all(prompt.as_bytes())?;
        self.output.write_all(text)
    }
}

/// Removes the last UTF-8 character, continuation bytes included.
fn pop_char(buffer: &mut Vec<u8>) -> bool {
    let Some(mut byte) = buffer.pop() else {
        return false;
    };
    while is_continuation(byte) {
        match buffer.pop() {
            Some(previous) => byte = previous,
            None => break,
        }
    }
    true
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}
