//! Frames recorded as JSON lines, one frame per line.
//!
//! ```text
//! {"fingertip": {"x": 640, "y": 360}}
//!
//! {"command": "restart"}
//! ```
//!
//! A blank line is a frame where no hand was found.

use std::io::{BufRead, Write};

use color_eyre::{eyre::WrapErr, Result};

use super::{Frame, InputSource};

pub struct TraceInput<R> {
    reader: R,
    line:   String,
    number: usize,
}

impl<R: BufRead> TraceInput<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            number: 0,
        }
    }
}

impl<R: BufRead> InputSource for TraceInput<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .wrap_err("failed to read trace")?;
        if read == 0 {
            return Ok(None);
        }
        self.number += 1;

        let text = self.line.trim();
        if text.is_empty() {
            return Ok(Some(Frame::default()));
        }

        let frame = serde_json::from_str(text).wrap_err_with(|| {
            format!("invalid frame on trace line {}: {text}", self.number)
        })?;
        Ok(Some(frame))
    }
}

/// Writes frames in the format [`TraceInput`] reads.
///
/// # Errors
///
/// Fails if the writer does.
pub fn write_frames<'a, W, I>(writer: &mut W, frames: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Frame>,
{
    for frame in frames {
        if frame.fingertip.is_none() && frame.command.is_none() {
            writeln!(writer)?;
        } else {
            serde_json::to_writer(&mut *writer, frame)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{frontend::Command, geometry::types::Point};

    fn read_all(text: &str) -> Result<Vec<Frame>> {
        let mut input = TraceInput::new(Cursor::new(text.to_owned()));
        let mut frames = vec![];
        while let Some(frame) = input.next_frame()? {
            frames.push(frame);
        }
        Ok(frames)
    }

    #[test]
    fn reads_points_blanks_and_commands() {
        let frames = read_all(
            "{\"fingertip\": {\"x\": 1, \"y\": 2}}\n\n  \n{\"command\": \
             \"restart\"}\n{\"fingertip\": {\"x\": 3, \"y\": 4}, \"command\": \
             \"quit\"}",
        )
        .unwrap();

        assert_eq!(
            frames,
            vec![
                Frame {
                    fingertip: Some(Point::new(1, 2)),
                    command:   None,
                },
                Frame::default(),
                Frame::default(),
                Frame {
                    fingertip: None,
                    command:   Some(Command::Restart),
                },
                Frame {
                    fingertip: Some(Point::new(3, 4)),
                    command:   Some(Command::Quit),
                },
            ]
        );
    }

    #[test]
    fn malformed_lines_name_their_line_number() {
        let err = read_all("{}\n{\"fingertip\": 12}\n").unwrap_err();
        assert!(format!("{err:?}").contains("line 2"), "{err:?}");
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(read_all("{\"command\": \"jump\"}").is_err());
    }

    #[test]
    fn written_frames_read_back() {
        let frames = vec![
            Frame {
                fingertip: Some(Point::new(640, 360)),
                command:   None,
            },
            Frame::default(),
            Frame {
                fingertip: None,
                command:   Some(Command::Quit),
            },
        ];

        let mut out = vec![];
        write_frames(&mut out, &frames).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\"fingertip\":{\"x\":640,\"y\":360}}\n\n{\"command\":\"quit\"}\n"
        );
        assert_eq!(read_all(&text).unwrap(), frames);
    }
}
