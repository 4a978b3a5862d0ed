//! JSON-lines command sink
//!
//! Each command becomes one JSON object on its own line, ready to be piped
//! into whatever process owns the physical panel.

use std::io::Write;

use tracing::warn;

use super::{DisplaySurface, ElementId, SurfaceCommand};

/// Surface that streams commands to a writer
#[derive(Debug)]
pub struct JsonLinesSurface<W: Write> {
    writer: W,
    next_id: u32,
    failed_writes: u64,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_id: 0,
            failed_writes: 0,
        }
    }

    /// Number of commands that could not be written
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_command(&mut self, command: &SurfaceCommand) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, command)?;
        self.writer.write_all(b"\n")
    }

    fn record_failure(&mut self, e: &std::io::Error) {
        self.failed_writes += 1;
        // Only the first failure and then every thousandth are worth a log line
        if self.failed_writes == 1 || self.failed_writes % 1000 == 0 {
            warn!("Surface write failed ({} so far): {}", self.failed_writes, e);
        }
    }
}

impl<W: Write> DisplaySurface for JsonLinesSurface<W> {
    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    fn submit(&mut self, command: SurfaceCommand) {
        if let Err(e) = self.write_command(&command) {
            self.record_failure(&e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            self.record_failure(&e);
        }
    }
}
