//! Rendering of the serial telemetry stream.
//!
//! The stream is built from chunks rather than lines: an impact opens a row
//! with the bounce statistics, and the following depart appends the mat
//! time cell to the same row. A blank line separates sessions.

use core::fmt::Write;

use heapless::String;

use crate::flight::{Depart, Impact};

/// Ticks to hold numeric telemetry back after power-up, leaving the
/// transport's one-time naming command undisturbed on the wire.
pub const STARTUP_SETTLE: u32 = 1000;

/// Header and rows fit three 32-bit decimal columns with room to spare.
pub const CHUNK_LENGTH: usize = 40;

pub const HEADER: &str = "\n\rBounce\tAirtime\tTotal\tMatTime";

pub const SEPARATOR: &str = "\n\r";

pub type Chunk = String<CHUNK_LENGTH>;

#[must_use]
pub fn separator() -> Chunk {
    chunk(SEPARATOR)
}

#[must_use]
pub fn header() -> Chunk {
    chunk(HEADER)
}

/// Open a new row with the impact statistics.
#[must_use]
pub fn impact_row(report: &Impact) -> Chunk {
    let mut row = Chunk::new();
    let _ = write!(
        &mut row,
        "\n\r{}\t{}\t{}\t",
        report.bounce_number, report.air_time, report.total_air_time
    );
    row
}

/// Append the mat time cell to the row opened by the last impact.
#[must_use]
pub fn depart_cell(report: &Depart) -> Chunk {
    let mut cell = Chunk::new();
    let _ = write!(&mut cell, "{}\t", report.mat_time);
    cell
}

fn chunk(text: &str) -> Chunk {
    let mut chunk = Chunk::new();
    let _ = chunk.push_str(text);
    chunk
}
