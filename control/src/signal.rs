//! Beam presence inferred from the age of the last received edge.

/// Maximum age of the last received edge, in ticks, for the beam to count
/// as currently present. The emitter fires tens of pulses per tick when the
/// path is clear, so this window doubles as carrier detect.
pub const PRESENCE_WINDOW: u32 = 1;

/// Whether an IR pulse was seen recently enough.
///
/// Wrapping subtraction keeps this correct across clock wraparound.
#[must_use]
pub fn is_present(now: u32, last_edge: u32) -> bool {
    now.wrapping_sub(last_edge) <= PRESENCE_WINDOW
}
