//! Counters shared between interrupt contexts and the control loop.

use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

/// Single-writer counters of the timing core.
///
/// Each field is written from exactly one execution context: `duty` is
/// bumped by the carrier timer interrupt and zeroed by the control loop on
/// rollover, `ticks` is advanced by the control loop, and `last_edge` is
/// recorded by the receiver interrupt. All values are single machine words
/// accessed through relaxed atomics, so no reads can tear.
pub struct SharedClock {
    ticks: AtomicU32,
    duty: AtomicU16,
    last_edge: AtomicU32,
}

impl SharedClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            duty: AtomicU16::new(0),
            last_edge: AtomicU32::new(0),
        }
    }

    pub fn bump_duty(&self) {
        self.duty.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn duty(&self) -> u16 {
        self.duty.load(Ordering::Relaxed)
    }

    /// Close one carrier period: zero the duty counter and advance the
    /// system clock. Carrier interrupts firing between the two writes are
    /// lost, as are whole periods missed while the control loop stalls.
    pub fn start_period(&self) {
        self.duty.store(0, Ordering::Relaxed);
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current system clock, in ticks. Wraps at the integer width.
    #[must_use]
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn record_edge(&self) {
        self.last_edge.store(self.now(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn last_edge(&self) -> u32 {
        self.last_edge.load(Ordering::Relaxed)
    }
}
