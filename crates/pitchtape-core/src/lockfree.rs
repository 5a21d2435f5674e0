//! Lock-free parameter cells shared between control and audio threads.
//!
//! The control side publishes with `Release`, the audio side observes with
//! `Acquire`. Each cell owns a full cache line so a host writing one
//! parameter never invalidates the line the audio thread is reading
//! another from.

use atomic_float::AtomicF32;
use std::sync::atomic::{AtomicBool, Ordering};

/// Continuous parameter value (semitones, mix, derived ratio).
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicFloat {
    value: AtomicF32,
}

impl AtomicFloat {
    pub fn new(value: f32) -> Self {
        Self {
            value: AtomicF32::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Acquire)
    }

    /// Read by the thread that owns the writes; no ordering needed.
    #[inline]
    pub fn get_relaxed(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.value.store(value, Ordering::Release);
    }
}

/// On/off parameter value (bypass).
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicFlag {
    value: AtomicBool,
}

impl AtomicFlag {
    pub fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_float_cell_publishes_latest_value() {
        let cell = AtomicFloat::new(1.0);
        assert_eq!(cell.get(), 1.0);

        cell.set(-7.5);
        assert_eq!(cell.get(), -7.5);
        assert_eq!(cell.get_relaxed(), -7.5);
    }

    #[test]
    fn test_flag_toggles() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.get());
        flag.set(true);
        assert!(flag.get());
        flag.set(false);
        assert!(!flag.get());
    }

    #[test]
    fn test_value_visible_after_writer_joins() {
        let semitones = Arc::new(AtomicFloat::new(0.0));
        let bypass = Arc::new(AtomicFlag::new(false));

        let writer = {
            let semitones = Arc::clone(&semitones);
            let bypass = Arc::clone(&bypass);
            std::thread::spawn(move || {
                semitones.set(12.0);
                bypass.set(true);
            })
        };
        writer.join().unwrap();

        assert_eq!(semitones.get(), 12.0);
        assert!(bypass.get());
    }

    #[test]
    fn test_cells_own_a_cache_line() {
        assert_eq!(std::mem::align_of::<AtomicFloat>(), 64);
        assert_eq!(std::mem::align_of::<AtomicFlag>(), 64);
    }
}
