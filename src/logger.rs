use crate::chronometer::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    /// Goes to stderr so stdout carries only the result.
    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}
