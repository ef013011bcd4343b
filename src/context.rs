// src/context.rs
// Single source of truth for platform rules in hot paths.
// Tiny, Copy, and contains only 'static data plus the repetition count.

use crate::{
    platform::{DEFAULT_PLATFORM, Platform, PlatformEntry},
    repetition::Repetition,
};

/// Runtime context passed to every slug stage.
///
/// Contains:
/// - `platform`: human identifier (for logging and error messages)
/// - `entry`: the platform's static rules, read by every table-driven stage
/// - `repetition`: duplicate-heading counter for the suffix stage
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub platform: Platform,
    pub entry: &'static PlatformEntry,
    pub repetition: Repetition,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM)
    }
}

impl Context {
    #[inline(always)]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            entry: platform.entry(),
            repetition: Repetition::NONE,
        }
    }

    #[inline(always)]
    pub fn with_repetition(mut self, repetition: impl Into<Repetition>) -> Self {
        self.repetition = repetition.into();
        self
    }
}
