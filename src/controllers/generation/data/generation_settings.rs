use std::num::{NonZeroU32, NonZeroUsize};

/// Engine configuration consumed from the external settings collaborator.
///
/// Read-only to the engine; a snapshot is taken when the controller is
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Iteration cap for the escape kernel.
    pub max_iterations: u32,
    /// Escape threshold magnitude.
    pub escape_radius: f64,
    /// Side of the `S × S` tile grid one request is partitioned into.
    pub grid_scale: NonZeroU32,
    /// Worker pool capacity; `None` means one worker per available core.
    pub workers: Option<NonZeroUsize>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            escape_radius: 2.0,
            // 32 × 32 tiles, matching the historical split capacity of 1024.
            grid_scale: NonZeroU32::new(32).expect("32 is non-zero"),
            workers: None,
        }
    }
}
