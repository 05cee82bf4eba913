#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types for camtrig, a camera/laser trigger sequencer.
//!
//! This crate holds everything shared between the firmware emulator and the links:
//! the tick clock and unit definitions, the trigger parameters and the per-tick signals.
//!
//! # Example
//!
//! ```
//! use camtrig_core::firmware::{TriggerParams, COARSE_TICKS_PER_UNIT, FINE_TICKS_PER_UNIT};
//!
//! let params = TriggerParams::new(1, 10, 2, 1);
//! assert_eq!(COARSE_TICKS_PER_UNIT, params.pulse_ticks());
//! assert_eq!(10 * COARSE_TICKS_PER_UNIT, params.period_ticks());
//! assert_eq!(FINE_TICKS_PER_UNIT, params.delay_ticks());
//! assert!(params.diagnose().is_empty());
//! ```

/// Common constants and types.
pub mod common;
/// Trigger parameters, signals and firmware constants.
pub mod firmware;
