pub mod fpga;

pub use fpga::emulator::{SaturatingCounter, TriggerSequencer};
