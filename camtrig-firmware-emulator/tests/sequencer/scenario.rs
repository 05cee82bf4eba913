use camtrig_core::firmware::{GatePolicy, SequencerInput, TriggerOutput, TriggerParams};
use camtrig_firmware_emulator::TriggerSequencer;

use crate::{high_ranges, run};

// A period holds the cycle counter values 0..=period_ticks.
const PERIOD_SPAN: usize = 100_001;

#[test]
fn camera_pulse_repeats_every_period() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(1, 10, 2, 0)),
        3 * PERIOD_SPAN,
    );

    assert!(outputs[0].camera());
    assert!(outputs[9_999].camera());
    assert!(!outputs[10_000].camera());
    assert!(!outputs[99_999].camera());
    assert_eq!(
        vec![
            (0, 9_999),
            (PERIOD_SPAN, PERIOD_SPAN + 9_999),
            (2 * PERIOD_SPAN, 2 * PERIOD_SPAN + 9_999)
        ],
        high_ranges(&outputs, TriggerOutput::camera)
    );
}

#[test]
fn laser_pulse_after_delay() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(1, 10, 2, 1)),
        2 * PERIOD_SPAN,
    );

    assert!(!outputs[1_000].laser());
    assert!(outputs[1_001].laser());
    assert!(outputs[20_999].laser());
    assert!(!outputs[21_000].laser());
    assert_eq!(
        vec![
            (1_001, 20_999),
            (PERIOD_SPAN + 1_001, PERIOD_SPAN + 20_999)
        ],
        high_ranges(&outputs, TriggerOutput::laser)
    );
    assert_eq!(
        vec![(0, 9_999), (PERIOD_SPAN, PERIOD_SPAN + 9_999)],
        high_ranges(&outputs, TriggerOutput::camera)
    );
}

#[test]
fn laser_without_delay_starts_one_tick_late() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(1, 10, 2, 0)),
        PERIOD_SPAN,
    );
    assert_eq!(
        vec![(1, 19_999)],
        high_ranges(&outputs, TriggerOutput::laser)
    );
}

#[test]
fn disabled_literal() {
    let mut seq = TriggerSequencer::with_gate_policy(GatePolicy::Literal);
    let outputs = run(
        &mut seq,
        SequencerInput::disabled(TriggerParams::new(1, 10, 2, 0)),
        3 * PERIOD_SPAN,
    );

    // no resynchronization, so each pulse fires once and the counters keep running
    assert_eq!(
        vec![(0, 9_999)],
        high_ranges(&outputs, TriggerOutput::camera)
    );
    assert_eq!(
        vec![(1, 19_999)],
        high_ranges(&outputs, TriggerOutput::laser)
    );
    assert_eq!(3 * PERIOD_SPAN as u32, seq.cycle_counter());
    assert_eq!(3 * PERIOD_SPAN as u32, seq.delay_counter());
}

#[test]
fn disabled_gated() {
    let mut seq = TriggerSequencer::with_gate_policy(GatePolicy::Gated);
    let outputs = run(
        &mut seq,
        SequencerInput::disabled(TriggerParams::new(1, 10, 2, 0)),
        3 * PERIOD_SPAN,
    );

    assert!(outputs.iter().all(|o| o.is_empty()));
    assert_eq!(3 * PERIOD_SPAN as u32, seq.cycle_counter());
}

#[test]
fn pulse_longer_than_period() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(11, 10, 2, 0)),
        3 * PERIOD_SPAN,
    );
    assert!(outputs.iter().all(TriggerOutput::camera));
}

#[test]
fn laser_window_truncated_by_resync() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(1, 10, 10, 1)),
        2 * PERIOD_SPAN,
    );
    assert_eq!(
        vec![
            (1_001, PERIOD_SPAN - 1),
            (PERIOD_SPAN + 1_001, 2 * PERIOD_SPAN - 1)
        ],
        high_ranges(&outputs, TriggerOutput::laser)
    );
}

#[test]
fn zero_period() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(1, 0, 1, 0)),
        1000,
    );
    assert!(outputs.iter().all(|&o| o == TriggerOutput::CAMERA));
    assert_eq!(0, seq.cycle_counter());
}

#[test]
fn zero_widths() {
    let mut seq = TriggerSequencer::new();
    let outputs = run(
        &mut seq,
        SequencerInput::enabled(TriggerParams::new(0, 1, 0, 0)),
        100_000,
    );
    assert!(outputs.iter().all(|o| o.is_empty()));
}
