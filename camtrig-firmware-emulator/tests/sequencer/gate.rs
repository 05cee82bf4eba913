use camtrig_core::firmware::{GatePolicy, SequencerInput, TriggerOutput, TriggerParams};
use camtrig_firmware_emulator::TriggerSequencer;

const PARAMS: TriggerParams = TriggerParams::new(1, 10, 2, 1);

fn toggling_input(t: usize) -> SequencerInput {
    SequencerInput {
        reset: false,
        enable: (t / 3_000) % 2 == 0,
        params: PARAMS,
    }
}

#[rstest::rstest]
#[case(GatePolicy::Literal)]
#[case(GatePolicy::Gated)]
#[test]
fn counters_do_not_depend_on_policy(#[case] gate_policy: GatePolicy) {
    let mut reference = TriggerSequencer::new();
    let mut seq = TriggerSequencer::with_gate_policy(gate_policy);
    (0..300_000).for_each(|t| {
        let input = toggling_input(t);
        reference.tick(&input);
        seq.tick(&input);
        assert_eq!(reference.cycle_counter(), seq.cycle_counter());
        assert_eq!(reference.delay_counter(), seq.delay_counter());
    });
}

#[test]
fn gated_outputs_follow_enable() {
    let mut literal = TriggerSequencer::with_gate_policy(GatePolicy::Literal);
    let mut gated = TriggerSequencer::with_gate_policy(GatePolicy::Gated);
    (0..300_000).for_each(|t| {
        let input = toggling_input(t);
        let raw = literal.tick(&input);
        let out = gated.tick(&input);
        if input.enable {
            assert_eq!(raw, out);
        } else {
            assert_eq!(TriggerOutput::empty(), out);
        }
    });
}

#[test]
fn literal_outputs_ignore_enable() {
    let mut seq = TriggerSequencer::with_gate_policy(GatePolicy::Literal);
    let outputs = (0..10_000)
        .map(|_| seq.tick(&SequencerInput::disabled(PARAMS)))
        .collect::<Vec<_>>();
    assert!(outputs.iter().all(TriggerOutput::camera));
    assert!(outputs[1_001..].iter().all(TriggerOutput::laser));
}
