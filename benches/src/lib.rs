use camtrig_core::firmware::TriggerParams;

pub const PARAMS: TriggerParams = TriggerParams::new(1, 10, 2, 1);

pub const TEST_TICKS: &[u64] = &[1_000, 100_000, 1_000_000];
