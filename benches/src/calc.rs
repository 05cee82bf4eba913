use std::hint::black_box;

use benches::{PARAMS, TEST_TICKS};
use camtrig_core::firmware::SequencerInput;
use camtrig_link_calc::Calc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const TEST_CHANNELS: &[usize] = &[1, 4];

fn record(c: &mut Criterion) {
    let mut group = c.benchmark_group("camtrig/link-calc/record");

    TEST_CHANNELS.iter().for_each(|&channels| {
        TEST_TICKS.iter().for_each(|&ticks| {
            group.throughput(Throughput::Elements(ticks * channels as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("Calc::tick_n ({channels}ch)"), ticks),
                &ticks,
                |b, &ticks| {
                    b.iter(|| {
                        let mut calc = Calc::new(channels);
                        let mut input = SequencerInput::enabled(PARAMS);
                        calc.start_recording().unwrap();
                        calc.tick_n(black_box(ticks), &mut input);
                        black_box(calc.finish_recording().unwrap())
                    })
                },
            );
        });
    });
    group.finish();
}

criterion_group!(benches, record);
criterion_main!(benches);
