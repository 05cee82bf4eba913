use anyhow::Result;

use camtrig_core::firmware::{GatePolicy, SequencerInput, TriggerParams};
use camtrig_link_calc::{stimulus, Calc, Record, Signal};

fn print(title: &str, record: &Record) {
    println!("{title}");
    record.iter().enumerate().for_each(|(ch, r)| {
        [Signal::Camera, Signal::Laser].into_iter().for_each(|s| {
            println!("  ch{ch} {s}:");
            r.pulses(s).iter().for_each(|p| {
                println!(
                    "    [{:>7}, {:>7}) {:?}",
                    p.start,
                    p.end(),
                    p.duration()
                );
            });
        });
    });
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let params = TriggerParams::new(1, 10, 2, 1);

    // free running
    {
        let mut calc = Calc::new(1);
        calc.start_recording()?;
        calc.tick_n(300_000, &mut SequencerInput::enabled(params));
        print("enabled", &calc.finish_recording()?);
    }

    // enable held low
    for gate_policy in [GatePolicy::Literal, GatePolicy::Gated] {
        let mut calc = Calc::builder().with_gate_policy(gate_policy).build();
        calc.start_recording()?;
        calc.tick_n(300_000, &mut SequencerInput::disabled(params));
        print(&format!("disabled ({gate_policy})"), &calc.finish_recording()?);
    }

    // external reset every 40000 ticks
    {
        let mut calc = Calc::new(1);
        calc.start_recording()?;
        calc.tick_n(
            300_000,
            &mut stimulus::from_fn(|tick, _| SequencerInput {
                reset: tick % 40_000 == 39_999,
                enable: true,
                params,
            }),
        );
        print("periodic reset", &calc.finish_recording()?);
    }

    // misconfigured parameters are reported but still run
    {
        let mut calc = Calc::new(1);
        calc.start_recording()?;
        calc.tick_n(
            300_000,
            &mut SequencerInput::enabled(TriggerParams::new(11, 10, 10, 1)),
        );
        print("misconfigured", &calc.finish_recording()?);
    }

    Ok(())
}
