use anyhow::Result;

use camtrig_core::firmware::{SequencerInput, TriggerParams};
use camtrig_link_calc::{Calc, ChannelRecord, Signal};

use textplots::{Chart, Plot, Shape};

fn plot(title: &str, record: &ChannelRecord, signal: Signal) {
    println!("{title} ({signal})");
    let points = record
        .level(signal)
        .into_iter()
        .enumerate()
        .step_by(100)
        .map(|(i, v)| (i as f32 / 100., if v { 1. } else { 0. }))
        .collect::<Vec<_>>();
    Chart::new(180, 20, 0.0, record.outputs().len() as f32 / 100.)
        .lineplot(&Shape::Steps(&points))
        .display();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut calc = Calc::new(2);

    // 100us camera pulse every 1ms, laser window of 200us after 10us delay
    let mut inputs = [
        SequencerInput::enabled(TriggerParams::new(1, 10, 2, 1)),
        SequencerInput::enabled(TriggerParams::new(3, 5, 1, 10)),
    ];
    calc.start_recording()?;
    calc.tick(std::time::Duration::from_millis(3), &mut inputs)?;
    let record = calc.finish_recording()?;

    plot("channel 0 [us]", &record[0], Signal::Camera);
    plot("channel 0 [us]", &record[0], Signal::Laser);
    plot("channel 1 [us]", &record[1], Signal::Camera);
    plot("channel 1 [us]", &record[1], Signal::Laser);

    Ok(())
}
