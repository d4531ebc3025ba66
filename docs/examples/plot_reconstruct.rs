// Reconstruction comparison: a 3 Hz tone sampled at 10 Hz.
// Prints JSON with the sample points and 300 evaluation points per method:
//   {"ts":[...], "ys":[...], "t":[...], "y_true":[...],
//    "y_zoh":[...], "y_linear":[...], "y_sinc":[...]}
// Pipe into any plotting tool to compare the three curves.

use serde_json::json;
use sigsim::resample::{reconstruct_into, Reconstruction};
use sigsim::signal::{fill_samples, sample_times, Sample, Signal, Sine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tone = Sine::new(1.0_f64, 3.0);
    let fs = 10.0;
    let period = 1.0 / fs;

    let mut frame = [Sample::default(); 20];
    fill_samples(&tone, 0.0, period, &mut frame);
    let ts: Vec<f64> = frame.iter().map(|s| s.t).collect();
    let ys: Vec<f64> = frame.iter().map(|s| s.value).collect();

    const N: usize = 300;
    let dt = ts[ts.len() - 1] / (N - 1) as f64;
    let t: Vec<f64> = sample_times(0.0, dt, N).collect();
    let y_true: Vec<f64> = t.iter().map(|&t| tone.value(t)).collect();

    let mut y_zoh = vec![0.0; N];
    let mut y_linear = vec![0.0; N];
    let mut y_sinc = vec![0.0; N];
    reconstruct_into(&ys, period, 0.0, dt, Reconstruction::ZeroOrderHold, &mut y_zoh)?;
    reconstruct_into(&ys, period, 0.0, dt, Reconstruction::Linear, &mut y_linear)?;
    reconstruct_into(&ys, period, 0.0, dt, Reconstruction::Sinc, &mut y_sinc)?;

    let out = json!({
        "ts": ts,
        "ys": ys,
        "t": t,
        "y_true": y_true,
        "y_zoh": y_zoh,
        "y_linear": y_linear,
        "y_sinc": y_sinc,
    });
    println!("{}", out);
    Ok(())
}
