use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use sigsim::control::Pid;
use sigsim::filter::{convolve, fir_coefficients, Biquad, FirFilter, Window};
use sigsim::resample::{reconstruct_into, Reconstruction};
use sigsim::sim::{CartPole, ClosedLoop, DcMotor};
use sigsim::spectrum::dft_magnitude;

// ---------------------------------------------------------------------------
// Helpers: one frame's worth of input
// ---------------------------------------------------------------------------

fn frame(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / 60.0;
            (std::f64::consts::TAU * t).sin() + 0.3 * (std::f64::consts::TAU * 13.0 * t).sin()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

fn fir_frame(c: &mut Criterion) {
    let mut g = c.benchmark_group("fir_800");
    let x = frame(800);

    for taps in [7, 31, 63] {
        let h = fir_coefficients(taps, 0.1, Window::Hamming).unwrap();
        g.bench_function(format!("convolve_{}", taps), |b| {
            let mut y = vec![0.0; x.len()];
            b.iter(|| convolve(black_box(&x), black_box(&h), &mut y))
        });
    }

    g.bench_function("streaming_31", |b| {
        let mut f = FirFilter::<f64, 31>::lowpass(0.1, Window::Hamming).unwrap();
        let mut y = vec![0.0; x.len()];
        b.iter(|| {
            f.reset();
            f.process(black_box(&x), &mut y)
        })
    });

    g.bench_function("biquad", |b| {
        let mut f = Biquad::lowpass(5.0, 60.0, 0.707).unwrap();
        let mut y = vec![0.0; x.len()];
        b.iter(|| {
            f.reset();
            f.process(black_box(&x), &mut y)
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Spectrum and reconstruction
// ---------------------------------------------------------------------------

fn dft(c: &mut Criterion) {
    let mut g = c.benchmark_group("dft");
    for n in [64, 256] {
        let x = frame(n);
        let mut mags = vec![0.0; n / 2];
        g.bench_function(format!("magnitude_{}", n), |b| {
            b.iter(|| dft_magnitude(black_box(&x), &mut mags))
        });
    }
    g.finish();
}

fn reconstruction(c: &mut Criterion) {
    let mut g = c.benchmark_group("reconstruct_400");
    let samples = frame(40);
    let mut out = vec![0.0; 400];
    for (name, method) in [
        ("zoh", Reconstruction::ZeroOrderHold),
        ("linear", Reconstruction::Linear),
        ("sinc", Reconstruction::Sinc),
    ] {
        g.bench_function(name, |b| {
            b.iter(|| reconstruct_into(black_box(&samples), 0.1, 0.0, 0.01, method, &mut out))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Closed-loop simulation, ten seconds at 60 fps
// ---------------------------------------------------------------------------

fn simulate(c: &mut Criterion) {
    let mut g = c.benchmark_group("sim_600_steps");

    g.bench_function("motor_pid", |b| {
        b.iter(|| {
            let mut lp = ClosedLoop::new(
                DcMotor::new(0.01, 0.1, 0.02, 2.0),
                Pid::new(5.0, 1.0, 0.3),
                black_box(1.0),
            );
            for _ in 0..600 {
                lp.step(1.0 / 60.0);
            }
            lp.error()
        })
    });

    g.bench_function("cart_pole_pd", |b| {
        b.iter(|| {
            let mut lp = ClosedLoop::new(
                CartPole::new(1.0, 0.1, 0.5).with_initial_angle(black_box(0.1)),
                Pid::new(40.0, 0.0, 4.0),
                0.0,
            )
            .with_input_gain(-1.0);
            for _ in 0..600 {
                lp.step(1.0 / 60.0);
            }
            lp.error()
        })
    });

    g.finish();
}

criterion_group!(benches, fir_frame, dft, reconstruction, simulate);
criterion_main!(benches);
