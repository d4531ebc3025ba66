use super::*;

const TOL: f64 = 1e-12;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn sampled_sine(freq: f64, fs: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| (core::f64::consts::TAU * freq * k as f64 / fs).sin())
        .collect()
}

const METHODS: [Reconstruction; 3] = [
    Reconstruction::ZeroOrderHold,
    Reconstruction::Linear,
    Reconstruction::Sinc,
];

// ═══════════════════════════════════════════════════════════════════
// Reconstruction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn exact_at_sample_instants() {
    let fs = 10.0;
    let period = 1.0 / fs;
    let xs = sampled_sine(1.3, fs, 60);
    for method in METHODS {
        for (k, &x) in xs.iter().enumerate() {
            let y = reconstruct(&xs, period, k as f64 * period, method).unwrap();
            assert_near(y, x, 1e-12, "sample instant");
        }
    }
}

#[test]
fn sinc_tracks_sinusoid_between_samples() {
    let fs = 10.0;
    let f = 1.3;
    let xs = sampled_sine(f, fs, 60);
    // stay at least one window away from either end
    for i in 0..150 {
        let t = 2.0 + 0.0137 * i as f64;
        let y = reconstruct(&xs, 1.0 / fs, t, Reconstruction::Sinc).unwrap();
        let truth = (core::f64::consts::TAU * f * t).sin();
        assert_near(y, truth, 0.05, "between samples");
    }
}

#[test]
fn zoh_holds_previous_sample() {
    let xs = [1.0, 2.0, 3.0];
    let y = reconstruct(&xs, 1.0, 1.7, Reconstruction::ZeroOrderHold).unwrap();
    assert_eq!(y, 2.0);
    let y = reconstruct(&xs, 1.0, 9.0, Reconstruction::ZeroOrderHold).unwrap();
    assert_eq!(y, 3.0);
    let y = reconstruct(&xs, 1.0, -0.5, Reconstruction::ZeroOrderHold).unwrap();
    assert_eq!(y, 1.0);
    let y = reconstruct(&xs, 1.0, f64::NAN, Reconstruction::ZeroOrderHold).unwrap();
    assert_eq!(y, 1.0);
}

#[test]
fn linear_interpolates_and_clamps() {
    let xs = [0.0, 4.0, 2.0];
    assert_near(
        reconstruct(&xs, 0.5, 0.25, Reconstruction::Linear).unwrap(),
        2.0,
        TOL,
        "midpoint",
    );
    assert_near(
        reconstruct(&xs, 0.5, 0.875, Reconstruction::Linear).unwrap(),
        2.5,
        TOL,
        "three quarters",
    );
    assert_eq!(reconstruct(&xs, 0.5, -1.0, Reconstruction::Linear).unwrap(), 0.0);
    assert_eq!(reconstruct(&xs, 0.5, 5.0, Reconstruction::Linear).unwrap(), 2.0);
}

#[test]
fn single_sample() {
    let xs = [7.0];
    for method in METHODS {
        assert_near(reconstruct(&xs, 1.0, 0.0, method).unwrap(), 7.0, TOL, "single");
    }
    assert_eq!(reconstruct(&xs, 1.0, 3.0, Reconstruction::Linear).unwrap(), 7.0);
}

#[test]
fn sinc_far_outside_is_zero() {
    let xs = [1.0, 1.0, 1.0];
    let y = reconstruct(&xs, 1.0, 100.0, Reconstruction::Sinc).unwrap();
    assert_eq!(y, 0.0);
}

#[test]
fn reconstruct_errors() {
    let empty: [f64; 0] = [];
    assert_eq!(
        reconstruct(&empty, 1.0, 0.0, Reconstruction::Linear).unwrap_err(),
        ResampleError::NoSamples
    );
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            reconstruct(&[1.0], bad, 0.0, Reconstruction::Sinc).unwrap_err(),
            ResampleError::InvalidPeriod
        );
    }
}

#[test]
fn reconstruct_into_fills_curve() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let mut out = [0.0; 7];
    reconstruct_into(&xs, 1.0, 0.0, 0.5, Reconstruction::Linear, &mut out).unwrap();
    for (i, &y) in out.iter().enumerate() {
        assert_near(y, i as f64 * 0.5, TOL, "ramp");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Aliasing
// ═══════════════════════════════════════════════════════════════════

#[test]
fn seven_hz_at_ten_hz_is_three() {
    assert_near(aliased_frequency(7.0, 10.0), 3.0, TOL, "fold");
    assert!(is_aliased(7.0, 10.0));
}

#[test]
fn below_nyquist_unchanged() {
    assert_eq!(aliased_frequency(4.0, 10.0), 4.0);
    assert_eq!(aliased_frequency(5.0, 10.0), 5.0);
    assert!(!is_aliased(5.0, 10.0));
}

#[test]
fn multiples_of_fs_alias_to_dc() {
    assert_near(aliased_frequency(10.0, 10.0), 0.0, TOL, "fs");
    assert_near(aliased_frequency(20.0, 10.0), 0.0, TOL, "2 fs");
    assert_near(aliased_frequency(18.0, 10.0), 2.0, TOL, "2 fs - 2");
}

#[test]
fn aliased_samples_are_indistinguishable() {
    // 7 Hz and 3 Hz (phase inverted) give identical samples at 10 Hz
    let fs = 10.0;
    let hi = sampled_sine(7.0, fs, 20);
    let lo = sampled_sine(3.0, fs, 20);
    for k in 0..20 {
        assert_near(hi[k], -lo[k], 1e-9, "alias");
    }
}

#[test]
fn nyquist_is_half() {
    assert_eq!(nyquist(44_100.0_f64), 22_050.0);
}
