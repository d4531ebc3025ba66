use super::*;
use crate::sim::Plant;

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

// ═══════════════════════════════════════════════════════════════════
// ParamRange
// ═══════════════════════════════════════════════════════════════════

#[test]
fn range_clamp() {
    let r = ParamRange::new(-1.0, 2.0, 0.5);
    assert_eq!(r.clamp(-3.0), -1.0);
    assert_eq!(r.clamp(5.0), 2.0);
    assert_eq!(r.clamp(0.3), 0.3);
    assert_eq!(r.clamp(f64::NAN), -1.0);
    assert_eq!(r.clamp(f64::INFINITY), 2.0);
}

#[test]
fn range_snap_to_step_grid() {
    let r = ParamRange::new(-1.0, 2.0, 0.5);
    assert_eq!(r.snap(0.2), 0.0);
    assert_eq!(r.snap(0.3), 0.5);
    assert_eq!(r.snap(1.9), 2.0);
    assert_eq!(r.snap(-7.0), -1.0);
}

#[test]
fn range_snap_never_leaves_bounds() {
    // max is not on the step grid
    let r = ParamRange::new(0.0, 1.0, 0.3);
    assert_near(r.snap(0.99), 0.9, 1e-12, "grid point");
    assert!(r.snap(1.0) <= 1.0);
}

#[test]
fn range_continuous() {
    let r = ParamRange::new(0.0, 1.0, 0.0);
    assert_eq!(r.snap(0.123), 0.123);
}

#[test]
fn range_contains_and_fraction() {
    let r = ParamRange::new(10.0, 20.0, 1.0);
    assert!(r.contains(10.0) && r.contains(20.0));
    assert!(!r.contains(9.9));
    assert_eq!(r.fraction(15.0), 0.5);
    assert_eq!(r.fraction(100.0), 1.0);
    assert_eq!(ParamRange::new(1.0, 1.0, 0.0).fraction(1.0), 0.0);
}

#[test]
#[should_panic]
fn range_inverted_panics() {
    ParamRange::new(2.0, 1.0, 0.1);
}

#[test]
#[should_panic]
fn range_negative_step_panics() {
    ParamRange::new(0.0, 1.0, -0.1);
}

// ═══════════════════════════════════════════════════════════════════
// Defaults sit inside their sliders
// ═══════════════════════════════════════════════════════════════════

#[test]
fn defaults_within_ranges() {
    let fir = FirParams::<f64>::default();
    assert!(FirParams::<f64>::cutoff_range().contains(fir.cutoff));
    assert!(fir.taps % 2 == 1);

    assert!(OnePoleParams::<f64>::alpha_range().contains(OnePoleParams::default().alpha));

    let s = SamplingParams::<f64>::default();
    assert!(SamplingParams::<f64>::signal_freq_range().contains(s.signal_freq));
    assert!(SamplingParams::<f64>::sample_rate_range().contains(s.sample_rate));

    assert!(NoiseParams::<f64>::level_range().contains(NoiseParams::default().level));

    let pid = PidParams::<f64>::default();
    assert!(PidParams::<f64>::kp_range().contains(pid.kp));
    assert!(PidParams::<f64>::ki_range().contains(pid.ki));
    assert!(PidParams::<f64>::kd_range().contains(pid.kd));
    assert!(PidParams::<f64>::max_output_range().contains(pid.max_output));

    let c = ComplementaryParams::<f64>::default();
    assert!(ComplementaryParams::<f64>::alpha_range().contains(c.alpha));
    assert!(ComplementaryParams::<f64>::gyro_bias_range().contains(c.gyro_bias));

    let k = KalmanParams::<f64>::default();
    assert!(KalmanParams::<f64>::q_range().contains(k.q));
    assert!(KalmanParams::<f64>::r_range().contains(k.r));

    let m = MotorParams::<f64>::default();
    assert!(MotorParams::<f64>::inertia_range().contains(m.inertia));
    assert!(MotorParams::<f64>::viscous_range().contains(m.viscous));
    assert!(MotorParams::<f64>::coulomb_range().contains(m.coulomb));
    assert!(MotorParams::<f64>::max_torque_range().contains(m.max_torque));

    let cp = CartPoleParams::<f64>::default();
    assert!(CartPoleParams::<f64>::cart_mass_range().contains(cp.cart_mass));
    assert!(CartPoleParams::<f64>::pole_mass_range().contains(cp.pole_mass));
    assert!(CartPoleParams::<f64>::half_length_range().contains(cp.half_length));
    assert!(CartPoleParams::<f64>::max_force_range().contains(cp.max_force));
    assert!(CartPoleParams::<f64>::track_limit_range().contains(cp.track_limit));
    assert!(CartPoleParams::<f64>::initial_angle_range().contains(cp.initial_angle));
}

#[test]
fn clamped_defaults_barely_move() {
    let pid = PidParams::<f64>::default().clamped();
    assert_near(pid.kp, 5.0, 1e-9, "kp");
    assert_near(pid.kd, 0.3, 1e-9, "kd");
    assert_near(pid.max_output, 2.0, 1e-9, "max_output");
    assert_eq!(pid.integral_limit, None);
    let fir = FirParams::<f64>::default().clamped();
    assert_near(fir.cutoff, 0.1, 1e-9, "cutoff");
    assert_eq!(fir.taps, 21);
    let m = MotorParams::<f64>::default().clamped();
    assert_near(m.inertia, 0.01, 1e-9, "inertia");
    assert_near(m.max_torque, 2.0, 1e-9, "max_torque");
    let cp = CartPoleParams::<f64>::default().clamped();
    assert_near(cp.track_limit, 2.4, 1e-9, "track_limit");
    assert_near(cp.half_length, 0.5, 1e-9, "half_length");
}

// ═══════════════════════════════════════════════════════════════════
// Per-record behavior
// ═══════════════════════════════════════════════════════════════════

#[test]
fn fir_taps_forced_odd_and_bounded() {
    let with_taps = |taps| FirParams::<f64> {
        taps,
        ..FirParams::default()
    };
    assert_eq!(with_taps(10).clamped().taps, 11);
    assert_eq!(with_taps(1).clamped().taps, 3);
    assert_eq!(with_taps(1000).clamped().taps, FirParams::<f64>::MAX_TAPS);
}

#[test]
fn fir_build_and_coefficients_agree() {
    let p = FirParams::<f64> {
        taps: 7,
        cutoff: 0.25,
        window: Window::Hamming,
    };
    let f = p.build::<7>().unwrap();
    let h = p.coefficients().unwrap();
    assert_eq!(&f.coefficients()[..], &h[..]);
}

#[test]
fn fir_build_rejects_bad_cutoff() {
    let p = FirParams::<f64> {
        taps: 5,
        cutoff: 0.7,
        ..Default::default()
    };
    assert_eq!(p.build::<5>().unwrap_err(), FilterError::InvalidCutoff);
}

#[test]
fn fir_build_rejects_tap_mismatch() {
    let p = FirParams::<f64>::default();
    assert_eq!(p.build::<7>().unwrap_err(), FilterError::InvalidTaps);
    assert_eq!(p.build::<21>().unwrap().coefficients().len(), 21);
}

#[test]
fn sampling_default_aliases_to_three_hz() {
    let s = SamplingParams::<f64>::default();
    assert!(s.is_aliased());
    assert_eq!(s.nyquist(), 5.0);
    assert_near(s.perceived_freq(), 3.0, 1e-12, "perceived");
    assert_near(s.period(), 0.1, 1e-15, "period");
}

#[test]
fn noise_source_follows_seed() {
    let p = NoiseParams::<f64>::default();
    let mut a = p.source();
    let mut b = p.source();
    for _ in 0..10 {
        assert_eq!(a.uniform::<f64>(), b.uniform::<f64>());
    }
    assert_eq!(a.seed(), 42);
}

#[test]
fn pid_build_applies_limits() {
    let p = PidParams {
        kp: 100.0,
        ki: 1.0,
        kd: 0.0,
        max_output: 2.0,
        integral_limit: Some(0.5),
    };
    let mut pid = p.build();
    assert_eq!(pid.tick(1.0, 0.0, 1.0), 2.0);
    for _ in 0..10 {
        pid.tick(1.0, 0.0, 1.0);
    }
    assert_eq!(pid.integral(), 0.5);
}

#[test]
fn pid_clamped_out_of_range_limits_still_build() {
    let p = PidParams {
        kp: 1.0,
        ki: 0.0,
        kd: 0.0,
        max_output: 0.0,
        integral_limit: Some(-4.0),
    }
    .clamped();
    assert_near(p.max_output, 0.1, 1e-12, "max_output floor");
    assert_eq!(p.integral_limit, Some(0.0));
    let pid = p.build();
    assert!(pid.output_limit() > 0.0);

    let p = PidParams {
        max_output: f64::NAN,
        integral_limit: Some(1e9),
        ..PidParams::default()
    }
    .clamped();
    assert_near(p.max_output, 0.1, 1e-12, "NaN max_output");
    assert_eq!(p.integral_limit, Some(100.0));
    let mut pid = p.build();
    assert!(pid.tick(1.0, 0.0, 0.1).abs() <= p.max_output);
}

#[test]
fn motor_clamped_keeps_plant_physical() {
    let p = MotorParams {
        inertia: 0.0,
        viscous: -1.0,
        coulomb: 3.0,
        max_torque: 0.0,
    }
    .clamped();
    assert_near(p.inertia, 0.001, 1e-12, "inertia floor");
    assert_eq!(p.viscous, 0.0);
    assert_eq!(p.coulomb, 0.5);
    assert_near(p.max_torque, 0.1, 1e-12, "max_torque floor");

    let mut m = p.build();
    for _ in 0..100 {
        m.step(1.0, 0.01);
    }
    assert!(m.output().is_finite());
    assert!(m.max_torque() > 0.0);
}

#[test]
fn cart_pole_clamped_rejects_massless_parts() {
    let p = CartPoleParams {
        cart_mass: 0.0,
        pole_mass: 0.0,
        half_length: 0.0,
        ..CartPoleParams::<f64>::default()
    }
    .clamped();
    assert!(p.cart_mass > 0.0 && p.pole_mass > 0.0 && p.half_length > 0.0);
    let mut cp = p.build();
    cp.step(0.0, 0.01);
    assert!(cp.output().is_finite());
}

#[test]
fn complementary_and_gyro_share_bias() {
    let p = ComplementaryParams::<f64>::default();
    assert_eq!(p.build().alpha(), 0.98);
    let mut g = p.gyro();
    g.update(0.0, 1.0);
    assert_near(g.angle(), 0.01, 1e-15, "drift");
}

#[test]
fn kalman_build_starts_at_prior() {
    let k = KalmanParams::<f64>::default().build();
    assert_eq!(k.estimate(), 0.0);
    assert_eq!(k.uncertainty(), 1.0);
    assert_eq!(k.noise(), (0.01, 0.5));
}

#[test]
fn plants_build_from_defaults() {
    let m = MotorParams::<f64>::default().build();
    assert_eq!(m.max_torque(), 2.0);
    let cp = CartPoleParams::<f64>::default().build();
    assert_eq!(cp.output(), 0.1);
    assert_eq!(cp.track_limit(), 2.4);
}

// ═══════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_records() {
    let pid = PidParams {
        integral_limit: Some(3.0),
        ..PidParams::<f64>::default()
    };
    let json = serde_json::to_string(&pid).unwrap();
    let back: PidParams<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pid);

    let fir = FirParams::<f64> {
        window: Window::Blackman,
        ..Default::default()
    };
    let json = serde_json::to_string(&fir).unwrap();
    assert!(json.contains("\"blackman\""));
    assert_eq!(serde_json::from_str::<FirParams<f64>>(&json).unwrap(), fir);
}

#[cfg(feature = "serde")]
#[test]
fn serde_reads_host_props() {
    let s: SamplingParams<f64> = serde_json::from_str(
        r#"{ "signal_freq": 12.0, "sample_rate": 20.0, "method": "zero_order_hold" }"#,
    )
    .unwrap();
    assert_eq!(s.method, Reconstruction::ZeroOrderHold);
    assert_near(s.perceived_freq(), 8.0, 1e-12, "perceived");

    let r: ParamRange<f64> = serde_json::from_str(r#"{ "min": 0.0, "max": 1.0, "step": 0.1 }"#).unwrap();
    assert_eq!(r.max, 1.0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_zero_output_limit_clamps_before_build() {
    let p: PidParams<f64> = serde_json::from_str(
        r#"{ "kp": 5.0, "ki": 1.0, "kd": 0.3, "max_output": 0.0, "integral_limit": null }"#,
    )
    .unwrap();
    let pid = p.clamped().build();
    assert!(pid.output_limit() > 0.0);

    let m: MotorParams<f64> = serde_json::from_str(
        r#"{ "inertia": 0.0, "viscous": 0.1, "coulomb": 0.02, "max_torque": -2.0 }"#,
    )
    .unwrap();
    assert!(m.clamped().build().max_torque() > 0.0);
}
