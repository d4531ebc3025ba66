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

// ═══════════════════════════════════════════════════════════════════
// Construction and configuration
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pid_new() {
    let pid = Pid::new(1.0, 2.0, 3.0);
    assert_eq!(pid.gains(), (1.0, 2.0, 3.0));
    assert_eq!(pid.integral(), 0.0);
    assert_eq!(pid.output_limit(), f64::INFINITY);
}

#[test]
#[should_panic]
fn pid_zero_output_limit_panics() {
    Pid::new(1.0, 0.0, 0.0).with_output_limit(0.0);
}

#[test]
#[should_panic]
fn pid_negative_integral_limit_panics() {
    Pid::new(1.0, 0.0, 0.0).with_integral_limit(-1.0);
}

#[test]
#[should_panic]
fn pid_nan_integral_limit_panics() {
    Pid::new(1.0, 0.0, 0.0).with_integral_limit(f64::NAN);
}

// ═══════════════════════════════════════════════════════════════════
// Individual terms
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pid_zero_at_equilibrium() {
    let mut pid = Pid::new(3.0, 2.0, 1.0);
    let u = pid.update(0.0, 0.01);
    assert_eq!(u, 0.0);
    assert_eq!(pid.terms(), PidTerms { p: 0.0, i: 0.0, d: 0.0 });
}

#[test]
fn pid_p_only() {
    let mut pid = Pid::new(2.5, 0.0, 0.0);
    assert_near(pid.tick(10.0, 3.0, 0.01), 17.5, TOL, "P-only");
    assert_near(pid.tick(1.0, 5.0, 0.01), -10.0, TOL, "negative error");
}

#[test]
fn pid_i_rectangle_rule() {
    let dt = 0.1;
    let mut pid = Pid::new(0.0, 2.0, 0.0);
    // integral = 10·0.1 = 1, i term = 2
    assert_near(pid.update(10.0, dt), 2.0, TOL, "first step integrates");
    // integral = 1 + 5·0.1 = 1.5
    assert_near(pid.update(5.0, dt), 3.0, TOL, "second step");
    assert_near(pid.integral(), 1.5, TOL, "integral");
}

#[test]
fn pid_d_on_error() {
    let dt = 0.01;
    let mut pid = Pid::new(0.0, 0.0, 0.5);
    // prev_error starts at 0, so the first step sees the full jump
    assert_near(pid.update(1.0, dt), 50.0, TOL, "initial kick");
    assert_near(pid.update(1.0, dt), 0.0, TOL, "constant error");
    assert_near(pid.update(0.5, dt), -25.0, TOL, "falling error");
}

#[test]
fn pid_terms_breakdown() {
    let mut pid = Pid::new(1.0, 10.0, 0.1);
    pid.update(2.0, 0.5);
    let t = pid.terms();
    assert_near(t.p, 2.0, TOL, "p");
    assert_near(t.i, 10.0, TOL, "i = 10 · (2 · 0.5)");
    assert_near(t.d, 0.4, TOL, "d = 0.1 · 2 / 0.5");
    assert_near(t.total(), 12.4, TOL, "total");
}

// ═══════════════════════════════════════════════════════════════════
// Clamping
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pid_output_clamped_symmetric() {
    let mut pid = Pid::new(100.0, 0.0, 0.0).with_output_limit(2.0);
    assert_eq!(pid.update(1.0, 0.01), 2.0);
    assert_eq!(pid.update(-1.0, 0.01), -2.0);
    assert_near(pid.update(0.01, 0.01), 1.0, TOL, "inside limits");
}

#[test]
fn pid_terms_are_unclamped() {
    let mut pid = Pid::new(100.0, 0.0, 0.0).with_output_limit(2.0);
    pid.update(1.0, 0.01);
    assert_near(pid.terms().p, 100.0, TOL, "raw P");
}

#[test]
fn pid_integral_limit_prevents_windup() {
    let mut pid = Pid::new(0.0, 1.0, 0.0).with_integral_limit(0.5);
    for _ in 0..1000 {
        pid.update(10.0, 0.1);
    }
    assert_near(pid.integral(), 0.5, TOL, "clamped high");
    // one step of opposite error immediately pulls it down
    pid.update(-1.0, 0.1);
    assert_near(pid.integral(), 0.4, TOL, "recovers");
    for _ in 0..1000 {
        pid.update(-10.0, 0.1);
    }
    assert_near(pid.integral(), -0.5, TOL, "clamped low");
}

#[test]
fn pid_unlimited_integral_winds_up() {
    let mut pid = Pid::new(0.0, 1.0, 0.0).with_output_limit(1.0);
    for _ in 0..100 {
        pid.update(1.0, 0.1);
    }
    assert_near(pid.integral(), 10.0, 1e-9, "wound up");
}

// ═══════════════════════════════════════════════════════════════════
// State management
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pid_reset_matches_fresh() {
    let mut pid = Pid::new(1.0, 0.5, 0.2).with_output_limit(5.0);
    for i in 0..20 {
        pid.update(i as f64 * 0.1, 0.05);
    }
    pid.reset();
    let mut fresh = Pid::new(1.0, 0.5, 0.2).with_output_limit(5.0);
    for e in [0.3, -0.2, 1.5] {
        assert_eq!(pid.update(e, 0.05), fresh.update(e, 0.05));
    }
}

#[test]
fn pid_set_gains_keeps_state() {
    let mut pid = Pid::new(1.0, 1.0, 0.0);
    pid.update(1.0, 0.1);
    pid.set_gains(2.0, 3.0, 0.0);
    assert_eq!(pid.gains(), (2.0, 3.0, 0.0));
    assert_near(pid.integral(), 0.1, TOL, "integral kept");
    assert_near(pid.prev_error(), 1.0, TOL, "prev error kept");
}

#[test]
fn pid_variable_dt() {
    let mut pid = Pid::new(0.0, 1.0, 0.0);
    pid.update(1.0, 0.01);
    pid.update(1.0, 0.05);
    assert_near(pid.integral(), 0.06, TOL, "sum of e·dt");
}

#[test]
fn pid_f32() {
    let mut pid = Pid::new(2.0_f32, 0.0, 0.0).with_output_limit(1.0);
    assert_eq!(pid.update(0.25, 0.01), 0.5);
}

// ═══════════════════════════════════════════════════════════════════
// Closed loop on a first-order plant
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pi_removes_steady_state_error() {
    // plant: x' = -x + u
    let dt = 0.01;
    let mut pid = Pid::new(2.0, 1.5, 0.0);
    let mut x = 0.0;
    for _ in 0..3000 {
        let u = pid.tick(1.0, x, dt);
        x += (-x + u) * dt;
    }
    assert_near(x, 1.0, 1e-3, "PI tracks setpoint");
}

#[test]
fn p_only_leaves_offset() {
    let dt = 0.01;
    let mut pid = Pid::new(2.0, 0.0, 0.0);
    let mut x = 0.0;
    for _ in 0..3000 {
        let u = pid.tick(1.0, x, dt);
        x += (-x + u) * dt;
    }
    // steady state kp/(1+kp)
    assert_near(x, 2.0 / 3.0, 1e-6, "P offset");
}

// ═══════════════════════════════════════════════════════════════════
// Bang-bang and the Controller trait
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bang_bang_sign() {
    let c = BangBang::new(2.0);
    assert_eq!(c.tick(1.0, 0.0), 2.0);
    assert_eq!(c.tick(-1.0, 0.0), -2.0);
    assert_eq!(c.tick(0.0, 0.0), 0.0);
}

#[test]
fn bang_bang_deadband() {
    let c = BangBang::new(1.0).with_deadband(-0.2);
    assert_eq!(c.tick(0.2, 0.0), 0.0);
    assert_eq!(c.tick(0.21, 0.0), 1.0);
}

fn drive<C: Controller<f64>>(c: &mut C) -> f64 {
    c.control(1.0, 0.0, 0.1)
}

#[test]
fn controller_trait_dispatch() {
    let mut pid = Pid::new(0.5, 0.0, 0.0);
    let mut bb = BangBang::new(4.0);
    assert_near(drive(&mut pid), 0.5, TOL, "pid");
    assert_eq!(drive(&mut bb), 4.0);
    Controller::reset(&mut pid);
    assert_eq!(pid.integral(), 0.0);
}
