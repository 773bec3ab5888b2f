//! Frequency Response Tests
//!
//! These tests run on the host with std feature enabled.
//! Run with: cargo test --features std

use cheby_dsp_core::{
    design_chebyshev1, design_chebyshev1_prewarped, evaluate_response, FrequencyResponse,
    RESPONSE_POINTS,
};

const SAMPLE_RATE: f64 = 8000.0;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Binomial numerator `k·(1 + z^-1)^n`, scaled so the DC gain equals `dc_gain`.
fn lowpass_numerator(order: usize, a: &[f64], dc_gain: f64) -> Vec<f64> {
    let mut b = vec![1.0];
    for _ in 0..order {
        let mut next = vec![0.0; b.len() + 1];
        for (k, &c) in b.iter().enumerate() {
            next[k] += c;
            next[k + 1] += c;
        }
        b = next;
    }
    let gain = a.iter().sum::<f64>() / b.iter().sum::<f64>() * dc_gain;
    b.iter().map(|c| c * gain).collect()
}

fn design_response(order: usize, ripple_db: f64, cutoff: f64) -> (FrequencyResponse, f64) {
    let design = design_chebyshev1_prewarped(order, ripple_db, cutoff).unwrap();
    let a = design.denominator();
    let dc_gain = if order % 2 == 0 {
        design.passband_floor()
    } else {
        1.0
    };
    let b = lowpass_numerator(order, &a, dc_gain);
    let response = evaluate_response(&b, &a, SAMPLE_RATE).unwrap();
    (response, design.passband_floor())
}

// =============================================================================
// Basic Sweep Properties
// =============================================================================

#[test]
fn test_unity_system() {
    let resp = evaluate_response(&[1.0], &[1.0], SAMPLE_RATE).unwrap();
    assert!(resp.mag().iter().all(|&m| approx_eq(m, 1.0, 1e-12)));
}

#[test]
fn test_output_lengths() {
    let resp = evaluate_response(&[0.5, 0.5], &[1.0, -0.2], SAMPLE_RATE).unwrap();
    assert_eq!(resp.freq_hz().len(), RESPONSE_POINTS);
    assert_eq!(resp.mag().len(), RESPONSE_POINTS);
}

#[test]
fn test_frequency_axis_strictly_ascending() {
    for fs in [8000.0, 44100.0, 1.0] {
        let resp = evaluate_response(&[1.0], &[1.0], fs).unwrap();
        let freq = resp.freq_hz();
        assert_eq!(freq[0], 0.0);
        assert_eq!(freq[RESPONSE_POINTS - 1], fs / 2.0);
        assert!(freq.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn test_frequency_spacing_is_uniform() {
    let resp = evaluate_response(&[1.0], &[1.0], SAMPLE_RATE).unwrap();
    let step = SAMPLE_RATE / 2.0 / (RESPONSE_POINTS - 1) as f64;
    for (i, &f) in resp.freq_hz().iter().enumerate() {
        assert!(approx_eq(f, step * i as f64, 1e-9), "bin {}: {}", i, f);
    }
}

#[test]
fn test_magnitudes_non_negative() {
    let resp = evaluate_response(&[1.0, -2.0, 1.0], &[1.0, 0.3, 0.1], SAMPLE_RATE).unwrap();
    assert!(resp.mag().iter().all(|&m| m >= 0.0));
}

// =============================================================================
// Single Pole Reference
// =============================================================================

#[test]
fn test_single_pole_dc_response() {
    let resp = evaluate_response(&[1.0], &[1.0, -0.5], SAMPLE_RATE).unwrap();
    assert!(approx_eq(resp.mag()[0], 2.0, 1e-12));
}

#[test]
fn test_single_pole_decreases_toward_nyquist() {
    let resp = evaluate_response(&[1.0], &[1.0, -0.5], SAMPLE_RATE).unwrap();
    assert!(resp.mag().windows(2).all(|w| w[1] < w[0]));
    assert!(approx_eq(resp.mag()[RESPONSE_POINTS - 1], 2.0 / 3.0, 1e-12));
}

#[test]
fn test_single_pole_closed_form() {
    // |1/(1 - 0.5e^{-jω})|² = 1/(1.25 - cos ω)
    let resp = evaluate_response(&[1.0], &[1.0, -0.5], SAMPLE_RATE).unwrap();
    for (f, m) in resp.iter() {
        let omega = 2.0 * std::f64::consts::PI * f / SAMPLE_RATE;
        let expected = 1.0 / (1.25 - omega.cos()).sqrt();
        assert!(approx_eq(m, expected, 1e-9), "f={} m={} want={}", f, m, expected);
    }
}

// =============================================================================
// Scale Invariance and Singularities
// =============================================================================

#[test]
fn test_scale_invariance() {
    let b = [0.2, 0.3, -0.1];
    let a = [1.0, -0.4, 0.1];
    let base = evaluate_response(&b, &a, SAMPLE_RATE).unwrap();

    for scale in [3.7, -2.0, 1e-3, 1e6] {
        let bs: Vec<f64> = b.iter().map(|c| c * scale).collect();
        let as_: Vec<f64> = a.iter().map(|c| c * scale).collect();
        let scaled = evaluate_response(&bs, &as_, SAMPLE_RATE).unwrap();
        for (m0, m1) in base.mag().iter().zip(scaled.mag()) {
            assert!(approx_eq(*m0, *m1, 1e-9 * m0.max(1.0)), "{} vs {}", m0, m1);
        }
    }
}

#[test]
fn test_single_singularity_does_not_spoil_sweep() {
    let resp = evaluate_response(&[1.0, 0.5], &[1.0, 1.0], SAMPLE_RATE).unwrap();
    assert_eq!(resp.singularities(), 1);
    assert!(resp.mag()[RESPONSE_POINTS - 1].is_infinite());
    let finite = resp.mag().iter().filter(|m| m.is_finite()).count();
    assert_eq!(finite, RESPONSE_POINTS - 1);
}

#[test]
fn test_near_nyquist_is_large_but_finite() {
    let resp = evaluate_response(&[1.0], &[1.0, 1.0], SAMPLE_RATE).unwrap();
    let near = resp.mag()[RESPONSE_POINTS - 2];
    assert!(near.is_finite());
    assert!(near > 50.0, "near-Nyquist magnitude: {}", near);
}

// =============================================================================
// Designed Filter End to End
// =============================================================================

#[test]
fn test_designed_lowpass_passband_ripple() {
    for (order, ripple, cutoff) in [(4, 1.0, 0.25), (5, 0.5, 0.25), (3, 0.5, 0.5), (2, 3.0, 0.1)] {
        let (resp, floor) = design_response(order, ripple, cutoff);

        for i in 0..resp.len() {
            let m = resp.mag()[i];
            assert!(m <= 1.0 + 1e-9, "order {}: peak {} at bin {}", order, m, i);

            let norm = resp.normalized_frequency(i).unwrap();
            if norm <= cutoff {
                assert!(
                    m >= floor - 1e-9,
                    "order {}: passband dip {} < {} at {}",
                    order,
                    m,
                    floor,
                    norm
                );
            }
        }
    }
}

#[test]
fn test_designed_lowpass_stopband() {
    let (resp, _) = design_response(5, 0.5, 0.25);

    // An octave above the cutoff
    let octave = (0..resp.len())
        .find(|&i| resp.normalized_frequency(i).unwrap() >= 0.5)
        .unwrap();
    assert!(resp.mag()[octave] < 0.01, "stopband: {}", resp.mag()[octave]);
    assert!(resp.mag()[RESPONSE_POINTS - 1] < 1e-9);
}

#[test]
fn test_designed_lowpass_db_view() {
    let (resp, _) = design_response(4, 1.0, 0.25);
    let db: Vec<f64> = resp.magnitudes_db().collect();
    // Even order starts at the bottom of the ripple band
    assert!(approx_eq(db[0], -1.0, 1e-6), "DC: {} dB", db[0]);
    assert!(db.iter().all(|&d| d <= 1e-6));
}

#[test]
fn test_unwarped_design_is_stable_response() {
    let design = design_chebyshev1(6, 1.0, 0.5).unwrap();
    let a = design.denominator();
    let resp = evaluate_response(&[1.0], &a, SAMPLE_RATE).unwrap();
    assert_eq!(resp.singularities(), 0);
    assert!(resp.mag().iter().all(|m| m.is_finite()));
}
