//! Helper assertions for integration tests

use metnum_rs::ode::OdeTrace;

/// Assert two values are within `tolerance` of each other.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{}: {} differs from {} by more than {}",
        message,
        actual,
        expected,
        tolerance
    );
}

/// Assert two traces are bit-identical record by record.
#[allow(dead_code)]
pub fn assert_traces_identical(first: &OdeTrace, second: &OdeTrace) {
    assert_eq!(first.len(), second.len(), "trace lengths differ");

    for (a, b) in first.records.iter().zip(second.records.iter()) {
        assert_eq!(a.iteration, b.iteration);
        assert_eq!(a.t.to_bits(), b.t.to_bits(), "time differs at iteration {}", a.iteration);
        assert_eq!(a.state.len(), b.state.len());
        for (x, y) in a.state.iter().zip(b.state.iter()) {
            assert_eq!(x.to_bits(), y.to_bits(), "state differs at iteration {}", a.iteration);
        }
        assert_eq!(a.stages, b.stages, "stages differ at iteration {}", a.iteration);
    }
}
