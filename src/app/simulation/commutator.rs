//! Finite-difference emf estimate and the ideal commutator

/// Backward-difference Faraday emf from the two most recent flux samples:
/// ε = -(Φₖ - Φₖ₋₁) / Δt. Returns zero until a second sample exists.
pub fn induced_emf(previous_flux: Option<f32>, flux: f32, dt: f32) -> f32 {
    match previous_flux {
        Some(previous) => -(flux - previous) / dt,
        None => 0.0,
    }
}

/// Ideal commutator: polarity flips every half turn, so the external load
/// always sees a non-negative potential.
pub fn rectify(emf: f32) -> f32 {
    emf.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_emf_is_zero() {
        assert_eq!(induced_emf(None, 0.8, 0.05), 0.0);
    }

    #[test]
    fn test_sign_convention() {
        // falling flux induces a positive emf
        assert!(induced_emf(Some(0.8), 0.796, 0.05) > 0.0);
        // rising flux induces a negative emf
        assert!(induced_emf(Some(0.796), 0.8, 0.05) < 0.0);
    }

    #[test]
    fn test_backward_difference_magnitude() {
        let emf = induced_emf(Some(0.8), 0.8 * 0.1f32.cos(), 0.05);
        let expected = -(0.8 * 0.1f32.cos() - 0.8) / 0.05;
        assert!((emf - expected).abs() < 1e-6);
    }

    #[test]
    fn test_rectified_is_non_negative() {
        for i in 0..200 {
            let angle = i as f32 * 0.1;
            let previous = 0.8 * angle.cos();
            let flux = 0.8 * (angle + 0.1).cos();
            assert!(rectify(induced_emf(Some(previous), flux, 0.05)) >= 0.0);
        }
    }

    #[test]
    fn test_converges_to_analytic_at_fine_steps() {
        // with Δt = 1e-4 the estimate should sit close to B ω sin(θ)
        let omega = 2.0_f32;
        let dt = 1e-4_f32;
        let angle = 0.7_f32;
        let previous = 0.8 * (angle - omega * dt).cos();
        let flux = 0.8 * angle.cos();
        let estimate = induced_emf(Some(previous), flux, dt);
        let analytic = 0.8 * omega * angle.sin();
        assert!(
            (estimate - analytic).abs() < 1e-2,
            "estimate {} vs analytic {}",
            estimate,
            analytic
        );
    }
}
