//! Rotor coil geometry and the closed-form flux law

use super::variables::{COIL_HEIGHT, COIL_WIDTH, TURNS_DEFAULT};

/// Rectangular rotor coil. `width * height` is the face area threaded by
/// the gap field when the face normal is aligned with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coil {
    pub width: f32,
    pub height: f32,
    pub turns: u32,
}

impl Coil {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Flux through all turns at rotation angle `angle` (radians, measured
    /// from the position of maximum flux): N B A cos(θ).
    pub fn flux(&self, b_peak: f32, angle: f32) -> f32 {
        self.turns as f32 * b_peak * self.area() * angle.cos()
    }

    /// Closed-form AC emf N B A ω sin(θ). Drawn as a reference curve next
    /// to the finite-difference estimate; the recorded output never uses it.
    pub fn analytic_emf(&self, b_peak: f32, omega: f32, angle: f32) -> f32 {
        self.turns as f32 * b_peak * self.area() * omega * angle.sin()
    }

    /// Amplitude of the analytic emf, N B A |ω|.
    pub fn peak_emf(&self, b_peak: f32, omega: f32) -> f32 {
        self.turns as f32 * b_peak * self.area() * omega.abs()
    }

    /// Amplitude of the flux, N B A.
    pub fn peak_flux(&self, b_peak: f32) -> f32 {
        self.turns as f32 * b_peak * self.area()
    }
}

impl Default for Coil {
    fn default() -> Self {
        Coil {
            width: COIL_WIDTH.default,
            height: COIL_HEIGHT.default,
            turns: TURNS_DEFAULT,
        }
    }
}

/// Field component perpendicular to the coil face: B cos(θ).
pub fn perpendicular_field(b_peak: f32, angle: f32) -> f32 {
    b_peak * angle.cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_COIL: Coil = Coil {
        width: 1.0,
        height: 1.0,
        turns: 1,
    };

    #[test]
    fn test_flux_closed_form() {
        let coil = Coil {
            width: 0.2,
            height: 0.15,
            turns: 50,
        };
        for i in 0..64 {
            let angle = i as f32 * 0.3 - 9.0;
            let expected = 50.0 * 0.8 * 0.2 * 0.15 * angle.cos();
            assert!(
                (coil.flux(0.8, angle) - expected).abs() < 1e-6,
                "flux mismatch at angle {}",
                angle
            );
        }
    }

    #[test]
    fn test_flux_is_pure() {
        let coil = Coil::default();
        let first = coil.flux(1.3, 2.4);
        let second = coil.flux(1.3, 2.4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_perpendicular_field() {
        assert!((perpendicular_field(0.8, 0.0) - 0.8).abs() < 1e-7);
        assert!((perpendicular_field(0.8, 0.1) - 0.796).abs() < 1e-3);
        assert!(perpendicular_field(0.8, std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_analytic_emf_reference_point() {
        // ω = 2.0, B = 0.8, unit area and single turn:
        // N B A ω sin(0.1) = 1.6 sin(0.1) ≈ 0.1597
        let emf = UNIT_COIL.analytic_emf(0.8, 2.0, 0.1);
        assert!((emf - 0.1597).abs() < 1e-4, "got {}", emf);
    }

    #[test]
    fn test_peak_amplitudes() {
        let coil = Coil {
            width: 0.5,
            height: 0.4,
            turns: 10,
        };
        assert!((coil.area() - 0.2).abs() < 1e-7);
        assert!((coil.peak_flux(1.0) - 2.0).abs() < 1e-6);
        assert!((coil.peak_emf(1.0, -3.0) - 6.0).abs() < 1e-5);
        // analytic emf never exceeds its amplitude
        for i in 0..100 {
            let angle = i as f32 * 0.1;
            assert!(coil.analytic_emf(1.0, -3.0, angle).abs() <= coil.peak_emf(1.0, -3.0) + 1e-5);
        }
    }
}
