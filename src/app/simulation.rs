//! Contains all simulation logic: the electromagnetic model and the
//! fixed-step time integration with its recorded sample history.

pub mod coil;
pub mod commutator;
mod direction;
mod field_grid;
mod field_model;
pub mod variables;

pub use coil::Coil;
pub use direction::Direction;
pub use field_grid::{FieldGrid, POLE_X};
pub use field_model::FieldModel;

use variables::{ANGULAR_SPEED, DT, MAX_RUN_TIME, PEAK_FIELD, STEPS_PER_RUN};

use log::info;

pub struct Simulation {
    // parameters, bound directly to the UI controls
    pub omega: f32,
    pub direction: Direction,
    pub b_peak: f32,
    pub coil: Coil,
    pub field_model: FieldModel,
    pub max_run_time: f32,

    grid: FieldGrid,

    // session state
    running: bool,
    angle: f32,
    elapsed: f32,

    // index-aligned, append-only sample history
    times: Vec<f32>,
    flux_samples: Vec<f32>,
    emf_samples: Vec<f32>,
    output_samples: Vec<f32>,
}

impl Simulation {
    pub fn new() -> Self {
        Simulation {
            omega: ANGULAR_SPEED.default,
            direction: Direction::default(),
            b_peak: PEAK_FIELD.default,
            coil: Coil::default(),
            field_model: FieldModel::default(),
            max_run_time: MAX_RUN_TIME.default,
            grid: FieldGrid::new(),
            running: false,
            angle: 0.0,
            elapsed: 0.0,
            times: Vec::new(),
            flux_samples: Vec::new(),
            emf_samples: Vec::new(),
            output_samples: Vec::new(),
        }
    }

    /// Angular velocity with the drive direction applied, rad/s.
    pub fn signed_omega(&self) -> f32 {
        self.direction.sign() * self.omega
    }

    /// Effective gap field strength under the selected field model.
    pub fn field_strength(&self) -> f32 {
        match self.field_model {
            FieldModel::Cosine => self.b_peak,
            FieldModel::DipoleGrid => self.grid.strength_at_centre(self.b_peak),
        }
    }

    pub fn current_flux(&self) -> f32 {
        self.coil.flux(self.field_strength(), self.angle)
    }

    /// Field component through the coil face at the current angle.
    pub fn perpendicular_field(&self) -> f32 {
        coil::perpendicular_field(self.field_strength(), self.angle)
    }

    /// Advance the model by one fixed step and record the new sample.
    pub fn step(&mut self) {
        self.angle += self.signed_omega() * DT;
        self.elapsed += DT;

        let flux = self.current_flux();
        let emf = commutator::induced_emf(self.flux_samples.last().copied(), flux, DT);

        self.times.push(self.elapsed);
        self.flux_samples.push(flux);
        self.emf_samples.push(emf);
        self.output_samples.push(commutator::rectify(emf));
    }

    /// Consume one batch of steps. Returns true once the time cap has been
    /// reached and the run has stopped; callers re-invoke this from their
    /// own refresh loop until then.
    pub fn run(&mut self) -> bool {
        if !self.running {
            return self.finished();
        }
        for _ in 0..STEPS_PER_RUN {
            self.step();
            if self.elapsed >= self.max_run_time {
                self.running = false;
                info!("run complete after {} samples", self.times.len());
                break;
            }
        }
        !self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Discard the session state, keeping the configured parameters.
    pub fn reset(&mut self) {
        self.running = false;
        self.angle = 0.0;
        self.elapsed = 0.0;
        self.times.clear();
        self.flux_samples.clear();
        self.emf_samples.clear();
        self.output_samples.clear();
    }

    /// Manually override the accumulated angle; the history is untouched.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.max_run_time
    }

    /// Accumulated rotation, radians, never wrapped.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    pub fn flux_samples(&self) -> &[f32] {
        &self.flux_samples
    }

    pub fn emf_samples(&self) -> &[f32] {
        &self.emf_samples
    }

    pub fn output_samples(&self) -> &[f32] {
        &self.output_samples
    }

    /// Most recent rectified output, zero before any sample exists.
    pub fn dc_output(&self) -> f32 {
        self.output_samples.last().copied().unwrap_or(0.0)
    }

    pub fn grid(&self) -> &FieldGrid {
        &self.grid
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_simulation() -> Simulation {
        // the unit-coil configuration used throughout: ω = 2.0, B = 0.8
        let mut simulation = Simulation::new();
        simulation.omega = 2.0;
        simulation.direction = Direction::Clockwise;
        simulation.b_peak = 0.8;
        simulation.coil = Coil {
            width: 1.0,
            height: 1.0,
            turns: 1,
        };
        simulation
    }

    #[test]
    fn test_single_step_reference_values() {
        let mut simulation = reference_simulation();
        simulation.step();

        assert!((simulation.angle() - 0.1).abs() < 1e-6);
        assert!((simulation.elapsed() - DT).abs() < 1e-6);
        assert!((simulation.perpendicular_field() - 0.796).abs() < 1e-3);
        // first sample: no previous flux, so the estimate is zero
        assert_eq!(simulation.emf_samples()[0], 0.0);
    }

    #[test]
    fn test_second_step_emf_uses_backward_difference() {
        let mut simulation = reference_simulation();
        simulation.step();
        simulation.step();

        let expected = -(0.8 * 0.2f32.cos() - 0.8 * 0.1f32.cos()) / DT;
        assert!((simulation.emf_samples()[1] - expected).abs() < 1e-5);
        // flux is falling away from the maximum, so the emf is positive
        assert!(simulation.emf_samples()[1] > 0.0);
    }

    #[test]
    fn test_histories_stay_index_aligned() {
        let mut simulation = reference_simulation();
        for steps in 1..=40 {
            simulation.step();
            assert_eq!(simulation.times().len(), steps);
            assert_eq!(simulation.flux_samples().len(), steps);
            assert_eq!(simulation.emf_samples().len(), steps);
            assert_eq!(simulation.output_samples().len(), steps);
        }
    }

    #[test]
    fn test_time_advances_by_dt_per_step() {
        let mut simulation = reference_simulation();
        for _ in 0..40 {
            simulation.step();
        }
        assert!((simulation.elapsed() - 40.0 * DT).abs() < 1e-4);
        for (i, t) in simulation.times().iter().enumerate() {
            assert!(
                (t - (i + 1) as f32 * DT).abs() < 1e-4,
                "sample {} at t = {}",
                i,
                t
            );
        }
    }

    #[test]
    fn test_rectified_output_never_negative() {
        let mut simulation = reference_simulation();
        for _ in 0..100 {
            simulation.step();
        }
        assert!(simulation.output_samples().iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_angle_accumulates_unbounded() {
        let mut simulation = reference_simulation();
        simulation.omega = 15.0;
        for _ in 0..20 {
            simulation.step();
        }
        // 15 rad/s over 1 s has crossed 2π without wrapping
        assert!(simulation.angle() > 2.0 * std::f32::consts::PI);
    }

    #[test]
    fn test_anticlockwise_reverses_the_angle() {
        let mut simulation = reference_simulation();
        simulation.direction = Direction::Anticlockwise;
        simulation.step();
        assert!((simulation.angle() + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_run_stops_at_the_time_cap() {
        let mut simulation = reference_simulation();
        simulation.max_run_time = 10.0;
        simulation.start();

        let mut batches = 0;
        while !simulation.run() {
            batches += 1;
            assert!(batches < 1000, "run never reached the time cap");
        }

        assert!(!simulation.running());
        assert!(simulation.elapsed() >= 10.0);
        // 10 s at Δt = 0.05 is 200 steps; the cap lands on a batch boundary
        let samples = simulation.times().len();
        assert!(
            (200..=200 + STEPS_PER_RUN).contains(&samples),
            "stopped after {} samples",
            samples
        );
    }

    #[test]
    fn test_run_does_nothing_when_stopped() {
        let mut simulation = reference_simulation();
        simulation.run();
        assert!(simulation.times().is_empty());
    }

    #[test]
    fn test_set_angle_overrides_without_touching_history() {
        let mut simulation = reference_simulation();
        simulation.step();
        simulation.step();

        simulation.set_angle(std::f32::consts::PI);
        assert!((simulation.angle() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(simulation.times().len(), 2);

        // the next step continues from the overridden angle
        simulation.step();
        assert!((simulation.angle() - (std::f32::consts::PI + 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_reset_clears_state_but_keeps_parameters() {
        let mut simulation = reference_simulation();
        simulation.start();
        for _ in 0..10 {
            simulation.step();
        }
        simulation.reset();

        assert!(!simulation.running());
        assert_eq!(simulation.angle(), 0.0);
        assert_eq!(simulation.elapsed(), 0.0);
        assert!(simulation.times().is_empty());
        assert!((simulation.omega - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_dipole_grid_model_still_follows_the_cosine_law() {
        let mut simulation = reference_simulation();
        simulation.field_model = FieldModel::DipoleGrid;
        let strength = simulation.field_strength();
        assert!(strength > 0.0);

        simulation.set_angle(0.3);
        let expected = strength * 0.3f32.cos();
        assert!((simulation.current_flux() - expected).abs() < 1e-5);
    }
}
