use static_assertions::const_assert;

pub struct Variable {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

pub const ANGULAR_SPEED: Variable = Variable {
    default: 2.0,
    min: 0.1,
    max: 15.0,
};
pub const PEAK_FIELD: Variable = Variable {
    default: 0.8,
    min: 0.05,
    max: 2.0,
};
pub const COIL_WIDTH: Variable = Variable {
    default: 0.2,
    min: 0.05,
    max: 0.5,
};
pub const COIL_HEIGHT: Variable = Variable {
    default: 0.15,
    min: 0.05,
    max: 0.5,
};

pub const TURNS_DEFAULT: u32 = 20;
pub const TURNS_MIN: u32 = 1;
pub const TURNS_MAX: u32 = 200;

/// Fixed integration step, seconds.
pub const DT: f32 = 0.05;
/// Steps consumed by a single `Simulation::run` invocation.
pub const STEPS_PER_RUN: usize = 5;
/// Default cap on simulated time, seconds.
pub const MAX_RUN_TIME: Variable = Variable {
    default: 10.0,
    min: 1.0,
    max: 60.0,
};

// DT divides flux differences, so it must never be zero
const_assert!(DT > 0.0);
const_assert!(STEPS_PER_RUN > 0);
const_assert!(MAX_RUN_TIME.min > 0.0);
