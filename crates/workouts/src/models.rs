use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::WorkoutError, info::InfoMessage};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Activity codes understood by the sensor packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Swimming,
        ActivityType::Running,
        ActivityType::SportsWalking,
    ];

    /// Three-letter code used in sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            ActivityType::Swimming => "SWM",
            ActivityType::Running => "RUN",
            ActivityType::SportsWalking => "WLK",
        }
    }

    /// Display label used in the training summary.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Swimming => "Swimming",
            ActivityType::Running => "Running",
            ActivityType::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional parameters a package of this type carries.
    pub fn arity(self) -> usize {
        match self {
            ActivityType::Swimming => 5,
            ActivityType::Running => 3,
            ActivityType::SportsWalking => 4,
        }
    }
}

impl FromStr for ActivityType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(s.to_string()))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Inputs shared by every kind of training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes.
    pub action: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl TrainingBase {
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if duration_hours == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "duration" });
        }
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

/// Metrics derived from a training's raw inputs.
///
/// Only the concrete trainings implement this; there is no constructible base form.
pub trait Training {
    fn activity_type(&self) -> ActivityType;

    fn base(&self) -> &TrainingBase;

    /// Distance covered per action, in metres.
    fn len_step(&self) -> f64 {
        0.65
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_hours
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.activity_type().label().to_string(),
            duration: self.base().duration_hours,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(base: TrainingBase) -> Self {
        Self { base }
    }
}

impl Training for Running {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let minutes = self.base.duration_hours * MIN_IN_H;
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * minutes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(base: TrainingBase, height_cm: f64) -> Result<Self, WorkoutError> {
        if height_cm == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }
        Ok(Self { base, height_cm })
    }
}

impl Training for SportsWalking {
    fn activity_type(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let minutes = self.base.duration_hours * MIN_IN_H;
        let weight = self.base.weight_kg;
        let speed_over_height = floor_div(self.mean_speed().powi(2), self.height_cm);
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_over_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * minutes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    pub pool_length_m: f64,
    pub pool_count: u64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(base: TrainingBase, pool_length_m: f64, pool_count: u64) -> Self {
        Self {
            base,
            pool_length_m,
            pool_count,
        }
    }
}

impl Training for Swimming {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn len_step(&self) -> f64 {
        1.38
    }

    /// Pool-lap based; ignores the stroke count.
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
    }
}

/// Floored quotient computed from the remainder, so `1.0 / 0.1` floors to 9
/// rather than to the rounded quotient 10.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// A dispatched training of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn activity_type(&self) -> ActivityType {
        self.as_training().activity_type()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}
