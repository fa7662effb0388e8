use std::{
    fmt,
    ops::{Add, Sub},
};

pub trait Unit<T> {
    fn confine(value: T) -> Self;
    fn release(self) -> T;
}

macro_rules! unit {
    ($name:ident) => {
        impl Unit<f64> for $name {
            fn confine(value: f64) -> Self {
                Self(value)
            }

            fn release(self) -> f64 {
                self.0
            }
        }
    };
}

/// feet per second
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Speed(f64);
unit!(Speed);

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} ft/s", self.0)
    }
}

/// feet
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Distance(f64);
unit!(Distance);

impl Distance {
    /// seconds needed to cover this distance
    pub fn traverse(self, speed: Speed) -> f64 {
        self.0 / speed.0
    }
}

/// drops per square foot per second
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct RainDensity(f64);
unit!(RainDensity);

/// square feet
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Area(f64);
unit!(Area);

impl RainDensity {
    /// drops collected by a horizontal plate left out in the rain for some seconds
    pub fn fall(self, area: Area, seconds: f64) -> Wetness {
        Wetness(self.0 * area.0 * seconds)
    }

    /// drops collected by a vertical plate carried through the rain over some distance
    pub fn sweep(self, area: Area, distance: Distance) -> Wetness {
        Wetness(self.0 * area.0 * distance.0)
    }
}

/// raindrops that hit the body
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Wetness(f64);
unit!(Wetness);

impl Wetness {
    /// whole drops, fractions truncated
    pub fn drops(self) -> i64 {
        self.0 as i64
    }
}

impl Add for Wetness {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Wetness {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
