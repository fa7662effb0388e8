use crate::{
    error::{ChartError, InvalidInput},
    imaging::chart::Chart,
    units::{Speed, Unit, Wetness},
    vars::*,
    wetness::model::simulate_wetness,
};
use itertools::Itertools;
use log::debug;
use std::fmt;

/// one evaluated speed, displayed the way the driver prints it
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub speed: Speed,
    pub wetness: Wetness,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Speed: {} -> Wetness: {} drops",
            self.speed,
            self.wetness.drops()
        )
    }
}

/// the model evaluated over an ordered list of speeds at a fixed distance
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    speeds: Vec<f64>,
    wetness: Vec<f64>,
}

impl Sweep {
    /// evaluates every speed in the given order, stopping at the first bad one
    pub fn run(speeds: &[f64], distance: f64, rain_density: f64) -> Result<Self, InvalidInput> {
        debug!(
            "sweeping {} speeds over {} ft at {} drops/ft²/s",
            speeds.len(),
            distance,
            rain_density
        );
        let wetness = speeds
            .iter()
            .map(|&speed| simulate_wetness(speed, distance, rain_density))
            .collect::<Result<Vec<f64>, InvalidInput>>()?;
        Ok(Self {
            speeds: speeds.to_vec(),
            wetness,
        })
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn wetness(&self) -> &[f64] {
        &self.wetness
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.speeds
            .iter()
            .zip_eq(self.wetness.iter())
            .map(|(&speed, &wetness)| Sample {
                speed: Speed::confine(speed),
                wetness: Wetness::confine(wetness),
            })
    }

    pub fn chart(&self) -> Result<Chart, ChartError> {
        Chart::new(self.speeds.clone(), self.wetness.clone())
    }
}

/* # demonstration */

/// the inputs of the fixed demonstration run
#[derive(Debug, Clone, PartialEq)]
pub struct Demonstration {
    pub speeds: Vec<f64>,
    pub distance: f64,
    pub rain_density: f64,
    pub output: String,
}

impl Default for Demonstration {
    fn default() -> Self {
        Self {
            speeds: DEMO_SPEEDS.to_vec(),
            distance: DEMO_DISTANCE,
            rain_density: DEFAULT_RAIN_DENSITY,
            output: DEMO_OUTPUT.to_string(),
        }
    }
}

impl Demonstration {
    pub fn sweep(&self) -> Result<Sweep, InvalidInput> {
        Sweep::run(&self.speeds, self.distance, self.rain_density)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_is_kept() {
        let speeds = [13.2, 3.3, 8.8, 5.5];
        let sweep = Sweep::run(&speeds, 328., DEFAULT_RAIN_DENSITY).unwrap();
        assert_eq!(sweep.speeds(), &speeds);
        for (speed, wetness) in speeds.iter().zip(sweep.wetness()) {
            assert_eq!(
                *wetness,
                simulate_wetness(*speed, 328., DEFAULT_RAIN_DENSITY).unwrap()
            );
        }
    }

    #[test]
    fn demonstration_lines() {
        let sweep = Demonstration::default().sweep().unwrap();
        let lines = sweep.samples().map(|sample| sample.to_string()).collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Speed: 3.3 ft/s -> Wetness: 3354545 drops",
                "Speed: 5.5 ft/s -> Wetness: 3288282 drops",
                "Speed: 8.8 ft/s -> Wetness: 3251010 drops",
                "Speed: 13.2 ft/s -> Wetness: 3230303 drops",
            ]
        );
    }

    #[test]
    fn faster_is_drier() {
        let sweep = Demonstration::default().sweep().unwrap();
        assert!(sweep.wetness().windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn bad_speed_stops_the_sweep() {
        assert_eq!(
            Sweep::run(&[3.3, 0., 8.8], 328., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Speed(0.))
        );
        assert_eq!(
            Sweep::run(&[3.3], 328., -1.),
            Err(InvalidInput::RainDensity(-1.))
        );
    }

    #[test]
    fn overflow_stops_the_sweep() {
        assert!(matches!(
            Sweep::run(&[3.3, 1e-310], 328., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Overflow { .. })
        ));
    }

    #[test]
    fn empty_sweep() {
        let sweep = Sweep::run(&[], 328., DEFAULT_RAIN_DENSITY).unwrap();
        assert_eq!(sweep.samples().count(), 0);
        assert!(sweep.chart().is_err());
    }
}
