use crate::{
    error::InvalidInput,
    units::{Area, Distance, RainDensity, Speed, Unit, Wetness},
    vars::*,
};
use log::trace;

/* # body */

/// a person reduced to a box, dimensions in feet
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodyGeometry {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
}

impl BodyGeometry {
    pub const fn standing() -> Self {
        Self {
            height: BODY_HEIGHT,
            width: BODY_WIDTH,
            depth: BODY_DEPTH,
        }
    }

    /// head and shoulders, seen from above
    pub fn top_area(&self) -> Area {
        Area::confine(self.width * self.depth)
    }

    /// chest and legs, seen from the direction of travel
    pub fn front_area(&self) -> Area {
        Area::confine(self.height * self.width)
    }
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self::standing()
    }
}

/* # exposure */

/// the two halves of a soaking
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Exposure {
    /// falls on the top plate, grows with time spent in the rain
    pub from_above: Wetness,
    /// swept up by the front plate, grows with distance only
    pub from_front: Wetness,
}

impl Exposure {
    pub fn total(&self) -> Wetness {
        self.from_above + self.from_front
    }
}

/* # scenario */

/// a single dash through the rain
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scenario {
    speed: Speed,
    distance: Distance,
    rain_density: RainDensity,
}

impl Scenario {
    /// checks the values before anything gets divided by them
    pub fn new(speed: f64, distance: f64) -> Result<Self, InvalidInput> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(InvalidInput::Speed(speed));
        }
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(InvalidInput::Distance(distance));
        }
        Ok(Self {
            speed: Speed::confine(speed),
            distance: Distance::confine(distance),
            rain_density: RainDensity::confine(DEFAULT_RAIN_DENSITY),
        })
    }

    pub fn with_rain_density(self, rain_density: f64) -> Result<Self, InvalidInput> {
        if !(rain_density.is_finite() && rain_density > 0.0) {
            return Err(InvalidInput::RainDensity(rain_density));
        }
        Ok(Self {
            rain_density: RainDensity::confine(rain_density),
            ..self
        })
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn rain_density(&self) -> RainDensity {
        self.rain_density
    }

    /// seconds spent under the open sky
    pub fn time_in_rain(&self) -> f64 {
        self.distance.traverse(self.speed)
    }

    pub fn exposure(&self) -> Exposure {
        let body = BodyGeometry::standing();
        Exposure {
            from_above: self
                .rain_density
                .fall(body.top_area(), self.time_in_rain()),
            from_front: self.rain_density.sweep(body.front_area(), self.distance),
        }
    }

    /// total drops, refused once the sum leaves the finite range
    pub fn wetness(&self) -> Result<Wetness, InvalidInput> {
        let exposure = self.exposure();
        trace!(
            "{} over {} ft: {} from above, {} from front",
            self.speed,
            self.distance.release(),
            exposure.from_above.release(),
            exposure.from_front.release()
        );
        let total = exposure.total();
        if !total.release().is_finite() {
            return Err(InvalidInput::Overflow {
                speed: self.speed.release(),
                distance: self.distance.release(),
                rain_density: self.rain_density.release(),
            });
        }
        Ok(total)
    }
}

/// raindrops hitting a person who covers `distance` feet at `speed` feet per second
/// through rain falling at `rain_density` drops per square foot per second
pub fn simulate_wetness(speed: f64, distance: f64, rain_density: f64) -> Result<f64, InvalidInput> {
    Ok(Scenario::new(speed, distance)?
        .with_rain_density(rain_density)?
        .wetness()?
        .release())
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.001;

    #[test]
    fn body_areas() {
        let body = BodyGeometry::default();
        assert_float_eq!(body.top_area().release(), 1.666667, abs <= EPSILON);
        assert_float_eq!(body.front_area().release(), 9.722222, abs <= EPSILON);
    }

    #[test]
    fn known_value() {
        let wetness = simulate_wetness(3.3, 328., DEFAULT_RAIN_DENSITY).unwrap();
        assert_float_eq!(wetness, 3354545.4545, abs <= EPSILON);
    }

    #[test]
    fn known_exposure() {
        let exposure = Scenario::new(3.3, 328.).unwrap().exposure();
        assert_float_eq!(exposure.from_above.release(), 165656.5657, abs <= EPSILON);
        assert_float_eq!(exposure.from_front.release(), 3188888.8889, abs <= EPSILON);
    }

    #[test]
    fn deterministic() {
        let first = simulate_wetness(5.5, 328., 750.).unwrap();
        for _ in 0..8 {
            assert_eq!(simulate_wetness(5.5, 328., 750.).unwrap(), first);
        }
    }

    #[test]
    fn monotonic_in_distance() {
        let mut previous = 0.;
        for distance in (0..=40).map(|step| step as f64 * 25.) {
            let wetness = simulate_wetness(4.2, distance, DEFAULT_RAIN_DENSITY).unwrap();
            assert!(wetness >= previous);
            previous = wetness;
        }
    }

    #[test]
    fn front_ignores_speed() {
        let slow = Scenario::new(5., 100.).unwrap().exposure();
        let fast = Scenario::new(10., 100.).unwrap().exposure();
        assert_eq!(slow.from_front, fast.from_front);

        let difference = simulate_wetness(5., 100., DEFAULT_RAIN_DENSITY).unwrap()
            - simulate_wetness(10., 100., DEFAULT_RAIN_DENSITY).unwrap();
        assert_float_eq!(
            difference,
            (slow.from_above - fast.from_above).release(),
            abs <= EPSILON
        );
        assert_float_eq!(difference, 16666.6667, abs <= EPSILON);
    }

    #[test]
    fn standing_still_is_refused() {
        assert_eq!(
            simulate_wetness(0., 328., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Speed(0.))
        );
        assert_eq!(
            simulate_wetness(-3.3, 328., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Speed(-3.3))
        );
        assert!(simulate_wetness(f64::NAN, 328., DEFAULT_RAIN_DENSITY).is_err());
    }

    #[test]
    fn bad_distance_and_density() {
        assert_eq!(
            simulate_wetness(3.3, -1., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Distance(-1.))
        );
        assert_eq!(
            simulate_wetness(3.3, 328., 0.),
            Err(InvalidInput::RainDensity(0.))
        );
        assert!(simulate_wetness(3.3, f64::INFINITY, DEFAULT_RAIN_DENSITY).is_err());
    }

    #[test]
    fn no_distance_no_rain() {
        for speed in [0.1, 3.3, 13.2, 1000.] {
            assert_eq!(simulate_wetness(speed, 0., 5000.).unwrap(), 0.);
        }
    }

    #[test]
    fn default_density() {
        let scenario = Scenario::new(8.8, 328.).unwrap();
        assert_eq!(scenario.rain_density().release(), DEFAULT_RAIN_DENSITY);
        assert_float_eq!(scenario.time_in_rain(), 37.272727, abs <= EPSILON);
        assert_eq!(
            scenario.wetness().unwrap().release(),
            simulate_wetness(8.8, 328., DEFAULT_RAIN_DENSITY).unwrap()
        );
    }

    #[test]
    fn overflow_is_refused() {
        assert_eq!(
            simulate_wetness(1e-310, 328., DEFAULT_RAIN_DENSITY),
            Err(InvalidInput::Overflow {
                speed: 1e-310,
                distance: 328.,
                rain_density: DEFAULT_RAIN_DENSITY
            })
        );
        assert!(matches!(
            simulate_wetness(3.3, 1e300, 1e300),
            Err(InvalidInput::Overflow { .. })
        ));
        assert!(Scenario::new(3.3, f64::MAX)
            .unwrap()
            .with_rain_density(f64::MAX)
            .unwrap()
            .wetness()
            .is_err());
    }

    #[test]
    fn tiny_but_finite_is_fine() {
        let wetness = simulate_wetness(1e-3, 1e-3, 1e-3).unwrap();
        assert!(wetness.is_finite());
        assert!(wetness > 0.);
    }

    #[test]
    fn density_scales_linearly() {
        let light = simulate_wetness(5.5, 328., 500.).unwrap();
        let heavy = simulate_wetness(5.5, 328., 1000.).unwrap();
        assert_float_eq!(heavy, 2. * light, abs <= EPSILON);
    }
}
