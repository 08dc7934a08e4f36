/// Reference ellipsoid parameters and the derived shape constants the
/// projection series depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// First eccentricity to the 4th power
    pub e4: f64,
    /// First eccentricity to the 6th power
    pub e6: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
    /// Third flattening squared
    pub n2: f64,
    /// Third flattening cubed
    pub n3: f64,
    /// Third flattening to the 4th power
    pub n4: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid from semi-major axis and flattening.
    ///
    /// No validation: a non-positive axis or a flattening outside [0, 1)
    /// yields IEEE-754 specials downstream rather than an error.
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = 2.0 * f - f * f;
        let n = f / (2.0 - f);
        Self {
            a,
            f,
            b,
            e2,
            e4: e2 * e2,
            e6: e2 * e2 * e2,
            n,
            n2: n * n,
            n3: n * n * n,
            n4: n * n * n * n,
        }
    }

    /// First eccentricity (computed at runtime; sqrt is not const).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);
pub const BESSEL_1841: Ellipsoid = Ellipsoid::new(6_377_397.155, 1.0 / 299.152_812_8);
pub const CLARKE_1866: Ellipsoid = Ellipsoid::new(6_378_206.4, 1.0 / 294.978_698_2);
pub const INTERNATIONAL_1924: Ellipsoid = Ellipsoid::new(6_378_388.0, 1.0 / 297.0);
pub const KRASSOWSKY_1940: Ellipsoid = Ellipsoid::new(6_378_245.0, 1.0 / 298.3);
