//! Lambert Conformal Conic projection, one and two standard parallel forms.
//!
//! Both share the isometric parameter t(phi) and the parallel radius m(phi);
//! latitude recovery uses the same fixed five-step refinement as Mercator.
//! Invalid near the antipodal meridian and at the poles.

use crate::error::ProjError;

use super::common::{msfn, phi_from_ts, tsfn};
use super::ellipsoid::Ellipsoid;
use super::geographic::{geodetic_to_xyz, xyz_to_geodetic};
use super::CoordinateSystem;

/// One standard parallel: the origin latitude is the standard parallel and a
/// scale factor is applied there.
pub struct LambertConformalConic1Sp {
    lon0: f64,
    lat0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl LambertConformalConic1Sp {
    /// Origin in decimal degrees.
    pub fn new(lon0: f64, lat0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0: lon0.to_radians(),
            lat0: lat0.to_radians(),
            k0,
            false_easting,
            false_northing,
        }
    }

    /// Cone constant n, scale constant F and origin radius rho0 for the
    /// given ellipsoid. rho(phi) = a * k0 * F * t(phi)^n.
    fn constants(&self, ell: &Ellipsoid) -> (f64, f64, f64) {
        let e = ell.eccentricity();
        let n = self.lat0.sin();
        let f = msfn(self.lat0, ell.e2) / (n * tsfn(self.lat0, e).powf(n));
        let rho0 = ell.a * self.k0 * f * tsfn(self.lat0, e).powf(n);
        (n, f, rho0)
    }
}

impl CoordinateSystem for LambertConformalConic1Sp {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let (n, f, rho0) = self.constants(ellipsoid);
        let east = east - self.false_easting;
        let north = north - self.false_northing;

        let mut rho_i = (east * east + (rho0 - north) * (rho0 - north)).sqrt();
        if n < 0.0 {
            rho_i = -rho_i;
        }
        let ts = (rho_i / (ellipsoid.a * self.k0 * f)).powf(1.0 / n);
        let lat = phi_from_ts(ts, e);
        let lon = (east / (rho0 - north)).atan() / n + self.lon0;
        Ok(geodetic_to_xyz(ellipsoid, lon, lat, h))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let (n, f, rho0) = self.constants(ellipsoid);
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);

        let rho = ellipsoid.a * self.k0 * f * tsfn(lat, e).powf(n);
        let theta = n * (lon - self.lon0);
        let east = self.false_easting + rho * theta.sin();
        let north = self.false_northing + rho0 - rho * theta.cos();
        Ok((east, north, h))
    }
}

/// Two standard parallels. Degenerates to the single-parallel cone constant
/// sin(lat1) when the parallels coincide.
pub struct LambertConformalConic2Sp {
    lon0: f64,
    lat0: f64,
    lat1: f64,
    lat2: f64,
    false_easting: f64,
    false_northing: f64,
}

impl LambertConformalConic2Sp {
    /// Origin and standard parallels in decimal degrees.
    pub fn new(
        lon0: f64,
        lat0: f64,
        lat1: f64,
        lat2: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            lon0: lon0.to_radians(),
            lat0: lat0.to_radians(),
            lat1: lat1.to_radians(),
            lat2: lat2.to_radians(),
            false_easting,
            false_northing,
        }
    }

    fn constants(&self, ell: &Ellipsoid) -> (f64, f64, f64) {
        let e = ell.eccentricity();
        let t1 = tsfn(self.lat1, e);
        let n = if (self.lat1 - self.lat2).abs() > 1e-10 {
            let m1 = msfn(self.lat1, ell.e2);
            let m2 = msfn(self.lat2, ell.e2);
            let t2 = tsfn(self.lat2, e);
            (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
        } else {
            self.lat1.sin()
        };
        let f = msfn(self.lat1, ell.e2) / (n * t1.powf(n));
        let rho0 = ell.a * f * tsfn(self.lat0, e).powf(n);
        (n, f, rho0)
    }
}

impl CoordinateSystem for LambertConformalConic2Sp {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let (n, f, rho0) = self.constants(ellipsoid);
        let east = east - self.false_easting;
        let north = north - self.false_northing;

        let mut rho_i = (east * east + (rho0 - north) * (rho0 - north)).sqrt();
        if n < 0.0 {
            rho_i = -rho_i;
        }
        let ts = (rho_i / (ellipsoid.a * f)).powf(1.0 / n);
        let lat = phi_from_ts(ts, e);
        let lon = (east / (rho0 - north)).atan() / n + self.lon0;
        Ok(geodetic_to_xyz(ellipsoid, lon, lat, h))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let (n, f, rho0) = self.constants(ellipsoid);
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);

        let rho = ellipsoid.a * f * tsfn(lat, e).powf(n);
        let theta = n * (lon - self.lon0);
        let east = self.false_easting + rho * theta.sin();
        let north = self.false_northing + rho0 - rho * theta.cos();
        Ok((east, north, h))
    }
}
