//! Mercator projections: the ellipsoidal form and the spherical Web Mercator
//! used by web mapping tiles.
//!
//! Both are undefined at the poles (the isometric latitude diverges); inputs
//! there propagate IEEE-754 specials.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::ProjError;

use super::common::phi_from_ts;
use super::ellipsoid::Ellipsoid;
use super::geographic::{geodetic_to_xyz, xyz_to_geodetic};
use super::CoordinateSystem;

/// Ellipsoidal Mercator.
pub struct Mercator {
    lon0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl Mercator {
    /// `lon0` is the origin meridian in decimal degrees.
    pub fn new(lon0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0: lon0.to_radians(),
            k0,
            false_easting,
            false_northing,
        }
    }
}

impl CoordinateSystem for Mercator {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let e = ellipsoid.eccentricity();
        let east = (east - self.false_easting) / self.k0;
        let north = (north - self.false_northing) / self.k0;
        let ts = (-north / ellipsoid.a).exp();
        let lat = phi_from_ts(ts, e);
        let lon = self.lon0 + east / ellipsoid.a;
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
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);
        let s = lat.sin();
        let es = e * s;
        let east = self.k0 * ellipsoid.a * (lon - self.lon0) + self.false_easting;
        // Isometric latitude: ln((1+s)/(1-s) * ((1-es)/(1+es))^e) / 2.
        let north = self.k0 * ellipsoid.a / 2.0
            * ((1.0 + s) / (1.0 - s) * ((1.0 - es) / (1.0 + es)).powf(e)).ln()
            + self.false_northing;
        Ok((east, north, h))
    }
}

/// Spherical (Web) Mercator. Uses only the semi-major axis of the per-call
/// ellipsoid; no eccentricity terms, no iteration.
pub struct WebMercator;

impl CoordinateSystem for WebMercator {
    fn to_xyz(
        &self,
        east: f64,
        north: f64,
        h: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let lon = east / ellipsoid.a;
        let lat = 2.0 * (north / ellipsoid.a).exp().atan() - FRAC_PI_2;
        Ok(geodetic_to_xyz(ellipsoid, lon, lat, h))
    }

    fn from_xyz(
        &self,
        x: f64,
        y: f64,
        z: f64,
        ellipsoid: &Ellipsoid,
    ) -> Result<(f64, f64, f64), ProjError> {
        let (lon, lat, h) = xyz_to_geodetic(ellipsoid, x, y, z);
        let east = lon * ellipsoid.a;
        let north = (FRAC_PI_4 + lat / 2.0).tan().ln() * ellipsoid.a;
        Ok((east, north, h))
    }
}
