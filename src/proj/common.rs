//! Shared projection math: meridian arc, conformal and authalic latitude
//! helpers, footpoint latitude recovery.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::ellipsoid::Ellipsoid;

/// Meridian arc length from the equator to latitude `phi` (radians).
/// Four-term series in the even powers of the first eccentricity.
pub fn meridian_arc(ell: &Ellipsoid, phi: f64) -> f64 {
    let (e2, e4, e6) = (ell.e2, ell.e4, ell.e6);
    ell.a
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Leading coefficient of the meridian arc series: the arc length per radian
/// of rectifying latitude. `meridian_arc(ell, phi) / rectifying_radius(ell)`
/// is the normalized arc ratio the footpoint series inverts.
pub fn rectifying_radius(ell: &Ellipsoid) -> f64 {
    ell.a * (1.0 - ell.e2 / 4.0 - 3.0 * ell.e4 / 64.0 - 5.0 * ell.e6 / 256.0)
}

/// Footpoint latitude from the normalized arc ratio `mu`.
/// Closed-form series in powers of the third flattening; no iteration.
pub fn footpoint_latitude(ell: &Ellipsoid, mu: f64) -> f64 {
    let (n, n2, n3, n4) = (ell.n, ell.n2, ell.n3, ell.n4);
    mu + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * mu).sin()
        + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * mu).sin()
        + (151.0 * n3 / 96.0) * (6.0 * mu).sin()
        + (1097.0 * n4 / 512.0) * (8.0 * mu).sin()
}

/// Parallel radius factor m(phi) = cos(phi) / sqrt(1 - e^2 sin^2(phi)).
pub fn msfn(phi: f64, e2: f64) -> f64 {
    let s = phi.sin();
    phi.cos() / (1.0 - e2 * s * s).sqrt()
}

/// Isometric parameter t(phi) used by the conformal projections:
/// tan(pi/4 - phi/2) / ((1 - e sin(phi)) / (1 + e sin(phi)))^(e/2).
pub fn tsfn(phi: f64, e: f64) -> f64 {
    let s = phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - e * s) / (1.0 + e * s)).powf(e / 2.0)
}

/// Recover latitude from the isometric parameter `ts`.
///
/// Exactly five refinement steps, seeded with the spherical closed form.
/// The count is fixed: no convergence check, input-independent cost. After
/// five steps the residual is far below 1e-10 rad for any terrestrial
/// eccentricity away from the poles.
pub fn phi_from_ts(ts: f64, e: f64) -> f64 {
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..5 {
        let s = phi.sin();
        phi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - e * s) / (1.0 + e * s)).powf(e / 2.0)).atan();
    }
    phi
}

/// Authalic parameter q(phi) used by the equal-area projection.
/// Undefined for e = 0 (the 1/(2e) term); spherical callers must not use it.
pub fn qsfn(phi: f64, e: f64) -> f64 {
    let e2 = e * e;
    let s = phi.sin();
    (1.0 - e2)
        * (s / (1.0 - e2 * s * s) - (1.0 / (2.0 * e)) * ((1.0 - e * s) / (1.0 + e * s)).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_meridian_arc_equator() {
        assert_relative_eq!(meridian_arc(&WGS84, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_meridian_arc_45_degrees() {
        // Known WGS84 value: ~4984944.4 m from the equator to 45°N.
        let m = meridian_arc(&WGS84, FRAC_PI_4);
        assert_relative_eq!(m, 4_984_944.4, epsilon = 1.0);
    }

    #[test]
    fn test_meridian_arc_odd() {
        let m = meridian_arc(&WGS84, FRAC_PI_4);
        assert_relative_eq!(meridian_arc(&WGS84, -FRAC_PI_4), -m, epsilon = 1e-6);
    }

    #[test]
    fn test_footpoint_inverts_meridian_arc() {
        for lat_deg in [-80.0_f64, -45.0, -10.0, 0.0, 10.0, 33.0, 52.0, 80.0] {
            let phi = lat_deg.to_radians();
            let mu = meridian_arc(&WGS84, phi) / rectifying_radius(&WGS84);
            let phi1 = footpoint_latitude(&WGS84, mu);
            assert_relative_eq!(phi1, phi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_phi_from_ts_inverts_tsfn() {
        let e = WGS84.eccentricity();
        for lat_deg in [-85.0_f64, -60.0, -30.0, 0.0, 30.0, 45.0, 60.0, 85.0] {
            let phi = lat_deg.to_radians();
            let recovered = phi_from_ts(tsfn(phi, e), e);
            assert_relative_eq!(recovered, phi, epsilon = 1e-11);
        }
    }

    #[test]
    fn test_phi_from_ts_spherical() {
        // e = 0 collapses the refinement to the spherical closed form.
        let phi = 0.7_f64;
        let ts = (FRAC_PI_4 - phi / 2.0).tan();
        assert_relative_eq!(phi_from_ts(ts, 0.0), phi, epsilon = 1e-14);
    }

    #[test]
    fn test_msfn_equator_and_pole() {
        assert_relative_eq!(msfn(0.0, WGS84.e2), 1.0, epsilon = 1e-15);
        assert_relative_eq!(msfn(std::f64::consts::FRAC_PI_2, WGS84.e2), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_qsfn_approaches_two_at_pole() {
        // q(pi/2) is the total authalic value, slightly below 2 on an ellipsoid.
        let e = WGS84.eccentricity();
        let q_pole = qsfn(std::f64::consts::FRAC_PI_2, e);
        assert!(q_pole > 1.99 && q_pole < 2.0, "q_pole = {q_pole}");
    }
}
