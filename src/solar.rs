//! Solar Geometry Module
//!
//! Closed-form sun position formulas: Cooper declination, hour angle,
//! solar altitude, and solar azimuth. All angles are radians; every
//! inverse-trig argument is clamped into [-1, 1] first so no input can
//! produce a domain error.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{Error, Result};

// ===================== CONSTANTS =====================

/// Maximum solar declination (Earth's axial tilt), 23.45° in radians
pub const DECLINATION_MAX_RAD: f64 = 23.45 * std::f64::consts::PI / 180.0;

/// Altitude invariant bound: the arcsine can never leave [-π/2, π/2]
pub const ALTITUDE_MAX_RAD: f64 = FRAC_PI_2;

/// Denominator threshold below which the azimuth bearing is undefined
const AZIMUTH_DENOM_EPS: f64 = 1e-9;

// ===================== TYPES =====================

/// Sun position for one time sample.
///
/// Altitude can be negative (sun below the horizon). The azimuth is absent
/// when the bearing is geometrically undefined (see [`azimuth`]).
#[derive(Debug, Clone, Copy)]
pub struct SolarPosition {
    /// Solar declination in radians
    pub declination: f64,
    /// Altitude above the horizon in radians, range [-π/2, π/2]
    pub altitude: f64,
    /// Compass bearing in radians, range [0, 2π], if defined
    pub azimuth: Option<f64>,
}

// ===================== GEOMETRY FUNCTIONS =====================

/// Solar declination using the Cooper approximation.
///
/// # Arguments
/// * `day_of_year` - Day of year (1-366); the formula is periodic and
///   defined for every integer
///
/// # Returns
/// Declination in radians, bounded by ±23.45°
pub fn declination(day_of_year: u32) -> f64 {
    let cycle_deg = 360.0 * (284 + day_of_year) as f64 / 365.0;
    DECLINATION_MAX_RAD * cycle_deg.to_radians().sin()
}

/// Hour angle: angular displacement of the sun from solar noon, 15° per hour.
///
/// Negative in the morning, zero at solar noon, positive in the afternoon.
pub fn hour_angle(decimal_hour: f64) -> f64 {
    (15.0 * (decimal_hour - 12.0)).to_radians()
}

/// Solar altitude above the horizon.
///
/// `sin(altitude) = sin(δ)·sin(φ) + cos(δ)·cos(φ)·cos(H)`, with the sine
/// clamped before the arcsine.
///
/// # Arguments
/// * `declination` - Solar declination in radians
/// * `decimal_hour` - Hour of day as a real (0-24)
/// * `latitude_rad` - Observer latitude in radians
///
/// # Returns
/// Altitude in radians, always within [-π/2, π/2]
pub fn altitude(declination: f64, decimal_hour: f64, latitude_rad: f64) -> f64 {
    let h = hour_angle(decimal_hour);
    let sin_alt = declination.sin() * latitude_rad.sin()
        + declination.cos() * latitude_rad.cos() * h.cos();
    sin_alt.clamp(-1.0, 1.0).asin()
}

/// Solar azimuth bearing.
///
/// `cos(azimuth) = (sin(δ) − sin(α)·sin(φ)) / (cos(α)·cos(φ))`, clamped,
/// then reflected to `2π − azimuth` for afternoon hour angles.
///
/// # Errors
/// Returns [`Error::AzimuthUndefined`] when `cos(α)·cos(φ)` is within 1e-9
/// of zero: the sun stands at the zenith or nadir, or the observer is at a
/// pole, and no single bearing exists.
pub fn azimuth(
    declination: f64,
    altitude: f64,
    decimal_hour: f64,
    latitude_rad: f64,
) -> Result<f64> {
    let denom = altitude.cos() * latitude_rad.cos();
    if denom.abs() < AZIMUTH_DENOM_EPS {
        return Err(Error::AzimuthUndefined {
            altitude_deg: altitude.to_degrees(),
            latitude_deg: latitude_rad.to_degrees(),
        });
    }

    let cos_az = ((declination.sin() - altitude.sin() * latitude_rad.sin()) / denom)
        .clamp(-1.0, 1.0);
    let az = cos_az.acos();

    if hour_angle(decimal_hour) > 0.0 { Ok(TAU - az) } else { Ok(az) }
}

/// Full sun position for one moment.
///
/// Computes declination and altitude, then the azimuth where it exists.
/// An undefined bearing is returned as `None` rather than an error so the
/// caller's sweep over the day never aborts.
pub fn position(day_of_year: u32, decimal_hour: f64, latitude_rad: f64) -> SolarPosition {
    let decl = declination(day_of_year);
    let alt = altitude(decl, decimal_hour, latitude_rad);
    let az = azimuth(decl, alt, decimal_hour, latitude_rad).ok();
    SolarPosition { declination: decl, altitude: alt, azimuth: az }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_declination_bounded_all_year() {
        for day in 1..=366 {
            let d = declination(day);
            assert!(
                d.abs() <= DECLINATION_MAX_RAD + 1e-12,
                "declination {} rad out of bounds on day {}",
                d,
                day
            );
        }
    }

    #[test]
    fn test_declination_seasonal_sign() {
        // Near the June solstice the declination is close to +23.45°
        let june = declination(172);
        assert!(june > DECLINATION_MAX_RAD * 0.99, "June declination {} too low", june);

        // Near the December solstice it is close to -23.45°
        let december = declination(355);
        assert!(december < -DECLINATION_MAX_RAD * 0.99, "December declination {}", december);

        // Near the equinoxes it crosses zero
        let march = declination(81);
        assert!(march.abs() < 0.02, "equinox declination {} should be near zero", march);
    }

    #[test]
    fn test_hour_angle_reference_points() {
        assert!(hour_angle(12.0).abs() < 1e-12);
        assert!((hour_angle(6.0) + PI / 2.0).abs() < 1e-12);
        assert!((hour_angle(18.0) - PI / 2.0).abs() < 1e-12);
        assert!(hour_angle(9.0) < 0.0);
        assert!(hour_angle(15.0) > 0.0);
    }

    #[test]
    fn test_altitude_always_in_range() {
        // Sweep latitudes, days, and hours; the clamp must hold everywhere
        for lat_deg in [-90.0, -66.5, -23.45, 0.0, 4.711, 45.0, 66.5, 90.0] {
            let lat = (lat_deg as f64).to_radians();
            for day in [1u32, 81, 172, 266, 355, 366] {
                let decl = declination(day);
                let mut hour = 0.0;
                while hour <= 24.0 {
                    let alt = altitude(decl, hour, lat);
                    assert!(
                        (-ALTITUDE_MAX_RAD..=ALTITUDE_MAX_RAD).contains(&alt),
                        "altitude {} out of range at lat {}, day {}, hour {}",
                        alt,
                        lat_deg,
                        day,
                        hour
                    );
                    hour += 0.25;
                }
            }
        }
    }

    #[test]
    fn test_altitude_noon_equator_equinox() {
        // Zero declination, equator, solar noon: the sun is at the zenith
        let alt = altitude(0.0, 12.0, 0.0);
        assert!((alt - PI / 2.0).abs() < 1e-9, "altitude {} should be π/2", alt);

        // Midnight: sun at the nadir
        let alt_midnight = altitude(0.0, 0.0, 0.0);
        assert!((alt_midnight + PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_azimuth_morning_east_afternoon_west() {
        let lat = 45.0_f64.to_radians();
        let decl = 0.0;

        // 09:00: H = -45°, altitude 30°, bearing east of the meridian
        let alt_am = altitude(decl, 9.0, lat);
        let az_am = azimuth(decl, alt_am, 9.0, lat).unwrap();
        assert!(az_am > 0.0 && az_am < PI, "morning azimuth {} should be < π", az_am);

        // 15:00 mirrors it onto the western half
        let alt_pm = altitude(decl, 15.0, lat);
        let az_pm = azimuth(decl, alt_pm, 15.0, lat).unwrap();
        assert!(az_pm > PI && az_pm < TAU, "afternoon azimuth {} should be > π", az_pm);

        // Same altitude, reflected bearing
        assert!((alt_am - alt_pm).abs() < 1e-9);
        assert!((az_pm - (TAU - az_am)).abs() < 1e-9);
    }

    #[test]
    fn test_azimuth_undefined_at_zenith() {
        // Equator, equinox, solar noon: sun exactly overhead
        let alt = altitude(0.0, 12.0, 0.0);
        let res = azimuth(0.0, alt, 12.0, 0.0);
        assert!(
            matches!(res, Err(crate::error::Error::AzimuthUndefined { .. })),
            "expected undefined azimuth at the zenith"
        );
    }

    #[test]
    fn test_azimuth_undefined_at_pole() {
        let lat = 90.0_f64.to_radians();
        let decl = declination(172);
        let alt = altitude(decl, 12.0, lat);
        let res = azimuth(decl, alt, 12.0, lat);
        assert!(matches!(res, Err(crate::error::Error::AzimuthUndefined { .. })));
    }

    #[test]
    fn test_position_keeps_sweep_alive() {
        // position() maps an undefined bearing to None instead of failing
        let pos = position(81, 12.0, 0.0);
        assert!(pos.altitude > 1.5, "equinox noon at the equator is near the zenith");
        assert!(pos.azimuth.is_none());

        let pos_am = position(81, 9.0, 0.0);
        assert!(pos_am.azimuth.is_some());
    }
}
