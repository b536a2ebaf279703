//! Panel Power Model Module
//!
//! Converts horizontal irradiance into instantaneous electrical power:
//! cloud transmission, panel area and efficiency, linear temperature
//! derating above the 25 °C reference, and a fixed system-loss factor.

// ===================== CONSTANTS =====================

/// Default whole-system loss factor (wiring, inverter, soiling)
pub const DEFAULT_SYSTEM_LOSS: f64 = 0.85;

/// Default power loss per °C above the reference cell temperature
pub const DEFAULT_TEMP_COEFFICIENT: f64 = 0.004;

/// Reference temperature in °C below which no derating applies
pub const TEMP_REFERENCE_C: f64 = 25.0;

// ===================== CONFIGURATION =====================

/// Photovoltaic panel parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Panel area in square meters
    pub area_m2: f64,
    /// Conversion efficiency (0.0 - 1.0, typical silicon ~0.18-0.22)
    pub efficiency: f64,
    /// Whole-system loss factor applied after conversion (0.0 - 1.0)
    pub system_loss: f64,
    /// Fractional power loss per °C above [`TEMP_REFERENCE_C`]
    pub temp_coefficient: f64,
}

impl PanelConfig {
    pub fn new(area_m2: f64, efficiency: f64) -> Self {
        Self {
            area_m2,
            efficiency,
            system_loss: DEFAULT_SYSTEM_LOSS,
            temp_coefficient: DEFAULT_TEMP_COEFFICIENT,
        }
    }

    pub fn with_system_loss(mut self, system_loss: f64) -> Self {
        self.system_loss = system_loss;
        self
    }

    pub fn with_temp_coefficient(mut self, temp_coefficient: f64) -> Self {
        self.temp_coefficient = temp_coefficient;
        self
    }

    /// Temperature derating factor: 1.0 at or below the 25 °C reference,
    /// dropping linearly above it.
    pub fn temperature_derate(&self, ambient_temp_c: f64) -> f64 {
        1.0 - self.temp_coefficient * (ambient_temp_c - TEMP_REFERENCE_C).max(0.0)
    }

    /// Instantaneous electrical power in watts.
    ///
    /// `power = irradiance × cloud × area × efficiency × derate × loss`,
    /// clamped to ≥ 0.
    ///
    /// # Arguments
    /// * `irradiance_w_m2` - Total horizontal irradiance (W/m²)
    /// * `ambient_temp_c` - Ambient temperature in °C
    /// * `cloud_factor` - Cloud transmission factor (0.0 - 1.0)
    pub fn power(&self, irradiance_w_m2: f64, ambient_temp_c: f64, cloud_factor: f64) -> f64 {
        let attenuated = irradiance_w_m2 * cloud_factor;
        let power = attenuated
            * self.area_m2
            * self.efficiency
            * self.temperature_derate(ambient_temp_c)
            * self.system_loss;
        power.max(0.0)
    }
}

// ===================== FORMATTING HELPERS =====================

/// Format power output for display
pub fn format_power(watts: f64) -> String {
    if watts >= 1000.0 { format!("{:.2} kW", watts / 1000.0) } else { format!("{:.1} W", watts) }
}

/// Format energy for display
pub fn format_energy(watt_hours: f64) -> String {
    if watt_hours >= 1000.0 {
        format!("{:.2} kWh", watt_hours / 1000.0)
    } else {
        format!("{:.1} Wh", watt_hours)
    }
}

/// Format irradiance for display
pub fn format_irradiance(w_per_m2: f64) -> String {
    format!("{:.0} W/m²", w_per_m2)
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_reference_case() {
        // 1000 W/m², 15 m², 18% efficiency, 22 °C (no derating), clear sky:
        // 1000 * 15 * 0.18 * 1.0 * 0.85 = 2295 W
        let panel = PanelConfig::new(15.0, 0.18);
        let p = panel.power(1000.0, 22.0, 1.0);
        assert!((p - 2295.0).abs() < 1e-9, "power {}", p);
    }

    #[test]
    fn test_power_never_negative() {
        let panel = PanelConfig::new(15.0, 0.18);
        assert_eq!(panel.power(0.0, 22.0, 1.0), 0.0);
        assert_eq!(panel.power(-50.0, 22.0, 1.0), 0.0);
        // Extreme temperature pushes the derate factor negative; power clamps
        let p_hot = panel.power(1000.0, 400.0, 1.0);
        assert_eq!(p_hot, 0.0);
    }

    #[test]
    fn test_no_derating_at_or_below_reference() {
        let panel = PanelConfig::new(10.0, 0.2);
        assert_eq!(panel.temperature_derate(25.0), 1.0);
        assert_eq!(panel.temperature_derate(10.0), 1.0);
        assert_eq!(panel.temperature_derate(-30.0), 1.0);
    }

    #[test]
    fn test_derating_above_reference() {
        let panel = PanelConfig::new(10.0, 0.2);
        // 35 °C: 1 - 0.004 * 10 = 0.96
        assert!((panel.temperature_derate(35.0) - 0.96).abs() < 1e-12);
    }

    #[test]
    fn test_power_non_increasing_in_temperature() {
        let panel = PanelConfig::new(15.0, 0.18);
        let mut prev = f64::INFINITY;
        for temp in [20.0, 25.0, 26.0, 30.0, 40.0, 60.0] {
            let p = panel.power(800.0, temp, 1.0);
            assert!(p <= prev + 1e-12, "power rose from {} to {} at {} °C", prev, p, temp);
            prev = p;
        }
        // Strictly decreasing once past the reference
        assert!(panel.power(800.0, 30.0, 1.0) < panel.power(800.0, 25.0, 1.0));
    }

    #[test]
    fn test_cloud_factor_scales_linearly() {
        let panel = PanelConfig::new(15.0, 0.18);
        let clear = panel.power(900.0, 22.0, 1.0);
        let hazy = panel.power(900.0, 22.0, 0.7);
        assert!((hazy - clear * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_builder_overrides() {
        let panel = PanelConfig::new(10.0, 0.2).with_system_loss(0.9).with_temp_coefficient(0.005);
        assert_eq!(panel.system_loss, 0.9);
        assert_eq!(panel.temp_coefficient, 0.005);
        // 30 °C with 0.005/°C: derate 0.975
        assert!((panel.temperature_derate(30.0) - 0.975).abs() < 1e-12);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_power(950.0), "950.0 W");
        assert_eq!(format_power(2552.5), "2.55 kW");
        assert_eq!(format_energy(450.0), "450.0 Wh");
        assert_eq!(format_energy(12345.0), "12.35 kWh");
        assert_eq!(format_irradiance(585.4), "585 W/m²");
    }
}
