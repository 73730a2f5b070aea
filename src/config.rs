//! Device configuration applied by `init()`
//!
//! The configuration is fixed when the driver is constructed. Full-scale
//! ranges are enums whose sensitivity is derived from the same value, so the
//! range written to the device and the factor used for conversion cannot drift
//! apart.

use crate::interrupt::InterruptPinConfig;
use crate::power::ClockSource;
use crate::sensors::{AccelConfig, GyroConfig};

/// Complete MPU-6500 operating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu6500Config {
    /// Accelerometer range and filter
    pub accel: AccelConfig,
    /// Gyroscope range and filter
    pub gyro: GyroConfig,
    /// Clock source selected after reset
    pub clock_source: ClockSource,
    /// INT pin electrical behavior
    pub interrupt_pin: InterruptPinConfig,
}

impl Default for Mpu6500Config {
    /// ±4g / 20 Hz accelerometer, ±500 dps / 20 Hz gyroscope, auto clock,
    /// active-low latched INT pin
    fn default() -> Self {
        Self {
            accel: AccelConfig::default(),
            gyro: GyroConfig::default(),
            clock_source: ClockSource::AutoSelect,
            interrupt_pin: InterruptPinConfig::default(),
        }
    }
}

impl Mpu6500Config {
    /// Accelerometer sensitivity in LSB/g for the configured range
    #[must_use]
    pub const fn accel_sensitivity(&self) -> f32 {
        self.accel.full_scale.sensitivity()
    }

    /// Gyroscope sensitivity in LSB/(°/s) for the configured range
    #[must_use]
    pub const fn gyro_sensitivity(&self) -> f32 {
        self.gyro.full_scale.sensitivity()
    }
}
