//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and utility functions for the MPU-6500's 3-axis gyroscope.

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±250°/s range
    Dps250 = 0,
    /// ±500°/s range
    Dps500 = 1,
    /// ±1000°/s range
    Dps1000 = 2,
    /// ±2000°/s range
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Get the sensitivity in LSB/(°/s)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 131.0, // LSB/(°/s)
            Self::Dps500 => 65.5,  // LSB/(°/s)
            Self::Dps1000 => 32.8, // LSB/(°/s)
            Self::Dps2000 => 16.4, // LSB/(°/s)
        }
    }

    /// `GYRO_FS_SEL` field value
    #[must_use]
    pub const fn register_value(self) -> u8 {
        self as u8
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }
}

/// Gyroscope Digital Low Pass Filter (DLPF) configuration
///
/// Written to `DLPF_CFG` in `CONFIG` with `FCHOICE_B` cleared. The same
/// filter also applies to the temperature sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroDlpf {
    /// 250 Hz bandwidth, 8 kHz rate
    Hz250 = 0,
    /// 184 Hz bandwidth, 1 kHz rate
    Hz184 = 1,
    /// 92 Hz bandwidth, 1 kHz rate
    Hz92 = 2,
    /// 41 Hz bandwidth, 1 kHz rate
    Hz41 = 3,
    /// 20 Hz bandwidth, 1 kHz rate
    Hz20 = 4,
    /// 10 Hz bandwidth, 1 kHz rate
    Hz10 = 5,
    /// 5 Hz bandwidth, 1 kHz rate
    Hz5 = 6,
    /// 3600 Hz bandwidth, 8 kHz rate
    Hz3600 = 7,
}

impl GyroDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz250 => 250,
            Self::Hz184 => 184,
            Self::Hz92 => 92,
            Self::Hz41 => 41,
            Self::Hz20 => 20,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
            Self::Hz3600 => 3600,
        }
    }

    /// `DLPF_CFG` field value
    #[must_use]
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub full_scale: GyroFullScale,
    /// Digital Low Pass Filter configuration
    pub dlpf: GyroDlpf,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            full_scale: GyroFullScale::Dps500,
            dlpf: GyroDlpf::Hz20,
        }
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis angular rate in °/s
    pub x: f32,
    /// Y-axis angular rate in °/s
    pub y: f32,
    /// Z-axis angular rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from raw sensor values and per-axis offsets
    ///
    /// Each axis is `(raw - offset) / sensitivity`.
    #[must_use]
    pub fn from_raw(raw: [i16; 3], offset: [i16; 3], sensitivity: f32) -> Self {
        let [x, y, z] = super::remove_offset(raw, offset);
        Self {
            x: x / sensitivity,
            y: y / sensitivity,
            z: z / sensitivity,
        }
    }
}
