//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and utility functions for the MPU-6500's 3-axis accelerometer.

/// Accelerometer full-scale range
///
/// Each range carries its own sensitivity, so the value written to
/// `ACCEL_CONFIG` and the factor used for conversion always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0, // LSB/g
            Self::G4 => 8192.0,  // LSB/g
            Self::G8 => 4096.0,  // LSB/g
            Self::G16 => 2048.0, // LSB/g
        }
    }

    /// Raw count produced by exactly 1g at this range
    #[must_use]
    pub const fn one_g_raw(self) -> i16 {
        match self {
            Self::G2 => 16384,
            Self::G4 => 8192,
            Self::G8 => 4096,
            Self::G16 => 2048,
        }
    }

    /// `ACCEL_FS_SEL` field value
    #[must_use]
    pub const fn register_value(self) -> u8 {
        self as u8
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Accelerometer Digital Low Pass Filter (DLPF) configuration
///
/// Written to `A_DLPF_CFG` in `ACCEL_CONFIG_2` with the filter enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelDlpf {
    /// 460 Hz bandwidth, 1 kHz rate
    Hz460 = 0,
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
}

impl AccelDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz460 => 460,
            Self::Hz184 => 184,
            Self::Hz92 => 92,
            Self::Hz41 => 41,
            Self::Hz20 => 20,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// `A_DLPF_CFG` field value
    #[must_use]
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Full-scale range
    pub full_scale: AccelFullScale,
    /// Digital Low Pass Filter configuration
    pub dlpf: AccelDlpf,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            full_scale: AccelFullScale::G4,
            dlpf: AccelDlpf::Hz20,
        }
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from raw sensor values and per-axis offsets
    ///
    /// Each axis is `(raw - offset) / sensitivity`. The subtraction is done in
    /// i32 so extreme raw/offset pairs cannot wrap.
    #[must_use]
    pub fn from_raw(raw: [i16; 3], offset: [i16; 3], sensitivity: f32) -> Self {
        let [x, y, z] = super::remove_offset(raw, offset);
        Self {
            x: x / sensitivity,
            y: y / sensitivity,
            z: z / sensitivity,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
