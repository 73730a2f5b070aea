//! Power management
//!
//! The MPU-6500 power state lives in `PWR_MGMT_1`, which packs the sleep bit
//! together with the clock source and temperature sensor disable bit. Sleep
//! and wake are therefore read-modify-write operations that leave the other
//! fields of the register untouched.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6500::Mpu6500;
//! # let mut imu: Mpu6500<_> = todo!();
//! imu.sleep()?;
//! // ... later
//! imu.wake_up()?;
//! let status = imu.read_power_status()?;
//! assert!(!status.sleep);
//! # Ok::<(), mpu6500::Error<()>>(())
//! ```

/// Clock source selection (`CLKSEL` field of `PWR_MGMT_1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 20 MHz oscillator
    Internal20MHz = 0,
    /// Auto-select best available clock (PLL when ready, else internal)
    AutoSelect = 1,
    /// Stop clock and keep timing generator in reset
    Stop = 7,
}

impl ClockSource {
    /// `CLKSEL` field value
    #[must_use]
    pub const fn register_value(self) -> u8 {
        self as u8
    }

    /// Decode a `CLKSEL` field value
    ///
    /// Values 1-5 all select the best available clock; 6 behaves like the
    /// internal oscillator per the datasheet.
    #[must_use]
    pub const fn from_register(value: u8) -> Self {
        match value & 0x07 {
            1..=5 => Self::AutoSelect,
            7 => Self::Stop,
            _ => Self::Internal20MHz,
        }
    }
}

/// Current power management status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerStatus {
    /// Device is in sleep mode
    pub sleep: bool,
    /// Temperature sensor is disabled
    pub temp_disabled: bool,
    /// Active clock source
    pub clock_source: ClockSource,
}
