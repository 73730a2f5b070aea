#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod config;
pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

pub mod interrupt;
pub mod power;

// Re-export main types
pub use calibration::{AxisOffsets, CalibrationOffsets};
pub use config::Mpu6500Config;
pub use device::{AccelData, GyroData, Mpu6500};
pub use interface::I2cInterface;
pub use interrupt::InterruptPinConfig;
pub use power::{ClockSource, PowerStatus};
pub use sensors::{
    AccelConfig, AccelDataG, AccelDlpf, AccelFullScale, GyroConfig, GyroDataDps, GyroDlpf,
    GyroFullScale,
};

/// MPU-6500 I2C address when AD0 pin is low (default: 0x68)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6500 I2C address when AD0 pin is high (alternative: 0x69)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x70;

/// Driver errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device (transport error passed through unchanged)
    Bus(E),
    /// Invalid argument, rejected before any bus access
    InvalidArgument,
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Calibration overflow (an averaged offset exceeds the i16 range)
    CalibrationOverflow,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
