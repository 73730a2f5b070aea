//! Interrupt pin configuration
//!
//! The MPU-6500 has a single INT pin. Its electrical behavior is fixed during
//! initialization from an [`InterruptPinConfig`]; the data-ready source is
//! switched separately with `enable_data_ready_interrupts()` and
//! `disable_data_ready_interrupts()`. Servicing the pin is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6500::{Mpu6500, Mpu6500Config, InterruptPinConfig};
//! let config = Mpu6500Config {
//!     interrupt_pin: InterruptPinConfig::push_pull_pulsed(),
//!     ..Default::default()
//! };
//! # let mut imu: Mpu6500<_> = todo!();
//! imu.init(&mut delay)?;
//! imu.enable_data_ready_interrupts()?;
//! # Ok::<(), mpu6500::Error<()>>(())
//! ```

/// Interrupt pin electrical configuration (`INT_PIN_CFG`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptPinConfig {
    /// Active low (true) or active high (false)
    pub active_low: bool,
    /// Open-drain (true) or push-pull (false)
    pub open_drain: bool,
    /// Latch interrupt until cleared (true) or emit a 50 µs pulse (false)
    pub latch_enabled: bool,
    /// Clear interrupt status on any register read (true) or only on status read (false)
    pub clear_on_any_read: bool,
}

impl Default for InterruptPinConfig {
    /// Active-low, push-pull, latched, cleared on any read (`INT_PIN_CFG` = 0xB0)
    fn default() -> Self {
        Self {
            active_low: true,
            open_drain: false,
            latch_enabled: true,
            clear_on_any_read: true,
        }
    }
}

impl InterruptPinConfig {
    /// Active-high, push-pull, pulsed interrupt (`INT_PIN_CFG` = 0x00)
    #[must_use]
    pub const fn push_pull_pulsed() -> Self {
        Self {
            active_low: false,
            open_drain: false,
            latch_enabled: false,
            clear_on_any_read: false,
        }
    }
}
