//! High-level driver API for the MPU-6500
//!
//! This module provides the [`Mpu6500`] driver: the initialization sequence,
//! sensor reads with unit conversion, power and interrupt control, and bias
//! calibration. Every operation is a blocking bus transaction; a failure at any
//! step aborts the operation and returns the bus error unchanged.

use crate::calibration::{CalibrationOffsets, OffsetAccumulator};
use crate::config::Mpu6500Config;
use crate::power::{ClockSource, PowerStatus};
use crate::registers::{ACCEL_XOUT_H, GYRO_XOUT_H, Mpu6500 as RegisterDevice, TEMP_OUT_H};
use crate::sensors::{AccelDataG, GyroDataDps};
use crate::{Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;

/// Settling time after a device reset before registers may be accessed
pub const RESET_DELAY_MS: u32 = 100;

/// Pause between calibration samples
///
/// Keeps successive reads from landing inside the same output data period.
pub const CALIBRATION_SAMPLE_DELAY_MS: u32 = 5;

/// Temperature sensitivity in LSB/°C
const TEMP_SENSITIVITY: f32 = 333.87;

/// Temperature reported for a raw reading of zero
const TEMP_OFFSET_CELSIUS: f32 = 21.0;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

impl AccelData {
    /// Axes as an `[x, y, z]` array
    #[must_use]
    pub const fn as_array(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

impl GyroData {
    /// Axes as an `[x, y, z]` array
    #[must_use]
    pub const fn as_array(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

/// Combine a 6-byte big-endian block into three signed axes
const fn axes_from_be(buffer: [u8; 6]) -> [i16; 3] {
    [
        i16::from_be_bytes([buffer[0], buffer[1]]),
        i16::from_be_bytes([buffer[2], buffer[3]]),
        i16::from_be_bytes([buffer[4], buffer[5]]),
    ]
}

/// Main driver for the MPU-6500
///
/// Owns the bus interface, the configuration fixed at construction, and the
/// calibration offsets applied to every physical-unit read.
pub struct Mpu6500<I> {
    device: RegisterDevice<I>,
    config: Mpu6500Config,
    offsets: CalibrationOffsets,
}

impl<I> Mpu6500<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new MPU-6500 driver instance
    ///
    /// No bus traffic happens here. Call [`init()`](Self::init) to bring the
    /// device into the configured state. Calibration offsets start at zero.
    pub fn new(interface: I, config: Mpu6500Config) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            config,
            offsets: CalibrationOffsets::default(),
        }
    }

    /// Initialize the device with the stored configuration
    ///
    /// Runs, in order:
    /// 1. Device reset, then waits [`RESET_DELAY_MS`]
    /// 2. Clock source select with sleep cleared
    /// 3. Accelerometer full-scale range, then accelerometer DLPF
    /// 4. Gyroscope full-scale range, then gyroscope DLPF
    /// 5. Temperature sensor enable (read-modify-write of `PWR_MGMT_1`)
    /// 6. INT pin configuration (data-ready generation stays disabled)
    ///
    /// The first failing step aborts the sequence. Registers written by earlier
    /// steps are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use embassy_time::Delay;
    /// let mut delay = Delay;
    /// imu.init(&mut delay)?;
    /// ```
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let config = self.config;

        // 1. Reset; the device is busy until the settling delay has passed
        self.device.pwr_mgmt_1().write(|w| {
            w.set_device_reset(true);
        })?;
        delay.delay_ms(RESET_DELAY_MS);
        #[cfg(feature = "defmt")]
        defmt::debug!("MPU-6500 reset complete");

        // 2. Clock source, leaving sleep cleared
        self.device.pwr_mgmt_1().write(|w| {
            w.set_sleep(false);
            w.set_clksel(config.clock_source.register_value());
        })?;

        // 3. Accelerometer range and filter
        self.device.accel_config().write(|w| {
            w.set_accel_fs_sel(config.accel.full_scale.register_value());
        })?;
        self.device.accel_config_2().write(|w| {
            w.set_a_dlpf_cfg(config.accel.dlpf.register_value());
        })?;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Accelerometer: +/-{}g, {} Hz DLPF",
            config.accel.full_scale.max_value(),
            config.accel.dlpf.bandwidth_hz()
        );

        // 4. Gyroscope range and filter
        self.device.gyro_config().write(|w| {
            w.set_gyro_fs_sel(config.gyro.full_scale.register_value());
        })?;
        self.device.dlpf_config().write(|w| {
            w.set_dlpf_cfg(config.gyro.dlpf.register_value());
        })?;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Gyroscope: +/-{} dps, {} Hz DLPF",
            config.gyro.full_scale.max_value(),
            config.gyro.dlpf.bandwidth_hz()
        );

        // 5. Temperature sensor on, clock field preserved
        self.set_temperature_sensor(true)?;

        // 6. INT pin behavior only
        self.device.int_pin_cfg().write(|w| {
            w.set_actl(config.interrupt_pin.active_low);
            w.set_open(config.interrupt_pin.open_drain);
            w.set_latch_int_en(config.interrupt_pin.latch_enabled);
            w.set_int_anyrd_2_clear(config.interrupt_pin.clear_on_any_read);
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("MPU-6500 initialized");

        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x70 for a genuine MPU-6500. The value is returned as read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Check that the device answers with the expected identity
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read if it is not 0x70,
    /// or a bus error if communication fails.
    pub fn verify_who_am_i(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I: {:#x}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    // ==================== SENSOR READS ====================

    /// Read raw accelerometer data
    ///
    /// Returns uncalibrated 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw_accel(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes in one transaction to prevent torn reads
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(ACCEL_XOUT_H, 48, &mut buffer)?;

        let [x, y, z] = axes_from_be(buffer);
        Ok(AccelData { x, y, z })
    }

    /// Read raw gyroscope data
    ///
    /// Returns uncalibrated 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(GYRO_XOUT_H, 48, &mut buffer)?;

        let [x, y, z] = axes_from_be(buffer);
        Ok(GyroData { x, y, z })
    }

    /// Read accelerometer data in g-force units
    ///
    /// Each axis is `(raw - offset) / sensitivity` using the stored
    /// calibration offsets and the configured range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let accel = imu.read_accel()?;
    /// println!("X: {}g, Y: {}g, Z: {}g", accel.x, accel.y, accel.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_raw_accel()?;
        Ok(AccelDataG::from_raw(
            raw.as_array(),
            self.offsets.accel.as_array(),
            self.config.accel_sensitivity(),
        ))
    }

    /// Read gyroscope data in degrees per second
    ///
    /// Each axis is `(raw - offset) / sensitivity` using the stored
    /// calibration offsets and the configured range.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_raw_gyro()?;
        Ok(GyroDataDps::from_raw(
            raw.as_array(),
            self.offsets.gyro.as_array(),
            self.config.gyro_sensitivity(),
        ))
    }

    /// Read temperature sensor
    ///
    /// Returns the raw 16-bit signed value.
    /// Temperature in °C = `TEMP_OUT` / 333.87 + 21, see
    /// [`temperature_to_celsius`](Self::temperature_to_celsius).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temp(&mut self) -> Result<i16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(TEMP_OUT_H, 16, &mut buffer)?;

        Ok(i16::from_be_bytes(buffer))
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temp()?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Convert raw temperature to degrees Celsius
    #[must_use]
    pub fn temperature_to_celsius(raw: i16) -> f32 {
        f32::from(raw) / TEMP_SENSITIVITY + TEMP_OFFSET_CELSIUS
    }

    /// Poll the raw data ready flag in `INT_STATUS`
    ///
    /// With `clear_on_any_read` disabled this read also clears a latched
    /// interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        let status = self.device.int_status().read()?;
        Ok(status.raw_data_rdy_int())
    }

    // ==================== POWER AND INTERRUPTS ====================

    /// Put the device to sleep
    ///
    /// Sets the sleep bit in `PWR_MGMT_1`, keeping the clock source and other
    /// bits. Calling it while already asleep writes the same value again.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or the write fails.
    pub fn sleep(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_sleep(true);
        })?;
        Ok(())
    }

    /// Wake the device from sleep
    ///
    /// Clears only the sleep bit in `PWR_MGMT_1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or the write fails.
    pub fn wake_up(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_sleep(false);
        })?;
        Ok(())
    }

    /// Enable or disable the temperature sensor
    ///
    /// # Arguments
    /// * `enable` - true to enable, false to disable
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn set_temperature_sensor(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_temp_dis(!enable);
        })?;
        Ok(())
    }

    /// Put all three gyroscope axes in standby
    ///
    /// Writes the whole `PWR_MGMT_2` byte, so all accelerometer axes are enabled.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn disable_gyroscope(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_2().write(|w| {
            w.set_disable_xg(true);
            w.set_disable_yg(true);
            w.set_disable_zg(true);
        })?;
        Ok(())
    }

    /// Enable every accelerometer and gyroscope axis
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn enable_all_sensors(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_2().write(|_| {})?;
        Ok(())
    }

    /// Read current power status
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn read_power_status(&mut self) -> Result<PowerStatus, Error<I::Error>> {
        let pwr1 = self.device.pwr_mgmt_1().read()?;

        Ok(PowerStatus {
            sleep: pwr1.sleep(),
            temp_disabled: pwr1.temp_dis(),
            clock_source: ClockSource::from_register(pwr1.clksel()),
        })
    }

    /// Enable the data ready interrupt
    ///
    /// Writes the full `INT_ENABLE` byte with only `RAW_RDY_EN` set. Any other
    /// interrupt source is left disabled.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn enable_data_ready_interrupts(&mut self) -> Result<(), Error<I::Error>> {
        self.device.int_enable().write(|w| {
            w.set_raw_rdy_en(true);
        })?;
        Ok(())
    }

    /// Disable the data ready interrupt
    ///
    /// Writes zero to `INT_ENABLE`, clearing every interrupt source.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn disable_data_ready_interrupts(&mut self) -> Result<(), Error<I::Error>> {
        self.device.int_enable().write(|w| {
            w.set_raw_rdy_en(false);
        })?;
        Ok(())
    }

    // ==================== CALIBRATION ====================

    /// Estimate accelerometer and gyroscope bias
    ///
    /// The device must be stationary and level with the Z axis pointing up for
    /// the whole sampling window. Wakes the device, then takes `samples` raw
    /// readings of both sensors spaced by [`CALIBRATION_SAMPLE_DELAY_MS`]. The
    /// expected 1g count is removed from the accelerometer Z axis, so every
    /// offset is pure bias.
    ///
    /// The stored offsets are replaced only when every sample was read
    /// successfully.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider used between samples
    /// * `samples` - Number of samples to average (must be non-zero)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without touching the bus if `samples`
    /// is zero, [`Error::CalibrationOverflow`] if an average does not fit in
    /// i16, or a bus error if any read fails.
    pub fn calibrate<D>(
        &mut self,
        delay: &mut D,
        samples: u32,
    ) -> Result<CalibrationOffsets, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        if samples == 0 {
            return Err(Error::InvalidArgument);
        }

        self.wake_up()?;

        let one_g = self.config.accel.full_scale.one_g_raw();
        let mut accumulator = OffsetAccumulator::default();

        for _ in 0..samples {
            let accel = self.read_raw_accel()?;
            let gyro = self.read_raw_gyro()?;
            accumulator.add(accel.as_array(), gyro.as_array(), one_g);
            delay.delay_ms(CALIBRATION_SAMPLE_DELAY_MS);
        }

        let offsets = accumulator
            .mean(samples)
            .ok_or(Error::CalibrationOverflow)?;
        self.offsets = offsets;

        #[cfg(feature = "defmt")]
        defmt::info!("Calibration complete over {} samples: {}", samples, offsets);

        Ok(offsets)
    }

    /// Current calibration offsets
    #[must_use]
    pub const fn offsets(&self) -> &CalibrationOffsets {
        &self.offsets
    }

    /// Replace the calibration offsets
    ///
    /// The offsets will be applied to all subsequent readings.
    pub const fn set_offsets(&mut self, offsets: CalibrationOffsets) {
        self.offsets = offsets;
    }

    // ==================== ACCESSORS ====================

    /// Configuration applied by [`init()`](Self::init)
    #[must_use]
    pub const fn config(&self) -> &Mpu6500Config {
        &self.config
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }
}
