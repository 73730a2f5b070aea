//! Bias (offset) calibration state
//!
//! [`CalibrationOffsets`] holds the per-axis raw bias for both sensors. The
//! driver owns one instance, subtracts it in every physical-unit conversion and
//! replaces it as a whole when `calibrate()` completes.
//!
//! The offsets are estimated with the device stationary and level, Z axis
//! vertical. The accelerometer Z bias excludes the 1g gravity baseline.

use core::fmt;

/// Raw offsets for the three axes of one sensor
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisOffsets {
    /// X-axis offset (subtracted from raw value)
    pub x: i16,
    /// Y-axis offset (subtracted from raw value)
    pub y: i16,
    /// Z-axis offset (subtracted from raw value)
    pub z: i16,
}

impl AxisOffsets {
    /// Create offsets from individual axis values
    #[must_use]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Offsets as an `[x, y, z]` array
    #[must_use]
    pub const fn as_array(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

/// Accelerometer and gyroscope bias applied to every conversion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationOffsets {
    /// Accelerometer offsets in raw counts
    pub accel: AxisOffsets,
    /// Gyroscope offsets in raw counts
    pub gyro: AxisOffsets,
}

impl fmt::Display for CalibrationOffsets {
    /// Two labeled groups with one `X: n` line per axis
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accelerometer Offsets:")?;
        writeln!(f, "X: {}", self.accel.x)?;
        writeln!(f, "Y: {}", self.accel.y)?;
        writeln!(f, "Z: {}", self.accel.z)?;
        writeln!(f, "Gyroscope Offsets:")?;
        writeln!(f, "X: {}", self.gyro.x)?;
        writeln!(f, "Y: {}", self.gyro.y)?;
        writeln!(f, "Z: {}", self.gyro.z)
    }
}

/// Running sums for the calibration loop
///
/// Sums are kept in i64 so any realistic sample count cannot overflow.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OffsetAccumulator {
    accel: [i64; 3],
    gyro: [i64; 3],
}

impl OffsetAccumulator {
    /// Add one sample pair; `one_g` is subtracted from the accelerometer Z axis
    pub(crate) fn add(&mut self, accel: [i16; 3], gyro: [i16; 3], one_g: i16) {
        let gravity = [0, 0, i64::from(one_g)];
        for axis in 0..3 {
            self.accel[axis] += i64::from(accel[axis]) - gravity[axis];
            self.gyro[axis] += i64::from(gyro[axis]);
        }
    }

    /// Per-axis integer mean, truncated toward zero
    ///
    /// Returns `None` if `samples` is zero or any mean does not fit in i16.
    pub(crate) fn mean(&self, samples: u32) -> Option<CalibrationOffsets> {
        if samples == 0 {
            return None;
        }
        let n = i64::from(samples);
        let avg = |sum: i64| i16::try_from(sum / n).ok();

        Some(CalibrationOffsets {
            accel: AxisOffsets::new(
                avg(self.accel[0])?,
                avg(self.accel[1])?,
                avg(self.accel[2])?,
            ),
            gyro: AxisOffsets::new(avg(self.gyro[0])?, avg(self.gyro[1])?, avg(self.gyro[2])?),
        })
    }
}
