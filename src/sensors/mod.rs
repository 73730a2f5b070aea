//! Sensor modules for the MPU-6500
//!
//! This module provides types, enums, and configuration structures for each sensor
//! in the MPU-6500:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//!
//! All sensor operations are performed through methods on `Mpu6500`.

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelDataG, AccelDlpf, AccelFullScale};
pub use gyroscope::{GyroConfig, GyroDataDps, GyroDlpf, GyroFullScale};

/// Subtract per-axis offsets from a raw triple without wrapping
// i32 difference of two i16 is at most 17 bits, exact in f32
#[allow(clippy::cast_precision_loss)]
fn remove_offset(raw: [i16; 3], offset: [i16; 3]) -> [f32; 3] {
    [0, 1, 2].map(|axis| (i32::from(raw[axis]) - i32::from(offset[axis])) as f32)
}
