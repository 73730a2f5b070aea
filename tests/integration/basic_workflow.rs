//! Integration tests for basic workflow scenarios

use crate::common::test_utils::{MockDelay, assert_float_eq};
use crate::common::{create_mock_driver, create_mock_driver_with};
use mpu6500::sensors::{AccelConfig, AccelDlpf, AccelFullScale};
use mpu6500::{CalibrationOffsets, Mpu6500Config};

#[test]
fn test_complete_initialization_workflow() {
    let (mut driver, interface) = create_mock_driver();

    driver.verify_who_am_i().unwrap();
    driver.init(&mut MockDelay).unwrap();

    interface.set_accel_data(100, -50, 8192);
    interface.set_gyro_data(655, -1310, 0);
    interface.set_temperature_data(0);

    let accel = driver.read_accel().unwrap();
    assert!(accel.x > 0.0);
    assert_float_eq(accel.z, 1.0, 1e-6);

    let gyro = driver.read_gyro().unwrap();
    assert_float_eq(gyro.x, 10.0, 1e-4);
    assert_float_eq(gyro.y, -20.0, 1e-4);

    let temp = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp, 21.0, 1e-6);
}

#[test]
fn test_calibrate_then_measure() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();

    // Resting level with a small bias on every axis
    interface.set_accel_sequence(vec![[40, -24, 8192 + 16]; 100]);
    interface.set_gyro_sequence(vec![[-13, 8, 2]; 100]);
    driver.calibrate(&mut MockDelay, 100).unwrap();

    interface.set_accel_sequence(Vec::new());
    interface.set_gyro_sequence(Vec::new());
    interface.set_accel_data(40, -24, 8192 + 16);
    interface.set_gyro_data(-13 + 131, 8, 2);

    let accel = driver.read_accel().unwrap();
    assert_float_eq(accel.magnitude(), 1.0, 1e-6);

    let gyro = driver.read_gyro().unwrap();
    assert_float_eq(gyro.x, 2.0, 1e-4);
    assert_float_eq(gyro.y, 0.0, 1e-6);
}

#[test]
fn test_sleep_wake_cycle_keeps_configuration() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();

    driver.sleep().unwrap();
    driver.wake_up().unwrap();

    assert_eq!(interface.get_register(0x1C), 0x08);
    assert_eq!(interface.get_register(0x1B), 0x08);
    assert_eq!(interface.get_register(0x37), 0xB0);
    assert!(!driver.read_power_status().unwrap().sleep);
}

#[test]
fn test_data_ready_polling() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();
    driver.enable_data_ready_interrupts().unwrap();

    assert!(!driver.is_data_ready().unwrap());

    interface.set_register(0x3A, 0x01);
    interface.set_accel_data(0, 0, 8192);
    if driver.is_data_ready().unwrap() {
        let accel = driver.read_accel().unwrap();
        assert_float_eq(accel.z, 1.0, 1e-6);
    } else {
        panic!("data ready flag not reported");
    }

    driver.disable_data_ready_interrupts().unwrap();
    assert_eq!(interface.get_register(0x38), 0x00);
}

#[test]
fn test_offsets_restored_without_calibration() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();

    interface.set_accel_sequence(vec![[10, 20, 8222]; 4]);
    interface.set_gyro_sequence(vec![[1, 2, 3]; 4]);
    let saved = driver.calibrate(&mut MockDelay, 4).unwrap();

    // A second driver reuses stored offsets instead of recalibrating
    let (mut restored, restored_interface) = create_mock_driver();
    restored.init(&mut MockDelay).unwrap();
    restored.set_offsets(saved);
    restored_interface.set_accel_data(10, 20, 8222);

    let accel = restored.read_accel().unwrap();
    assert_float_eq(accel.x, 0.0, 1e-6);
    assert_float_eq(accel.y, 0.0, 1e-6);
    assert_float_eq(accel.z, 1.0, 1e-6);

    restored.set_offsets(CalibrationOffsets::default());
    assert_eq!(restored.offsets(), &CalibrationOffsets::default());
}

#[test]
fn test_release_returns_interface() {
    let config = Mpu6500Config {
        accel: AccelConfig {
            full_scale: AccelFullScale::G8,
            dlpf: AccelDlpf::Hz41,
        },
        ..Default::default()
    };
    let (mut driver, _interface) = create_mock_driver_with(config);
    driver.init(&mut MockDelay).unwrap();

    assert_eq!(driver.config(), &config);

    let released = driver.release();
    assert_eq!(released.get_register(0x1C), 0x10);
    assert_eq!(released.get_register(0x1D), 0x03);
}
