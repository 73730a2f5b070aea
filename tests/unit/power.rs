//! Unit tests for power management

use crate::common::test_utils::MockDelay;
use crate::common::{MockError, Operation, create_mock_driver};
use mpu6500::{ClockSource, Error};

#[test]
fn test_sleep_sets_only_sleep_bit() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0x05);

    driver.sleep().unwrap();

    assert_eq!(interface.get_register(0x6B), 0x45);
}

#[test]
fn test_sleep_is_idempotent() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0x05);

    driver.sleep().unwrap();
    driver.sleep().unwrap();

    assert_eq!(interface.get_register(0x6B), 0x45);
    assert_eq!(interface.attempted_writes(), vec![(0x6B, 0x45), (0x6B, 0x45)]);
}

#[test]
fn test_wake_up_restores_previous_value() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0x05);

    driver.sleep().unwrap();
    driver.wake_up().unwrap();

    assert_eq!(interface.get_register(0x6B), 0x05);
}

#[test]
fn test_wake_up_when_awake_rewrites_same_value() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0x09);

    driver.wake_up().unwrap();

    assert_eq!(interface.attempted_writes(), vec![(0x6B, 0x09)]);
}

#[test]
fn test_sleep_is_read_modify_write() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.sleep().unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x6B,
                data: vec![0x01],
            },
            Operation::Write {
                address: 0x6B,
                data: vec![0x41],
            },
        ]
    );
}

#[test]
fn test_sleep_read_failure_skips_write() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_next_read();

    assert_eq!(driver.sleep(), Err(Error::Bus(MockError::Communication)));
    assert!(interface.attempted_writes().is_empty());
    assert_eq!(interface.get_register(0x6B), 0x01);
}

#[test]
fn test_temperature_sensor_toggle() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0x41);

    driver.set_temperature_sensor(false).unwrap();
    assert_eq!(interface.get_register(0x6B), 0x49);

    driver.set_temperature_sensor(true).unwrap();
    assert_eq!(interface.get_register(0x6B), 0x41);
}

#[test]
fn test_disable_gyroscope_and_enable_all() {
    let (mut driver, interface) = create_mock_driver();

    driver.disable_gyroscope().unwrap();
    assert_eq!(interface.get_register(0x6C), 0x07);

    driver.enable_all_sensors().unwrap();
    assert_eq!(interface.get_register(0x6C), 0x00);
}

#[test]
fn test_read_power_status() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x6B, 0x49);
    let status = driver.read_power_status().unwrap();
    assert!(status.sleep);
    assert!(status.temp_disabled);
    assert_eq!(status.clock_source, ClockSource::AutoSelect);

    interface.set_register(0x6B, 0x07);
    let status = driver.read_power_status().unwrap();
    assert!(!status.sleep);
    assert!(!status.temp_disabled);
    assert_eq!(status.clock_source, ClockSource::Stop);

    interface.set_register(0x6B, 0x06);
    let status = driver.read_power_status().unwrap();
    assert_eq!(status.clock_source, ClockSource::Internal20MHz);
}

#[test]
fn test_sleep_after_init() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();

    driver.sleep().unwrap();
    assert!(driver.read_power_status().unwrap().sleep);

    driver.wake_up().unwrap();
    assert!(!driver.read_power_status().unwrap().sleep);
    // Clock source from init survives the round trip
    assert_eq!(interface.get_register(0x6B), 0x01);
}
