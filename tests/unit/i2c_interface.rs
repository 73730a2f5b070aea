//! Unit tests for the I2C register interface

use crate::common::test_utils::MockDelay;
use device_driver::RegisterInterface;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation as I2cOperation};
use mpu6500::{Error, I2cInterface, Mpu6500, Mpu6500Config};

/// One recorded I2C transaction
#[derive(Debug, Clone, PartialEq)]
enum Transfer {
    Write { address: u8, bytes: Vec<u8> },
    WriteRead { address: u8, bytes: Vec<u8>, read_len: usize },
}

/// Minimal I2C bus that records transfers and answers reads with a fill pattern
#[derive(Debug, Default)]
struct FakeBus {
    transfers: Vec<Transfer>,
    response: Vec<u8>,
    fail: Option<ErrorKind>,
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [I2cOperation<'_>],
    ) -> Result<(), Self::Error> {
        if let Some(error) = self.fail.take() {
            return Err(error);
        }

        match operations {
            [I2cOperation::Write(bytes)] => {
                self.transfers.push(Transfer::Write {
                    address,
                    bytes: bytes.to_vec(),
                });
            }
            [I2cOperation::Write(bytes), I2cOperation::Read(buffer)] => {
                for (i, byte) in buffer.iter_mut().enumerate() {
                    *byte = self.response.get(i).copied().unwrap_or(0);
                }
                self.transfers.push(Transfer::WriteRead {
                    address,
                    bytes: bytes.to_vec(),
                    read_len: buffer.len(),
                });
            }
            _ => panic!("unexpected transaction shape"),
        }
        Ok(())
    }
}

#[test]
fn test_addresses() {
    assert_eq!(I2cInterface::default(FakeBus::default()).address(), 0x68);
    assert_eq!(I2cInterface::alternative(FakeBus::default()).address(), 0x69);
    assert_eq!(I2cInterface::new(FakeBus::default(), 0x42).address(), 0x42);
}

#[test]
fn test_read_register_is_write_read() {
    let mut interface = I2cInterface::default(FakeBus {
        response: vec![0x70],
        ..Default::default()
    });

    let mut buffer = [0u8; 1];
    interface.read_register(0x75, 8, &mut buffer).unwrap();

    assert_eq!(buffer, [0x70]);
    let bus = interface.release();
    assert_eq!(
        bus.transfers,
        vec![Transfer::WriteRead {
            address: 0x68,
            bytes: vec![0x75],
            read_len: 1,
        }]
    );
}

#[test]
fn test_write_register_prefixes_address() {
    let mut interface = I2cInterface::alternative(FakeBus::default());

    interface.write_register(0x38, 8, &[0x01]).unwrap();

    let bus = interface.release();
    assert_eq!(
        bus.transfers,
        vec![Transfer::Write {
            address: 0x69,
            bytes: vec![0x38, 0x01],
        }]
    );
}

#[test]
fn test_write_register_largest_block() {
    let mut interface = I2cInterface::default(FakeBus::default());
    let data: Vec<u8> = (1..=16).collect();

    interface.write_register(0x13, 128, &data).unwrap();

    let bus = interface.release();
    let mut expected = vec![0x13];
    expected.extend_from_slice(&data);
    assert_eq!(
        bus.transfers,
        vec![Transfer::Write {
            address: 0x68,
            bytes: expected,
        }]
    );
}

#[test]
#[should_panic(expected = "exceeds 16 byte limit")]
#[cfg(debug_assertions)]
fn test_write_register_rejects_oversized_block() {
    let mut interface = I2cInterface::default(FakeBus::default());

    // Never silently truncated
    let _ = interface.write_register(0x13, 136, &[0u8; 17]);
}

#[test]
fn test_bus_error_passes_through() {
    let mut interface = I2cInterface::default(FakeBus {
        fail: Some(ErrorKind::Other),
        ..Default::default()
    });

    let mut buffer = [0u8; 2];
    assert_eq!(
        interface.read_register(0x41, 16, &mut buffer),
        Err(ErrorKind::Other)
    );
}

#[test]
fn test_driver_block_read_over_i2c() {
    let bus = FakeBus {
        response: vec![0x40, 0x00, 0x00, 0x00, 0xC0, 0x00],
        ..Default::default()
    };
    let mut imu = Mpu6500::new(I2cInterface::default(bus), Mpu6500Config::default());

    let raw = imu.read_raw_accel().unwrap();
    assert_eq!(raw.as_array(), [16384, 0, -16384]);

    let bus = imu.release().release();
    assert_eq!(
        bus.transfers,
        vec![Transfer::WriteRead {
            address: 0x68,
            bytes: vec![0x3B],
            read_len: 6,
        }]
    );
}

#[test]
fn test_driver_init_over_i2c() {
    let bus = FakeBus {
        response: vec![0x01],
        ..Default::default()
    };
    let mut imu = Mpu6500::new(I2cInterface::default(bus), Mpu6500Config::default());

    imu.init(&mut MockDelay).unwrap();

    let writes: Vec<_> = imu
        .release()
        .release()
        .transfers
        .into_iter()
        .filter_map(|transfer| match transfer {
            Transfer::Write { bytes, .. } => Some(bytes),
            Transfer::WriteRead { .. } => None,
        })
        .collect();
    assert_eq!(writes.first(), Some(&vec![0x6B, 0x80]));
    assert_eq!(writes.last(), Some(&vec![0x37, 0xB0]));
    assert_eq!(writes.len(), 8);
}

#[test]
fn test_driver_bus_error_wrapped() {
    let bus = FakeBus {
        fail: Some(ErrorKind::ArbitrationLoss),
        ..Default::default()
    };
    let mut imu = Mpu6500::new(I2cInterface::default(bus), Mpu6500Config::default());

    assert_eq!(
        imu.read_who_am_i(),
        Err(Error::Bus(ErrorKind::ArbitrationLoss))
    );
}
