//! Register definitions for the MPU-6500
//!
//! The MPU-6500 exposes a flat 7-bit register space (0x00-0x7E). Two views are provided:
//!
//! - [`Register`]: every documented register address, for completeness and raw access.
//! - [`Mpu6500`]: a `device-driver` register device with named bit fields for the
//!   registers the driver actually touches. Read-modify-write sequences go through
//!   these field sets so sibling bits are preserved.
//!
//! Sensor output registers are read as big-endian blocks starting at
//! [`ACCEL_XOUT_H`], [`TEMP_OUT_H`] and [`GYRO_XOUT_H`].

/// First accelerometer output register (6 bytes: X/Y/Z, high byte first)
pub const ACCEL_XOUT_H: u8 = Register::AccelXoutH.addr();

/// First temperature output register (2 bytes, high byte first)
pub const TEMP_OUT_H: u8 = Register::TempOutH.addr();

/// First gyroscope output register (6 bytes: X/Y/Z, high byte first)
pub const GYRO_XOUT_H: u8 = Register::GyroXoutH.addr();

device_driver::create_device!(
    device_name: Mpu6500,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// CONFIG - Gyroscope DLPF and FSYNC configuration (0x1A)
        register DlpfConfig {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            /// Gyroscope and temperature DLPF setting
            dlpf_cfg: uint = 0..3,
            /// FSYNC pin sampling
            ext_sync_set: uint = 3..6,
            /// FIFO mode (stop writing when full)
            fifo_mode: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// GYRO_CONFIG - Gyroscope Configuration (0x1B)
        register GyroConfig {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            /// DLPF bypass (inverted FCHOICE)
            fchoice_b: uint = 0..2,
            reserved_2: uint = 2..3,
            /// Full-scale select (0=±250, 1=±500, 2=±1000, 3=±2000 dps)
            gyro_fs_sel: uint = 3..5,
            /// Z-axis self-test
            zg_st: bool = 5,
            /// Y-axis self-test
            yg_st: bool = 6,
            /// X-axis self-test
            xg_st: bool = 7,
        },

        /// ACCEL_CONFIG - Accelerometer Configuration (0x1C)
        register AccelConfig {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Full-scale select (0=±2g, 1=±4g, 2=±8g, 3=±16g)
            accel_fs_sel: uint = 3..5,
            /// Z-axis self-test
            az_st_en: bool = 5,
            /// Y-axis self-test
            ay_st_en: bool = 6,
            /// X-axis self-test
            ax_st_en: bool = 7,
        },

        /// ACCEL_CONFIG_2 - Accelerometer DLPF Configuration (0x1D)
        register AccelConfig2 {
            const ADDRESS = 0x1D;
            const SIZE_BITS = 8;

            /// Accelerometer DLPF setting
            a_dlpf_cfg: uint = 0..3,
            /// DLPF bypass (inverted FCHOICE)
            accel_fchoice_b: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// INT_PIN_CFG - Interrupt Pin Configuration (0x37)
        register IntPinCfg {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// I2C bypass enable
            bypass_en: bool = 1,
            /// FSYNC interrupt mode
            fsync_int_mode_en: bool = 2,
            /// FSYNC active low
            actl_fsync: bool = 3,
            /// Interrupt status cleared on any read
            int_anyrd_2clear: bool = 4,
            /// Latch interrupt until cleared
            latch_int_en: bool = 5,
            /// Open drain output
            open: bool = 6,
            /// Active low
            actl: bool = 7,
        },

        /// INT_ENABLE - Interrupt Enable (0x38)
        register IntEnable {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            /// Raw sensor data ready interrupt
            raw_rdy_en: bool = 0,
            reserved_2_1: uint = 1..3,
            /// FSYNC interrupt
            fsync_int_en: bool = 3,
            /// FIFO overflow interrupt
            fifo_oflow_en: bool = 4,
            reserved_5: uint = 5..6,
            /// Wake on motion interrupt
            wom_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT_STATUS - Interrupt Status (0x3A)
        register IntStatus {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;

            /// New sensor data available
            raw_data_rdy_int: bool = 0,
            reserved_2_1: uint = 1..3,
            /// FSYNC interrupt occurred
            fsync_int: bool = 3,
            /// FIFO overflow occurred
            fifo_oflow_int: bool = 4,
            reserved_5: uint = 5..6,
            /// Wake on motion occurred
            wom_int: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// PWR_MGMT_1 - Power Management 1 (0x6B)
        register PwrMgmt1 {
            const ADDRESS = 0x6B;
            const SIZE_BITS = 8;

            /// Clock source select (0=internal 20MHz, 1-5=auto select best, 7=stop)
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            /// Gyroscope drive and PLL kept on, sense paths disabled
            gyro_standby: bool = 4,
            /// Cycle between sleep and single samples
            cycle: bool = 5,
            /// Sleep mode enable
            sleep: bool = 6,
            /// Device reset (self-clearing)
            device_reset: bool = 7,
        },

        /// PWR_MGMT_2 - Power Management 2 (0x6C)
        register PwrMgmt2 {
            const ADDRESS = 0x6C;
            const SIZE_BITS = 8;

            /// Disable gyroscope Z-axis
            disable_zg: bool = 0,
            /// Disable gyroscope Y-axis
            disable_yg: bool = 1,
            /// Disable gyroscope X-axis
            disable_xg: bool = 2,
            /// Disable accelerometer Z-axis
            disable_za: bool = 3,
            /// Disable accelerometer Y-axis
            disable_ya: bool = 4,
            /// Disable accelerometer X-axis
            disable_xa: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// WHO_AM_I - Device ID Register (0x75)
        /// Expected value: 0x70
        register WhoAmI {
            const ADDRESS = 0x75;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x70)
            who_am_i: uint = 0..8,
        },
    }
);

/// MPU-6500 register addresses
///
/// Registers not modeled by [`Mpu6500`] are listed here so raw accesses can be
/// expressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Register {
    // Self-test
    SelfTestXGyro = 0x00,
    SelfTestYGyro = 0x01,
    SelfTestZGyro = 0x02,
    SelfTestXAccel = 0x0D,
    SelfTestYAccel = 0x0E,
    SelfTestZAccel = 0x0F,

    // Gyroscope offset cancellation
    XgOffsetH = 0x13,
    XgOffsetL = 0x14,
    YgOffsetH = 0x15,
    YgOffsetL = 0x16,
    ZgOffsetH = 0x17,
    ZgOffsetL = 0x18,

    // Configuration
    SmplrtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    AccelConfig2 = 0x1D,
    LpAccelOdr = 0x1E,
    WomThr = 0x1F,
    FifoEn = 0x23,

    // I2C master
    I2cMstCtrl = 0x24,
    I2cSlv0Addr = 0x25,
    I2cSlv0Reg = 0x26,
    I2cSlv0Ctrl = 0x27,
    I2cSlv1Addr = 0x28,
    I2cSlv1Reg = 0x29,
    I2cSlv1Ctrl = 0x2A,
    I2cSlv2Addr = 0x2B,
    I2cSlv2Reg = 0x2C,
    I2cSlv2Ctrl = 0x2D,
    I2cSlv3Addr = 0x2E,
    I2cSlv3Reg = 0x2F,
    I2cSlv3Ctrl = 0x30,
    I2cSlv4Addr = 0x31,
    I2cSlv4Reg = 0x32,
    I2cSlv4Do = 0x33,
    I2cSlv4Ctrl = 0x34,
    I2cSlv4Di = 0x35,
    I2cMstStatus = 0x36,

    // Interrupts
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,

    // Sensor outputs
    AccelXoutH = 0x3B,
    AccelXoutL = 0x3C,
    AccelYoutH = 0x3D,
    AccelYoutL = 0x3E,
    AccelZoutH = 0x3F,
    AccelZoutL = 0x40,
    TempOutH = 0x41,
    TempOutL = 0x42,
    GyroXoutH = 0x43,
    GyroXoutL = 0x44,
    GyroYoutH = 0x45,
    GyroYoutL = 0x46,
    GyroZoutH = 0x47,
    GyroZoutL = 0x48,

    // External sensor data
    ExtSensData00 = 0x49,
    ExtSensData01 = 0x4A,
    ExtSensData02 = 0x4B,
    ExtSensData03 = 0x4C,
    ExtSensData04 = 0x4D,
    ExtSensData05 = 0x4E,
    ExtSensData06 = 0x4F,
    ExtSensData07 = 0x50,
    ExtSensData08 = 0x51,
    ExtSensData09 = 0x52,
    ExtSensData10 = 0x53,
    ExtSensData11 = 0x54,
    ExtSensData12 = 0x55,
    ExtSensData13 = 0x56,
    ExtSensData14 = 0x57,
    ExtSensData15 = 0x58,
    ExtSensData16 = 0x59,
    ExtSensData17 = 0x5A,
    ExtSensData18 = 0x5B,
    ExtSensData19 = 0x5C,
    ExtSensData20 = 0x5D,
    ExtSensData21 = 0x5E,
    ExtSensData22 = 0x5F,
    ExtSensData23 = 0x60,

    // I2C slave data out
    I2cSlv0Do = 0x63,
    I2cSlv1Do = 0x64,
    I2cSlv2Do = 0x65,
    I2cSlv3Do = 0x66,
    I2cMstDelayCtrl = 0x67,

    // Reset, control and power
    SignalPathReset = 0x68,
    AccelIntelCtrl = 0x69,
    UserCtrl = 0x6A,
    PwrMgmt1 = 0x6B,
    PwrMgmt2 = 0x6C,

    // FIFO
    FifoCountH = 0x72,
    FifoCountL = 0x73,
    FifoRW = 0x74,

    // Identity
    WhoAmI = 0x75,

    // Accelerometer offset cancellation
    XaOffsetH = 0x77,
    XaOffsetL = 0x78,
    YaOffsetH = 0x7A,
    YaOffsetL = 0x7B,
    ZaOffsetH = 0x7D,
    ZaOffsetL = 0x7E,
}

impl Register {
    /// Register address on the bus
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}
