#![cfg_attr(not(test), no_std)]

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod mag_scale_range;
pub use mag_scale_range::*;

pub mod data_rate;
pub use data_rate::*;

pub mod params;
pub use params::*;

pub mod bus;
pub use bus::*;

pub mod error;
pub use error::*;

pub mod registers;

pub mod lsm9ds1;
pub use lsm9ds1::*;

mod utils;

#[cfg(test)]
mod tests;

/// Default i2c address of the accelerometer/gyroscope part (SDO_A/G pulled high).
///
pub const LSM9DS1_DEFAULT_AG_ADDR: u8 = 0x6B;

/// Default i2c address of the magnetometer part (SDO_M pulled high).
///
pub const LSM9DS1_DEFAULT_MAG_ADDR: u8 = 0x1E;

/// Contents of `WHO_AM_I` on the accelerometer/gyroscope part.
///
pub const LSM9DS1_AG_DEVICE_ID: u8 = 0x68;

/// Contents of `WHO_AM_I_M` on the magnetometer part.
///
pub const LSM9DS1_MAG_DEVICE_ID: u8 = 0x3D;

/// In milliseconds; how long the chip needs to reload its trimming parameters after a reboot.
///
pub const LSM9DS1_REBOOT_WAIT_MS: u32 = 15;
