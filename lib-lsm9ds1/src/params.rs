use crate::*;

/// Bus addresses and per-channel settings the driver applies during `init`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params
{
    /// i2c address of the accelerometer/gyroscope part.
    pub ag_address: u8,

    /// i2c address of the magnetometer part.
    pub mag_address: u8,

    pub accel_rate: AccelDataRate,
    pub accel_scale: AccelScaleRange,

    pub gyro_rate: GyroDataRate,
    pub gyro_scale: GyroScaleRange,

    pub mag_rate: MagDataRate,
    pub mag_scale: MagScaleRange,
}

impl Params
{
    /// Rejects settings the motion detection cannot work with. Only the accelerometer and
    /// gyroscope take part in classification, so those two must not be powered down.
    ///
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.accel_rate == AccelDataRate::PowerDown {
            return Err("accelerometer output data rate is power-down");
        }
        if self.gyro_rate == GyroDataRate::PowerDown {
            return Err("gyroscope output data rate is power-down");
        }
        if self.gyro_rate.as_hz() < motion::SAMPLE_RATE {
            log::warn!(
                "Gyroscope output data rate {} Hz is below the {} Hz sampling loop, samples will repeat",
                self.gyro_rate.as_hz(), motion::SAMPLE_RATE
            );
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            ag_address: LSM9DS1_DEFAULT_AG_ADDR,
            mag_address: LSM9DS1_DEFAULT_MAG_ADDR,
            accel_rate: AccelDataRate::Hz119,
            accel_scale: AccelScaleRange::G2,
            gyro_rate: GyroDataRate::Hz119,
            gyro_scale: GyroScaleRange::D245,
            mag_rate: MagDataRate::Hz80,
            mag_scale: MagScaleRange::Gauss4,
        }
    }
}
