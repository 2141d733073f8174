use math::Vector;
use motion::SensorChannel;

use crate::{registers::*, AccelScaleRange, Delay, Error, GyroScaleRange, MagScaleRange, Params, RegisterBus};
use crate::{LSM9DS1_AG_DEVICE_ID, LSM9DS1_MAG_DEVICE_ID, LSM9DS1_REBOOT_WAIT_MS};
use crate::utils::*;

pub struct Lsm9ds1<B: RegisterBus, D: Delay>
{
    /// Bus that we actually use to communicate with the LSM9DS1 chip.
    bus: B,

    // Used to wait for the chip to come back after a reboot.
    delay: D,

    params: Params,
}

impl<B: RegisterBus, D: Delay> Lsm9ds1<B, D>
{
    /// Create a new LSM9DS1 instance on the given bus. Nothing is sent to the chip until
    /// [`Self::init`] is called.
    ///
    pub fn new(bus: B, delay: D, params: Params) -> Self {
        Lsm9ds1 { bus, delay, params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Gives back the bus and delay, e.g. to hand the bus to another driver.
    ///
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Reboots the chip, checks both identity registers and applies the configured data rates and
    /// scale ranges. Every control register is read back afterwards so a configuration that did
    /// not stick is reported rather than silently producing wrongly scaled readings.
    ///
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        self.params.validate().map_err(Error::InvalidParams)?;

        log::info!("Rebooting LSM9DS1");
        self.write_ag(CTRL_REG8, CTRL_REG8_BOOT)?;
        self.delay.delay_ms(LSM9DS1_REBOOT_WAIT_MS);

        self.check_identity()?;

        let config = self.control_registers();
        for &(address, register, value) in config.iter() {
            self.bus.write_register(address, register, value)?;
        }
        for &(address, register, expected) in config.iter() {
            let found = self.bus.read_register(address, register)?;
            if found != expected {
                log::error!("LSM9DS1 register {:#04x} reads {:#04x}, expected {:#04x}", register, found, expected);
                return Err(Error::Config { register, expected, found });
            }
        }

        log::info!("LSM9DS1 configured: {:?}", self.params);
        Ok(())
    }

    /// Checks that both parts of the chip answer with their expected device IDs.
    ///
    pub fn check_identity(&mut self) -> Result<(), Error<B::Error>> {
        let found = self.bus.read_register(self.params.ag_address, WHO_AM_I)?;
        if found != LSM9DS1_AG_DEVICE_ID {
            log::error!("Unexpected accelerometer/gyroscope device id {:#04x}", found);
            return Err(Error::WrongDevice { register: WHO_AM_I, expected: LSM9DS1_AG_DEVICE_ID, found });
        }

        let found = self.bus.read_register(self.params.mag_address, WHO_AM_I_M)?;
        if found != LSM9DS1_MAG_DEVICE_ID {
            log::error!("Unexpected magnetometer device id {:#04x}", found);
            return Err(Error::WrongDevice { register: WHO_AM_I_M, expected: LSM9DS1_MAG_DEVICE_ID, found });
        }
        Ok(())
    }

    /// Control register contents for the current params, in the order they are written.
    ///
    fn control_registers(&self) -> [(u8, u8, u8); 8] {
        let ag = self.params.ag_address;
        let mag = self.params.mag_address;
        [
            (ag, CTRL_REG8, CTRL_REG8_BDU | CTRL_REG8_IF_ADD_INC),
            (ag, CTRL_REG1_G, self.params.gyro_rate.as_register() | self.params.gyro_scale.as_register()),
            (ag, CTRL_REG6_XL, self.params.accel_rate.as_register() | self.params.accel_scale.as_register()),
            (mag, CTRL_REG1_M, CTRL_REG1_M_TEMP_COMP | CTRL_REG1_M_OM_UHP | self.params.mag_rate.as_register()),
            (mag, CTRL_REG2_M, self.params.mag_scale.as_register()),
            (mag, CTRL_REG3_M, CTRL_REG3_M_MD_CONTINUOUS),
            (mag, CTRL_REG4_M, CTRL_REG4_M_OMZ_UHP),
            (mag, CTRL_REG5_M, CTRL_REG5_M_BDU),
        ]
    }

    /// Get the current accelerometer sensor values (in g).
    ///
    pub fn read_acc(&mut self) -> Result<Vector, Error<B::Error>> {
        let raw = self.read_raw_vector(self.params.ag_address, OUT_X_L_XL)?;
        Ok(raw * self.params.accel_scale.as_sensitivity())
    }

    /// Get the current gyroscope sensor values (in deg/s).
    ///
    pub fn read_gyro(&mut self) -> Result<Vector, Error<B::Error>> {
        let raw = self.read_raw_vector(self.params.ag_address, OUT_X_L_G)?;
        Ok(raw * self.params.gyro_scale.as_sensitivity())
    }

    /// Get the current magnetometer sensor values (in gauss).
    ///
    pub fn read_mag(&mut self) -> Result<Vector, Error<B::Error>> {
        let raw = self.read_raw_vector(self.params.mag_address, OUT_X_L_M | MAG_AUTO_INCREMENT)?;
        Ok(raw * self.params.mag_scale.as_sensitivity())
    }

    /// Get temperature of the on chip temperature sensor, result is returned in degrees celsius.
    ///
    pub fn read_temp(&mut self) -> Result<f32, Error<B::Error>> {
        let mut data = [ 0u8; 2 ];
        self.bus.read_registers(self.params.ag_address, OUT_TEMP_L, &mut data)?;
        // 16 LSB per degree, zero reads as 25 degrees.
        Ok(i16::from_le_bytes(data) as f32 / 16.0 + 25.0)
    }

    pub fn get_accel_scale(&mut self) -> Result<AccelScaleRange, Error<B::Error>> {
        let value = self.bus.read_register(self.params.ag_address, CTRL_REG6_XL)?;
        Ok(AccelScaleRange::from_register(value))
    }

    /// Returns `None` when the chip is set to the reserved scale range.
    ///
    pub fn get_gyro_scale(&mut self) -> Result<Option<GyroScaleRange>, Error<B::Error>> {
        let value = self.bus.read_register(self.params.ag_address, CTRL_REG1_G)?;
        Ok(GyroScaleRange::from_register(value))
    }

    pub fn get_mag_scale(&mut self) -> Result<MagScaleRange, Error<B::Error>> {
        let value = self.bus.read_register(self.params.mag_address, CTRL_REG2_M)?;
        Ok(MagScaleRange::from_register(value))
    }

    pub fn acc_power_down(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering down accelerometer");
        self.update_register(self.params.ag_address, CTRL_REG6_XL, ODR_MASK, 0)
    }

    pub fn acc_power_up(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering up accelerometer");
        let odr = self.params.accel_rate.as_register();
        self.update_register(self.params.ag_address, CTRL_REG6_XL, ODR_MASK, odr)
    }

    pub fn gyro_power_down(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering down gyroscope");
        self.update_register(self.params.ag_address, CTRL_REG1_G, ODR_MASK, 0)
    }

    pub fn gyro_power_up(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering up gyroscope");
        let odr = self.params.gyro_rate.as_register();
        self.update_register(self.params.ag_address, CTRL_REG1_G, ODR_MASK, odr)
    }

    pub fn mag_power_down(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering down magnetometer");
        self.update_register(self.params.mag_address, CTRL_REG3_M, CTRL_REG3_M_MD_MASK, CTRL_REG3_M_MD_POWER_DOWN)
    }

    pub fn mag_power_up(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Powering up magnetometer");
        self.update_register(self.params.mag_address, CTRL_REG3_M, CTRL_REG3_M_MD_MASK, CTRL_REG3_M_MD_CONTINUOUS)
    }

    /// Read-modify-write of the bits selected by `mask`.
    ///
    fn update_register(&mut self, address: u8, register: u8, mask: u8, bits: u8) -> Result<(), Error<B::Error>> {
        let state = self.bus.read_register(address, register)?;
        let state = (state & !mask) | (bits & mask);
        self.bus.write_register(address, register, state)?;
        Ok(())
    }

    fn write_ag(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.bus.write_register(self.params.ag_address, register, value)?;
        Ok(())
    }

    /// Reads the six output registers of one channel in a single burst.
    ///
    fn read_raw_vector(&mut self, address: u8, register: u8) -> Result<Vector, Error<B::Error>> {
        let mut data = [ 0u8; 6 ];
        self.bus.read_registers(address, register, &mut data)?;
        Ok(vector_from_le_bytes(&data))
    }
}

impl<B: RegisterBus, D: Delay> SensorChannel for Lsm9ds1<B, D>
{
    type Error = Error<B::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        Lsm9ds1::init(self)
    }

    fn read_acc(&mut self) -> Result<Vector, Self::Error> {
        Lsm9ds1::read_acc(self)
    }

    fn read_gyro(&mut self) -> Result<Vector, Self::Error> {
        Lsm9ds1::read_gyro(self)
    }

    fn read_mag(&mut self) -> Result<Vector, Self::Error> {
        Lsm9ds1::read_mag(self)
    }
}
