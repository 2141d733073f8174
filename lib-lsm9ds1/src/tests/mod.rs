use std::{collections::HashMap, sync::{Arc, Mutex}};
use crate::{*, registers::*};

mod driver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBusError
{
    Nack,

    /// Multi byte read from the magnetometer without the auto-increment bit set.
    NoAutoIncrement,
}

/// Register map of a simulated chip, shared between the bus handed to the driver and the test.
///
#[derive(Debug, Default)]
pub struct FakeChip
{
    pub registers: HashMap<(u8, u8), u8>,

    /// Every write in the order it was issued.
    pub writes: Vec<(u8, u8, u8)>,

    /// Writes to this register are acknowledged but not stored.
    pub read_only: Option<(u8, u8)>,

    pub fail: bool,
}

impl FakeChip
{
    pub fn lsm9ds1() -> Self {
        let mut chip = FakeChip::default();
        chip.registers.insert((LSM9DS1_DEFAULT_AG_ADDR, WHO_AM_I), LSM9DS1_AG_DEVICE_ID);
        chip.registers.insert((LSM9DS1_DEFAULT_MAG_ADDR, WHO_AM_I_M), LSM9DS1_MAG_DEVICE_ID);
        chip
    }

    pub fn get(&self, address: u8, register: u8) -> u8 {
        self.registers.get(&(address, register)).copied().unwrap_or(0)
    }

    pub fn set(&mut self, address: u8, register: u8, value: u8) {
        self.registers.insert((address, register), value);
    }

    /// Stores a little endian i16 in `register` and the register after it.
    pub fn set_i16(&mut self, address: u8, register: u8, value: i16) {
        let [low, high] = value.to_le_bytes();
        self.set(address, register, low);
        self.set(address, register + 1, high);
    }
}

#[derive(Clone)]
pub struct FakeBus
{
    pub chip: Arc<Mutex<FakeChip>>,
}

impl FakeBus
{
    pub fn new(chip: FakeChip) -> Self {
        FakeBus { chip: Arc::new(Mutex::new(chip)) }
    }
}

impl RegisterBus for FakeBus
{
    type Error = FakeBusError;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        let mut chip = self.chip.lock().unwrap();
        if chip.fail {
            return Err(FakeBusError::Nack);
        }
        chip.writes.push((address, register, value));
        if chip.read_only != Some((address, register)) {
            chip.set(address, register, value);
        }
        Ok(())
    }

    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let chip = self.chip.lock().unwrap();
        if chip.fail {
            return Err(FakeBusError::Nack);
        }

        let mut register = register;
        if address == LSM9DS1_DEFAULT_MAG_ADDR {
            if buffer.len() > 1 && register & MAG_AUTO_INCREMENT == 0 {
                return Err(FakeBusError::NoAutoIncrement);
            }
            register &= !MAG_AUTO_INCREMENT;
        }

        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = chip.get(address, register + i as u8);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeDelay
{
    pub waits: Arc<Mutex<Vec<u32>>>,
}

impl Delay for FakeDelay
{
    fn delay_ms(&mut self, ms: u32) {
        self.waits.lock().unwrap().push(ms);
    }
}

pub fn driver(chip: FakeChip) -> (Lsm9ds1<FakeBus, FakeDelay>, Arc<Mutex<FakeChip>>, FakeDelay) {
    let bus = FakeBus::new(chip);
    let state = bus.chip.clone();
    let delay = FakeDelay::default();
    (Lsm9ds1::new(bus, delay.clone(), Params::default()), state, delay)
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5
}
