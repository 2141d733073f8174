use core::fmt::Debug;

/// Register level access to a device on a shared bus. Every call is one complete bus transaction,
/// so a multi register read can not be interleaved with traffic from anyone else.
///
pub trait RegisterBus
{
    type Error: Debug;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads `buffer.len()` consecutive registers starting at `register`.
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut state = [ 0u8 ];
        self.read_registers(address, register, &mut state)?;
        Ok(state[0])
    }
}

pub trait Delay
{
    fn delay_ms(&mut self, ms: u32);
}

#[cfg(feature = "hal")]
mod hal_bus {
    use hal::i2c::master::{Error, I2c, Instance};
    use hal::delay::Delay as HalDelay;
    use hal::Blocking;

    impl<T: Instance> super::RegisterBus for I2c<'_, Blocking, T>
    {
        type Error = Error;

        fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Error> {
            self.write(address, &[ register, value ])
        }

        fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Error> {
            self.write_read(address, &[ register ], buffer)
        }
    }

    impl super::Delay for HalDelay
    {
        fn delay_ms(&mut self, ms: u32) {
            self.delay_millis(ms);
        }
    }
}
