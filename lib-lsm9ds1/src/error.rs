use core::{error::Error as CoreError, fmt};

#[derive(Debug)]
pub enum Error<E>
{
    /// A bus transaction failed.
    Bus(E),

    /// An identity register did not hold the expected device ID, i.e. the chip on the bus is not
    /// an LSM9DS1 (or nothing answers with a sensible value).
    WrongDevice { register: u8, expected: u8, found: u8 },

    /// A control register did not hold the value written to it during configuration.
    Config { register: u8, expected: u8, found: u8 },

    /// The requested parameters can not be applied.
    InvalidParams(&'static str),
}

impl<E: fmt::Debug> CoreError for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus error: {:?}", err),
            Self::WrongDevice { register, expected, found } => write!(
                f, "Unexpected device id in register {:#04x}: expected {:#04x}, found {:#04x}",
                register, expected, found
            ),
            Self::Config { register, expected, found } => write!(
                f, "Configuration of register {:#04x} did not stick: wrote {:#04x}, read back {:#04x}",
                register, expected, found
            ),
            Self::InvalidParams(reason) => write!(f, "Invalid parameters: {}", reason),
        }
    }
}

impl<E> From<E> for Error<E>
{
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}
