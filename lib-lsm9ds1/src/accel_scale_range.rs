
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelScaleRange
{
    G2 = 0b00,
    G16 = 0b01,
    G4 = 0b10,
    G8 = 0b11,
}

impl AccelScaleRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `CTRL_REG6_XL` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 3
    }

    /// Gets the full scale range currently configured in the `CTRL_REG6_XL` register based on its
    /// contents.
    ///
    pub fn from_register(value: u8) -> Self {
        match (value >> 3) & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G16,
            0b10 => Self::G4,
            _ => Self::G8,
        }
    }

    /// Gets the sensitivity for the given scale range, in g/LSB.
    ///
    pub fn as_sensitivity(&self) -> f32 {
        match self {
            Self::G2 => 0.000061,
            Self::G4 => 0.000122,
            Self::G8 => 0.000244,
            Self::G16 => 0.000732,
        }
    }
}

impl Default for AccelScaleRange {
    fn default() -> Self {
        AccelScaleRange::G2
    }
}
