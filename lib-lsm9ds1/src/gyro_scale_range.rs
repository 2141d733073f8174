
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D245 = 0b00,
    D500 = 0b01,
    // 0b10 is not available on this chip.
    D2000 = 0b11,
}

impl GyroScaleRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `CTRL_REG1_G` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 3
    }

    /// Gets the full scale range currently configured in the `CTRL_REG1_G` register based on its
    /// contents, or `None` for the reserved setting.
    ///
    pub fn from_register(value: u8) -> Option<Self> {
        match (value >> 3) & 0b11 {
            0b00 => Some(Self::D245),
            0b01 => Some(Self::D500),
            0b11 => Some(Self::D2000),
            _ => None,
        }
    }

    /// Gets the sensitivity for the given scale range, in (deg/s)/LSB.
    ///
    pub fn as_sensitivity(&self) -> f32 {
        match self {
            Self::D245 => 0.00875,
            Self::D500 => 0.0175,
            Self::D2000 => 0.07,
        }
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        GyroScaleRange::D245
    }
}
