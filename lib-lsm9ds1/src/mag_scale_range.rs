
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagScaleRange
{
    Gauss4 = 0b00,
    Gauss8 = 0b01,
    Gauss12 = 0b10,
    Gauss16 = 0b11,
}

impl MagScaleRange {

    /// Bits to write into `CTRL_REG2_M` for this scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 5
    }

    pub fn from_register(value: u8) -> Self {
        match (value >> 5) & 0b11 {
            0b00 => Self::Gauss4,
            0b01 => Self::Gauss8,
            0b10 => Self::Gauss12,
            _ => Self::Gauss16,
        }
    }

    /// Gets the sensitivity for the given scale range, in gauss/LSB.
    ///
    pub fn as_sensitivity(&self) -> f32 {
        match self {
            Self::Gauss4 => 0.00014,
            Self::Gauss8 => 0.00029,
            Self::Gauss12 => 0.00043,
            Self::Gauss16 => 0.00058,
        }
    }
}

impl Default for MagScaleRange {
    fn default() -> Self {
        MagScaleRange::Gauss4
    }
}
