
/// Output data rate of the gyroscope. While the gyroscope is active the accelerometer samples at
/// this same rate.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroDataRate {
    PowerDown = 0b000,
    Hz14_9 = 0b001,
    Hz59_5 = 0b010,
    Hz119 = 0b011,
    Hz238 = 0b100,
    Hz476 = 0b101,
    Hz952 = 0b110,
}

impl GyroDataRate {
    /// Bits for the ODR_G field of `CTRL_REG1_G`.
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 5
    }

    pub fn as_hz(&self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz14_9 => 14.9,
            Self::Hz59_5 => 59.5,
            Self::Hz119 => 119.0,
            Self::Hz238 => 238.0,
            Self::Hz476 => 476.0,
            Self::Hz952 => 952.0,
        }
    }
}

/// Output data rate of the accelerometer when it runs on its own.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelDataRate {
    PowerDown = 0b000,
    Hz10 = 0b001,
    Hz50 = 0b010,
    Hz119 = 0b011,
    Hz238 = 0b100,
    Hz476 = 0b101,
    Hz952 = 0b110,
}

impl AccelDataRate {
    /// Bits for the ODR_XL field of `CTRL_REG6_XL`.
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 5
    }

    pub fn as_hz(&self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz10 => 10.0,
            Self::Hz50 => 50.0,
            Self::Hz119 => 119.0,
            Self::Hz238 => 238.0,
            Self::Hz476 => 476.0,
            Self::Hz952 => 952.0,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagDataRate {
    Hz0_625 = 0b000,
    Hz1_25 = 0b001,
    Hz2_5 = 0b010,
    Hz5 = 0b011,
    Hz10 = 0b100,
    Hz20 = 0b101,
    Hz40 = 0b110,
    Hz80 = 0b111,
}

impl MagDataRate {
    /// Bits for the DO field of `CTRL_REG1_M`.
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 2
    }

    pub fn as_hz(&self) -> f32 {
        match self {
            Self::Hz0_625 => 0.625,
            Self::Hz1_25 => 1.25,
            Self::Hz2_5 => 2.5,
            Self::Hz5 => 5.0,
            Self::Hz10 => 10.0,
            Self::Hz20 => 20.0,
            Self::Hz40 => 40.0,
            Self::Hz80 => 80.0,
        }
    }
}
