// Accelerometer and gyroscope registers.

pub const ACT_THS: u8 = 0x04;
pub const ACT_DUR: u8 = 0x05;
pub const INT1_CTRL: u8 = 0x0C;
pub const INT2_CTRL: u8 = 0x0D;

pub const WHO_AM_I: u8 = 0x0F;

pub const CTRL_REG1_G: u8 = 0x10; //[7:5] ODR_G, [4:3] FS_G, [1:0] BW_G
pub const CTRL_REG2_G: u8 = 0x11;
pub const CTRL_REG3_G: u8 = 0x12;
pub const ORIENT_CFG_G: u8 = 0x13;

pub const OUT_TEMP_L: u8 = 0x15;
pub const OUT_TEMP_H: u8 = 0x16;
pub const STATUS_REG: u8 = 0x17;

pub const OUT_X_L_G: u8 = 0x18;
pub const OUT_X_H_G: u8 = 0x19;
pub const OUT_Y_L_G: u8 = 0x1A;
pub const OUT_Y_H_G: u8 = 0x1B;
pub const OUT_Z_L_G: u8 = 0x1C;
pub const OUT_Z_H_G: u8 = 0x1D;

pub const CTRL_REG4: u8 = 0x1E;
pub const CTRL_REG5_XL: u8 = 0x1F;
pub const CTRL_REG6_XL: u8 = 0x20; //[7:5] ODR_XL, [4:3] FS_XL, [2] BW_SCAL_ODR, [1:0] BW_XL
pub const CTRL_REG7_XL: u8 = 0x21;
pub const CTRL_REG8: u8 = 0x22; //[7] BOOT, [6] BDU, [2] IF_ADD_INC, [0] SW_RESET
pub const CTRL_REG9: u8 = 0x23;
pub const CTRL_REG10: u8 = 0x24;

pub const OUT_X_L_XL: u8 = 0x28;
pub const OUT_X_H_XL: u8 = 0x29;
pub const OUT_Y_L_XL: u8 = 0x2A;
pub const OUT_Y_H_XL: u8 = 0x2B;
pub const OUT_Z_L_XL: u8 = 0x2C;
pub const OUT_Z_H_XL: u8 = 0x2D;

pub const FIFO_CTRL: u8 = 0x2E;
pub const FIFO_SRC: u8 = 0x2F;

// Magnetometer registers, these live behind a separate i2c address.

pub const OFFSET_X_REG_L_M: u8 = 0x05;
pub const OFFSET_X_REG_H_M: u8 = 0x06;
pub const OFFSET_Y_REG_L_M: u8 = 0x07;
pub const OFFSET_Y_REG_H_M: u8 = 0x08;
pub const OFFSET_Z_REG_L_M: u8 = 0x09;
pub const OFFSET_Z_REG_H_M: u8 = 0x0A;

pub const WHO_AM_I_M: u8 = 0x0F;

pub const CTRL_REG1_M: u8 = 0x20; //[7] TEMP_COMP, [6:5] OM, [4:2] DO
pub const CTRL_REG2_M: u8 = 0x21; //[6:5] FS
pub const CTRL_REG3_M: u8 = 0x22; //[1:0] MD
pub const CTRL_REG4_M: u8 = 0x23; //[3:2] OMZ
pub const CTRL_REG5_M: u8 = 0x24; //[6] BDU

pub const STATUS_REG_M: u8 = 0x27;

pub const OUT_X_L_M: u8 = 0x28;
pub const OUT_X_H_M: u8 = 0x29;
pub const OUT_Y_L_M: u8 = 0x2A;
pub const OUT_Y_H_M: u8 = 0x2B;
pub const OUT_Z_L_M: u8 = 0x2C;
pub const OUT_Z_H_M: u8 = 0x2D;

pub const INT_CFG_M: u8 = 0x30;
pub const INT_SRC_M: u8 = 0x31;
pub const INT_THS_L_M: u8 = 0x32;
pub const INT_THS_H_M: u8 = 0x33;

// Bits.

pub const ODR_MASK: u8 = 0b1110_0000;

pub const CTRL_REG8_BOOT: u8 = 0b1000_0000;
pub const CTRL_REG8_BDU: u8 = 0b0100_0000;
pub const CTRL_REG8_IF_ADD_INC: u8 = 0b0000_0100;

pub const CTRL_REG1_M_TEMP_COMP: u8 = 0b1000_0000;
/// Ultra-high performance mode for the X and Y axes.
pub const CTRL_REG1_M_OM_UHP: u8 = 0b0110_0000;
/// Ultra-high performance mode for the Z axis.
pub const CTRL_REG4_M_OMZ_UHP: u8 = 0b0000_1100;
pub const CTRL_REG5_M_BDU: u8 = 0b0100_0000;

pub const CTRL_REG3_M_MD_MASK: u8 = 0b0000_0011;
pub const CTRL_REG3_M_MD_CONTINUOUS: u8 = 0b0000_0000;
pub const CTRL_REG3_M_MD_POWER_DOWN: u8 = 0b0000_0011;

/// The magnetometer only auto-increments the register address on multi byte reads when the MSB
/// of the sub-address is set.
pub const MAG_AUTO_INCREMENT: u8 = 0b1000_0000;
