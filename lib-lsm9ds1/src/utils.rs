use math::Vector;

/// Interprets six output registers (X, Y, Z; low byte first) as a raw i16 vector.
///
#[inline]
pub fn vector_from_le_bytes(data: &[u8; 6]) -> Vector {
    Vector {
        x: i16::from_le_bytes([data[0], data[1]]) as f32,
        y: i16::from_le_bytes([data[2], data[3]]) as f32,
        z: i16::from_le_bytes([data[4], data[5]]) as f32,
    }
}
