/// The parts of the protocol that differ between devices in the family.
///
/// A driver is generic over its variant, so a data rate is always looked up
/// in the table that belongs to the device on the bus.
pub trait Variant {
    /// Supported data rates (samples per second) and their 3-bit field codes.
    const DATA_RATES: &'static [(u16, u16)];

    /// Data rate used when none is given.
    const DEFAULT_DATA_RATE: u16 = 1600;

    /// Resolution of a conversion result in bits.
    const RESOLUTION_BITS: u32;

    /// Decodes the conversion register, given the bytes in the order they
    /// were received. The device sends the most significant byte first.
    fn decode(bytes: [u8; 2]) -> i16;

    /// Returns the field code for `rate`, if this variant supports it.
    fn data_rate_code(rate: u16) -> Option<u16> {
        Self::DATA_RATES
            .iter()
            .find(|(supported, _)| *supported == rate)
            .map(|(_, code)| *code)
    }
}

/// ADS1015: 12-bit results, 128 to 3300 samples per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fast;

/// ADS1115: 16-bit results, 8 to 860 samples per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slow;

impl Variant for Fast {
    const DATA_RATES: &'static [(u16, u16)] = &[
        (128, 0b000),
        (250, 0b001),
        (490, 0b010),
        (920, 0b011),
        (1600, 0b100),
        (2400, 0b101),
        (3300, 0b110),
    ];

    const RESOLUTION_BITS: u32 = 12;

    fn decode([high, low]: [u8; 2]) -> i16 {
        let value = ((high as i16) << 4) | ((low as i16) >> 4);

        if value & 0x800 != 0 {
            value - (1 << 12)
        } else {
            value
        }
    }
}

impl Variant for Slow {
    const DATA_RATES: &'static [(u16, u16)] = &[
        (8, 0b000),
        (16, 0b001),
        (32, 0b010),
        (64, 0b011),
        (128, 0b100),
        (250, 0b101),
        (475, 0b110),
        (860, 0b111),
    ];

    const RESOLUTION_BITS: u32 = 16;

    fn decode(bytes: [u8; 2]) -> i16 {
        i16::from_be_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Register image the ADS1015 produces for a 12-bit result.
    fn fast_image(value: i16) -> [u8; 2] {
        ((value as u16) << 4).to_be_bytes()
    }

    #[test]
    fn fast_decode_round_trip() {
        for value in -2048..=2047 {
            assert_eq!(Fast::decode(fast_image(value)), value);
        }
    }

    #[test]
    fn fast_decode_ignores_low_nibble() {
        assert_eq!(Fast::decode([0x7F, 0xFF]), 2047);
        assert_eq!(Fast::decode([0x80, 0x0F]), -2048);
    }

    #[test]
    fn slow_decode_round_trip() {
        for value in i16::MIN..=i16::MAX {
            assert_eq!(Slow::decode(value.to_be_bytes()), value);
        }
    }

    #[test]
    fn decode_spans_resolution() {
        let fast_max = (1 << (Fast::RESOLUTION_BITS - 1)) - 1;
        let slow_max = (1i32 << (Slow::RESOLUTION_BITS - 1)) - 1;

        assert_eq!(Fast::decode([0x7F, 0xF0]) as i32, fast_max);
        assert_eq!(Fast::decode([0x80, 0x00]) as i32, -fast_max - 1);
        assert_eq!(Slow::decode([0x7F, 0xFF]) as i32, slow_max);
        assert_eq!(Slow::decode([0x80, 0x00]) as i32, -slow_max - 1);
    }

    #[test]
    fn data_rate_codes() {
        assert_eq!(Fast::data_rate_code(1600), Some(0b100));
        assert_eq!(Fast::data_rate_code(3300), Some(0b110));
        assert_eq!(Fast::data_rate_code(860), None);
        assert_eq!(Slow::data_rate_code(860), Some(0b111));
        assert_eq!(Slow::data_rate_code(128), Some(0b100));
        assert_eq!(Slow::data_rate_code(1600), None);
    }
}
