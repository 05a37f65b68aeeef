use crate::error::ConfigError;
use crate::variant::Variant;
use embedded_hal::adc::Channel;

/// Mux offset that selects a single-ended input.
const SINGLE_ENDED: u8 = 0x04;

/// Mux selector for single-ended input `channel` (0 to 3).
pub fn single_ended_mux(channel: i32) -> Result<u8, ConfigError> {
    match channel {
        0..=3 => Ok(channel as u8 | SINGLE_ENDED),
        _ => Err(ConfigError::InvalidChannel(channel)),
    }
}

/// Mux selector for a differential pair:
///
/// - 0 = A0 - A1
/// - 1 = A0 - A3
/// - 2 = A1 - A3
/// - 3 = A2 - A3
pub fn differential_mux(selector: i32) -> Result<u8, ConfigError> {
    match selector {
        0..=3 => Ok(selector as u8),
        _ => Err(ConfigError::InvalidDifferentialSelector(selector)),
    }
}

macro_rules! channels {
    ($($(#[$doc:meta])* $name:ident => $mux:expr,)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl<V: Variant> Channel<V> for $name {
                type ID = u8;

                fn channel() -> u8 {
                    $mux
                }
            }
        )+
    };
}

channels! {
    /// Single-ended input A0
    SingleA0 => SINGLE_ENDED,
    /// Single-ended input A1
    SingleA1 => SINGLE_ENDED | 1,
    /// Single-ended input A2
    SingleA2 => SINGLE_ENDED | 2,
    /// Single-ended input A3
    SingleA3 => SINGLE_ENDED | 3,
    /// A0 minus A1
    DifferentialA0A1 => 0,
    /// A0 minus A3
    DifferentialA0A3 => 1,
    /// A1 minus A3
    DifferentialA1A3 => 2,
    /// A2 minus A3
    DifferentialA2A3 => 3,
}
