use core::fmt;

/// A parameter rejected before any bus traffic took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The gain factor is not one of 2/3, 1, 2, 4, 8 or 16.
    InvalidGain,
    /// The data rate is not supported by the device variant.
    InvalidSampleRate(u16),
    /// Single-ended channels are numbered 0 to 3.
    InvalidChannel(i32),
    /// Differential selectors are numbered 0 to 3.
    InvalidDifferentialSelector(i32),
    /// The comparator queue depth must be 1, 2 or 4.
    InvalidQueueDepth(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGain => f.write_str("gain must be one of 2/3, 1, 2, 4, 8, 16"),
            Self::InvalidSampleRate(rate) => {
                write!(f, "data rate {} is not supported by this device", rate)
            }
            Self::InvalidChannel(channel) => {
                write!(f, "channel {} is not within 0-3", channel)
            }
            Self::InvalidDifferentialSelector(selector) => {
                write!(f, "differential selector {} is not within 0-3", selector)
            }
            Self::InvalidQueueDepth(depth) => {
                write!(f, "comparator queue depth {} is not 1, 2 or 4", depth)
            }
        }
    }
}

/// Driver error, generic over the bus error `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// Invalid acquisition parameters.
    Config(ConfigError),
    /// The bus transaction failed. Device state is unknown after a failed
    /// configuration write.
    Bus(E),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => error.fmt(f),
            Self::Bus(error) => write!(f, "bus error: {:?}", error),
        }
    }
}
