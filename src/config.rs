use crate::error::ConfigError;
use crate::register::*;
use crate::variant::Variant;

/// Default 7-bit bus address (ADDR pin tied to ground).
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Programmable gain, expressed as the factor applied to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    /// 2/3, ±6.144 V full scale
    TwoThirds,
    /// 1, ±4.096 V full scale
    One,
    /// 2, ±2.048 V full scale
    Two,
    /// 4, ±1.024 V full scale
    Four,
    /// 8, ±0.512 V full scale
    Eight,
    /// 16, ±0.256 V full scale
    Sixteen,
}

impl Gain {
    fn bits(self) -> u16 {
        let code: u16 = match self {
            Gain::TwoThirds => 0b000,
            Gain::One => 0b001,
            Gain::Two => 0b010,
            Gain::Four => 0b011,
            Gain::Eight => 0b100,
            Gain::Sixteen => 0b101,
        };

        code << GAIN_SHIFT
    }
}

impl TryFrom<f32> for Gain {
    type Error = ConfigError;

    /// Accepts exactly the factors 2/3, 1, 2, 4, 8 and 16. Two thirds must
    /// be the `f32` nearest to it, `2.0 / 3.0`.
    ///
    /// ```
    /// use ads1x15::{ConfigError, Gain};
    ///
    /// assert_eq!(Gain::try_from(2.0 / 3.0), Ok(Gain::TwoThirds));
    /// assert_eq!(Gain::try_from(16.0), Ok(Gain::Sixteen));
    /// assert_eq!(Gain::try_from(3.0), Err(ConfigError::InvalidGain));
    /// ```
    fn try_from(factor: f32) -> Result<Self, Self::Error> {
        match factor {
            f if f == 2.0 / 3.0 => Ok(Gain::TwoThirds),
            f if f == 1.0 => Ok(Gain::One),
            f if f == 2.0 => Ok(Gain::Two),
            f if f == 4.0 => Ok(Gain::Four),
            f if f == 8.0 => Ok(Gain::Eight),
            f if f == 16.0 => Ok(Gain::Sixteen),
            _ => Err(ConfigError::InvalidGain),
        }
    }
}

/// Conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Convert once, then power down.
    SingleShot,
    /// Convert repeatedly until stopped.
    Continuous,
}

impl Mode {
    fn bits(self) -> u16 {
        match self {
            Mode::SingleShot => MODE_SINGLE,
            Mode::Continuous => MODE_CONTINUOUS,
        }
    }
}

/// Comparator settings for the ALERT/RDY pin.
///
/// # Examples
///
/// ```
/// use ads1x15::ComparatorConfig;
///
/// let comparator = ComparatorConfig {
///     latching: true,
///     num_readings: 4,
///     ..ComparatorConfig::new(1200, -1200)
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparatorConfig {
    pub high_threshold: i16,
    pub low_threshold: i16,
    /// ALERT is pulled low when asserted.
    pub active_low: bool,
    /// Traditional comparator when `true`, window comparator otherwise.
    pub traditional: bool,
    /// Hold the alert until the conversion register is read.
    pub latching: bool,
    /// Consecutive matching conversions before the alert asserts: 1, 2 or 4.
    pub num_readings: u8,
}

impl ComparatorConfig {
    /// Thresholds with an active-low, traditional, non-latching comparator
    /// that alerts after a single reading.
    pub fn new(high_threshold: i16, low_threshold: i16) -> Self {
        Self {
            high_threshold,
            low_threshold,
            active_low: true,
            traditional: true,
            latching: false,
            num_readings: 1,
        }
    }

    fn bits(&self) -> Result<u16, ConfigError> {
        let mut bits: u16 = match self.num_readings {
            1 => 0b00,
            2 => 0b01,
            4 => 0b10,
            depth => return Err(ConfigError::InvalidQueueDepth(depth)),
        };

        if !self.traditional {
            bits |= COMP_WINDOW;
        }
        if !self.active_low {
            bits |= COMP_ACTIVE_HIGH;
        }
        if self.latching {
            bits |= COMP_LATCHING;
        }

        Ok(bits)
    }
}

/// Per-instance driver configuration.
///
/// # Examples
///
/// ```
/// use ads1x15::{Config, Gain};
///
/// let config = Config {
///     address: 0x49,         // ADDR tied to VDD
///     data_rate: Some(128),  // default for one-shot reads
///     ..Config::default()
/// };
/// assert_eq!(config.gain, Gain::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 7-bit bus address.
    pub address: u8,
    /// Gain used by [`OneShot`](embedded_hal::adc::OneShot) reads.
    pub gain: Gain,
    /// Data rate used whenever an acquisition passes `None`. When unset the
    /// variant's default applies.
    pub data_rate: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            gain: Gain::One,
            data_rate: None,
        }
    }
}

/// Parameters of one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquisition {
    /// 3-bit input multiplexer selector.
    pub mux: u8,
    pub gain: Gain,
    pub mode: Mode,
    pub data_rate: Option<u16>,
    pub comparator: Option<ComparatorConfig>,
}

/// A configuration word ready to be written, and the data rate it encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigWord {
    pub word: u16,
    pub data_rate: u16,
}

/// Builds the configuration register value for `acquisition` on variant `V`.
///
/// A `None` data rate falls back to `default_rate`, then to
/// [`V::DEFAULT_DATA_RATE`](Variant::DEFAULT_DATA_RATE). Whichever rate is
/// chosen must appear in `V`'s table.
pub fn config_word<V: Variant>(
    acquisition: &Acquisition,
    default_rate: Option<u16>,
) -> Result<ConfigWord, ConfigError> {
    let data_rate = acquisition
        .data_rate
        .or(default_rate)
        .unwrap_or(V::DEFAULT_DATA_RATE);
    let rate_code =
        V::data_rate_code(data_rate).ok_or(ConfigError::InvalidSampleRate(data_rate))?;

    let comparator = match &acquisition.comparator {
        Some(comparator) => comparator.bits()?,
        None => COMP_QUEUE_DISABLE,
    };

    let word = OS_SINGLE
        | ((acquisition.mux as u16 & 0x07) << MUX_SHIFT)
        | acquisition.gain.bits()
        | acquisition.mode.bits()
        | (rate_code << DATA_RATE_SHIFT)
        | comparator;

    Ok(ConfigWord { word, data_rate })
}

/// Time a conversion at `data_rate` takes, plus 0.1 ms of margin, in seconds.
pub fn conversion_delay(data_rate: u16) -> f32 {
    1.0 / data_rate as f32 + 0.0001
}

/// [`conversion_delay`] in whole microseconds, rounded up.
pub fn conversion_delay_us(data_rate: u16) -> u32 {
    let us = conversion_delay(data_rate) * 1_000_000.0;
    let whole = us as u32;

    if (whole as f32) < us {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Fast, Slow};

    const GAINS: [(Gain, u16); 6] = [
        (Gain::TwoThirds, 0x0000),
        (Gain::One, 0x0200),
        (Gain::Two, 0x0400),
        (Gain::Four, 0x0600),
        (Gain::Eight, 0x0800),
        (Gain::Sixteen, 0x0A00),
    ];

    fn single(mux: u8, gain: Gain, data_rate: Option<u16>) -> Acquisition {
        Acquisition {
            mux,
            gain,
            mode: Mode::SingleShot,
            data_rate,
            comparator: None,
        }
    }

    #[test]
    fn gain_and_rate_fields() {
        for (gain, gain_bits) in GAINS {
            for &(rate, code) in Fast::DATA_RATES {
                let word = config_word::<Fast>(&single(4, gain, Some(rate)), None)
                    .unwrap()
                    .word;
                assert_eq!(word & 0x0E00, gain_bits);
                assert_eq!((word >> 5) & 0b111, code);
            }
            for &(rate, code) in Slow::DATA_RATES {
                let word = config_word::<Slow>(&single(4, gain, Some(rate)), None)
                    .unwrap()
                    .word;
                assert_eq!(word & 0x0E00, gain_bits);
                assert_eq!((word >> 5) & 0b111, code);
            }
        }
    }

    #[test]
    fn rate_from_wrong_table() {
        assert_eq!(
            config_word::<Fast>(&single(4, Gain::One, Some(860)), None),
            Err(ConfigError::InvalidSampleRate(860))
        );
        assert_eq!(
            config_word::<Slow>(&single(4, Gain::One, Some(3300)), None),
            Err(ConfigError::InvalidSampleRate(3300))
        );
    }

    #[test]
    fn default_rate() {
        assert_eq!(
            config_word::<Fast>(&single(4, Gain::One, None), None),
            Ok(ConfigWord {
                word: 0xC383,
                data_rate: 1600
            })
        );
        assert_eq!(
            config_word::<Slow>(&single(4, Gain::One, None), None),
            Err(ConfigError::InvalidSampleRate(1600))
        );
        assert_eq!(
            config_word::<Slow>(&single(4, Gain::One, None), Some(128))
                .unwrap()
                .data_rate,
            128
        );
        assert_eq!(
            config_word::<Slow>(&single(4, Gain::One, Some(860)), Some(128))
                .unwrap()
                .data_rate,
            860
        );
    }

    #[test]
    fn comparator_bits() {
        let mut acquisition = Acquisition {
            mux: 0,
            gain: Gain::Two,
            mode: Mode::Continuous,
            data_rate: Some(128),
            comparator: Some(ComparatorConfig::new(100, -100)),
        };
        assert_eq!(
            config_word::<Fast>(&acquisition, None).unwrap().word,
            0x8400
        );

        acquisition.comparator = Some(ComparatorConfig {
            active_low: false,
            traditional: false,
            latching: true,
            num_readings: 4,
            ..ComparatorConfig::new(100, -100)
        });
        assert_eq!(
            config_word::<Fast>(&acquisition, None).unwrap().word,
            0x8400 | 0x0010 | 0x0008 | 0x0004 | 0b10
        );
    }

    #[test]
    fn queue_depth() {
        for (depth, expected) in [(1, Ok(0b00)), (2, Ok(0b01)), (4, Ok(0b10))] {
            let comparator = ComparatorConfig {
                num_readings: depth,
                ..ComparatorConfig::new(0, 0)
            };
            assert_eq!(comparator.bits(), expected);
        }

        let comparator = ComparatorConfig {
            num_readings: 3,
            ..ComparatorConfig::new(0, 0)
        };
        assert_eq!(comparator.bits(), Err(ConfigError::InvalidQueueDepth(3)));
    }

    #[test]
    fn gain_from_factor() {
        assert_eq!(Gain::try_from(2.0 / 3.0), Ok(Gain::TwoThirds));
        assert_eq!(Gain::try_from(1.0), Ok(Gain::One));
        assert_eq!(Gain::try_from(8.0), Ok(Gain::Eight));
        assert_eq!(Gain::try_from(0.5), Err(ConfigError::InvalidGain));
        assert_eq!(Gain::try_from(0.6667), Err(ConfigError::InvalidGain));
        assert_eq!(Gain::try_from(0.666_666_6), Err(ConfigError::InvalidGain));
        assert_eq!(Gain::try_from(32.0), Err(ConfigError::InvalidGain));
    }

    #[test]
    fn delays() {
        assert!((conversion_delay(128) - 0.0079125).abs() < 1e-6);
        assert!((conversion_delay(3300) - 0.000403).abs() < 1e-6);
        assert_eq!(conversion_delay_us(128), 7913);
        assert_eq!(conversion_delay_us(3300), 404);
    }
}
