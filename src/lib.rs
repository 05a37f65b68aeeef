//! A blocking driver for the ADS1015 and ADS1115 analog-to-digital
//! converters.
//!
//! Both devices share one register protocol. They differ in resolution
//! (12 vs. 16 bits) and in their supported data rates, which is captured by
//! the [`Variant`] type parameter: [`Ads1015`] uses [`Fast`], [`Ads1115`]
//! uses [`Slow`].
//!
//! Every acquisition writes a fresh configuration word, waits for the
//! conversion to finish and reads the result back. Continuous acquisitions
//! return a [`ContinuousAcquisition`] guard that powers the device down
//! when it is stopped or dropped.
//!
//! # Examples
//!
//! ```
//! use ads1x15::{Ads1015, Gain};
//! # use embedded_hal_mock::{
//! #     delay::MockNoop,
//! #     i2c::{Mock, Transaction},
//! # };
//! #
//! # let i2c = Mock::new(&[
//! #     Transaction::write(0x48, vec![0x01, 0xC3, 0x83]),
//! #     Transaction::write_read(0x48, vec![0x00], vec![0x12, 0x30]),
//! # ]);
//! # let delay = MockNoop::new();
//!
//! let mut adc = Ads1015::new(i2c, delay);
//!
//! // Single-shot read of A0 at gain 1 and the default data rate
//! assert_eq!(adc.read_adc(0, Gain::One, None), Ok(0x123));
//! ```

#![cfg_attr(not(test), no_std)]

mod channel;
mod config;
mod continuous;
mod error;
mod interface;
mod register;
mod rescale;
mod variant;

use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayUs;

pub use channel::{
    differential_mux, single_ended_mux, DifferentialA0A1, DifferentialA0A3, DifferentialA1A3,
    DifferentialA2A3, SingleA0, SingleA1, SingleA2, SingleA3,
};
pub use config::{
    config_word, conversion_delay, conversion_delay_us, Acquisition, ComparatorConfig, Config,
    ConfigWord, Gain, Mode, DEFAULT_ADDRESS,
};
pub use continuous::ContinuousAcquisition;
pub use error::{ConfigError, Error};
pub use interface::RegisterBus;
pub use register::{Register, IDLE_CONFIG};
pub use rescale::rescale;
pub use variant::{Fast, Slow, Variant};

/// Full-scale reading that [`read_scaled`](Ads1x15::read_scaled) maps to
/// [`SCALED_OUTPUT_MAX`].
pub const SCALED_INPUT_MAX: i32 = 1635;

/// Upper bound of the range returned by [`read_scaled`](Ads1x15::read_scaled).
pub const SCALED_OUTPUT_MAX: i32 = 1023;

/// Driver for one device on the bus.
#[derive(Debug)]
pub struct Ads1x15<I2C, D, V> {
    i2c: I2C,
    delay: D,
    config: Config,
    variant: PhantomData<V>,
}

/// 12-bit ADS1015.
pub type Ads1015<I2C, D> = Ads1x15<I2C, D, Fast>;

/// 16-bit ADS1115.
pub type Ads1115<I2C, D> = Ads1x15<I2C, D, Slow>;

impl<I2C, D, V> Ads1x15<I2C, D, V> {
    /// Returns a driver for the device at [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    /// Returns a driver using the provided `config`.
    ///
    /// The ADS1115 supports no data rate of 1600 samples per second, so
    /// give it a [`Config::data_rate`] unless every acquisition names its
    /// own rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use ads1x15::{Ads1115, Config, Gain};
    /// # use embedded_hal_mock::{
    /// #     delay::MockNoop,
    /// #     i2c::{Mock, Transaction},
    /// # };
    /// #
    /// # let i2c = Mock::new(&[
    /// #     Transaction::write(0x49, vec![0x01, 0xF3, 0x83]),
    /// #     Transaction::write_read(0x49, vec![0x00], vec![0xFF, 0xFE]),
    /// # ]);
    /// # let delay = MockNoop::new();
    ///
    /// let config = Config {
    ///     address: 0x49,
    ///     data_rate: Some(128),
    ///     ..Config::default()
    /// };
    /// let mut adc = Ads1115::with_config(i2c, delay, config);
    ///
    /// assert_eq!(adc.read_adc(3, Gain::One, None), Ok(-2));
    /// ```
    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            i2c,
            delay,
            config,
            variant: PhantomData,
        }
    }

    /// The device's 7-bit bus address.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Destroys the driver and returns the bus and delay.
    pub fn free(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D, V> Ads1x15<I2C, D, V>
where
    I2C: RegisterBus,
    V: Variant,
{
    /// Powers the device down, ending continuous conversions.
    pub fn stop_adc(&mut self) -> Result<(), Error<I2C::Error>> {
        log::debug!("0x{:02x}: stop", self.config.address);
        self.write_register(Register::Config, IDLE_CONFIG)
    }

    /// Reads the conversion register without writing any configuration.
    ///
    /// While the device is idle this is the last conversion it completed.
    pub fn get_last_result(&mut self) -> Result<i16, Error<I2C::Error>> {
        let bytes = self
            .i2c
            .read_register::<2>(self.config.address, Register::Conversion)
            .map_err(Error::Bus)?;
        let value = V::decode(bytes);

        log::trace!("0x{:02x}: conversion {}", self.config.address, value);
        Ok(value)
    }

    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_register(self.config.address, register, value)
            .map_err(Error::Bus)
    }
}

impl<I2C, D, V> Ads1x15<I2C, D, V>
where
    I2C: RegisterBus,
    D: DelayUs<u32>,
    V: Variant,
{
    /// Reads single-ended input `channel` (0 to 3) once.
    ///
    /// `data_rate` must be supported by the variant; `None` uses the
    /// configured default.
    pub fn read_adc(
        &mut self,
        channel: i32,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<i16, Error<I2C::Error>> {
        let mux = single_ended_mux(channel)?;
        self.acquire(&Acquisition {
            mux,
            gain,
            mode: Mode::SingleShot,
            data_rate,
            comparator: None,
        })
    }

    /// Reads the difference between two inputs once. `differential` must be
    /// one of:
    ///
    /// - 0 = A0 - A1
    /// - 1 = A0 - A3
    /// - 2 = A1 - A3
    /// - 3 = A2 - A3
    pub fn read_adc_difference(
        &mut self,
        differential: i32,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<i16, Error<I2C::Error>> {
        let mux = differential_mux(differential)?;
        self.acquire(&Acquisition {
            mux,
            gain,
            mode: Mode::SingleShot,
            data_rate,
            comparator: None,
        })
    }

    /// Starts continuous conversions on single-ended input `channel`.
    ///
    /// Returns the guard for the running acquisition together with the
    /// first conversion result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ads1x15::{Ads1015, Gain};
    /// # use embedded_hal_mock::{
    /// #     delay::MockNoop,
    /// #     i2c::{Mock, Transaction},
    /// # };
    /// #
    /// # let i2c = Mock::new(&[
    /// #     Transaction::write(0x48, vec![0x01, 0xD2, 0x83]),
    /// #     Transaction::write_read(0x48, vec![0x00], vec![0x10, 0x00]),
    /// #     Transaction::write_read(0x48, vec![0x00], vec![0x10, 0x10]),
    /// #     Transaction::write(0x48, vec![0x01, 0x85, 0x83]),
    /// # ]);
    /// # let delay = MockNoop::new();
    ///
    /// let mut adc = Ads1015::new(i2c, delay);
    ///
    /// let (mut session, first) = adc.start_adc(1, Gain::One, None)?;
    /// assert_eq!(first, 256);
    /// assert_eq!(session.get_last_result()?, 257);
    /// session.stop()?;
    /// # Ok::<(), ads1x15::Error<embedded_hal_mock::MockError>>(())
    /// ```
    pub fn start_adc(
        &mut self,
        channel: i32,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<(ContinuousAcquisition<'_, I2C, D, V>, i16), Error<I2C::Error>> {
        let mux = single_ended_mux(channel)?;
        self.start(&Acquisition {
            mux,
            gain,
            mode: Mode::Continuous,
            data_rate,
            comparator: None,
        })
    }

    /// Starts continuous conversions of a differential pair. See
    /// [`read_adc_difference`](Self::read_adc_difference) for the selectors.
    pub fn start_adc_difference(
        &mut self,
        differential: i32,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<(ContinuousAcquisition<'_, I2C, D, V>, i16), Error<I2C::Error>> {
        let mux = differential_mux(differential)?;
        self.start(&Acquisition {
            mux,
            gain,
            mode: Mode::Continuous,
            data_rate,
            comparator: None,
        })
    }

    /// Starts continuous conversions on single-ended input `channel` with
    /// the comparator driving the ALERT pin.
    ///
    /// The thresholds are written before the configuration, so the
    /// comparator never runs against stale bounds.
    pub fn start_adc_comparator(
        &mut self,
        channel: i32,
        comparator: ComparatorConfig,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<(ContinuousAcquisition<'_, I2C, D, V>, i16), Error<I2C::Error>> {
        let mux = single_ended_mux(channel)?;
        self.start(&Acquisition {
            mux,
            gain,
            mode: Mode::Continuous,
            data_rate,
            comparator: Some(comparator),
        })
    }

    /// Differential counterpart of
    /// [`start_adc_comparator`](Self::start_adc_comparator).
    pub fn start_adc_difference_comparator(
        &mut self,
        differential: i32,
        comparator: ComparatorConfig,
        gain: Gain,
        data_rate: Option<u16>,
    ) -> Result<(ContinuousAcquisition<'_, I2C, D, V>, i16), Error<I2C::Error>> {
        let mux = differential_mux(differential)?;
        self.start(&Acquisition {
            mux,
            gain,
            mode: Mode::Continuous,
            data_rate,
            comparator: Some(comparator),
        })
    }

    /// Reads `channel` at gain 1 and maps `0..=SCALED_INPUT_MAX` onto
    /// `0..=SCALED_OUTPUT_MAX`, the range of a 10-bit on-chip ADC.
    ///
    /// The result is truncated toward zero; the fractional part of the
    /// mapping is dropped. Returns `Ok(None)` if the mapped value does not
    /// fit in an `i32`, which cannot happen for 16-bit readings.
    pub fn read_scaled(&mut self, channel: i32) -> Result<Option<i32>, Error<I2C::Error>> {
        let value = self.read_adc(channel, Gain::One, None)?;

        Ok(rescale(
            value as i32,
            0,
            SCALED_INPUT_MAX,
            0,
            SCALED_OUTPUT_MAX,
        ))
    }

    fn acquire(&mut self, acquisition: &Acquisition) -> Result<i16, Error<I2C::Error>> {
        let config = self.configure(acquisition)?;
        self.convert(config.data_rate)
    }

    fn start(
        &mut self,
        acquisition: &Acquisition,
    ) -> Result<(ContinuousAcquisition<'_, I2C, D, V>, i16), Error<I2C::Error>> {
        let config = self.configure(acquisition)?;

        // From here on the device is converting; dropping the guard stops it.
        let mut session = ContinuousAcquisition::new(self);
        let first = session.adc.convert(config.data_rate)?;

        Ok((session, first))
    }

    fn configure(&mut self, acquisition: &Acquisition) -> Result<ConfigWord, Error<I2C::Error>> {
        let config = config_word::<V>(acquisition, self.config.data_rate)?;

        if let Some(comparator) = &acquisition.comparator {
            self.write_register(Register::HighThreshold, comparator.high_threshold as u16)?;
            self.write_register(Register::LowThreshold, comparator.low_threshold as u16)?;
        }

        log::debug!(
            "0x{:02x}: config 0x{:04x} ({} SPS)",
            self.config.address,
            config.word,
            config.data_rate
        );
        self.write_register(Register::Config, config.word)?;

        Ok(config)
    }

    fn convert(&mut self, data_rate: u16) -> Result<i16, Error<I2C::Error>> {
        self.delay.delay_us(conversion_delay_us(data_rate));
        self.get_last_result()
    }
}

impl<I2C, D, V, PIN> OneShot<V, i16, PIN> for Ads1x15<I2C, D, V>
where
    I2C: RegisterBus,
    D: DelayUs<u32>,
    V: Variant,
    PIN: Channel<V, ID = u8>,
{
    type Error = Error<I2C::Error>;

    /// Single-shot read of `PIN` using the configured gain and data rate.
    /// Never returns [`nb::Error::WouldBlock`].
    fn read(&mut self, _pin: &mut PIN) -> nb::Result<i16, Self::Error> {
        let acquisition = Acquisition {
            mux: PIN::channel(),
            gain: self.config.gain,
            mode: Mode::SingleShot,
            data_rate: None,
            comparator: None,
        };

        self.acquire(&acquisition).map_err(nb::Error::Other)
    }
}
