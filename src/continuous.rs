use crate::error::Error;
use crate::interface::RegisterBus;
use crate::variant::Variant;
use crate::Ads1x15;

/// A device running continuous conversions.
///
/// Returned by the `start_adc*` methods. Read results with
/// [`get_last_result`](ContinuousAcquisition::get_last_result) and finish
/// with [`stop`](ContinuousAcquisition::stop). If the guard is dropped
/// instead, the device is powered down on drop; a bus failure at that
/// point is logged and otherwise ignored.
pub struct ContinuousAcquisition<'a, I2C: RegisterBus, D, V: Variant> {
    pub(crate) adc: &'a mut Ads1x15<I2C, D, V>,
    stopped: bool,
}

impl<'a, I2C: RegisterBus, D, V: Variant> ContinuousAcquisition<'a, I2C, D, V> {
    pub(crate) fn new(adc: &'a mut Ads1x15<I2C, D, V>) -> Self {
        Self {
            adc,
            stopped: false,
        }
    }

    /// Returns the most recent conversion without reconfiguring the device.
    pub fn get_last_result(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.adc.get_last_result()
    }

    /// Stops conversions and releases the driver.
    pub fn stop(mut self) -> Result<(), Error<I2C::Error>> {
        self.stopped = true;
        self.adc.stop_adc()
    }
}

impl<'a, I2C: RegisterBus, D, V: Variant> Drop for ContinuousAcquisition<'a, I2C, D, V> {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }

        self.stopped = true;
        if self.adc.stop_adc().is_err() {
            log::warn!(
                "failed to stop continuous conversions on device 0x{:02x}",
                self.adc.address()
            );
        }
    }
}
