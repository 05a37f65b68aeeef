use crate::register::Register;
use embedded_hal::blocking::i2c::{Write, WriteRead};

/// Register-level access to a device on a two-wire bus.
///
/// Implemented for every `embedded-hal` bus that can write and
/// write-then-read. Each call is exactly one bus transaction; nothing
/// is retried.
pub trait RegisterBus {
    type Error;

    /// Writes `value` to `register` as two big-endian bytes.
    fn write_register(&mut self, address: u8, register: Register, value: u16)
        -> Result<(), Self::Error>;

    /// Reads `N` bytes starting at `register`.
    fn read_register<const N: usize>(
        &mut self,
        address: u8,
        register: Register,
    ) -> Result<[u8; N], Self::Error>;
}

impl<I2C, E> RegisterBus for I2C
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn write_register(
        &mut self,
        address: u8,
        register: Register,
        value: u16,
    ) -> Result<(), Self::Error> {
        let [high, low] = value.to_be_bytes();
        self.write(address, &[register.addr(), high, low])
    }

    fn read_register<const N: usize>(
        &mut self,
        address: u8,
        register: Register,
    ) -> Result<[u8; N], Self::Error> {
        let mut buffer = [0; N];
        self.write_read(address, &[register.addr()], &mut buffer)?;
        Ok(buffer)
    }
}
