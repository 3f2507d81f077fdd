//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode requires:
//! - I2C bus (SDA + SCL), 100 kHz or 400 kHz
//! - Peripheral address 0x3C (SA0 low) or 0x3D (SA0 high)
//!
//! Every write is a single bus transaction: the peripheral address, one
//! control byte selecting command or data framing, then the payload. The
//! write blocks until the HAL reports the transfer finished; there is no
//! timeout at this layer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_fb::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! // Create interface on the default address
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Send commands
//! let _ = interface.send_commands(&[0xAE, 0xAF]); // Display off, display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA, DEFAULT_I2C_ADDRESS};
use crate::config::Config;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over different bus implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can frame command and data streams.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. If you need
/// custom behavior (e.g., a bit-banged bus, a recording mock),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Bring up the underlying bus
    ///
    /// Called once by [`Display::init`](crate::display::Display::init) when
    /// [`Config::init_bus`](crate::config::Config::init_bus) is set. HAL
    /// buses are configured when constructed, so the default does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be brought up.
    fn init_bus(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Send a command stream to the controller
    ///
    /// The implementation must transmit the command control byte followed by
    /// every byte of `commands` (command bytes and their arguments) in one
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication fails.
    #[allow(clippy::type_complexity)]
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller's display RAM
    ///
    /// The implementation must transmit the data control byte followed by
    /// every byte of `data` in one write.
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of GDDRAM bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// Hardware interface implementation for the SSD1306 over I2C
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_fb::{Builder, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::with_address(MockI2c, 0x3D);
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit peripheral address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface on the default address (0x3C)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new interface on a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a new interface on the address selected in `config`
    pub fn from_config(i2c: I2C, config: &Config) -> Self {
        Self::with_address(i2c, config.address)
    }

    /// Get the peripheral address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// One framed write: control byte, then payload, no repeated start
    fn write_framed(
        &mut self,
        control: u8,
        payload: &[u8],
    ) -> InterfaceResult<(), InterfaceError<I2C::Error>> {
        let control = [control];
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&control), Operation::Write(payload)],
            )
            .map_err(InterfaceError::I2c)
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_COMMAND, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_framed(CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, SevenBitAddress};

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records each transaction as (address, concatenated written bytes)
    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c<SevenBitAddress> for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.writes.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_default_address() {
        let interface = I2cInterface::new(MockI2c::default());
        assert_eq!(interface.address(), 0x3C);
    }

    #[test]
    fn test_send_commands_prefixes_command_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_commands(&[0x21, 0, 127]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.writes[0], (0x3C, alloc::vec![0x00, 0x21, 0, 127]));
    }

    #[test]
    fn test_send_data_prefixes_data_control_byte() {
        let mut interface = I2cInterface::with_address(MockI2c::default(), 0x3D);
        interface.send_data(&[0xAA, 0x55]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes[0], (0x3D, alloc::vec![0x40, 0xAA, 0x55]));
    }

    #[test]
    fn test_bus_failure_is_reported() {
        let mut interface = I2cInterface::new(MockI2c {
            writes: Vec::new(),
            fail: true,
        });
        let result = interface.send_data(&[0x00]);
        assert!(matches!(result, Err(InterfaceError::I2c(MockError))));
    }

    #[test]
    fn test_from_config_uses_configured_address() {
        let config = crate::config::Builder::new().address(0x3D).build().unwrap();
        let mut interface = I2cInterface::from_config(MockI2c::default(), &config);
        assert_eq!(interface.address(), 0x3D);

        interface.send_commands(&[0xAF]).unwrap();
        assert_eq!(interface.release().writes[0], (0x3D, alloc::vec![0x00, 0xAF]));
    }

    #[test]
    fn test_init_bus_default_is_noop() {
        let mut interface = I2cInterface::new(MockI2c::default());
        assert!(interface.init_bus().is_ok());
        assert!(interface.release().writes.is_empty());
    }
}
