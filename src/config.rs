//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::command::DEFAULT_I2C_ADDRESS;
use crate::font::{FONT_5X8, Font};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u16,
    /// Number of rows (height in pixels, corresponds to common outputs)
    pub height: u16,
}

impl Dimensions {
    /// 128x64, the most common SSD1306 module
    pub const SIZE_128X64: Self = Self {
        width: 128,
        height: 64,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (rows are addressed in 8-row pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::SIZE_128X64
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// 7-bit I2C address of the panel
    ///
    /// Read by [`I2cInterface::from_config`](crate::interface::I2cInterface::from_config);
    /// an interface built with `new` or `with_address` keeps its own address.
    pub address: u8,
    /// Whether to bring up the bus before the init sequence
    pub init_bus: bool,
    /// Settle time after bus bring-up, before the first command
    pub power_on_delay_ms: u32,
    /// Inverse video (0xA7) instead of normal (0xA6)
    pub inverse: bool,
    /// Contrast level (argument of 0x81)
    pub contrast: u8,
    /// Pre-charge period (argument of 0xD9)
    pub precharge: u8,
    /// Multiplex ratio (argument of 0xA8)
    pub multiplex: u8,
    /// Clock divide ratio / oscillator frequency (argument of 0xD5)
    pub clock_divide: u8,
    /// COM pins hardware configuration (argument of 0xDA)
    pub com_pins: u8,
    /// VCOMH deselect level (argument of 0xDB)
    pub vcomh: u8,
    /// Font used for text and numbers
    pub font: Font,
}

/// Builder for constructing display configuration
///
/// Every value defaults to what a 128x64 module on address 0x3C expects.
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_fb::{Builder, Dimensions, FONT_12X16};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .com_pins(0x02)
///     .font(FONT_12X16)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions
    dimensions: Dimensions,
    /// 7-bit I2C address of the panel
    address: u8,
    /// Whether to bring up the bus before the init sequence
    init_bus: bool,
    /// Settle time after bus bring-up
    power_on_delay_ms: u32,
    /// Inverse video
    inverse: bool,
    /// Contrast level
    contrast: u8,
    /// Pre-charge period
    precharge: u8,
    /// Multiplex ratio; derived from the height when unset
    multiplex: Option<u8>,
    /// Clock divide ratio / oscillator frequency
    clock_divide: u8,
    /// COM pins hardware configuration
    com_pins: u8,
    /// VCOMH deselect level
    vcomh: u8,
    /// Font used for text and numbers
    font: Font,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::SIZE_128X64,
            address: DEFAULT_I2C_ADDRESS,
            init_bus: true,
            // The panel needs its supply to settle before accepting commands
            power_on_delay_ms: 100,
            inverse: false,
            contrast: 0xFF,
            precharge: 0x50,
            multiplex: None,
            clock_divide: 0x50,
            // Alternative COM pin layout, 128x64 modules
            com_pins: 0x12,
            // ~0.77 x VCC
            vcomh: 0x20,
            font: FONT_5X8,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the 7-bit I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set whether the bus is brought up before the init sequence
    pub fn init_bus(mut self, value: bool) -> Self {
        self.init_bus = value;
        self
    }

    /// Set the settle time after bus bring-up
    pub fn power_on_delay_ms(mut self, value: u32) -> Self {
        self.power_on_delay_ms = value;
        self
    }

    /// Select inverse video
    pub fn inverse(mut self, value: bool) -> Self {
        self.inverse = value;
        self
    }

    /// Set contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set multiplex ratio
    ///
    /// Defaults to `height - 1`.
    pub fn multiplex(mut self, value: u8) -> Self {
        self.multiplex = Some(value);
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set COM pins hardware configuration
    ///
    /// Use 0x02 for most 128x32 modules.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcomh(mut self, value: u8) -> Self {
        self.vcomh = value;
        self
    }

    /// Set the font used for text and numbers
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if the dimensions were
    /// assembled by hand and violate the controller limits.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = Dimensions::new(self.dimensions.width, self.dimensions.height)?;
        Ok(Config {
            dimensions: dims,
            address: self.address,
            init_bus: self.init_bus,
            power_on_delay_ms: self.power_on_delay_ms,
            inverse: self.inverse,
            contrast: self.contrast,
            precharge: self.precharge,
            multiplex: self.multiplex.unwrap_or((dims.height - 1) as u8),
            clock_divide: self.clock_divide,
            com_pins: self.com_pins,
            vcomh: self.vcomh,
            font: self.font,
        })
    }
}
