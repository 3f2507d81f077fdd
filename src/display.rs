//! Core panel operations
//!
//! [`Display`] owns the bus interface and knows the controller's command
//! protocol: the one-shot init sequence, the page-by-page RAM upload and a
//! few runtime settings. It never holds pixel data; pass a framebuffer's
//! bytes to [`Display::update`], or use
//! [`GraphicDisplay`](crate::graphics::GraphicDisplay) which pairs the two.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_ENABLE, COLUMN_ADDRESS, COM_SCAN_REMAPPED, DISPLAY_OFF, DISPLAY_ON,
    ENTIRE_DISPLAY_RESUME, HIGHER_COLUMN_START, INVERSE_DISPLAY, LOWER_COLUMN_START,
    NORMAL_DISPLAY, PAGE_ADDRESS, PAGE_END, SEGMENT_REMAP, SET_CLOCK_DIVIDE, SET_COM_PINS,
    SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX_RATIO, SET_PRECHARGE, SET_VCOMH_DESELECT,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle of the panel
///
/// The transition is one-way: once initialized the panel stays `Ready`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// No init sequence sent yet
    #[default]
    Uninitialized,
    /// Init sequence sent, panel on
    Ready,
}

/// Core display driver for the SSD1306
///
/// This struct provides low-level operations for the SSD1306 controller.
/// For a framebuffer with text and drawing support, use `GraphicDisplay`.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Whether the init sequence has been sent
    state: PanelState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PanelState::Uninitialized,
        }
    }

    /// Bring up the bus if configured, then send the init sequence
    ///
    /// The whole sequence goes out as a single command write and leaves the
    /// panel on. Panel RAM is not cleared; follow with [`update`](Self::update)
    /// of a blank buffer, as
    /// [`GraphicDisplay::initialize`](crate::graphics::GraphicDisplay::initialize) does.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.config.init_bus {
            debug!("bringing up display bus");
            self.interface.init_bus().map_err(Error::Interface)?;
            delay.delay_ms(self.config.power_on_delay_ms);
        }

        let sequence = self.init_sequence();
        self.send_commands(&sequence)?;

        self.state = PanelState::Ready;
        debug!(
            "display initialized: {}x{}, contrast {:#04x}, inverse {}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.contrast,
            self.config.inverse
        );
        Ok(())
    }

    /// Init command stream for the current configuration
    fn init_sequence(&self) -> [u8; 25] {
        let c = &self.config;
        [
            DISPLAY_OFF,
            COM_SCAN_REMAPPED,
            LOWER_COLUMN_START,
            HIGHER_COLUMN_START,
            // low column nibble again
            LOWER_COLUMN_START,
            SET_CONTRAST,
            c.contrast,
            SEGMENT_REMAP,
            video_mode(c.inverse),
            SET_MULTIPLEX_RATIO,
            c.multiplex,
            ENTIRE_DISPLAY_RESUME,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_CLOCK_DIVIDE,
            c.clock_divide,
            SET_PRECHARGE,
            c.precharge,
            SET_COM_PINS,
            c.com_pins,
            SET_VCOMH_DESELECT,
            c.vcomh,
            CHARGE_PUMP,
            CHARGE_PUMP_ENABLE,
            DISPLAY_ON,
        ]
    }

    /// Upload a full framebuffer to panel RAM
    ///
    /// Each page is sent as its own column/page window followed by `width`
    /// data bytes, pages in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] without touching the bus if `buffer`
    /// is not exactly `dimensions.buffer_size()` bytes, and
    /// [`Error::InvalidDimensions`] if the configured dimensions were
    /// assembled by hand and violate the controller limits.
    pub fn update(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        if Dimensions::new(dims.width, dims.height).is_err() {
            return Err(Error::InvalidDimensions {
                width: dims.width,
                height: dims.height,
            });
        }
        let expected = dims.buffer_size();
        if buffer.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                provided: buffer.len(),
            });
        }
        if self.state == PanelState::Uninitialized {
            warn!("flushing to a panel that has not been initialized");
        }

        let last_column = (dims.width - 1) as u8;
        for (page, bytes) in buffer.chunks_exact(dims.width as usize).enumerate() {
            trace!("flushing page {}", page);
            self.send_commands(&[COLUMN_ADDRESS, 0, last_column])?;
            self.send_commands(&[PAGE_ADDRESS, page as u8, PAGE_END])?;
            self.send_data(bytes)?;
        }
        Ok(())
    }

    /// Change the contrast level
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Switch between normal and inverse video
    pub fn set_inverted(&mut self, inverse: bool) -> DisplayResult<I> {
        self.send_commands(&[video_mode(inverse)])?;
        self.config.inverse = inverse;
        Ok(())
    }

    /// Turn the panel on or off (sleep); RAM is kept
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        let command = if on { DISPLAY_ON } else { DISPLAY_OFF };
        self.send_commands(&[command])
    }

    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }

    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }
}

fn video_mode(inverse: bool) -> u8 {
    if inverse {
        INVERSE_DISPLAY
    } else {
        NORMAL_DISPLAY
    }
}
