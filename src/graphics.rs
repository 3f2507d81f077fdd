//! Framebuffer-backed display
//!
//! This module provides the [`GraphicDisplay`] struct which pairs a
//! [`Display`] with a [`Framebuffer`]: draw into the buffer, then
//! [`flush`](GraphicDisplay::flush) it to the panel in one pass.
//!
//! With the `graphics` feature it also implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem, so primitives and mono fonts can be drawn
//! next to the built-in glyph renderer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use ssd1306_fb::{Color, GraphicDisplay};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! # use ssd1306_fb::{Builder, Display, I2cInterface};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let display_driver = Display::new(I2cInterface::new(MockI2c), config);
//! # let mut delay = MockDelay;
//! let mut display = GraphicDisplay::new(display_driver, [0u8; 1024]);
//!
//! // Init sequence, then a blank frame
//! let _ = display.initialize(&mut delay);
//!
//! // Built-in glyphs and embedded-graphics share the same buffer
//! display.framebuffer_mut().draw_str("TEMP", 0, 0);
//! display.framebuffer_mut().draw_fixed_3_1(0, 5, 21.5);
//!
//! let _ = Rectangle::new(Point::new(0, 16), Size::new(128, 8))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(48, 28), 32)
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut display);
//!
//! // Send the frame to the panel
//! let _ = display.flush();
//! ```

use embedded_hal::delay::DelayNs;

use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

/// Display with a framebuffer
///
/// This wrapper around [`Display`] owns the pixel buffer and sends it to the
/// panel on [`flush`](Self::flush). The framebuffer starts with the font
/// selected in the display's [`Config`](crate::config::Config).
///
/// ## Type Parameters
///
/// * `I` - Display interface type
/// * `B` - Buffer type, exactly `dimensions.buffer_size()` bytes
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Panel driver
    display: Display<I>,
    /// Frame being drawn
    framebuffer: Framebuffer<B>,
}

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is not exactly `dimensions.buffer_size()` bytes.
    pub fn new(display: Display<I>, buffer: B) -> Self {
        let framebuffer =
            Framebuffer::new(*display.dimensions(), buffer).with_font(display.config().font);
        Self {
            display,
            framebuffer,
        }
    }

    /// Try to create a new GraphicDisplay, returning an error on a size mismatch
    ///
    /// This is the fallible version of [`new`](Self::new).
    pub fn try_new(display: Display<I>, buffer: B) -> GraphicsNewResult<I, Self> {
        let framebuffer =
            Framebuffer::try_new(*display.dimensions(), buffer)?.with_font(display.config().font);
        Ok(Self {
            display,
            framebuffer,
        })
    }

    /// Initialize the panel and blank it
    ///
    /// Sends the init sequence, clears the framebuffer and flushes it.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.init(delay)?;
        self.framebuffer.clear();
        self.flush()
    }

    /// Send the framebuffer to the panel
    pub fn flush(&mut self) -> GraphicsResult<I> {
        self.display.update(self.framebuffer.as_bytes())
    }

    /// Get a reference to the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Get a mutable reference to the framebuffer
    ///
    /// Text, numbers and pixels are drawn through this.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Get a reference to the underlying display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Get a mutable reference to the underlying display
    ///
    /// Use this for contrast, inversion and on/off control.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Split back into the display and the framebuffer
    pub fn release(self) -> (Display<I>, Framebuffer<B>) {
        (self.display, self.framebuffer)
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;
    use embedded_graphics_core::{
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        prelude::Pixel,
    };

    use super::GraphicDisplay;
    use crate::color::Color;
    use crate::interface::DisplayInterface;

    impl<I, B> DrawTarget for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        type Color = Color;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                self.framebuffer.set_pixel(color, x, y);
            }

            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.framebuffer.fill(color);
            Ok(())
        }
    }

    impl<I, B> OriginDimensions for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        fn size(&self) -> Size {
            let dims = self.framebuffer.dimensions();
            Size::new(u32::from(dims.width), u32::from(dims.height))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::{Builder, Dimensions};
    use crate::display::PanelState;
    use crate::font::FONT_12X16;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        commands: Vec<Vec<u8>>,
        data: Vec<Vec<u8>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            self.commands.push(commands.to_vec());
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::default(), config)
    }

    #[test]
    fn test_initialize_blanks_panel() {
        let mut gd = GraphicDisplay::new(test_display(), vec![0xFFu8; 1024]);
        gd.initialize(&mut MockDelay).unwrap();

        assert!(gd.framebuffer().as_bytes().iter().all(|b| *b == 0));
        assert_eq!(gd.display().state(), PanelState::Ready);

        let (display, _) = gd.release();
        let interface = display.release();
        // init sequence plus two address windows per page
        assert_eq!(interface.commands.len(), 1 + 8 * 2);
        assert_eq!(interface.data, vec![vec![0u8; 128]; 8]);
    }

    #[test]
    fn test_flush_sends_framebuffer_contents() {
        let mut gd = GraphicDisplay::new(test_display(), [0u8; 1024]);
        gd.framebuffer_mut().set_pixel(Color::On, 0, 63);
        gd.flush().unwrap();

        let (display, _) = gd.release();
        let data = display.release().data;
        assert_eq!(data.len(), 8);
        assert_eq!(data[7][0], 0x80);
        assert!(data[..7].iter().all(|page| page.iter().all(|b| *b == 0)));
    }

    #[test]
    fn test_framebuffer_uses_configured_font() {
        let config = Builder::new().font(FONT_12X16).build().unwrap();
        let display = Display::new(MockInterface::default(), config);
        let gd = GraphicDisplay::new(display, [0u8; 1024]);
        assert_eq!(*gd.framebuffer().font(), FONT_12X16);
    }

    #[test]
    fn test_try_new_wrong_buffer_returns_error() {
        let result = GraphicDisplay::try_new(test_display(), vec![0u8; 1023]);
        assert!(matches!(
            result,
            Err(Error::SizeMismatch {
                expected: 1024,
                provided: 1023
            })
        ));
    }

    #[test]
    fn test_try_new_valid_buffer_succeeds() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        let display = Display::new(MockInterface::default(), config);
        assert!(GraphicDisplay::try_new(display, [0u8; 512]).is_ok());
    }

    #[test]
    #[should_panic(expected = "framebuffer size mismatch")]
    fn test_new_panics_on_wrong_buffer() {
        let _ = GraphicDisplay::new(test_display(), vec![0u8; 2048]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_draw_target_maps_pixels() {
        use embedded_graphics::{
            pixelcolor::BinaryColor,
            prelude::*,
            primitives::{PrimitiveStyle, Rectangle},
        };

        let mut gd = GraphicDisplay::new(test_display(), [0u8; 1024]);
        assert_eq!(gd.size(), Size::new(128, 64));

        Pixel(Point::new(5, 9), Color::On).draw(&mut gd).unwrap();
        Pixel(Point::new(-1, 9), Color::On).draw(&mut gd).unwrap();
        Pixel(Point::new(5, 200), Color::On).draw(&mut gd).unwrap();
        assert_eq!(gd.framebuffer().get_pixel(5, 9), Some(Color::On));
        assert_eq!(gd.framebuffer().as_bytes()[128 + 5], 0x02);
        assert_eq!(
            gd.framebuffer().as_bytes().iter().filter(|b| **b != 0).count(),
            1
        );

        Rectangle::new(Point::new(0, 0), Size::new(4, 8))
            .into_styled(PrimitiveStyle::with_fill(Color::from(BinaryColor::On)))
            .draw(&mut gd)
            .unwrap();
        assert_eq!(&gd.framebuffer().as_bytes()[..5], &[0xFF, 0xFF, 0xFF, 0xFF, 0x00]);

        gd.clear(Color::Off).unwrap();
        assert!(gd.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }
}
