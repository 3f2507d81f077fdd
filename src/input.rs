//! Push-button input
//!
//! The usual wiring pulls the input up and the button shorts it to ground,
//! so [`Button::new`] treats a low level as pressed. Use
//! [`Button::active_high`] for the opposite wiring.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::digital::InputPin;
//! use ssd1306_fb::Button;
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! let mut button = Button::new(MockPin);
//! assert_eq!(button.is_pressed(), Ok(true));
//! ```

use embedded_hal::digital::InputPin;

/// Button on a digital input
pub struct Button<P> {
    /// Input pin the button is wired to
    pin: P,
    /// Whether a high level means pressed
    active_high: bool,
}

impl<P> Button<P>
where
    P: InputPin,
{
    /// Button pulled up, pressed when the pin reads low
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_high: false,
        }
    }

    /// Button pulled down, pressed when the pin reads high
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_high: true,
        }
    }

    /// Sample the button
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        if self.active_high {
            self.pin.is_high()
        } else {
            self.pin.is_low()
        }
    }

    /// Block until the button reads released
    ///
    /// There is no timeout and no debouncing.
    pub fn wait_for_release(&mut self) -> Result<(), P::Error> {
        while self.is_pressed()? {}
        Ok(())
    }

    /// Cancellation predicate for [`Lissajous::run`](crate::animation::Lissajous::run)
    /// and friends
    ///
    /// A pin read error counts as pressed so a faulty input stops the loop.
    pub fn pressed(&mut self) -> impl FnMut() -> bool + '_ {
        move || self.is_pressed().unwrap_or(true)
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
