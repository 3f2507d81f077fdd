//! Lissajous curve animations
//!
//! Both animations plot into a [`GraphicDisplay`] framebuffer and flush
//! after every frame. [`Lissajous`] adds one point per frame and lets the
//! trace accumulate; [`RotatingLissajous`] draws the whole curve each frame
//! with a drifting phase, then wipes its own columns for the next frame.
//!
//! `run` polls a cancellation predicate once per frame, typically
//! [`Button::pressed`](crate::input::Button::pressed).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{Lissajous, RotatingLissajous};
//! # use core::convert::Infallible;
//! # use ssd1306_fb::{Builder, Display, DisplayInterface, GraphicDisplay};
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = GraphicDisplay::new(Display::new(MockInterface, config), [0u8; 1024]);
//! // Stop after `frames` frames
//! fn frame_limit(frames: u32) -> impl FnMut() -> bool {
//!     let mut drawn = 0;
//!     move || {
//!         drawn += 1;
//!         drawn > frames
//!     }
//! }
//!
//! let mut curve = Lissajous::new((64, 32), 30.0, 2.0, 0.0, 3.0, 0.0);
//! let _ = curve.run(&mut display, frame_limit(500));
//!
//! let mut rotating = RotatingLissajous::new((64, 32), 30.0, 1.0, 2.0);
//! let _ = rotating.run(&mut display, frame_limit(500));
//! ```
//!
//! ## Demo sequence
//!
//! A start screen, then each figure with its label until the button is
//! pressed. Waiting for the release keeps one press from cancelling the
//! next figure too.
//!
//! ```rust,no_run
//! use ssd1306_fb::{Button, Lissajous, RotatingLissajous};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::InputPin;
//! # use ssd1306_fb::{Builder, Display, DisplayInterface, GraphicDisplay};
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = GraphicDisplay::new(Display::new(MockInterface, config), [0u8; 1024]);
//! let mut button = Button::new(MockPin);
//!
//! display.framebuffer_mut().draw_str("PRESS START", 2, 0);
//! display.framebuffer_mut().draw_str("TO BEGIN...", 4, 0);
//! let _ = display.flush();
//! while button.is_pressed() == Ok(false) {}
//! let _ = button.wait_for_release();
//! display.framebuffer_mut().clear();
//!
//! let figures = [(1.0, 1.0), (2.0, 3.0), (1.0, 2.0)];
//! for (index, (x_freq, y_freq)) in (1u32..).zip(figures) {
//!     display.framebuffer_mut().draw_str("L", 0, 0);
//!     display.framebuffer_mut().draw_uint(0, 1, index, 1);
//!     let mut curve = Lissajous::new((64, 32), 30.0, x_freq, 0.0, y_freq, 0.0);
//!     let _ = curve.run(&mut display, button.pressed());
//!     let _ = button.wait_for_release();
//!
//!     display.framebuffer_mut().draw_str("L", 0, 0);
//!     display.framebuffer_mut().draw_uint(0, 1, index, 1);
//!     display.framebuffer_mut().draw_str("R", 0, 2);
//!     let mut rotating = RotatingLissajous::new((64, 32), 30.0, x_freq, y_freq);
//!     let _ = rotating.run(&mut display, button.pressed());
//!     let _ = button.wait_for_release();
//! }
//! ```

use core::f32::consts::PI;

use libm::{ceilf, roundf, sinf};
use log::debug;

use crate::color::Color;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::graphics::GraphicDisplay;
use crate::interface::DisplayInterface;

/// Time advance per [`Lissajous`] frame
pub const LISSAJOUS_TIME_STEP: f32 = 0.025;

/// Time advance between plotted points of a [`RotatingLissajous`] frame
pub const SWEEP_TIME_STEP: f32 = 0.005;

/// Phase advance per [`RotatingLissajous`] frame
pub const PHASE_STEP: f32 = 0.05;

/// Plot `center + round(offset)` on both axes; points off the panel are dropped
fn plot<B>(framebuffer: &mut Framebuffer<B>, center: (i32, i32), offset: (f32, f32))
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let x = (roundf(offset.0) as i32).saturating_add(center.0);
    let y = (roundf(offset.1) as i32).saturating_add(center.1);
    if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
        framebuffer.set_pixel(Color::On, x, y);
    }
}

/// Clear the panel, flush, and report how many frames ran
fn finish<I, B>(display: &mut GraphicDisplay<I, B>, frames: u32) -> Result<u32, Error<I>>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    debug!("animation cancelled after {} frames", frames);
    display.framebuffer_mut().clear();
    display.flush()?;
    Ok(frames)
}

/// Lissajous figure traced one point per frame
///
/// Frame `n` plots
/// `(cx + round(A·sin(fx·t + φx)), cy + round(A·sin(fy·t + φy)))` with
/// `t = n · 0.025`. Earlier points stay lit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lissajous {
    /// Curve centre in pixels
    pub center: (i32, i32),
    /// Amplitude in pixels, both axes
    pub amplitude: f32,
    /// Horizontal angular frequency
    pub x_freq: f32,
    /// Horizontal phase in radians
    pub x_phase: f32,
    /// Vertical angular frequency
    pub y_freq: f32,
    /// Vertical phase in radians
    pub y_phase: f32,
    time: f32,
}

impl Lissajous {
    /// Create a curve starting at `t = 0`
    pub fn new(
        center: (i32, i32),
        amplitude: f32,
        x_freq: f32,
        x_phase: f32,
        y_freq: f32,
        y_phase: f32,
    ) -> Self {
        Self {
            center,
            amplitude,
            x_freq,
            x_phase,
            y_freq,
            y_phase,
            time: 0.0,
        }
    }

    /// Plot the next point and flush
    pub fn step<I, B>(&mut self, display: &mut GraphicDisplay<I, B>) -> Result<(), Error<I>>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let offset = (
            self.amplitude * sinf(self.x_freq * self.time + self.x_phase),
            self.amplitude * sinf(self.y_freq * self.time + self.y_phase),
        );
        plot(display.framebuffer_mut(), self.center, offset);
        self.time += LISSAJOUS_TIME_STEP;
        display.flush()
    }

    /// Step until `cancel` returns true, then blank the panel
    ///
    /// `cancel` is checked before every frame. Returns the number of frames
    /// drawn.
    pub fn run<I, B, C>(
        &mut self,
        display: &mut GraphicDisplay<I, B>,
        mut cancel: C,
    ) -> Result<u32, Error<I>>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
        C: FnMut() -> bool,
    {
        debug!("lissajous {}:{} started", self.x_freq, self.y_freq);
        let mut frames: u32 = 0;
        while !cancel() {
            self.step(display)?;
            frames = frames.saturating_add(1);
        }
        finish(display, frames)
    }
}

/// Lissajous figure redrawn each frame with a drifting phase
///
/// Each frame sweeps `t` over `[0, 2 / min(fx, fy))` in steps of 0.005 and
/// plots `(cx + round(A·sin(2π·fx·t + φ)), cy + round(A·sin(2π·fy·t)))`.
/// After the flush the columns `cx ± ceil(A)` are cleared on every page and
/// `φ` advances by 0.05.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatingLissajous {
    /// Curve centre in pixels
    pub center: (i32, i32),
    /// Amplitude in pixels, both axes
    pub amplitude: f32,
    /// Horizontal frequency
    pub x_freq: f32,
    /// Vertical frequency
    pub y_freq: f32,
    phase: f32,
}

impl RotatingLissajous {
    /// Create a curve starting at phase 0
    pub fn new(center: (i32, i32), amplitude: f32, x_freq: f32, y_freq: f32) -> Self {
        Self {
            center,
            amplitude,
            x_freq,
            y_freq,
            phase: 0.0,
        }
    }

    /// Phase of the next frame
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Number of points plotted per frame
    ///
    /// A non-positive or NaN frequency plots the single point at `t = 0`.
    pub fn points_per_frame(&self) -> u32 {
        let min_freq = self.x_freq.min(self.y_freq);
        if min_freq > 0.0 {
            ceilf(2.0 / min_freq / SWEEP_TIME_STEP) as u32
        } else {
            1
        }
    }

    /// Draw the whole curve, flush, then wipe it from the framebuffer
    pub fn step<I, B>(&mut self, display: &mut GraphicDisplay<I, B>) -> Result<(), Error<I>>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let omega_x = 2.0 * PI * self.x_freq;
        let omega_y = 2.0 * PI * self.y_freq;

        let framebuffer = display.framebuffer_mut();
        for point in 0..self.points_per_frame() {
            let t = point as f32 * SWEEP_TIME_STEP;
            let offset = (
                self.amplitude * sinf(omega_x * t + self.phase),
                self.amplitude * sinf(omega_y * t),
            );
            plot(framebuffer, self.center, offset);
        }
        self.phase += PHASE_STEP;
        display.flush()?;
        self.clear_own_columns(display.framebuffer_mut());
        Ok(())
    }

    fn clear_own_columns<B>(&self, framebuffer: &mut Framebuffer<B>)
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let reach = ceilf(self.amplitude.abs()) as i32;
        let last = self.center.0.saturating_add(reach);
        if last < 0 {
            return;
        }
        let first = self.center.0.saturating_sub(reach).max(0);
        let to_column = |x: i32| u16::try_from(x).unwrap_or(u16::MAX);
        let last_page = framebuffer.dimensions().pages() - 1;
        framebuffer.clear_rect(to_column(first), to_column(last), 0, last_page);
    }

    /// Step until `cancel` returns true, then blank the panel
    ///
    /// `cancel` is checked before every frame. Returns the number of frames
    /// drawn.
    pub fn run<I, B, C>(
        &mut self,
        display: &mut GraphicDisplay<I, B>,
        mut cancel: C,
    ) -> Result<u32, Error<I>>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
        C: FnMut() -> bool,
    {
        debug!("rotating lissajous {}:{} started", self.x_freq, self.y_freq);
        let mut frames: u32 = 0;
        while !cancel() {
            self.step(display)?;
            frames = frames.saturating_add(1);
        }
        finish(display, frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::display::Display;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        /// Data writes of every flush, one entry per page
        data: Vec<Vec<u8>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }
    }

    fn test_display() -> GraphicDisplay<MockInterface, Vec<u8>> {
        let config = Builder::new().build().unwrap();
        GraphicDisplay::new(Display::new(MockInterface::default(), config), vec![0u8; 1024])
    }

    fn flushed_pages(display: GraphicDisplay<MockInterface, Vec<u8>>) -> Vec<Vec<u8>> {
        let (display, _) = display.release();
        display.release().data
    }

    /// Predicate returning false `frames` times, then true
    fn after(frames: u32) -> impl FnMut() -> bool {
        let mut calls = 0;
        move || {
            calls += 1;
            calls > frames
        }
    }

    #[test]
    fn test_lissajous_plots_one_point_per_frame() {
        let mut display = test_display();
        let mut curve = Lissajous::new((64, 32), 30.0, 1.0, 0.0, 1.0, 0.0);

        curve.step(&mut display).unwrap();
        curve.step(&mut display).unwrap();

        let fb = display.framebuffer();
        assert_eq!(fb.get_pixel(64, 32), Some(Color::On));
        // 30 * sin(0.025) = 0.75, rounds to 1
        assert_eq!(fb.get_pixel(65, 33), Some(Color::On));
        assert_eq!(fb.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 2);
        assert_eq!(flushed_pages(display).len(), 2 * 8);
    }

    #[test]
    fn test_lissajous_cancel_before_first_frame() {
        let mut display = test_display();
        display.framebuffer_mut().draw_str("L1", 0, 0);
        let mut curve = Lissajous::new((64, 32), 30.0, 1.0, 0.0, 1.0, 0.0);

        let frames = curve.run(&mut display, || true).unwrap();

        assert_eq!(frames, 0);
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
        let pages = flushed_pages(display);
        assert_eq!(pages, vec![vec![0u8; 128]; 8]);
    }

    #[test]
    fn test_lissajous_runs_until_cancelled() {
        let mut display = test_display();
        let mut curve = Lissajous::new((64, 32), 30.0, 2.0, 0.0, 3.0, 0.0);

        let frames = curve.run(&mut display, after(3)).unwrap();

        assert_eq!(frames, 3);
        // three frames plus the final blank one
        assert_eq!(flushed_pages(display).len(), 4 * 8);
    }

    #[test]
    fn test_lissajous_drops_off_panel_points() {
        let mut display = test_display();
        let mut curve = Lissajous::new((0, 0), 10.0, 1.0, -PI / 2.0, 1.0, -PI / 2.0);

        curve.step(&mut display).unwrap();

        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_lissajous_huge_amplitude_stays_off_panel() {
        let mut display = test_display();
        let mut curve = Lissajous::new((64, 32), 1.0e12, 1.0, 0.0, 1.0, 0.0);

        curve.step(&mut display).unwrap();
        curve.step(&mut display).unwrap();

        // t = 0 lands on the centre, t = 0.025 saturates far off the panel
        let fb = display.framebuffer();
        assert_eq!(fb.get_pixel(64, 32), Some(Color::On));
        assert_eq!(fb.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 1);
    }

    #[test]
    fn test_rotating_huge_amplitude_does_not_overflow() {
        let mut display = test_display();
        display.framebuffer_mut().fill(Color::On);
        let mut curve = RotatingLissajous::new((64, 32), 1.0e12, 2.0, 3.0);

        curve.step(&mut display).unwrap();

        // the wiped columns cover the whole panel
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_rotating_points_per_frame() {
        assert_eq!(RotatingLissajous::new((64, 32), 30.0, 1.0, 1.0).points_per_frame(), 400);
        assert_eq!(RotatingLissajous::new((64, 32), 30.0, 2.0, 3.0).points_per_frame(), 200);
        assert_eq!(RotatingLissajous::new((64, 32), 30.0, 0.0, 3.0).points_per_frame(), 1);
    }

    #[test]
    fn test_rotating_flushes_curve_then_clears_own_columns() {
        let mut display = test_display();
        display.framebuffer_mut().draw_str("L1R", 0, 0);
        display.framebuffer_mut().draw_char(b'X', 7, 17);
        let labels = display.framebuffer().as_bytes().to_vec();

        let mut curve = RotatingLissajous::new((64, 32), 30.0, 1.0, 1.0);
        curve.step(&mut display).unwrap();

        // columns 34..=94 are wiped, the labels outside survive
        assert_eq!(display.framebuffer().as_bytes(), labels.as_slice());
        assert!((curve.phase() - PHASE_STEP).abs() < f32::EPSILON);

        let pages = flushed_pages(display);
        assert_eq!(pages.len(), 8);
        // centre point (64, 32) made it into the flushed frame
        assert_eq!(pages[4][64] & 0x01, 0x01);
        assert!(pages.iter().any(|page| page[34..=94].iter().any(|b| *b != 0)));
    }

    #[test]
    fn test_rotating_clear_clamps_at_left_edge() {
        let mut display = test_display();
        display.framebuffer_mut().fill(Color::On);

        let mut curve = RotatingLissajous::new((5, 32), 10.0, 1.0, 1.0);
        curve.step(&mut display).unwrap();

        let page = display.framebuffer().page(0).unwrap();
        assert!(page[..=15].iter().all(|b| *b == 0));
        assert!(page[16..].iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_rotating_runs_until_cancelled() {
        let mut display = test_display();
        let mut curve = RotatingLissajous::new((64, 32), 30.0, 1.0, 2.0);

        let frames = curve.run(&mut display, after(2)).unwrap();

        assert_eq!(frames, 2);
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
        assert_eq!(flushed_pages(display).len(), 3 * 8);
    }
}
