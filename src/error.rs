//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer storage ([`BufferError`]) and panel operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferError`] - Framebuffer storage of the wrong length
//! - [`Error`] - Runtime errors during panel operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! Out-of-range pixel and glyph coordinates are not errors: drawing
//! operations silently drop whatever falls outside the panel.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{BuilderError, Dimensions};
//!
//! // Height must be a multiple of 8
//! let result = Dimensions::new(128, 60);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Too wide for the controller
//! let result = Dimensions::new(256, 64);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns) supported by the SSD1306 controller
pub const MAX_COLUMNS: u16 = 128;

/// Maximum common outputs (rows) supported by the SSD1306 controller
///
/// NOTE: 128x32 and 96x16 modules wire fewer commons; configure
/// [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 64;

/// Errors that can occur when talking to the panel
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Buffer handed to the panel does not match the panel size
    ///
    /// A flush always transfers exactly `dimensions.buffer_size()` bytes.
    SizeMismatch {
        /// Required buffer size in bytes
        expected: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Dimensions outside the controller limits
    ///
    /// Only reachable when `Dimensions` or `Config` are assembled by hand.
    InvalidDimensions {
        /// Number of columns (width)
        width: u16,
        /// Number of rows (height)
        height: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::SizeMismatch { expected, provided } => write!(
                f,
                "Buffer size mismatch: expected {expected} bytes, provided {provided}"
            ),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::SizeMismatch { expected, provided } => {
                Self::SizeMismatch { expected, provided }
            }
            BufferError::InvalidDimensions { width, height } => {
                Self::InvalidDimensions { width, height }
            }
        }
    }
}

/// Errors raised by framebuffer storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Storage or bitmap length differs from `width * height / 8`
    SizeMismatch {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
    /// Dimensions bypassed [`Dimensions::new`](crate::config::Dimensions::new)
    /// and violate the controller limits
    InvalidDimensions {
        /// Number of columns (width)
        width: u16,
        /// Number of rows (height)
        height: u16,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SizeMismatch { expected, provided } => write!(
                f,
                "Bitmap size mismatch: expected {expected} bytes, provided {provided}"
            ),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid framebuffer dimensions {width}x{height}"
            ),
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns (width) requested
        width: u16,
        /// Number of rows (height) requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
