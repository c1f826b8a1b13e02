//! Platform-agnostic driver for the TI ADS7828, a 12-bit, 8-channel
//! analog-to-digital converter with an I2C interface and an internal 2.5 V
//! reference.
//!
//! Reference: Texas Instruments ADS7828 datasheet (SBAS181C).
//!
//! The driver is generic over any blocking [`embedded_hal::i2c::I2c`] bus
//! and translates high-level read requests into the single-byte command
//! encoding the converter expects: channel selection in the upper nibble,
//! power-down mode in bits 3:2. On top of the raw transaction it offers
//! per-channel calibration scaling and optional ring-buffer averaging.
//!
//! # Reading a channel
//!
//! ```no_run
//! use ads7828::{Ads7828, Channel, DEFAULT_I2C_ADDR};
//!
//! fn battery_volts<I>(i2c: I) -> Result<f32, I::Error>
//! where
//!     I: embedded_hal::i2c::I2c,
//! {
//!     let mut adc = Ads7828::new(i2c, DEFAULT_I2C_ADDR);
//!     // Smooth a noisy rail over the last 8 conversions.
//!     adc.enable_averaging(Channel::SingleEnded0, 8);
//!     // 2:1 divider in front of the input.
//!     adc.set_scale(Channel::SingleEnded0, 2.0);
//!     adc.read_voltage(Channel::SingleEnded0)
//! }
//! ```
//!
//! # Reference voltage handling
//!
//! The power-down mode and the reference voltage used for conversion are
//! coupled: selecting a mode that powers the internal reference snaps the
//! conversion reference back to 2.5 V, and supplying an external reference
//! via [`Ads7828::set_reference_external`] forces the internal reference
//! off (latched on the bus immediately). See [`Ads7828`] for the exact
//! rules.
//!
//! # Features
//!
//! - `defmt`: derive `defmt::Format` on the public enums.

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::doc_markdown)] // register and pin names in doc comments

mod averaging;
mod command;
mod driver;

pub use averaging::MAX_AVERAGING_DEPTH;
pub use command::{
    encode_command, i2c_address, Channel, PowerDownMode, DEFAULT_I2C_ADDR,
    INTERNAL_REFERENCE_VOLTS,
};
pub use driver::{Ads7828, FULL_SCALE};
