//! ADS7828 driver object: bus transactions, mode/reference state and
//! per-channel conditioning.

use embedded_hal::i2c::I2c;

use crate::averaging::AveragingBuffer;
use crate::command::{encode_command, Channel, PowerDownMode, INTERNAL_REFERENCE_VOLTS};

/// Full-scale 12-bit code. Raw code 4095 corresponds to the reference
/// voltage; this divisor is fixed by the converter's resolution.
pub const FULL_SCALE: f32 = 4095.0;

/// One table entry per 4-bit channel selector.
const CHANNEL_COUNT: usize = 16;

/// Blocking driver for the ADS7828.
///
/// Owns the I2C bus handle and the full conversion state: the active
/// [`PowerDownMode`], the reference voltage used for code-to-voltage
/// arithmetic, a per-channel calibration scale table and optional
/// per-channel averaging rings.
///
/// Every read is a blocking two-phase transaction: a one-byte command write
/// followed by a two-byte conversion read. The driver is single-threaded;
/// callers sharing one instance across contexts must serialize access
/// themselves.
///
/// # Mode and reference coupling
///
/// The power-down mode and the stored reference voltage are not independent:
///
/// - entering a mode with the internal reference enabled resets the stored
///   reference to 2.5 V;
/// - supplying an external reference voltage forces the mode to
///   [`PowerDownMode::ReferenceOff`] so the device stops driving its REF pin.
///
/// Entering a reference-off mode does NOT clear a previously stored external
/// reference value: the mode controls hardware reference power, the stored
/// value feeds the host-side conversion arithmetic.
///
/// # Example
///
/// ```no_run
/// use ads7828::{Ads7828, Channel, DEFAULT_I2C_ADDR};
///
/// fn sample<I>(i2c: I) -> Result<f32, I::Error>
/// where
///     I: embedded_hal::i2c::I2c,
/// {
///     let mut adc = Ads7828::new(i2c, DEFAULT_I2C_ADDR);
///     adc.enable_averaging(Channel::SingleEnded0, 4);
///     adc.read_voltage(Channel::SingleEnded0)
/// }
/// ```
pub struct Ads7828<I2C> {
    i2c: I2C,
    address: u8,
    mode: PowerDownMode,
    reference_voltage: f32,
    scale: [f32; CHANNEL_COUNT],
    averaging: [AveragingBuffer; CHANNEL_COUNT],
}

impl<I2C: I2c> Ads7828<I2C> {
    /// Create a driver using the internal 2.5 V reference.
    ///
    /// Matches the device power-up state
    /// ([`PowerDownMode::ReferenceOnConverterOn`]); performs no bus traffic.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            mode: PowerDownMode::ReferenceOnConverterOn,
            reference_voltage: INTERNAL_REFERENCE_VOLTS,
            scale: [1.0; CHANNEL_COUNT],
            averaging: core::array::from_fn(|_| AveragingBuffer::default()),
        }
    }

    /// Create a driver for operation from an external reference voltage.
    ///
    /// Switches the device to [`PowerDownMode::ReferenceOff`] immediately,
    /// which issues one dummy conversion on the bus.
    ///
    /// # Errors
    ///
    /// Propagates the bus error if the mode-latching transaction fails.
    pub fn with_external_reference(
        i2c: I2C,
        address: u8,
        volts: f32,
    ) -> Result<Self, I2C::Error> {
        let mut driver = Self::new(i2c, address);
        driver.set_reference_external(volts)?;
        Ok(driver)
    }

    /// Release the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// The active power-down mode.
    pub fn power_mode(&self) -> PowerDownMode {
        self.mode
    }

    /// The reference voltage currently used for code-to-voltage conversion.
    pub fn reference_voltage(&self) -> f32 {
        self.reference_voltage
    }

    /// Read one conversion as a raw 12-bit code (0 to 4095).
    ///
    /// Issues the command byte for `channel` and the active power-down mode,
    /// then reads the two-byte big-endian result. Bits 15:12 of the
    /// reassembled value are transmitted as zero by the device, so no
    /// masking is applied. Averaging and scaling are bypassed.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error; the driver itself adds no retry or
    /// validation on top.
    pub fn read_raw(&mut self, channel: Channel) -> Result<u16, I2C::Error> {
        let command = encode_command(channel, self.mode);
        self.i2c.write(self.address, &[command])?;
        let mut data = [0u8; 2];
        self.i2c.read(self.address, &mut data)?;
        Ok(u16::from_be_bytes(data))
    }

    /// Read one conversion through the channel's averaging ring.
    ///
    /// With averaging disabled (depth 0 or 1) this behaves exactly like
    /// [`read_raw`](Self::read_raw). Otherwise the new code overwrites the
    /// oldest ring slot and the mean over all slots is returned. Slots start
    /// at zero, so the result only settles once `depth` samples have been
    /// taken.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error.
    pub fn read_raw_averaged(&mut self, channel: Channel) -> Result<f32, I2C::Error> {
        let raw = self.read_raw(channel)?;
        let ring = &mut self.averaging[channel.index()];
        if !ring.is_enabled() {
            return Ok(f32::from(raw));
        }
        ring.push(raw);
        Ok(ring.mean())
    }

    /// Read a calibrated voltage:
    /// `code / 4095.0 * reference_voltage * scale`.
    ///
    /// `code` is the averaged value when averaging is enabled for `channel`,
    /// the raw code otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error.
    pub fn read_voltage(&mut self, channel: Channel) -> Result<f32, I2C::Error> {
        let code = self.read_raw_averaged(channel)?;
        Ok(code / FULL_SCALE * self.reference_voltage * self.scale[channel.index()])
    }

    /// Switch the power-down mode.
    ///
    /// Entering a mode with the internal reference enabled resets the stored
    /// reference voltage to 2.5 V. Entering a reference-off mode leaves the
    /// stored value alone: a previously configured external reference keeps
    /// feeding the conversion arithmetic.
    ///
    /// With `apply_now` the new command bits are latched by an immediate
    /// dummy conversion; otherwise they take effect with the next read.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error from the dummy conversion. Never
    /// fails when `apply_now` is false.
    pub fn set_power_mode(
        &mut self,
        mode: PowerDownMode,
        apply_now: bool,
    ) -> Result<(), I2C::Error> {
        self.apply_power_mode(mode);
        if apply_now {
            // The device only latches PD1/PD0 from a command byte, so issue
            // a throwaway conversion. Raw read: the averaging rings must not
            // see this sample.
            self.read_raw(Channel::SingleEnded0)?;
        }
        Ok(())
    }

    /// Use an externally supplied reference voltage for conversions.
    ///
    /// If the internal reference is currently powered, the mode is forced to
    /// [`PowerDownMode::ReferenceOff`] and latched immediately (exactly one
    /// bus transaction). If the reference is already off, including
    /// [`PowerDownMode::PowerDown`], only the stored value changes and no
    /// bus traffic occurs.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error from the mode-latching transaction.
    pub fn set_reference_external(&mut self, volts: f32) -> Result<(), I2C::Error> {
        self.reference_voltage = volts;
        if self.mode.internal_reference_enabled() {
            self.set_power_mode(PowerDownMode::ReferenceOff, true)?;
        }
        Ok(())
    }

    /// Go back to the internal 2.5 V reference.
    ///
    /// Forces [`PowerDownMode::ReferenceOnConverterOn`], latched
    /// immediately.
    ///
    /// # Errors
    ///
    /// Propagates the transport's error from the mode-latching transaction.
    pub fn set_reference_internal(&mut self) -> Result<(), I2C::Error> {
        self.set_power_mode(PowerDownMode::ReferenceOnConverterOn, true)
    }

    /// Single transition point for the mode/reference coupling.
    fn apply_power_mode(&mut self, mode: PowerDownMode) {
        self.mode = mode;
        if mode.internal_reference_enabled() {
            self.reference_voltage = INTERNAL_REFERENCE_VOLTS;
        }
    }

    /// Set the host-side calibration multiplier for a channel.
    ///
    /// Applied after code-to-voltage conversion; never transmitted to the
    /// device.
    pub fn set_scale(&mut self, channel: Channel, factor: f32) {
        self.scale[channel.index()] = factor;
    }

    /// The calibration multiplier for a channel (1.0 unless configured).
    pub fn get_scale(&self, channel: Channel) -> f32 {
        self.scale[channel.index()]
    }

    /// Derive the scale factor for an input wired behind a voltage divider
    /// of `r_top` over `r_bottom` ohms: `(r_top + r_bottom) / r_bottom`.
    pub fn set_scale_from_divider(&mut self, channel: Channel, r_top: f32, r_bottom: f32) {
        self.set_scale(channel, (r_top + r_bottom) / r_bottom);
    }

    /// Reset a channel's calibration multiplier to 1.0.
    pub fn reset_scale(&mut self, channel: Channel) {
        self.set_scale(channel, 1.0);
    }

    /// Reset every channel's calibration multiplier to 1.0.
    pub fn reset_scale_all(&mut self) {
        self.scale = [1.0; CHANNEL_COUNT];
    }

    /// Enable averaging for a channel with the given ring depth.
    ///
    /// The ring is zero-initialized; depth is clamped to
    /// [`MAX_AVERAGING_DEPTH`](crate::MAX_AVERAGING_DEPTH). A depth of 0 or
    /// 1 means "no averaging" and is a no-op that leaves any existing ring
    /// untouched; call [`disable_averaging`](Self::disable_averaging) to
    /// actually turn it off.
    pub fn enable_averaging(&mut self, channel: Channel, depth: usize) {
        self.averaging[channel.index()].enable(depth);
    }

    /// Disable averaging for a channel and release its ring.
    ///
    /// Idempotent: calling it again once disabled does nothing.
    pub fn disable_averaging(&mut self, channel: Channel) {
        self.averaging[channel.index()].disable();
    }

    /// Zero the contents of a channel's ring without changing its depth.
    pub fn clear_averaging(&mut self, channel: Channel) {
        self.averaging[channel.index()].clear();
    }

    /// The configured averaging depth for a channel; 0 when disabled.
    pub fn averaging_depth(&self, channel: Channel) -> usize {
        self.averaging[channel.index()].depth()
    }
}
