//! ADS7828 command-byte encoding and addressing constants.
//!
//! Reference: Texas Instruments ADS7828 datasheet (SBAS181C).
//!
//! Every conversion is requested with a single command byte:
//!
//! ```text
//! bit 7    SD      single-ended (1) / differential (0)
//! bits 6:4 C2..C0  channel selection
//! bits 3:2 PD1:PD0 power-down mode
//! bits 1:0         unused, transmitted as zero
//! ```
//!
//! The SD and C2..C0 bits together form the 4-bit field tabulated in
//! datasheet Table 2; the PD bits are tabulated in Table 1.

/// 7-bit I2C device address with both address pins tied low.
pub const DEFAULT_I2C_ADDR: u8 = 0x48;

/// Voltage of the on-chip reference in volts.
pub const INTERNAL_REFERENCE_VOLTS: f32 = 2.5;

/// 7-bit I2C address for the given A1/A0 pin straps (0x48 to 0x4B).
#[must_use]
pub const fn i2c_address(a1: bool, a0: bool) -> u8 {
    DEFAULT_I2C_ADDR | ((a1 as u8) << 1) | (a0 as u8)
}

/// Input multiplexer configuration (datasheet Table 2).
///
/// The discriminant is the 4-bit SD/C2/C1/C0 field of the command byte.
/// Note the single-ended encodings interleave even and odd inputs, so
/// `SingleEnded5` is not `SingleEnded4 + 1` on the wire; use
/// [`Channel::single_ended`] to map a plain input index.
///
/// The discriminant also serves as the index into the per-channel scale and
/// averaging tables, so every one of the 16 selectors calibrates and smooths
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// CH0 against COM.
    SingleEnded0 = 0b1000,
    /// CH1 against COM.
    SingleEnded1 = 0b1100,
    /// CH2 against COM.
    SingleEnded2 = 0b1001,
    /// CH3 against COM.
    SingleEnded3 = 0b1101,
    /// CH4 against COM.
    SingleEnded4 = 0b1010,
    /// CH5 against COM.
    SingleEnded5 = 0b1110,
    /// CH6 against COM.
    SingleEnded6 = 0b1011,
    /// CH7 against COM.
    SingleEnded7 = 0b1111,
    /// CH0 = +IN, CH1 = -IN.
    Differential01 = 0b0000,
    /// CH2 = +IN, CH3 = -IN.
    Differential23 = 0b0001,
    /// CH4 = +IN, CH5 = -IN.
    Differential45 = 0b0010,
    /// CH6 = +IN, CH7 = -IN.
    Differential67 = 0b0011,
    /// CH1 = +IN, CH0 = -IN.
    Differential10 = 0b0100,
    /// CH3 = +IN, CH2 = -IN.
    Differential32 = 0b0101,
    /// CH5 = +IN, CH4 = -IN.
    Differential54 = 0b0110,
    /// CH7 = +IN, CH6 = -IN.
    Differential76 = 0b0111,
}

impl Channel {
    /// Map a single-ended input index (0 to 7, CHx against COM) to its
    /// interleaved Table 2 encoding.
    ///
    /// Covers boards that only wire the CHx-to-COM configurations, without
    /// the caller having to know the even/odd interleave.
    #[must_use]
    pub const fn single_ended(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::SingleEnded0),
            1 => Some(Self::SingleEnded1),
            2 => Some(Self::SingleEnded2),
            3 => Some(Self::SingleEnded3),
            4 => Some(Self::SingleEnded4),
            5 => Some(Self::SingleEnded5),
            6 => Some(Self::SingleEnded6),
            7 => Some(Self::SingleEnded7),
            _ => None,
        }
    }

    /// True for the CHx-to-COM configurations (SD bit set).
    #[must_use]
    pub const fn is_single_ended(self) -> bool {
        (self as u8) & 0b1000 != 0
    }

    /// Index into the per-channel scale and averaging tables.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Power-down mode, PD1/PD0 of the command byte (datasheet Table 1).
///
/// Controls which of the internal reference and the converter stay powered
/// between conversions. The device power-up default is
/// [`ReferenceOnConverterOn`](Self::ReferenceOnConverterOn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerDownMode {
    /// Power down between conversions.
    PowerDown = 0b00,
    /// Internal reference off, converter on.
    ReferenceOff = 0b01,
    /// Internal reference on, converter off.
    ReferenceOnConverterOff = 0b10,
    /// Internal reference on, converter on.
    ReferenceOnConverterOn = 0b11,
}

impl PowerDownMode {
    /// Whether the internal 2.5 V reference is powered in this mode.
    #[must_use]
    pub const fn internal_reference_enabled(self) -> bool {
        matches!(
            self,
            Self::ReferenceOnConverterOff | Self::ReferenceOnConverterOn
        )
    }

    /// Whether the converter is powered in this mode.
    #[must_use]
    pub const fn converter_enabled(self) -> bool {
        matches!(self, Self::ReferenceOff | Self::ReferenceOnConverterOn)
    }
}

/// Build the single-byte conversion command for a channel selection and
/// power-down mode.
///
/// Pure function of its inputs: SD/C2/C1/C0 in bits 7:4, PD1/PD0 in
/// bits 3:2, bits 1:0 zero.
#[must_use]
pub const fn encode_command(channel: Channel, mode: PowerDownMode) -> u8 {
    ((channel as u8) << 4) | ((mode as u8) << 2)
}
