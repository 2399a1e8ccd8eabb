//! Low-level interface to the TDA7419
//!
//! This module implements the register-level mirror of the TDA7419. Users of
//! this library should typically not need to use this. Please consider using
//! the [high-level interface] instead.
//!
//! The TDA7419 cannot be read back over I²C. Every register therefore lives
//! in a [`BitField`], which holds the value the driver wants the device to
//! have plus the value that was last delivered to it. A register is *changed*
//! (dirty) exactly when those two differ.
//!
//! **NOTE**: Field write methods accept a `u8` even if the field is narrower.
//! If you pass a value that is too large for the field, it will be silently
//! truncated.
//!
//! [high-level interface]: ../hl/index.html

use core::fmt;

/// 7-bit I²C address of the TDA7419
pub const ADDRESS: u8 = 0x44;

/// Number of registers in the register file
pub const REGISTER_COUNT: usize = 17;

/// Sub-address flag: auto-increment the register pointer after each byte
pub const AUTO_INCREMENT: u8 = 0x20;

/// Sub-address flag: keep the current auto-zero state instead of running a
/// new auto-zero cycle
pub const AUTO_ZERO_REMAIN: u8 = 0x40;

/// Bits of the sub-address byte holding the register index
pub const SUB_ADDRESS_MASK: u8 = 0x1f;

/// The register whose delivery completes a pending input topology change
pub const TOPOLOGY_REGISTER: u8 = MAIN_SOURCE::INDEX;

/// Sub-address byte for writing the whole register file in one transaction
///
/// The start index is zero and the device auto-increments through all
/// registers. A pending topology change leaves out [`AUTO_ZERO_REMAIN`], so
/// the device runs an auto-zero cycle for the new input routing.
#[inline]
pub fn full_write_sub_address(topology_changed: bool) -> u8 {
    AUTO_INCREMENT | if topology_changed { 0 } else { AUTO_ZERO_REMAIN }
}

/// Sub-address byte for writing the single register `index`
#[inline]
pub fn register_sub_address(index: u8, topology_changed: bool) -> u8 {
    let remain = if index == TOPOLOGY_REGISTER && topology_changed {
        0
    } else {
        AUTO_ZERO_REMAIN
    };

    (index & SUB_ADDRESS_MASK) | remain
}

/// An 8-bit register value with change tracking
///
/// Bit positions count from the least significant bit. Every bit operation
/// ignores positions and ranges that don't fit into the byte: writes become
/// no-ops and reads return zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BitField {
    value: u8,
    committed: u8,
}

impl BitField {
    /// Create a field holding `value`, which also counts as committed
    pub const fn new(value: u8) -> Self {
        BitField {
            value,
            committed: value,
        }
    }

    /// Returns the current value
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Overwrites the whole byte
    #[inline]
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Returns the value that was last committed
    #[inline]
    pub fn committed(&self) -> u8 {
        self.committed
    }

    /// Sets the bit at `pos`
    pub fn set_bit(&mut self, pos: u8) {
        if pos < 8 {
            self.value |= 1 << pos;
        }
    }

    /// Clears the bit at `pos`
    pub fn clear_bit(&mut self, pos: u8) {
        if pos < 8 {
            self.value &= !(1 << pos);
        }
    }

    /// Flips the bit at `pos`
    pub fn toggle_bit(&mut self, pos: u8) {
        if pos < 8 {
            self.value ^= 1 << pos;
        }
    }

    /// Sets or clears the bit at `pos`
    pub fn write_bit(&mut self, pos: u8, bit: bool) {
        if bit {
            self.set_bit(pos);
        } else {
            self.clear_bit(pos);
        }
    }

    /// Returns true if the bit at `pos` is set
    pub fn is_bit_set(&self, pos: u8) -> bool {
        pos < 8 && self.value & (1 << pos) != 0
    }

    /// Clears the bits `[pos, pos + len)`
    pub fn clear_segment(&mut self, pos: u8, len: u8) {
        if let Some(mask) = mask(pos, len) {
            self.value &= !mask;
        }
    }

    /// Reads the `len` bits starting at `pos`, shifted down to bit 0
    pub fn read_value_at_bit(&self, pos: u8, len: u8) -> u8 {
        match mask(pos, len) {
            Some(mask) => (self.value & mask) >> pos,
            None => 0,
        }
    }

    /// Writes the low `len` bits of `value` into `[pos, pos + len)`
    ///
    /// Higher bits of `value` are dropped. Bits outside the range keep their
    /// value.
    pub fn write_value_at_bit(&mut self, pos: u8, value: u8, len: u8) {
        if let Some(mask) = mask(pos, len) {
            let shifted = ((value as u16) << pos) as u8;
            self.value = (self.value & !mask) | (shifted & mask);
        }
    }

    /// Returns true if the value differs from the committed one
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.value != self.committed
    }

    /// Marks the current value as committed
    #[inline]
    pub fn clear_changed(&mut self) {
        self.committed = self.value;
    }
}

/// Mask covering `[pos, pos + len)`, if that range lies within a byte
#[inline(always)]
fn mask(pos: u8, len: u8) -> Option<u8> {
    if len == 0 || pos > 7 || len > 8 - pos {
        return None;
    }

    Some((((1u16 << len) - 1) << pos) as u8)
}

/// The TDA7419 register file
///
/// Holds one [`BitField`] per register, created with the power-on defaults
/// from the register table below.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct RegisterMap {
    fields: [BitField; REGISTER_COUNT],
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterMap {
    /// Returns the field at `index`
    ///
    /// Panics if `index` is not below [`REGISTER_COUNT`].
    #[inline]
    pub fn field(&self, index: u8) -> &BitField {
        &self.fields[index as usize]
    }

    /// Returns the field at `index` for modification
    ///
    /// Panics if `index` is not below [`REGISTER_COUNT`].
    #[inline]
    pub fn field_mut(&mut self, index: u8) -> &mut BitField {
        &mut self.fields[index as usize]
    }

    /// Returns the current values of all registers, in index order
    pub fn values(&self) -> [u8; REGISTER_COUNT] {
        let mut values = [0; REGISTER_COUNT];
        for (value, field) in values.iter_mut().zip(self.fields.iter()) {
            *value = field.value();
        }

        values
    }

    /// Returns true if any register changed since its last commit
    pub fn is_changed(&self) -> bool {
        self.fields.iter().any(BitField::is_changed)
    }

    /// Iterates over the indices of all changed registers
    pub fn changed(&self) -> impl Iterator<Item = u8> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_changed())
            .map(|(index, _)| index as u8)
    }

    /// Marks every register as committed
    pub fn clear_changed(&mut self) {
        self.fields.iter_mut().for_each(BitField::clear_changed);
    }

    /// Read the fields of register `R`
    #[inline]
    pub fn read<R: Register>(&self) -> R::Read {
        self.read_at::<R>(R::INDEX)
    }

    /// Modify the fields of register `R`
    ///
    /// The closure starts from the current value, so fields it doesn't touch
    /// keep their value.
    #[inline]
    pub fn modify<R: Register>(&mut self, f: impl FnOnce(&mut R::Write) -> &mut R::Write) {
        self.modify_at::<R>(R::INDEX, f)
    }

    /// Read register `index` through the field layout of `R`
    ///
    /// Used for registers sharing a layout, like the four speaker
    /// attenuators.
    #[inline]
    pub fn read_at<R: Register>(&self, index: u8) -> R::Read {
        R::reader(*self.field(index))
    }

    /// Modify register `index` through the field layout of `R`
    #[inline]
    pub fn modify_at<R: Register>(
        &mut self,
        index: u8,
        f: impl FnOnce(&mut R::Write) -> &mut R::Write,
    ) {
        let field = self.field_mut(index);
        let mut w = R::writer(*field);
        f(&mut w);
        *field = R::into_field(w);
    }

    /// Emits a dump of all registers on the debug log
    pub fn dump(&self) {
        for (index, field) in self.fields.iter().enumerate() {
            let marker = if field.is_changed() { "*" } else { " " };
            debug!(
                "register {}{}: {:02x} | {:08b}",
                index,
                marker,
                field.value(),
                field.value()
            );
        }
    }
}

impl fmt::Debug for RegisterMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, field) in self.fields.iter().enumerate() {
            let marker = if field.is_changed() { '*' } else { ' ' };
            writeln!(
                f,
                "register {:2}{}: {:02x} | {:08b}",
                index,
                marker,
                field.value(),
                field.value()
            )?;
        }

        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RegisterMap {
    fn format(&self, f: defmt::Formatter) {
        for (index, field) in self.fields.iter().enumerate() {
            let marker = if field.is_changed() { "*" } else { " " };
            defmt::write!(
                f,
                "register {}{}: {:02x} | {:08b}\n",
                index,
                marker,
                field.value(),
                field.value()
            );
        }
    }
}

/// Implemented for all registers
///
/// This is a mostly internal trait that should not be implemented or used
/// directly by users of this crate. It is exposed through the public API
/// though, so it can't be made private.
pub trait Register {
    /// The register index, equal to its sub-address
    const INDEX: u8;

    /// The power-on value
    const DEFAULT: u8;

    /// The type that is used to read from the register
    type Read;

    /// The type that is used to write to the register
    type Write;

    /// Wrap a field for reading
    fn reader(field: BitField) -> Self::Read;

    /// Wrap a field for writing
    fn writer(field: BitField) -> Self::Write;

    /// Unwrap a field after writing
    fn into_field(w: Self::Write) -> BitField;
}

/// Generates register implementations
macro_rules! impl_register {
    (
        $(
            $index:expr,
            $default:expr,
            $name:ident($name_lower:ident) {
            #[$doc:meta]
            $(
                $field:ident,
                $first_bit:expr,
                $last_bit:expr;
                #[$field_doc:meta]
            )*
            }
        )*
    ) => {
        $(
            #[$doc]
            #[allow(non_camel_case_types)]
            pub struct $name;

            impl Register for $name {
                const INDEX:   u8 = $index;
                const DEFAULT: u8 = $default;

                type Read  = $name_lower::R;
                type Write = $name_lower::W;

                fn reader(field: BitField) -> Self::Read {
                    $name_lower::R(field)
                }

                fn writer(field: BitField) -> Self::Write {
                    $name_lower::W(field)
                }

                fn into_field(w: Self::Write) -> BitField {
                    w.0
                }
            }

            #[$doc]
            pub mod $name_lower {
                use core::fmt;

                use crate::ll::BitField;

                /// Used to read from the register
                pub struct R(pub(crate) BitField);

                impl R {
                    $(
                        #[$field_doc]
                        #[inline(always)]
                        pub fn $field(&self) -> u8 {
                            const LEN: u8 = $last_bit - $first_bit + 1;
                            self.0.read_value_at_bit($first_bit, LEN)
                        }
                    )*
                }

                impl fmt::Debug for R {
                    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "0x{:02x}", self.0.value())
                    }
                }

                #[cfg(feature = "defmt")]
                impl defmt::Format for R {
                    fn format(&self, f: defmt::Formatter) {
                        defmt::write!(f, "0x{:02x}", self.0.value());
                    }
                }

                /// Used to write to the register
                pub struct W(pub(crate) BitField);

                impl W {
                    $(
                        #[$field_doc]
                        #[inline(always)]
                        pub fn $field(&mut self, value: u8) -> &mut Self {
                            const LEN: u8 = $last_bit - $first_bit + 1;
                            self.0.write_value_at_bit($first_bit, value, LEN);
                            self
                        }
                    )*
                }
            }
        )*

        impl RegisterMap {
            /// Create a register file holding the power-on defaults
            ///
            /// Nothing counts as changed until a field is written.
            pub const fn new() -> Self {
                let mut fields = [BitField::new(0); REGISTER_COUNT];
                $(
                    fields[<$name as Register>::INDEX as usize] =
                        BitField::new(<$name as Register>::DEFAULT);
                )*

                RegisterMap { fields }
            }
        }
    }
}

impl_register! {
    0x00, 0x1A, MAIN_SOURCE(main_source) { /// Main source selector
        source,     0, 2; /// Input source
        gain,       3, 6; /// Input gain in dB
        auto_zero,  7, 7; /// Auto-zero enable
    }
    0x01, 0x08, LOUDNESS(loudness) { /// Loudness
        attenuation, 0, 3; /// Attenuation in dB
        center_freq, 4, 5; /// Center frequency
        high_boost,  6, 6; /// High boost
        soft_step,   7, 7; /// Soft step
    }
    0x02, 0xB7, SOFT_MUTE(soft_mute) { /// Soft mute and clocking
        soft_mute,  0, 0; /// Soft mute
        mute_pin,   1, 1; /// Mute pin enable
        mute_time,  2, 3; /// Soft mute time
        step_time,  4, 6; /// Soft step time
        fast_clock, 7, 7; /// Fast clock mode
    }
    0x03, 0x00, MASTER_VOLUME(master_volume) { /// Master volume
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x04, 0x80, TREBLE(treble) { /// Treble filter
        level,              0, 4; /// Level code
        center_freq,        5, 6; /// Center frequency
        reference_internal, 7, 7; /// Internal reference select
    }
    0x05, 0x00, MIDDLE(middle) { /// Middle filter
        level,     0, 4; /// Level code
        q_factor,  5, 6; /// Q factor
        soft_step, 7, 7; /// Soft step
    }
    0x06, 0x00, BASS(bass) { /// Bass filter
        level,     0, 4; /// Level code
        q_factor,  5, 6; /// Q factor
        soft_step, 7, 7; /// Soft step
    }
    0x07, 0x41, SECOND_SOURCE(second_source) { /// Second source selector
        source,      0, 2; /// Input source
        gain,        3, 6; /// Input gain in dB
        rear_source, 7, 7; /// Rear speaker source
    }
    0x08, 0xE0, SUB_MID_BASS(sub_mid_bass) { /// Subwoofer, middle and bass
        sub_cutoff,         0, 1; /// Subwoofer cut-off frequency
        middle_center_freq, 2, 3; /// Middle center frequency
        bass_center_freq,   4, 5; /// Bass center frequency
        bass_dc_mode,       6, 6; /// Bass DC mode
        smoothing_filter,   7, 7; /// Smoothing filter
    }
    0x09, 0x27, MIXING(mixing) { /// Mixing programming
        to_left_front,    0, 0; /// Mix to left front speaker
        to_right_front,   1, 1; /// Mix to right front speaker
        enable,           2, 2; /// Mixing enable
        subwoofer_enable, 3, 3; /// Subwoofer enable
        gain_effect,      4, 7; /// Gain effect (high pass)
    }
    0x0A, 0x00, SPEAKER_LF(speaker_lf) { /// Left front speaker attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x0B, 0x00, SPEAKER_RF(speaker_rf) { /// Right front speaker attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x0C, 0x00, SPEAKER_LR(speaker_lr) { /// Left rear speaker attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x0D, 0x00, SPEAKER_RR(speaker_rr) { /// Right rear speaker attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x0E, 0x00, MIXING_LEVEL(mixing_level) { /// Mixing channel attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x0F, 0x00, SUBWOOFER_LEVEL(subwoofer_level) { /// Subwoofer attenuator
        volume,    0, 6; /// Volume code
        soft_step, 7, 7; /// Soft step
    }
    0x10, 0x1C, SPECTRUM(spectrum) { /// Spectrum analyzer and clock source
        filter_q,       0, 0; /// Band pass Q factor
        auto_reset,     1, 1; /// Auto reset
        source,         2, 2; /// Source
        run,            3, 3; /// Run
        reset,          4, 4; /// Reset
        external_clock, 5, 5; /// External clock
        coupling,       6, 7; /// Coupling mode
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn write_then_read_every_range() {
        for pos in 0..8u8 {
            for len in 1..=(8 - pos) {
                for value in 0..(1u16 << len) {
                    let mut field = BitField::new(0xA5);
                    field.write_value_at_bit(pos, value as u8, len);

                    assert_eq!(field.read_value_at_bit(pos, len), value as u8);

                    let outside = !mask(pos, len).unwrap();
                    assert_eq!(field.value() & outside, 0xA5 & outside);
                }
            }
        }
    }

    #[test]
    fn write_truncates_high_bits() {
        let mut field = BitField::new(0);
        field.write_value_at_bit(2, 0xFF, 3);

        assert_eq!(field.value(), 0b0001_1100);
    }

    #[test]
    fn invalid_ranges_are_ignored() {
        let mut field = BitField::new(0x3C);

        field.write_value_at_bit(8, 1, 1);
        field.write_value_at_bit(6, 0b111, 3);
        field.write_value_at_bit(0, 0xFF, 0);
        field.set_bit(9);
        field.clear_segment(7, 2);

        assert_eq!(field.value(), 0x3C);
        assert!(!field.is_changed());
        assert_eq!(field.read_value_at_bit(6, 3), 0);
        assert_eq!(field.read_value_at_bit(8, 1), 0);
        assert!(!field.is_bit_set(8));
    }

    #[test]
    fn single_bit_operations() {
        let mut field = BitField::new(0);

        field.set_bit(7);
        assert_eq!(field.value(), 0x80);
        field.toggle_bit(0);
        assert_eq!(field.value(), 0x81);
        field.write_bit(7, false);
        assert_eq!(field.value(), 0x01);
        field.clear_bit(0);
        assert_eq!(field.value(), 0x00);
        field.write_bit(3, true);
        assert!(field.is_bit_set(3));
        field.set_value(0xFF);
        field.clear_segment(2, 4);
        assert_eq!(field.value(), 0b1100_0011);
    }

    #[test]
    fn change_tracking() {
        let mut field = BitField::new(0x12);
        assert!(!field.is_changed());

        field.write_value_at_bit(0, 0x2, 4);
        assert!(!field.is_changed(), "rewriting the same value is no change");

        field.write_value_at_bit(0, 0x3, 4);
        assert!(field.is_changed());
        assert_eq!(field.committed(), 0x12);

        field.clear_changed();
        field.clear_changed();
        assert!(!field.is_changed());
        assert_eq!(field.committed(), 0x13);

        field.toggle_bit(7);
        field.toggle_bit(7);
        assert!(!field.is_changed(), "a write back to the committed value is clean");
    }

    #[test]
    fn register_map_defaults() {
        let map = RegisterMap::new();

        assert_eq!(
            map.values(),
            [
                0x1A, 0x08, 0xB7, 0x00, 0x80, 0x00, 0x00, 0x41, 0xE0, 0x27, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x1C,
            ]
        );
        assert!(!map.is_changed());
        assert_eq!(map.changed().count(), 0);

        assert_eq!(map.field(MAIN_SOURCE::INDEX).value(), MAIN_SOURCE::DEFAULT);
        assert_eq!(map.field(SOFT_MUTE::INDEX).value(), SOFT_MUTE::DEFAULT);
        assert_eq!(map.field(SECOND_SOURCE::INDEX).value(), SECOND_SOURCE::DEFAULT);
        assert_eq!(map.field(SPECTRUM::INDEX).value(), SPECTRUM::DEFAULT);
    }

    #[test]
    fn modify_keeps_untouched_fields() {
        let mut map = RegisterMap::new();

        map.modify::<MAIN_SOURCE>(|w| w.gain(15));

        let r = map.read::<MAIN_SOURCE>();
        assert_eq!(r.gain(), 15);
        assert_eq!(r.source(), 2);
        assert_eq!(r.auto_zero(), 0);
        assert_eq!(map.field(MAIN_SOURCE::INDEX).value(), 0x7A);
        assert!(map.changed().eq([MAIN_SOURCE::INDEX]));

        map.modify_at::<SPEAKER_LF>(SPEAKER_RR::INDEX, |w| w.soft_step(1));
        assert_eq!(map.field(SPEAKER_RR::INDEX).value(), 0x80);
        assert!(map.changed().eq([MAIN_SOURCE::INDEX, SPEAKER_RR::INDEX]));

        map.clear_changed();
        assert!(!map.is_changed());
    }

    #[test]
    fn sub_addresses() {
        assert_eq!(full_write_sub_address(true), 0x20);
        assert_eq!(full_write_sub_address(false), 0x60);

        assert_eq!(register_sub_address(MAIN_SOURCE::INDEX, true), 0x00);
        assert_eq!(register_sub_address(MAIN_SOURCE::INDEX, false), 0x40);
        assert_eq!(register_sub_address(SECOND_SOURCE::INDEX, true), 0x47);
        assert_eq!(register_sub_address(SPECTRUM::INDEX, false), 0x50);
    }
}
