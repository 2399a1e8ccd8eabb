use super::{bit, clamp};
use crate::{
    configs::{InputSource, RearSpeakerSource},
    ll::{MAIN_SOURCE, SECOND_SOURCE},
    TDA7419,
};

/// Highest input gain in dB
const MAX_INPUT_GAIN: u8 = 15;

impl TDA7419 {
    /// Selects the main input
    ///
    /// Marks the input topology as changed.
    pub fn set_main_source(&mut self, source: InputSource) {
        self.ll.modify::<MAIN_SOURCE>(|w| w.source(source.bits()));
        self.topology_changed = true;
    }

    /// Returns the main input
    ///
    /// Returns `None` if the register holds a code without a declared meaning,
    /// which only the register-level API can write.
    pub fn get_main_source(&self) -> Option<InputSource> {
        InputSource::from_bits(self.ll.read::<MAIN_SOURCE>().source())
    }

    /// Sets the main input gain, `0..=15` dB
    pub fn set_input_gain(&mut self, gain: u8) {
        let gain = clamp("input gain", gain, 0, MAX_INPUT_GAIN);
        self.ll.modify::<MAIN_SOURCE>(|w| w.gain(gain));
    }

    /// Returns the main input gain in dB
    pub fn get_input_gain(&self) -> u8 {
        self.ll.read::<MAIN_SOURCE>().gain()
    }

    /// Enables or disables auto-zero
    pub fn set_auto_zero(&mut self, enable: bool) {
        self.ll.modify::<MAIN_SOURCE>(|w| w.auto_zero(bit(enable)));
    }

    /// Returns true if auto-zero is enabled
    pub fn get_auto_zero(&self) -> bool {
        self.ll.read::<MAIN_SOURCE>().auto_zero() != 0
    }

    /// Selects the second input
    ///
    /// Marks the input topology as changed.
    pub fn set_second_source(&mut self, source: InputSource) {
        self.ll.modify::<SECOND_SOURCE>(|w| w.source(source.bits()));
        self.topology_changed = true;
    }

    /// Returns the second input
    ///
    /// See [`TDA7419::get_main_source`] for when this returns `None`.
    pub fn get_second_source(&self) -> Option<InputSource> {
        InputSource::from_bits(self.ll.read::<SECOND_SOURCE>().source())
    }

    /// Sets the second input gain, `0..=15` dB
    pub fn set_second_source_gain(&mut self, gain: u8) {
        let gain = clamp("second source gain", gain, 0, MAX_INPUT_GAIN);
        self.ll.modify::<SECOND_SOURCE>(|w| w.gain(gain));
    }

    /// Returns the second input gain in dB
    pub fn get_second_source_gain(&self) -> u8 {
        self.ll.read::<SECOND_SOURCE>().gain()
    }

    /// Selects which input feeds the rear speakers
    ///
    /// Marks the input topology as changed.
    pub fn set_rear_speaker_source(&mut self, source: RearSpeakerSource) {
        self.ll
            .modify::<SECOND_SOURCE>(|w| w.rear_source(source.bits()));
        self.topology_changed = true;
    }

    /// Returns which input feeds the rear speakers
    pub fn get_rear_speaker_source(&self) -> RearSpeakerSource {
        // One bit, both codes are declared.
        RearSpeakerSource::from_bits(self.ll.read::<SECOND_SOURCE>().rear_source())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::Register;

    #[test]
    fn main_source_marks_topology() {
        let mut tda = TDA7419::new();
        tda.ll.clear_changed();
        tda.topology_changed = false;

        tda.set_main_source(InputSource::Se3);

        assert_eq!(tda.get_main_source(), Some(InputSource::Se3));
        assert!(tda.topology_changed());
        assert!(tda.changed_registers().eq([MAIN_SOURCE::INDEX]));
    }

    #[test]
    fn second_and_rear_source_mark_topology() {
        let mut tda = TDA7419::new();

        tda.topology_changed = false;
        tda.set_second_source(InputSource::Qd);
        assert!(tda.topology_changed());
        assert_eq!(tda.get_second_source(), Some(InputSource::Qd));

        tda.topology_changed = false;
        tda.set_rear_speaker_source(RearSpeakerSource::Second);
        assert!(tda.topology_changed());
        assert_eq!(tda.get_rear_speaker_source(), RearSpeakerSource::Second);
        assert_eq!(tda.registers().field(SECOND_SOURCE::INDEX).value(), 0xC0);
    }

    #[test]
    fn gains_clamp() {
        let mut tda = TDA7419::new();

        tda.set_input_gain(40);
        assert_eq!(tda.get_input_gain(), 15);

        tda.set_second_source_gain(4);
        assert_eq!(tda.get_second_source_gain(), 4);
        assert!(!tda.get_auto_zero());
    }

    #[test]
    fn gain_does_not_mark_topology() {
        let mut tda = TDA7419::new();
        tda.topology_changed = false;

        tda.set_input_gain(1);
        tda.set_auto_zero(true);

        assert!(!tda.topology_changed());
        assert!(tda.get_auto_zero());
        assert_eq!(tda.registers().field(MAIN_SOURCE::INDEX).value(), 0x8A);
    }

    #[test]
    fn reserved_source_codes() {
        let mut tda = TDA7419::new();

        tda.ll().modify::<MAIN_SOURCE>(|w| w.source(6));

        assert_eq!(tda.get_main_source(), None);
    }
}
