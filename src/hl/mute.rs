use super::bit;
use crate::{
    configs::{SoftMuteTime, SoftStepTime},
    ll::SOFT_MUTE,
    TDA7419,
};

impl TDA7419 {
    /// Engages or releases soft mute
    pub fn set_soft_mute(&mut self, enable: bool) {
        self.ll.modify::<SOFT_MUTE>(|w| w.soft_mute(bit(enable)));
    }

    /// Returns the soft mute bit
    pub fn get_soft_mute(&self) -> bool {
        self.ll.read::<SOFT_MUTE>().soft_mute() != 0
    }

    /// Lets the external mute pin control soft mute
    pub fn set_mute_pin_enable(&mut self, enable: bool) {
        self.ll.modify::<SOFT_MUTE>(|w| w.mute_pin(bit(enable)));
    }

    /// Returns true if the mute pin is enabled
    pub fn get_mute_pin_enable(&self) -> bool {
        self.ll.read::<SOFT_MUTE>().mute_pin() != 0
    }

    /// Sets the soft mute time
    pub fn set_soft_mute_time(&mut self, time: SoftMuteTime) {
        self.ll.modify::<SOFT_MUTE>(|w| w.mute_time(time.bits()));
    }

    /// Returns the soft mute time
    ///
    /// Returns `None` for the reserved code 3.
    pub fn get_soft_mute_time(&self) -> Option<SoftMuteTime> {
        SoftMuteTime::from_bits(self.ll.read::<SOFT_MUTE>().mute_time())
    }

    /// Sets the soft step time
    pub fn set_soft_step_time(&mut self, time: SoftStepTime) {
        self.ll.modify::<SOFT_MUTE>(|w| w.step_time(time.bits()));
    }

    /// Returns the soft step time
    pub fn get_soft_step_time(&self) -> SoftStepTime {
        SoftStepTime::from_bits(self.ll.read::<SOFT_MUTE>().step_time()).unwrap_or_default()
    }

    /// Enables or disables fast clock mode
    pub fn set_clock_fast_mode(&mut self, enable: bool) {
        self.ll.modify::<SOFT_MUTE>(|w| w.fast_clock(bit(enable)));
    }

    /// Returns true if fast clock mode is enabled
    pub fn get_clock_fast_mode(&self) -> bool {
        self.ll.read::<SOFT_MUTE>().fast_clock() != 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::Register;

    #[test]
    fn power_on_values() {
        let tda = TDA7419::new();

        assert!(tda.get_soft_mute());
        assert!(tda.get_mute_pin_enable());
        assert_eq!(tda.get_soft_mute_time(), Some(SoftMuteTime::Ms0_96));
        assert_eq!(tda.get_soft_step_time(), SoftStepTime::Us1280);
        assert!(tda.get_clock_fast_mode());
    }

    #[test]
    fn mute_fields() {
        let mut tda = TDA7419::new();

        tda.set_soft_mute(false);
        tda.set_soft_mute_time(SoftMuteTime::Ms123);
        tda.set_soft_step_time(SoftStepTime::Us20480);
        tda.set_clock_fast_mode(false);
        tda.set_mute_pin_enable(false);

        assert_eq!(tda.registers().field(SOFT_MUTE::INDEX).value(), 0b0111_1000);
        assert_eq!(tda.get_soft_mute_time(), Some(SoftMuteTime::Ms123));
        assert_eq!(tda.get_soft_step_time(), SoftStepTime::Us20480);
    }

    #[test]
    fn reserved_mute_time() {
        let mut tda = TDA7419::new();

        tda.ll().modify::<SOFT_MUTE>(|w| w.mute_time(3));

        assert_eq!(tda.get_soft_mute_time(), None);
    }
}
