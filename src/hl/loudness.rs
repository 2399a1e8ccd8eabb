use super::{bit, clamp};
use crate::{configs::LoudnessCenterFreq, ll::LOUDNESS, TDA7419};

impl TDA7419 {
    /// Sets the loudness attenuation, `0..=15` dB
    pub fn set_loudness_attenuation(&mut self, attenuation: u8) {
        let attenuation = clamp("loudness attenuation", attenuation, 0, 15);
        self.ll.modify::<LOUDNESS>(|w| w.attenuation(attenuation));
    }

    /// Returns the loudness attenuation in dB
    pub fn get_loudness_attenuation(&self) -> u8 {
        self.ll.read::<LOUDNESS>().attenuation()
    }

    /// Sets the loudness center frequency
    pub fn set_loudness_center_freq(&mut self, freq: LoudnessCenterFreq) {
        self.ll.modify::<LOUDNESS>(|w| w.center_freq(freq.bits()));
    }

    /// Returns the loudness center frequency
    pub fn get_loudness_center_freq(&self) -> LoudnessCenterFreq {
        LoudnessCenterFreq::from_bits(self.ll.read::<LOUDNESS>().center_freq()).unwrap_or_default()
    }

    /// Enables or disables the loudness high boost
    pub fn set_loudness_high_boost(&mut self, enable: bool) {
        self.ll.modify::<LOUDNESS>(|w| w.high_boost(bit(enable)));
    }

    /// Returns true if the loudness high boost is enabled
    pub fn get_loudness_high_boost(&self) -> bool {
        self.ll.read::<LOUDNESS>().high_boost() != 0
    }

    /// Enables or disables loudness soft step
    pub fn set_loudness_soft_step(&mut self, enable: bool) {
        self.ll.modify::<LOUDNESS>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if loudness soft step is enabled
    pub fn get_loudness_soft_step(&self) -> bool {
        self.ll.read::<LOUDNESS>().soft_step() != 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::Register;

    #[test]
    fn loudness_fields() {
        let mut tda = TDA7419::new();

        tda.set_loudness_attenuation(200);
        tda.set_loudness_center_freq(LoudnessCenterFreq::Hz2400);
        tda.set_loudness_high_boost(true);

        assert_eq!(tda.get_loudness_attenuation(), 15);
        assert_eq!(tda.get_loudness_center_freq(), LoudnessCenterFreq::Hz2400);
        assert!(tda.get_loudness_high_boost());
        assert!(!tda.get_loudness_soft_step());
        assert_eq!(tda.registers().field(LOUDNESS::INDEX).value(), 0x7F);
    }
}
