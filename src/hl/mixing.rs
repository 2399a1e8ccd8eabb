use super::bit;
use crate::{
    configs::{MixingGainEffect, SubCutoffFreq},
    ll::{MIXING, SUB_MID_BASS},
    TDA7419,
};

impl TDA7419 {
    /// Routes the mixing channel to the left front speaker
    pub fn set_mix_to_left_front(&mut self, enable: bool) {
        self.ll.modify::<MIXING>(|w| w.to_left_front(bit(enable)));
    }

    /// Returns true if the mixing channel feeds the left front speaker
    pub fn get_mix_to_left_front(&self) -> bool {
        self.ll.read::<MIXING>().to_left_front() != 0
    }

    /// Routes the mixing channel to the right front speaker
    pub fn set_mix_to_right_front(&mut self, enable: bool) {
        self.ll.modify::<MIXING>(|w| w.to_right_front(bit(enable)));
    }

    /// Returns true if the mixing channel feeds the right front speaker
    pub fn get_mix_to_right_front(&self) -> bool {
        self.ll.read::<MIXING>().to_right_front() != 0
    }

    /// Enables or disables mixing
    pub fn set_mixing_enable(&mut self, enable: bool) {
        self.ll.modify::<MIXING>(|w| w.enable(bit(enable)));
    }

    /// Returns the mixing enable bit
    pub fn get_mixing_enable(&self) -> bool {
        self.ll.read::<MIXING>().enable() != 0
    }

    /// Enables or disables the subwoofer output
    pub fn set_subwoofer_enable(&mut self, enable: bool) {
        self.ll.modify::<MIXING>(|w| w.subwoofer_enable(bit(enable)));
    }

    /// Returns the subwoofer enable bit
    pub fn get_subwoofer_enable(&self) -> bool {
        self.ll.read::<MIXING>().subwoofer_enable() != 0
    }

    /// Sets the gain of the mixing high pass effect
    pub fn set_mixing_gain_effect(&mut self, effect: MixingGainEffect) {
        self.ll.modify::<MIXING>(|w| w.gain_effect(effect.bits()));
    }

    /// Returns the gain of the mixing high pass effect
    ///
    /// Returns `None` for the reserved codes 10 to 15.
    pub fn get_mixing_gain_effect(&self) -> Option<MixingGainEffect> {
        MixingGainEffect::from_bits(self.ll.read::<MIXING>().gain_effect())
    }

    /// Sets the subwoofer cut-off frequency
    pub fn set_sub_cutoff_freq(&mut self, freq: SubCutoffFreq) {
        self.ll.modify::<SUB_MID_BASS>(|w| w.sub_cutoff(freq.bits()));
    }

    /// Returns the subwoofer cut-off frequency
    pub fn get_sub_cutoff_freq(&self) -> SubCutoffFreq {
        SubCutoffFreq::from_bits(self.ll.read::<SUB_MID_BASS>().sub_cutoff()).unwrap_or_default()
    }
}
