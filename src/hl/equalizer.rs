use super::{bit, clamp};
use crate::{
    configs::{BassCenterFreq, BassQFactor, MiddleCenterFreq, MiddleQFactor, TrebleCenterFreq},
    level::{decode_eq_level, encode_eq_level, MAX_EQ_LEVEL, MIN_EQ_LEVEL},
    ll::{BASS, MIDDLE, SUB_MID_BASS, TREBLE},
    TDA7419,
};

impl TDA7419 {
    /// Sets the treble level, `-15..=15` dB
    pub fn set_treble_level(&mut self, level: i8) {
        let code = encode_eq_level(clamp("treble level", level, MIN_EQ_LEVEL, MAX_EQ_LEVEL));
        self.ll.modify::<TREBLE>(|w| w.level(code));
    }

    /// Returns the treble level in dB
    pub fn get_treble_level(&self) -> i8 {
        decode_eq_level(self.ll.read::<TREBLE>().level())
    }

    /// Sets the treble center frequency
    pub fn set_treble_center_freq(&mut self, freq: TrebleCenterFreq) {
        self.ll.modify::<TREBLE>(|w| w.center_freq(freq.bits()));
    }

    /// Returns the treble center frequency
    pub fn get_treble_center_freq(&self) -> TrebleCenterFreq {
        TrebleCenterFreq::from_bits(self.ll.read::<TREBLE>().center_freq()).unwrap_or_default()
    }

    /// Selects the internal (`true`) or external treble reference
    pub fn set_treble_reference_internal(&mut self, internal: bool) {
        self.ll
            .modify::<TREBLE>(|w| w.reference_internal(bit(internal)));
    }

    /// Returns true if the internal treble reference is selected
    pub fn get_treble_reference_internal(&self) -> bool {
        self.ll.read::<TREBLE>().reference_internal() != 0
    }

    /// Sets the middle level, `-15..=15` dB
    pub fn set_middle_level(&mut self, level: i8) {
        let code = encode_eq_level(clamp("middle level", level, MIN_EQ_LEVEL, MAX_EQ_LEVEL));
        self.ll.modify::<MIDDLE>(|w| w.level(code));
    }

    /// Returns the middle level in dB
    pub fn get_middle_level(&self) -> i8 {
        decode_eq_level(self.ll.read::<MIDDLE>().level())
    }

    /// Sets the middle Q factor
    pub fn set_middle_q_factor(&mut self, q: MiddleQFactor) {
        self.ll.modify::<MIDDLE>(|w| w.q_factor(q.bits()));
    }

    /// Returns the middle Q factor
    pub fn get_middle_q_factor(&self) -> MiddleQFactor {
        MiddleQFactor::from_bits(self.ll.read::<MIDDLE>().q_factor()).unwrap_or_default()
    }

    /// Enables or disables middle soft step
    pub fn set_middle_soft_step(&mut self, enable: bool) {
        self.ll.modify::<MIDDLE>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if middle soft step is enabled
    pub fn get_middle_soft_step(&self) -> bool {
        self.ll.read::<MIDDLE>().soft_step() != 0
    }

    /// Sets the middle center frequency
    pub fn set_middle_center_freq(&mut self, freq: MiddleCenterFreq) {
        self.ll
            .modify::<SUB_MID_BASS>(|w| w.middle_center_freq(freq.bits()));
    }

    /// Returns the middle center frequency
    pub fn get_middle_center_freq(&self) -> MiddleCenterFreq {
        MiddleCenterFreq::from_bits(self.ll.read::<SUB_MID_BASS>().middle_center_freq())
            .unwrap_or_default()
    }

    /// Sets the bass level, `-15..=15` dB
    pub fn set_bass_level(&mut self, level: i8) {
        let code = encode_eq_level(clamp("bass level", level, MIN_EQ_LEVEL, MAX_EQ_LEVEL));
        self.ll.modify::<BASS>(|w| w.level(code));
    }

    /// Returns the bass level in dB
    pub fn get_bass_level(&self) -> i8 {
        decode_eq_level(self.ll.read::<BASS>().level())
    }

    /// Sets the bass Q factor
    pub fn set_bass_q_factor(&mut self, q: BassQFactor) {
        self.ll.modify::<BASS>(|w| w.q_factor(q.bits()));
    }

    /// Returns the bass Q factor
    pub fn get_bass_q_factor(&self) -> BassQFactor {
        BassQFactor::from_bits(self.ll.read::<BASS>().q_factor()).unwrap_or_default()
    }

    /// Enables or disables bass soft step
    pub fn set_bass_soft_step(&mut self, enable: bool) {
        self.ll.modify::<BASS>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if bass soft step is enabled
    pub fn get_bass_soft_step(&self) -> bool {
        self.ll.read::<BASS>().soft_step() != 0
    }

    /// Sets the bass center frequency
    pub fn set_bass_center_freq(&mut self, freq: BassCenterFreq) {
        self.ll
            .modify::<SUB_MID_BASS>(|w| w.bass_center_freq(freq.bits()));
    }

    /// Returns the bass center frequency
    pub fn get_bass_center_freq(&self) -> BassCenterFreq {
        BassCenterFreq::from_bits(self.ll.read::<SUB_MID_BASS>().bass_center_freq())
            .unwrap_or_default()
    }

    /// Enables or disables bass DC mode
    pub fn set_bass_dc_mode(&mut self, enable: bool) {
        self.ll.modify::<SUB_MID_BASS>(|w| w.bass_dc_mode(bit(enable)));
    }

    /// Returns true if bass DC mode is enabled
    pub fn get_bass_dc_mode(&self) -> bool {
        self.ll.read::<SUB_MID_BASS>().bass_dc_mode() != 0
    }

    /// Enables or disables the smoothing filter
    pub fn set_smoothing_filter(&mut self, enable: bool) {
        self.ll
            .modify::<SUB_MID_BASS>(|w| w.smoothing_filter(bit(enable)));
    }

    /// Returns true if the smoothing filter is enabled
    pub fn get_smoothing_filter(&self) -> bool {
        self.ll.read::<SUB_MID_BASS>().smoothing_filter() != 0
    }
}
