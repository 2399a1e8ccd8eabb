//! Attenuators
//!
//! Master volume, the four speaker outputs, the mixing channel and the
//! subwoofer share one layout: a 7-bit level code using the volume codec and a
//! soft step bit.

use super::{bit, clamp};
use crate::{
    configs::SpeakerChannel,
    level::{decode_volume, encode_volume, MAX_VOLUME, MIN_VOLUME},
    ll::{Register, MASTER_VOLUME, MIXING_LEVEL, SPEAKER_LF, SUBWOOFER_LEVEL},
    TDA7419,
};

impl TDA7419 {
    /// Sets the master volume, `-80..=15` dB
    pub fn set_master_volume(&mut self, volume: i8) {
        let code = encode_volume(clamp("master volume", volume, MIN_VOLUME, MAX_VOLUME));
        self.ll.modify::<MASTER_VOLUME>(|w| w.volume(code));
    }

    /// Returns the master volume in dB
    pub fn get_master_volume(&self) -> i8 {
        decode_volume(self.ll.read::<MASTER_VOLUME>().volume())
    }

    /// Enables or disables master volume soft step
    pub fn set_master_volume_soft_step(&mut self, enable: bool) {
        self.ll.modify::<MASTER_VOLUME>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if master volume soft step is enabled
    pub fn get_master_volume_soft_step(&self) -> bool {
        self.ll.read::<MASTER_VOLUME>().soft_step() != 0
    }

    /// Sets the volume of one speaker output, `-80..=15` dB
    pub fn set_speaker_volume(&mut self, channel: SpeakerChannel, volume: i8) {
        let what = SPEAKER_VOLUME[channel.bits() as usize];
        let code = encode_volume(clamp(what, volume, MIN_VOLUME, MAX_VOLUME));
        self.ll
            .modify_at::<SPEAKER_LF>(speaker_index(channel), |w| w.volume(code));
    }

    /// Returns the volume of one speaker output in dB
    pub fn get_speaker_volume(&self, channel: SpeakerChannel) -> i8 {
        decode_volume(self.ll.read_at::<SPEAKER_LF>(speaker_index(channel)).volume())
    }

    /// Enables or disables soft step for one speaker output
    pub fn set_speaker_soft_step(&mut self, channel: SpeakerChannel, enable: bool) {
        self.ll
            .modify_at::<SPEAKER_LF>(speaker_index(channel), |w| w.soft_step(bit(enable)));
    }

    /// Returns true if soft step is enabled for one speaker output
    pub fn get_speaker_soft_step(&self, channel: SpeakerChannel) -> bool {
        self.ll
            .read_at::<SPEAKER_LF>(speaker_index(channel))
            .soft_step()
            != 0
    }

    /// Sets the mixing channel volume, `-80..=15` dB
    pub fn set_mixing_channel_volume(&mut self, volume: i8) {
        let code = encode_volume(clamp(
            "mixing channel volume",
            volume,
            MIN_VOLUME,
            MAX_VOLUME,
        ));
        self.ll.modify::<MIXING_LEVEL>(|w| w.volume(code));
    }

    /// Returns the mixing channel volume in dB
    pub fn get_mixing_channel_volume(&self) -> i8 {
        decode_volume(self.ll.read::<MIXING_LEVEL>().volume())
    }

    /// Enables or disables mixing channel soft step
    pub fn set_mixing_channel_soft_step(&mut self, enable: bool) {
        self.ll.modify::<MIXING_LEVEL>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if mixing channel soft step is enabled
    pub fn get_mixing_channel_soft_step(&self) -> bool {
        self.ll.read::<MIXING_LEVEL>().soft_step() != 0
    }

    /// Sets the subwoofer volume, `-80..=15` dB
    pub fn set_subwoofer_volume(&mut self, volume: i8) {
        let code = encode_volume(clamp("subwoofer volume", volume, MIN_VOLUME, MAX_VOLUME));
        self.ll.modify::<SUBWOOFER_LEVEL>(|w| w.volume(code));
    }

    /// Returns the subwoofer volume in dB
    pub fn get_subwoofer_volume(&self) -> i8 {
        decode_volume(self.ll.read::<SUBWOOFER_LEVEL>().volume())
    }

    /// Enables or disables subwoofer soft step
    pub fn set_subwoofer_soft_step(&mut self, enable: bool) {
        self.ll.modify::<SUBWOOFER_LEVEL>(|w| w.soft_step(bit(enable)));
    }

    /// Returns true if subwoofer soft step is enabled
    pub fn get_subwoofer_soft_step(&self) -> bool {
        self.ll.read::<SUBWOOFER_LEVEL>().soft_step() != 0
    }
}

/// Control names for clamp warnings, indexed by channel
const SPEAKER_VOLUME: [&str; 4] = [
    "speaker 0 volume",
    "speaker 1 volume",
    "speaker 2 volume",
    "speaker 3 volume",
];

/// The speaker attenuators are consecutive registers sharing one layout
#[inline]
fn speaker_index(channel: SpeakerChannel) -> u8 {
    SPEAKER_LF::INDEX + channel.bits()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::{SPEAKER_LR, SPEAKER_RF, SPEAKER_RR};

    #[test]
    fn master_volume_codes() {
        let mut tda = TDA7419::new();

        tda.set_master_volume(-10);
        assert_eq!(tda.registers().field(MASTER_VOLUME::INDEX).value(), 26);
        assert_eq!(tda.get_master_volume(), -10);

        tda.set_master_volume(5);
        assert_eq!(tda.registers().field(MASTER_VOLUME::INDEX).value(), 5);
        assert_eq!(tda.get_master_volume(), 5);
    }

    #[test]
    fn master_volume_clamps() {
        let mut tda = TDA7419::new();

        tda.set_master_volume(i8::MIN);
        assert_eq!(tda.get_master_volume(), MIN_VOLUME);

        tda.set_master_volume(100);
        assert_eq!(tda.get_master_volume(), MAX_VOLUME);
    }

    #[test]
    fn soft_step_keeps_level() {
        let mut tda = TDA7419::new();

        tda.set_master_volume(-3);
        tda.set_master_volume_soft_step(true);

        assert_eq!(tda.registers().field(MASTER_VOLUME::INDEX).value(), 0x80 | 19);
        assert_eq!(tda.get_master_volume(), -3);
        assert!(tda.get_master_volume_soft_step());
    }

    #[test]
    fn speakers_map_to_their_registers() {
        let mut tda = TDA7419::new();

        tda.set_speaker_volume(SpeakerChannel::LeftFront, -1);
        tda.set_speaker_volume(SpeakerChannel::RightFront, -2);
        tda.set_speaker_volume(SpeakerChannel::LeftRear, -3);
        tda.set_speaker_volume(SpeakerChannel::RightRear, -4);
        tda.set_speaker_soft_step(SpeakerChannel::RightRear, true);

        let registers = tda.registers();
        assert_eq!(registers.field(SPEAKER_LF::INDEX).value(), 17);
        assert_eq!(registers.field(SPEAKER_RF::INDEX).value(), 18);
        assert_eq!(registers.field(SPEAKER_LR::INDEX).value(), 19);
        assert_eq!(registers.field(SPEAKER_RR::INDEX).value(), 0x80 | 20);

        for (i, channel) in SpeakerChannel::ALL.into_iter().enumerate() {
            assert_eq!(tda.get_speaker_volume(channel), -(i as i8) - 1);
        }
        assert!(tda.get_speaker_soft_step(SpeakerChannel::RightRear));
        assert!(!tda.get_speaker_soft_step(SpeakerChannel::LeftFront));
    }

    #[test]
    fn mixing_and_subwoofer_levels() {
        let mut tda = TDA7419::new();

        tda.set_mixing_channel_volume(-80);
        tda.set_subwoofer_volume(15);
        tda.set_subwoofer_soft_step(true);

        assert_eq!(tda.registers().field(MIXING_LEVEL::INDEX).value(), 96);
        assert_eq!(tda.get_mixing_channel_volume(), -80);
        assert!(!tda.get_mixing_channel_soft_step());
        assert_eq!(tda.get_subwoofer_volume(), 15);
        assert!(tda.get_subwoofer_soft_step());
    }
}
