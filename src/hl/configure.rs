use crate::{
    configs::{
        BassConfig, InputConfig, LoudnessConfig, MiddleConfig, MixingConfig, MuteConfig,
        SpeakerChannel, SpectrumConfig, TrebleConfig, VolumeConfig,
    },
    Config, TDA7419,
};

impl TDA7419 {
    /// Applies a complete configuration to the register file
    ///
    /// Goes through the regular setters, so out of range levels are clamped
    /// and the input topology counts as changed afterwards. Only registers
    /// whose value actually differs are marked as changed.
    ///
    /// The equalizer bands power up with level code 0 (-0 dB). A level of
    /// 0 dB is always written as code 16 (+0 dB), so the treble, middle and
    /// bass registers change even when applying `Config::default()`.
    pub fn configure(&mut self, config: &Config) {
        self.set_main_source(config.main.source);
        self.set_input_gain(config.main.gain);
        self.set_auto_zero(config.auto_zero);
        self.set_second_source(config.second.source);
        self.set_second_source_gain(config.second.gain);
        self.set_rear_speaker_source(config.rear_speaker_source);

        self.set_loudness_attenuation(config.loudness.attenuation);
        self.set_loudness_center_freq(config.loudness.center_freq);
        self.set_loudness_high_boost(config.loudness.high_boost);
        self.set_loudness_soft_step(config.loudness.soft_step);

        self.set_soft_mute(config.mute.soft_mute);
        self.set_mute_pin_enable(config.mute.mute_pin);
        self.set_soft_mute_time(config.mute.soft_mute_time);
        self.set_soft_step_time(config.mute.soft_step_time);
        self.set_clock_fast_mode(config.mute.fast_clock);

        self.set_master_volume(config.master_volume.level);
        self.set_master_volume_soft_step(config.master_volume.soft_step);

        self.set_treble_level(config.treble.level);
        self.set_treble_center_freq(config.treble.center_freq);
        self.set_treble_reference_internal(config.treble.reference_internal);

        self.set_middle_level(config.middle.level);
        self.set_middle_q_factor(config.middle.q_factor);
        self.set_middle_center_freq(config.middle.center_freq);
        self.set_middle_soft_step(config.middle.soft_step);

        self.set_bass_level(config.bass.level);
        self.set_bass_q_factor(config.bass.q_factor);
        self.set_bass_center_freq(config.bass.center_freq);
        self.set_bass_soft_step(config.bass.soft_step);
        self.set_bass_dc_mode(config.bass.dc_mode);
        self.set_smoothing_filter(config.smoothing_filter);

        self.set_mix_to_left_front(config.mixing.to_left_front);
        self.set_mix_to_right_front(config.mixing.to_right_front);
        self.set_mixing_enable(config.mixing.enable);
        self.set_subwoofer_enable(config.mixing.subwoofer_enable);
        self.set_mixing_gain_effect(config.mixing.gain_effect);
        self.set_sub_cutoff_freq(config.mixing.sub_cutoff);

        for (channel, speaker) in SpeakerChannel::ALL.into_iter().zip(config.speakers) {
            self.set_speaker_volume(channel, speaker.level);
            self.set_speaker_soft_step(channel, speaker.soft_step);
        }
        self.set_mixing_channel_volume(config.mixing_volume.level);
        self.set_mixing_channel_soft_step(config.mixing_volume.soft_step);
        self.set_subwoofer_volume(config.subwoofer_volume.level);
        self.set_subwoofer_soft_step(config.subwoofer_volume.soft_step);

        self.set_spectrum_filter_q(config.spectrum.filter_q);
        self.set_spectrum_auto_reset(config.spectrum.auto_reset);
        self.set_spectrum_source(config.spectrum.source);
        self.set_spectrum_run(config.spectrum.run);
        self.set_spectrum_reset(config.spectrum.reset);
        self.set_external_clock(config.spectrum.external_clock);
        self.set_spectrum_coupling_mode(config.spectrum.coupling);
    }

    /// Reads the register file back as a configuration
    ///
    /// Codes without a declared meaning read back as the setting's default.
    pub fn config(&self) -> Config {
        Config {
            main: InputConfig {
                source: self.get_main_source().unwrap_or_default(),
                gain: self.get_input_gain(),
            },
            second: InputConfig {
                source: self.get_second_source().unwrap_or_default(),
                gain: self.get_second_source_gain(),
            },
            rear_speaker_source: self.get_rear_speaker_source(),
            auto_zero: self.get_auto_zero(),
            loudness: LoudnessConfig {
                attenuation: self.get_loudness_attenuation(),
                center_freq: self.get_loudness_center_freq(),
                high_boost: self.get_loudness_high_boost(),
                soft_step: self.get_loudness_soft_step(),
            },
            mute: MuteConfig {
                soft_mute: self.get_soft_mute(),
                mute_pin: self.get_mute_pin_enable(),
                soft_mute_time: self.get_soft_mute_time().unwrap_or_default(),
                soft_step_time: self.get_soft_step_time(),
                fast_clock: self.get_clock_fast_mode(),
            },
            master_volume: VolumeConfig {
                level: self.get_master_volume(),
                soft_step: self.get_master_volume_soft_step(),
            },
            treble: TrebleConfig {
                level: self.get_treble_level(),
                center_freq: self.get_treble_center_freq(),
                reference_internal: self.get_treble_reference_internal(),
            },
            middle: MiddleConfig {
                level: self.get_middle_level(),
                q_factor: self.get_middle_q_factor(),
                center_freq: self.get_middle_center_freq(),
                soft_step: self.get_middle_soft_step(),
            },
            bass: BassConfig {
                level: self.get_bass_level(),
                q_factor: self.get_bass_q_factor(),
                center_freq: self.get_bass_center_freq(),
                soft_step: self.get_bass_soft_step(),
                dc_mode: self.get_bass_dc_mode(),
            },
            smoothing_filter: self.get_smoothing_filter(),
            mixing: MixingConfig {
                to_left_front: self.get_mix_to_left_front(),
                to_right_front: self.get_mix_to_right_front(),
                enable: self.get_mixing_enable(),
                subwoofer_enable: self.get_subwoofer_enable(),
                gain_effect: self.get_mixing_gain_effect().unwrap_or_default(),
                sub_cutoff: self.get_sub_cutoff_freq(),
            },
            speakers: SpeakerChannel::ALL.map(|channel| VolumeConfig {
                level: self.get_speaker_volume(channel),
                soft_step: self.get_speaker_soft_step(channel),
            }),
            mixing_volume: VolumeConfig {
                level: self.get_mixing_channel_volume(),
                soft_step: self.get_mixing_channel_soft_step(),
            },
            subwoofer_volume: VolumeConfig {
                level: self.get_subwoofer_volume(),
                soft_step: self.get_subwoofer_soft_step(),
            },
            spectrum: SpectrumConfig {
                filter_q: self.get_spectrum_filter_q(),
                auto_reset: self.get_spectrum_auto_reset(),
                source: self.get_spectrum_source(),
                run: self.get_spectrum_run(),
                reset: self.get_spectrum_reset(),
                external_clock: self.get_external_clock(),
                coupling: self.get_spectrum_coupling_mode(),
            },
        }
    }
}
