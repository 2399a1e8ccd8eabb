//! Settings and configuration structs
//!
//! This module houses the enumerated hardware settings of the TDA7419 and the
//! [`Config`] struct, which describes the state of the whole device in
//! logical units. A `Config` is applied with [`TDA7419::configure`] and read
//! back with [`TDA7419::config`].
//!
//! [`TDA7419::configure`]: crate::TDA7419::configure
//! [`TDA7419::config`]: crate::TDA7419::config

/// Declares a setting enum together with its register encoding
macro_rules! setting {
    (
        $(
            #[$doc:meta]
            $name:ident default $default:ident {
                $(
                    #[$variant_doc:meta]
                    $variant:ident = $bits:literal,
                )*
            }
        )*
    ) => {
        $(
            #[$doc]
            #[derive(Copy, Clone, Debug, Eq, PartialEq)]
            #[cfg_attr(feature = "defmt", derive(defmt::Format))]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name {
                $(
                    #[$variant_doc]
                    $variant = $bits,
                )*
            }

            impl $name {
                /// Returns the register encoding
                #[inline]
                pub fn bits(self) -> u8 {
                    self as u8
                }

                /// Looks up the setting for a register encoding
                ///
                /// Returns `None` for codes without a declared meaning.
                pub fn from_bits(bits: u8) -> Option<Self> {
                    match bits {
                        $( $bits => Some($name::$variant), )*
                        _ => None,
                    }
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    $name::$default
                }
            }
        )*
    }
}

setting! {
    /// Audio input selection
    InputSource default Se2 {
        /// Quasi-differential input
        Qd = 0,
        /// Single-ended input 1
        Se1 = 1,
        /// Single-ended input 2
        Se2 = 2,
        /// Single-ended input 3
        Se3 = 3,
        /// No input (mute)
        Mute = 4,
    }

    /// Loudness filter center frequency
    LoudnessCenterFreq default Flat {
        /// Flat response
        Flat = 0,
        /// 400 Hz
        Hz400 = 1,
        /// 800 Hz
        Hz800 = 2,
        /// 2.4 kHz
        Hz2400 = 3,
    }

    /// Soft mute time
    SoftMuteTime default Ms0_96 {
        /// 0.48 ms
        Ms0_48 = 0,
        /// 0.96 ms
        Ms0_96 = 1,
        /// 123 ms
        Ms123 = 2,
    }

    /// Soft step time
    SoftStepTime default Us1280 {
        /// 0.16 ms
        Us160 = 0,
        /// 0.32 ms
        Us320 = 1,
        /// 0.64 ms
        Us640 = 2,
        /// 1.28 ms
        Us1280 = 3,
        /// 2.56 ms
        Us2560 = 4,
        /// 5.12 ms
        Us5120 = 5,
        /// 10.24 ms
        Us10240 = 6,
        /// 20.48 ms
        Us20480 = 7,
    }

    /// Treble filter center frequency
    TrebleCenterFreq default KHz10 {
        /// 10 kHz
        KHz10 = 0,
        /// 12.5 kHz
        KHz12_5 = 1,
        /// 15 kHz
        KHz15 = 2,
        /// 17.5 kHz
        KHz17_5 = 3,
    }

    /// Middle filter Q factor
    MiddleQFactor default Q0_5 {
        /// Q = 0.5
        Q0_5 = 0,
        /// Q = 0.75
        Q0_75 = 1,
        /// Q = 1
        Q1 = 2,
        /// Q = 1.25
        Q1_25 = 3,
    }

    /// Bass filter Q factor
    BassQFactor default Q1 {
        /// Q = 1
        Q1 = 0,
        /// Q = 1.25
        Q1_25 = 1,
        /// Q = 1.5
        Q1_5 = 2,
        /// Q = 2
        Q2 = 3,
    }

    /// Source of the rear speaker outputs
    RearSpeakerSource default Main {
        /// Rear speakers follow the main source
        Main = 0,
        /// Rear speakers follow the second source
        Second = 1,
    }

    /// Subwoofer low pass cut-off frequency
    SubCutoffFreq default Flat {
        /// Flat response
        Flat = 0,
        /// 80 Hz
        Hz80 = 1,
        /// 120 Hz
        Hz120 = 2,
        /// 160 Hz
        Hz160 = 3,
    }

    /// Middle filter center frequency
    MiddleCenterFreq default Hz500 {
        /// 500 Hz
        Hz500 = 0,
        /// 1 kHz
        Hz1000 = 1,
        /// 1.5 kHz
        Hz1500 = 2,
        /// 2.5 kHz
        Hz2500 = 3,
    }

    /// Bass filter center frequency
    BassCenterFreq default Hz100 {
        /// 60 Hz
        Hz60 = 0,
        /// 80 Hz
        Hz80 = 1,
        /// 100 Hz
        Hz100 = 2,
        /// 200 Hz
        Hz200 = 3,
    }

    /// Gain of the mixing high pass effect
    MixingGainEffect default Db8 {
        /// 4 dB
        Db4 = 0,
        /// 6 dB
        Db6 = 1,
        /// 8 dB
        Db8 = 2,
        /// 10 dB
        Db10 = 3,
        /// 12 dB
        Db12 = 4,
        /// 14 dB
        Db14 = 5,
        /// 16 dB
        Db16 = 6,
        /// 18 dB
        Db18 = 7,
        /// 20 dB
        Db20 = 8,
        /// 22 dB
        Db22 = 9,
    }

    /// Speaker output channel
    SpeakerChannel default LeftFront {
        /// Left front
        LeftFront = 0,
        /// Right front
        RightFront = 1,
        /// Left rear
        LeftRear = 2,
        /// Right rear
        RightRear = 3,
    }

    /// Spectrum analyzer band pass Q factor
    SpectrumFilterQ default Q3_5 {
        /// Q = 3.5
        Q3_5 = 0,
        /// Q = 1.75
        Q1_75 = 1,
    }

    /// Spectrum analyzer signal source
    SpectrumSource default InGain {
        /// After the bass filter
        Bass = 0,
        /// After the input gain stage
        InGain = 1,
    }

    /// Spectrum analyzer coupling
    SpectrumCouplingMode default DcWithoutHpf {
        /// DC coupled, without high pass filter
        DcWithoutHpf = 0,
        /// AC coupled after the input gain stage
        AcAfterInGain = 1,
        /// DC coupled, with high pass filter
        DcWithHpf = 2,
        /// AC coupled after the bass filter
        AcAfterBass = 3,
    }
}

impl SpeakerChannel {
    /// All channels, in register order
    pub const ALL: [SpeakerChannel; 4] = [
        SpeakerChannel::LeftFront,
        SpeakerChannel::RightFront,
        SpeakerChannel::LeftRear,
        SpeakerChannel::RightRear,
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Complete device configuration
///
/// `Config::default()` describes the TDA7419 right after power-up.
pub struct Config {
    /// Main source selector
    pub main: InputConfig,
    /// Second source selector
    pub second: InputConfig,
    /// Which source feeds the rear speakers
    pub rear_speaker_source: RearSpeakerSource,
    /// Auto-zero enable
    pub auto_zero: bool,
    /// Loudness stage
    pub loudness: LoudnessConfig,
    /// Soft mute and clocking
    pub mute: MuteConfig,
    /// Master volume
    pub master_volume: VolumeConfig,
    /// Treble band
    pub treble: TrebleConfig,
    /// Middle band
    pub middle: MiddleConfig,
    /// Bass band
    pub bass: BassConfig,
    /// Smoothing filter enable
    pub smoothing_filter: bool,
    /// Mixing and subwoofer routing
    pub mixing: MixingConfig,
    /// Speaker attenuators, indexed by [`SpeakerChannel`]
    pub speakers: [VolumeConfig; 4],
    /// Mixing channel attenuator
    pub mixing_volume: VolumeConfig,
    /// Subwoofer attenuator
    pub subwoofer_volume: VolumeConfig,
    /// Spectrum analyzer
    pub spectrum: SpectrumConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main: InputConfig {
                source: InputSource::Se2,
                gain: 3,
            },
            second: InputConfig {
                source: InputSource::Se1,
                gain: 8,
            },
            rear_speaker_source: RearSpeakerSource::Main,
            auto_zero: false,
            loudness: Default::default(),
            mute: Default::default(),
            master_volume: Default::default(),
            treble: Default::default(),
            middle: Default::default(),
            bass: Default::default(),
            smoothing_filter: true,
            mixing: Default::default(),
            speakers: Default::default(),
            mixing_volume: Default::default(),
            subwoofer_volume: Default::default(),
            spectrum: Default::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Input selector configuration
pub struct InputConfig {
    /// Selected input
    pub source: InputSource,
    /// Input gain in dB, `0..=15`
    pub gain: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Loudness stage configuration
pub struct LoudnessConfig {
    /// Attenuation in dB, `0..=15`
    pub attenuation: u8,
    /// Center frequency
    pub center_freq: LoudnessCenterFreq,
    /// High boost
    pub high_boost: bool,
    /// Soft step
    pub soft_step: bool,
}

impl Default for LoudnessConfig {
    fn default() -> Self {
        LoudnessConfig {
            attenuation: 8,
            center_freq: LoudnessCenterFreq::Flat,
            high_boost: false,
            soft_step: false,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Soft mute and clocking configuration
pub struct MuteConfig {
    /// Soft mute
    pub soft_mute: bool,
    /// Mute pin enable
    pub mute_pin: bool,
    /// Soft mute time
    pub soft_mute_time: SoftMuteTime,
    /// Soft step time
    pub soft_step_time: SoftStepTime,
    /// Fast clock mode
    pub fast_clock: bool,
}

impl Default for MuteConfig {
    fn default() -> Self {
        MuteConfig {
            soft_mute: true,
            mute_pin: true,
            soft_mute_time: SoftMuteTime::Ms0_96,
            soft_step_time: SoftStepTime::Us1280,
            fast_clock: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Attenuator configuration
pub struct VolumeConfig {
    /// Level in dB, `-80..=15`
    pub level: i8,
    /// Soft step
    pub soft_step: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Treble band configuration
pub struct TrebleConfig {
    /// Level in dB, `-15..=15`
    pub level: i8,
    /// Center frequency
    pub center_freq: TrebleCenterFreq,
    /// Use the internal reference
    pub reference_internal: bool,
}

impl Default for TrebleConfig {
    fn default() -> Self {
        TrebleConfig {
            level: 0,
            center_freq: TrebleCenterFreq::KHz10,
            reference_internal: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Middle band configuration
pub struct MiddleConfig {
    /// Level in dB, `-15..=15`
    pub level: i8,
    /// Q factor
    pub q_factor: MiddleQFactor,
    /// Center frequency
    pub center_freq: MiddleCenterFreq,
    /// Soft step
    pub soft_step: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Bass band configuration
pub struct BassConfig {
    /// Level in dB, `-15..=15`
    pub level: i8,
    /// Q factor
    pub q_factor: BassQFactor,
    /// Center frequency
    pub center_freq: BassCenterFreq,
    /// Soft step
    pub soft_step: bool,
    /// DC mode
    pub dc_mode: bool,
}

impl Default for BassConfig {
    fn default() -> Self {
        BassConfig {
            level: 0,
            q_factor: BassQFactor::Q1,
            center_freq: BassCenterFreq::Hz100,
            soft_step: false,
            dc_mode: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Mixing and subwoofer routing configuration
pub struct MixingConfig {
    /// Mix to the left front speaker
    pub to_left_front: bool,
    /// Mix to the right front speaker
    pub to_right_front: bool,
    /// Mixing enable
    pub enable: bool,
    /// Subwoofer enable
    pub subwoofer_enable: bool,
    /// Gain of the high pass effect
    pub gain_effect: MixingGainEffect,
    /// Subwoofer cut-off frequency
    pub sub_cutoff: SubCutoffFreq,
}

impl Default for MixingConfig {
    fn default() -> Self {
        MixingConfig {
            to_left_front: true,
            to_right_front: true,
            enable: true,
            subwoofer_enable: false,
            gain_effect: MixingGainEffect::Db8,
            sub_cutoff: SubCutoffFreq::Flat,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Spectrum analyzer configuration
pub struct SpectrumConfig {
    /// Band pass Q factor
    pub filter_q: SpectrumFilterQ,
    /// Auto reset
    pub auto_reset: bool,
    /// Signal source
    pub source: SpectrumSource,
    /// Run
    pub run: bool,
    /// Reset
    pub reset: bool,
    /// Use the external clock
    pub external_clock: bool,
    /// Coupling mode
    pub coupling: SpectrumCouplingMode,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        SpectrumConfig {
            filter_q: SpectrumFilterQ::Q3_5,
            auto_reset: false,
            source: SpectrumSource::InGain,
            run: true,
            reset: true,
            external_clock: false,
            coupling: SpectrumCouplingMode::DcWithoutHpf,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_bits_round_trips_declared_codes() {
        for bits in 0..8 {
            match InputSource::from_bits(bits) {
                Some(source) => assert_eq!(source.bits(), bits),
                None => assert!(bits > 4),
            }
        }

        assert_eq!(SoftMuteTime::from_bits(3), None);
        assert_eq!(MixingGainEffect::from_bits(9), Some(MixingGainEffect::Db22));
        assert_eq!(MixingGainEffect::from_bits(10), None);
        assert_eq!(SpeakerChannel::from_bits(2), Some(SpeakerChannel::LeftRear));
    }

    #[test]
    fn speaker_channels_in_register_order() {
        for (i, channel) in SpeakerChannel::ALL.iter().enumerate() {
            assert_eq!(channel.bits() as usize, i);
        }
    }
}
