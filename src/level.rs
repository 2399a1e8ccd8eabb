//! Level codecs
//!
//! The TDA7419 stores signed levels as biased unsigned codes. Attenuators
//! (master, speakers, mixing channel, subwoofer) and the equalizer bands use
//! two different layouts, so there are two codecs. They look alike but place
//! the bias on opposite signs and must not be swapped.
//!
//! Every encoder saturates inputs outside its domain to the nearest bound.

/// Lowest attenuator level in dB
pub const MIN_VOLUME: i8 = -80;

/// Highest attenuator level in dB
pub const MAX_VOLUME: i8 = 15;

/// Lowest equalizer level in dB
pub const MIN_EQ_LEVEL: i8 = -15;

/// Highest equalizer level in dB
pub const MAX_EQ_LEVEL: i8 = 15;

/// Encodes an attenuator level into its 7-bit code
///
/// `0..=15` dB map to themselves, `-1..=-80` dB map to `17..=96`.
pub fn encode_volume(volume: i8) -> u8 {
    let volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);

    if volume >= 0 {
        volume as u8
    } else {
        16 + volume.unsigned_abs()
    }
}

/// Decodes a 7-bit attenuator code
///
/// Bits above the 7-bit field are ignored.
pub fn decode_volume(code: u8) -> i8 {
    let code = code & 0x7f;

    if code < 16 {
        code as i8
    } else {
        -((code - 16) as i8)
    }
}

/// Encodes an equalizer level into its 5-bit code
///
/// `0..=15` dB map to `16..=31`, `-1..=-15` dB map to `1..=15`.
pub fn encode_eq_level(level: i8) -> u8 {
    let level = level.clamp(MIN_EQ_LEVEL, MAX_EQ_LEVEL);

    if level >= 0 {
        16 + level as u8
    } else {
        level.unsigned_abs()
    }
}

/// Decodes a 5-bit equalizer code
///
/// Bits above the 5-bit field are ignored.
pub fn decode_eq_level(code: u8) -> i8 {
    let code = code & 0x1f;

    if code < 16 {
        -(code as i8)
    } else {
        (code - 16) as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_codes() {
        assert_eq!(encode_volume(-10), 26);
        assert_eq!(encode_volume(5), 5);
        assert_eq!(encode_volume(0), 0);
        assert_eq!(encode_volume(-80), 96);
        assert_eq!(encode_volume(15), 15);
    }

    #[test]
    fn eq_codes() {
        assert_eq!(encode_eq_level(-15), 15);
        assert_eq!(encode_eq_level(15), 31);
        assert_eq!(encode_eq_level(0), 16);
        assert_eq!(encode_eq_level(-1), 1);
    }

    #[test]
    fn volume_inverse_over_domain() {
        for volume in MIN_VOLUME..=MAX_VOLUME {
            assert_eq!(decode_volume(encode_volume(volume)), volume);
        }
    }

    #[test]
    fn eq_inverse_over_domain() {
        for level in MIN_EQ_LEVEL..=MAX_EQ_LEVEL {
            assert_eq!(decode_eq_level(encode_eq_level(level)), level);
        }
    }

    #[test]
    fn out_of_domain_saturates() {
        for volume in i8::MIN..MIN_VOLUME {
            assert_eq!(encode_volume(volume), encode_volume(MIN_VOLUME));
        }
        for volume in MAX_VOLUME + 1..=i8::MAX {
            assert_eq!(encode_volume(volume), encode_volume(MAX_VOLUME));
        }
        for level in i8::MIN..MIN_EQ_LEVEL {
            assert_eq!(encode_eq_level(level), encode_eq_level(MIN_EQ_LEVEL));
        }
        for level in MAX_EQ_LEVEL + 1..=i8::MAX {
            assert_eq!(encode_eq_level(level), encode_eq_level(MAX_EQ_LEVEL));
        }
    }

    #[test]
    fn codecs_are_not_interchangeable() {
        assert_ne!(encode_volume(-5), encode_eq_level(-5));
        assert_ne!(decode_volume(20), decode_eq_level(20));
    }
}
