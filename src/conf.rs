use smart_leds::RGB8;

use crate::irq::ExtInt;
use crate::tracks::{TrackId, TrackOutOfRange};

/// Pin assignments and fixed limits of one prop build.
///
/// Every field is fixed for the lifetime of the program. Consumers take the
/// feature-selected [`ACTIVE`] table or pick a [`Profile`] explicitly at
/// startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, defmt::Format)]
pub struct HardwareConfig {
    /// Data pin of the right eye NeoPixel strip.
    pub neopixel_pin_right: u8,
    /// Data pin of the left eye NeoPixel strip.
    pub neopixel_pin_left: u8,
    /// Input pin of the PIR motion sensor.
    pub pir_pin: u8,
    /// Receive pin for the audio module, wired to the module's TX.
    pub audio_rx_pin: u8,
    /// Transmit pin for the audio module, wired to the module's RX.
    pub audio_tx_pin: u8,
    /// NeoPixel count on each eye strip.
    pub num_pixels: usize,
    /// Number of tracks stored on the audio module's SD card.
    pub num_songs: u16,
}

impl HardwareConfig {
    /// External interrupt line serving the PIR pin, if it sits on one.
    pub const fn pir_interrupt(&self) -> Option<ExtInt> {
        ExtInt::for_pin(self.pir_pin)
    }

    /// Validates a track number against this build's SD card inventory.
    pub fn track(&self, n: u16) -> Result<TrackId, TrackOutOfRange> {
        TrackId::new(n, self)
    }
}

/// Skull build: two pixels per eye, full SD card.
pub const SKULL: HardwareConfig = HardwareConfig {
    neopixel_pin_right: 6,
    neopixel_pin_left: 7,
    pir_pin: 2,
    audio_rx_pin: 10,
    audio_tx_pin: 11,
    num_pixels: 2,
    num_songs: 46,
};

/// Pumpkin build: one pixel per eye, short track list, audio module moved
/// to pins 4/5.
pub const PUMPKIN: HardwareConfig = HardwareConfig {
    neopixel_pin_right: 6,
    neopixel_pin_left: 7,
    pir_pin: 2,
    audio_rx_pin: 4,
    audio_tx_pin: 5,
    num_pixels: 1,
    num_songs: 11,
};

#[cfg(feature = "skull")]
pub const ACTIVE: HardwareConfig = SKULL;
#[cfg(feature = "pumpkin")]
pub const ACTIVE: HardwareConfig = PUMPKIN;

#[cfg(feature = "skull")]
pub const ACTIVE_PROFILE: Profile = Profile::Skull;
#[cfg(feature = "pumpkin")]
pub const ACTIVE_PROFILE: Profile = Profile::Pumpkin;

/// Placeholder for callback arguments that carry no payload.
pub const UNUSED: u8 = 0;

/// One LED frame for a single eye of the active build.
pub type EyeFrame = [RGB8; ACTIVE.num_pixels];

/// A selectable prop build, for hosts that pick the configuration at
/// startup instead of at build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, defmt::Format)]
pub enum Profile {
    Skull,
    Pumpkin,
}

/// Requested profile name does not match any known build.
#[derive(Debug, Clone, PartialEq, Eq, defmt::Format)]
pub struct UnknownProfile;

impl core::fmt::Display for UnknownProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown hardware profile name")
    }
}

impl Profile {
    pub const fn config(self) -> &'static HardwareConfig {
        match self {
            Profile::Skull => &SKULL,
            Profile::Pumpkin => &PUMPKIN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Profile::Skull => "skull",
            Profile::Pumpkin => "pumpkin",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, UnknownProfile> {
        match name {
            "skull" => Ok(Profile::Skull),
            "pumpkin" => Ok(Profile::Pumpkin),
            _ => Err(UnknownProfile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skull_profile_values() {
        assert_eq!(SKULL.audio_rx_pin, 10);
        assert_eq!(SKULL.audio_tx_pin, 11);
        assert_eq!(SKULL.num_pixels, 2);
        assert_eq!(SKULL.num_songs, 46);
    }

    #[test]
    fn pumpkin_profile_values() {
        assert_eq!(PUMPKIN.audio_rx_pin, 4);
        assert_eq!(PUMPKIN.audio_tx_pin, 5);
        assert_eq!(PUMPKIN.num_pixels, 1);
        assert_eq!(PUMPKIN.num_songs, 11);
    }

    #[test]
    fn pin_assignments_shared_by_both_builds() {
        for config in [SKULL, PUMPKIN] {
            assert_eq!(config.neopixel_pin_right, 6);
            assert_eq!(config.neopixel_pin_left, 7);
            assert_eq!(config.pir_pin, 2);
        }
    }

    #[cfg(feature = "skull")]
    #[test]
    fn active_table_matches_selected_profile() {
        assert_eq!(ACTIVE, SKULL);
        assert_eq!(ACTIVE_PROFILE.config(), &ACTIVE);
    }

    #[cfg(feature = "pumpkin")]
    #[test]
    fn active_table_matches_selected_profile() {
        assert_eq!(ACTIVE, PUMPKIN);
        assert_eq!(ACTIVE_PROFILE.config(), &ACTIVE);
    }

    #[test]
    fn profile_lookup_by_name() {
        assert_eq!(Profile::from_name("skull"), Ok(Profile::Skull));
        assert_eq!(Profile::from_name("pumpkin"), Ok(Profile::Pumpkin));
        assert_eq!(Profile::from_name("greenhouse"), Err(UnknownProfile));
    }

    #[test]
    fn profile_names_round_trip() {
        for profile in [Profile::Skull, Profile::Pumpkin] {
            assert_eq!(Profile::from_name(profile.name()), Ok(profile));
        }
    }

    #[test]
    fn pir_sits_on_interrupt_line_zero() {
        for config in [SKULL, PUMPKIN] {
            let line = config.pir_interrupt().unwrap();
            assert_eq!(line.index(), 0);
        }
    }

    #[test]
    fn eye_frame_length_follows_active_build() {
        let frame: EyeFrame = [RGB8::new(0, 0, 0); ACTIVE.num_pixels];
        assert_eq!(frame.len(), ACTIVE.num_pixels);
    }
}
