#![no_std]

pub mod bits;
pub mod conf;
pub mod irq;
pub mod tracks;

pub use conf::{HardwareConfig, Profile, UnknownProfile, UNUSED};
pub use irq::{ExtInt, Sense};
pub use tracks::{TrackId, TrackOutOfRange};

#[cfg(not(any(feature = "skull", feature = "pumpkin")))]
compile_error!(
    "at least one hardware profile feature must be active. Profiles:
    - skull
    - pumpkin
"
);

#[cfg(all(feature = "skull", feature = "pumpkin"))]
compile_error!(
    "the hardware profiles are mutually exclusive, enable exactly one of:
    - skull
    - pumpkin
"
);
