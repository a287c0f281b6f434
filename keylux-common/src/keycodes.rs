pub mod key_range {
    pub const BASIC_MIN: u8 = 0x01;
    pub const BASIC_MAX: u8 = 0xdf;

    pub const MODIFIER_MIN: u8 = 0xe0;
    pub const MODIFIER_MAX: u8 = 0xe7;

    pub const EXTRA_MIN: u8 = 0xf0;
    pub const EXTRA_MAX: u8 = 0xf7;

    /// Boot-protocol phantom state; fills every key slot of the standard
    /// report while more keys are held than it can track.
    pub const ERROR_ROLL_OVER: u8 = 0x01;
}

/// How the report builder treats a usage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Code 0 or a reserved range: the switch never reports (it may still
    /// drive lighting or be polled as a function key).
    Unmapped,
    /// Occupies one of the six rollover slots.
    Basic,
    /// One bit in the standard report's modifier byte.
    Modifier,
    /// One bit in the extra report's first byte.
    Extra,
}

impl KeyClass {
    /// ```
    /// use keylux_common::keycodes::KeyClass;
    ///
    /// assert_eq!(KeyClass::of(0x04), KeyClass::Basic);
    /// assert_eq!(KeyClass::of(0xe2), KeyClass::Modifier);
    /// assert_eq!(KeyClass::of(0xf1), KeyClass::Extra);
    /// assert_eq!(KeyClass::of(0), KeyClass::Unmapped);
    /// ```
    pub fn of(code: u8) -> Self {
        use key_range::*;
        match code {
            BASIC_MIN..=BASIC_MAX => Self::Basic,
            MODIFIER_MIN..=MODIFIER_MAX => Self::Modifier,
            EXTRA_MIN..=EXTRA_MAX => Self::Extra,
            _ => Self::Unmapped,
        }
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
