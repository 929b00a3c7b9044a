//! Icon size labels recognized by the messaging client UI.
//!
//! Labels are opaque string keys; a provider registers a subset of them
//! depending on which image variants its protocol ships.

pub const ICON_SIZE_16X16: &str = "16x16";
pub const ICON_SIZE_32X32: &str = "32x32";
pub const ICON_SIZE_48X48: &str = "48x48";
pub const ICON_SIZE_64X64: &str = "64x64";

/// All labels the UI knows how to place, whether or not a given
/// protocol registers an image for them.
pub const KNOWN_SIZES: [&str; 4] =
    [ICON_SIZE_16X16, ICON_SIZE_32X32, ICON_SIZE_48X48, ICON_SIZE_64X64];
