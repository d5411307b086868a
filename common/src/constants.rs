//! Useful constants to have

use crate::structs::{Vec3, WorldLine};

/// Lower (inclusive) bound of the part one test area on both X and Y
pub const TEST_AREA_MIN: i64 = 200_000_000_000_000;

/// Upper (exclusive) bound of the part one test area on both X and Y
pub const TEST_AREA_MAX: i64 = 400_000_000_000_000;

/// The observations the solver falls back to when no input is given.
///
/// Three world lines are enough to pin the rock down.
pub const BUILTIN_OBSERVATIONS: [WorldLine; 3] = [
    WorldLine::new(
        Vec3::new(237_822_270_988_608, 164_539_183_264_530, 381_578_606_559_948),
        Vec3::new(115, 346, -342),
    ),
    WorldLine::new(
        Vec3::new(287_838_354_624_648, 284_335_343_503_076, 181_128_681_512_377),
        Vec3::new(-5, -84, 175),
    ),
    WorldLine::new(
        Vec3::new(341_046_208_911_993, 120_694_764_237_967, 376_069_872_241_870),
        Vec3::new(-74, 129, -78),
    ),
];
