/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between the positional fields of a logged ascent key
pub const DATE_SEPARATOR: char = '-';

/// Sentinel for an unknown year in a logged ascent key
pub const UNKNOWN_YEAR: &str = "XXXX";
/// Sentinel for any other unknown field (month, day, hour, minute)
pub const UNKNOWN_FIELD: &str = "XX";

/// Digits in a known year field
pub const YEAR_WIDTH: usize = UNKNOWN_YEAR.len();
/// Digits in a known month or day field
pub const FIELD_WIDTH: usize = UNKNOWN_FIELD.len();

/// Number of date fields that carry identity: year, month, day.
/// The hour and minute fields that follow are accepted and ignored.
pub const DATE_FIELD_COUNT: usize = 3;

/// Display text for an ascent whose date is entirely unknown
pub const UNKNOWN_DATE_TEXT: &str = "an unknown date";
