/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

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

/// Day of year on which each month ends in a common year.
/// `LAST_DAY_NON_LEAP[m - 1] + day` is the day of year for month `m`.
pub(crate) const LAST_DAY_NON_LEAP: [u16; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
/// Same as [`LAST_DAY_NON_LEAP`] for leap years.
pub(crate) const LAST_DAY_LEAP: [u16; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a common year
pub const DAYS_IN_YEAR: i64 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: i64 = 366;
/// Days in a 4 year block (one leap day)
pub(crate) const DAYS_IN_4_YEARS: i64 = DAYS_IN_YEAR * 4 + 1;
/// Days in a 100 year block (the century year is common)
pub(crate) const DAYS_IN_100_YEARS: i64 = DAYS_IN_4_YEARS * 25 - 1;
/// Days in a full Gregorian cycle
pub(crate) const DAYS_IN_400_YEARS: i64 = DAYS_IN_100_YEARS * 4 + 1;

/// Julian day number of day 0 of the Gregorian count (31 December, 1 B.C.)
pub const JULIAN_DAY_OFFSET: i64 = 1_721_425;
/// Julian day number of the modified Julian day epoch (17 November 1858)
pub const MOD_JULIAN_DAY_OFFSET: i64 = 2_400_001;

/// Date component separator (ISO 8601 extended format)
pub const DATE_SEPARATOR: char = '-';

/// Three letter month names, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Three letter day names, starting with Sunday
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
