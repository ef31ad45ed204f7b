use crate::date::Date;

pub(crate) fn date(year: i16, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}
