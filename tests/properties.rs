//! Property tests over the whole representable date range.

use gregorian_date::{Date, DayOfWeek};
use proptest::prelude::*;

fn day_number() -> impl Strategy<Value = i64> {
    Date::MIN.day_of_gregorian_cal()..=Date::MAX.day_of_gregorian_cal()
}

proptest! {
    #[test]
    fn linear_day_round_trips(n in day_number()) {
        let date = Date::from_day_of_gregorian_cal(n);
        prop_assert_eq!(date.day_of_gregorian_cal(), n);
    }

    #[test]
    fn string_forms_round_trip(n in day_number()) {
        let date = Date::from_day_of_gregorian_cal(n);
        prop_assert_eq!(Date::from_iso_string(&date.to_iso_string()).unwrap(), date);
        prop_assert_eq!(Date::from_iso_ext_string(&date.to_iso_ext_string()).unwrap(), date);
        prop_assert_eq!(Date::from_simple_string(&date.to_simple_string()).unwrap(), date);
        prop_assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
    }

    #[test]
    fn order_follows_day_number(a in day_number(), b in day_number()) {
        let (da, db) = (Date::from_day_of_gregorian_cal(a), Date::from_day_of_gregorian_cal(b));
        prop_assert_eq!(da.cmp(&db), a.cmp(&b));
    }

    #[test]
    fn add_days_moves_day_number(n in -1_000_000i64..1_000_000, k in -100_000i64..100_000) {
        let date = Date::from_day_of_gregorian_cal(n);
        prop_assert_eq!(date.add_days(k).unwrap().day_of_gregorian_cal(), n + k);
    }

    #[test]
    fn next_day_advances_weekday(n in -1_000_000i64..1_000_000) {
        let today = Date::from_day_of_gregorian_cal(n).day_of_week();
        let tomorrow = Date::from_day_of_gregorian_cal(n + 1).day_of_week();
        prop_assert_eq!(tomorrow, DayOfWeek::from_index(today.get() + 1));
    }

    #[test]
    fn iso_week_in_range(n in day_number()) {
        let week = Date::from_day_of_gregorian_cal(n).iso_week();
        prop_assert!((1..=53).contains(&week));
    }
}
