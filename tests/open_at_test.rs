use buying_frenzy::{DaySchedule, RestaurantStore, TimeOfDay, Weekday};
use chrono::NaiveDate;

fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

#[test]
fn test_restaurant_open_at() {
    let mut store = RestaurantStore::new();
    let id = store.add_restaurant("test", 0.0, vec![]);
    store
        .insert_schedule(id, DaySchedule::from_times(Weekday::Monday, t(14, 0), t(21, 0)))
        .unwrap();
    store
        .insert_schedule(id, DaySchedule::from_times(Weekday::Friday, t(21, 0), t(4, 0)))
        .unwrap();

    // (time, open on Monday, open on Friday)
    let expected = [
        (t(0, 0), false, true),
        (t(1, 0), false, true),
        (t(2, 0), false, true),
        (t(3, 0), false, true),
        (t(3, 59), false, true),
        (t(4, 0), false, true),
        (t(4, 1), false, false),
        (t(6, 0), false, false),
        (t(8, 0), false, false),
        (t(9, 0), false, false),
        (t(10, 0), false, false),
        (t(11, 0), false, false),
        (t(12, 0), false, false),
        (t(13, 0), false, false),
        (t(13, 59), false, false),
        (t(14, 0), true, false),
        (t(14, 1), true, false),
        (t(15, 0), true, false),
        (t(16, 0), true, false),
        (t(17, 0), true, false),
        (t(18, 0), true, false),
        (t(19, 0), true, false),
        (t(20, 0), true, false),
        (t(21, 0), true, true),
        (t(21, 1), false, true),
        (t(22, 0), false, true),
        (t(23, 0), false, true),
    ];

    let monday = NaiveDate::from_ymd_opt(2022, 2, 14).unwrap();
    let friday = NaiveDate::from_ymd_opt(2022, 2, 11).unwrap();

    for (time, open_monday, open_friday) in expected {
        let hms = |date: NaiveDate| {
            date.and_hms_opt(time.hour().into(), time.minute().into(), 0)
                .unwrap()
        };

        let names: Vec<&str> = store
            .query_open_at(hms(monday))
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        let expected_names: Vec<&str> = if open_monday { vec!["test"] } else { vec![] };
        assert_eq!(names, expected_names, "Monday {}", time);

        let names: Vec<&str> = store
            .query_open_at(hms(friday))
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        let expected_names: Vec<&str> = if open_friday { vec!["test"] } else { vec![] };
        assert_eq!(names, expected_names, "Friday {}", time);
    }
}

#[test]
fn test_only_matching_restaurants_returned() {
    let mut store = RestaurantStore::new();
    let early = store.add_restaurant("early bird", 0.0, vec![]);
    let late = store.add_restaurant("night owl", 0.0, vec![]);
    store
        .replace_schedule(early, buying_frenzy::parse_schedule("Mon - Sun 6 am - 11 am").unwrap())
        .unwrap();
    store
        .replace_schedule(late, buying_frenzy::parse_schedule("Mon - Sun 6 pm - 3 am").unwrap())
        .unwrap();

    let wednesday = NaiveDate::from_ymd_opt(2022, 2, 16).unwrap();
    let at = |h| wednesday.and_hms_opt(h, 0, 0).unwrap();

    let names = |h| -> Vec<String> {
        store
            .query_open_at(at(h))
            .into_iter()
            .map(|r| r.name.clone())
            .collect()
    };

    assert_eq!(names(7), vec!["early bird"]);
    assert_eq!(names(2), vec!["night owl"]);
    assert_eq!(names(20), vec!["night owl"]);
    assert!(names(14).is_empty());
}
