mod common;
use common::{d, test_week};
use rweekplan::errors::AppError;
use rweekplan::models::activity::Activity;
use rweekplan::models::schedule::WeekSchedule;

#[test]
fn test_get_activity_on_unknown_day_is_empty() {
    let schedule = WeekSchedule::new();
    assert_eq!(schedule.get_activity(&d("2024-01-01"), 9), Activity::Empty);
    assert_eq!(schedule.get_activity(&d("2024-01-01"), 99), Activity::Empty);
}

#[test]
fn test_init_day_sets_default_sleep_block() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-01");
    schedule.init_day(day);

    for hour in 0..=6 {
        assert_eq!(schedule.get_activity(&day, hour), Activity::Sleep, "hour {hour}");
    }
    for hour in 7..=22 {
        assert_eq!(schedule.get_activity(&day, hour), Activity::Empty, "hour {hour}");
    }
    assert_eq!(schedule.get_activity(&day, 23), Activity::Sleep);
}

#[test]
fn test_init_day_is_idempotent() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-01");
    schedule.init_day(day);
    schedule.set_activity(day, 9, Activity::Work).unwrap();
    schedule.set_activity(day, 3, Activity::Empty).unwrap();

    let before = schedule.clone();
    schedule.init_day(day);

    assert_eq!(schedule, before);
    assert_eq!(schedule.get_activity(&day, 9), Activity::Work);
    assert_eq!(schedule.get_activity(&day, 3), Activity::Empty);
}

#[test]
fn test_set_activity_creates_an_all_empty_day() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-02-10");
    schedule.set_activity(day, 12, Activity::Eating).unwrap();

    assert!(schedule.contains_day(&day));
    assert_eq!(schedule.get_activity(&day, 12), Activity::Eating);
    // no default sleep block when the day is created by a direct write
    assert_eq!(schedule.get_activity(&day, 0), Activity::Empty);
    assert_eq!(schedule.get_activity(&day, 23), Activity::Empty);
}

#[test]
fn test_set_activity_rejects_hour_out_of_range() {
    let mut schedule = WeekSchedule::new();
    let err = schedule
        .set_activity(d("2024-01-01"), 24, Activity::Work)
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidHour(24)));
    assert!(schedule.is_empty());
}

#[test]
fn test_cycle_follows_fixed_order_and_wraps() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-01");

    let seen: Vec<Activity> = (0..6)
        .map(|_| schedule.cycle_activity(day, 10).unwrap())
        .collect();

    assert_eq!(
        seen,
        vec![
            Activity::Work,
            Activity::Sleep,
            Activity::Eating,
            Activity::Grappling,
            Activity::Lifting,
            Activity::Empty,
        ]
    );
}

#[test]
fn test_cycle_six_times_returns_to_start_for_every_value() {
    for start in Activity::CYCLE {
        let mut schedule = WeekSchedule::new();
        let day = d("2024-01-01");
        schedule.set_activity(day, 5, start).unwrap();

        for _ in 0..6 {
            schedule.cycle_activity(day, 5).unwrap();
        }
        assert_eq!(schedule.get_activity(&day, 5), start);
    }
}

#[test]
fn test_clear_week_overwrites_and_keeps_other_dates() {
    let week = test_week();
    let outside = d("2023-12-25");
    let mut schedule = WeekSchedule::new();

    schedule.set_block(week[2], 0, 24, Activity::Work).unwrap();
    schedule.set_activity(outside, 9, Activity::Lifting).unwrap();

    schedule.clear_week(&week);

    for date in &week {
        for hour in [23, 0, 1, 2, 3, 4, 5, 6] {
            assert_eq!(schedule.get_activity(date, hour), Activity::Sleep);
        }
        for hour in 7..=22 {
            assert_eq!(schedule.get_activity(date, hour), Activity::Empty);
        }
    }
    assert_eq!(schedule.get_activity(&outside, 9), Activity::Lifting);
}

#[test]
fn test_set_block_fills_half_open_range() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-02");
    schedule.init_day(day);
    schedule.set_block(day, 9, 17, Activity::Work).unwrap();

    assert_eq!(schedule.get_activity(&day, 8), Activity::Empty);
    assert_eq!(schedule.get_activity(&day, 9), Activity::Work);
    assert_eq!(schedule.get_activity(&day, 16), Activity::Work);
    assert_eq!(schedule.get_activity(&day, 17), Activity::Empty);
}

#[test]
fn test_set_block_rejects_empty_or_overflowing_range() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-02");

    assert!(matches!(
        schedule.set_block(day, 10, 10, Activity::Work),
        Err(AppError::InvalidBlock { start: 10, end: 10 })
    ));
    assert!(schedule.set_block(day, 20, 25, Activity::Work).is_err());
    assert!(schedule.is_empty());
}

#[test]
fn test_tally_counts_hours_over_given_days() {
    let week = test_week();
    let mut schedule = WeekSchedule::new();
    for date in &week {
        schedule.init_day(*date);
    }
    schedule.set_block(week[0], 9, 17, Activity::Work).unwrap();
    schedule.set_activity(week[1], 19, Activity::Grappling).unwrap();
    schedule.set_activity(d("2024-01-08"), 19, Activity::Lifting).unwrap();

    let tally = schedule.tally(&week);
    assert_eq!(tally.work, 8);
    assert_eq!(tally.grappling, 1);
    assert_eq!(tally.lifting, 0);
    assert_eq!(tally.sleep, 56);
    assert_eq!(tally.free, 7 * 24 - 56 - 8 - 1);
}

#[test]
fn test_serialized_shape_uses_lowercase_labels() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-01-01");
    schedule.init_day(day);
    schedule.set_activity(day, 7, Activity::Eating).unwrap();
    schedule.set_activity(day, 19, Activity::Grappling).unwrap();

    let json = serde_json::to_value(&schedule).unwrap();
    let day_json = &json["2024-01-01"];

    assert_eq!(day_json["0"], "sleep");
    assert_eq!(day_json["7"], "eating");
    assert_eq!(day_json["8"], "");
    assert_eq!(day_json["19"], "grappling");
    assert_eq!(day_json.as_object().unwrap().len(), 24);
}

#[test]
fn test_every_label_round_trips_through_json() {
    let mut schedule = WeekSchedule::new();
    let day = d("2024-03-04");
    for (hour, activity) in Activity::CYCLE.into_iter().enumerate() {
        schedule.set_activity(day, hour as u32, activity).unwrap();
    }

    let json = serde_json::to_string(&schedule).unwrap();
    let back: WeekSchedule = serde_json::from_str(&json).unwrap();

    assert_eq!(back, schedule);
    for label in ["work", "sleep", "eating", "grappling", "lifting"] {
        assert!(json.contains(&format!("\"{label}\"")));
    }
}
