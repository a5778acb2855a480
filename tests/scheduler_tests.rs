mod common;
use common::{initialized, test_week};
use rweekplan::core::scheduler::{Priority, auto_schedule, session_hours};
use rweekplan::errors::AppError;
use rweekplan::models::activity::Activity;
use rweekplan::models::schedule::WeekSchedule;

fn training_days(schedule: &WeekSchedule, activity: Activity) -> Vec<(usize, u32)> {
    let week = test_week();
    let mut found = Vec::new();
    for (idx, date) in week.iter().enumerate() {
        for hour in 0..24 {
            if schedule.get_activity(date, hour) == activity {
                found.push((idx, hour));
            }
        }
    }
    found
}

#[test]
fn test_balanced_on_empty_week() {
    let week = test_week();
    let mut schedule = initialized(&week);

    let report = auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    assert_eq!(report.meals, 21);
    assert_eq!((report.grappling, report.lifting), (3, 3));
    assert_eq!(training_days(&schedule, Activity::Grappling), vec![(0, 19), (1, 19), (2, 19)]);
    // lifting lands on day i+3 for i = 1, 2, 3
    assert_eq!(training_days(&schedule, Activity::Lifting), vec![(4, 19), (5, 19), (6, 19)]);

    for date in &week {
        for hour in [7, 12, 18] {
            assert_eq!(schedule.get_activity(date, hour), Activity::Eating);
        }
    }
}

#[test]
fn test_grappling_priority_quota() {
    let week = test_week();
    let mut schedule = initialized(&week);

    let report = auto_schedule(&mut schedule, &week, Priority::Grappling, 60).unwrap();

    assert_eq!((report.grappling, report.lifting), (4, 2));
    assert_eq!(
        training_days(&schedule, Activity::Grappling),
        vec![(0, 19), (1, 19), (2, 19), (3, 19)]
    );
    assert_eq!(training_days(&schedule, Activity::Lifting), vec![(4, 19), (5, 19)]);
}

#[test]
fn test_lifting_priority_wraps_into_start_of_week() {
    let week = test_week();
    let mut schedule = initialized(&week);

    let report = auto_schedule(&mut schedule, &week, Priority::Lifting, 60).unwrap();

    assert_eq!((report.grappling, report.lifting), (2, 4));
    assert_eq!(training_days(&schedule, Activity::Grappling), vec![(0, 19), (1, 19)]);
    // Monday already has grappling at 19, so the fourth lifting session takes 20
    assert_eq!(
        training_days(&schedule, Activity::Lifting),
        vec![(0, 20), (4, 19), (5, 19), (6, 19)]
    );
}

#[test]
fn test_never_overwrites_manual_entries() {
    let week = test_week();
    let mut schedule = initialized(&week);
    for date in &week {
        schedule.set_block(*date, 8, 22, Activity::Work).unwrap();
    }
    let before = schedule.clone();

    let report = auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    assert_eq!((report.grappling, report.lifting), (0, 0));
    // only 07:00 is still free for a meal
    assert_eq!(report.meals, 7);
    for date in &week {
        for hour in 8..22 {
            assert_eq!(schedule.get_activity(date, hour), Activity::Work);
        }
        assert_eq!(schedule.get_activity(date, 7), Activity::Eating);
        assert_eq!(schedule.get_activity(date, 12), before.get_activity(date, 12));
    }
}

#[test]
fn test_sessions_skip_blocked_preferred_hours() {
    let week = test_week();
    let mut schedule = initialized(&week);
    schedule.set_activity(week[0], 19, Activity::Work).unwrap();

    auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    assert_eq!(schedule.get_activity(&week[0], 20), Activity::Grappling);
}

#[test]
fn test_rerun_is_idempotent() {
    let week = test_week();
    let mut schedule = initialized(&week);
    schedule.set_block(week[2], 9, 17, Activity::Work).unwrap();

    auto_schedule(&mut schedule, &week, Priority::Lifting, 120).unwrap();
    let first = schedule.clone();
    auto_schedule(&mut schedule, &week, Priority::Lifting, 120).unwrap();

    assert_eq!(schedule, first);
}

#[test]
fn test_previous_generated_entries_are_cleared() {
    let week = test_week();
    let mut schedule = initialized(&week);
    schedule.set_activity(week[3], 10, Activity::Lifting).unwrap();
    schedule.set_activity(week[3], 14, Activity::Eating).unwrap();

    auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    assert_eq!(schedule.get_activity(&week[3], 10), Activity::Empty);
    assert_eq!(schedule.get_activity(&week[3], 14), Activity::Empty);
}

#[test]
fn test_two_hour_sessions_fit_before_22() {
    let week = test_week();
    let mut schedule = initialized(&week);

    let report = auto_schedule(&mut schedule, &week, Priority::Balanced, 120).unwrap();

    assert_eq!(report.session_hours, 2);
    assert_eq!(schedule.get_activity(&week[0], 19), Activity::Grappling);
    assert_eq!(schedule.get_activity(&week[0], 20), Activity::Grappling);
    assert_eq!(schedule.get_activity(&week[0], 21), Activity::Empty);
}

#[test]
fn test_long_sessions_find_no_slot() {
    let week = test_week();
    let mut schedule = initialized(&week);

    let report = auto_schedule(&mut schedule, &week, Priority::Balanced, 240).unwrap();

    assert_eq!((report.grappling, report.lifting), (0, 0));
    assert_eq!(report.meals, 21);
}

#[test]
fn test_session_length_is_truncated_and_validated() {
    assert_eq!(session_hours(90).unwrap(), 1);
    assert_eq!(session_hours(180).unwrap(), 3);
    assert!(matches!(session_hours(45), Err(AppError::InvalidSessionLength(45))));
}

#[test]
fn test_invalid_session_length_leaves_schedule_untouched() {
    let week = test_week();
    let mut schedule = initialized(&week);
    let before = schedule.clone();

    assert!(auto_schedule(&mut schedule, &week, Priority::Balanced, 30).is_err());
    assert_eq!(schedule, before);
}

#[test]
fn test_missing_days_are_initialized() {
    let week = test_week();
    let mut schedule = WeekSchedule::new();

    auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    for date in &week {
        assert_eq!(schedule.get_activity(date, 0), Activity::Sleep);
        assert_eq!(schedule.get_activity(date, 7), Activity::Eating);
    }
}

#[test]
fn test_meal_hour_generated_entry_is_replaced_but_work_kept() {
    let week = test_week();
    let mut schedule = initialized(&week);
    schedule.set_activity(week[0], 7, Activity::Grappling).unwrap();
    schedule.set_activity(week[1], 7, Activity::Work).unwrap();

    let report = auto_schedule(&mut schedule, &week, Priority::Balanced, 60).unwrap();

    assert_eq!(schedule.get_activity(&week[0], 7), Activity::Eating);
    assert_eq!(schedule.get_activity(&week[1], 7), Activity::Work);
    assert_eq!(report.meals, 20);
}
