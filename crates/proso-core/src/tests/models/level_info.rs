use crate::{LevelInfo, UserProfile};

use proptest::prelude::*;

#[test]
fn test_level_info_zero_points() {
    assert_eq!(
        LevelInfo::for_points(0),
        LevelInfo {
            level: 1,
            range_start: 0,
            range_end: 30,
            range_size: 30,
            points_into_level: 0,
        }
    );
}

#[test]
fn test_level_info_last_point_of_first_level() {
    let info = LevelInfo::for_points(29);
    assert_eq!(info.level, 1);
    assert_eq!(info.points_into_level, 29);
}

#[test]
fn test_level_info_second_level_keeps_initial_size() {
    // Growth starts at zero, so the second range is still 30 wide
    let info = LevelInfo::for_points(30);
    assert_eq!(info.level, 2);
    assert_eq!(info.range_start, 30);
    assert_eq!(info.range_end, 60);
    assert_eq!(info.range_size, 30);
    assert_eq!(info.points_into_level, 0);
}

#[test]
fn test_level_info_growing_ranges() {
    let third = LevelInfo::for_points(60);
    assert_eq!((third.level, third.range_start, third.range_end), (3, 60, 100));
    assert_eq!(third.range_size, 40);

    let fourth = LevelInfo::for_points(100);
    assert_eq!((fourth.level, fourth.range_start, fourth.range_end), (4, 100, 160));
    assert_eq!(fourth.range_size, 60);

    let fifth = LevelInfo::for_points(200);
    assert_eq!((fifth.level, fifth.range_start, fifth.range_end), (5, 160, 250));
    assert_eq!(fifth.points_into_level, 40);
}

#[test]
fn test_level_info_from_profile() {
    let profile = UserProfile {
        points: 45,
        ..Default::default()
    };
    let info = profile.level_info();
    assert_eq!(info.level, 2);
    assert_eq!(info.points_into_level, 15);
    assert!((info.progress() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_anonymous_profile_is_level_one() {
    assert_eq!(UserProfile::anonymous().level_info().level, 1);
}

#[test]
fn test_max_points_land_in_capped_last_level() {
    let info = LevelInfo::for_points(u64::MAX);

    assert_eq!(info.range_end, u64::MAX);
    assert_eq!(info.range_end - info.range_start, info.range_size);
    assert_eq!(info.points_into_level, u64::MAX - info.range_start);
    assert!(info.level > 1);
}

#[test]
fn test_points_just_below_max_share_the_last_level() {
    let last = LevelInfo::for_points(u64::MAX);
    let below = LevelInfo::for_points(u64::MAX - 1);

    assert_eq!(below.level, last.level);
    assert!(below.points_into_level < below.range_size);
}

proptest! {
    #[test]
    fn given_points_when_level_computed_then_points_inside_range(points in 0u64..1_000_000) {
        let info = LevelInfo::for_points(points);
        prop_assert!(info.range_start <= points);
        prop_assert!(points < info.range_end);
        prop_assert_eq!(info.range_end - info.range_start, info.range_size);
        prop_assert_eq!(info.points_into_level, points - info.range_start);
    }

    #[test]
    fn given_more_points_when_level_computed_then_level_never_drops(points in 0u64..100_000) {
        let here = LevelInfo::for_points(points);
        let next = LevelInfo::for_points(points + 1);
        prop_assert!(next.level >= here.level);
        prop_assert!(next.level <= here.level + 1);
    }
}
