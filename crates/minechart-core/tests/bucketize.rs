// File: crates/minechart-core/tests/bucketize.rs
// Purpose: Validate the resampling contract: fixed bucket count, gaps, max
// aggregation, early-stop, and the 24h/5-minute end-to-end scenario.

use chrono::{DateTime, Duration, Utc};
use minechart_core::{
    bucketize, bucketize_with_step, time_step, DisplayPoint, Sample, TimeDomain, TARGET_BUCKETS,
};

fn minute(m: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(m * 60, 0).unwrap()
}

fn dom(start_min: i64, end_min: i64) -> TimeDomain {
    TimeDomain::new(minute(start_min), minute(end_min)).unwrap()
}

#[test]
fn step_follows_granularity_ladder() {
    // 24h / 200 ~= 7.2 min raw -> snaps down to 5 min
    assert_eq!(time_step(&dom(0, 1440), TARGET_BUCKETS), Duration::minutes(5));
    // 1h / 200 = 18s raw -> floored at the 1-minute minimum
    assert_eq!(time_step(&dom(0, 60), TARGET_BUCKETS), Duration::minutes(1));
    // 3d / 200 ~= 21.6 min raw -> 10 min
    assert_eq!(time_step(&dom(0, 3 * 1440), TARGET_BUCKETS), Duration::minutes(10));
}

#[test]
fn bucket_count_depends_only_on_domain() {
    let domain = dom(0, 1440);
    assert_eq!(bucketize(&[], &domain, TARGET_BUCKETS).len(), 288);

    let sparse: Vec<Sample> = (100..110).map(|m| Sample::new(m, Some(1.0))).collect();
    assert_eq!(bucketize(&sparse, &domain, TARGET_BUCKETS).len(), 288);

    let dense: Vec<Sample> = (0..=1440).map(|m| Sample::new(m, Some(1.0))).collect();
    assert_eq!(bucketize(&dense, &domain, TARGET_BUCKETS).len(), 288);
}

#[test]
fn empty_buckets_are_gaps_never_zero() {
    let domain = dom(0, 60); // 1-minute step, 60 buckets
    let raw: Vec<Sample> = (10..=20).map(|m| Sample::new(m, Some(3.0))).collect();
    let out = bucketize(&raw, &domain, TARGET_BUCKETS);
    assert_eq!(out.len(), 60);

    for (i, point) in out.iter().enumerate() {
        if (10..=20).contains(&i) {
            assert_eq!(*point, DisplayPoint::new(i as i64, Some(3.0)));
        } else {
            assert_eq!(*point, DisplayPoint::GAP, "bucket {i} should be a gap");
            assert_ne!(point.value, Some(0.0));
        }
    }
}

#[test]
fn bucket_value_is_max_of_present_contributions() {
    // one 5-minute bucket holding [3, 7, null, 5]
    let raw = vec![
        Sample::new(6, Some(3.0)),
        Sample::new(7, Some(7.0)),
        Sample::new(8, None),
        Sample::new(9, Some(5.0)),
    ];
    let out = bucketize_with_step(&raw, &dom(0, 60), Duration::minutes(5));
    assert_eq!(out.len(), 12);
    // bucket [5, 10): max of present values, earliest contributing time
    assert_eq!(out[1], DisplayPoint::new(6, Some(7.0)));
    assert_eq!(out[0], DisplayPoint::GAP);
}

#[test]
fn all_null_bucket_keeps_time_but_no_value() {
    let raw = vec![Sample::new(6, None), Sample::new(8, None)];
    let out = bucketize_with_step(&raw, &dom(0, 60), Duration::minutes(5));
    assert_eq!(out[1].time, Some(6));
    assert_eq!(out[1].value, None);
}

#[test]
fn short_history_keeps_full_length_with_null_prefix() {
    // oldest sample well inside the domain: older buckets stay gaps but the
    // sequence is never truncated
    let domain = dom(0, 1440);
    let raw: Vec<Sample> = (1300..=1440).map(|m| Sample::new(m, Some(2.0))).collect();
    let out = bucketize(&raw, &domain, TARGET_BUCKETS);
    assert_eq!(out.len(), 288);
    assert!(out[..260].iter().all(|p| p.is_gap()));
    assert!(out[260..].iter().all(|p| p.value == Some(2.0)));
}

#[test]
fn samples_outside_domain_are_ignored() {
    let domain = dom(100, 160);
    let raw = vec![
        Sample::new(90, Some(99.0)),  // older than the window
        Sample::new(120, Some(4.0)),
        Sample::new(170, Some(99.0)), // newer than the window
    ];
    let out = bucketize(&raw, &domain, TARGET_BUCKETS);
    assert!(out.iter().all(|p| p.value != Some(99.0)));
    assert_eq!(out[20], DisplayPoint::new(120, Some(4.0)));
}

#[test]
fn sample_exactly_at_domain_end_lands_in_last_bucket() {
    let domain = dom(0, 60);
    let out = bucketize(&[Sample::new(60, Some(8.0))], &domain, TARGET_BUCKETS);
    assert_eq!(out[59], DisplayPoint::new(60, Some(8.0)));
}

#[test]
fn day_of_alternating_minutes_fills_every_bucket() {
    // 24h ending at a fixed instant, one sample per minute alternating
    // between 5 and a gap; 5-minute buckets -> 288 buckets, each valued 5
    let base = 1_000_000;
    let domain = dom(base, base + 1440);
    let raw: Vec<Sample> = (0..=1440)
        .map(|i| Sample::new(base + i, if i % 2 == 0 { Some(5.0) } else { None }))
        .collect();
    let out = bucketize(&raw, &domain, TARGET_BUCKETS);
    assert_eq!(out.len(), 288);
    for (i, point) in out.iter().enumerate() {
        assert_eq!(point.value, Some(5.0), "bucket {i}");
        assert_eq!(point.time, Some(base + 5 * i as i64), "bucket {i} keeps its earliest sample");
    }
}
