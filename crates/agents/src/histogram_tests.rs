use super::*;

#[test]
fn empty_histogram_has_no_mode() {
    let histogram = Histogram::new();
    assert!(histogram.is_empty());
    assert_eq!(histogram.mode(), None);
    assert_eq!(histogram.total(), 0);
}

#[test]
fn mode_is_most_frequent() {
    let mut histogram = Histogram::new();
    for sign in [0, 0, 1] {
        histogram.record(sign);
    }
    assert_eq!(histogram.mode(), Some(0));
    assert_eq!(histogram.count(0), 2);
    assert_eq!(histogram.count(1), 1);
    assert_eq!(histogram.count(2), 0);
}

#[test]
fn ties_go_to_first_seen() {
    let mut histogram = Histogram::new();
    for sign in [2, 1, 1, 2] {
        histogram.record(sign);
    }
    assert_eq!(histogram.mode(), Some(2));

    let mut histogram = Histogram::new();
    for sign in [1, 2, 2, 1] {
        histogram.record(sign);
    }
    assert_eq!(histogram.mode(), Some(1));
}

#[test]
fn clear_forgets_everything() {
    let mut histogram = Histogram::new();
    histogram.record(1);
    histogram.record(1);
    histogram.clear();
    assert!(histogram.is_empty());
    assert_eq!(histogram.count(1), 0);
}
