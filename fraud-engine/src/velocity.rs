//! Trailing-window checks over transaction history
//!
//! All checks are pure: the window is anchored at the timestamp of the
//! transaction under review, never at the wall clock.

use crate::types::Transaction;
use chrono::Duration;

/// Count history entries inside the trailing window ending at `current`
///
/// The window boundary is inclusive: an entry aged exactly `window` counts.
/// Entries timestamped after `current` are outside a trailing window and
/// never count.
pub fn count_within_window(
    current: &Transaction,
    history: &[Transaction],
    window: Duration,
) -> usize {
    history
        .iter()
        .filter(|prior| in_trailing_window(current, prior, window))
        .count()
}

/// True when some entry inside the trailing window carries a different location
pub fn has_location_change(
    current: &Transaction,
    history: &[Transaction],
    window: Duration,
) -> bool {
    history.iter().any(|prior| {
        in_trailing_window(current, prior, window) && prior.location != current.location
    })
}

fn in_trailing_window(current: &Transaction, prior: &Transaction, window: Duration) -> bool {
    let age = current.timestamp - prior.timestamp;
    age >= Duration::zero() && age <= window
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn tx(minutes_ago: i64, location: &str) -> Transaction {
        Transaction::new(
            dec!(100),
            Utc::now() - Duration::minutes(minutes_ago),
            location,
        )
    }

    #[test]
    fn test_count_within_window() {
        let current = tx(0, "USA");
        let history = vec![tx(10, "USA"), tx(59, "USA"), tx(61, "USA")];

        assert_eq!(
            count_within_window(&current, &history, Duration::minutes(60)),
            2
        );
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let current = tx(0, "USA");
        let boundary = Transaction::new(
            dec!(100),
            current.timestamp - Duration::minutes(60),
            "USA",
        );

        assert_eq!(
            count_within_window(&current, &[boundary], Duration::minutes(60)),
            1
        );
    }

    #[test]
    fn test_future_entries_not_counted() {
        let current = tx(0, "USA");
        let future = Transaction::new(
            dec!(100),
            current.timestamp + Duration::minutes(5),
            "USA",
        );

        assert_eq!(
            count_within_window(&current, &[future], Duration::minutes(60)),
            0
        );
    }

    #[test]
    fn test_location_change_detected() {
        let current = tx(0, "France");
        let history = vec![tx(10, "USA")];

        assert!(has_location_change(&current, &history, Duration::minutes(30)));
    }

    #[test]
    fn test_same_location_is_not_a_change() {
        let current = tx(0, "USA");
        let history = vec![tx(5, "USA"), tx(10, "USA"), tx(15, "USA")];

        assert!(!has_location_change(&current, &history, Duration::minutes(30)));
    }

    #[test]
    fn test_location_change_outside_window_ignored() {
        let current = tx(0, "France");
        let history = vec![tx(45, "USA")];

        assert!(!has_location_change(&current, &history, Duration::minutes(30)));
    }
}
