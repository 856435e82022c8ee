//! Validation and schedule arithmetic shared by the recurring action contracts.
//!
//! Everything here is pure so it can be unit tested without a contract
//! environment.

#![no_std]

/// Amounts are strictly positive; zero and negatives are rejected.
#[inline]
pub fn is_positive_amount(amount: i128) -> bool {
    amount > 0
}

/// Frequencies are whole seconds and must be non-zero.
#[inline]
pub fn is_valid_frequency(frequency: u64) -> bool {
    frequency > 0
}

/// An index is allocated when `0 < index <= counter`.
///
/// Allocation says nothing about whether the slot still holds a live action.
#[inline]
pub fn is_allocated_index(index: u64, counter: u64) -> bool {
    index > 0 && index <= counter
}

#[inline]
pub fn is_due(now: u64, next_execution: u64) -> bool {
    now >= next_execution
}

/// First due date of an action registered at `created_at`.
pub fn first_due(created_at: u64, frequency: u64) -> Option<u64> {
    created_at.checked_add(frequency)
}

/// Next due date after an execution.
///
/// The increment is applied to the previous due date, not to the execution
/// time, so a late execution keeps the fixed cadence.
pub fn advance_due(next_execution: u64, frequency: u64) -> Option<u64> {
    next_execution.checked_add(frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_must_be_positive() {
        assert!(is_positive_amount(1));
        assert!(!is_positive_amount(0));
        assert!(!is_positive_amount(-5));
    }

    #[test]
    fn zero_frequency_is_invalid() {
        assert!(!is_valid_frequency(0));
        assert!(is_valid_frequency(1));
    }

    #[test]
    fn index_zero_is_never_allocated() {
        assert!(!is_allocated_index(0, 0));
        assert!(!is_allocated_index(0, 10));
    }

    #[test]
    fn index_bounded_by_counter() {
        assert!(is_allocated_index(3, 3));
        assert!(is_allocated_index(1, 3));
        assert!(!is_allocated_index(5, 3));
    }

    #[test]
    fn due_at_exact_boundary() {
        assert!(is_due(100, 100));
        assert!(is_due(101, 100));
        assert!(!is_due(99, 100));
    }

    #[test]
    fn first_due_adds_frequency_to_creation_time() {
        assert_eq!(first_due(1_000, 2_592_000), Some(2_593_000));
        assert_eq!(first_due(u64::MAX, 1), None);
    }

    #[test]
    fn advance_keeps_cadence_when_late() {
        // executed at 2_600_000, still advances from the old due date
        assert_eq!(advance_due(2_593_000, 2_592_000), Some(5_185_000));
        assert_eq!(advance_due(u64::MAX - 1, 2), None);
    }
}
