//! Rating-to-confidence normalization.
//!
//! Converts a batch of raw integer ratings into a probability-like
//! distribution: each record's confidence is its rating's share of the
//! batch total. Ratings may be negative, so the batch is first shifted
//! into positive territory on a working copy; the stored ratings are
//! never mutated.

use crate::types::Abbreviation;

/// Fill in `confidence` for every record in the batch.
///
/// If the minimum rating is negative, all working ratings are shifted
/// up by `|min| + 1` (a working rating of zero is not allowed), which
/// preserves relative order and spacing. Each confidence is then the
/// shifted rating divided by the shifted sum, so a non-empty batch's
/// confidences add up to 1.0.
///
/// Must be invoked exactly once per logically complete batch: when
/// pagination accumulates several pages, the accumulated set is
/// normalized as a whole, overwriting any confidences computed for an
/// earlier partial batch.
///
/// An empty batch is returned unchanged. A batch whose ratings are all
/// zero has no meaningful distribution and is left with confidences
/// unset.
pub fn assign_confidence(records: &mut [Abbreviation]) {
    let Some(min) = records.iter().map(|r| r.rating).min() else {
        return;
    };
    let shift = if min < 0 { min.abs() + 1 } else { 0 };

    let shifted: Vec<i64> = records.iter().map(|r| r.rating + shift).collect();
    let total: i64 = shifted.iter().sum();
    if total == 0 {
        return;
    }

    for (record, rating) in records.iter_mut().zip(shifted) {
        record.confidence = Some(rating as f64 / total as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: i64) -> Abbreviation {
        Abbreviation {
            abbreviation: "ABC".into(),
            definition: "A Basic Case".into(),
            rating,
            confidence: None,
        }
    }

    fn confidences(records: &[Abbreviation]) -> Vec<f64> {
        records
            .iter()
            .map(|r| r.confidence.expect("confidence should be set"))
            .collect()
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut records: Vec<Abbreviation> = vec![];
        assign_confidence(&mut records);
        assert!(records.is_empty());
    }

    #[test]
    fn single_record_gets_full_confidence() {
        let mut records = vec![record(7)];
        assign_confidence(&mut records);
        assert_eq!(records[0].confidence, Some(1.0));
    }

    #[test]
    fn confidences_sum_to_one() {
        let mut records = vec![record(1), record(2), record(3), record(10)];
        assign_confidence(&mut records);
        let sum: f64 = confidences(&records).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn confidences_proportional_to_ratings() {
        let mut records = vec![record(1), record(3)];
        assign_confidence(&mut records);
        let conf = confidences(&records);
        assert!((conf[0] - 0.25).abs() < 1e-9);
        assert!((conf[1] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn negative_minimum_shifts_whole_batch() {
        // min is -4, so the working set becomes {1, 5, 10}.
        let mut records = vec![record(-4), record(0), record(5)];
        assign_confidence(&mut records);
        let conf = confidences(&records);
        assert!((conf[0] - 1.0 / 16.0).abs() < 1e-9);
        assert!((conf[1] - 5.0 / 16.0).abs() < 1e-9);
        assert!((conf[2] - 10.0 / 16.0).abs() < 1e-9);
        let sum: f64 = conf.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ordering_of_ratings_preserved_in_confidences() {
        let mut records = vec![record(-10), record(-2), record(0), record(4), record(4)];
        assign_confidence(&mut records);
        let conf = confidences(&records);
        for pair in conf.windows(2) {
            assert!(pair[0] <= pair[1], "ordering violated: {pair:?}");
        }
        // Equal ratings get equal confidence.
        assert!((conf[3] - conf[4]).abs() < 1e-12);
    }

    #[test]
    fn stored_ratings_never_mutated() {
        let mut records = vec![record(-4), record(0), record(5)];
        assign_confidence(&mut records);
        let ratings: Vec<i64> = records.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![-4, 0, 5]);
    }

    #[test]
    fn all_zero_batch_left_unset() {
        let mut records = vec![record(0), record(0)];
        assign_confidence(&mut records);
        assert!(records.iter().all(|r| r.confidence.is_none()));
    }

    #[test]
    fn renormalizing_overwrites_previous_confidences() {
        let mut records = vec![record(1), record(1)];
        assign_confidence(&mut records);
        records.push(record(2));
        assign_confidence(&mut records);
        let conf = confidences(&records);
        assert!((conf[0] - 0.25).abs() < 1e-9);
        assert!((conf[1] - 0.25).abs() < 1e-9);
        assert!((conf[2] - 0.5).abs() < 1e-9);
    }
}
