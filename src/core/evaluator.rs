use crate::domain::model::{Classification, ScoreRecord, PASS_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    record: ScoreRecord,
}

impl Evaluator {
    /// Any integer is accepted; range is not checked here.
    pub fn new(marks: i32) -> Self {
        Self {
            record: ScoreRecord::new(marks),
        }
    }

    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    pub fn marks(&self) -> i32 {
        self.record.marks()
    }

    /// Classifies `subject_marks` only. The stored record is not consulted.
    pub fn evaluate_subject_marks(&self, subject_marks: i32) -> Classification {
        if subject_marks > PASS_THRESHOLD {
            Classification::Pass
        } else {
            Classification::Fail
        }
    }

    pub fn evaluate(&self) -> Classification {
        self.evaluate_subject_marks(self.record.marks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        let evaluator = Evaluator::new(0);
        assert_eq!(evaluator.evaluate_subject_marks(50), Classification::Fail);
        assert_eq!(evaluator.evaluate_subject_marks(51), Classification::Pass);
    }

    #[test]
    fn test_above_threshold_passes() {
        let evaluator = Evaluator::new(0);
        for marks in [51, 75, 100, 1_000, i32::MAX] {
            assert_eq!(evaluator.evaluate_subject_marks(marks), Classification::Pass, "marks={}", marks);
        }
    }

    #[test]
    fn test_at_or_below_threshold_fails() {
        let evaluator = Evaluator::new(0);
        for marks in [50, 49, 0, -3, i32::MIN] {
            assert_eq!(evaluator.evaluate_subject_marks(marks), Classification::Fail, "marks={}", marks);
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let evaluator = Evaluator::new(60);
        let first = evaluator.evaluate_subject_marks(42);
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate_subject_marks(42), first);
        }
    }

    #[test]
    fn test_argument_wins_over_stored_marks() {
        // 儲存的分數不影響傳入參數的判定
        let passing = Evaluator::new(90);
        assert_eq!(passing.evaluate_subject_marks(10), Classification::Fail);
        assert_eq!(passing.marks(), 90);

        let failing = Evaluator::new(10);
        assert_eq!(failing.evaluate_subject_marks(90), Classification::Pass);
        assert_eq!(failing.marks(), 10);
    }

    #[test]
    fn test_evaluate_uses_stored_record() {
        assert_eq!(Evaluator::new(75).evaluate(), Classification::Pass);
        assert_eq!(Evaluator::new(50).evaluate(), Classification::Fail);
        assert_eq!(Evaluator::new(-3).record(), ScoreRecord::new(-3));
    }

    #[test]
    fn test_classification_strings() {
        assert_eq!(Classification::Pass.to_string(), "PASS");
        assert_eq!(Classification::Fail.as_str(), "FAIL");
    }
}
