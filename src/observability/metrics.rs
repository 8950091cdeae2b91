use crate::format::IdFormat;
use crate::observability::labels::Labels;
use metrics::counter;

pub const VALIDATIONS_METRIC: &str = "taiwan_id.validations";

const FORMAT: &str = "format";
const RESULT: &str = "result";

pub struct ValidationMetrics;

impl ValidationMetrics {
    /// Counts one validation. The counter is resolved on every call so that it
    /// reaches whichever recorder is installed at that point.
    pub fn record(format: IdFormat, valid: bool) {
        let format: &'static str = format.into();
        let result = if valid { "valid" } else { "invalid" };
        let labels = Labels::new(&[(FORMAT, format), (RESULT, result)]);
        counter!(VALIDATIONS_METRIC, labels).increment(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::secondary_validation::check;
    use crate::{
        validate_any, validate_business_number, validate_national_id, validate_resident_permit_id,
    };
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::{CompositeKey, MetricKind::Counter};

    fn validations_key(format: &'static str, result: &'static str) -> CompositeKey {
        CompositeKey::new(
            Counter,
            Key::from_parts(
                VALIDATIONS_METRIC,
                vec![Label::new(FORMAT, format), Label::new(RESULT, result)],
            ),
        )
    }

    #[test]
    fn should_count_validations_by_format_and_result() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let _ = check("A123456789");
            let _ = check("a123456789");
            let _ = check("A123456788");
            let _ = check("04595257");
            let _ = check("not an id");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let expected = [
            (validations_key("national_id", "valid"), 2),
            (validations_key("national_id", "invalid"), 1),
            (validations_key("business_number", "valid"), 1),
            (validations_key("invalid", "invalid"), 1),
        ];
        for (key, count) in expected {
            let metric_value = snapshot.get(&key).expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(count)));
        }
        assert!(!snapshot.contains_key(&validations_key("old_resident_permit", "valid")));
    }

    #[test]
    fn should_count_what_each_operation_returns() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            assert!(validate_national_id("A123456789"));
            assert!(validate_business_number("04595257"));
            assert!(validate_resident_permit_id("AC01234567"));
            // The shape is a resident permit, so a national ID check fails
            assert!(!validate_national_id("A800000014"));
            assert!(!validate_any("04595257"));
            assert!(!validate_business_number("A123456789"));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let expected = [
            (validations_key("national_id", "valid"), 1),
            (validations_key("national_id", "invalid"), 1),
            (validations_key("business_number", "valid"), 1),
            (validations_key("business_number", "invalid"), 1),
            (validations_key("old_resident_permit", "valid"), 1),
            (validations_key("new_resident_permit", "invalid"), 1),
        ];
        for (key, count) in expected {
            let metric_value = snapshot.get(&key).expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(count)));
        }
        assert!(!snapshot.contains_key(&validations_key("new_resident_permit", "valid")));
    }
}
