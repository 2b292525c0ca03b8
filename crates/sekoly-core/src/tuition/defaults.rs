//! Static default fee table, used when no active configuration is
//! persisted for a class.

use super::model::{FeeSource, TuitionAmounts};

pub const DEFAULT_MONTHLY_AMOUNT: i64 = 150_000;
pub const DEFAULT_REGISTRATION_FEE: i64 = 50_000;
pub const DEFAULT_EXAM_FEE: i64 = 25_000;

/// Default monthly écolage for the known class codes. Any unrecognized
/// class name gets the global default.
pub fn default_monthly_for(class_name: &str) -> i64 {
    match class_name {
        "TPS" | "PS" => 100_000,
        "MS" | "GS" => 110_000,
        "CP" | "CE1" => 120_000,
        "CE2" | "CM1" | "CM2" => 130_000,
        "6EME" | "5EME" => 160_000,
        "4EME" | "3EME" => 170_000,
        "2NDE" | "1ERE" => 190_000,
        "TLE" => 200_000,
        _ => DEFAULT_MONTHLY_AMOUNT,
    }
}

/// Full default suggestion for a class, tagged as table-derived.
pub fn default_amounts_for(class_name: &str) -> TuitionAmounts {
    TuitionAmounts {
        monthly_amount: default_monthly_for(class_name),
        registration_fee: DEFAULT_REGISTRATION_FEE,
        exam_fee: DEFAULT_EXAM_FEE,
        source: FeeSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_span_the_expected_range() {
        assert_eq!(default_monthly_for("TPS"), 100_000);
        assert_eq!(default_monthly_for("CM2"), 130_000);
        assert_eq!(default_monthly_for("TLE"), 200_000);
    }

    #[test]
    fn unknown_class_gets_global_defaults() {
        let amounts = default_amounts_for("UNKNOWN_CLASS");
        assert_eq!(amounts.monthly_amount, 150_000);
        assert_eq!(amounts.registration_fee, 50_000);
        assert_eq!(amounts.exam_fee, 25_000);
        assert_eq!(amounts.source, FeeSource::Default);
    }

    #[test]
    fn annual_invariant_holds_for_defaults() {
        for class in ["TPS", "CP", "6EME", "TLE", "SOMETHING_ELSE"] {
            let amounts = default_amounts_for(class);
            assert_eq!(amounts.annual_amount(), amounts.monthly_amount * 10);
        }
    }
}
