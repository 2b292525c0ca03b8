use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info_span, Instrument};

use sekoly_core::ports::TuitionConfigPort;
use sekoly_core::tuition::{
    default_amounts_for, FeeSource, TuitionAmounts, DEFAULT_EXAM_FEE, DEFAULT_REGISTRATION_FEE,
};

/// Use case: suggest the écolage amounts for a class.
///
/// An active persisted configuration wins and is tagged `Configured`;
/// otherwise the static default table answers, tagged `Default`. No
/// side effects: two calls with the same arguments and no intervening
/// configuration change yield identical output.
pub struct SuggestTuitionAmount {
    configs: Arc<dyn TuitionConfigPort>,
}

impl SuggestTuitionAmount {
    pub fn from_arc(configs: Arc<dyn TuitionConfigPort>) -> Self {
        Self { configs }
    }

    pub async fn execute(&self, class_name: &str, level: &str) -> Result<TuitionAmounts> {
        let span = info_span!(
            "usecase.suggest_tuition.execute",
            class = %class_name,
            level = %level,
        );

        async move {
            let configured = self
                .configs
                .find_for_class(class_name)
                .await
                .with_context(|| {
                    format!("failed to look up tuition configuration for '{}'", class_name)
                })?;

            match configured {
                Some(record) if record.active => Ok(TuitionAmounts {
                    monthly_amount: record.monthly_amount.max(0),
                    // The persisted record is the authority for the monthly
                    // amount; absent optional fees fall back to the globals.
                    registration_fee: record.registration_fee.unwrap_or(DEFAULT_REGISTRATION_FEE),
                    exam_fee: record.exam_fee.unwrap_or(DEFAULT_EXAM_FEE),
                    source: FeeSource::Configured,
                }),
                _ => {
                    debug!("no active configuration, using the default table");
                    Ok(default_amounts_for(class_name))
                }
            }
        }
        .instrument(span)
        .await
    }
}
