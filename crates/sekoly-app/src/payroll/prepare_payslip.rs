use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, info_span, Instrument};

use sekoly_core::ids::DocumentId;
use sekoly_core::payroll::{amount_in_words, compute_salary, PayrollConfig, SalaryBreakdown};
use sekoly_core::ports::{CollectionStorePort, StoreError};
use sekoly_core::school::Employee;

/// A rendered payslip: the full salary breakdown plus the verbalized
/// net amount that goes on the printed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub employee_id: DocumentId,
    pub employee_name: String,
    pub role: String,
    pub issued_on: NaiveDate,
    pub breakdown: SalaryBreakdown,
    pub net_in_words: String,
}

#[derive(Debug, Error)]
pub enum PreparePayslipError {
    #[error("employee '{0}' not found")]
    EmployeeNotFound(DocumentId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case: compute a payslip for one employee from the current
/// payroll rule set.
pub struct PreparePayslip {
    employees: Arc<dyn CollectionStorePort<Employee>>,
    config: PayrollConfig,
}

impl PreparePayslip {
    pub fn from_arc(employees: Arc<dyn CollectionStorePort<Employee>>, config: PayrollConfig) -> Self {
        Self { employees, config }
    }

    pub async fn execute(&self, employee_id: &DocumentId) -> Result<Payslip, PreparePayslipError> {
        let span = info_span!("usecase.prepare_payslip.execute", employee_id = %employee_id);

        async move {
            let snapshot = self.employees.fetch_all().await?;
            let document = snapshot
                .documents
                .into_iter()
                .find(|doc| &doc.id == employee_id)
                .ok_or_else(|| PreparePayslipError::EmployeeNotFound(employee_id.clone()))?;

            let breakdown = compute_salary(&self.config, &document.data.salary);
            info!(gross = breakdown.gross, net = breakdown.net, "payslip computed");

            Ok(Payslip {
                employee_id: document.id,
                employee_name: document.data.full_name,
                role: document.data.role,
                issued_on: Utc::now().date_naive(),
                net_in_words: amount_in_words(breakdown.net),
                breakdown,
            })
        }
        .instrument(span)
        .await
    }
}
