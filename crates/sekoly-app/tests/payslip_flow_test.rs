//! Payslip and tuition suggestion flows against the in-memory adapters.

use std::sync::Arc;

use sekoly_app::{PreparePayslip, SuggestTuitionAmount};
use sekoly_core::payroll::{Allowances, PayrollConfig, SalaryComponents};
use sekoly_core::school::Employee;
use sekoly_core::tuition::{FeeSource, TuitionConfigRecord};
use sekoly_infra::{InMemoryCollectionStore, InMemoryTuitionConfigs};

#[tokio::test]
async fn payslip_from_stored_employee() {
    let employees = Arc::new(InMemoryCollectionStore::new("employees"));
    let ids = employees
        .seed(vec![Employee {
            full_name: "Voahangy Rasoa".to_string(),
            role: "teacher".to_string(),
            salary: SalaryComponents::new(
                600_000,
                Allowances {
                    transport: 50_000,
                    ..Allowances::default()
                },
            ),
            hired_on: None,
        }])
        .await;

    let use_case = PreparePayslip::from_arc(employees, PayrollConfig::default());
    let payslip = use_case.execute(&ids[0]).await.expect("prepare payslip");

    assert_eq!(payslip.employee_name, "Voahangy Rasoa");
    assert_eq!(payslip.breakdown.gross, 650_000);
    assert_eq!(
        payslip.breakdown.net,
        payslip.breakdown.gross - payslip.breakdown.total_deductions
    );
    assert!(!payslip.net_in_words.is_empty());
    assert!(payslip.net_in_words.ends_with("ariary"));
}

#[tokio::test]
async fn tuition_suggestion_prefers_persisted_configuration() {
    let configs = Arc::new(InMemoryTuitionConfigs::new());
    configs
        .upsert(TuitionConfigRecord {
            class_name: "CM2".to_string(),
            monthly_amount: 140_000,
            registration_fee: Some(55_000),
            exam_fee: None,
            active: true,
            notes: String::new(),
        })
        .await;

    let use_case = SuggestTuitionAmount::from_arc(configs);

    let configured = use_case.execute("CM2", "primaire").await.expect("suggest");
    assert_eq!(configured.monthly_amount, 140_000);
    assert_eq!(configured.registration_fee, 55_000);
    assert_eq!(configured.source, FeeSource::Configured);
    assert_eq!(configured.annual_amount(), 1_400_000);

    // A class nobody configured answers from the static table.
    let fallback = use_case.execute("TLE", "lycee").await.expect("suggest");
    assert_eq!(fallback.monthly_amount, 200_000);
    assert_eq!(fallback.source, FeeSource::Default);
}
