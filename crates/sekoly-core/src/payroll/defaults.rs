use super::config::*;

impl Default for IrsaSchedule {
    fn default() -> Self {
        Self {
            brackets: vec![
                // Fully exonerated up to 350,000 Ar
                TaxBracket {
                    ceiling: Some(350_000),
                    rate: 0.0,
                },
                TaxBracket {
                    ceiling: Some(400_000),
                    rate: 0.05,
                },
                TaxBracket {
                    ceiling: Some(500_000),
                    rate: 0.10,
                },
                TaxBracket {
                    ceiling: Some(600_000),
                    rate: 0.15,
                },
                TaxBracket {
                    ceiling: None,
                    rate: 0.20,
                },
            ],
            minimum_perception: 2_000,
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            cnaps: ContributionScheme {
                name: "CNAPS".to_string(),
                employee_rate: 0.01,
                employer_rate: 0.13,
            },
            ostie: ContributionScheme {
                name: "OSTIE".to_string(),
                employee_rate: 0.01,
                employer_rate: 0.05,
            },
            irsa: IrsaSchedule::default(),
        }
    }
}
