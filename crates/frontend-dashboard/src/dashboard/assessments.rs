//! Sample assessment records

/// One completed assessment a report can be generated for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub id: u32,
    pub session_id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub type_code: String,
}

impl Assessment {
    fn sample(id: u32, session_id: &str, name: &str, date: &str, type_code: &str) -> Self {
        Self {
            id,
            session_id: session_id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            type_code: type_code.to_string(),
        }
    }
}

/// The fixed sample collection, in display order. There is no listing
/// endpoint behind it.
pub fn sample_assessments() -> Vec<Assessment> {
    vec![
        Assessment::sample(
            1,
            "as_hr_02_001",
            "Health & Fitness Assessment",
            "2023-05-15",
            "as_hr_02",
        ),
        Assessment::sample(
            2,
            "as_card_01_002",
            "Cardiac Assessment",
            "2023-06-20",
            "as_card_01",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_order_and_ids() {
        let samples = sample_assessments();
        let sessions: Vec<_> = samples.iter().map(|a| a.session_id.as_str()).collect();
        assert_eq!(sessions, ["as_hr_02_001", "as_card_01_002"]);
        assert_eq!(samples[0].id, 1);
        assert_eq!(samples[1].type_code, "as_card_01");
    }
}
