//! Certificate data: the identity and course facts a certificate renders.
//! Immutable input to the engine — validation of business rules (who may
//! issue what) belongs to the caller; the engine only consumes it.

use serde::{Deserialize, Serialize};

/// One certificate's worth of facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateData {
    pub student_name: String,
    /// Contact address; carried for the caller's benefit, never rendered.
    #[serde(default)]
    pub student_email: Option<String>,
    pub course_name: String,
    pub certificate_type: CertificateType,
    /// ISO-8601 date or date-time string.
    pub issue_date: String,
    #[serde(default)]
    pub certificate_number: Option<String>,
    #[serde(default)]
    pub instructor_name: Option<String>,
    /// Course duration in hours.
    #[serde(default)]
    pub hours: Option<u32>,
    /// Score achieved, 0–100.
    #[serde(default)]
    pub grade: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    Participation,
    Completion,
}

impl CertificateType {
    /// Verb phrase used in the body copy.
    pub fn body_phrase(&self) -> &'static str {
        match self {
            CertificateType::Participation => "for participating in",
            CertificateType::Completion => "for successfully completing",
        }
    }
}

/// Render an ISO-8601 date (optionally with a time part) as a long-form
/// English date. Unparseable input is passed through untouched — a wrong
/// format on the page beats a failed render.
pub fn format_issue_date(iso: &str) -> String {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    let date_part = iso.split(['T', ' ']).next().unwrap_or(iso);
    let mut parts = date_part.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };
    let (Ok(m), Ok(d)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_string();
    };
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return iso.to_string();
    }
    format!("{} {}, {}", MONTHS[m - 1], d, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spec_field_names() {
        let json = r#"{
            "student_name": "Jane Doe",
            "course_name": "Systems Design",
            "certificate_type": "completion",
            "issue_date": "2024-01-15",
            "certificate_number": "CER-20240115-ABCDEFGHIJ"
        }"#;
        let data: CertificateData = serde_json::from_str(json).unwrap();
        assert_eq!(data.student_name, "Jane Doe");
        assert_eq!(data.certificate_type, CertificateType::Completion);
        assert!(data.hours.is_none());
        assert!(data.grade.is_none());
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_issue_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_issue_date("2023-12-01T09:30:00Z"), "December 1, 2023");
    }

    #[test]
    fn malformed_date_passes_through() {
        assert_eq!(format_issue_date("soon"), "soon");
        assert_eq!(format_issue_date("2024-13-40"), "2024-13-40");
    }
}
