//! Static vaccination schedule tables
//!
//! Hand-authored tables, banded by age: under 2 infant, 2-17 child, 18 and
//! up adult. Reminder requests are acknowledged only; nothing is delivered
//! or stored.

use crate::error::ServiceError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Completed,
    Due,
    Overdue,
}

/// One row in a schedule table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VaccineEntry {
    pub vaccine: &'static str,
    #[serde(rename = "dueDate")]
    pub due_date: &'static str,
    pub status: DoseStatus,
    #[serde(rename = "nextDose")]
    pub next_dose: Option<&'static str>,
}

const INFANT_SCHEDULE: [VaccineEntry; 4] = [
    VaccineEntry {
        vaccine: "BCG",
        due_date: "At birth",
        status: DoseStatus::Completed,
        next_dose: None,
    },
    VaccineEntry {
        vaccine: "Hepatitis B",
        due_date: "At birth",
        status: DoseStatus::Completed,
        next_dose: Some("6 weeks"),
    },
    VaccineEntry {
        vaccine: "DPT",
        due_date: "6 weeks",
        status: DoseStatus::Due,
        next_dose: Some("10 weeks"),
    },
    VaccineEntry {
        vaccine: "Polio",
        due_date: "6 weeks",
        status: DoseStatus::Due,
        next_dose: Some("10 weeks"),
    },
];

const CHILD_SCHEDULE: [VaccineEntry; 3] = [
    VaccineEntry {
        vaccine: "MMR",
        due_date: "12 months",
        status: DoseStatus::Completed,
        next_dose: Some("15 months"),
    },
    VaccineEntry {
        vaccine: "DPT Booster",
        due_date: "18 months",
        status: DoseStatus::Overdue,
        next_dose: None,
    },
    VaccineEntry {
        vaccine: "Polio Booster",
        due_date: "18 months",
        status: DoseStatus::Due,
        next_dose: None,
    },
];

const ADULT_SCHEDULE: [VaccineEntry; 3] = [
    VaccineEntry {
        vaccine: "COVID-19",
        due_date: "Annual",
        status: DoseStatus::Due,
        next_dose: Some("6 months"),
    },
    VaccineEntry {
        vaccine: "Influenza",
        due_date: "Annual",
        status: DoseStatus::Completed,
        next_dose: Some("Next year"),
    },
    VaccineEntry {
        vaccine: "Tetanus",
        due_date: "Every 10 years",
        status: DoseStatus::Completed,
        next_dose: Some("2032"),
    },
];

/// Age-banded table lookup
pub fn schedule_for(age: u32) -> &'static [VaccineEntry] {
    match age {
        0..=1 => &INFANT_SCHEDULE,
        2..=17 => &CHILD_SCHEDULE,
        _ => &ADULT_SCHEDULE,
    }
}

/// Acknowledgement for a reminder request
#[derive(Debug, Serialize)]
pub struct ReminderAck {
    pub vaccine_id: String,
    pub message: String,
}

/// Validate and acknowledge a reminder request. No delivery happens; the
/// subscription is local UI state on the client.
pub fn set_reminder(
    vaccine_id: &str,
    reminder_date: &str,
    phone: &str,
) -> Result<ReminderAck, ServiceError> {
    if vaccine_id.trim().is_empty() {
        return Err(ServiceError::invalid("vaccineId must not be empty"));
    }
    if phone.trim().is_empty() {
        return Err(ServiceError::invalid("phone must not be empty"));
    }

    Ok(ReminderAck {
        vaccine_id: vaccine_id.to_string(),
        message: format!("Reminder set for {reminder_date}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bands() {
        assert_eq!(schedule_for(0)[0].vaccine, "BCG");
        assert_eq!(schedule_for(1)[0].vaccine, "BCG");
        assert_eq!(schedule_for(10)[0].vaccine, "MMR");
        assert_eq!(schedule_for(40)[0].vaccine, "COVID-19");
    }

    #[test]
    fn test_band_boundaries() {
        // 2 is child, 18 is adult
        assert_eq!(schedule_for(2)[0].vaccine, "MMR");
        assert_eq!(schedule_for(17)[0].vaccine, "MMR");
        assert_eq!(schedule_for(18)[0].vaccine, "COVID-19");
    }

    #[test]
    fn test_reminder_validation() {
        let ack = set_reminder("dpt", "2026-09-01", "+91-9876543210").unwrap();
        assert_eq!(ack.vaccine_id, "dpt");
        assert!(ack.message.contains("2026-09-01"));

        assert!(set_reminder("", "2026-09-01", "+91-9876543210").is_err());
        assert!(set_reminder("dpt", "2026-09-01", "  ").is_err());
    }
}
