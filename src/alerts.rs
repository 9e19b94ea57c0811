//! Outbreak alert feed
//!
//! A static alert table stands in for a regional surveillance feed. The
//! subscribe endpoint validates and acknowledges; no notifications are
//! delivered.

use crate::error::ServiceError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// One published outbreak alert
#[derive(Debug, Serialize)]
pub struct Alert {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: AlertSeverity,
    pub location: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    #[serde(rename = "preventionTips")]
    pub prevention_tips: &'static [&'static str],
    #[serde(rename = "affectedAreas")]
    pub affected_areas: &'static [&'static str],
    #[serde(rename = "contactInfo")]
    pub contact_info: &'static str,
}

const ALERTS: [Alert; 3] = [
    Alert {
        id: "1",
        title: "Dengue Outbreak - Monsoon Alert",
        severity: AlertSeverity::Critical,
        location: "Delhi NCR",
        date: "2024-03-15",
        description: "Significant increase in dengue cases reported across Delhi NCR region. \
                      Immediate preventive measures recommended.",
        prevention_tips: &[
            "Remove stagnant water from containers",
            "Use mosquito nets and repellents",
            "Wear long-sleeved clothing",
            "Seek immediate medical attention for fever",
            "Keep surroundings clean and dry",
        ],
        affected_areas: &["Central Delhi", "South Delhi", "Gurgaon", "Noida", "Faridabad"],
        contact_info: "1075 (Delhi Health Helpline)",
    },
    Alert {
        id: "2",
        title: "Seasonal Influenza Surge",
        severity: AlertSeverity::High,
        location: "Mumbai Metropolitan",
        date: "2024-03-10",
        description: "Increased cases of seasonal flu reported. Vulnerable populations advised \
                      to take precautions.",
        prevention_tips: &[
            "Get annual flu vaccination",
            "Wash hands frequently",
            "Avoid crowded places if possible",
            "Cover mouth when coughing or sneezing",
            "Stay home if feeling unwell",
        ],
        affected_areas: &["Mumbai City", "Thane", "Navi Mumbai", "Kalyan-Dombivli"],
        contact_info: "104 (Maharashtra Health Helpline)",
    },
    Alert {
        id: "3",
        title: "Water Contamination Alert",
        severity: AlertSeverity::Medium,
        location: "Bhubaneswar",
        date: "2024-03-08",
        description: "Water quality issues detected in certain areas. Boil water before \
                      consumption.",
        prevention_tips: &[
            "Boil water for at least 10 minutes before drinking",
            "Use water purification tablets",
            "Avoid street food and raw vegetables",
            "Maintain proper hygiene",
            "Report any stomach-related symptoms immediately",
        ],
        affected_areas: &["Old Town", "Khandagiri", "Patia", "Chandrasekharpur"],
        contact_info: "108 (Odisha Emergency Services)",
    },
];

/// Alerts matching the location filter, or all alerts when no filter is
/// given. Matching is a case-insensitive substring test on the alert's
/// location.
pub fn alerts_for(location: Option<&str>) -> Vec<&'static Alert> {
    match location {
        Some(query) if !query.trim().is_empty() => {
            let query = query.trim().to_lowercase();
            ALERTS
                .iter()
                .filter(|a| a.location.to_lowercase().contains(&query))
                .collect()
        }
        _ => ALERTS.iter().collect(),
    }
}

/// Look up one alert by id
pub fn alert_by_id(id: &str) -> Result<&'static Alert, ServiceError> {
    ALERTS
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| ServiceError::NotFound(format!("no alert with id {id}")))
}

/// Acknowledgement for an alert subscription
#[derive(Debug, Serialize)]
pub struct SubscribeAck {
    pub message: String,
}

/// Validate and acknowledge a subscription request. No delivery happens.
pub fn subscribe(phone: &str, location: &str) -> Result<SubscribeAck, ServiceError> {
    if phone.trim().is_empty() {
        return Err(ServiceError::invalid("phone must not be empty"));
    }
    if location.trim().is_empty() {
        return Err(ServiceError::invalid("location must not be empty"));
    }

    Ok(SubscribeAck {
        message: format!("Subscribed to health alerts for {}", location.trim()),
    })
}
