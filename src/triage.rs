//! Rule-based symptom triage
//!
//! Classification is a union of all matching rules, evaluated in
//! declaration order (unlike the chat router's first-match list). Both the
//! base rules and the aggregate-check extra rule live in this module so the
//! two call sites share one table instead of drifting copies.
//!
//! Probability figures are constant display metadata carried on each
//! condition; they are never derived from the input.

use crate::error::ServiceError;
use serde::Serialize;
use std::collections::HashSet;

/// Accompanies every triage result, verbatim
pub const DISCLAIMER: &str = "This is not a medical diagnosis. Please consult a healthcare \
                              professional for proper medical advice.";

/// Fixed, non-extensible symptom vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymptomTag {
    Fever,
    Cough,
    Headache,
    Fatigue,
    SoreThroat,
    BodyPain,
    Nausea,
    ShortnessBreath,
}

impl SymptomTag {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "fever" => Some(Self::Fever),
            "cough" => Some(Self::Cough),
            "headache" => Some(Self::Headache),
            "fatigue" => Some(Self::Fatigue),
            "sore_throat" => Some(Self::SoreThroat),
            "body_pain" => Some(Self::BodyPain),
            "nausea" => Some(Self::Nausea),
            "shortness_breath" => Some(Self::ShortnessBreath),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::Headache => "Headache",
            Self::Fatigue => "Fatigue",
            Self::SoreThroat => "Sore Throat",
            Self::BodyPain => "Body Pain",
            Self::Nausea => "Nausea",
            Self::ShortnessBreath => "Shortness of Breath",
        }
    }
}

/// De-duplicated set of selected symptom tags for one request
#[derive(Debug, Clone)]
pub struct SymptomSelection {
    tags: HashSet<SymptomTag>,
}

impl SymptomSelection {
    /// Parse symptom ids into a selection. Unknown ids are dropped with a
    /// log line; an empty (or entirely unknown) selection is rejected
    /// rather than silently producing the fallback condition.
    pub fn from_ids(ids: &[String]) -> Result<Self, ServiceError> {
        let mut tags = HashSet::new();
        for id in ids {
            match SymptomTag::from_id(id) {
                Some(tag) => {
                    tags.insert(tag);
                }
                None => tracing::debug!(id, "ignoring unknown symptom id"),
            }
        }

        if tags.is_empty() {
            return Err(ServiceError::invalid(
                "at least one recognized symptom is required",
            ));
        }

        Ok(Self { tags })
    }

    pub fn contains(&self, tag: SymptomTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Display labels of the selected tags, sorted for stable logging
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.tags.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels
    }

    fn any_of(&self, tags: &[SymptomTag]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One candidate diagnosis. Produced fresh per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub probability: u8,
    pub recommendations: &'static [&'static str],
}

struct Rule {
    applies: fn(&SymptomSelection) -> bool,
    condition: Condition,
}

/// Base rule table, shared by the client-style and aggregate paths.
/// Declaration order is result order.
const RULES: [Rule; 3] = [
    Rule {
        applies: |s| {
            s.contains(SymptomTag::Fever)
                && s.any_of(&[
                    SymptomTag::Cough,
                    SymptomTag::SoreThroat,
                    SymptomTag::ShortnessBreath,
                ])
        },
        condition: Condition {
            name: "Respiratory Infection",
            severity: Severity::Medium,
            description: "Common cold, flu, or other respiratory infection",
            probability: 65,
            recommendations: &[
                "Rest and stay hydrated",
                "Monitor temperature",
                "Consult doctor if symptoms worsen",
                "Isolate to prevent spread",
            ],
        },
    },
    Rule {
        applies: |s| {
            s.contains(SymptomTag::Fever)
                && s.any_of(&[
                    SymptomTag::Headache,
                    SymptomTag::Fatigue,
                    SymptomTag::BodyPain,
                ])
        },
        condition: Condition {
            name: "Viral Infection",
            severity: Severity::Low,
            description: "General viral infection with systemic symptoms",
            probability: 60,
            recommendations: &[
                "Get adequate rest",
                "Drink plenty of fluids",
                "Take paracetamol for fever",
                "Seek medical care if no improvement in 3-5 days",
            ],
        },
    },
    Rule {
        applies: |s| s.contains(SymptomTag::ShortnessBreath),
        condition: Condition {
            name: "Respiratory Distress",
            severity: Severity::High,
            description: "Difficulty breathing requires immediate attention",
            probability: 70,
            recommendations: &[
                "Seek immediate medical attention",
                "Call emergency services if severe",
                "Sit upright and try to stay calm",
                "Do not delay medical care",
            ],
        },
    },
];

/// Extra rule fired only on the aggregate check path. Wording intentionally
/// differs from the base Respiratory Infection record.
const AGGREGATE_RULE: Rule = Rule {
    applies: |s| s.contains(SymptomTag::Fever) && s.contains(SymptomTag::Cough),
    condition: Condition {
        name: "Respiratory Infection",
        severity: Severity::Medium,
        description: "Fever with cough may indicate an active respiratory infection",
        probability: 65,
        recommendations: &[
            "Seek medical attention",
            "Get tested if symptoms persist",
            "Avoid contact with others",
            "Monitor breathing difficulties",
        ],
    },
};

const FALLBACK_CONDITION: Condition = Condition {
    name: "General Health Concern",
    severity: Severity::Low,
    description: "Mild symptoms that may resolve on their own",
    probability: 40,
    recommendations: &[
        "Monitor symptoms",
        "Rest and maintain good hygiene",
        "Consult healthcare provider if symptoms persist",
        "Stay hydrated and eat nutritious food",
    ],
};

/// All matching base rules, in declaration order; the fallback condition
/// alone when nothing matched.
pub fn classify(selection: &SymptomSelection) -> Vec<Condition> {
    let mut conditions: Vec<Condition> = RULES
        .iter()
        .filter(|rule| (rule.applies)(selection))
        .map(|rule| rule.condition)
        .collect();

    if conditions.is_empty() {
        conditions.push(FALLBACK_CONDITION);
    }

    conditions
}

/// Aggregate check variant: base rules plus the fever-and-cough extra
/// record. Demographic hints never change which conditions fire; they only
/// shape narrative text such as the health-center address.
pub fn classify_aggregate(selection: &SymptomSelection) -> Vec<Condition> {
    let mut conditions = classify(selection);
    if (AGGREGATE_RULE.applies)(selection) {
        conditions.push(AGGREGATE_RULE.condition);
    }
    conditions
}

/// Suggested facility attached to aggregate triage results
#[derive(Debug, Clone, Serialize)]
pub struct HealthCenter {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance: String,
}

pub fn nearest_health_center(location: Option<&str>) -> HealthCenter {
    let area = match location {
        Some(loc) if !loc.trim().is_empty() => loc.trim(),
        _ => "Your Area",
    };

    HealthCenter {
        name: "Government Primary Health Center".to_string(),
        address: format!("Main Road, {area}"),
        phone: "+91-674-2345678".to_string(),
        distance: "2.3 km".to_string(),
    }
}
