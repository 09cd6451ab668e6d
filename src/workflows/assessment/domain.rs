use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label the presentation layer shows before an option is picked. Never scored.
pub const UNSELECTED_OPTION: &str = "Select one";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCode {
    Governance,
    AccessIdentity,
    DataProtection,
    DeviceSecurity,
    EmailCollaboration,
    NetworkRemoteAccess,
    IncidentReadiness,
    PeopleTraining,
    WebsiteOnline,
    VendorThirdParty,
}

impl DomainCode {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Governance,
            Self::AccessIdentity,
            Self::DataProtection,
            Self::DeviceSecurity,
            Self::EmailCollaboration,
            Self::NetworkRemoteAccess,
            Self::IncidentReadiness,
            Self::PeopleTraining,
            Self::WebsiteOnline,
            Self::VendorThirdParty,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Governance => "governance",
            Self::AccessIdentity => "access_identity",
            Self::DataProtection => "data_protection",
            Self::DeviceSecurity => "device_security",
            Self::EmailCollaboration => "email_collaboration",
            Self::NetworkRemoteAccess => "network_remote_access",
            Self::IncidentReadiness => "incident_readiness",
            Self::PeopleTraining => "people_training",
            Self::WebsiteOnline => "website_online",
            Self::VendorThirdParty => "vendor_third_party",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Governance => "Governance & Asset Visibility",
            Self::AccessIdentity => "Access & Identity",
            Self::DataProtection => "Data Protection & Backup",
            Self::DeviceSecurity => "Device Security",
            Self::EmailCollaboration => "Email & Collaboration",
            Self::NetworkRemoteAccess => "Network & Remote Access",
            Self::IncidentReadiness => "Incident Readiness & Logging",
            Self::PeopleTraining => "People & Training",
            Self::WebsiteOnline => "Website / Online",
            Self::VendorThirdParty => "Vendor / Third-Party",
        }
    }
}

/// Three-way classification attached to every answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Affirmative,
    Negative,
    Neutral,
}

impl Classification {
    /// Mapped scoring value; `None` keeps the answer out of both numerator and denominator.
    pub const fn mapped(self) -> Option<u32> {
        match self {
            Self::Affirmative => Some(1),
            Self::Negative => Some(0),
            Self::Neutral => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionTemplate {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl QuestionTemplate {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        let label = label.trim();
        self.options.iter().find(|option| option.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|option| option.label)
    }

    /// The option the checklist pre-selects when nothing has been recorded yet.
    pub fn default_label(&self) -> &'static str {
        self.option("No")
            .or_else(|| self.options.first())
            .map(|option| option.label)
            .unwrap_or(UNSELECTED_OPTION)
    }
}

/// Predicate over the intake context deciding whether a domain joins the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    Always,
    SellsOnline,
    ExternalPartners,
}

impl Inclusion {
    pub const fn is_conditional(self) -> bool {
        !matches!(self, Self::Always)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainTemplate {
    pub code: DomainCode,
    pub inclusion: Inclusion,
    pub questions: Vec<QuestionTemplate>,
}

impl DomainTemplate {
    pub fn title(&self) -> &'static str {
        self.code.title()
    }

    pub fn question(&self, id: &str) -> Option<&QuestionTemplate> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// Typed answer value; the variant is fixed by the question or intake field kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    SingleChoice(String),
    MultiChoice(Vec<String>),
    FreeText(String),
}

impl AnswerValue {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::SingleChoice(value) | Self::FreeText(value) => value.trim().is_empty(),
            Self::MultiChoice(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::SingleChoice(value) | Self::FreeText(value) => value.trim().to_string(),
            Self::MultiChoice(values) => values
                .iter()
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Loosely-typed value as it arrives from JSON input before it is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
}

/// Checklist answers keyed by stable question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = labels
            .into_iter()
            .map(|(id, label)| (id.into(), AnswerValue::SingleChoice(label.into())))
            .collect();
        Self { values }
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.values.insert(question_id.into(), value);
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.values.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    pub fn selected_label(&self, question_id: &str) -> Option<&str> {
        match self.values.get(question_id)? {
            AnswerValue::SingleChoice(label) => Some(label.as_str()),
            AnswerValue::MultiChoice(_) | AnswerValue::FreeText(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("question {0} is not part of the question bank")]
    UnknownQuestion(String),
    #[error("'{label}' is not an option for {field}")]
    UnknownOption { field: String, label: String },
    #[error("{field} expects a {expected} answer")]
    KindMismatch {
        field: String,
        expected: &'static str,
    },
    #[error("domain {0} appears more than once in the question bank")]
    DuplicateDomain(&'static str),
    #[error("question {0} appears more than once in the question bank")]
    DuplicateQuestion(&'static str),
}
