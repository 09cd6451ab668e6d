use super::domain::{AnswerValue, AssessmentError, RawValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

const MISSING: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FreeText,
    SingleChoice(&'static [&'static str]),
    MultiChoice(&'static [&'static str]),
}

impl FieldKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeText => "free text",
            Self::SingleChoice(_) => "single choice",
            Self::MultiChoice(_) => "multi choice",
        }
    }

    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::FreeText => &[],
            Self::SingleChoice(options) | Self::MultiChoice(options) => options,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    BusinessType,
    YearsInBusiness,
    TeamSize,
    BusinessMode,
    Turnover,
    OnlineSales,
    StoresData,
    DailyTools,
    WebsiteManager,
    ItSupport,
    SystemSetup,
    AssetList,
    Partners,
    NumPartners,
    BreachResponse,
    Preparedness,
    PastIncident,
    KnowsHelp,
}

impl IntakeField {
    pub const fn ordered() -> [Self; 18] {
        [
            Self::BusinessType,
            Self::YearsInBusiness,
            Self::TeamSize,
            Self::BusinessMode,
            Self::Turnover,
            Self::OnlineSales,
            Self::StoresData,
            Self::DailyTools,
            Self::WebsiteManager,
            Self::ItSupport,
            Self::SystemSetup,
            Self::AssetList,
            Self::Partners,
            Self::NumPartners,
            Self::BreachResponse,
            Self::Preparedness,
            Self::PastIncident,
            Self::KnowsHelp,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::BusinessType => "business_type",
            Self::YearsInBusiness => "years_in_business",
            Self::TeamSize => "team_size",
            Self::BusinessMode => "business_mode",
            Self::Turnover => "turnover",
            Self::OnlineSales => "online_sales",
            Self::StoresData => "stores_data",
            Self::DailyTools => "daily_tools",
            Self::WebsiteManager => "website_manager",
            Self::ItSupport => "it_support",
            Self::SystemSetup => "system_setup",
            Self::AssetList => "asset_list",
            Self::Partners => "partners",
            Self::NumPartners => "num_partners",
            Self::BreachResponse => "breach_response",
            Self::Preparedness => "preparedness",
            Self::PastIncident => "past_incident",
            Self::KnowsHelp => "knows_help",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered().into_iter().find(|field| field.key() == raw)
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::BusinessType => "What kind of business do you run?",
            Self::YearsInBusiness => "How long have you been in business?",
            Self::TeamSize => "Roughly how many people are involved in your business right now?",
            Self::BusinessMode => "Would you describe your business as mostly...",
            Self::Turnover => "Which range fits your yearly turnover best?",
            Self::OnlineSales => "Do you sell or deliver services online?",
            Self::StoresData => {
                "Do you keep any customer or employee data (emails, invoices, payment info)?"
            }
            Self::DailyTools => "Which of these tools do you rely on daily?",
            Self::WebsiteManager => "Who looks after your website and online systems?",
            Self::ItSupport => "Who handles computers, email, and systems when something breaks?",
            Self::SystemSetup => "Did you personally set up your main systems and accounts?",
            Self::AssetList => {
                "Do you have a clear list of systems, accounts, and devices you use?"
            }
            Self::Partners => "Do you work with external partners who handle your data or systems?",
            Self::NumPartners => "Roughly how many key partners do you rely on?",
            Self::BreachResponse => "If one had a data breach, would you know what to do?",
            Self::Preparedness => "If hit by a cyberattack tomorrow, how prepared would you feel?",
            Self::PastIncident => "Have you experienced a cybersecurity issue before?",
            Self::KnowsHelp => "Do you know who to call if that happened?",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::BusinessType => FieldKind::FreeText,
            Self::YearsInBusiness => FieldKind::SingleChoice(&[
                "Less than a year",
                "1–3 years",
                "3–10 years",
                "Over 10 years",
            ]),
            Self::TeamSize => {
                FieldKind::SingleChoice(&["Just me", "2–5", "6–20", "More than 20"])
            }
            Self::BusinessMode => FieldKind::SingleChoice(&[
                "Local and in-person",
                "Online or remote",
                "A mix of both",
            ]),
            Self::Turnover => FieldKind::SingleChoice(&[
                "Under EUR 100k",
                "EUR 100k–500k",
                "EUR 500k–2M",
                "Over EUR 2M",
            ]),
            Self::OnlineSales => FieldKind::SingleChoice(&[
                "Yes – own website",
                "Yes – via marketplaces",
                "No – mostly offline",
            ]),
            Self::StoresData | Self::Partners | Self::KnowsHelp => {
                FieldKind::SingleChoice(&["Yes", "No"])
            }
            Self::DailyTools => FieldKind::MultiChoice(&[
                "Email",
                "Accounting software",
                "CRM or client list",
                "Cloud storage",
                "Online payment system",
                "Website or webshop",
            ]),
            Self::WebsiteManager => FieldKind::SingleChoice(&[
                "I do",
                "Someone on my team",
                "External freelancer/company",
            ]),
            Self::ItSupport => FieldKind::SingleChoice(&[
                "I do",
                "Freelancer",
                "IT company",
                "In-house IT team",
            ]),
            Self::SystemSetup => FieldKind::SingleChoice(&[
                "Yes, mostly me",
                "Shared effort",
                "Someone else handled it",
            ]),
            Self::AssetList => {
                FieldKind::SingleChoice(&["Yes, documented", "Rough idea", "Not really"])
            }
            Self::NumPartners => FieldKind::SingleChoice(&["0–2", "3–5", "6+"]),
            Self::BreachResponse => {
                FieldKind::SingleChoice(&["Yes, I know who to contact", "Not really sure"])
            }
            Self::Preparedness => FieldKind::SingleChoice(&[
                "Not at all",
                "Somewhat",
                "Fairly confident",
                "Very confident",
            ]),
            Self::PastIncident => FieldKind::SingleChoice(&["Yes", "No", "Not sure"]),
        }
    }

    /// Heading used in the business snapshot and exported report.
    pub const fn profile_label(self) -> &'static str {
        match self {
            Self::BusinessType => "Type",
            Self::YearsInBusiness => "Years",
            Self::TeamSize => "Size",
            Self::BusinessMode => "Mode",
            Self::Turnover => "Turnover",
            Self::OnlineSales => "Online sales",
            Self::StoresData => "Data handled",
            Self::DailyTools => "Digital tools",
            Self::WebsiteManager => "Website ownership",
            Self::ItSupport => "IT support",
            Self::SystemSetup => "System setup",
            Self::AssetList => "Asset inventory",
            Self::Partners => "Partners",
            Self::NumPartners => "Partner count",
            Self::BreachResponse => "Third-party breach plan",
            Self::Preparedness => "Confidence",
            Self::PastIncident => "Past incident",
            Self::KnowsHelp => "Knows who to call",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::DailyTools)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeSection {
    BusinessAtAGlance,
    TechnologyUse,
    ItManagement,
    PartnersAndEcosystem,
    ConfidenceAndExperience,
}

impl IntakeSection {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::BusinessAtAGlance,
            Self::TechnologyUse,
            Self::ItManagement,
            Self::PartnersAndEcosystem,
            Self::ConfidenceAndExperience,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::BusinessAtAGlance => "Your Business at a Glance",
            Self::TechnologyUse => "How You Use Technology",
            Self::ItManagement => "Who Manages Your IT and Accounts",
            Self::PartnersAndEcosystem => "Partners and Ecosystem",
            Self::ConfidenceAndExperience => "Confidence & Experience",
        }
    }

    pub const fn fields(self) -> &'static [IntakeField] {
        match self {
            Self::BusinessAtAGlance => &[
                IntakeField::BusinessType,
                IntakeField::YearsInBusiness,
                IntakeField::TeamSize,
                IntakeField::BusinessMode,
                IntakeField::Turnover,
            ],
            Self::TechnologyUse => &[
                IntakeField::OnlineSales,
                IntakeField::StoresData,
                IntakeField::DailyTools,
                IntakeField::WebsiteManager,
            ],
            Self::ItManagement => &[
                IntakeField::ItSupport,
                IntakeField::SystemSetup,
                IntakeField::AssetList,
            ],
            Self::PartnersAndEcosystem => &[
                IntakeField::Partners,
                IntakeField::NumPartners,
                IntakeField::BreachResponse,
            ],
            Self::ConfidenceAndExperience => &[
                IntakeField::Preparedness,
                IntakeField::PastIncident,
                IntakeField::KnowsHelp,
            ],
        }
    }

    pub fn is_complete(self, context: &IntakeContext) -> bool {
        self.fields()
            .iter()
            .filter(|field| field.is_required())
            .all(|field| context.get(*field).is_some_and(|value| !value.is_blank()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileEntry {
    pub label: &'static str,
    pub value: String,
}

/// Business-profile answers. Only gates conditional domains and feeds the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntakeContext {
    values: BTreeMap<IntakeField, AnswerValue>,
}

impl IntakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerces loosely-typed input into each field's kind without rejecting anything
    /// except unknown keys.
    pub fn from_raw(raw: BTreeMap<String, RawValue>) -> Self {
        let mut context = Self::new();

        for (key, value) in raw {
            let Some(field) = IntakeField::from_key(&key) else {
                warn!(field = %key, "ignoring unknown intake field");
                continue;
            };

            let value = match (field.kind(), value) {
                (FieldKind::FreeText, RawValue::One(text)) => AnswerValue::FreeText(text),
                (FieldKind::FreeText, RawValue::Many(parts)) => {
                    AnswerValue::FreeText(parts.join(", "))
                }
                (FieldKind::SingleChoice(_), RawValue::One(label)) => {
                    AnswerValue::SingleChoice(label)
                }
                (FieldKind::SingleChoice(_), RawValue::Many(mut labels)) => {
                    if labels.len() > 1 {
                        warn!(field = field.key(), "keeping first of several choices");
                    }
                    labels.truncate(1);
                    AnswerValue::SingleChoice(labels.pop().unwrap_or_default())
                }
                (FieldKind::MultiChoice(_), RawValue::One(label)) => {
                    AnswerValue::MultiChoice(vec![label])
                }
                (FieldKind::MultiChoice(_), RawValue::Many(labels)) => {
                    AnswerValue::MultiChoice(labels)
                }
            };

            if !value.is_blank() {
                context.values.insert(field, value);
            }
        }

        context
    }

    /// Strict recording path used by interactive surfaces.
    pub fn record(
        &mut self,
        field: IntakeField,
        value: AnswerValue,
    ) -> Result<(), AssessmentError> {
        let kind = field.kind();
        match (&kind, &value) {
            (FieldKind::FreeText, AnswerValue::FreeText(_)) => {}
            (FieldKind::SingleChoice(options), AnswerValue::SingleChoice(label)) => {
                ensure_option(field, options, label)?;
            }
            (FieldKind::MultiChoice(options), AnswerValue::MultiChoice(labels)) => {
                for label in labels {
                    ensure_option(field, options, label)?;
                }
            }
            _ => {
                return Err(AssessmentError::KindMismatch {
                    field: field.key().to_string(),
                    expected: kind.label(),
                })
            }
        }

        if value.is_blank() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
        Ok(())
    }

    pub fn get(&self, field: IntakeField) -> Option<&AnswerValue> {
        self.values.get(&field)
    }

    /// Single-choice or free-text value; absent for every other shape.
    pub fn text(&self, field: IntakeField) -> Option<&str> {
        match self.values.get(&field)? {
            AnswerValue::SingleChoice(value) | AnswerValue::FreeText(value) => {
                Some(value.trim())
            }
            AnswerValue::MultiChoice(_) => None,
        }
    }

    pub fn is(&self, field: IntakeField, label: &str) -> bool {
        self.text(field) == Some(label)
    }

    pub fn includes(&self, field: IntakeField, label: &str) -> bool {
        match self.values.get(&field) {
            Some(AnswerValue::MultiChoice(labels)) => {
                labels.iter().any(|value| value.trim() == label)
            }
            _ => false,
        }
    }

    /// Online sales declared, or a website listed among the daily tools.
    pub fn sells_online(&self) -> bool {
        self.text(IntakeField::OnlineSales)
            .is_some_and(|value| value.starts_with("Yes"))
            || self.includes(IntakeField::DailyTools, "Website or webshop")
    }

    pub fn has_external_partners(&self) -> bool {
        self.is(IntakeField::Partners, "Yes")
    }

    pub fn profile(&self) -> Vec<ProfileEntry> {
        PROFILE_ORDER
            .iter()
            .map(|field| {
                let value = self
                    .get(*field)
                    .map(AnswerValue::display)
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| MISSING.to_string());
                ProfileEntry {
                    label: field.profile_label(),
                    value,
                }
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

const PROFILE_ORDER: [IntakeField; 18] = [
    IntakeField::BusinessType,
    IntakeField::TeamSize,
    IntakeField::BusinessMode,
    IntakeField::YearsInBusiness,
    IntakeField::Turnover,
    IntakeField::OnlineSales,
    IntakeField::StoresData,
    IntakeField::DailyTools,
    IntakeField::WebsiteManager,
    IntakeField::ItSupport,
    IntakeField::SystemSetup,
    IntakeField::AssetList,
    IntakeField::Partners,
    IntakeField::NumPartners,
    IntakeField::BreachResponse,
    IntakeField::Preparedness,
    IntakeField::PastIncident,
    IntakeField::KnowsHelp,
];

fn ensure_option(
    field: IntakeField,
    options: &[&'static str],
    label: &str,
) -> Result<(), AssessmentError> {
    if options.contains(&label.trim()) {
        Ok(())
    } else {
        Err(AssessmentError::UnknownOption {
            field: field.key().to_string(),
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, RawValue)]) -> BTreeMap<String, RawValue> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn from_raw_coerces_values_into_field_kinds() {
        let context = IntakeContext::from_raw(raw(&[
            ("business_type", RawValue::One("Bakery".to_string())),
            ("daily_tools", RawValue::One("Email".to_string())),
            ("unknown", RawValue::One("ignored".to_string())),
        ]));

        assert_eq!(context.len(), 2);
        assert_eq!(
            context.get(IntakeField::BusinessType),
            Some(&AnswerValue::FreeText("Bakery".to_string()))
        );
        assert!(context.includes(IntakeField::DailyTools, "Email"));
    }

    #[test]
    fn record_rejects_unknown_options_and_wrong_shapes() {
        let mut context = IntakeContext::new();

        let err = context
            .record(IntakeField::Partners, AnswerValue::SingleChoice("Maybe".into()))
            .expect_err("unknown option rejected");
        assert!(matches!(err, AssessmentError::UnknownOption { .. }));

        let err = context
            .record(IntakeField::DailyTools, AnswerValue::SingleChoice("Email".into()))
            .expect_err("shape mismatch rejected");
        assert!(matches!(err, AssessmentError::KindMismatch { .. }));

        assert!(context.is_empty());
    }

    #[test]
    fn website_tool_counts_as_online_presence() {
        let mut context = IntakeContext::new();
        context
            .record(
                IntakeField::OnlineSales,
                AnswerValue::SingleChoice("No – mostly offline".into()),
            )
            .expect("valid option");
        assert!(!context.sells_online());

        context
            .record(
                IntakeField::DailyTools,
                AnswerValue::MultiChoice(vec!["Website or webshop".into()]),
            )
            .expect("valid option");
        assert!(context.sells_online());
    }

    #[test]
    fn section_completion_ignores_optional_tools() {
        let mut context = IntakeContext::new();
        for (field, label) in [
            (IntakeField::OnlineSales, "Yes – via marketplaces"),
            (IntakeField::StoresData, "Yes"),
            (IntakeField::WebsiteManager, "I do"),
        ] {
            context
                .record(field, AnswerValue::SingleChoice(label.into()))
                .expect("valid option");
        }

        assert!(IntakeSection::TechnologyUse.is_complete(&context));
        assert!(!IntakeSection::BusinessAtAGlance.is_complete(&context));
    }

    #[test]
    fn profile_marks_missing_values() {
        let mut context = IntakeContext::new();
        context
            .record(
                IntakeField::DailyTools,
                AnswerValue::MultiChoice(vec!["Email".into(), "Cloud storage".into()]),
            )
            .expect("valid options");

        let profile = context.profile();
        assert_eq!(profile.len(), 18);
        assert_eq!(profile[0].label, "Type");
        assert_eq!(profile[0].value, MISSING);
        let tools = profile
            .iter()
            .find(|entry| entry.label == "Digital tools")
            .expect("tools entry present");
        assert_eq!(tools.value, "Email, Cloud storage");
    }
}
