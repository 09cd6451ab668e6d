use super::domain::{
    AnswerOption, AssessmentError, Classification, DomainCode, DomainTemplate, Inclusion,
    QuestionTemplate,
};
use super::intake::IntakeContext;
use super::plan::AssessmentPlan;
use std::collections::HashSet;
use tracing::debug;

/// Immutable checklist catalog. Built once and passed to the scoring engine.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    domains: Vec<DomainTemplate>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            domains: standard_domains(),
        }
    }

    /// Builds a bank from custom domains, rejecting duplicate domain codes or question ids.
    pub fn from_domains(domains: Vec<DomainTemplate>) -> Result<Self, AssessmentError> {
        let mut codes = HashSet::new();
        let mut ids = HashSet::new();

        for domain in &domains {
            if !codes.insert(domain.code) {
                return Err(AssessmentError::DuplicateDomain(domain.code.code()));
            }
            for question in &domain.questions {
                if !ids.insert(question.id) {
                    return Err(AssessmentError::DuplicateQuestion(question.id));
                }
            }
        }

        Ok(Self { domains })
    }

    pub fn domains(&self) -> &[DomainTemplate] {
        &self.domains
    }

    pub fn domain(&self, code: DomainCode) -> Option<&DomainTemplate> {
        self.domains.iter().find(|domain| domain.code == code)
    }

    pub fn question(&self, id: &str) -> Option<(&DomainTemplate, &QuestionTemplate)> {
        let id = id.trim();
        self.domains
            .iter()
            .find_map(|domain| domain.question(id).map(|question| (domain, question)))
    }

    /// Always-on domains in catalog order, then every conditional domain whose
    /// predicate holds, also in catalog order.
    pub fn build_plan(&self, context: &IntakeContext) -> AssessmentPlan<'_> {
        let always = self
            .domains
            .iter()
            .filter(|domain| !domain.inclusion.is_conditional());
        let conditional = self.domains.iter().filter(|domain| {
            domain.inclusion.is_conditional() && inclusion_applies(domain.inclusion, context)
        });

        let plan = AssessmentPlan::new(always.chain(conditional).collect());
        debug!(domains = ?plan.codes(), "assessment plan built");
        plan
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn inclusion_applies(inclusion: Inclusion, context: &IntakeContext) -> bool {
    match inclusion {
        Inclusion::Always => true,
        Inclusion::SellsOnline => context.sells_online(),
        Inclusion::ExternalPartners => context.has_external_partners(),
    }
}

const fn affirmative(label: &'static str) -> AnswerOption {
    AnswerOption {
        label,
        classification: Classification::Affirmative,
    }
}

const fn negative(label: &'static str) -> AnswerOption {
    AnswerOption {
        label,
        classification: Classification::Negative,
    }
}

const fn neutral(label: &'static str) -> AnswerOption {
    AnswerOption {
        label,
        classification: Classification::Neutral,
    }
}

fn question(
    id: &'static str,
    prompt: &'static str,
    options: Vec<AnswerOption>,
) -> QuestionTemplate {
    QuestionTemplate {
        id,
        prompt,
        options,
    }
}

/// "Yes" / "No" plus an optional non-scoring third answer.
fn yes_no(
    id: &'static str,
    prompt: &'static str,
    neutral_label: Option<&'static str>,
) -> QuestionTemplate {
    let mut options = vec![affirmative("Yes"), negative("No")];
    options.extend(neutral_label.map(neutral));
    question(id, prompt, options)
}

pub(crate) fn standard_domains() -> Vec<DomainTemplate> {
    vec![
        DomainTemplate {
            code: DomainCode::Governance,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "GV01",
                    "Do you maintain a written inventory of key systems, devices and SaaS apps?",
                    None,
                ),
                yes_no("GV02", "Is there a list of admin/owner accounts for each system?", None),
                yes_no("GV03", "Do you review who has access at least quarterly?", None),
                question(
                    "GV04",
                    "Is there a named person responsible for IT/security decisions?",
                    vec![
                        affirmative("Me"),
                        affirmative("Named staff"),
                        affirmative("External MSP"),
                        negative("No owner"),
                    ],
                ),
                yes_no(
                    "GV05",
                    "Do you have basic IT rules/policies (passwords, device use, data handling)?",
                    Some("In draft"),
                ),
                yes_no("GV06", "Do you use a joiner/mover/leaver checklist for accounts?", None),
            ],
        },
        DomainTemplate {
            code: DomainCode::AccessIdentity,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no("AI01", "Is MFA enforced for company email accounts?", Some("Partially")),
                yes_no(
                    "AI02",
                    "Is MFA enforced for admin/owner accounts on critical systems?",
                    Some("Partially"),
                ),
                question(
                    "AI03",
                    "Do staff use a business-issued password manager?",
                    vec![
                        affirmative("Yes"),
                        negative("No"),
                        negative("Personal"),
                        neutral("Not sure"),
                    ],
                ),
                yes_no(
                    "AI04",
                    "Are shared accounts avoided or tightly controlled and documented?",
                    Some("N/A"),
                ),
                yes_no(
                    "AI05",
                    "Do you require unique accounts per person for all systems?",
                    Some("Partially"),
                ),
                yes_no(
                    "AI06",
                    "Are default/admin passwords changed on all devices/services?",
                    Some("N/A"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::DataProtection,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "DP01",
                    "Do you store customer/employee data (names, emails, invoices, payment refs)?",
                    None,
                ),
                question(
                    "DP02",
                    "Where are files stored?",
                    vec![
                        affirmative("Managed cloud (Google/OneDrive)"),
                        affirmative("Own server"),
                        negative("Local only"),
                    ],
                ),
                yes_no("DP03", "Are automated backups enabled at least daily?", Some("Not needed")),
                yes_no("DP04", "Do you test a restore at least monthly?", None),
                yes_no("DP05", "Are backups versioned / immutable / offsite?", Some("Not sure")),
                yes_no(
                    "DP06",
                    "Do you have a simple data retention approach (keep/delete)?",
                    Some("In draft"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::DeviceSecurity,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no("DV01", "Is full-disk encryption enabled on laptops?", Some("Some")),
                yes_no(
                    "DV02",
                    "Do all devices auto-lock (≤10 min) and require PIN/password/biometric?",
                    Some("Some"),
                ),
                yes_no("DV03", "Are automatic OS and browser updates enabled?", Some("Some")),
                yes_no(
                    "DV04",
                    "Is built-in anti-malware/AV active (e.g., Defender) or EDR deployed?",
                    Some("Some devices"),
                ),
                yes_no(
                    "DV05",
                    "Can you wipe a lost/stolen device (MDM/Find My/Intune)?",
                    Some("Not sure"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::EmailCollaboration,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "EM01",
                    "Is a spam/phishing filter active on your email platform?",
                    Some("Not sure"),
                ),
                yes_no(
                    "EM02",
                    "Do staff know how to report phishing (button or address)?",
                    Some("Some"),
                ),
                yes_no(
                    "EM03",
                    "Is external mail forwarding restricted/monitored?",
                    Some("Not sure"),
                ),
                yes_no(
                    "EM04",
                    "Are risky file types warned/blocked (e.g., .exe, macros)?",
                    Some("Not sure"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::NetworkRemoteAccess,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "NW01",
                    "Do staff connect remotely using secured methods (VPN/zero trust)?",
                    Some("N/A"),
                ),
                question(
                    "NW02",
                    "Is your router/firewall set to auto-update firmware?",
                    vec![
                        affirmative("Yes"),
                        negative("No"),
                        neutral("Not sure"),
                        neutral("N/A"),
                    ],
                ),
                yes_no(
                    "NW03",
                    "Is remote admin (RDP/SSH/panels) closed to the internet or gated by MFA/VPN?",
                    Some("Not sure"),
                ),
                yes_no("NW04", "Is guest Wi-Fi segmented from business devices?", Some("N/A")),
            ],
        },
        DomainTemplate {
            code: DomainCode::IncidentReadiness,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "IR01",
                    "Do you have a 1-page incident plan (who to call, first steps, backups)?",
                    Some("In draft"),
                ),
                yes_no(
                    "IR02",
                    "Are key contacts (IT/MSP/bank/legal) written and accessible offline?",
                    Some("Partial"),
                ),
                yes_no(
                    "IR03",
                    "Do you know how to isolate a device during an incident?",
                    Some("Not sure"),
                ),
                yes_no(
                    "IR04",
                    "Can you reset all user passwords quickly if needed?",
                    Some("Not sure"),
                ),
                yes_no(
                    "IR05",
                    "Do you keep basic logs (sign-ins/admin changes/website errors) ≥30 days?",
                    Some("Not sure"),
                ),
                yes_no(
                    "IR06",
                    "Have you done a table-top exercise (talk-through of a fake incident)?",
                    Some("Planned"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::PeopleTraining,
            inclusion: Inclusion::Always,
            questions: vec![
                yes_no(
                    "PT01",
                    "Have staff had security awareness in the last 12 months?",
                    Some("Only onboarding"),
                ),
                yes_no("PT02", "Do contractors/temps get the same security guidance?", Some("N/A")),
                yes_no(
                    "PT03",
                    "Do you have a short Acceptable Use / IT rules document?",
                    Some("In draft"),
                ),
                yes_no(
                    "PT04",
                    "Are admin/staff roles clear (who can change settings / approve access)?",
                    Some("Partial"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::WebsiteOnline,
            inclusion: Inclusion::SellsOnline,
            questions: vec![
                yes_no("WB01", "Is the site/shop always served over HTTPS?", Some("Not sure")),
                question(
                    "WB02",
                    "Are security/plugin updates applied automatically or on a schedule?",
                    vec![
                        affirmative("Auto"),
                        affirmative("Scheduled"),
                        negative("Manual"),
                        neutral("Not sure"),
                    ],
                ),
                yes_no("WB03", "Do you have uptime/security alerts configured?", Some("Not sure")),
                yes_no(
                    "WB04",
                    "Are admin logins protected with MFA (CMS/payment gateway)?",
                    Some("N/A"),
                ),
                yes_no(
                    "WB05",
                    "You never store card data yourself (use PSPs like Stripe/PayPal only).",
                    Some("N/A"),
                ),
            ],
        },
        DomainTemplate {
            code: DomainCode::VendorThirdParty,
            inclusion: Inclusion::ExternalPartners,
            questions: vec![
                yes_no(
                    "VR01",
                    "Do you keep a list of key vendors with what data they handle?",
                    Some("Partial"),
                ),
                yes_no(
                    "VR02",
                    "Do vendors with access to your data use MFA on their side?",
                    Some("Unknown"),
                ),
                yes_no(
                    "VR03",
                    "Do you know the breach/security contact for each key vendor?",
                    Some("Some"),
                ),
                yes_no(
                    "VR04",
                    "Do you off-board vendors (remove access, revoke tokens/keys)?",
                    Some("Not sure"),
                ),
                yes_no(
                    "VR05",
                    "Are transfers to/from vendors encrypted (SFTP/HTTPS/TLS email)?",
                    Some("Unknown"),
                ),
            ],
        },
    ]
}
