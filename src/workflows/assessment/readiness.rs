use super::intake::{IntakeContext, IntakeField};
use super::scoring::{GOOD_THRESHOLD, MIXED_THRESHOLD};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Strong,
    Moderate,
    NeedsAttention,
}

impl ReadinessLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Strong
        } else if score >= MIXED_THRESHOLD {
            Self::Moderate
        } else {
            Self::NeedsAttention
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessArea {
    pub name: &'static str,
    pub score: u8,
}

/// Secondary score derived from the intake alone, before any checklist answer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeReadiness {
    pub areas: Vec<ReadinessArea>,
    pub overall: u8,
    pub level: ReadinessLevel,
}

pub fn readiness(context: &IntakeContext) -> IntakeReadiness {
    let governance = if context.is(IntakeField::AssetList, "Yes, documented") {
        85
    } else if context.is(IntakeField::AssetList, "Rough idea") {
        60
    } else {
        35
    };

    let holds_data = context.is(IntakeField::StoresData, "Yes");
    let uses_cloud = context.includes(IntakeField::DailyTools, "Cloud storage");
    let data_protection = match (holds_data, uses_cloud) {
        (true, true) => 80,
        (true, false) => 55,
        (false, _) => 45,
    };

    let professional_it = context.is(IntakeField::ItSupport, "IT company")
        || context.is(IntakeField::ItSupport, "In-house IT team");
    let access_control = if professional_it { 75 } else { 55 };

    let vendor_risk = if context.has_external_partners() { 70 } else { 50 };

    let knows_help = context.is(IntakeField::KnowsHelp, "Yes");
    let confident = context.is(IntakeField::Preparedness, "Fairly confident")
        || context.is(IntakeField::Preparedness, "Very confident");
    let incident_readiness = match (knows_help, confident) {
        (true, true) => 80,
        (true, false) => 60,
        (false, _) => 40,
    };

    let areas = vec![
        ReadinessArea {
            name: "Governance & Visibility",
            score: governance,
        },
        ReadinessArea {
            name: "Data Protection",
            score: data_protection,
        },
        ReadinessArea {
            name: "Access Control",
            score: access_control,
        },
        ReadinessArea {
            name: "Vendor Risk",
            score: vendor_risk,
        },
        ReadinessArea {
            name: "Incident Readiness",
            score: incident_readiness,
        },
    ];

    let total: u32 = areas.iter().map(|area| u32::from(area.score)).sum();
    let count = areas.len() as u32;
    let overall = ((2 * total + count) / (2 * count)) as u8;

    IntakeReadiness {
        areas,
        overall,
        level: ReadinessLevel::from_score(overall),
    }
}
