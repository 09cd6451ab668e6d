use sme_cyber_assessment::workflows::assessment::{
    readiness, AnswerSet, AssessmentInput, AssessmentOutcome, Band, DomainCode, IntakeField,
    IntakeSection, QuestionBank, ReadinessLevel, ScoringEngine, SessionState, Tone,
};

const BAKERY_INPUT: &str = r#"{
    "context": {
        "business_type": "Bakery",
        "years_in_business": "3–10 years",
        "team_size": "2–5",
        "business_mode": "Local and in-person",
        "turnover": "Under EUR 100k",
        "online_sales": "Yes – own website",
        "stores_data": "Yes",
        "daily_tools": ["Email", "Cloud storage", "Website or webshop"],
        "website_manager": "External freelancer/company",
        "partners": "No"
    },
    "answers": {
        "AI01": "Yes",
        "AI02": "Yes",
        "AI03": "Personal",
        "WB01": "No",
        "WB02": "Auto",
        "GV01": "No",
        "VR01": "Yes"
    }
}"#;

#[test]
fn conditional_domains_follow_sales_and_partner_answers() {
    let bank = QuestionBank::standard();

    let offline = AssessmentInput::from_json(
        r#"{ "context": { "online_sales": "No", "partners": "No" } }"#,
    )
    .expect("input parses")
    .context();
    let plan = bank.build_plan(&offline);
    assert!(!plan.contains(DomainCode::WebsiteOnline));
    assert!(!plan.contains(DomainCode::VendorThirdParty));

    let connected = AssessmentInput::from_json(
        r#"{ "context": { "online_sales": "Yes – own website", "partners": "Yes" } }"#,
    )
    .expect("input parses")
    .context();
    let plan = bank.build_plan(&connected);
    assert!(plan.contains(DomainCode::WebsiteOnline));
    assert!(plan.contains(DomainCode::VendorThirdParty));
    assert_eq!(plan.len(), 10);
}

#[test]
fn json_input_flows_through_session_into_a_scorecard() {
    let bank = QuestionBank::standard();
    let input = AssessmentInput::from_json(BAKERY_INPUT).expect("input parses");

    let (mut session, rejected) = input.into_session(&bank);
    assert!(rejected.is_empty(), "unexpected rejections: {rejected:?}");
    assert_eq!(session.state(), SessionState::InProgress);

    let outcome = session.score();
    assert_eq!(session.state(), SessionState::Scored);
    let scorecard = outcome.scorecard().expect("scored");

    // website domain active through the declared online sales, vendor domain not
    assert_eq!(scorecard.domains.len(), 9);
    assert!(scorecard.domain(DomainCode::VendorThirdParty).is_none());

    let access = scorecard
        .domain(DomainCode::AccessIdentity)
        .expect("access scored");
    assert_eq!((access.affirmative, access.countable), (2, 3));
    assert_eq!(access.score, 67);
    assert_eq!(access.band, Band::Mixed);
    assert_eq!(access.tone, Tone::Warn);

    let website = scorecard
        .domain(DomainCode::WebsiteOnline)
        .expect("website scored");
    assert_eq!(website.score, 50);

    // (0 + 67 + 0 * 6 + 50) / 9 = 13
    assert_eq!(scorecard.overall.score, 13);
    assert_eq!(scorecard.overall.band, Band::NeedsWork);

    // governance (0) before website (50) before access (67)
    let gaps: Vec<&str> = scorecard.needs_work.iter().map(|f| f.question_id).collect();
    assert_eq!(gaps, vec!["GV01", "WB01", "AI03"]);
}

#[test]
fn all_unanswered_signals_no_results_upstream() {
    let bank = QuestionBank::standard();
    let input = AssessmentInput::from_json(r#"{ "context": { "partners": "Yes" } }"#)
        .expect("input parses");

    let (mut session, _) = input.into_session(&bank);
    let outcome = session.score();

    assert_eq!(outcome.overall_score(), 0);
    assert!(matches!(
        outcome,
        AssessmentOutcome::NoResults { ref active_domains } if active_domains.len() == 9
    ));
    assert_eq!(session.state(), SessionState::InProgress);
}

#[test]
fn every_access_question_affirmative_scores_one_hundred_and_good() {
    let bank = QuestionBank::standard();
    let access = bank
        .domain(DomainCode::AccessIdentity)
        .expect("access domain in bank");
    let answers = access
        .questions
        .iter()
        .map(|question| {
            let label = question
                .options
                .iter()
                .find(|option| option.classification.mapped() == Some(1))
                .map(|option| option.label)
                .expect("affirmative option");
            (question.id, label)
        })
        .collect::<Vec<_>>();
    let answers = AnswerSet::from_labels(answers);

    let context = AssessmentInput::default().context();
    let outcome = ScoringEngine::new(&bank).assess(&context, &answers);
    let summary = outcome.scorecard().expect("scored").summary();
    let entry = summary.by_code()[&DomainCode::AccessIdentity];

    assert_eq!(entry.score, 100);
    assert_eq!(entry.band_label, "Good");
    assert_eq!(entry.tone.color(), "green");
}

#[test]
fn intake_completeness_and_readiness_follow_the_profile() {
    let context = AssessmentInput::from_json(BAKERY_INPUT)
        .expect("input parses")
        .context();

    assert!(IntakeSection::BusinessAtAGlance.is_complete(&context));
    assert!(IntakeSection::TechnologyUse.is_complete(&context));
    assert!(!IntakeSection::PartnersAndEcosystem.is_complete(&context));
    assert_eq!(context.text(IntakeField::TeamSize), Some("2–5"));

    let readiness = readiness(&context);
    let scores: Vec<u8> = readiness.areas.iter().map(|area| area.score).collect();
    assert_eq!(scores, vec![35, 80, 55, 50, 40]);
    assert_eq!(readiness.overall, 52);
    assert_eq!(readiness.level, ReadinessLevel::Moderate);
}
