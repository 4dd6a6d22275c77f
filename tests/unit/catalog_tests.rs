use telar::catalog::{
    catalog, is_visible, onboarding_block, AssessmentMode, Language, Predicate, PredicateOp,
    Question, QuestionKind, ONBOARDING_QUESTIONS, ONBOARDING_QUESTION_IDS, QUESTIONS_PER_BLOCK,
    TOTAL_BLOCKS, TOTAL_QUESTIONS,
};
use telar::profile::{AnswerValue, ProfileSnapshot};

#[test]
fn full_catalog_shape() {
    for language in [Language::Es, Language::En] {
        let cat = catalog(language, AssessmentMode::Full);
        assert_eq!(cat.block_count(), TOTAL_BLOCKS);
        assert_eq!(cat.question_count(), TOTAL_QUESTIONS);
        for block in cat.blocks() {
            assert_eq!(block.questions.len(), QUESTIONS_PER_BLOCK);
        }
    }
}

#[test]
fn onboarding_catalog_shape() {
    let cat = catalog(Language::Es, AssessmentMode::Onboarding);
    assert_eq!(cat.block_count(), 1);
    assert_eq!(cat.question_count(), ONBOARDING_QUESTIONS);

    let block = onboarding_block(Language::Es);
    let ids: Vec<&str> = block.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ONBOARDING_QUESTION_IDS);
}

#[test]
fn question_ids_are_globally_unique() {
    let cat = catalog(Language::Es, AssessmentMode::Full);
    let mut seen = std::collections::HashSet::new();
    for question in cat.questions() {
        assert!(seen.insert(&question.id), "duplicate id {}", question.id);
    }
}

#[test]
fn languages_agree_on_structure() {
    let es = catalog(Language::Es, AssessmentMode::Full);
    let en = catalog(Language::En, AssessmentMode::Full);
    assert_eq!(es.language(), Language::Es);
    assert_eq!(en.language(), Language::En);
    for (a, b) in es.questions().zip(en.questions()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.field_name, b.field_name);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.options.len(), b.options.len());
        // Prompts are translations, not copies.
        assert_ne!(a.prompt, "");
        assert_ne!(b.prompt, "");
    }
}

#[test]
fn onboarding_description_uses_extraction() {
    let cat = catalog(Language::En, AssessmentMode::Onboarding);
    let description = cat.question("business_description").unwrap();
    assert_eq!(description.kind, QuestionKind::TextWithExtraction);
}

#[test]
fn lookup_by_id() {
    let cat = catalog(Language::Es, AssessmentMode::Full);
    assert!(cat.question("pricing_method").is_some());
    assert!(cat.question("nonexistent").is_none());
    assert!(cat.valid_ids().contains("artisan_legacy"));
}

fn gated_question(op: PredicateOp, value: Option<serde_json::Value>) -> Question {
    Question {
        id: "gated".to_string(),
        field_name: "gated".to_string(),
        kind: QuestionKind::Text,
        prompt: String::new(),
        explanation: None,
        required: true,
        options: vec![],
        visibility: Some(Predicate {
            field: "salesStatus".to_string(),
            op,
            value,
        }),
    }
}

#[test]
fn visibility_operators() {
    let mut profile = ProfileSnapshot::new();
    profile.set("salesStatus", AnswerValue::from("consistent"));

    let eq = gated_question(PredicateOp::Equals, Some(serde_json::json!("consistent")));
    assert!(is_visible(&eq, &profile));

    let neq = gated_question(PredicateOp::NotEquals, Some(serde_json::json!("consistent")));
    assert!(!is_visible(&neq, &profile));

    let exists = gated_question(PredicateOp::Exists, None);
    assert!(is_visible(&exists, &profile));

    let missing = ProfileSnapshot::new();
    assert!(!is_visible(&exists, &missing));
    assert!(is_visible(
        &gated_question(PredicateOp::NotExists, None),
        &missing
    ));
}

#[test]
fn unknown_operator_defaults_to_visible() {
    let question = gated_question(PredicateOp::Unknown, Some(serde_json::json!("x")));
    assert!(is_visible(&question, &ProfileSnapshot::new()));
}

#[test]
fn includes_checks_list_membership() {
    let mut profile = ProfileSnapshot::new();
    profile.set(
        "promotionChannels",
        AnswerValue::from(vec!["instagram".to_string(), "fairs".to_string()]),
    );
    let question = Question {
        visibility: Some(Predicate {
            field: "promotionChannels".to_string(),
            op: PredicateOp::Includes,
            value: Some(serde_json::json!("instagram")),
        }),
        ..gated_question(PredicateOp::Includes, None)
    };
    assert!(is_visible(&question, &profile));
}
