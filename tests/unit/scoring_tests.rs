use telar::catalog::Language;
use telar::profile::{AnswerValue, ProfileSnapshot};
use telar::scoring::{
    calculate_scores, detect_business_type, recommended_tasks, BusinessType, CategoryScores,
    MaturityBand, TaskPriority,
};

fn strong_profile() -> ProfileSnapshot {
    let mut p = ProfileSnapshot::new();
    p.set(
        "businessDescription",
        AnswerValue::from(
            "Taller familiar de cerámica de alta temperatura. Piezas únicas hechas a mano \
             con esmaltes propios, personalizadas para cada cliente y hogar.",
        ),
    );
    p.set("experienceTime", AnswerValue::from("more_10"));
    p.set("salesStatus", AnswerValue::from("consistent"));
    p.set("growthGoal", AnswerValue::from("scale_production"));
    p.set("customerKnowledge", AnswerValue::from("deeply"));
    p.set("targetCustomer", AnswerValue::from("both"));
    p.set(
        "promotionChannels",
        AnswerValue::from(vec![
            "instagram".to_string(),
            "fairs".to_string(),
            "whatsapp".to_string(),
            "website".to_string(),
        ]),
    );
    p.set("marketingConsistency", AnswerValue::from("always"));
    p.set("pricingMethod", AnswerValue::from("value_based"));
    p.set("profitClarity", AnswerValue::from("precise"));
    p.set("workStructure", AnswerValue::from("established_team"));
    p
}

#[test]
fn empty_profile_scores_low_everywhere() {
    let scores = calculate_scores(&ProfileSnapshot::new());
    assert!(scores.idea_validation < 20.0);
    assert!(scores.user_experience < 20.0);
    assert!(scores.market_fit < 20.0);
    assert!(scores.monetization < 20.0);
    assert_eq!(MaturityBand::for_average(scores.average()), MaturityBand::Starting);
}

#[test]
fn strong_profile_reaches_advanced() {
    let scores = calculate_scores(&strong_profile());
    assert!(scores.idea_validation >= 80.0, "{scores:?}");
    assert!(scores.user_experience >= 80.0, "{scores:?}");
    assert!(scores.market_fit >= 80.0, "{scores:?}");
    assert!(scores.monetization >= 80.0, "{scores:?}");
    assert_eq!(MaturityBand::for_average(scores.average()), MaturityBand::Advanced);
}

#[test]
fn scores_are_clamped_to_100() {
    let scores = calculate_scores(&strong_profile());
    for value in [
        scores.idea_validation,
        scores.user_experience,
        scores.market_fit,
        scores.monetization,
    ] {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn scores_grow_monotonically_with_sales_status() {
    let ladder = ["first_sales", "occasional", "regular", "consistent"];
    let mut previous = {
        let mut p = ProfileSnapshot::new();
        p.set("salesStatus", AnswerValue::from("not_yet"));
        calculate_scores(&p).monetization
    };
    for status in ladder {
        let mut p = ProfileSnapshot::new();
        p.set("salesStatus", AnswerValue::from(status));
        let scores = calculate_scores(&p);
        assert!(
            scores.monetization > previous,
            "{status} did not increase monetization"
        );
        previous = scores.monetization;
    }
}

#[test]
fn market_fit_sums_its_weights_exactly() {
    let mut p = ProfileSnapshot::new();
    p.set("targetCustomer", AnswerValue::from("individuals"));
    p.set("customerKnowledge", AnswerValue::from("good"));
    // base 10 + customer 10 + knowledge 15 + no channels 0 + no consistency 2
    assert!((calculate_scores(&p).market_fit - 37.0).abs() < f64::EPSILON);

    let full = strong_profile();
    assert!((calculate_scores(&full).market_fit - 100.0).abs() < f64::EPSILON);
}

#[test]
fn band_thresholds() {
    assert_eq!(MaturityBand::for_average(85.0), MaturityBand::Advanced);
    assert_eq!(MaturityBand::for_average(80.0), MaturityBand::Advanced);
    assert_eq!(MaturityBand::for_average(79.9), MaturityBand::Growing);
    assert_eq!(MaturityBand::for_average(60.0), MaturityBand::Growing);
    assert_eq!(MaturityBand::for_average(40.0), MaturityBand::Developing);
    assert_eq!(MaturityBand::for_average(39.9), MaturityBand::Starting);
    assert_eq!(MaturityBand::for_average(0.0), MaturityBand::Starting);
}

#[test]
fn band_levels_and_names_are_localized() {
    assert_eq!(MaturityBand::Starting.level(), 1);
    assert_eq!(MaturityBand::Advanced.level(), 4);
    assert_eq!(MaturityBand::Growing.name(Language::Es), "En Crecimiento");
    assert_eq!(MaturityBand::Growing.name(Language::En), "Growing");
}

#[test]
fn tasks_target_categories_below_the_gap_threshold() {
    let scores = CategoryScores {
        idea_validation: 90.0,
        user_experience: 30.0,
        market_fit: 69.9,
        monetization: 70.0,
    };
    let tasks = recommended_tasks(&scores, Language::En);
    let ids: Vec<&str> = tasks.iter().map(|t| t.id).collect();
    assert!(ids.contains(&"user-experience"));
    assert!(ids.contains(&"market-fit"));
    assert!(!ids.contains(&"idea-validation"));
    assert!(!ids.contains(&"monetization"));

    let ux = tasks.iter().find(|t| t.id == "user-experience").unwrap();
    assert_eq!(ux.priority, TaskPriority::High);
    assert_eq!(ux.agent_id, "user-experience-agent");
    let fit = tasks.iter().find(|t| t.id == "market-fit").unwrap();
    assert_eq!(fit.priority, TaskPriority::Medium);
}

#[test]
fn no_tasks_above_threshold() {
    let scores = CategoryScores {
        idea_validation: 75.0,
        user_experience: 75.0,
        market_fit: 75.0,
        monetization: 75.0,
    };
    assert!(recommended_tasks(&scores, Language::Es).is_empty());
}

#[test]
fn business_type_detection() {
    assert_eq!(
        detect_business_type("joyería artesanal hecha a mano", ""),
        BusinessType::Creative
    );
    assert_eq!(
        detect_business_type("doy coaching y consultoría a emprendedores", ""),
        BusinessType::Service
    );
    assert_eq!(
        detect_business_type("desarrollo una app móvil", "tech"),
        BusinessType::Tech
    );
    // Unmatched text defaults to creative for this marketplace.
    assert_eq!(detect_business_type("", ""), BusinessType::Creative);
}
