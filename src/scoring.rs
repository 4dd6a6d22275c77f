//! Maturity scoring over the profile snapshot.
//!
//! Four category scores on a 0-100 scale, each starting from a low base and
//! accumulating weighted contributions from key profile fields. Sales status
//! carries the most weight: a business that sells consistently scores high
//! on monetization even with weak answers elsewhere.

use serde::{Deserialize, Serialize};

use crate::catalog::Language;
use crate::profile::ProfileSnapshot;

/// The four maturity categories, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub idea_validation: f64,
    pub user_experience: f64,
    pub market_fit: f64,
    pub monetization: f64,
}

impl CategoryScores {
    /// Zero across the board. Used as the ephemeral placeholder when
    /// fast-onboarding completes without enough signal to score.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            idea_validation: 0.0,
            user_experience: 0.0,
            market_fit: 0.0,
            monetization: 0.0,
        }
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        (self.idea_validation + self.user_experience + self.market_fit + self.monetization) / 4.0
    }
}

/// Overall maturity band derived from the average category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityBand {
    Starting,
    Developing,
    Growing,
    Advanced,
}

impl MaturityBand {
    /// Band for an average score. Thresholds: 80, 60, 40.
    #[must_use]
    pub fn for_average(average: f64) -> Self {
        if average >= 80.0 {
            Self::Advanced
        } else if average >= 60.0 {
            Self::Growing
        } else if average >= 40.0 {
            Self::Developing
        } else {
            Self::Starting
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Starting => 1,
            Self::Developing => 2,
            Self::Growing => 3,
            Self::Advanced => 4,
        }
    }

    #[must_use]
    pub const fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Starting, Language::Es) => "Iniciando",
            (Self::Starting, Language::En) => "Starting",
            (Self::Developing, Language::Es) => "En Desarrollo",
            (Self::Developing, Language::En) => "Developing",
            (Self::Growing, Language::Es) => "En Crecimiento",
            (Self::Growing, Language::En) => "Growing",
            (Self::Advanced, Language::Es) => "Avanzado",
            (Self::Advanced, Language::En) => "Advanced",
        }
    }

    #[must_use]
    pub const fn description(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Starting, Language::Es) => {
                "Estás en la etapa inicial de tu emprendimiento"
            }
            (Self::Starting, Language::En) => "You are in the initial stage of your venture",
            (Self::Developing, Language::Es) => "Tu negocio está encontrando su camino",
            (Self::Developing, Language::En) => "Your business is finding its way",
            (Self::Growing, Language::Es) => {
                "Tu negocio está creciendo y validando el mercado"
            }
            (Self::Growing, Language::En) => "Your business is growing and validating the market",
            (Self::Advanced, Language::Es) => {
                "Tu negocio está en una etapa madura con procesos establecidos"
            }
            (Self::Advanced, Language::En) => {
                "Your business is at a mature stage with established processes"
            }
        }
    }
}

/// Task priority in the recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
}

/// A recommended follow-up task for a category scoring under the gap
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTask {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub agent_id: &'static str,
    pub priority: TaskPriority,
    pub estimated_time: String,
    pub category: &'static str,
}

/// Detected business type from free-text description and industry hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Creative,
    Service,
    Tech,
    Product,
}

impl BusinessType {
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Creative, Language::Es) => "Creativo",
            (Self::Creative, Language::En) => "Creative",
            (Self::Service, Language::Es) => "Servicio",
            (Self::Service, Language::En) => "Service",
            (Self::Tech, Language::Es) => "Tecnología",
            (Self::Tech, Language::En) => "Technology",
            (Self::Product, Language::Es) => "Producto",
            (Self::Product, Language::En) => "Product",
        }
    }

}

/// Keyword classifier over the business description and industry. Defaults
/// to creative, the most common profile on the platform.
#[must_use]
pub fn detect_business_type(description: &str, industry: &str) -> BusinessType {
    let desc = description.to_lowercase();
    let ind = industry.to_lowercase();

    const CREATIVE: &[&str] = &["arte", "diseño", "art", "design", "craft", "music", "photo"];
    const SERVICE: &[&str] = &["consultor", "coaching"];
    const TECH: &[&str] = &["software", "app"];
    const PRODUCT: &[&str] = &["product", "vend", "sell"];

    if ind.contains("creative") || CREATIVE.iter().any(|kw| desc.contains(kw)) {
        BusinessType::Creative
    } else if ind.contains("service") || SERVICE.iter().any(|kw| desc.contains(kw)) {
        BusinessType::Service
    } else if ind.contains("tech") || TECH.iter().any(|kw| desc.contains(kw)) {
        BusinessType::Tech
    } else if PRODUCT.iter().any(|kw| desc.contains(kw)) {
        BusinessType::Product
    } else {
        BusinessType::Creative
    }
}

/// All four category scores from the current profile. Pure; missing fields
/// fall to the lowest contribution of their table.
#[must_use]
pub fn calculate_scores(profile: &ProfileSnapshot) -> CategoryScores {
    CategoryScores {
        idea_validation: idea_validation(profile),
        user_experience: user_experience(profile),
        market_fit: market_fit(profile),
        monetization: monetization(profile),
    }
}

fn idea_validation(profile: &ProfileSnapshot) -> f64 {
    let mut score = 10.0;

    let description = profile.text("businessDescription").unwrap_or("");
    if description.len() > 100 {
        score += 20.0;
    } else if description.len() > 50 {
        score += 10.0;
    }

    const UNIQUE_HINTS: &[&str] = &[
        "única", "diferente", "especial", "unique", "different", "special",
    ];
    let lower = description.to_lowercase();
    if UNIQUE_HINTS.iter().any(|hint| lower.contains(hint)) {
        score += 10.0;
    }

    score += match profile.text("experienceTime") {
        Some("more_10") => 20.0,
        Some("5_10") => 18.0,
        Some("3_5") => 15.0,
        Some("1_3") => 8.0,
        _ => 3.0,
    };

    score += sales_points(profile, 30.0, 25.0, 15.0, 8.0);

    score += match profile.text("growthGoal") {
        Some("scale_production") => 10.0,
        Some("premium_brand") => 8.0,
        Some("stable_income") => 5.0,
        _ => 0.0,
    };

    score.min(100.0)
}

fn user_experience(profile: &ProfileSnapshot) -> f64 {
    let mut score = 10.0;

    score += match profile.text("experienceTime") {
        Some("more_10") => 15.0,
        Some("5_10") => 14.0,
        Some("3_5") => 12.0,
        Some("1_3") => 7.0,
        _ => 2.0,
    };

    score += sales_points(profile, 35.0, 28.0, 18.0, 8.0);

    score += match profile.text("customerKnowledge") {
        Some("deeply") => 25.0,
        Some("very_good") => 20.0,
        Some("good") => 12.0,
        Some("basic") => 6.0,
        _ => 2.0,
    };

    score += match profile.list_len("promotionChannels") {
        n if n >= 3 => 15.0,
        2 => 10.0,
        1 => 5.0,
        _ => 0.0,
    };

    score.min(100.0)
}

fn market_fit(profile: &ProfileSnapshot) -> f64 {
    let mut score: f64 = 10.0;

    score += match profile.text("targetCustomer") {
        Some("both") => 15.0,
        Some("individuals" | "businesses") => 10.0,
        _ => 3.0,
    };

    score += match profile.text("customerKnowledge") {
        Some("deeply") => 30.0,
        Some("very_good") => 24.0,
        Some("good") => 15.0,
        Some("basic") => 8.0,
        _ => 3.0,
    };

    score += match profile.list_len("promotionChannels") {
        n if n >= 4 => 25.0,
        3 => 20.0,
        2 => 12.0,
        1 => 6.0,
        _ => 0.0,
    };

    score += match profile.text("marketingConsistency") {
        Some("always") => 20.0,
        Some("very") => 15.0,
        Some("mostly") => 10.0,
        Some("somewhat") => 5.0,
        _ => 2.0,
    };

    score.min(100.0)
}

fn monetization(profile: &ProfileSnapshot) -> f64 {
    let mut score = 10.0;

    // Heaviest single weight in the whole model.
    score += sales_points(profile, 40.0, 32.0, 20.0, 10.0);

    score += match profile.text("pricingMethod") {
        Some("value_based") => 20.0,
        Some("costs_detailed") => 15.0,
        Some("market") => 12.0,
        Some("costs_basic") => 8.0,
        _ => 3.0,
    };

    score += match profile.text("profitClarity") {
        Some("precise") => 20.0,
        Some("very_clear") => 16.0,
        Some("somewhat_clear") => 10.0,
        Some("rough_estimate") => 5.0,
        _ => 2.0,
    };

    score += match profile.text("workStructure") {
        Some("established_team") => 10.0,
        Some("small_team") => 7.0,
        Some("with_help") => 4.0,
        _ => 2.0,
    };

    score.min(100.0)
}

fn sales_points(
    profile: &ProfileSnapshot,
    consistent: f64,
    regular: f64,
    occasional: f64,
    first: f64,
) -> f64 {
    match profile.text("salesStatus") {
        Some("consistent") => consistent,
        Some("regular") => regular,
        Some("occasional") => occasional,
        Some("first_sales") => first,
        _ => 0.0,
    }
}

/// Recommended tasks for categories scoring under 70. Ordering follows the
/// category order of [`CategoryScores`].
#[must_use]
pub fn recommended_tasks(
    scores: &CategoryScores,
    language: Language,
) -> Vec<RecommendedTask> {
    const GAP_THRESHOLD: f64 = 70.0;
    let spanish = language == Language::Es;
    let mut tasks = Vec::new();

    if scores.idea_validation < GAP_THRESHOLD {
        tasks.push(RecommendedTask {
            id: "idea-validation",
            title: if spanish {
                "Validar tu idea de negocio"
            } else {
                "Validate your business idea"
            }
            .to_string(),
            description: if spanish {
                "Clarifica tu propuesta de valor e identifica tu público objetivo"
            } else {
                "Clarify your value proposition and identify your target audience"
            }
            .to_string(),
            agent_id: "brand-agent",
            priority: TaskPriority::High,
            estimated_time: if spanish { "2-3 semanas" } else { "2-3 weeks" }.to_string(),
            category: "ideaValidation",
        });
    }

    if scores.user_experience < GAP_THRESHOLD {
        tasks.push(RecommendedTask {
            id: "user-experience",
            title: if spanish {
                "Mejorar experiencia del cliente"
            } else {
                "Improve customer experience"
            }
            .to_string(),
            description: if spanish {
                "Optimiza cómo interactúan los clientes con tu negocio"
            } else {
                "Optimize how customers interact with your business"
            }
            .to_string(),
            agent_id: "user-experience-agent",
            priority: TaskPriority::High,
            estimated_time: if spanish { "1-2 semanas" } else { "1-2 weeks" }.to_string(),
            category: "userExperience",
        });
    }

    if scores.market_fit < GAP_THRESHOLD {
        tasks.push(RecommendedTask {
            id: "market-fit",
            title: if spanish {
                "Encontrar tu encaje de mercado"
            } else {
                "Find your market fit"
            }
            .to_string(),
            description: if spanish {
                "Define estrategias para llegar a tus clientes ideales"
            } else {
                "Define strategies to reach your ideal customers"
            }
            .to_string(),
            agent_id: "market-fit-agent",
            priority: TaskPriority::Medium,
            estimated_time: if spanish { "3-4 semanas" } else { "3-4 weeks" }.to_string(),
            category: "marketFit",
        });
    }

    if scores.monetization < GAP_THRESHOLD {
        tasks.push(RecommendedTask {
            id: "monetization",
            title: if spanish {
                "Estrategia de monetización"
            } else {
                "Monetization strategy"
            }
            .to_string(),
            description: if spanish {
                "Estructura tus precios y canales de venta"
            } else {
                "Structure your pricing and sales channels"
            }
            .to_string(),
            agent_id: "monetization-agent",
            priority: TaskPriority::High,
            estimated_time: if spanish { "2-3 semanas" } else { "2-3 weeks" }.to_string(),
            category: "monetization",
        });
    }

    tasks
}
