use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Catalog languages. The catalog is pure given a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" => Ok(Self::Es),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Assessment variants: the full 30-question test or the fixed 3-question
/// fast-onboarding subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMode {
    #[default]
    Full,
    Onboarding,
}

impl std::str::FromStr for AssessmentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "continue" => Ok(Self::Full),
            "onboarding" | "fast" => Ok(Self::Onboarding),
            other => Err(format!("unsupported mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    Text,
    /// Free text routed through the AI-extraction service.
    TextWithExtraction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Visibility predicate operators. Unknown operators deserialize to
/// `Unknown`, which the evaluator treats as visible so a catalog bug never
/// hides a required question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOp {
    Equals,
    NotEquals,
    Includes,
    GreaterThan,
    LessThan,
    Exists,
    NotExists,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub field: String,
    pub op: PredicateOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable, globally unique across all blocks. Never changes meaning
    /// once shipped; a removed or renamed id orphans historical answers.
    pub id: String,
    /// Profile attribute the answer writes.
    pub field_name: String,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Predicate>,
}

/// A themed group of questions shown together. Block membership is fixed at
/// catalog-definition time; blocks are visited strictly in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub agent_message: String,
    pub strategic_context: String,
    pub questions: Vec<Question>,
}

/// The resolved question set for one language and mode.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: Language,
    mode: AssessmentMode,
    blocks: Vec<Block>,
}

impl Catalog {
    #[must_use]
    pub fn new(language: Language, mode: AssessmentMode, blocks: Vec<Block>) -> Self {
        Self {
            language,
            mode,
            blocks,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn mode(&self) -> AssessmentMode {
        self.mode
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(|b| b.questions.len()).sum()
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.blocks.iter().flat_map(|b| b.questions.iter())
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }

    /// All valid question ids for this catalog version.
    #[must_use]
    pub fn valid_ids(&self) -> HashSet<&str> {
        self.questions().map(|q| q.id.as_str()).collect()
    }
}
