//! Question catalog: static block/question definitions, conditional
//! visibility, and catalog resolution by language and mode.

mod blocks;
mod types;
mod visibility;

pub use blocks::{
    blocks, catalog, onboarding_block, ONBOARDING_QUESTIONS, ONBOARDING_QUESTION_IDS,
    QUESTIONS_PER_BLOCK, TOTAL_BLOCKS, TOTAL_QUESTIONS,
};
pub use types::{
    AssessmentMode, Block, Catalog, Choice, Language, Predicate, PredicateOp, Question,
    QuestionKind,
};
pub use visibility::{is_visible, predicate_holds};
