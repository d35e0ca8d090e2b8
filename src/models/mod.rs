pub mod answer;
pub mod field;
pub mod loaders;
pub mod question;
pub mod sitting;

pub use answer::AnswerLabel;
pub use field::Field;
pub use loaders::{load_all_sittings, load_sitting};
pub use question::{AnswerKey, AnswerKeyEntry, Choices, Question, RawQuestionBlock, ReconciledText};
pub use sitting::{make_title, ExamSitting};
