mod exam_vm;
mod markdown_vm;
mod question_vm;
mod results_vm;
mod time_fmt;

pub use exam_vm::{PreExamVm, ViewKind, map_pre_exam};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{ChoiceVm, PaletteItemVm, QuestionVm, choice_for_key, map_question};
pub use results_vm::{
    ResultsVm, ReviewChoiceVm, ReviewRowVm, ReviewStatus, map_results,
};
pub use time_fmt::format_elapsed;
