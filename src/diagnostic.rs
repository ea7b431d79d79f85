use std::fmt::Display;

use color_print::ceprintln;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Lexical => "lexical",
            Stage::Syntax => "syntax",
            Stage::Semantic => "semantic",
        }
    }
}

pub fn report(stage: Stage, msg: &impl Display) {
    ceprintln!("<red,bold>{} error</>: {}", stage.label(), msg);
}

pub fn report_all<T: Display>(stage: Stage, msgs: &[T]) {
    for msg in msgs {
        report(stage, msg);
    }
}
