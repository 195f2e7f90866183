//! Implementation of the `promptforge questions` command.

use crate::cli::QuestionsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::question::QuestionList;

/// Execute the `promptforge questions` command.
pub fn cmd_questions(args: QuestionsArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let questions = config.question_list()?;
    print!("{}", format_questions(&questions));
    Ok(())
}

/// One block per question: position, id, kind, prompt and options.
pub fn format_questions(questions: &QuestionList) -> String {
    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{}]\n   {}\n",
            i + 1,
            question.id,
            question.kind.label(),
            question.prompt
        ));
        for option in question.kind.options() {
            out.push_str(&format!("   - {}\n", option));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::default_questions;

    #[test]
    fn lists_every_question_in_order() {
        let list = QuestionList::new(default_questions()).unwrap();
        let text = format_questions(&list);

        assert!(text.starts_with("1. objective ["));
        assert!(text.contains("8. constraints ["));
        assert!(text.contains("   - Sim, com exemplos simples\n"));

        let objective = text.find("objective").unwrap();
        let audience = text.find("audience").unwrap();
        assert!(objective < audience);
    }
}
