//! Tests for questions, kinds and the question list.

use super::*;
use crate::answer::{AnswerValue, Rejection, Selection};

fn choice(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn default_catalog_is_a_valid_list() {
    let list = QuestionList::new(default_questions()).unwrap();
    let ids: Vec<&str> = list.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "objective",
            "audience",
            "tone",
            "format",
            "length",
            "context",
            "examples",
            "constraints"
        ]
    );
    assert!(list.by_id("tone").unwrap().kind.is_multiple_choice());
}

#[test]
fn empty_list_is_rejected() {
    let err = QuestionList::new(Vec::new()).unwrap_err();
    assert!(err.to_string().contains("at least one question"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let questions = vec![
        Question::new("goal", "Goal?", QuestionKind::FreeText),
        Question::new("goal", "Goal again?", QuestionKind::SingleLineText),
    ];
    let err = QuestionList::new(questions).unwrap_err();
    assert!(err.to_string().contains("duplicate question id 'goal'"));
}

#[test]
fn choice_without_options_is_rejected() {
    let questions = vec![Question::new(
        "pick",
        "Pick one",
        QuestionKind::SingleChoice { options: vec![] },
    )];
    let err = QuestionList::new(questions).unwrap_err();
    assert!(err.to_string().contains("no options"));
}

#[test]
fn ensure_covers_lists_missing_ids() {
    let list = QuestionList::new(vec![Question::new(
        "objective",
        "Goal?",
        QuestionKind::FreeText,
    )])
    .unwrap();

    assert!(list.ensure_covers(&["objective"]).is_ok());
    let err = list.ensure_covers(&["objective", "tone", "format"]).unwrap_err();
    assert!(err.to_string().contains("tone, format"));
}

#[test]
fn text_is_trimmed_and_empty_text_rejected() {
    let kind = QuestionKind::SingleLineText;
    assert_eq!(
        kind.validate(AnswerValue::from("  hello  ")),
        Ok(AnswerValue::from("hello"))
    );
    assert_eq!(
        kind.validate(AnswerValue::from("   ")),
        Err(Rejection::EmptyText)
    );
    assert_eq!(
        QuestionKind::FreeText.validate(AnswerValue::Selection(Selection::new())),
        Err(Rejection::WrongShape {
            expected: "a text answer"
        })
    );
}

#[test]
fn single_choice_requires_an_exact_option() {
    let kind = QuestionKind::SingleChoice {
        options: choice(&["Iniciantes", "Geral"]),
    };
    assert_eq!(
        kind.validate(AnswerValue::from("Geral")),
        Ok(AnswerValue::from("Geral"))
    );
    assert_eq!(
        kind.validate(AnswerValue::from("geral")),
        Err(Rejection::UnknownOption("geral".to_string()))
    );
}

#[test]
fn exclusive_choice_accepts_one_element_selection() {
    let kind = QuestionKind::ExclusiveChoice {
        options: choice(&["Sim", "Não"]),
    };
    let one: Selection = ["Não"].into_iter().collect();
    assert_eq!(
        kind.validate(AnswerValue::Selection(one)),
        Ok(AnswerValue::from("Não"))
    );

    let two: Selection = ["Sim", "Não"].into_iter().collect();
    assert!(matches!(
        kind.validate(AnswerValue::Selection(two)),
        Err(Rejection::WrongShape { .. })
    ));
}

#[test]
fn multiple_choice_rules() {
    let kind = QuestionKind::MultipleChoice {
        options: choice(&["A", "B", "C"]),
    };

    let picked: Selection = ["C", "A", "C"].into_iter().collect();
    let accepted = kind.validate(AnswerValue::Selection(picked)).unwrap();
    assert_eq!(accepted.as_selection().unwrap().as_slice(), ["C", "A"]);

    assert_eq!(
        kind.validate(AnswerValue::Selection(Selection::new())),
        Err(Rejection::EmptySelection)
    );

    let bad: Selection = ["A", "Z"].into_iter().collect();
    assert_eq!(
        kind.validate(AnswerValue::Selection(bad)),
        Err(Rejection::UnknownOption("Z".to_string()))
    );

    let single = kind.validate(AnswerValue::from("B")).unwrap();
    assert_eq!(single.as_selection().unwrap().as_slice(), ["B"]);
}

#[test]
fn question_kind_yaml_shape() {
    let yaml = r#"
- id: audience
  prompt: Who is it for?
  kind: single_choice
  options: [Beginners, Experts]
- id: notes
  prompt: Anything else?
  kind: free_text
  hint: Optional notes
"#;
    let questions: Vec<Question> = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(questions[0].kind.options(), ["Beginners", "Experts"]);
    assert_eq!(questions[1].kind, QuestionKind::FreeText);
    assert_eq!(questions[1].hint.as_deref(), Some("Optional notes"));
}

#[test]
fn options_on_text_question_are_rejected() {
    let yaml = r#"
- id: context
  prompt: Any context?
  kind: free_text
  options: [Short, Long]
"#;
    let err = serde_yaml::from_str::<Vec<Question>>(yaml).unwrap_err();
    assert!(
        err.to_string()
            .contains("question 'context': options are not allowed on a text question")
    );
}

#[test]
fn choice_question_without_options_fails_list_validation() {
    let yaml = r#"
- id: audience
  prompt: Who is it for?
  kind: single_choice
"#;
    let questions: Vec<Question> = serde_yaml::from_str(yaml).unwrap();
    assert!(questions[0].kind.options().is_empty());

    let err = QuestionList::new(questions).unwrap_err();
    assert!(err.to_string().contains("no options"));
}
