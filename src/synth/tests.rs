//! Tests for template synthesis.

use super::*;
use crate::answer::{AnswerSet, AnswerValue};
use crate::question::{QuestionList, default_questions};

fn base_answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.insert("objective".into(), "Explain recursion".into());
    answers.insert("audience".into(), "Iniciantes".into());
    answers.insert(
        "tone".into(),
        AnswerValue::Selection(["Amigável"].into_iter().collect()),
    );
    answers.insert("format".into(), "Texto corrido".into());
    answers.insert("length".into(), "Curta (3-5 parágrafos)".into());
    answers.insert("examples".into(), "Não".into());
    answers
}

fn render(answers: &AnswerSet) -> String {
    TemplateSynthesizer::new()
        .synthesize(answers, &[])
        .into_string()
}

#[test]
fn minimal_answers_render_exact_document() {
    let expected = "\
# Prompt Complexo Gerado

## Objetivo
Explain recursion

## Contexto e Especificações

**Público-alvo:** Iniciantes

**Tom de voz:** Amigável

**Formato de saída:** Texto corrido

**Tamanho esperado:** Curta (3-5 parágrafos)

## Instruções de Execução

Ao responder, você deve:

1. Manter o tom Amigável
2. Adaptar a linguagem para o nível Iniciantes
3. Estruturar a resposta no formato: Texto corrido
4. Garantir que a resposta tenha Curta (3-5 parágrafos)

## Tarefa

[INSIRA AQUI A TAREFA ESPECÍFICA QUE DESEJA QUE SEJA EXECUTADA]

---

*Este prompt foi gerado automaticamente pelo Construtor de Prompts Complexos*";

    assert_eq!(render(&base_answers()), expected);
}

#[test]
fn optional_sections_are_omitted_when_absent() {
    let doc = render(&base_answers());

    assert!(doc.contains("**Público-alvo:** Iniciantes"));
    assert!(doc.contains("**Tom de voz:** Amigável"));
    assert!(!doc.contains("Contexto Adicional"));
    assert!(!doc.contains("Restrições e Diretrizes"));
    assert!(!doc.contains("exemplos"));
    assert!(!doc.contains("5. "));
}

#[test]
fn blank_optional_answers_are_omitted() {
    let mut answers = base_answers();
    answers.insert("context".into(), "   ".into());
    answers.insert("constraints".into(), "".into());

    let doc = render(&answers);
    assert!(!doc.contains("## Contexto Adicional"));
    assert!(!doc.contains("## Restrições e Diretrizes"));
}

#[test]
fn optional_sections_follow_specification_in_order() {
    let mut answers = base_answers();
    answers.insert("context".into(), "CS101 course".into());
    answers.insert("constraints".into(), "No slang".into());

    let doc = render(&answers);
    let length = doc.find("**Tamanho esperado:**").unwrap();
    let context = doc.find("## Contexto Adicional\nCS101 course\n\n").unwrap();
    let constraints = doc
        .find("## Restrições e Diretrizes\nNo slang\n\n")
        .unwrap();
    let instructions = doc.find("## Instruções de Execução").unwrap();

    assert!(length < context);
    assert!(context < constraints);
    assert!(constraints < instructions);
}

#[test]
fn examples_answer_selects_instruction_wording() {
    let mut answers = base_answers();

    answers.insert("examples".into(), "Sim, com exemplos detalhados".into());
    assert!(render(&answers).contains(
        "4. Garantir que a resposta tenha Curta (3-5 parágrafos)\n\
         5. Incluir exemplos práticos e detalhados para ilustrar cada ponto importante\n"
    ));

    answers.insert("examples".into(), "Sim, com exemplos simples".into());
    assert!(render(&answers).contains("5. Incluir exemplos simples quando apropriado\n"));

    answers.insert("examples".into(), "Não".into());
    assert_eq!(ExamplesPolicy::from_answers(&answers), ExamplesPolicy::None);
    assert!(!render(&answers).contains("5. "));
}

#[test]
fn multi_selection_order_is_preserved() {
    let mut ab = base_answers();
    ab.insert(
        "tone".into(),
        AnswerValue::Selection(["Formal", "Casual"].into_iter().collect()),
    );
    let mut ba = base_answers();
    ba.insert(
        "tone".into(),
        AnswerValue::Selection(["Casual", "Formal"].into_iter().collect()),
    );

    let ab = render(&ab);
    let ba = render(&ba);
    assert!(ab.contains("**Tom de voz:** Formal, Casual"));
    assert!(ab.contains("1. Manter o tom Formal e Casual"));
    assert!(ba.contains("**Tom de voz:** Casual, Formal"));
    assert!(ba.contains("1. Manter o tom Casual e Formal"));
}

#[test]
fn synthesis_is_deterministic() {
    let questions = QuestionList::new(default_questions()).unwrap();
    let mut answers = base_answers();
    answers.insert("context".into(), "CS101".into());
    answers.insert("constraints".into(), "None".into());

    let synthesizer = TemplateSynthesizer::new();
    let first = synthesizer.synthesize(&answers, &questions);
    let second = synthesizer.synthesize(&answers.clone(), &questions);
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}

#[test]
fn section_table_order() {
    let names: Vec<&str> = SECTIONS.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "header",
            "objective",
            "specification",
            "context",
            "constraints",
            "instructions",
            "task",
            "footer"
        ]
    );
}

#[test]
fn text_tone_renders_as_single_value() {
    let mut answers = base_answers();
    answers.insert("tone".into(), "Formal".into());
    let doc = render(&answers);
    assert!(doc.contains("**Tom de voz:** Formal\n"));
    assert!(doc.contains("1. Manter o tom Formal\n"));
}

#[test]
fn required_fields_are_in_default_catalog() {
    let questions = QuestionList::new(default_questions()).unwrap();
    let synthesizer = TemplateSynthesizer::new();
    assert!(questions.ensure_covers(synthesizer.required_fields()).is_ok());
}
