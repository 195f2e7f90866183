//! The ordered section table.

use super::fields::{AUDIENCE, CONSTRAINTS, CONTEXT, EXAMPLES, FORMAT, LENGTH, OBJECTIVE, TONE};
use crate::answer::AnswerSet;

const TITLE: &str = "Prompt Complexo Gerado";
const TASK_PLACEHOLDER: &str = "[INSIRA AQUI A TAREFA ESPECÍFICA QUE DESEJA QUE SEJA EXECUTADA]";
const FOOTER: &str = "*Este prompt foi gerado automaticamente pelo Construtor de Prompts Complexos*";

/// One block of the generated document.
pub struct Section {
    pub name: &'static str,
    /// Whether the section appears at all for these answers.
    pub include: fn(&AnswerSet) -> bool,
    /// Append the section text.
    pub render: fn(&AnswerSet, &mut String),
}

/// Every section, in output order.
pub static SECTIONS: &[Section] = &[
    Section {
        name: "header",
        include: always,
        render: render_header,
    },
    Section {
        name: "objective",
        include: always,
        render: render_objective,
    },
    Section {
        name: "specification",
        include: always,
        render: render_specification,
    },
    Section {
        name: "context",
        include: has_context,
        render: render_context,
    },
    Section {
        name: "constraints",
        include: has_constraints,
        render: render_constraints,
    },
    Section {
        name: "instructions",
        include: always,
        render: render_instructions,
    },
    Section {
        name: "task",
        include: always,
        render: render_task,
    },
    Section {
        name: "footer",
        include: always,
        render: render_footer,
    },
];

/// What the examples answer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamplesPolicy {
    Detailed,
    Simple,
    None,
}

impl ExamplesPolicy {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        match answers.get(EXAMPLES).and_then(|v| v.as_text()) {
            Some("Sim, com exemplos detalhados") => ExamplesPolicy::Detailed,
            Some("Sim, com exemplos simples") => ExamplesPolicy::Simple,
            _ => ExamplesPolicy::None,
        }
    }

    fn instruction(self) -> Option<&'static str> {
        match self {
            ExamplesPolicy::Detailed => {
                Some("Incluir exemplos práticos e detalhados para ilustrar cada ponto importante")
            }
            ExamplesPolicy::Simple => Some("Incluir exemplos simples quando apropriado"),
            ExamplesPolicy::None => None,
        }
    }
}

fn always(_: &AnswerSet) -> bool {
    true
}

fn has_context(answers: &AnswerSet) -> bool {
    is_present(answers, CONTEXT)
}

fn has_constraints(answers: &AnswerSet) -> bool {
    is_present(answers, CONSTRAINTS)
}

fn is_present(answers: &AnswerSet, id: &str) -> bool {
    answers.get(id).is_some_and(|v| !v.is_blank())
}

/// Answer text, with selections joined by `separator`. Missing answers render empty.
fn value(answers: &AnswerSet, id: &str, separator: &str) -> String {
    answers
        .get(id)
        .map(|v| v.joined(separator))
        .unwrap_or_default()
}

fn render_header(_: &AnswerSet, out: &mut String) {
    out.push_str(&format!("# {}\n\n", TITLE));
}

fn render_objective(answers: &AnswerSet, out: &mut String) {
    out.push_str(&format!(
        "## Objetivo\n{}\n\n",
        value(answers, OBJECTIVE, ", ")
    ));
}

fn render_specification(answers: &AnswerSet, out: &mut String) {
    out.push_str("## Contexto e Especificações\n\n");

    let labeled = [
        ("Público-alvo", AUDIENCE),
        ("Tom de voz", TONE),
        ("Formato de saída", FORMAT),
        ("Tamanho esperado", LENGTH),
    ];
    for (label, id) in labeled {
        out.push_str(&format!("**{}:** {}\n\n", label, value(answers, id, ", ")));
    }
}

fn render_context(answers: &AnswerSet, out: &mut String) {
    out.push_str(&format!(
        "## Contexto Adicional\n{}\n\n",
        value(answers, CONTEXT, ", ")
    ));
}

fn render_constraints(answers: &AnswerSet, out: &mut String) {
    out.push_str(&format!(
        "## Restrições e Diretrizes\n{}\n\n",
        value(answers, CONSTRAINTS, ", ")
    ));
}

fn render_instructions(answers: &AnswerSet, out: &mut String) {
    out.push_str("## Instruções de Execução\n\n");
    out.push_str("Ao responder, você deve:\n\n");

    let mut steps = vec![
        format!("Manter o tom {}", value(answers, TONE, " e ")),
        format!(
            "Adaptar a linguagem para o nível {}",
            value(answers, AUDIENCE, ", ")
        ),
        format!(
            "Estruturar a resposta no formato: {}",
            value(answers, FORMAT, ", ")
        ),
        format!(
            "Garantir que a resposta tenha {}",
            value(answers, LENGTH, ", ")
        ),
    ];
    if let Some(line) = ExamplesPolicy::from_answers(answers).instruction() {
        steps.push(line.to_string());
    }

    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
}

fn render_task(_: &AnswerSet, out: &mut String) {
    out.push_str("\n## Tarefa\n\n");
    out.push_str(TASK_PLACEHOLDER);
    out.push_str("\n\n");
}

fn render_footer(_: &AnswerSet, out: &mut String) {
    out.push_str("---\n\n");
    out.push_str(FOOTER);
}
