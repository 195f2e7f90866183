//! Built-in question catalog used when no custom questions are configured.

use super::{Question, QuestionKind};

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The default eight questions, in the order they are asked.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "objective",
            "Qual é o objetivo principal do seu prompt?",
            QuestionKind::FreeText,
        )
        .with_hint(
            "Ex: Criar um assistente que ajuda a escrever artigos técnicos sobre programação",
        ),
        Question::new(
            "audience",
            "Quem é o público-alvo?",
            QuestionKind::SingleChoice {
                options: options(&[
                    "Iniciantes",
                    "Intermediários",
                    "Avançados",
                    "Especialistas",
                    "Geral",
                ]),
            },
        ),
        Question::new(
            "tone",
            "Qual tom de voz desejado?",
            QuestionKind::MultipleChoice {
                options: options(&[
                    "Profissional",
                    "Casual",
                    "Técnico",
                    "Amigável",
                    "Formal",
                    "Criativo",
                    "Educativo",
                ]),
            },
        ),
        Question::new(
            "format",
            "Qual formato de saída esperado?",
            QuestionKind::ExclusiveChoice {
                options: options(&[
                    "Texto corrido",
                    "Lista com tópicos",
                    "Passo a passo",
                    "Código",
                    "Tabela",
                    "JSON",
                    "Markdown",
                ]),
            },
        ),
        Question::new(
            "length",
            "Qual o tamanho ideal da resposta?",
            QuestionKind::SingleChoice {
                options: options(&[
                    "Muito curta (1-2 parágrafos)",
                    "Curta (3-5 parágrafos)",
                    "Média (6-10 parágrafos)",
                    "Longa (10+ parágrafos)",
                    "Flexível",
                ]),
            },
        ),
        Question::new(
            "context",
            "Há algum contexto específico ou restrições que devem ser consideradas?",
            QuestionKind::FreeText,
        )
        .with_hint(
            "Ex: Deve seguir as melhores práticas de SEO, evitar jargões técnicos, incluir exemplos práticos",
        ),
        Question::new(
            "examples",
            "Deseja incluir exemplos no prompt?",
            QuestionKind::ExclusiveChoice {
                options: options(&[
                    "Sim, com exemplos detalhados",
                    "Sim, com exemplos simples",
                    "Não",
                ]),
            },
        ),
        Question::new(
            "constraints",
            "Quais são as principais restrições ou o que deve ser evitado?",
            QuestionKind::FreeText,
        )
        .with_hint("Ex: Não usar gírias, evitar conteúdo controverso, manter neutralidade"),
    ]
}
