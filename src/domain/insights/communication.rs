//! Communication style and work pace summaries.
//!
//! Both are majority-trait lookups into fixed template tables, in the same
//! shape as the insight cards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::DiscTrait;

/// Communication style template per prevalent DISC trait:
/// (trait, style label, guidance).
const COMMUNICATION_TEMPLATES: &[(DiscTrait, &str, &str)] = &[
    (
        DiscTrait::Dominance,
        "Direta e objetiva",
        "Vá direto ao ponto: objetivos, prazos e o que se espera de cada um. Rodeios e \
         justificativas longas dispersam esta turma.",
    ),
    (
        DiscTrait::Influence,
        "Expressiva e dialogada",
        "Abra espaço para fala e troca: a turma processa melhor conversando. Use \
         perguntas abertas e valorize contribuições em voz alta.",
    ),
    (
        DiscTrait::Steadiness,
        "Calma e acolhedora",
        "Comunique com tom constante e sem pressa. Confirme entendimento individualmente; \
         parte da turma não vai levantar dúvidas em público.",
    ),
    (
        DiscTrait::Conscientiousness,
        "Precisa e estruturada",
        "Prefira instruções por escrito, com critérios e etapas numeradas. Ambiguidade \
         gera mais perguntas do que trabalho nesta turma.",
    ),
];

/// A class's prevalent communication style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationSummary {
    pub majority_trait: DiscTrait,
    pub style: String,
    pub guidance: String,
}

impl CommunicationSummary {
    /// Builds the summary for the majority DISC trait.
    pub fn for_majority(majority: DiscTrait) -> Self {
        let (style, guidance) = COMMUNICATION_TEMPLATES
            .iter()
            .find(|(t, _, _)| *t == majority)
            .map(|(_, s, g)| (*s, *g))
            .unwrap_or(("", ""));
        Self {
            majority_trait: majority,
            style: style.to_string(),
            guidance: guidance.to_string(),
        }
    }
}

/// Work pace categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPace {
    Fast,
    Balanced,
    Deliberate,
}

impl fmt::Display for WorkPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkPace::Fast => write!(f, "Ritmo acelerado"),
            WorkPace::Balanced => write!(f, "Ritmo equilibrado"),
            WorkPace::Deliberate => write!(f, "Ritmo cadenciado"),
        }
    }
}

/// Work pace description per category.
const PACE_TEMPLATES: &[(WorkPace, &str)] = &[
    (
        WorkPace::Fast,
        "A turma tende a trabalhar rápido e se entedia com repetição. Planeje blocos \
         curtos com entregas frequentes e atividades extras para quem termina antes.",
    ),
    (
        WorkPace::Balanced,
        "A turma mistura ritmos. Defina um tempo-base por atividade e prepare tanto \
         extensões quanto apoio: os dois grupos vão aparecer.",
    ),
    (
        WorkPace::Deliberate,
        "A turma prefere tempo para consolidar antes de avançar. Reduza a quantidade de \
         tópicos por aula e reserve momentos de revisão; velocidade aqui custa retenção.",
    ),
];

/// A class's prevalent work pace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPaceSummary {
    pub pace: WorkPace,
    pub label: String,
    pub description: String,
}

impl WorkPaceSummary {
    /// Derives the pace from counts of fast-paced (Dominance/Influence)
    /// versus deliberate-paced (Steadiness/Conscientiousness) dominant
    /// traits. Equal counts read as balanced.
    pub fn from_counts(fast: usize, deliberate: usize) -> Self {
        let pace = match fast.cmp(&deliberate) {
            std::cmp::Ordering::Greater => WorkPace::Fast,
            std::cmp::Ordering::Equal => WorkPace::Balanced,
            std::cmp::Ordering::Less => WorkPace::Deliberate,
        };
        let description = PACE_TEMPLATES
            .iter()
            .find(|(p, _)| *p == pace)
            .map(|(_, d)| *d)
            .unwrap_or("");
        Self {
            pace,
            label: pace.to_string(),
            description: description.to_string(),
        }
    }
}
