//! Insight cards: canned guidance text selected by prevalent traits.
//!
//! The card bodies live in explicit lookup tables keyed by trait, so the
//! "which template" decision stays a pure function of the aggregate trait
//! codes and each table can be tested on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{DiscTrait, VarkStyle};

/// Kinds of insight card shown on the class dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCardKind {
    /// Overall class climate, driven by the prevalent DISC trait.
    Climate,
    /// What keeps the class engaged, driven by the prevalent VARK style.
    Engagement,
    /// How to explain new content, driven by the S/N balance.
    Explanation,
}

impl fmt::Display for InsightCardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightCardKind::Climate => write!(f, "Clima da Turma"),
            InsightCardKind::Engagement => write!(f, "Engajamento"),
            InsightCardKind::Explanation => write!(f, "Como Explicar"),
        }
    }
}

/// A rendered insight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub kind: InsightCardKind,
    pub title: String,
    pub body: String,
}

/// Climate card body per prevalent DISC trait.
const CLIMATE_TEMPLATES: &[(DiscTrait, &str)] = &[
    (
        DiscTrait::Dominance,
        "A turma tem um clima competitivo e orientado a resultados. Proponha desafios \
         com metas claras e espaço para liderança; evite atividades longas sem objetivo \
         definido.",
    ),
    (
        DiscTrait::Influence,
        "A turma é comunicativa e responde bem a trocas sociais. Debates, trabalhos em \
         dupla e apresentações tendem a render mais que longos períodos de trabalho \
         silencioso.",
    ),
    (
        DiscTrait::Steadiness,
        "A turma valoriza previsibilidade e cooperação. Mantenha rotinas estáveis, \
         anuncie mudanças com antecedência e incentive a colaboração em pequenos grupos.",
    ),
    (
        DiscTrait::Conscientiousness,
        "A turma preza por precisão e critérios claros. Explicite regras de avaliação e \
         forneça instruções detalhadas; perguntas sobre detalhes são sinal de engajamento, \
         não de resistência.",
    ),
];

/// Engagement card body per prevalent VARK style.
const ENGAGEMENT_TEMPLATES: &[(VarkStyle, &str)] = &[
    (
        VarkStyle::Visual,
        "Predomínio visual: diagramas, mapas mentais e esquemas no quadro sustentam a \
         atenção da turma melhor que exposição puramente falada.",
    ),
    (
        VarkStyle::Auditory,
        "Predomínio auditivo: explicações faladas, discussões e leitura em voz alta \
         funcionam bem; considere gravar resumos em áudio.",
    ),
    (
        VarkStyle::ReadingWriting,
        "Predomínio de leitura/escrita: textos de apoio, listas e produção escrita \
         engajam mais que recursos somente visuais.",
    ),
    (
        VarkStyle::Kinesthetic,
        "Predomínio cinestésico: experimentos, simulações e atividades mão na massa \
         mantêm a turma envolvida; alterne teoria com prática em blocos curtos.",
    ),
    (
        VarkStyle::Multimodal,
        "Perfil multimodal: não há um canal dominante. Varie deliberadamente entre \
         recursos visuais, falados, escritos e práticos ao longo da semana.",
    ),
];

/// Explanation card body per prevalent perception letter (S/N).
const EXPLANATION_TEMPLATES: &[(char, &str)] = &[
    (
        'S',
        "A maioria processa melhor o concreto: comece por exemplos e casos reais, e só \
         depois generalize para o conceito abstrato.",
    ),
    (
        'N',
        "A maioria processa melhor o abstrato: apresente primeiro a ideia geral e o \
         porquê, e use exemplos como ilustração, não como ponto de partida.",
    ),
];

/// Builds the climate card for the prevalent DISC trait.
pub fn climate_card(prevalent: DiscTrait) -> InsightCard {
    let body = CLIMATE_TEMPLATES
        .iter()
        .find(|(t, _)| *t == prevalent)
        .map(|(_, body)| *body)
        .unwrap_or("");
    InsightCard {
        kind: InsightCardKind::Climate,
        title: InsightCardKind::Climate.to_string(),
        body: body.to_string(),
    }
}

/// Builds the engagement card for the prevalent VARK style.
pub fn engagement_card(prevalent: VarkStyle) -> InsightCard {
    let body = ENGAGEMENT_TEMPLATES
        .iter()
        .find(|(s, _)| *s == prevalent)
        .map(|(_, body)| *body)
        .unwrap_or("");
    InsightCard {
        kind: InsightCardKind::Engagement,
        title: InsightCardKind::Engagement.to_string(),
        body: body.to_string(),
    }
}

/// Builds the explanation card for the prevalent perception letter.
///
/// Letters other than S/N fall back to the concrete-first template.
pub fn explanation_card(prevalent_letter: char) -> InsightCard {
    let body = EXPLANATION_TEMPLATES
        .iter()
        .find(|(l, _)| *l == prevalent_letter)
        .or(EXPLANATION_TEMPLATES.first())
        .map(|(_, body)| *body)
        .unwrap_or("");
    InsightCard {
        kind: InsightCardKind::Explanation,
        title: InsightCardKind::Explanation.to_string(),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_templates_cover_all_disc_traits() {
        for t in [
            DiscTrait::Dominance,
            DiscTrait::Influence,
            DiscTrait::Steadiness,
            DiscTrait::Conscientiousness,
        ] {
            let card = climate_card(t);
            assert!(!card.body.is_empty(), "missing climate template for {:?}", t);
            assert_eq!(card.kind, InsightCardKind::Climate);
        }
    }

    #[test]
    fn engagement_templates_cover_all_vark_styles() {
        for s in [
            VarkStyle::Visual,
            VarkStyle::Auditory,
            VarkStyle::ReadingWriting,
            VarkStyle::Kinesthetic,
            VarkStyle::Multimodal,
        ] {
            let card = engagement_card(s);
            assert!(
                !card.body.is_empty(),
                "missing engagement template for {:?}",
                s
            );
        }
    }

    #[test]
    fn explanation_card_selects_by_letter() {
        let concrete = explanation_card('S');
        let abstract_first = explanation_card('N');

        assert!(concrete.body.contains("concreto"));
        assert!(abstract_first.body.contains("abstrato"));
        assert_ne!(concrete.body, abstract_first.body);
    }

    #[test]
    fn explanation_card_falls_back_for_unknown_letter() {
        let card = explanation_card('X');
        assert_eq!(card.body, explanation_card('S').body);
    }

    #[test]
    fn card_titles_use_platform_labels() {
        assert_eq!(climate_card(DiscTrait::Dominance).title, "Clima da Turma");
        assert_eq!(engagement_card(VarkStyle::Visual).title, "Engajamento");
        assert_eq!(explanation_card('S').title, "Como Explicar");
    }
}
