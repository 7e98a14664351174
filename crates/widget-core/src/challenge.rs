//! Micro-challenges
//!
//! Short challenges kept local so the page works offline.

use chrono::{DateTime, TimeZone};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Display;

use crate::i18n::format_short;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub text: &'static str,
    pub tag: &'static str,
}

pub const CHALLENGES: &[Challenge] = &[
    Challenge { text: "Escreva uma tarefa que você vem evitando e que dá pra iniciar em 2 minutos.", tag: "clareza" },
    Challenge { text: "Revise sua lista e delete 1 tarefa que não faz mais sentido.", tag: "priorização" },
    Challenge { text: "Pegue a tarefa mais fácil e conclua agora, sem perfeccionismo.", tag: "impulso" },
    Challenge { text: "Transforme uma tarefa grande em 3 passos pequenos e registre.", tag: "quebra" },
    Challenge { text: "Faça um “arrume a mesa”: organize 1 coisa ao seu redor por 60s.", tag: "ambiente" },
    Challenge { text: "Defina 1 tarefa “MIT” (mais importante) para hoje e destaque.", tag: "foco" },
    Challenge { text: "Programe um bloco de 10 minutos e trabalhe em uma tarefa sem distrações.", tag: "execução" },
    Challenge { text: "Escreva uma frase: “Hoje eu aceito progresso, não perfeição”.", tag: "mindset" },
    Challenge { text: "Escolha uma tarefa e defina o critério de “feito” em 1 linha.", tag: "definição" },
    Challenge { text: "Se uma tarefa está vaga, reescreva com verbo + resultado.", tag: "clareza" },
];

/// Uniform pick from [`CHALLENGES`]
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static Challenge {
    // CHALLENGES is a non-empty constant
    CHALLENGES.choose(rng).unwrap_or(&CHALLENGES[0])
}

/// How a copy-to-clipboard attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Clipboard unavailable; the text was selected for a manual copy
    Selected,
}

/// A generated challenge as shown on the card
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeCard {
    pub challenge: &'static Challenge,
    pub meta: String,
}

impl ChallengeCard {
    pub fn new<Tz: TimeZone>(challenge: &'static Challenge, generated_at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            challenge,
            meta: format!("Categoria: {} • Gerado em: {}", challenge.tag, format_short(generated_at)),
        }
    }

    /// Text handed to the clipboard
    pub fn copy_value(&self) -> &'static str {
        self.challenge.text
    }

    pub fn with_copy_outcome(mut self, outcome: CopyOutcome) -> Self {
        let suffix = match outcome {
            CopyOutcome::Copied => "Copiado!",
            CopyOutcome::Selected => "Selecionei o texto (copie manualmente)",
        };
        self.meta = format!("{} • {}", self.meta, suffix);
        self
    }
}
