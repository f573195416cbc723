// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurCalcul : une par genre de faute d’évaluation (jamais une simple String)
// - ErreurTaux   : taux de change refusé à la construction
// - ErreurSerie  : série de taux inutilisable pour le conseil
//
// Les messages sont pour l’utilisateur ; le code appelant branche sur `genre()`.

use thiserror::Error;

/// Genre d’erreur, sans charge utile : pratique pour un `match` côté UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenreErreur {
    EntreeVide,
    PileInsuffisante,
    DivisionParZero,
    Depassement,
    Inconnue,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalcul {
    /// Aucune valeur après conversion RPN. La pile est gardée pour le diagnostic.
    #[error("aucune valeur saisie (pile actuelle : {pile:?})")]
    EntreeVide { pile: Vec<f64> },

    /// Un opérateur a trouvé moins de deux opérandes.
    #[error("erreur de calcul : vérifiez la formule")]
    PileInsuffisante,

    #[error("erreur de calcul : division par zéro impossible")]
    DivisionParZero,

    /// Un résultat intermédiaire dépasse LIMITE_MAGNITUDE en valeur absolue.
    #[error("valeur trop grande : le maximum est 1 000 milliards (obtenu {valeur:e})")]
    Depassement { valeur: f64 },

    #[error("erreur inconnue ({detail})")]
    Inconnue { detail: String },
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::EntreeVide { .. } => GenreErreur::EntreeVide,
            ErreurCalcul::PileInsuffisante => GenreErreur::PileInsuffisante,
            ErreurCalcul::DivisionParZero => GenreErreur::DivisionParZero,
            ErreurCalcul::Depassement { .. } => GenreErreur::Depassement,
            ErreurCalcul::Inconnue { .. } => GenreErreur::Inconnue,
        }
    }

    pub(crate) fn inconnue(detail: impl Into<String>) -> Self {
        ErreurCalcul::Inconnue {
            detail: detail.into(),
        }
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ErreurTaux {
    #[error("taux de change non fini ({0})")]
    NonFini(f64),

    #[error("taux de change doit être strictement positif (reçu {0})")]
    NonPositif(f64),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurSerie {
    #[error("série de taux vide")]
    Vide,

    /// Index + valeur fautive (non finie ou <= 0).
    #[error("taux invalide en position {index} : {valeur}")]
    ValeurInvalide { index: usize, valeur: f64 },

    #[error("taux illisible : {0:?}")]
    Illisible(String),
}
