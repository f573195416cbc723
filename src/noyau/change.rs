// src/noyau/change.rs
//
// Conversion de devises autour du résultat du calcul.
// Le taux vient de l’extérieur (saisi ou récupéré ailleurs) : le noyau ne le lit
// jamais dans un état global, il le reçoit à chaque appel.
//
// Arrondi : demi-éloigné-de-zéro (f64::round) à 2 décimales.

use std::fmt;

use super::erreur::{ErreurCalcul, ErreurTaux};
use super::eval::evaluer;

/// Taux de départ pour la paire par défaut (1 MYR = 330 KRW).
pub const TAUX_PAR_DEFAUT: f64 = 330.0;

/// Nombre d’unités de la devise source pour UNE unité de la devise cible.
/// Ex: 1 MYR = 330 KRW  =>  Taux(330) avec source = KRW, cible = MYR.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Taux(f64);

impl Taux {
    /// Refuse un taux non fini ou <= 0.
    pub fn new(valeur: f64) -> Result<Self, ErreurTaux> {
        if !valeur.is_finite() {
            return Err(ErreurTaux::NonFini(valeur));
        }
        if valeur <= 0.0 {
            return Err(ErreurTaux::NonPositif(valeur));
        }
        Ok(Self(valeur))
    }

    pub fn valeur(self) -> f64 {
        self.0
    }
}

impl Default for Taux {
    fn default() -> Self {
        Self(TAUX_PAR_DEFAUT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeConversion {
    /// Calcul simple, pas de conversion.
    #[default]
    Simple,
    /// montant / taux (ex: KRW -> MYR)
    SourceVersCible,
    /// montant * taux (ex: MYR -> KRW)
    CibleVersSource,
}

/// Libellés des deux devises (affichage uniquement).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaireDevises {
    pub source: String,
    pub cible: String,
}

impl Default for PaireDevises {
    fn default() -> Self {
        Self {
            source: "KRW".to_string(),
            cible: "MYR".to_string(),
        }
    }
}

impl PaireDevises {
    /// (devise du montant saisi, devise du résultat) pour un mode donné.
    /// None en mode Simple.
    pub fn sens(&self, mode: ModeConversion) -> Option<(&str, &str)> {
        match mode {
            ModeConversion::Simple => None,
            ModeConversion::SourceVersCible => Some((self.source.as_str(), self.cible.as_str())),
            ModeConversion::CibleVersSource => Some((self.cible.as_str(), self.source.as_str())),
        }
    }
}

impl fmt::Display for PaireDevises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source, self.cible)
    }
}

/// Arrondi à 2 décimales (demi-éloigné-de-zéro).
pub fn arrondi_2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Applique le mode de conversion à un montant.
pub fn convertir(montant: f64, taux: Taux, mode: ModeConversion) -> f64 {
    match mode {
        ModeConversion::Simple => montant,
        ModeConversion::SourceVersCible => arrondi_2(montant / taux.valeur()),
        ModeConversion::CibleVersSource => arrondi_2(montant * taux.valeur()),
    }
}

/// Pipeline complet côté UI : évalue puis convertit.
pub fn calculer(expr: &str, taux: Taux, mode: ModeConversion) -> Result<f64, ErreurCalcul> {
    let montant = evaluer(expr)?;
    Ok(convertir(montant, taux, mode))
}
