//! Noyau de calcul (f64 borné)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (signe moins collé, caractères inertes)
//! - rpn.rs      : shunting-yard + filtre des jetons inertes
//! - eval.rs     : pile de valeurs, borne 1e12, pipeline complet
//! - erreur.rs   : ErreurCalcul / GenreErreur (+ taux, série)
//! - change.rs   : Taux, modes de conversion, arrondi 2 décimales
//! - conseil.rs  : conseil de change (dernier taux vs moyenne)
//! - format.rs   : affichage résultat / ligne de conversion

pub mod change;
pub mod conseil;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use change::{calculer, convertir, ModeConversion, PaireDevises, Taux};
pub use conseil::{conseil_change, lire_serie, ConseilChange, NiveauConseil};
pub use erreur::{ErreurCalcul, ErreurSerie, GenreErreur};
pub use eval::{evaluer, evaluer_avec_demarche, DemarcheNoyau};
