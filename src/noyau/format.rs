// src/noyau/format.rs
//
// Affichage des résultats (texte pour l’UI).

use super::change::{ModeConversion, PaireDevises};

/// Nombre max de décimales affichées pour un calcul simple.
const DECIMALES_MAX: usize = 10;

/// Résultat d’un calcul simple : décimales utiles seulement ("3", "0.25", "-2.5").
pub fn format_resultat(v: f64) -> String {
    let mut s = format!("{v:.prec$}", prec = DECIMALES_MAX);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    // évite "-0"
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Montant monétaire : toujours 2 décimales.
pub fn format_montant(v: f64) -> String {
    format!("{v:.2}")
}

/// Ligne de conversion : "12000.00 KRW -> 36.36 MYR".
/// En mode Simple : le résultat seul.
pub fn format_conversion(
    montant: f64,
    converti: f64,
    mode: ModeConversion,
    paire: &PaireDevises,
) -> String {
    match paire.sens(mode) {
        None => format_resultat(converti),
        Some((de, vers)) => format!(
            "{} {de} -> {} {vers}",
            format_montant(montant),
            format_montant(converti)
        ),
    }
}
