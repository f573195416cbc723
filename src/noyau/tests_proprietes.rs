//! Propriétés (proptest) : conversion aller-retour, idempotence, entiers.

use proptest::prelude::*;

use super::change::{convertir, ModeConversion, Taux};
use super::evaluer;

proptest! {
    /// Source -> cible -> source : deux arrondis à 0.01.
    /// L’erreur du premier arrondi est multipliée par le taux au retour :
    /// borne 0.02 tenue pour des taux <= 3.
    #[test]
    fn aller_retour_source_cible(a in -1.0e6f64..1.0e6, r in 0.5f64..3.0) {
        let taux = Taux::new(r).unwrap();
        let aller = convertir(a, taux, ModeConversion::SourceVersCible);
        let retour = convertir(aller, taux, ModeConversion::CibleVersSource);
        prop_assert!((retour - a).abs() <= 0.02, "a={a} r={r} retour={retour}");
    }

    /// Cible -> source -> cible : tenu pour tout taux >= 1.
    #[test]
    fn aller_retour_cible_source(a in -1.0e6f64..1.0e6, r in 1.0f64..2000.0) {
        let taux = Taux::new(r).unwrap();
        let aller = convertir(a, taux, ModeConversion::CibleVersSource);
        let retour = convertir(aller, taux, ModeConversion::SourceVersCible);
        prop_assert!((retour - a).abs() <= 0.02, "a={a} r={r} retour={retour}");
    }

    #[test]
    fn mode_simple_identite(a in proptest::num::f64::NORMAL, r in 0.001f64..1.0e4) {
        let taux = Taux::new(r).unwrap();
        prop_assert_eq!(convertir(a, taux, ModeConversion::Simple), a);
    }

    /// Aucun état caché : deux appels, même résultat.
    #[test]
    fn idempotence(expr in "[0-9. +*/^()-]{0,24}") {
        prop_assert_eq!(evaluer(&expr), evaluer(&expr));
    }

    /// Entiers bornés : a op b calculé comme en Rust.
    #[test]
    fn operations_entieres(a in 0i64..100_000, b in 1i64..100_000) {
        let (fa, fb) = (a as f64, b as f64);
        prop_assert_eq!(evaluer(&format!("{a}+{b}")), Ok(fa + fb));
        prop_assert_eq!(evaluer(&format!("{a}-{b}")), Ok(fa - fb));
        prop_assert_eq!(evaluer(&format!("{a}*{b}")), Ok(fa * fb));
        prop_assert_eq!(evaluer(&format!("{a}/{b}")), Ok(fa / fb));
        prop_assert_eq!(evaluer(&format!("-{a}*{b}")), Ok(-fa * fb));
    }
}
