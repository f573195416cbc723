//! Calculatrice de change : noyau de calcul réutilisable.
//!
//! Le binaire (main.rs + app/) n’est qu’une coquille egui autour de `noyau`.

pub mod noyau;
