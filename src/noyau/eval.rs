//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> f64 borné (ou ErreurCalcul)
//!
//! Chaque faute est détectée AVANT l’opération risquée (nombre d’opérandes,
//! diviseur nul) et la borne de magnitude est vérifiée après CHAQUE opération,
//! pas seulement sur le résultat final.

use log::{debug, trace, warn};

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Jeton, Operateur};
use super::rpn::to_rpn;

/// Borne de magnitude : au-delà, évaluation interrompue (Depassement).
pub const LIMITE_MAGNITUDE: f64 = 1e12;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe.
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurCalcul> {
    evaluer_avec_demarche(expr_str).0
}

/// Comme `evaluer`, avec la démarche (jetons + RPN) pour le panneau d’explication.
/// La démarche est remplie même en cas d’erreur.
pub fn evaluer_avec_demarche(expr_str: &str) -> (Result<f64, ErreurCalcul>, DemarcheNoyau) {
    // 1) Jetons
    let jetons = tokenize(expr_str);
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: [{jetons_txt}]");

    // 2) RPN
    let rpn = to_rpn(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: [{rpn_txt}]");

    // 3) Pile
    let r = eval_rpn(&rpn);
    match &r {
        Ok(v) => debug!("résultat: {v}"),
        Err(e) => warn!("évaluation de {expr_str:?} échouée: {e}"),
    }

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    (r, d)
}

fn lire_nombre(t: &str) -> Result<f64, ErreurCalcul> {
    t.parse::<f64>()
        .map_err(|_| ErreurCalcul::inconnue(format!("nombre illisible: {t:?}")))
}

/// Applique `op` à (gauche, droite), avec les vérifications avant calcul.
fn appliquer(op: Operateur, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operateur::Plus => gauche + droite,
        Operateur::Moins => gauche - droite,
        Operateur::Fois => gauche * droite,
        Operateur::Divise => {
            if droite == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            gauche / droite
        }
        Operateur::Puissance => {
            // 0 ^ (négatif) = 1/0
            if gauche == 0.0 && droite < 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            gauche.powf(droite)
        }
    };

    if r.is_nan() {
        return Err(ErreurCalcul::inconnue(format!(
            "résultat non réel: {gauche} {} {droite}",
            op.symbole()
        )));
    }
    // inf compris
    if r.abs() > LIMITE_MAGNITUDE {
        return Err(ErreurCalcul::Depassement { valeur: r });
    }
    Ok(r)
}

/// Évalue une suite RPN.
///
/// - séquence vide : EntreeVide
/// - un seul jeton : lu tel quel (pas de borne sur un littéral isolé)
/// - parenthèse restée en RPN : PileInsuffisante (formule à revoir)
/// - sinon : pile de valeurs, le résultat est la valeur du fond de pile
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    if let [seul] = rpn {
        return match seul {
            Jeton::Nombre(t) => lire_nombre(t),
            autre => Err(ErreurCalcul::inconnue(format!("jeton isolé: {autre}"))),
        };
    }

    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(t) => pile.push(lire_nombre(t)?),

            Jeton::Op(op) => {
                if pile.len() < 2 {
                    return Err(ErreurCalcul::PileInsuffisante);
                }
                let (Some(droite), Some(gauche)) = (pile.pop(), pile.pop()) else {
                    return Err(ErreurCalcul::PileInsuffisante);
                };
                let r = appliquer(*op, gauche, droite)?;
                trace!("{gauche} {} {droite} = {r}", op.symbole());
                pile.push(r);
            }

            // '(' jamais fermée : traitée comme un opérateur sans opérandes
            Jeton::ParG | Jeton::ParD => return Err(ErreurCalcul::PileInsuffisante),

            Jeton::Inerte(c) => {
                return Err(ErreurCalcul::inconnue(format!("jeton inerte en RPN: {c:?}")));
            }
        }
    }

    // "1 2" (sans opérateur) laisse deux valeurs : on rend celle du fond.
    match pile.first() {
        Some(v) => Ok(*v),
        None => Err(ErreurCalcul::EntreeVide { pile }),
    }
}
