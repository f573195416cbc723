//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - précédence / associativité contre le calcul direct en f64
//! - moins unaire (tête, après opérateur, après parenthèse)
//! - genres d’erreur (chaque faute garde son genre jusqu’à l’appelant)
//! - tolérance au bruit (espaces, lettres)
//! - déterminisme (aucun état caché entre deux appels)

use super::erreur::{ErreurCalcul, GenreErreur};
use super::evaluer;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    let tol = 1e-9 * attendu.abs().max(1.0);
    assert!(
        (v - attendu).abs() <= tol,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_genre(expr: &str, genre: GenreErreur) {
    match evaluer(expr) {
        Ok(v) => panic!("expr={expr:?} aurait dû donner {genre:?}, obtenu {v}"),
        Err(e) => assert_eq!(e.genre(), genre, "expr={expr:?} err={e}"),
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_puissance_associative_droite() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("(2^3)^2"), 64.0);
}

#[test]
fn sci_formule_exemple() {
    let attendu = (12.0_f64 * 34.1).powf(2.0) + 56.9 - 78.0 / 90.0;
    assert_proche("(12*34.1)^2+56.9-78/90", attendu);
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
    assert_eq!(eval_ok("2*3/4"), 1.5);
    assert_eq!(eval_ok("1-2+3"), 2.0);
}

#[test]
fn sci_precedence_melangee() {
    assert_proche("1+2*3^2-8/4", 1.0 + 2.0 * 9.0 - 2.0);
    assert_proche("((1.5+2.5)*(3-1))^2/8", 8.0);
    assert_proche("0.1+0.2", 0.1 + 0.2);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("3*-2"), -6.0);
    assert_eq!(eval_ok("(-2)*(-3)"), 6.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
    assert_eq!(eval_ok("5--3"), 8.0);
    assert_eq!(eval_ok("(1)-2"), -1.0);
}

#[test]
fn sci_moins_colle_a_la_base_de_la_puissance() {
    // "-2" est un littéral : (-2)^2
    assert_eq!(eval_ok("-2^2"), 4.0);
}

#[test]
fn sci_double_moins_non_interprete() {
    // "--3" n’est pas lu comme un nombre : il reste "5 *"
    assert_genre("5*--3", GenreErreur::PileInsuffisante);
}

#[test]
fn sci_espace_avant_moins_le_rend_binaire() {
    assert_genre("3* -2", GenreErreur::PileInsuffisante);
}

/* ------------------------ Genres d’erreur ------------------------ */

#[test]
fn sci_genres_erreurs() {
    assert_genre("5/0", GenreErreur::DivisionParZero);
    assert_genre("+*3", GenreErreur::PileInsuffisante);
    assert_genre("999999999999*999999999999", GenreErreur::Depassement);
    assert_genre("", GenreErreur::EntreeVide);
    assert_genre("abc", GenreErreur::EntreeVide);
    assert_genre("(-1)^0.5", GenreErreur::Inconnue);
}

#[test]
fn sci_depassement_avant_retour_sous_la_borne() {
    // 2e12 - 1.5e12 = 5e11 serait sous la borne, mais l’intermédiaire dépasse
    assert_genre("2000000*1000000-1500000*1000000", GenreErreur::Depassement);
    // la valeur fautive est gardée
    assert_eq!(
        evaluer("2000000*1000000"),
        Err(ErreurCalcul::Depassement { valeur: 2e12 })
    );
}

#[test]
fn sci_premiere_faute_gagne() {
    // gauche évaluée d’abord : dépassement avant la division par zéro
    assert_genre("(999999999999*10)+(1/0)", GenreErreur::Depassement);
    assert_genre("(1/0)+(999999999999*10)", GenreErreur::DivisionParZero);
}

/* ------------------------ Bruit ------------------------ */

#[test]
fn sci_espaces_et_bruit_ignores() {
    assert_eq!(eval_ok("1 + 2"), 3.0);
    assert_eq!(eval_ok("  (1 +2) *\t3 "), 9.0);
    // ',' est inerte : "1" et "000+2" restent deux valeurs, le fond de pile gagne
    assert_eq!(eval_ok("1,000+2"), 1.0);
    assert_eq!(eval_ok("12 $ + 3 €"), 15.0);
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2^3^2", "5/0", "+*3", "1 + 2", "", "999999999999*999999999999"] {
        assert_eq!(evaluer(expr), evaluer(expr), "expr={expr:?}");
    }
}
