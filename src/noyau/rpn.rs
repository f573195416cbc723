// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Jeton (infixe) en RPN (postfix)
//
// Règles:
// - Nombre lisible en f64 : sortie directe
// - Opérateur : dépile tant que le sommet est prioritaire (ou égal + associatif gauche)
// - '(' empilée, ')' dépile jusqu’à '(' (jetée)
// - Jetons inertes (Inerte, ou Nombre illisible comme "--3") : consommés sans effet
//
// NOTE:
// - Une ')' sans '(' vide la pile et ne jette rien.
// - Une '(' jamais fermée finit en sortie : l’évaluateur y voit une pile insuffisante.

use super::jetons::{Jeton, Operateur};

/// Filtre explicite : un jeton inerte ne touche ni la pile ni la sortie.
pub fn est_inerte(jeton: &Jeton) -> bool {
    match jeton {
        Jeton::Inerte(_) => true,
        Jeton::Nombre(t) => t.parse::<f64>().is_err(),
        Jeton::Op(_) | Jeton::ParG | Jeton::ParD => false,
    }
}

/// Le sommet `top` doit-il sortir avant d’empiler `op` ?
fn doit_depiler(top: &Jeton, op: Operateur) -> bool {
    let Jeton::Op(top) = top else {
        // '(' bloque
        return false;
    };
    let (p_top, p_op) = (top.precedence(), op.precedence());
    p_top > p_op || (p_top == p_op && !op.est_associatif_droite())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [2, ^, 3, ^, 2]
///   rpn:    [2, 3, 2, ^, ^]
pub fn to_rpn(tokens: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in tokens.iter().filter(|t| !est_inerte(t)) {
        match tok {
            Jeton::Nombre(_) => out.push(tok.clone()),

            Jeton::Op(op) => {
                while let Some(top) = ops.last() {
                    if !doit_depiler(top, *op) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok.clone());
            }

            Jeton::ParG => ops.push(Jeton::ParG),

            Jeton::ParD => {
                // dépile jusqu’à '(' (jetée, pas émise)
                while let Some(top) = ops.pop() {
                    if matches!(top, Jeton::ParG) {
                        break;
                    }
                    out.push(top);
                }
            }

            // déjà filtré
            Jeton::Inerte(_) => {}
        }
    }

    // vide la pile ops (ordre de dépilement)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}
