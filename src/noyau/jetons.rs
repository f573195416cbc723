// src/noyau/jetons.rs
//
// Tokenisation : texte brut -> suite de jetons.
// Aucun caractère n’est refusé ici : ce qui n’est ni nombre, ni opérateur, ni
// parenthèse devient un jeton Inerte, filtré ensuite par rpn.rs.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn est_associatif_droite(self) -> bool {
        matches!(self, Operateur::Puissance)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral tel que saisi ("12", "-3.5", mais aussi "--3" ou "1.2.3").
    /// La lecture en f64 se fait plus tard.
    Nombre(String),
    Op(Operateur),
    ParG,
    ParD,
    /// Caractère sans sens arithmétique (espace, lettre, ponctuation).
    Inerte(char),
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(t) => f.write_str(t),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
            Jeton::Inerte(c) => write!(f, "{c:?}"),
        }
    }
}

/// Caractères après lesquels un '-' est un signe (collé au nombre qui suit).
/// ')' n’en fait pas partie : "(1)-2" reste une soustraction.
fn precede_un_signe(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | '^')
}

/// Vide le littéral en attente dans `out`.
/// Un "-" seul (signe sans chiffres, ex: "-(2)") redevient l’opérateur Moins.
fn vider_litteral(litteral: &mut String, out: &mut Vec<Jeton>) {
    if litteral.is_empty() {
        return;
    }
    let t = std::mem::take(litteral);
    if t == "-" {
        out.push(Jeton::Op(Operateur::Moins));
    } else {
        out.push(Jeton::Nombre(t));
    }
}

/// Tokenize une chaîne en jetons.
///
/// Règles (gauche -> droite) :
/// - chiffre, '.', ou '-' en position 0 / juste après `+ - * / ( ^` : accumulé
///   dans le littéral en cours
/// - tout autre caractère vide le littéral puis devient son propre jeton
///   (opérateur, parenthèse, sinon Inerte)
///
/// Le caractère précédent est pris tel quel : "3* -2" a un espace avant '-',
/// donc '-' y est binaire.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let mut litteral = String::new();
    let mut precedent: Option<char> = None;

    for c in s.chars() {
        let signe = c == '-' && precedent.is_none_or(precede_un_signe);

        if c.is_ascii_digit() || c == '.' || signe {
            litteral.push(c);
        } else {
            vider_litteral(&mut litteral, &mut out);
            let jeton = match c {
                '(' => Jeton::ParG,
                ')' => Jeton::ParD,
                _ => match Operateur::depuis_char(c) {
                    Some(op) => Jeton::Op(op),
                    None => Jeton::Inerte(c),
                },
            };
            out.push(jeton);
        }

        precedent = Some(c);
    }

    vider_litteral(&mut litteral, &mut out);
    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
/// Les jetons inertes sont omis (ils ne portent aucun sens).
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .filter(|t| !matches!(t, Jeton::Inerte(_)))
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
