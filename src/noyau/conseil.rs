// src/noyau/conseil.rs
//
// Conseil de change : compare le dernier taux à la moyenne d’une série récente
// (typiquement 3 mois de clôtures journalières, fournie par l’appelant).
//
// Seuils (dans cet ordre) :
//   dernier < moyenne*0.97 -> TresFavorable
//   dernier < moyenne*0.99 -> Favorable
//   dernier > moyenne*1.03 -> TresDefavorable
//   dernier > moyenne*1.01 -> Defavorable
//   sinon                  -> Moyen

use super::erreur::ErreurSerie;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NiveauConseil {
    TresFavorable,
    Favorable,
    Moyen,
    Defavorable,
    TresDefavorable,
}

impl NiveauConseil {
    pub fn message(self) -> &'static str {
        match self {
            NiveauConseil::TresFavorable => {
                "Taux plus de 3 % sous la moyenne : bon moment pour changer."
            }
            NiveauConseil::Favorable => "Taux 1 à 3 % sous la moyenne : moment à considérer.",
            NiveauConseil::Moyen => "Taux dans la moyenne : rien ne presse, on peut attendre.",
            NiveauConseil::Defavorable => "Taux 1 à 3 % au-dessus de la moyenne : prudence.",
            NiveauConseil::TresDefavorable => {
                "Taux plus de 3 % au-dessus de la moyenne : mieux vaut attendre."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConseilChange {
    pub moyenne: f64,
    pub dernier: f64,
    pub niveau: NiveauConseil,
}

impl ConseilChange {
    /// Écart du dernier taux à la moyenne, en pourcentage signé.
    pub fn ecart_pourcent(&self) -> f64 {
        (self.dernier / self.moyenne - 1.0) * 100.0
    }
}

fn niveau(dernier: f64, moyenne: f64) -> NiveauConseil {
    if dernier < moyenne * 0.97 {
        NiveauConseil::TresFavorable
    } else if dernier < moyenne * 0.99 {
        NiveauConseil::Favorable
    } else if dernier > moyenne * 1.03 {
        NiveauConseil::TresDefavorable
    } else if dernier > moyenne * 1.01 {
        NiveauConseil::Defavorable
    } else {
        NiveauConseil::Moyen
    }
}

/// Calcule le conseil à partir d’une série chronologique (dernier = plus récent).
pub fn conseil_change(serie: &[f64]) -> Result<ConseilChange, ErreurSerie> {
    let Some(&dernier) = serie.last() else {
        return Err(ErreurSerie::Vide);
    };

    if let Some((index, &valeur)) = serie
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v <= 0.0)
    {
        return Err(ErreurSerie::ValeurInvalide { index, valeur });
    }

    let moyenne = serie.iter().sum::<f64>() / serie.len() as f64;

    Ok(ConseilChange {
        moyenne,
        dernier,
        niveau: niveau(dernier, moyenne),
    })
}

/// Lit une série collée par l’utilisateur : nombres séparés par virgules,
/// points-virgules, espaces ou retours à la ligne.
pub fn lire_serie(texte: &str) -> Result<Vec<f64>, ErreurSerie> {
    texte
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|morceau| !morceau.is_empty())
        .map(|morceau| {
            morceau
                .parse::<f64>()
                .map_err(|_| ErreurSerie::Illisible(morceau.to_string()))
        })
        .collect()
}
