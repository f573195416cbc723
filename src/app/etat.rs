//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, taux, mode, résultat,
//! erreur, démarche, conseil) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing d’expression).
//! - Le taux et le mode sont passés explicitement au noyau à chaque calcul.
//! - Défense en profondeur : taux borné, série bornée.

use log::warn;

use calculatrice_change::noyau::{
    ConseilChange, DemarcheNoyau, ErreurCalcul, ErreurSerie, GenreErreur, ModeConversion,
    PaireDevises, Taux,
};

/// Garde-fou : bornes acceptées pour un taux saisi à la main.
const TAUX_MIN: f64 = 1e-4;
const TAUX_MAX: f64 = 1e6;

/// Garde-fou : on ne garde que les N derniers points d’une série collée.
pub const SERIE_MAX: usize = 400;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrées utilisateur ---
    pub entree: String,
    pub taux_saisie: String,
    pub serie_saisie: String,

    // --- paramètres ---
    pub taux: Taux,
    pub mode: ModeConversion,
    pub paire: PaireDevises,

    // --- sorties ---
    pub resultat: String,              // ligne affichée (simple ou conversion)
    pub erreur: String,                // message d’erreur (si éval échoue)
    pub genre_erreur: Option<GenreErreur>,
    pub erreur_taux: String,
    pub conseil: Option<ConseilChange>,
    pub erreur_conseil: Option<ErreurSerie>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        // en attendant une saisie
        let taux = Taux::default();
        Self {
            entree: String::new(),
            taux_saisie: taux.valeur().to_string(),
            serie_saisie: String::new(),
            taux,
            mode: ModeConversion::default(),
            paire: PaireDevises::default(),
            resultat: String::new(),
            erreur: String::new(),
            genre_erreur: None,
            erreur_taux: String::new(),
            conseil: None,
            erreur_conseil: None,
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + mode par défaut).
    /// Le taux est gardé : il vient de l’extérieur.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.mode = ModeConversion::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.genre_erreur = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur de calcul.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - La démarche reste visible : elle montre où la formule a cassé.
    pub fn set_erreur(&mut self, e: &ErreurCalcul, demarche: Demarche) {
        self.erreur = e.to_string();
        self.genre_erreur = Some(e.genre());
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.genre_erreur = None;
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Lit le taux saisi. En cas de refus, l’ancien taux reste en place.
    pub fn set_taux_texte(&mut self, texte: &str) {
        let lu = match texte.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                self.erreur_taux = format!("taux illisible : {texte:?}");
                warn!("{}", self.erreur_taux);
                return;
            }
        };

        if !(TAUX_MIN..=TAUX_MAX).contains(&lu) {
            self.erreur_taux = format!("taux hors bornes ({TAUX_MIN} à {TAUX_MAX}) : {lu}");
            warn!("{}", self.erreur_taux);
            return;
        }

        match Taux::new(lu) {
            Ok(t) => {
                self.taux = t;
                self.erreur_taux.clear();
            }
            Err(e) => {
                self.erreur_taux = e.to_string();
                warn!("{}", self.erreur_taux);
            }
        }
    }

    pub fn set_mode(&mut self, mode: ModeConversion) {
        self.mode = mode;
        self.focus_entree = true;
    }

    /// Dépose le conseil, ou l’erreur typée de la série (le dernier conseil est retiré).
    pub fn set_conseil(&mut self, r: Result<ConseilChange, ErreurSerie>) {
        match r {
            Ok(c) => {
                self.conseil = Some(c);
                self.erreur_conseil = None;
            }
            Err(e) => {
                warn!("série refusée : {e}");
                self.conseil = None;
                self.erreur_conseil = Some(e);
            }
        }
    }
}
