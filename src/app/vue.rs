// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Taux + mode passés au noyau à chaque calcul (jamais lus ailleurs)

use eframe::egui;

use calculatrice_change::noyau::format::format_conversion;
use calculatrice_change::noyau::{
    conseil_change, convertir, evaluer_avec_demarche, lire_serie, GenreErreur, ModeConversion,
    NiveauConseil,
};

use super::etat::{AppCalc, SERIE_MAX};

const MODES: [ModeConversion; 3] = [
    ModeConversion::SourceVersCible,
    ModeConversion::CibleVersSource,
    ModeConversion::Simple,
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de change");
                ui.add_space(6.0);

                self.ui_taux(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_conseil(ui);
            });
    }

    fn libelle_mode(&self, mode: ModeConversion) -> String {
        match self.paire.sens(mode) {
            None => "Calcul simple".to_string(),
            Some((de, vers)) => format!("{de} -> {vers}"),
        }
    }

    fn ui_taux(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Taux ({} pour 1 {}) :",
                self.paire.source, self.paire.cible
            ));
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.taux_saisie)
                    .desired_width(120.0)
                    .id_salt("taux_edit"),
            );
            // validé en sortie de champ (pas à chaque frappe)
            if resp.lost_focus() {
                let texte = self.taux_saisie.clone();
                self.set_taux_texte(&texte);
            }
        });

        if !self.erreur_taux.is_empty() {
            ui.colored_label(ui.visuals().warn_fg_color, &self.erreur_taux);
        }

        ui.horizontal(|ui| {
            ui.label("Conversion :");
            let mut mode = self.mode;
            egui::ComboBox::from_id_salt("mode_conversion")
                .selected_text(self.libelle_mode(mode))
                .show_ui(ui, |ui| {
                    for m in MODES {
                        ui.selectable_value(&mut mode, m, self.libelle_mode(m));
                    }
                });
            if mode != self.mode {
                self.set_mode(mode);
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Entrée ({}) :", self.libelle_mode(self.mode)));

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (12*34.1)^2+56.9-78/90")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro (taux gardé)", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_change")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "^"],
                ] {
                    for touche in ligne {
                        self.bouton_insert(ui, touche);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                self.bouton_insert(ui, "+");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        if let Some(genre) = self.genre_erreur {
            ui.add_space(6.0);
            let couleur = match genre {
                // rien à calculer : simple indication
                GenreErreur::EntreeVide => ui.visuals().weak_text_color(),
                GenreErreur::Depassement => ui.visuals().warn_fg_color,
                GenreErreur::PileInsuffisante
                | GenreErreur::DivisionParZero
                | GenreErreur::Inconnue => ui.visuals().error_fg_color,
            };
            ui.colored_label(couleur, &self.erreur);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_conseil(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Moment pour changer ?")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(format!(
                    "Taux récents ({} pour 1 {}), du plus ancien au plus récent :",
                    self.paire.source, self.paire.cible
                ));
                ui.add(
                    egui::TextEdit::multiline(&mut self.serie_saisie)
                        .desired_width(ui.available_width())
                        .desired_rows(3)
                        .hint_text("Ex: 318.2, 320.4, 322.9, 319.5")
                        .id_salt("serie_edit"),
                );

                if ui.button("Analyser").clicked() {
                    self.analyser_serie();
                }

                if let Some(e) = &self.erreur_conseil {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                }

                if let Some(c) = self.conseil {
                    ui.monospace(format!("Moyenne : {:.2}", c.moyenne));
                    ui.monospace(format!(
                        "Dernier : {:.2} ({:+.2} %)",
                        c.dernier,
                        c.ecart_pourcent()
                    ));
                    let couleur = match c.niveau {
                        NiveauConseil::TresFavorable | NiveauConseil::Favorable => {
                            egui::Color32::from_rgb(46, 160, 67)
                        }
                        NiveauConseil::Moyen => ui.visuals().text_color(),
                        NiveauConseil::Defavorable => ui.visuals().warn_fg_color,
                        NiveauConseil::TresDefavorable => ui.visuals().error_fg_color,
                    };
                    ui.colored_label(couleur, c.niveau.message());
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    /// Touche du pavé : ajoute le texte tel quel (les espaces seraient
    /// significatifs pour le signe moins, on n’en ajoute pas).
    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if resp.clicked() {
            self.entree.push_str(touche);
            self.focus_entree = true;
        }
    }

    /// Évalue l’expression via le noyau, convertit selon le mode, puis dépose
    /// la ligne de résultat et la démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        // un taux en cours de saisie compte aussi
        let texte = self.taux_saisie.clone();
        self.set_taux_texte(&texte);

        let (r, d) = evaluer_avec_demarche(&self.entree);
        match r {
            Ok(montant) => {
                let converti = convertir(montant, self.taux, self.mode);
                let ligne = format_conversion(montant, converti, self.mode, &self.paire);
                self.set_resultat(ligne, d.into());
            }
            Err(e) => self.set_erreur(&e, d.into()),
        }
    }

    /// Lit la série collée, garde les SERIE_MAX derniers points, calcule le conseil.
    fn analyser_serie(&mut self) {
        let r = lire_serie(&self.serie_saisie).and_then(|serie| {
            let debut = serie.len().saturating_sub(SERIE_MAX);
            conseil_change(&serie[debut..])
        });
        self.set_conseil(r);
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
