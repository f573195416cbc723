//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : arbre évalué directement (même ordre que la RPN), qui rend soit
//!   la valeur soit le genre de la PREMIÈRE faute rencontrée
//! - texte aléatoire quelconque : jamais de panique, toujours un genre

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::eval::LIMITE_MAGNITUDE;
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle (arbre) ------------------------ */

enum Arbre {
    Nombre(f64, String),
    Bin(char, Box<Arbre>, Box<Arbre>),
}

impl Arbre {
    /// Texte entièrement parenthésé, sans espaces ni signe (littéraux >= 0).
    fn texte(&self) -> String {
        match self {
            Arbre::Nombre(_, t) => t.clone(),
            Arbre::Bin(op, a, b) => format!("({}{op}{})", a.texte(), b.texte()),
        }
    }

    /// Gauche puis droite, comme la RPN : la première faute gagne.
    fn valeur(&self) -> Result<f64, GenreErreur> {
        match self {
            Arbre::Nombre(v, _) => Ok(*v),
            Arbre::Bin(op, a, b) => {
                let g = a.valeur()?;
                let d = b.valeur()?;
                let r = match op {
                    '+' => g + d,
                    '-' => g - d,
                    '*' => g * d,
                    '/' => {
                        if d == 0.0 {
                            return Err(GenreErreur::DivisionParZero);
                        }
                        g / d
                    }
                    _ => g.powf(d),
                };
                if r.abs() > LIMITE_MAGNITUDE {
                    return Err(GenreErreur::Depassement);
                }
                Ok(r)
            }
        }
    }
}

fn gen_nombre(rng: &mut Rng) -> Arbre {
    // inclut 0 (division par zéro) et de grands nombres (dépassement)
    let t = match rng.pick(10) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2.5".to_string(),
        3 => "0.125".to_string(),
        4 => "999999".to_string(),
        5 => "123456789".to_string(),
        _ => format!("{}", rng.pick(100)),
    };
    let v = t.parse::<f64>().unwrap_or(0.0);
    Arbre::Nombre(v, t)
}

fn gen_arbre(rng: &mut Rng, depth: usize) -> Arbre {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }
    let op = match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    };
    let a = gen_arbre(rng, depth - 1);
    let b = if op == '^' {
        // exposant entier petit : pas de NaN, base négative permise
        let e = rng.pick(4);
        Arbre::Nombre(e as f64, e.to_string())
    } else {
        gen_arbre(rng, depth - 1)
    };
    Arbre::Bin(op, Box::new(a), Box::new(b))
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle_arbre() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let arbre = gen_arbre(&mut rng, 5);
        let expr = arbre.texte();
        let attendu = arbre.valeur();
        let obtenu = evaluer(&expr).map_err(|e| e.genre());

        match (&attendu, &obtenu) {
            (Ok(a), Ok(o)) => {
                let tol = 1e-9 * a.abs().max(1.0);
                assert!((a - o).abs() <= tol, "expr={expr} attendu={a} obtenu={o}");
                seen_ok += 1;
            }
            (Err(a), Err(o)) => {
                assert_eq!(a, o, "expr={expr}");
                seen_err += 1;
            }
            _ => panic!("expr={expr} attendu={attendu:?} obtenu={obtenu:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_texte_quelconque_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // alphabet volontairement bruité
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '-', '+', '*', '/', '^', '(', ')', ' ', 'x', ',', '€',
    ];

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let longueur = rng.pick(24) as usize;
        let expr: String = (0..longueur)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // jamais de panique, et deux appels identiques donnent la même chose
        let a = evaluer(&expr);
        let b = evaluer(&expr);
        assert_eq!(a, b, "expr={expr:?}");

        if let Ok(v) = a {
            assert!(!v.is_nan(), "NaN ne doit jamais sortir: expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join("+");
    budget(t0, max);

    assert_eq!(evaluer(&expr), Ok(1000.0));
}
