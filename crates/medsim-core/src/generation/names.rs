//! Name generation utilities

use rand::Rng;

use crate::components::Sex;

/// Generate a random full name for a patient of the given sex
pub fn generate_name(sex: Sex, rng: &mut impl Rng) -> String {
    let given = match sex {
        Sex::Male => MALE_NAMES[rng.gen_range(0..MALE_NAMES.len())],
        Sex::Female => FEMALE_NAMES[rng.gen_range(0..FEMALE_NAMES.len())],
    };
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];

    format!("{} {}", given, family)
}

static MALE_NAMES: &[&str] = &[
    "Luca",
    "Marco",
    "Giovanni",
    "Andrea",
    "Paolo",
    "James",
    "David",
    "Carlos",
    "Kenji",
    "Omar",
    "Pavel",
    "Raj",
];

static FEMALE_NAMES: &[&str] = &[
    "Anna",
    "Giulia",
    "Francesca",
    "Maria",
    "Elena",
    "Sarah",
    "Aisha",
    "Yuki",
    "Ingrid",
    "Priya",
    "Fatima",
    "Olga",
];

static FAMILY_NAMES: &[&str] = &[
    "Rossi",
    "Bianchi",
    "Romano",
    "Esposito",
    "Colombo",
    "Smith",
    "Garcia",
    "Nakamura",
    "Patel",
    "Ivanov",
    "Okonkwo",
    "Johansson",
    "Nguyen",
    "Kowalski",
    "Hassan",
    "De Silva",
];
