//! Random patient generation

use std::rc::Rc;

use medsim_logic::constants::identity::{MAX_AGE, MIN_AGE};
use rand::Rng;

use super::names::generate_name;
use crate::components::{Disease, Identity, Patient, Sex};

/// Random sex, sex-appropriate name, and age in `[18, 85]`.
pub fn random_identity(rng: &mut impl Rng) -> Identity {
    let sex = if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };

    Identity {
        name: generate_name(sex, rng),
        sex,
        age: rng.gen_range(MIN_AGE..=MAX_AGE),
    }
}

/// A patient with a random disease, starting health and identity.
/// `None` when there are no diseases to choose from.
pub fn generate_random_patient(diseases: &[Rc<Disease>], rng: &mut impl Rng) -> Option<Patient> {
    if diseases.is_empty() {
        return None;
    }
    let disease = Rc::clone(&diseases[rng.gen_range(0..diseases.len())]);
    let patient = Patient::new(disease, rng).with_identity(random_identity(rng));

    Some(patient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_random_patient() {
        let mut rng = StdRng::seed_from_u64(42);
        let diseases = vec![
            Rc::new(Disease::new("Influenza").with_health_range(60, 70)),
            Rc::new(Disease::new("Asthma").with_health_range(30, 40)),
        ];

        for _ in 0..50 {
            let p = generate_random_patient(&diseases, &mut rng).unwrap();
            let identity = p.identity.as_ref().unwrap();
            assert!((18..=85).contains(&identity.age));
            assert!(!identity.name.is_empty());
            let range = p.disease().initial_health_range;
            assert!((range.min..=range.max).contains(&p.health()));
        }
    }

    #[test]
    fn test_no_diseases_no_patient() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_random_patient(&[], &mut rng).is_none());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let diseases = vec![
            Rc::new(Disease::new("Influenza")),
            Rc::new(Disease::new("Asthma")),
        ];
        let a = generate_random_patient(&diseases, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_random_patient(&diseases, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.identity, b.identity);
        assert_eq!(a.disease().name, b.disease().name);
        assert_eq!(a.health(), b.health());
    }
}
