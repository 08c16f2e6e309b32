//! Synthetic passenger names for bulk test data.

use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a random `"<given> <family>"` name.
pub fn generate_name(rng: &mut impl Rng) -> String {
    // Both pools are non-empty constants.
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("Anon");
    let family = FAMILY_NAMES.choose(rng).copied().unwrap_or("Traveller");
    format!("{given} {family}")
}

static GIVEN_NAMES: &[&str] = &[
    "James",
    "Mary",
    "David",
    "Elizabeth",
    "Charles",
    "Sarah",
    "Wei",
    "Yuki",
    "Aisha",
    "Pavel",
    "Ingrid",
    "Carlos",
    "Fatima",
    "Kenji",
    "Priya",
    "Omar",
    "Nadia",
    "Diego",
    "Leila",
    "Felix",
];

static FAMILY_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Jones",
    "Davis",
    "Wilson",
    "Anderson",
    "Chen",
    "Nakamura",
    "Patel",
    "Garcia",
    "Okonkwo",
    "Nguyen",
    "Santos",
    "Singh",
    "Rodriguez",
    "O'Brien",
    "De Silva",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_name() {
        let mut rng = rand::thread_rng();
        let name = generate_name(&mut rng);

        let (given, family) = name.split_once(' ').unwrap();
        assert!(GIVEN_NAMES.contains(&given));
        assert!(FAMILY_NAMES.contains(&family));
        assert_eq!(name.trim(), name);
    }

    #[test]
    fn test_name_variety() {
        let mut rng = StdRng::seed_from_u64(9);
        let names: HashSet<String> = (0..100).map(|_| generate_name(&mut rng)).collect();
        assert!(names.len() > 30);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(5);
            (0..10).map(|_| generate_name(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(5);
            (0..10).map(|_| generate_name(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
