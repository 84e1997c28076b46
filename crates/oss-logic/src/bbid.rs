//! BBID: mock investor-tracking identifiers, `BBID-YYYY-XXXXXX`.

use rand::Rng;

const PREFIX: &str = "BBID";
const SUFFIX_LEN: usize = 6;
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Last year that fits the four-digit year field.
pub const MAX_YEAR: u16 = 9999;

/// Generate a BBID for `year` using the caller's RNG.
///
/// The suffix avoids look-alike characters (`0`/`O`, `1`/`I`). Years past
/// [`MAX_YEAR`] are clamped so the id always validates.
pub fn generate_bbid(rng: &mut impl Rng, year: u16) -> String {
    debug_assert!(year <= MAX_YEAR, "BBID year {year} has more than four digits");
    let year = year.min(MAX_YEAR);
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{PREFIX}-{year:04}-{suffix}")
}

/// Whether `text` is a well-formed BBID.
///
/// Accepts any upper-case alphanumeric suffix so identifiers minted
/// elsewhere still validate.
pub fn is_valid_bbid(text: &str) -> bool {
    let mut parts = text.split('-');
    let (Some(prefix), Some(year), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    prefix == PREFIX
        && year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_ids_are_valid() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let id = generate_bbid(&mut rng, 2026);
            assert!(is_valid_bbid(&id), "{id}");
            assert!(id.starts_with("BBID-2026-"));
        }
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = generate_bbid(&mut StdRng::seed_from_u64(11), 2025);
        let b = generate_bbid(&mut StdRng::seed_from_u64(11), 2025);
        assert_eq!(a, b);
    }

    #[test]
    fn test_year_is_zero_padded() {
        let id = generate_bbid(&mut StdRng::seed_from_u64(1), 999);
        assert!(id.starts_with("BBID-0999-"));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_five_digit_year_is_clamped() {
        let id = generate_bbid(&mut StdRng::seed_from_u64(1), 10_000);
        assert!(id.starts_with("BBID-9999-"), "{id}");
        assert!(is_valid_bbid(&id));
    }

    #[test]
    #[should_panic(expected = "more than four digits")]
    #[cfg(debug_assertions)]
    fn test_five_digit_year_trips_debug_assert() {
        generate_bbid(&mut StdRng::seed_from_u64(1), 10_000);
    }

    #[test]
    fn test_max_year_validates() {
        let id = generate_bbid(&mut StdRng::seed_from_u64(1), MAX_YEAR);
        assert!(is_valid_bbid(&id), "{id}");
    }

    #[test]
    fn test_validation_rejects() {
        assert!(is_valid_bbid("BBID-2024-A1B2C3"));
        assert!(!is_valid_bbid("bbid-2024-A1B2C3"));
        assert!(!is_valid_bbid("BBID-24-A1B2C3"));
        assert!(!is_valid_bbid("BBID-2024-a1b2c3"));
        assert!(!is_valid_bbid("BBID-2024-A1B2C"));
        assert!(!is_valid_bbid("BBID-2024-A1B2C3-X"));
        assert!(!is_valid_bbid("BBID-2024"));
        assert!(!is_valid_bbid(""));
    }
}
