use rand::Rng;

/// Alphabet reservation codes are drawn from.
pub const RESERVATION_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every reservation code.
pub const RESERVATION_CODE_LEN: usize = 6;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a reservation code: 6 characters drawn uniformly from `A-Z0-9`.
///
/// Codes are independent of existing ones; collisions are caught by the
/// store's unique index.
pub fn generate_reservation_code() -> String {
    generate_reservation_code_with(&mut rand::thread_rng())
}

/// Same as [`generate_reservation_code`] with a caller-supplied RNG.
pub fn generate_reservation_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RESERVATION_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..RESERVATION_CODE_ALPHABET.len());
            RESERVATION_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Whether `code` has the shape of a generated reservation code.
pub fn is_reservation_code(code: &str) -> bool {
    code.len() == RESERVATION_CODE_LEN && code.bytes().all(|b| RESERVATION_CODE_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_code_shape() {
        for _ in 0..500 {
            let code = generate_reservation_code();
            assert!(is_reservation_code(&code), "bad code {code}");
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_reservation_code_with(&mut StdRng::seed_from_u64(7));
        let b = generate_reservation_code_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_codes_cover_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(generate_reservation_code_with(&mut rng).bytes());
        }
        assert_eq!(seen.len(), RESERVATION_CODE_ALPHABET.len());
    }

    #[test]
    fn test_is_reservation_code_rejects_lowercase_and_length() {
        assert!(is_reservation_code("AB12CD"));
        assert!(!is_reservation_code("ab12cd"));
        assert!(!is_reservation_code("AB12C"));
        assert!(!is_reservation_code("AB12CD7"));
        assert!(!is_reservation_code("AB-2CD"));
    }
}
