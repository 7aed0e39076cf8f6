use rand::Rng;

pub const CODE_LENGTH: usize = 8;

/// A-Z plus 1-9, minus the glyphs easy to misread over the shoulder
/// (I, O, L look like 1, 0, 1 in most fonts).
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ123456789";

/// Draws one candidate code. Uniqueness against stored sessions is the
/// caller's job (retry until no collision).
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_and_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            for c in code.bytes() {
                assert!(CODE_ALPHABET.contains(&c), "Unexpected character {} in code {}", c as char, code);
            }
        }
    }

    #[test]
    fn test_alphabet_excludes_confusable_glyphs() {
        for banned in [b'I', b'O', b'L', b'0'] {
            assert!(!CODE_ALPHABET.contains(&banned));
        }
        assert_eq!(CODE_ALPHABET.len(), 32);
    }
}
