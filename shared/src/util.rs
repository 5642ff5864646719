/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Alphabet for confirmation codes: digits + uppercase letters (base 36)
const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a short booking reference: `len` random base-36 chars, uppercase.
///
/// No uniqueness guarantee. The reservation log is append-only and never
/// read back by the booking flow, so a collision only means two records
/// share a reference.
pub fn confirmation_code(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_code_is_uppercase_base36() {
        for _ in 0..200 {
            let code = confirmation_code(6);
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn confirmation_code_respects_length() {
        assert_eq!(confirmation_code(10).len(), 10);
        assert!(confirmation_code(0).is_empty());
    }
}
