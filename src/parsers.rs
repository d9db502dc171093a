// src/parsers.rs

/// Parse a byte count with an optional `K`/`M` (binary) suffix, e.g. `64K`.
pub fn parse_byte_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let (digits, mul) = match s.chars().last() {
        Some('k' | 'K') => (&s[..s.len() - 1], 1024),
        Some('m' | 'M') => (&s[..s.len() - 1], 1024 * 1024),
        _ => (s, 1),
    };
    let n: usize = digits
        .replace('_', "")
        .parse()
        .map_err(|_| format!("invalid size: {s}"))?;
    let bytes = n.checked_mul(mul).ok_or_else(|| format!("size too large: {s}"))?;
    if bytes == 0 {
        return Err("size must be positive".to_string());
    }
    Ok(bytes)
}

pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_numbers_parse(n in 1usize..1_000_000_000) {
            prop_assert_eq!(parse_byte_size(&n.to_string()).unwrap(), n);
        }

        #[test]
        fn k_suffix_multiplies(n in 1usize..1_000_000) {
            prop_assert_eq!(parse_byte_size(&format!("{n}K")).unwrap(), n * 1024);
        }
    }
}
