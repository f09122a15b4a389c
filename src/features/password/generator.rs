//! 密码生成核心逻辑
//!
//! 字符集拼装 + 均匀采样。随机源必须是密码学安全的，
//! 这里直接使用操作系统 CSPRNG（`OsRng`），不走可种子化的伪随机。

use rand::Rng;
use rand::rngs::OsRng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// 密码长度下限：无论请求多短，至少生成 4 个字符。
pub const MIN_LENGTH: i64 = 4;

/// 字符类开关。小写字母始终包含，其余三类可选。
#[derive(Debug, Clone, Copy)]
pub struct CharsetOptions {
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

/// 按开关拼出候选字符集。
fn build_alphabet(opts: CharsetOptions) -> Vec<u8> {
    let mut alphabet = LOWERCASE.to_vec();
    if opts.use_upper {
        alphabet.extend_from_slice(UPPERCASE);
    }
    if opts.use_digits {
        alphabet.extend_from_slice(DIGITS);
    }
    if opts.use_symbols {
        alphabet.extend_from_slice(SYMBOLS);
    }
    alphabet
}

/// 生成 `max(4, length)` 个字符的随机密码。
///
/// 每个字符独立地从候选字符集中均匀抽取。
pub fn generate(length: i64, opts: CharsetOptions) -> String {
    let alphabet = build_alphabet(opts);
    let count = length.max(MIN_LENGTH) as usize;

    let mut rng = OsRng;
    (0..count)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CharsetOptions, build_alphabet, generate};

    const ALL: CharsetOptions = CharsetOptions {
        use_upper: true,
        use_digits: true,
        use_symbols: true,
    };

    const LOWER_ONLY: CharsetOptions = CharsetOptions {
        use_upper: false,
        use_digits: false,
        use_symbols: false,
    };

    #[test]
    fn length_is_clamped_to_minimum_of_four() {
        assert_eq!(generate(0, ALL).chars().count(), 4);
        assert_eq!(generate(-7, ALL).chars().count(), 4);
        assert_eq!(generate(3, ALL).chars().count(), 4);
        assert_eq!(generate(16, ALL).chars().count(), 16);
        assert_eq!(generate(64, ALL).chars().count(), 64);
    }

    #[test]
    fn every_char_belongs_to_selected_alphabet() {
        let alphabet = build_alphabet(LOWER_ONLY);
        let password = generate(256, LOWER_ONLY);
        assert!(password.bytes().all(|b| alphabet.contains(&b)));
        assert!(password.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn full_alphabet_contains_all_four_classes() {
        let alphabet = build_alphabet(ALL);
        assert!(alphabet.iter().any(u8::is_ascii_lowercase));
        assert!(alphabet.iter().any(u8::is_ascii_uppercase));
        assert!(alphabet.iter().any(u8::is_ascii_digit));
        assert!(alphabet.contains(&b'@'));
    }

    #[test]
    fn consecutive_calls_differ_with_overwhelming_probability() {
        // 64 字符、全字符集下碰撞概率可忽略不计
        let a = generate(64, ALL);
        let b = generate(64, ALL);
        assert_ne!(a, b);
    }
}
