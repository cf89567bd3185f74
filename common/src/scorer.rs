//! 文字列類似度
//!
//! 語順を正規化した Indel 比率（0-100）で商品名を比較する。
//! 「品牌+规格」と「规格+品牌」のような語順違いを減点しないため、
//! 比較前に空白区切りのトークンを並べ替える。

/// トークンを並べ替えて連結する
pub fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// 語順を無視した類似度 (0-100)
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Indel距離に基づく類似度 (0-100)
///
/// `200 * LCS / (len(a) + len(b))`。長さは文字（Unicodeスカラー値）単位。
/// 両方空なら100、片方だけ空なら0。
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    200.0 * lcs_len(&a, &b) as f64 / total as f64
}

/// 最長共通部分列の長さ
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // 短い方を列にして1行分だけ保持
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &lc in long {
        let mut diag = 0;
        for (j, &sc) in short.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if lc == sc {
                diag + 1
            } else {
                up.max(row[j])
            };
            diag = up;
        }
    }

    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ratio_identical() {
        assert!(approx(ratio("雪碧 500ml", "雪碧 500ml"), 100.0));
    }

    #[test]
    fn test_ratio_empty() {
        assert!(approx(ratio("", ""), 100.0));
        assert!(approx(ratio("abc", ""), 0.0));
        assert!(approx(ratio("", "abc"), 0.0));
    }

    #[test]
    fn test_ratio_disjoint() {
        assert!(approx(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_ratio_partial() {
        // LCS("abcd", "abed") = 3 -> 200*3/8
        assert!(approx(ratio("abcd", "abed"), 75.0));
    }

    #[test]
    fn test_lcs_symmetric() {
        let a: Vec<char> = "可口可乐500ml".chars().collect();
        let b: Vec<char> = "百事可乐 330ml".chars().collect();
        assert_eq!(lcs_len(&a, &b), lcs_len(&b, &a));
    }

    #[test]
    fn test_sort_tokens() {
        assert_eq!(sort_tokens("可口可乐  330ml"), "330ml 可口可乐");
        assert_eq!(sort_tokens("  b a  c "), "a b c");
        assert_eq!(sort_tokens(""), "");
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        assert!(approx(token_sort_ratio("hello world", "world hello"), 100.0));
    }

    #[test]
    fn test_token_sort_beats_plain_ratio() {
        let sorted = token_sort_ratio("可口可乐 330ml", "330ml可口可乐");
        let plain = ratio("可口可乐 330ml", "330ml可口可乐");
        // 200*9/19 と 200*5/19
        assert!(approx(sorted, 1800.0 / 19.0));
        assert!(approx(plain, 1000.0 / 19.0));
        assert!(sorted > plain + 30.0);
    }

    #[test]
    fn test_token_sort_bounds() {
        let pairs = [
            ("", ""),
            ("a", ""),
            ("农夫山泉 550ml", "农夫山泉饮用天然水 550ml"),
            ("Coca Cola", "coca cola"),
        ];
        for (a, b) in pairs {
            let s = token_sort_ratio(a, b);
            assert!((0.0..=100.0).contains(&s), "{} vs {} -> {}", a, b, s);
            assert!(approx(s, token_sort_ratio(b, a)));
        }
    }
}
