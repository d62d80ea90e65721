pub fn is_all_uppercase(value: &str) -> bool {
    value == value.to_uppercase()
}

pub fn is_all_lowercase(value: &str) -> bool {
    value == value.to_lowercase()
}

pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(input.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    out
}

/// Capitalize the first letter of each space-separated word. Empty tokens
/// survive the round trip, so runs of spaces are preserved.
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sentence_case(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(input.len());
    out.extend(first.to_uppercase());
    out.push_str(&chars.as_str().to_lowercase());
    out
}

pub fn human_bytes(n: usize) -> String {
    if n < 1024 {
        return format!("{n} B");
    }
    let kb = n as f64 / 1024.0;
    if kb < 1024.0 {
        return format!("{kb:.1} KB");
    }
    let mb = kb / 1024.0;
    format!("{mb:.1} MB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_test_counts_digits_and_symbols() {
        assert!(is_all_uppercase("DEX"));
        assert!(is_all_uppercase("DEX-2"));
        assert!(!is_all_uppercase("DeX"));
        assert!(is_all_lowercase("dex flow"));
        assert!(!is_all_lowercase("Dex"));
    }

    #[test]
    fn capitalize_words_keeps_remainder_untouched() {
        assert_eq!(capitalize_words("dex flow"), "Dex Flow");
        assert_eq!(capitalize_words("o'brien"), "O'brien");
        assert_eq!(capitalize_words("a  b"), "A  B");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn sentence_case_lowers_the_tail() {
        assert_eq!(sentence_case("DEX"), "Dex");
        assert_eq!(sentence_case("DEX FLOW"), "Dex flow");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn human_bytes_scales_units() {
        assert_eq!(human_bytes(512), "512 B");
        assert_eq!(human_bytes(2048), "2.0 KB");
        assert_eq!(human_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
