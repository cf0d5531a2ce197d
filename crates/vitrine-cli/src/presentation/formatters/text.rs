pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 1 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Eletrônicos", 20), "Eletrônicos");
        assert_eq!(truncate("Eletrônicos", 6), "Eletr…");
        assert_eq!(truncate("abc", 1), "a");
    }
}
