/// 转义 LIKE 模式中的特殊字符，避免用户输入被当作通配符
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("Gryffindor"), "Gryffindor");
    }
}
