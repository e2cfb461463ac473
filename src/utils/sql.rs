/// 转义 LIKE 模式中的通配符，让用户输入按字面匹配
///
/// 与存储层的 `LIKE ... ESCAPE '\'` 配套使用。
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
    fn test_plain_input_untouched() {
        assert_eq!(escape_like_pattern("computer science"), "computer science");
    }
}
