use sea_orm::ColumnTrait;
use sea_orm::sea_query::{IntoCondition, LikeExpr};

/// 转义 LIKE 模式中的通配符（`%`、`_`）与转义符本身
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 子串搜索条件：按字面量匹配 `term`，通配符经转义后以 `ESCAPE '\'` 生效
pub fn contains_literal<C: ColumnTrait>(column: C, term: &str) -> impl IntoCondition {
    column.like(LikeExpr::new(format!("%{}%", escape_like_pattern(term))).escape('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_like_pattern("Martínez"), "Martínez");
    }

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
