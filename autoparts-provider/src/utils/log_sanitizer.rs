//! Log sanitization utilities
//!
//! Search responses can run to hundreds of rows; debug logs only keep a
//! bounded preview of each body.

/// Maximum number of bytes of a response body kept in a log line.
const PREVIEW_LIMIT: usize = 512;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}

/// Bounded preview of a response body for logging.
pub fn preview_body(body: &str) -> String {
    if body.len() <= PREVIEW_LIMIT {
        return body.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &body[..floor_char_boundary(body, PREVIEW_LIMIT)],
        body.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"[{"id":1,"descripcion":"filtro de aceite"}]"#;
        assert_eq!(preview_body(s), s);
    }

    #[test]
    fn long_body_truncated_with_total() {
        let s = "x".repeat(PREVIEW_LIMIT + 10);
        let out = preview_body(&s);
        assert!(out.ends_with(&format!("total {} bytes]", PREVIEW_LIMIT + 10)));
        assert!(out.len() < s.len() + 40);
    }

    #[test]
    fn accented_text_is_not_split() {
        // 'ñ' and 'ó' are two bytes each
        let s = "año válvula ".repeat(100);
        let out = preview_body(&s);
        assert!(out.contains("[truncated"));
    }
}
