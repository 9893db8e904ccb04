//! Shared formatting helpers for labels and pagination text.

/// Uppercase the first character, as status badges show labels.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Page 2 of 3"`.
pub fn page_info(current: usize, total: usize) -> String {
    format!("Page {} of {}", current, total)
}

/// Visible-row range for "Showing X of Y": `"11-20"`, or `"0"` when empty.
pub fn showing_range(range: Option<(usize, usize)>) -> String {
    match range {
        Some((first, last)) => format!("{}-{}", first, last),
        None => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("critical"), "Critical");
        assert_eq!(capitalize("investigating"), "Investigating");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_page_info() {
        assert_eq!(page_info(1, 1), "Page 1 of 1");
        assert_eq!(page_info(2, 3), "Page 2 of 3");
    }

    #[test]
    fn test_showing_range() {
        assert_eq!(showing_range(Some((1, 10))), "1-10");
        assert_eq!(showing_range(None), "0");
    }
}
