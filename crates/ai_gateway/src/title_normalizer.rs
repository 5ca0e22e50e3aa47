//! Turns free-form completion text into a short, ordered list of titles.

/// Upper bound on the number of titles returned to callers.
pub const MAX_TITLES: usize = 5;

/// Parse `raw` as a JSON array of strings, falling back to non-empty lines.
///
/// Never fails: anything that is not a JSON string array is split on line
/// breaks instead. The result holds at most [`MAX_TITLES`] entries.
pub fn normalize_titles(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(strip_code_fence(raw)) {
        Ok(titles) => titles.into_iter().take(MAX_TITLES).collect(),
        Err(e) => {
            log::warn!("Failed to parse titles as a JSON array, splitting lines instead: {e}");
            split_lines(raw)
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"));

    match body {
        Some(body) => body.strip_suffix("```").unwrap_or(body).trim(),
        None => trimmed,
    }
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_TITLES)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json_array() {
        let titles = normalize_titles(r#"["One 🔥", "Two 😱", "Three"]"#);
        assert_eq!(titles, vec!["One 🔥", "Two 😱", "Three"]);
    }

    #[test]
    fn parses_json_inside_code_fence() {
        let raw = "```json\n[\"A\", \"B\"]\n```";
        assert_eq!(normalize_titles(raw), vec!["A", "B"]);

        let raw = "  ```\n[\"C\"]\n```  ";
        assert_eq!(normalize_titles(raw), vec!["C"]);
    }

    #[test]
    fn keeps_only_first_five_json_entries() {
        let raw = r#"["1", "2", "3", "4", "5", "6", "7"]"#;
        assert_eq!(normalize_titles(raw), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn empty_json_array_yields_no_titles() {
        assert!(normalize_titles("[]").is_empty());
    }

    #[test]
    fn falls_back_to_non_empty_lines() {
        let raw = "Here you go:\n\n1. First\n   \n2. Second\n3. Third\n4. Fourth\n5. Fifth\n6. Sixth";
        let titles = normalize_titles(raw);
        assert_eq!(
            titles,
            vec!["Here you go:", "1. First", "2. Second", "3. Third", "4. Fourth"]
        );
    }

    #[test]
    fn non_string_array_falls_back_to_lines() {
        let titles = normalize_titles("[1, 2, 3]");
        assert_eq!(titles, vec!["[1, 2, 3]"]);
    }

    #[test]
    fn empty_input_yields_no_titles() {
        assert!(normalize_titles("").is_empty());
        assert!(normalize_titles("  \n \n").is_empty());
    }
}
