//! Split context text into sentence-like segments.

/// Split text at sentence-terminal punctuation followed by whitespace.
///
/// Unlike a display-oriented splitter, every non-blank fragment is kept so
/// that rejoining the segments loses no content.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let boundary = match chars.peek() {
            None => true,
            Some(next) => next.is_whitespace(),
        };
        if boundary {
            push_trimmed(&mut segments, &current);
            current.clear();
        }
    }
    push_trimmed(&mut segments, &current);

    segments
}

fn push_trimmed(segments: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let segments = split_segments("Revenue grew. Costs fell! Is churn up? Unclear");
        assert_eq!(
            segments,
            vec!["Revenue grew.", "Costs fell!", "Is churn up?", "Unclear"]
        );
    }

    #[test]
    fn decimals_do_not_split() {
        assert_eq!(split_segments("Margin was 3.5 percent. Fine.").len(), 2);
    }

    #[test]
    fn handles_empty_and_blank() {
        assert!(split_segments("").is_empty());
        assert!(split_segments("   ").is_empty());
    }
}
