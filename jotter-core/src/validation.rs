//! Draft validation for note creation.
//!
//! The same policy the service's form surface enforces: title 3..=50
//! chars, content up to 500 chars (empty allowed), tag restricted to the
//! fixed enumeration (guaranteed by the `Tag` type). Lengths are counted
//! in characters, not bytes.

use crate::error::ValidationError;
use crate::note::NoteDraft;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

/// Validate a draft against the creation policy.
///
/// Collects every violation instead of stopping at the first, so a form
/// can annotate all offending fields in one pass.
pub fn validate_draft(draft: &NoteDraft) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let title_len = draft.title.chars().count();
    if draft.title.trim().is_empty() {
        errors.push(ValidationError::RequiredFieldMissing { field: "title" });
    } else if title_len < TITLE_MIN_CHARS {
        errors.push(ValidationError::TooShort {
            field: "title",
            len: title_len,
            min: TITLE_MIN_CHARS,
        });
    } else if title_len > TITLE_MAX_CHARS {
        errors.push(ValidationError::TooLong {
            field: "title",
            len: title_len,
            max: TITLE_MAX_CHARS,
        });
    }

    let content_len = draft.content.chars().count();
    if content_len > CONTENT_MAX_CHARS {
        errors.push(ValidationError::TooLong {
            field: "content",
            len: content_len,
            max: CONTENT_MAX_CHARS,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Tag;
    use proptest::prelude::*;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            tag: Tag::Todo,
        }
    }

    #[test]
    fn test_empty_title_is_required_not_too_short() {
        let errors = validate_draft(&draft("", "")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RequiredFieldMissing { field: "title" }]
        );
    }

    #[test]
    fn test_title_bounds() {
        assert!(validate_draft(&draft("ab", "")).is_err());
        assert!(validate_draft(&draft("abc", "")).is_ok());
        assert!(validate_draft(&draft(&"x".repeat(50), "")).is_ok());
        assert!(validate_draft(&draft(&"x".repeat(51), "")).is_err());
    }

    #[test]
    fn test_content_bound_and_optionality() {
        assert!(validate_draft(&draft("note", "")).is_ok());
        assert!(validate_draft(&draft("note", &"y".repeat(500))).is_ok());
        let errors = validate_draft(&draft("note", &"y".repeat(501))).unwrap_err();
        assert_eq!(errors[0].field(), "content");
    }

    #[test]
    fn test_violations_are_collected_per_field() {
        let errors = validate_draft(&draft("", &"y".repeat(501))).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["title", "content"]);
    }

    #[test]
    fn test_lengths_are_counted_in_chars() {
        // 3 multi-byte chars: valid title even though it is 9 bytes.
        assert!(validate_draft(&draft("äöü", "")).is_ok());
    }

    proptest! {
        #[test]
        fn valid_drafts_always_accepted(
            title_len in TITLE_MIN_CHARS..=TITLE_MAX_CHARS,
            content_len in 0usize..=CONTENT_MAX_CHARS,
            tag_idx in 0usize..Tag::ALL.len(),
        ) {
            let d = NoteDraft {
                title: "t".repeat(title_len),
                content: "c".repeat(content_len),
                tag: Tag::ALL[tag_idx],
            };
            prop_assert!(validate_draft(&d).is_ok());
        }

        #[test]
        fn out_of_range_titles_always_rejected(title_len in 51usize..200) {
            let d = draft(&"t".repeat(title_len), "");
            prop_assert!(validate_draft(&d).is_err());
        }
    }
}
