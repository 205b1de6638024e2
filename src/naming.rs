//! File-naming conventions for binders and their expanded artifacts.

/// Suffix appended to a binder's stem to name its expanded artifact.
pub const EXPANDED_SUFFIX: &str = "_FULL";

/// File name prefix shared by all binders (matched case-insensitively).
const BINDER_PREFIX: &str = "binder";

/// Markdown extension, including the dot (matched case-insensitively).
const MARKDOWN_EXT: &str = ".md";

/// Returns `true` if `name` is a binder source file.
///
/// A binder is `binder*.md` in any ASCII case that is not itself an expanded
/// artifact.
#[must_use]
pub fn is_binder_name(name: &str) -> bool {
    has_prefix_ignore_case(name, BINDER_PREFIX)
        && has_suffix_ignore_case(name, MARKDOWN_EXT)
        && !is_expanded_name(name)
}

/// Returns `true` if `name` is an expanded artifact (`*_FULL.md`).
///
/// The suffix check is case-sensitive: `binder3C_full.md` is a binder that
/// expands to `binder3C_full_FULL.md`.
#[must_use]
pub fn is_expanded_name(name: &str) -> bool {
    name.strip_suffix(MARKDOWN_EXT).is_some_and(|stem| stem.ends_with(EXPANDED_SUFFIX))
}

/// Returns the expanded artifact name for a binder file name.
///
/// The extension is normalized to `.md`.
#[must_use]
pub fn expanded_name_for(binder_name: &str) -> String {
    let stem = if has_suffix_ignore_case(binder_name, MARKDOWN_EXT) {
        &binder_name[..binder_name.len() - MARKDOWN_EXT.len()]
    } else {
        binder_name
    };
    format!("{stem}{EXPANDED_SUFFIX}{MARKDOWN_EXT}")
}

fn has_prefix_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    let Some(start) = name.len().checked_sub(suffix.len()) else {
        return false;
    };
    name.is_char_boundary(start) && name[start..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_binders_in_any_case() {
        assert!(is_binder_name("binderA.md"));
        assert!(is_binder_name("Binder3B.MD"));
        assert!(is_binder_name("binder.md"));
        assert!(!is_binder_name("notes.md"));
        assert!(!is_binder_name("binderA.txt"));
        assert!(!is_binder_name("my_binder.md"));
    }

    #[test]
    fn expanded_artifacts_are_not_binders() {
        assert!(is_expanded_name("binderA_FULL.md"));
        assert!(!is_binder_name("binderA_FULL.md"));
        assert!(!is_expanded_name("binder3C_full.md"));
        assert!(is_binder_name("binder3C_full.md"));
    }

    #[test]
    fn expanded_name_appends_suffix_to_stem() {
        assert_eq!(expanded_name_for("binderA.md"), "binderA_FULL.md");
        assert_eq!(expanded_name_for("binder3C_full.md"), "binder3C_full_FULL.md");
        assert_eq!(expanded_name_for("Binder9.MD"), "Binder9_FULL.md");
    }

    #[test]
    fn multibyte_names_do_not_panic() {
        assert!(!is_binder_name("bindé"));
        assert!(!is_binder_name("é"));
        assert!(is_binder_name("binder_é.md"));
    }
}
