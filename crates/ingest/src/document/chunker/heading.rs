//! Structural heading detection for plain-text textbooks.
//!
//! Three kinds of heading lines are recognised, checked in priority order:
//!
//! 1. any line mentioning the word "glossary" (case-insensitive),
//! 2. chapter markers such as `CHAPTER 4.`,
//! 3. numbered sections such as `4.2 Cell Structure`.
//!
//! Classification is a pure function of the line and the chapter currently
//! tracked by the caller; carrying context between lines is the segmenter's job.

use std::sync::OnceLock;

use regex::Regex;

pub const GLOSSARY_LABEL: &str = "Glossary";

fn glossary_re() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)\bglossary\b").expect("Invalid regex"))
}

fn chapter_re() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^\s*CHAPTER\s+(\d+)\.").expect("Invalid regex"))
}

fn section_re() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)+)\s+(.+)$").expect("Invalid regex"))
}

/// Labels introduced by a heading line. All `None` for body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingMatch {
    pub chapter: Option<String>,
    pub section: Option<String>,
    pub heading: Option<String>,
}

impl HeadingMatch {
    pub fn is_heading(&self) -> bool {
        self.chapter.is_some() || self.section.is_some() || self.heading.is_some()
    }
}

/// Classify a single line.
///
/// `current_chapter` is echoed back as the chapter of a numbered section, so a
/// section heading seen before any chapter marker carries no chapter.
pub fn classify_heading(line: &str, current_chapter: Option<&str>) -> HeadingMatch {
    let stripped = line.trim();

    if glossary_re().is_match(stripped) {
        return HeadingMatch {
            chapter: Some(GLOSSARY_LABEL.to_string()),
            section: None,
            heading: Some(GLOSSARY_LABEL.to_string()),
        };
    }

    if let Some(caps) = chapter_re().captures(stripped) {
        let number = &caps[1];
        return HeadingMatch {
            chapter: Some(number.to_string()),
            section: None,
            heading: Some(format!("Chapter {number}")),
        };
    }

    if let Some(caps) = section_re().captures(stripped) {
        return HeadingMatch {
            chapter: current_chapter.map(str::to_string),
            section: Some(caps[1].to_string()),
            heading: Some(caps[2].trim().to_string()),
        };
    }

    HeadingMatch::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(m: &HeadingMatch) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            m.chapter.as_deref(),
            m.section.as_deref(),
            m.heading.as_deref(),
        )
    }

    #[test]
    fn chapter_marker() {
        let m = classify_heading("CHAPTER 12. The Nervous System\n", None);
        assert_eq!(triple(&m), (Some("12"), None, Some("Chapter 12")));
    }

    #[test]
    fn chapter_marker_case_insensitive_and_indented() {
        let m = classify_heading("   chapter 3.", Some("2"));
        assert_eq!(triple(&m), (Some("3"), None, Some("Chapter 3")));
    }

    #[test]
    fn chapter_without_period_is_body_text() {
        let m = classify_heading("Chapter 3 reviews the basics", None);
        assert!(!m.is_heading());
    }

    #[test]
    fn numbered_section_keeps_current_chapter() {
        let m = classify_heading("1.2 Structural Organization of the Human Body", Some("1"));
        assert_eq!(
            triple(&m),
            (Some("1"), Some("1.2"), Some("Structural Organization of the Human Body"))
        );
    }

    #[test]
    fn deep_section_label() {
        let m = classify_heading("  4.10.3   Membrane Transport  ", Some("4"));
        assert_eq!(triple(&m), (Some("4"), Some("4.10.3"), Some("Membrane Transport")));
    }

    #[test]
    fn section_before_any_chapter() {
        let m = classify_heading("2.1 Atoms", None);
        assert_eq!(triple(&m), (None, Some("2.1"), Some("Atoms")));
    }

    #[test]
    fn section_label_without_title_is_body_text() {
        assert!(!classify_heading("2.1", Some("2")).is_heading());
        assert!(!classify_heading("2.1   ", Some("2")).is_heading());
    }

    #[test]
    fn single_number_is_not_a_section() {
        assert!(!classify_heading("3 Cells and Tissues", Some("3")).is_heading());
    }

    #[test]
    fn glossary_anywhere_in_line() {
        let m = classify_heading("   glossary terms\n", Some("7"));
        assert_eq!(triple(&m), (Some("Glossary"), None, Some("Glossary")));
    }

    #[test]
    fn glossary_overrides_chapter_and_section() {
        let m = classify_heading("CHAPTER 9. Glossary", Some("8"));
        assert_eq!(triple(&m), (Some("Glossary"), None, Some("Glossary")));

        let m = classify_heading("9.1 Glossary of Terms", Some("9"));
        assert_eq!(triple(&m), (Some("Glossary"), None, Some("Glossary")));
    }

    #[test]
    fn glossary_must_be_a_whole_word() {
        assert!(!classify_heading("See the glossaryish appendix", None).is_heading());
    }

    #[test]
    fn plain_text_is_not_a_heading() {
        let m = classify_heading("The heart pumps blood.", Some("1"));
        assert_eq!(m, HeadingMatch::default());
        assert!(!m.is_heading());
        assert!(!classify_heading("", None).is_heading());
    }
}
