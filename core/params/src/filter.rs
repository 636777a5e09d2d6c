//! Conditional-compilation filter.
//!
//! Only `#ifdef <platform_tag>` regions are processed. Every other directive
//! region is skipped, and regions do not nest: the first `#endif` closes
//! whatever is open.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionState {
    #[default]
    Outside,
    InsideInactive,
    InsideActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Endif,
    PlatformOpen,
    Alternate,
    Other,
}

fn classify(line: &str, platform_tag: &str) -> Option<Directive> {
    let line = line.trim();
    if !line.starts_with('#') {
        return None;
    }
    let mut words = line.split_whitespace();
    let directive = match words.next() {
        Some("#endif") => Directive::Endif,
        Some("#ifdef") if words.next() == Some(platform_tag) => Directive::PlatformOpen,
        Some(word) if word == "#else" || word.starts_with("#elif") => Directive::Alternate,
        _ => Directive::Other,
    };
    Some(directive)
}

#[derive(Debug, Clone)]
pub struct DirectiveFilter {
    platform_tag: String,
    state: RegionState,
}

impl DirectiveFilter {
    pub fn new(platform_tag: &str) -> Self {
        Self {
            platform_tag: platform_tag.to_string(),
            state: RegionState::Outside,
        }
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Advances the state by one line and reports whether the line carries
    /// content for the extractor.
    pub fn accept(&mut self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        let Some(directive) = classify(line, &self.platform_tag) else {
            return self.state != RegionState::InsideInactive;
        };

        let next = match directive {
            Directive::Endif => RegionState::Outside,
            Directive::PlatformOpen => RegionState::InsideActive,
            Directive::Alternate => RegionState::InsideInactive,
            Directive::Other => match self.state {
                RegionState::Outside => RegionState::InsideInactive,
                inside => inside,
            },
        };
        if next != self.state {
            debug!("{:?}: {:?} -> {:?}", line.trim(), self.state, next);
        }
        self.state = next;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Vec<String> {
        let mut filter = DirectiveFilter::new("__ALTIS__");
        lines
            .iter()
            .filter(|line| filter.accept(line))
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn test_plain_lines_pass() {
        assert_eq!(run(&["a", "", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_platform_region_is_processed() {
        let out = run(&["a", "#ifdef __ALTIS__", "b", "#endif", "c"]);
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_other_regions_are_skipped() {
        let out = run(&[
            "a",
            "#ifdef __TANOA__",
            "b",
            "#endif",
            "#if 0",
            "c",
            "#endif",
            "#ifndef __ALTIS__",
            "d",
            "#endif",
            "e",
        ]);
        assert_eq!(out, vec!["a", "e"]);
    }

    #[test]
    fn test_else_branch_of_platform_region_is_skipped() {
        let out = run(&["#ifdef __ALTIS__", "a", "#else", "b", "#endif", "c"]);
        assert_eq!(out, vec!["a", "c"]);
    }

    #[test]
    fn test_stray_endif_and_other_directive() {
        let mut filter = DirectiveFilter::new("__ALTIS__");
        assert!(!filter.accept("#endif"));
        assert_eq!(filter.state(), RegionState::Outside);

        assert!(!filter.accept("#define FOO 1"));
        assert_eq!(filter.state(), RegionState::InsideInactive);
        assert!(!filter.accept("a"));

        assert!(!filter.accept("#ifdef __ALTIS__"));
        assert_eq!(filter.state(), RegionState::InsideActive);
        assert!(!filter.accept("#define BAR 2"));
        assert_eq!(filter.state(), RegionState::InsideActive);
        assert!(filter.accept("b"));
    }

    #[test]
    fn test_empty_line_keeps_state() {
        let mut filter = DirectiveFilter::new("__ALTIS__");
        filter.accept("#ifdef __OTHER__");
        assert!(!filter.accept(""));
        assert_eq!(filter.state(), RegionState::InsideInactive);
    }

    #[test]
    fn test_custom_platform_tag() {
        let mut filter = DirectiveFilter::new("__TANOA__");
        filter.accept("#ifdef __TANOA__");
        assert!(filter.accept("a"));
        filter.accept("#endif");
        filter.accept("#ifdef __ALTIS__");
        assert!(!filter.accept("b"));
    }
}
