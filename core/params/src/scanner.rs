use log::debug;

use crate::error::{BlockAnchor, ParamsError, Result};
use crate::types::BlockRange;

const BLOCK_NAME: &str = "Params";
const CLOSE_MARKER: &str = "};";

/// `class Params`, `class Params {`, `class Params: Base {` ...
fn is_declaration(line: &str) -> bool {
    line.strip_prefix("class")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(|rest| {
            rest.trim_start()
                .split(|c: char| c.is_whitespace() || c == '{' || c == ':')
                .next()
                == Some(BLOCK_NAME)
        })
        .unwrap_or(false)
}

/// Finds the body of the first top-level `class Params` block.
///
/// `start` is the line after the declaration, `end` the first later line that
/// is exactly the close marker. Only the first occurrence of each anchor is
/// considered.
pub fn locate<S: AsRef<str>>(lines: &[S]) -> Result<BlockRange> {
    let declaration = lines
        .iter()
        .position(|line| is_declaration(line.as_ref()))
        .ok_or(ParamsError::BlockNotFound(BlockAnchor::Declaration))?;

    let start = declaration + 1;
    let end = lines[start..]
        .iter()
        .position(|line| line.as_ref().trim_end() == CLOSE_MARKER)
        .map(|offset| start + offset)
        .ok_or(ParamsError::BlockNotFound(BlockAnchor::Close))?;

    let range = BlockRange { start, end };
    debug!(
        "Params block spans lines {}..{} ({} lines)",
        start,
        end,
        range.len()
    );
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_block() {
        let lines = [
            "author = \"me\";",
            "class Header {",
            "};",
            "class Params {",
            "\tclass fVar {",
            "\t};",
            "};",
            "class CfgDebriefing {",
            "};",
        ];
        let range = locate(&lines).unwrap();
        assert_eq!(range, BlockRange { start: 4, end: 6 });
        assert_eq!(range.len(), 2);
        assert_eq!(range.slice(&lines), &["\tclass fVar {", "\t};"]);
    }

    #[test]
    fn test_empty_block() {
        let lines = ["class Params {", "};"];
        let range = locate(&lines).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn test_declaration_must_match_whole_name() {
        let lines = ["class ParamsExtra {", "};"];
        assert!(matches!(
            locate(&lines),
            Err(ParamsError::BlockNotFound(BlockAnchor::Declaration))
        ));
    }

    #[test]
    fn test_missing_close() {
        let lines = ["class Params {", "\tclass fVar {", "\t};"];
        assert!(matches!(
            locate(&lines),
            Err(ParamsError::BlockNotFound(BlockAnchor::Close))
        ));
    }

    #[test]
    fn test_close_before_declaration_is_ignored() {
        let lines = ["};", "class Params {"];
        assert!(matches!(
            locate(&lines),
            Err(ParamsError::BlockNotFound(BlockAnchor::Close))
        ));
    }
}
