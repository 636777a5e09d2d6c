//! Per-parameter field extraction from canonical `class Params` body lines.

use log::{debug, trace};
use std::borrow::Cow;
use std::collections::BTreeMap;
use stringtable::StringTable;

use crate::error::{ParamsError, Result};
use crate::types::ParameterDraft;

const KEY_SENTINEL: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    Close,
    Identifier,
    Title,
    Values,
    Default,
    Texts,
}

enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    fn matches(&self, line: &str) -> bool {
        match self {
            Pattern::Exact(text) => line == *text,
            Pattern::Prefix(text) => line.starts_with(text),
        }
    }
}

struct LineRule {
    pattern: Pattern,
    shape: LineShape,
}

/// Evaluated top to bottom, first match wins.
const RULES: &[LineRule] = &[
    LineRule {
        pattern: Pattern::Exact("\t};"),
        shape: LineShape::Close,
    },
    LineRule {
        pattern: Pattern::Prefix("\tclass"),
        shape: LineShape::Identifier,
    },
    LineRule {
        pattern: Pattern::Prefix("\t\ttitle"),
        shape: LineShape::Title,
    },
    LineRule {
        pattern: Pattern::Prefix("\t\tvalues[]"),
        shape: LineShape::Values,
    },
    LineRule {
        pattern: Pattern::Prefix("\t\tdefault"),
        shape: LineShape::Default,
    },
    LineRule {
        pattern: Pattern::Prefix("\t\ttexts[]"),
        shape: LineShape::Texts,
    },
];

pub fn classify(line: &str) -> Option<LineShape> {
    RULES
        .iter()
        .find(|rule| rule.pattern.matches(line))
        .map(|rule| rule.shape)
}

fn remove_whitespace_and_quotes(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '"')
        .collect()
}

/// Drops the outer quotes and collapses `""` escapes to `"`.
fn unquote(text: &str) -> Cow<'_, str> {
    let text = text.trim();
    match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(text),
    }
}

/// Right-hand side of `name = value;`, without the trailing `;`.
fn assignment_value(line: &str) -> &str {
    let value = line.split_once('=').map(|(_, v)| v).unwrap_or("");
    let value = value.trim();
    value.strip_suffix(';').unwrap_or(value).trim_end()
}

/// Content between the outer `{` and `}` of an array assignment.
fn array_content(line: &str) -> &str {
    let value = assignment_value(line);
    let value = value.strip_prefix('{').unwrap_or(value);
    value.strip_suffix('}').unwrap_or(value)
}

/// Splits on commas outside string literals.
fn split_elements(content: &str) -> Vec<Cow<'_, str>> {
    let mut elements = Vec::new();
    let mut in_quote = false;
    let mut start = 0;
    for (i, c) in content.char_indices() {
        match c {
            '"' => in_quote = !in_quote,
            ',' if !in_quote => {
                elements.push(unquote(&content[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    elements.push(unquote(&content[start..]));
    elements
}

fn parse_integer(token: &str, field: &'static str, draft: &ParameterDraft) -> Result<i64> {
    let cleaned = remove_whitespace_and_quotes(token);
    cleaned.parse::<i64>().map_err(|_| ParamsError::NumericParse {
        field,
        parameter: draft.display_name().to_string(),
        token: token.to_string(),
    })
}

/// Resolves `$KEY` through the table, literal text is returned as is.
fn resolve_text(text: &str, table: &StringTable) -> Result<String> {
    match text.strip_prefix(KEY_SENTINEL) {
        Some(key) => Ok(table.lookup(key)?.to_string()),
        None => Ok(text.to_string()),
    }
}

fn parse_identifier(line: &str) -> String {
    let rest = line.trim_start().strip_prefix("class").unwrap_or(line);
    let name = rest.split(['{', ':']).next().unwrap_or(rest);
    remove_whitespace_and_quotes(name)
}

fn parse_title(line: &str, table: &StringTable) -> Result<String> {
    resolve_text(&unquote(assignment_value(line)), table)
}

fn parse_values(line: &str, draft: &ParameterDraft) -> Result<Vec<i64>> {
    let content = array_content(line);
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_elements(content)
        .into_iter()
        .map(|token| parse_integer(&token, "values", draft))
        .collect()
}

fn parse_default(line: &str, draft: &ParameterDraft) -> Result<i64> {
    parse_integer(assignment_value(line), "default", draft)
}

/// Returns the resolved labels and whether the parameter is disabled.
fn parse_texts(line: &str, table: &StringTable) -> Result<(Vec<String>, bool)> {
    let content = array_content(line);
    if remove_whitespace_and_quotes(content).is_empty() {
        return Ok((Vec::new(), true));
    }
    let texts = split_elements(content)
        .into_iter()
        .map(|text| resolve_text(&text, table))
        .collect::<Result<Vec<_>>>()?;
    Ok((texts, false))
}

/// Accumulates one draft per parameter block, keyed by block position.
pub struct Extractor<'a> {
    table: &'a StringTable,
    index: usize,
    drafts: BTreeMap<usize, ParameterDraft>,
}

impl<'a> Extractor<'a> {
    pub fn new(table: &'a StringTable) -> Self {
        Self {
            table,
            index: 0,
            drafts: BTreeMap::new(),
        }
    }

    pub fn feed(&mut self, line: &str) -> Result<()> {
        let index = self.index;
        let table = self.table;
        let draft = self.drafts.entry(index).or_default();

        let Some(shape) = classify(line) else {
            trace!("Ignoring line {:?}", line);
            return Ok(());
        };

        match shape {
            LineShape::Close => {
                debug!("Parameter #{} ({}) closed", index, draft.display_name());
                self.index += 1;
            }
            LineShape::Identifier => draft.id = Some(parse_identifier(line)),
            LineShape::Title => draft.title = Some(parse_title(line, table)?),
            LineShape::Values => draft.values = Some(parse_values(line, draft)?),
            LineShape::Default => draft.default_value = Some(parse_default(line, draft)?),
            LineShape::Texts => {
                let (texts, disabled) = parse_texts(line, table)?;
                draft.value_text = Some(texts);
                draft.disabled = disabled;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> BTreeMap<usize, ParameterDraft> {
        self.drafts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stringtable::StringTableError;

    fn table() -> StringTable {
        let mut table = StringTable::new();
        table.insert("STR_A", "Variable");
        table.insert("STR_B", "On");
        table
    }

    fn extract(lines: &[&str]) -> Result<BTreeMap<usize, ParameterDraft>> {
        let table = table();
        let mut extractor = Extractor::new(&table);
        for line in lines {
            extractor.feed(line)?;
        }
        Ok(extractor.finish())
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("\t};"), Some(LineShape::Close));
        assert_eq!(classify("\tclass fVar {"), Some(LineShape::Identifier));
        assert_eq!(classify("\t\ttitle = \"$STR_A\";"), Some(LineShape::Title));
        assert_eq!(classify("\t\tvalues[] = {0,1};"), Some(LineShape::Values));
        assert_eq!(classify("\t\tdefault = 0;"), Some(LineShape::Default));
        assert_eq!(classify("\t\ttexts[] = {};"), Some(LineShape::Texts));
        assert_eq!(classify("\t\tisGlobal = 1;"), None);
        assert_eq!(classify("\t\t};"), None);
    }

    #[test]
    fn test_extract_full_block() {
        let drafts = extract(&[
            "\tclass fVar {",
            "\t\ttitle = \"$STR_A\";",
            "\t\tvalues[] = {0, 1};",
            "\t\tdefault = 0;",
            "\t\ttexts[] = {\"$STR_B\", \"Very Off\"};",
            "\t};",
        ])
        .unwrap();

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[&0];
        assert_eq!(draft.id.as_deref(), Some("fVar"));
        assert_eq!(draft.title.as_deref(), Some("Variable"));
        assert_eq!(draft.values, Some(vec![0, 1]));
        assert_eq!(draft.default_value, Some(0));
        assert_eq!(
            draft.value_text,
            Some(vec!["On".to_string(), "Very Off".to_string()])
        );
        assert!(!draft.disabled);
    }

    #[test]
    fn test_identifier_strips_inheritance_and_quotes() {
        assert_eq!(parse_identifier("\tclass fVar: fBase {"), "fVar");
        assert_eq!(parse_identifier("\tclass \"fVar\" {"), "fVar");
    }

    #[test]
    fn test_literal_title() {
        let drafts = extract(&["\tclass fVar {", "\t\ttitle = \"Plain title\";"]).unwrap();
        assert_eq!(drafts[&0].title.as_deref(), Some("Plain title"));
    }

    #[test]
    fn test_empty_texts_disable_parameter() {
        let drafts = extract(&["\tclass a {", "\t\ttexts[] = {};", "\t};"]).unwrap();
        assert!(drafts[&0].disabled);
        assert_eq!(drafts[&0].value_text, Some(vec![]));

        let drafts = extract(&["\tclass a {", "\t\ttexts[] = {\"\"};", "\t};"]).unwrap();
        assert!(drafts[&0].disabled);
    }

    #[test]
    fn test_empty_values_list() {
        let drafts = extract(&["\tclass a {", "\t\tvalues[] = {};"]).unwrap();
        assert_eq!(drafts[&0].values, Some(vec![]));
    }

    #[test]
    fn test_signed_and_quoted_numbers() {
        let drafts = extract(&[
            "\tclass a {",
            "\t\tvalues[] = {-1, +2, \"3\"};",
            "\t\tdefault = -1;",
        ])
        .unwrap();
        assert_eq!(drafts[&0].values, Some(vec![-1, 2, 3]));
        assert_eq!(drafts[&0].default_value, Some(-1));
    }

    #[test]
    fn test_bad_value_names_parameter() {
        let err = extract(&["\tclass fVar {", "\t\tvalues[] = {0, abc};"]).unwrap_err();
        match err {
            ParamsError::NumericParse {
                field,
                parameter,
                token,
            } => {
                assert_eq!(field, "values");
                assert_eq!(parameter, "fVar");
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_bad_default_names_parameter() {
        let err = extract(&["\tclass fVar {", "\t\tdefault = 1.5;"]).unwrap_err();
        assert!(matches!(
            err,
            ParamsError::NumericParse { field: "default", ref parameter, .. } if parameter == "fVar"
        ));
    }

    #[test]
    fn test_missing_title_key() {
        let err = extract(&["\tclass fVar {", "\t\ttitle = \"$STR_NOPE\";"]).unwrap_err();
        match err {
            ParamsError::StringTable(StringTableError::MissingKey(key)) => {
                assert_eq!(key, "STR_NOPE")
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_text_key() {
        let err = extract(&["\tclass fVar {", "\t\ttexts[] = {\"$STR_NOPE\"};"]).unwrap_err();
        assert!(matches!(
            err,
            ParamsError::StringTable(StringTableError::MissingKey(_))
        ));
    }

    #[test]
    fn test_close_advances_index_and_unknown_lines_are_ignored() {
        let drafts = extract(&[
            "\tclass a {",
            "\t\tisGlobal = 1;",
            "\t};",
            "\tclass b {",
            "\t\tdefault = 2;",
            "\t};",
        ])
        .unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[&0].id.as_deref(), Some("a"));
        assert_eq!(drafts[&1].id.as_deref(), Some("b"));
        assert_eq!(drafts[&1].default_value, Some(2));
    }

    #[test]
    fn test_doubled_quotes_collapse() {
        let drafts = extract(&[
            "\tclass fVar {",
            "\t\ttitle = \"say \"\"hi\"\"\";",
            "\t\ttexts[] = {\"a \"\"b\"\", c\", \"d\"};",
        ])
        .unwrap();
        assert_eq!(drafts[&0].title.as_deref(), Some("say \"hi\""));
        assert_eq!(
            drafts[&0].value_text,
            Some(vec!["a \"b\", c".to_string(), "d".to_string()])
        );
    }

    #[test]
    fn test_split_elements_respects_quotes() {
        assert_eq!(
            split_elements(r#""a, b", "c",d "#),
            vec!["a, b", "c", "d"]
        );
    }
}
