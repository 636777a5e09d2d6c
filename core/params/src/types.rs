use serde::{Deserialize, Serialize};

/// Label used for a value that has no matching entry in `texts[]`.
pub const UNKNOWN_VALUE_LABEL: &str = "<Unknown Value>";

pub const DEFAULT_PLATFORM_TAG: &str = "__ALTIS__";

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Tag of the only `#ifdef` region whose lines are processed.
    pub platform_tag: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            platform_tag: DEFAULT_PLATFORM_TAG.to_string(),
        }
    }
}

/// Half-open line interval `[start, end)` holding the body of `class Params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn slice<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Field set of one parameter block while its lines are still being read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub values: Option<Vec<i64>>,
    pub default_value: Option<i64>,
    pub value_text: Option<Vec<String>>,
    pub disabled: bool,
}

impl ParameterDraft {
    /// True when no recognized field line was applied to this draft.
    pub fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.values.is_none()
            && self.default_value.is_none()
            && self.value_text.is_none()
    }

    pub fn display_name(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParamValue {
    pub name: String,
    pub value: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub id: String,
    pub title: String,
    pub default_value: i64,
    pub values: Vec<ParamValue>,
}

impl Parameter {
    /// Option whose value equals the default, if any.
    pub fn default_option(&self) -> Option<&ParamValue> {
        self.values.iter().find(|v| v.value == self.default_value)
    }
}
