use log::{debug, warn};
use std::collections::BTreeMap;

use crate::error::{ParamsError, Result};
use crate::types::{ParamValue, Parameter, ParameterDraft, UNKNOWN_VALUE_LABEL};

fn required<T>(field: Option<T>, index: usize, name: &'static str) -> Result<T> {
    field.ok_or(ParamsError::IncompleteParameter { index, field: name })
}

/// Freezes drafts into parameters in block order, dropping disabled ones.
pub fn assemble(drafts: BTreeMap<usize, ParameterDraft>) -> Result<Vec<Parameter>> {
    let mut params = Vec::with_capacity(drafts.len());

    for (index, draft) in drafts {
        if draft.is_blank() {
            warn!("Parameter #{} has no recognized fields, skipped", index);
            continue;
        }
        if draft.disabled {
            debug!("Parameter {} is disabled, skipped", draft.display_name());
            continue;
        }

        let id = required(draft.id, index, "id")?;
        let title = required(draft.title, index, "title")?;
        let default_value = required(draft.default_value, index, "default")?;
        let labels = draft.value_text.unwrap_or_default();

        let values = draft
            .values
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, value)| ParamValue {
                name: labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_VALUE_LABEL.to_string()),
                value,
            })
            .collect();

        params.push(Parameter {
            id,
            title,
            default_value,
            values,
        });
    }

    Ok(params)
}
