//! Scenario stubs derived from outline example rows.
//!
//! Stubs exist so that tag selection can pick individual example rows. Step
//! text keeps its `<placeholders>`; substitution belongs to the runner.

use crate::model::{Examples, Scenario, ScenarioOutline};
use crate::tags::merge_tag_sets;

/// Build one stub per example row, blocks and rows in document order.
///
/// Each stub carries the outline's tags followed by unseen tags of its
/// examples block, the outline's steps and description, and the outline's
/// line. It is named `"{outline} -- @{block}.{row} {examples}"` with 1-based
/// indices; the examples name is left out when the block has none.
pub(crate) fn expand(outline: &ScenarioOutline) -> Vec<Scenario> {
    outline
        .examples
        .iter()
        .enumerate()
        .flat_map(|(block_idx, examples)| {
            let rows = examples.table.as_ref().map_or(0, |table| table.rows.len());
            (0..rows).map(move |row_idx| stub(outline, examples, block_idx + 1, row_idx + 1))
        })
        .collect()
}

fn stub(outline: &ScenarioOutline, examples: &Examples, block: usize, row: usize) -> Scenario {
    let name = examples
        .name
        .as_deref()
        .filter(|label| !label.is_empty())
        .map_or_else(
            || format!("{} -- @{block}.{row}", outline.name),
            |label| format!("{} -- @{block}.{row} {label}", outline.name),
        );
    Scenario {
        keyword: outline.keyword.clone(),
        name,
        description: outline.description.clone(),
        tags: merge_tag_sets(&outline.tags, &examples.tags),
        steps: outline.steps.clone(),
        line: outline.line,
    }
}
