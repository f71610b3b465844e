//! The per-item request dispatcher.
//!
//! Work items are processed strictly in order, one at a time; an item's
//! HTTP call completes (or fails) before the next item starts. Each item
//! independently selects its resource and operation through its parameter
//! bag, so a single run can mix task and project operations.
//!
//! Failure policy is decided by the caller: with `continue_on_failure` a
//! failed item becomes an `{"error": ...}` record paired with its index and
//! the run continues; without it, the first failure stops the run and is
//! returned wrapped with the failing item's index.

use serde_json::{json, Value};
use tracing::warn;

use crate::error::{Result, TodoistError};
use crate::service::TodoistService;
use crate::types::{OperationRequest, ResponseItem, WorkItem};

/// Normalize one decoded response body into output records.
///
/// Array responses fan out into one record per element, preserving element
/// order; an empty response becomes `{}`; anything else is wrapped as-is.
fn normalize(response: Value) -> Vec<ResponseItem> {
    match response {
        Value::Array(elements) => elements.into_iter().map(ResponseItem::data).collect(),
        Value::Null => vec![ResponseItem::data(json!({}))],
        other => vec![ResponseItem::data(other)],
    }
}

/// Process a batch of work items sequentially.
///
/// Successful items append their normalized response records; a `getMany`
/// response's elements land contiguously at the originating item's
/// position.
///
/// # Errors
///
/// In fail-fast mode (`continue_on_failure == false`) the first parameter
/// or HTTP failure is returned as [`TodoistError::Item`] and no later item
/// is dispatched.
pub async fn run_items(
    service: &TodoistService,
    items: &[WorkItem],
    continue_on_failure: bool,
) -> Result<Vec<ResponseItem>> {
    let mut output = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let result = match OperationRequest::from_params(&item.params) {
            Ok(op) => service.execute(&op).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => output.extend(normalize(response)),
            Err(e) if continue_on_failure => {
                warn!(index, error = %e, "work item failed, continuing");
                output.push(ResponseItem::error(e.to_string(), index));
            }
            Err(e) => return Err(TodoistError::for_item(index, e)),
        }
    }

    Ok(output)
}

/// Process a batch and wrap the records in the single-output-port
/// structure consumed by host orchestration.
pub async fn execute(
    service: &TodoistService,
    items: &[WorkItem],
    continue_on_failure: bool,
) -> Result<Vec<Vec<ResponseItem>>> {
    let output = run_items(service, items, continue_on_failure).await?;
    Ok(vec![output])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_fans_out_arrays_preserving_order() {
        let response = json!([{ "id": "1" }, { "id": "2" }, { "id": "3" }]);
        let items = normalize(response);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].json, json!({ "id": "1" }));
        assert_eq!(items[1].json, json!({ "id": "2" }));
        assert_eq!(items[2].json, json!({ "id": "3" }));
        assert!(items.iter().all(|i| i.paired_item.is_none()));
    }

    #[test]
    fn normalize_wraps_objects_as_single_record() {
        let items = normalize(json!({ "id": "1", "content": "Buy milk" }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].json, json!({ "id": "1", "content": "Buy milk" }));
    }

    #[test]
    fn normalize_turns_empty_response_into_empty_object() {
        let items = normalize(Value::Null);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].json, json!({}));
    }

    #[test]
    fn normalize_empty_array_produces_no_records() {
        assert!(normalize(json!([])).is_empty());
    }
}
