use serde::Deserialize;

/// Snapshot of page/navigation state delivered asynchronously by the host.
/// Read-only input; the controller never writes back to it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PageReference {
    #[serde(default)]
    pub state: PageState,
}

/// State parameters carried by a page reference. The record id may arrive
/// under the component-scoped key or the generic one.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PageState {
    #[serde(rename = "c__recordId")]
    pub component_record_id: Option<String>,
    #[serde(rename = "recordId")]
    pub record_id: Option<String>,
}

impl PageState {
    /// The component-scoped key is checked first; an empty value under either
    /// key is treated as absent.
    pub fn effective_record_id(&self) -> Option<&str> {
        [
            self.component_record_id.as_deref(),
            self.record_id.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|id| !id.is_empty())
    }
}

impl PageReference {
    pub fn effective_record_id(&self) -> Option<&str> {
        self.state.effective_record_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(component: Option<&str>, generic: Option<&str>) -> PageState {
        PageState {
            component_record_id: component.map(str::to_string),
            record_id: generic.map(str::to_string),
        }
    }

    #[test]
    fn component_scoped_key_wins() {
        let s = state(Some("a01"), Some("a02"));
        assert_eq!(s.effective_record_id(), Some("a01"));
    }

    #[test]
    fn falls_back_to_generic_key() {
        assert_eq!(state(None, Some("a02")).effective_record_id(), Some("a02"));
        assert_eq!(
            state(Some(""), Some("a02")).effective_record_id(),
            Some("a02")
        );
    }

    #[test]
    fn empty_state_yields_nothing() {
        assert_eq!(state(None, None).effective_record_id(), None);
        assert_eq!(state(Some(""), Some("")).effective_record_id(), None);
    }

    #[test]
    fn deserializes_host_payload() {
        let page_ref: PageReference =
            serde_json::from_str(r#"{"state":{"c__recordId":"701xx0000000001"}}"#).unwrap();
        assert_eq!(page_ref.effective_record_id(), Some("701xx0000000001"));

        let empty: PageReference = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.effective_record_id(), None);
    }
}
