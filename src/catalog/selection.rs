use crate::catalog::snapshot::CatalogSnapshot;
use crate::catalog::types::TrackedObject;

/// Transient id of the object the operator clicked on. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn select(&mut self, object_id: impl Into<String>) {
        self.selected = Some(object_id.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected object, if it survived the latest refresh.
    pub fn resolve<'a>(&self, snapshot: &'a CatalogSnapshot) -> Option<&'a TrackedObject> {
        self.selected_id().and_then(|id| snapshot.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::summary::fixtures::object;
    use crate::catalog::types::ObjectStatus;

    #[test]
    fn resolves_against_latest_snapshot() {
        let mut selection = Selection::default();
        assert!(selection.resolve(&CatalogSnapshot::default()).is_none());

        selection.select("sat_iss");
        let before = CatalogSnapshot::new(vec![object("sat_iss", 420.0, ObjectStatus::Active)], vec![]);
        assert_eq!(selection.resolve(&before).map(|o| o.id.as_str()), Some("sat_iss"));

        let after = CatalogSnapshot::new(vec![object("sat_demo1", 550.0, ObjectStatus::Active)], vec![]);
        assert!(selection.resolve(&after).is_none());
        assert_eq!(selection.selected_id(), Some("sat_iss"));

        selection.clear();
        assert_eq!(selection.selected_id(), None);
    }
}
