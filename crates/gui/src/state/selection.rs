use shared::ObjectId;

/// Object selection state. The editor manipulates one object at a time, so
/// selection is a single optional id.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<ObjectId>,
}

impl SelectionState {
    /// Currently selected object, if any
    pub fn current(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Check if the given object is selected
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    /// Select an object (replaces any previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
