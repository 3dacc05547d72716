/// Trait for navigable list views with a cursor
pub trait Selectable {
    /// Returns the number of items in the list
    fn len(&self) -> usize;

    /// Returns the cursor index
    fn selected(&self) -> usize;

    /// Sets the cursor index directly
    fn set_selected(&mut self, index: usize);

    /// Returns true if the list is empty
    #[allow(dead_code)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the cursor up, stopping at the first item
    fn move_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(1));
    }

    /// Move the cursor down, stopping at the last item
    fn move_down(&mut self) {
        let len = self.len();
        let selected = self.selected();
        if selected + 1 < len {
            self.set_selected(selected + 1);
        }
    }

    /// Pull the cursor back into range after the list shrank
    fn clamp_selected(&mut self) {
        let len = self.len();
        if self.selected() >= len {
            self.set_selected(len.saturating_sub(1));
        }
    }
}
