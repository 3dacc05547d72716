use crate::model::{Entry, EntryId};
use crate::repository::{CleanMode, CleanupPlan, CleanupTarget};

/// The scanned roots plus selection and expansion state.
///
/// Parent and child `selected` flags are independent. For size accounting
/// and cleanup a selected root always stands for its whole subtree; child
/// flags are consulted only under an unselected root.
#[derive(Debug, Default)]
pub struct SelectionTree {
    roots: Vec<Entry>,
    selected_size: u64,
}

impl SelectionTree {
    pub fn new(roots: Vec<Entry>) -> Self {
        let mut tree = Self { roots, selected_size: 0 };
        tree.recompute_selected_size();
        tree
    }

    /// Replace every root with a fresh scan; old flags are dropped with them
    pub fn replace(&mut self, roots: Vec<Entry>) {
        self.roots = roots;
        self.recompute_selected_size();
    }

    pub fn roots(&self) -> &[Entry] {
        &self.roots
    }

    pub fn selected_size(&self) -> u64 {
        self.selected_size
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        let root = self.roots.get(id.root)?;
        match id.child {
            None => Some(root),
            Some(c) => root.visible_children().get(c),
        }
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        let root = self.roots.get_mut(id.root)?;
        match id.child {
            None => Some(root),
            Some(c) if root.is_category => root.children.get_mut(c),
            Some(_) => None,
        }
    }

    /// Flip `expanded` on a category root. Returns whether anything changed.
    pub fn toggle_expand(&mut self, root: usize) -> bool {
        match self.roots.get_mut(root) {
            Some(entry) if entry.is_category => {
                entry.expanded = !entry.expanded;
                true
            }
            _ => false,
        }
    }

    /// Flip `selected` on one entry; a category root pushes its new value to every child
    pub fn toggle_select(&mut self, id: EntryId) {
        let Some(entry) = self.get_mut(id) else {
            return;
        };
        entry.selected = !entry.selected;
        if !id.is_child() && entry.is_category {
            let value = entry.selected;
            for child in &mut entry.children {
                child.selected = value;
            }
        }
        self.recompute_selected_size();
    }

    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    pub fn deselect_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, value: bool) {
        for root in &mut self.roots {
            root.selected = value;
            for child in &mut root.children {
                child.selected = value;
            }
        }
        self.recompute_selected_size();
    }

    /// Recount from scratch: selected roots at full size, otherwise their selected children
    pub fn recompute_selected_size(&mut self) {
        self.selected_size = self.selected_entries().map(|e| e.size).sum();
    }

    /// Entries a cleanup would target, in display order
    pub fn selected_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.roots.iter().flat_map(|root| {
            let own = root.selected.then_some(root);
            let children = if root.selected { &[][..] } else { root.visible_children() };
            own.into_iter().chain(children.iter().filter(|c| c.selected))
        })
    }

    pub fn cleanup_plan(&self, mode: CleanMode) -> CleanupPlan {
        CleanupPlan {
            mode,
            targets: self
                .selected_entries()
                .map(|e| CleanupTarget {
                    name: e.name.clone(),
                    path: e.path.clone(),
                    size: e.size,
                })
                .collect(),
        }
    }
}
