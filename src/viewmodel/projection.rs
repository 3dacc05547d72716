use crate::model::{Entry, EntryId};

/// One visible line of the list: an entry address plus its owning root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: EntryId,
}

impl DisplayRow {
    #[inline]
    pub fn is_child(&self) -> bool {
        self.id.is_child()
    }

    #[inline]
    pub fn root_index(&self) -> usize {
        self.id.root
    }
}

/// Flatten roots into display rows under a case-insensitive filter.
///
/// Roots keep their order and are shown when they match (or the filter is
/// empty). An expanded category follows with its matching children.
/// Expansion state is read, never changed.
pub fn project(roots: &[Entry], filter: &str) -> Vec<DisplayRow> {
    let needle = filter.to_lowercase();
    let mut rows = Vec::with_capacity(roots.len());

    for (i, root) in roots.iter().enumerate() {
        if !root.matches(&needle) {
            continue;
        }
        rows.push(DisplayRow { id: EntryId::root(i) });

        if root.expanded && root.is_category {
            rows.extend(
                root.children
                    .iter()
                    .enumerate()
                    .filter(|(_, child)| child.matches(&needle))
                    .map(|(c, _)| DisplayRow { id: EntryId::child(i, c) }),
            );
        }
    }

    rows
}
