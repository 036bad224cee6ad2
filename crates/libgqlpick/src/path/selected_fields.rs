use crate::path::FieldPath;
use crate::path::PathSegment;
use indexmap::IndexMap;

/// The selections requested beneath one position of an operation, built by
/// folding together every [`FieldPath`] that passes through it.
///
/// Children are keyed by the raw path segment that selected them
/// (`name`, `__alias_fullName_name`, `__fragment_UserFields`,
/// `__on_Organization`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectedFields {
    /// A renamed field. `selection` describes what is wanted beneath it.
    Alias {
        alias: String,
        selection: Box<SelectedFields>,
    },

    /// A spread of the named fragment.
    FragmentSpread(String),

    /// The position is selected in full: a path ended here, so everything
    /// beneath it is kept.
    Leaf,

    SubTree(IndexMap<String, SelectedFields>),
}
impl SelectedFields {
    /// Fold the tails (everything after the root field) of `paths` into one
    /// tree for that root field.
    ///
    /// A path that consists only of the root field contributes nothing.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a FieldPath>) -> Self {
        let mut root = Self::SubTree(IndexMap::new());
        for path in paths {
            if !path.tail().is_empty() {
                root.insert(path.tail());
            }
        }
        root
    }

    pub fn insert(&mut self, segments: &[PathSegment]) {
        match self {
            Self::Leaf | Self::FragmentSpread(_) => (),

            Self::Alias { selection, .. } => selection.insert(segments),

            Self::SubTree(_) if segments.is_empty() => *self = Self::Leaf,

            Self::SubTree(children) => {
                let Some((head, rest)) = segments.split_first() else {
                    return;
                };
                children
                    .entry(head.to_raw_string())
                    .or_insert_with(|| Self::empty_node_for(head))
                    .insert(rest);
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Merge `other` into this tree: a [`SelectedFields::Leaf`] on either
    /// side wins, subtrees merge key by key.
    pub fn merge(&mut self, other: SelectedFields) {
        match (self, other) {
            (Self::Leaf, _) | (Self::FragmentSpread(_), _) => (),

            (this, Self::Leaf) => *this = Self::Leaf,

            (Self::Alias { selection, .. }, Self::Alias { selection: other_selection, .. }) =>
                selection.merge(*other_selection),

            (Self::SubTree(children), Self::SubTree(other_children)) =>
                for (key, other_child) in other_children {
                    match children.get_mut(&key) {
                        Some(child) => child.merge(other_child),
                        None => {
                            children.insert(key, other_child);
                        },
                    }
                },

            // Mismatched shapes can only arise under distinct keys, which
            // never get merged with each other.
            (_, _) => (),
        }
    }

    fn empty_node_for(segment: &PathSegment) -> Self {
        match segment {
            PathSegment::Alias { alias, .. } => Self::Alias {
                alias: alias.to_string(),
                selection: Box::new(Self::SubTree(IndexMap::new())),
            },
            PathSegment::Fragment(fragment_name) =>
                Self::FragmentSpread(fragment_name.to_string()),
            PathSegment::Field(_) | PathSegment::TypeCondition(_) =>
                Self::SubTree(IndexMap::new()),
        }
    }
}
