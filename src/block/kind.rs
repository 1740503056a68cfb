//! Block kinds and the bounded classification history.

use smallvec::SmallVec;

/// The structural kind assigned to one input line.
///
/// Comparison is always on the typed variant, never on rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading with its level (leading `#` count, not clamped).
    Heading(u8),
    /// Image line (`![...`), rendered by the inline pass.
    Image,
    /// Footnote definition with its numeric marker.
    Footnote(u32),
    /// First line of a blockquote.
    Blockquote,
    /// Further lines of an open blockquote.
    BlockquoteContinuation,
    /// First item of an unordered list.
    UnorderedList,
    /// Sibling item of an open unordered list.
    UnorderedListItem,
    /// First item of an ordered list, with its `start` attribute value.
    OrderedList(u32),
    /// Sibling item of an open ordered list.
    OrderedListItem,
    /// Plain prose paragraph.
    Paragraph,
    /// Raw HTML passthrough.
    RawHtml,
    /// Blank or otherwise unclassified line.
    Blank,
    /// Second blank in a row, collapsed to a `<br />`.
    LineBreak,
    /// Series-index directive (`{path}`), expanded to a linked list.
    SeriesIndex,
}

impl BlockKind {
    /// Whether this kind is a list opener or a list item.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::UnorderedList
                | Self::OrderedList(_)
                | Self::UnorderedListItem
                | Self::OrderedListItem
        )
    }

    /// Whether this kind is a list item (either flavor).
    pub fn is_list_item(self) -> bool {
        matches!(self, Self::UnorderedListItem | Self::OrderedListItem)
    }

    /// Whether this kind is part of a blockquote run.
    pub fn is_blockquote(self) -> bool {
        matches!(self, Self::Blockquote | Self::BlockquoteContinuation)
    }
}

/// The last up-to-3 classified kinds, oldest evicted on overflow.
///
/// Lookback only; entries are never mutated retroactively. One history
/// belongs to exactly one generation pass.
#[derive(Debug, Default)]
pub struct History {
    kinds: SmallVec<[BlockKind; 3]>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly classified kind, evicting the oldest beyond 3.
    pub fn push(&mut self, kind: BlockKind) {
        if self.kinds.len() == 3 {
            self.kinds.remove(0);
        }
        self.kinds.push(kind);
    }

    /// Most recent kind, i.e. the current line once it has been pushed.
    pub fn current(&self) -> Option<BlockKind> {
        self.kinds.last().copied()
    }

    /// The kind before the current one (the previous line's block).
    pub fn previous(&self) -> Option<BlockKind> {
        self.kinds.len().checked_sub(2).map(|i| self.kinds[i])
    }

    /// Whether any recorded kind satisfies the predicate.
    pub fn any(&self, pred: impl Fn(BlockKind) -> bool) -> bool {
        self.kinds.iter().any(|&k| pred(k))
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_bounded_at_three() {
        let mut h = History::new();
        h.push(BlockKind::Paragraph);
        h.push(BlockKind::Blank);
        h.push(BlockKind::UnorderedList);
        h.push(BlockKind::UnorderedListItem);
        assert_eq!(h.len(), 3);
        // Oldest (Paragraph) evicted.
        assert!(!h.any(|k| k == BlockKind::Paragraph));
        assert_eq!(h.current(), Some(BlockKind::UnorderedListItem));
        assert_eq!(h.previous(), Some(BlockKind::UnorderedList));
    }

    #[test]
    fn history_previous_on_short_history() {
        let mut h = History::new();
        assert_eq!(h.previous(), None);
        h.push(BlockKind::Paragraph);
        assert_eq!(h.previous(), None);
        h.push(BlockKind::Blank);
        assert_eq!(h.previous(), Some(BlockKind::Paragraph));
    }

    #[test]
    fn list_kind_predicates() {
        assert!(BlockKind::UnorderedList.is_list());
        assert!(BlockKind::OrderedList(4).is_list());
        assert!(BlockKind::OrderedListItem.is_list_item());
        assert!(!BlockKind::Paragraph.is_list());
        assert!(BlockKind::BlockquoteContinuation.is_blockquote());
    }

    #[test]
    fn kind_size_stays_small() {
        assert!(std::mem::size_of::<BlockKind>() <= 8);
    }
}
