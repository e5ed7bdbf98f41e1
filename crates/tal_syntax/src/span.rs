//! Source spans.

use miette::SourceSpan;

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Return `true` if `offset` falls inside this span (end-inclusive, so a cursor just after a word hits it).
    pub fn touches(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both_spans() {
        assert_eq!(Span::new(4, 6).merge(Span::new(1, 3)), Span::new(1, 6));
    }

    #[test]
    fn converts_to_miette_offset_and_length() {
        let span: SourceSpan = Span::new(3, 8).into();
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 5);
    }
}
