//! Byte spans over the combined prerequisite text
//!
//! Sentence and grade-segment boundaries are computed once as explicit spans
//! so that the grade-attribution rules can be tested without the course
//! regexes. All offsets are byte offsets that lie on `char` boundaries.

/// Sentence terminators used for subject inference
const SENTENCE_DELIMITERS: &[char] = &['.', '!', '?'];

/// Punctuation that ends a clause for grade-window continuation
const CLAUSE_TERMINATORS: &[char] = &['.', '!', '?', ';'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Split `text` into sentences on `.`, `!` and `?`.
///
/// Delimiters are excluded from the spans. Blank sentences are dropped.
pub fn sentence_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if SENTENCE_DELIMITERS.contains(&ch) {
            push_non_blank(text, &mut spans, Span::new(start, idx));
            start = idx + ch.len_utf8();
        }
    }
    push_non_blank(text, &mut spans, Span::new(start, text.len()));

    spans
}

fn push_non_blank(text: &str, spans: &mut Vec<Span>, span: Span) {
    if !span.is_empty() && !span.text(text).trim().is_empty() {
        spans.push(span);
    }
}

/// A stretch of text between two grade-clause boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSegment {
    pub span: Span,
    /// Grade of the clause that starts right where this segment ends
    pub followed_by: Option<String>,
    /// Whether the segment ends in `.`, `!`, `?` or `;` (trailing whitespace ignored)
    pub ends_clause: bool,
}

impl GradeSegment {
    /// The text grade attribution looks at for this segment: the segment
    /// itself, extended backwards over the previous segment when that one
    /// does not close its clause.
    pub fn attribution_window(segments: &[GradeSegment], index: usize) -> Option<Span> {
        let segment = segments.get(index)?;
        let start = match index.checked_sub(1).and_then(|prev| segments.get(prev)) {
            Some(prev) if !prev.ends_clause => prev.span.start,
            _ => segment.span.start,
        };
        Some(Span::new(start, segment.span.end))
    }
}

/// Cut `text` immediately before each boundary. `boundaries` holds
/// `(offset, grade)` pairs in ascending offset order; the segment ending at a
/// boundary is tagged with that boundary's grade.
pub fn grade_segments(text: &str, boundaries: &[(usize, String)]) -> Vec<GradeSegment> {
    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for (offset, grade) in boundaries {
        let end = (*offset).clamp(start, text.len());
        segments.push(segment(text, Span::new(start, end), Some(grade.clone())));
        start = end;
    }
    segments.push(segment(text, Span::new(start, text.len()), None));

    segments
}

fn segment(text: &str, span: Span, followed_by: Option<String>) -> GradeSegment {
    let ends_clause = span
        .text(text)
        .trim_end()
        .ends_with(CLAUSE_TERMINATORS);
    GradeSegment {
        span,
        followed_by,
        ends_clause,
    }
}
