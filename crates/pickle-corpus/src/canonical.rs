//! Expected relay output for a batch graph.

use pickle_pack::PickleValue;

use crate::{interpret, SkipReason};

/// Canonical plaintext derived from one batch graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canonical {
    /// One line per valid entry, in batch order, without terminators.
    pub lines: Vec<String>,
    /// Elements that produced no line.
    pub skipped: Vec<Skipped>,
    /// Set when the batch itself is not a list or tuple.
    pub rejected: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub index: usize,
    pub reason: SkipReason,
}

impl Canonical {
    /// Newline-terminated lines; empty when nothing was valid.
    pub fn to_text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        })
    }
}

/// Derives the lines a lenient relay emits for `graph`.
///
/// Never fails: a batch that is not a list or tuple yields no lines, and
/// each malformed element is skipped on its own.
pub fn canonicalize(graph: &PickleValue) -> Canonical {
    let Some(elements) = graph.as_sequence() else {
        return Canonical {
            rejected: Some(graph.kind()),
            ..Canonical::default()
        };
    };

    let mut canonical = Canonical::default();
    for (index, element) in elements.iter().enumerate() {
        match interpret(element) {
            Ok(entry) => canonical.lines.push(entry.line()),
            Err(reason) => canonical.skipped.push(Skipped { index, reason }),
        }
    }
    canonical
}
