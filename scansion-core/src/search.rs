//! Backtracking search with a memo of failed states
//!
//! The search walks the words left to right. At each word it tries every
//! plausible count in ascending order against the budget left in the group
//! being filled. A count that exhausts the budget closes the group and the
//! next pattern element starts; a count that overshoots is discarded. The
//! first complete path wins, so smaller interpretations are preferred when
//! a word is ambiguous.
//!
//! A state is fully described by the word index, the pattern element being
//! filled and the budget left in it. States that cannot reach the end are
//! remembered for the duration of one search, which keeps the work bounded
//! by `words * pattern.len() * max(pattern)`.

use std::collections::HashSet;

use crate::counter::CountSet;

/// Find group-closing word indices for the first partition that fits
///
/// On success the indices are returned in the order the search unwinds,
/// i.e. decreasing: the last element is the index of the word that closes
/// the first group. Callers consume the result as a stack.
pub fn find_breaks(pattern: &[u32], counts: &[CountSet]) -> Option<Vec<usize>> {
    let first = *pattern.first()?;
    let mut search = Search {
        pattern,
        counts,
        failed: HashSet::new(),
        breaks: Vec::with_capacity(pattern.len()),
    };

    let root = State {
        index: 0,
        element: 0,
        left: first,
    };
    if search.run(root) {
        Some(search.breaks)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct State {
    index: usize,
    element: usize,
    /// Budget remaining in `pattern[element]`, never zero while `element`
    /// is in range
    left: u32,
}

/// A state being explored, with the next count of its word to try
#[derive(Debug)]
struct Frame {
    state: State,
    next: usize,
    /// Whether the count in flight closes the current group
    closes: bool,
}

struct Search<'a> {
    pattern: &'a [u32],
    counts: &'a [CountSet],
    failed: HashSet<State>,
    breaks: Vec<usize>,
}

impl Search<'_> {
    /// Depth-first walk on an explicit frame stack
    ///
    /// One frame per word, so the depth of the walk is bounded by the heap
    /// rather than the thread's stack.
    fn run(&mut self, root: State) -> bool {
        let mut frames: Vec<Frame> = Vec::new();
        let mut outcome = self.enter(root, &mut frames);

        while let Some(frame) = frames.last_mut() {
            if outcome == Some(true) {
                if frame.closes {
                    self.breaks.push(frame.state.index);
                }
                frames.pop();
                continue;
            }

            // Ascending, so the first count that overshoots ends the frame
            let candidate = self.counts[frame.state.index]
                .as_slice()
                .get(frame.next)
                .copied()
                .filter(|&count| count <= frame.state.left);

            let Some(count) = candidate else {
                let state = frame.state;
                frames.pop();
                self.failed.insert(state);
                outcome = Some(false);
                continue;
            };

            frame.next += 1;
            let State {
                index,
                element,
                left,
            } = frame.state;
            let rest = left - count;
            frame.closes = rest == 0;

            let child = if rest == 0 {
                State {
                    index: index + 1,
                    element: element + 1,
                    left: self.pattern.get(element + 1).copied().unwrap_or(0),
                }
            } else {
                State {
                    index: index + 1,
                    element,
                    left: rest,
                }
            };
            outcome = self.enter(child, &mut frames);
        }

        outcome == Some(true)
    }

    /// Resolve a state outright, or push a frame to explore it
    fn enter(&self, state: State, frames: &mut Vec<Frame>) -> Option<bool> {
        if state.index == self.counts.len() {
            return Some(state.element == self.pattern.len());
        }
        if state.element == self.pattern.len() {
            // Words left over after the last group closed
            return Some(false);
        }
        if self.failed.contains(&state) {
            return Some(false);
        }

        frames.push(Frame {
            state,
            next: 0,
            closes: false,
        });
        None
    }
}
