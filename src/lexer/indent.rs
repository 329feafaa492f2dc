//! Indentation tracking from leading and trailing bracket characters.

/// Running nesting level for one formatting run.
#[derive(Debug, Clone, Default)]
pub struct IndentTracker {
    level: usize,
    unit: u32,
}

impl IndentTracker {
    pub fn new(unit: u32) -> Self {
        Self { level: 0, unit }
    }

    /// Padding for a line, in indent units times the nesting level.
    ///
    /// A leading closer dedents the line itself; a trailing opener only
    /// affects the lines after it, so `} else {` stays at the outer level.
    pub fn compute_padding(&mut self, first: char, last: char) -> u32 {
        if is_closer(first) {
            self.level = self.level.saturating_sub(1);
        }
        let padding = (self.level as u32).saturating_mul(self.unit);
        if is_opener(last) {
            self.level += 1;
        }
        padding
    }
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '{' | '[' | '(' | '?')
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '}' | ']' | ')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_padding() {
        let mut indent = IndentTracker::new(20);
        assert_eq!(indent.compute_padding('i', '{'), 0);
        assert_eq!(indent.compute_padding('y', ';'), 20);
        assert_eq!(indent.compute_padding('}', '}'), 0);
        assert_eq!(indent.compute_padding('z', ';'), 0);
    }

    #[test]
    fn test_else_line_stays_outer() {
        let mut indent = IndentTracker::new(20);
        indent.compute_padding('i', '{');
        indent.compute_padding('a', ';');
        assert_eq!(indent.compute_padding('}', '{'), 0);
        assert_eq!(indent.compute_padding('b', ';'), 20);
    }

    #[test]
    fn test_ternary_opens_level() {
        let mut indent = IndentTracker::new(4);
        indent.compute_padding('x', '?');
        assert_eq!(indent.compute_padding('a', ':'), 4);
    }

    #[test]
    fn test_unbalanced_closer_clamps_at_zero() {
        let mut indent = IndentTracker::new(20);
        assert_eq!(indent.compute_padding(')', ';'), 0);
        assert_eq!(indent.compute_padding('}', '}'), 0);
        // Extra closers do not bank negative levels
        assert_eq!(indent.compute_padding('a', '{'), 0);
        assert_eq!(indent.compute_padding('b', ';'), 20);
    }
}
