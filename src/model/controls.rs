//! Size controls for puzzle generation
//!
//! Raw input (typed text, config values, CLI flags) is parsed and clamped here
//! so `Generate` always receives sizes inside the configured limits.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range for one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: usize) -> usize {
        value.max(self.min).min(self.max)
    }

    /// Parse and clamp raw text
    ///
    /// Reads the leading integer like a typed number field does: `"12.5"` and
    /// `"7px"` give 12 and 7. Input without leading digits becomes `min`, and
    /// values too large for `usize` become `max`.
    pub fn parse(&self, raw: &str) -> usize {
        let text = raw.trim_start();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let digits = &digits[..end];

        if digits.is_empty() || negative {
            return self.min;
        }
        match digits.parse::<usize>() {
            Ok(value) => self.clamp(value),
            Err(_) => self.max,
        }
    }

    /// Reversed bounds swapped, zero minimum raised to 1
    fn normalized(self) -> Self {
        let (min, max) = if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        };
        Self::new(min.max(1), max.max(1))
    }
}

/// Limits for every size control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub rows: Bounds,
    pub columns: Bounds,
    pub palette_size: Bounds,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            rows: Bounds::new(1, 200),
            columns: Bounds::new(1, 200),
            palette_size: Bounds::new(1, 50),
        }
    }
}

impl SizeLimits {
    /// Repair nonsensical bounds, logging each fix
    pub fn normalized(self) -> Self {
        let fix = |name: &str, bounds: Bounds| {
            let fixed = bounds.normalized();
            if fixed != bounds {
                tracing::warn!(
                    "Invalid {} limits {}..={}, using {}..={}",
                    name,
                    bounds.min,
                    bounds.max,
                    fixed.min,
                    fixed.max
                );
            }
            fixed
        };
        Self {
            rows: fix("rows", self.rows),
            columns: fix("columns", self.columns),
            palette_size: fix("palette_size", self.palette_size),
        }
    }
}

/// One of the three size controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeControl {
    Rows,
    Columns,
    PaletteSize,
}

impl SizeControl {
    pub fn label(self) -> &'static str {
        match self {
            SizeControl::Rows => "rows",
            SizeControl::Columns => "columns",
            SizeControl::PaletteSize => "colors",
        }
    }
}

/// Text being typed into a control, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub control: SizeControl,
    pub text: String,
}

/// Current values of the rows / columns / palette size controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeControls {
    limits: SizeLimits,
    rows: usize,
    columns: usize,
    palette_size: usize,
    editing: Option<TextEntry>,
}

impl SizeControls {
    pub fn new(limits: SizeLimits, rows: usize, columns: usize, palette_size: usize) -> Self {
        Self {
            rows: limits.rows.clamp(rows),
            columns: limits.columns.clamp(columns),
            palette_size: limits.palette_size.clamp(palette_size),
            limits,
            editing: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn get(&self, control: SizeControl) -> usize {
        match control {
            SizeControl::Rows => self.rows,
            SizeControl::Columns => self.columns,
            SizeControl::PaletteSize => self.palette_size,
        }
    }

    pub fn bounds(&self, control: SizeControl) -> Bounds {
        match control {
            SizeControl::Rows => self.limits.rows,
            SizeControl::Columns => self.limits.columns,
            SizeControl::PaletteSize => self.limits.palette_size,
        }
    }

    /// Parse, clamp and store raw text; returns the stored value
    pub fn set_from_str(&mut self, control: SizeControl, raw: &str) -> usize {
        let value = self.bounds(control).parse(raw);
        *self.slot_mut(control) = value;
        value
    }

    /// Move a control by `delta`, clamped to its bounds
    pub fn step(&mut self, control: SizeControl, delta: i64) -> usize {
        let current = self.get(control) as i64;
        let value = self
            .bounds(control)
            .clamp(current.saturating_add(delta).max(0) as usize);
        *self.slot_mut(control) = value;
        value
    }

    fn slot_mut(&mut self, control: SizeControl) -> &mut usize {
        match control {
            SizeControl::Rows => &mut self.rows,
            SizeControl::Columns => &mut self.columns,
            SizeControl::PaletteSize => &mut self.palette_size,
        }
    }

    pub fn editing(&self) -> Option<&TextEntry> {
        self.editing.as_ref()
    }

    /// Start typing into `control`, dropping any unfinished entry
    pub fn begin_edit(&mut self, control: SizeControl) {
        self.editing = Some(TextEntry {
            control,
            text: String::new(),
        });
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(entry) = &mut self.editing {
            entry.text.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(entry) = &mut self.editing {
            entry.text.pop();
        }
    }

    /// Apply the typed text to its control
    ///
    /// An empty entry keeps the current value.
    pub fn commit_edit(&mut self) -> Option<(SizeControl, usize)> {
        let entry = self.editing.take()?;
        if entry.text.trim().is_empty() {
            return Some((entry.control, self.get(entry.control)));
        }
        let value = self.set_from_str(entry.control, &entry.text);
        Some((entry.control, value))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(2, 10);
        assert_eq!(bounds.clamp(0), 2);
        assert_eq!(bounds.clamp(5), 5);
        assert_eq!(bounds.clamp(11), 10);
    }

    #[test]
    fn test_bounds_parse() {
        let bounds = Bounds::new(2, 10);
        assert_eq!(bounds.parse(" 7 "), 7);
        assert_eq!(bounds.parse("999"), 10);
        assert_eq!(bounds.parse("abc"), 2);
        assert_eq!(bounds.parse(""), 2);
        assert_eq!(bounds.parse("-3"), 2);
    }

    #[test]
    fn test_bounds_parse_reads_leading_integer() {
        let bounds = Bounds::new(2, 50);
        assert_eq!(bounds.parse("12.5"), 12);
        assert_eq!(bounds.parse("7px"), 7);
        assert_eq!(bounds.parse("  +9"), 9);
        assert_eq!(bounds.parse("px7"), 2);
        assert_eq!(bounds.parse("99999999999999999999999999"), 50);
    }

    #[test]
    fn test_controls_clamp_on_construction() {
        let controls = SizeControls::new(SizeLimits::default(), 0, 500, 60);
        assert_eq!(controls.rows(), 1);
        assert_eq!(controls.columns(), 200);
        assert_eq!(controls.palette_size(), 50);
    }

    #[test]
    fn test_controls_are_independent() {
        let limits = SizeLimits {
            rows: Bounds::new(1, 5),
            columns: Bounds::new(10, 20),
            palette_size: Bounds::new(3, 4),
        };
        let mut controls = SizeControls::new(limits, 3, 15, 3);
        assert_eq!(controls.set_from_str(SizeControl::Rows, "9"), 5);
        assert_eq!(controls.set_from_str(SizeControl::Columns, "x"), 10);
        assert_eq!(controls.step(SizeControl::PaletteSize, 1), 4);
        assert_eq!(controls.rows(), 5);
        assert_eq!(controls.columns(), 10);
        assert_eq!(controls.palette_size(), 4);
    }

    #[test]
    fn test_step_clamps_both_ways() {
        let mut controls = SizeControls::new(SizeLimits::default(), 2, 199, 10);
        assert_eq!(controls.step(SizeControl::Rows, -5), 1);
        assert_eq!(controls.step(SizeControl::Columns, 5), 200);
        assert_eq!(controls.step(SizeControl::PaletteSize, i64::MIN), 1);
    }

    #[test]
    fn test_text_entry_commit() {
        let mut controls = SizeControls::new(SizeLimits::default(), 20, 20, 10);
        controls.begin_edit(SizeControl::Columns);
        for ch in "345".chars() {
            controls.push_char(ch);
        }
        controls.pop_char();
        assert_eq!(controls.editing().map(|e| e.text.as_str()), Some("34"));

        assert_eq!(controls.commit_edit(), Some((SizeControl::Columns, 34)));
        assert_eq!(controls.columns(), 34);
        assert!(controls.editing().is_none());
        assert_eq!(controls.commit_edit(), None);
    }

    #[test]
    fn test_empty_or_cancelled_entry_keeps_value() {
        let mut controls = SizeControls::new(SizeLimits::default(), 20, 20, 10);
        controls.begin_edit(SizeControl::Rows);
        assert_eq!(controls.commit_edit(), Some((SizeControl::Rows, 20)));

        controls.begin_edit(SizeControl::PaletteSize);
        controls.push_char('4');
        controls.cancel_edit();
        assert_eq!(controls.palette_size(), 10);
        // Typing without an entry is ignored
        controls.push_char('9');
        assert!(controls.editing().is_none());
    }

    #[test]
    fn test_limits_normalized() {
        let limits = SizeLimits {
            rows: Bounds::new(10, 2),
            columns: Bounds::new(0, 0),
            palette_size: Bounds::new(1, 50),
        }
        .normalized();
        assert_eq!(limits.rows, Bounds::new(2, 10));
        assert_eq!(limits.columns, Bounds::new(1, 1));
        assert_eq!(limits.palette_size, Bounds::new(1, 50));
    }
}
