//! Plain-text console formatting: step headers and two-column tables

/// Prints numbered, underlined step titles
///
/// The counter is run-scoped: it starts at 1, increments by one per
/// presented step and never resets within a run. One instance lives in the
/// session; nothing global.
pub struct StepHeader {
  next: u32,
}

impl StepHeader {
  pub fn new() -> Self {
    Self { next: 1 }
  }

  /// Print a blank line, the numbered step title, and an underline
  pub fn step(&mut self, title: &str) {
    let header = format!("Step {}: {}", self.next, title);
    println!();
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    self.next += 1;
  }

  /// Ordinal the next presented step will receive
  pub fn next_ordinal(&self) -> u32 {
    self.next
  }
}

impl Default for StepHeader {
  fn default() -> Self {
    Self::new()
  }
}

/// A two-column table printed one row at a time
///
/// `key_width` should be at least as wide as the longest key plus the
/// separator. Multi-line values are indented to stay within their column.
pub struct KeyValueTable {
  key_width: usize,
}

impl KeyValueTable {
  pub fn new(key_width: usize) -> Self {
    Self { key_width }
  }

  pub fn row(&self, key: &str, value: &str) {
    println!("{}", self.render_row(key, value));
  }

  fn render_row(&self, key: &str, value: &str) -> String {
    let key_cell = format!("{}: ", key);
    let indent = " ".repeat(self.key_width);
    let value_cell = value.replace('\n', &format!("\n{}", indent));
    format!("{:<width$}{}", key_cell, value_cell, width = self.key_width)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_header_ordinals_are_monotonic() {
    let mut header = StepHeader::new();
    assert_eq!(header.next_ordinal(), 1);
    header.step("Inspecting package");
    assert_eq!(header.next_ordinal(), 2);
    header.step("Create tag");
    header.step("Push tag");
    assert_eq!(header.next_ordinal(), 4);
  }

  #[test]
  fn test_table_alignment() {
    let table = KeyValueTable::new(16);
    assert_eq!(
      table.render_row("Package name", "demo"),
      "Package name:   demo"
    );
  }

  #[test]
  fn test_table_indents_multiline_values() {
    let table = KeyValueTable::new(10);
    assert_eq!(
      table.render_row("Command", "line one\nline two"),
      "Command:  line one\n          line two"
    );
  }

  #[test]
  fn test_table_long_key_not_truncated() {
    let table = KeyValueTable::new(4);
    assert_eq!(table.render_row("Working directory", "/tmp"), "Working directory: /tmp");
  }
}
