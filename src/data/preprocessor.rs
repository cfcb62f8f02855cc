// ============================================================
// Layer 4 — Page Text Preprocessor
// ============================================================
// Cleans the raw text lopdf decodes from one PDF page.
//
// PDF text often contains:
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Soft hyphens (U+00AD) left over from justified layout
//   - Typographic ligatures (ﬁ, ﬂ, ﬀ, ﬃ, ﬄ) from embedded fonts
//   - Carriage returns and stray control characters
//   - Runs of spaces used for horizontal positioning
//
// Cleaning steps (applied in order):
//   1. Normalise individual characters
//   2. Collapse multiple spaces into one per line, trim lines
//   3. Collapse more than 2 consecutive newlines
//
// Line breaks are kept: sentence segmentation treats a blank
// line as a paragraph break.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean the text of a single page.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ───────────────────────────
        let mut step1 = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => step1.push(' '),
                '\u{00AD}' => {}
                '\r' => step1.push('\n'),
                '\u{FB00}' => step1.push_str("ff"),
                '\u{FB01}' => step1.push_str("fi"),
                '\u{FB02}' => step1.push_str("fl"),
                '\u{FB03}' => step1.push_str("ffi"),
                '\u{FB04}' => step1.push_str("ffl"),
                c if c.is_control() && c != '\n' => step1.push(' '),
                c => step1.push(c),
            }
        }

        // ── Step 2: Clean each line individually ─────────────────────────────
        let step2: String = step1
            .lines()
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n");

        // ── Step 3: Collapse excessive blank lines ────────────────────────────
        let mut result        = String::with_capacity(step2.len());
        let mut newline_count = 0usize;

        for c in step2.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= 2 {
                    result.push(c);
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }

        result.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
