//! Big-text rendering for the countdown message. A FIGlet font shipped at
//! `fonts/christmas.flf` is used when present; anything missing or malformed
//! falls back silently to the built-in block glyphs.

mod glyphs;

use std::{collections::HashMap, path::Path};

pub const FONT_FILE: &str = "fonts/christmas.flf";

#[derive(Debug, Clone)]
pub struct BigFont {
    height: usize,
    glyphs: HashMap<char, Vec<String>>,
}

impl BigFont {
    /// The built-in block glyph set.
    pub fn builtin() -> Self {
        let glyphs = glyphs::GLYPHS
            .iter()
            .map(|(ch, rows)| (*ch, rows.iter().map(|r| r.to_string()).collect()))
            .collect();
        Self { height: glyphs::GLYPH_HEIGHT, glyphs }
    }

    /// Load a FIGlet `.flf` font. Returns `None` on any problem; callers fall
    /// back to [`BigFont::builtin`].
    pub fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        parse_flf(&content)
    }

    /// The font next to the executable or under the working directory, if
    /// any, otherwise the built-in set. Never fails.
    pub fn locate() -> Self {
        let candidates = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(FONT_FILE)))
            .into_iter()
            .chain(std::iter::once(Path::new(FONT_FILE).to_path_buf()));
        for path in candidates {
            if let Some(font) = Self::load(&path) {
                log::debug!("loaded big-text font from {}", path.display());
                return font;
            }
        }
        Self::builtin()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn glyph(&self, ch: char) -> Option<&Vec<String>> {
        self.glyphs.get(&ch).or_else(|| self.glyphs.get(&ch.to_ascii_uppercase()))
    }

    /// Render `text` as `height` lines, glyphs separated by one column.
    pub fn render(&self, text: &str) -> Vec<String> {
        let fallback: Vec<String> = glyphs::FALLBACK_GLYPH.iter().map(|r| r.to_string()).collect();
        let mut lines = vec![String::new(); self.height];
        for (pos, ch) in text.chars().enumerate() {
            let glyph = self.glyph(ch).unwrap_or(&fallback);
            for (row, line) in lines.iter_mut().enumerate() {
                if pos > 0 {
                    line.push(' ');
                }
                line.push_str(glyph.get(row).map(String::as_str).unwrap_or(""));
            }
        }
        lines
    }
}

/// Minimal FIGlet parser: header, comment lines, then one glyph of `height`
/// lines per character from ASCII 32 upward. Rows strip their trailing
/// endmark run and substitute the hardblank with a space.
fn parse_flf(content: &str) -> Option<BigFont> {
    let mut lines = content.lines();
    let header = lines.next()?;
    if !header.starts_with("flf2a") {
        return None;
    }
    let mut fields = header.split_whitespace();
    let signature = fields.next()?;
    let hardblank = signature.chars().last()?;
    let height: usize = fields.next()?.parse().ok()?;
    let _baseline = fields.next()?;
    let _max_length = fields.next()?;
    let _old_layout = fields.next()?;
    let comment_lines: usize = fields.next()?.parse().ok()?;
    if height == 0 {
        return None;
    }

    let mut lines = lines.skip(comment_lines);
    let mut glyphs = HashMap::new();
    for code in 32u8..=126 {
        let mut rows = Vec::with_capacity(height);
        for _ in 0..height {
            let raw = match lines.next() {
                Some(raw) => raw,
                // Fonts covering only part of ASCII are still usable.
                None => return (!glyphs.is_empty()).then_some(BigFont { height, glyphs }),
            };
            rows.push(strip_endmark(raw).replace(hardblank, " "));
        }
        glyphs.insert(code as char, rows);
    }
    Some(BigFont { height, glyphs })
}

fn strip_endmark(row: &str) -> &str {
    let row = row.trim_end();
    match row.chars().last() {
        Some(mark) => row.trim_end_matches(mark),
        None => row,
    }
}
