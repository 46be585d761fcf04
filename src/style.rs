//! Console output helpers shared by the one-shot programs: festive banner
//! strings, bordered panels and aligned tables.

use crossterm::style::Stylize;

/// Alternate visible characters between red and green on a white band, the
/// candy-cane banner used by the story and quiz programs.
pub fn seasonal(text: &str) -> String {
    let mut out = String::new();
    let mut visible = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push_str(&ch.to_string().on_white().to_string());
            continue;
        }
        let styled = if visible % 2 == 0 {
            ch.to_string().red().on_white()
        } else {
            ch.to_string().green().on_white()
        };
        out.push_str(&styled.to_string());
        visible += 1;
    }
    out
}

/// Highlight a word the way the mad-lib story marks its insertions.
pub fn highlight(word: &str) -> String {
    word.red().on_white().to_string()
}

/// Wrap `content` in a red box-drawing border. Lines may carry color escapes;
/// sizing uses their visible width.
pub fn panel(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("┌{}┐", "─".repeat(width + 2)).red().to_string());
    out.push('\n');
    for line in lines {
        let padding = " ".repeat(width - visible_width(line));
        out.push_str(&"│ ".red().to_string());
        out.push_str(line);
        out.push_str(&padding);
        out.push_str(&" │".red().to_string());
        out.push('\n');
    }
    out.push_str(&format!("└{}┘", "─".repeat(width + 2)).red().to_string());
    out
}

/// Render an aligned two-border table, one row of box-drawing per entry.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| visible_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(visible_width(cell));
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!(" {}{} ", cell, " ".repeat(widths[i] - visible_width(cell))))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&rule("┌", "┬", "┐"));
    out.push('\n');
    out.push_str(&line(&header_cells));
    out.push('\n');
    out.push_str(&rule("├", "┼", "┤"));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

fn visible_width(text: &str) -> usize {
    strip_ansi_escapes::strip_str(text).chars().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_seasonal_preserves_visible_text() {
        let banner = seasonal("Merry Christmas!");
        assert_eq!(strip_ansi_escapes::strip_str(&banner), "Merry Christmas!");
    }

    #[test]
    fn test_panel_lines_share_one_width() {
        let panel = panel("short\na much longer line");
        let widths: Vec<usize> = strip_ansi_escapes::strip_str(&panel)
            .lines()
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged panel: {widths:?}");
    }

    #[test]
    fn test_table_alignment() {
        let rendered = table(
            &["Intensity", "Rate"],
            &[
                vec!["55 %".to_string(), "131 bpm".to_string()],
                vec!["95 %".to_string(), "183 bpm".to_string()],
            ],
        );
        let plain = strip_ansi_escapes::strip_str(&rendered);
        let mut lines = plain.lines();
        assert_eq!(lines.next().unwrap(), "┌───────────┬─────────┐");
        assert_eq!(lines.next().unwrap(), "│ Intensity │ Rate    │");
        assert_eq!(lines.next().unwrap(), "├───────────┼─────────┤");
        assert_eq!(lines.next().unwrap(), "│ 55 %      │ 131 bpm │");
    }
}
