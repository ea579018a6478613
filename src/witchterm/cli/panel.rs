use std::io::Write;
use unicode_width::UnicodeWidthStr;
use witchterm::display::CardDisplay;
use witchterm::model::CardRecord;

/// The terminal stand-in for the card image: a framed block with the card's
/// name, text and image reference, written to its own stream.
pub struct CardPanel<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> CardPanel<W> {
    /// `raw` means the terminal is in raw mode and needs `\r\n` line ends.
    pub fn new(out: W, raw: bool) -> Self {
        Self { out, raw }
    }
}

impl<W: Write> CardDisplay for CardPanel<W> {
    fn render(&mut self, card: &CardRecord) {
        let mut block = frame(card);
        if self.raw {
            block = block.replace('\n', "\r\n");
        }
        if let Err(e) = self
            .out
            .write_all(block.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!(error = %e, "card panel write failed");
        }
    }
}

/// Boxes the card in rounded corners, sized to the widest line.
pub fn frame(card: &CardRecord) -> String {
    let mut lines = vec![format!("✨ {} ✨", card.name)];
    if !card.display_text.is_empty() {
        lines.push(card.display_text.clone());
    }
    if !card.image_ref.is_empty() {
        lines.push(format!("[{}]", card.image_ref));
    }

    let inner = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let rule = "─".repeat(inner + 2);

    let mut out = format!("╭{}╮\n", rule);
    for line in &lines {
        let padding = " ".repeat(inner - line.width());
        out.push_str(&format!("│ {}{} │\n", line, padding));
    }
    out.push_str(&format!("╰{}╯\n", rule));
    out
}
