use super::render::parse_rgb;
use colored::Colorize;
use swatch::api::{CmdMessage, MessageLevel};
use swatch::error::Result;
use swatch::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const CHIP: &str = "██";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No colors found.");
        return;
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    for record in records {
        let idx = format!("{:>width$}. ", record.id, width = id_width);
        let chip = match parse_rgb(&record.hex) {
            Some((r, g, b)) => CHIP.truecolor(r, g, b).to_string(),
            None => " ".repeat(CHIP.width()),
        };

        let fixed = 2 + idx.width() + CHIP.width() + 1;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let value = truncate_to_width(&single_line(&record.hex), available);

        println!("  {}{} {}", idx.dimmed(), chip, value);
    }
}

pub(super) fn print_json(records: &[Record]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
