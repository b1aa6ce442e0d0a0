//! DOT HTML-like table labels for model nodes.
//!
//! A model renders as a table: a header row with the model name, an optional
//! italic description row, and one row per field with west/east ports so
//! edges can anchor on the exact field. When any field carries a description
//! a third column is added and every field row renders one.

use std::fmt::Write;

use crate::contract::{FieldRef, Model};

const HEADER_ROW_COLOR: &str = "#f3f797";
const DESCRIPTION_ROW_COLOR: &str = "#fcffcc";
const ODD_ROW_COLOR: &str = "#FFFFFF";
const EVEN_ROW_COLOR: &str = "#e3e3e3";

const CHARACTER_LIMIT: usize = 40;
const HEADER_CHARACTER_LIMIT: usize = 100;

const LINE_SEPARATOR: &str = "\n<br></br>";

/// Escape text for inclusion in HTML-like label markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a description into `<br>`-separated lines so long text does not
/// stretch its table row. Whitespace runs are collapsed first.
fn split_description_lines(message: &str, character_limit: usize) -> String {
    if message.len() < character_limit {
        return message.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for piece in message.split_whitespace() {
        if current.is_empty() {
            current = piece.to_string();
        } else if current.len() + piece.len() + 1 > character_limit {
            lines.push(std::mem::take(&mut current));
            current = piece.to_string();
        } else {
            current.push(' ');
            current.push_str(piece);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(LINE_SEPARATOR)
}

fn header_row(name: &str, column_count: usize) -> String {
    format!(
        "<tr><td bgcolor=\"{HEADER_ROW_COLOR}\" port=\"_root\" colspan=\"{column_count}\"><b>{}</b></td></tr>",
        escape(name)
    )
}

fn description_row(description: &str, column_count: usize) -> String {
    // Only the first paragraph goes into the node.
    let first = description
        .split("\n\n")
        .next()
        .unwrap_or(description);
    let text = split_description_lines(&escape(first), HEADER_CHARACTER_LIMIT);
    format!(
        "<tr><td bgcolor=\"{DESCRIPTION_ROW_COLOR}\" port=\"description\" colspan=\"{column_count}\"><i>{text}</i></td></tr>"
    )
}

fn field_row(row_index: usize, field: &FieldRef, render_descriptions: bool) -> String {
    // Rows are numbered from 1 for the odd/even striping.
    let row_color = if (row_index + 1) % 2 == 1 {
        ODD_ROW_COLOR
    } else {
        EVEN_ROW_COLOR
    };
    let name = escape(field.name());
    let type_name = escape(&field.type_name());

    if render_descriptions {
        let description =
            split_description_lines(&escape(field.description().unwrap_or("")), CHARACTER_LIMIT);
        format!(
            "<tr><td bgcolor=\"{row_color}\" port=\"{name}_w\"><b>{name}</b></td>\
             <td bgcolor=\"{row_color}\">{type_name}</td>\
             <td bgcolor=\"{row_color}\" port=\"{name}_e\">{description}</td></tr>"
        )
    } else {
        format!(
            "<tr><td bgcolor=\"{row_color}\" port=\"{name}_w\">{name}</td>\
             <td bgcolor=\"{row_color}\" port=\"{name}_e\">{type_name}</td></tr>"
        )
    }
}

/// Build the default HTML-like table label for a model.
///
/// This is the fallback used by [`Model::dot_label`]; adapters with richer
/// native metadata can override it.
pub fn table_label<M: Model + ?Sized>(model: &M) -> String {
    let fields = model.fields();
    let render_descriptions = fields.iter().any(|f| f.description().is_some());
    let column_count = if render_descriptions { 3 } else { 2 };

    let mut rows = header_row(model.name(), column_count);
    if let Some(description) = model.description() {
        rows.push_str(&description_row(description, column_count));
    }
    for (index, field) in fields.iter().enumerate() {
        let _ = write!(rows, "{}", field_row(index, field, render_descriptions));
    }

    format!(
        "<<table border=\"0\" cellborder=\"1\" cellpadding=\"5\" cellspacing=\"0\">{rows}</table>>"
    )
}
