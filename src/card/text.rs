use once_cell::sync::Lazy;
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fmt::Write;

use super::CardRecord;

/// Keys that never make it into the text blob: display assets, cross
/// references between printings, and spoiler flags.
pub static EXCLUDED_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "deck_requirements",
        "deck_options",
        "double_sided",
        "octgn_id",
        "url",
        "imagesrc",
        "backimagesrc",
        "duplicated_by",
        "alternated_by",
        "illustrator",
        "errata_date",
        "restrictions",
        "spoiler",
    ]
    .into_iter()
    .collect()
});

pub fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(key)
}

/// Render a JSON value as display text.
///
/// Top-level strings come out bare. Everything else follows the usual
/// dynamic-language spelling: `True`/`False`/`None`, integral floats keep a
/// `.0`, and containers print their nested strings quoted, e.g.
/// `{'name': 'Roland', 'xp': 0}`.
pub fn render_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            render_nested(other, &mut out);
            out
        }
    }
}

fn render_nested(v: &Value, out: &mut String) {
    match v {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => quote_into(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_nested(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                quote_into(k, out);
                out.push_str(": ");
                render_nested(item, out);
            }
            out.push('}');
        }
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // Integers past 64 bits keep their digits; the number holds the source text.
    let literal = n.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        return literal;
    }
    match n.as_f64() {
        Some(f) => render_float(f),
        None => literal,
    }
}

fn render_float(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }

    // `{:e}` is the shortest round-trip form, so its exponent is the decimal
    // exponent of the digits that will be printed.
    let sci = format!("{:e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let s = f.to_string();
    if s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

fn quote_into(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Drop `<b>`/`</b>` markup and surrounding whitespace.
pub fn clean_value(raw: &str) -> String {
    raw.replace("<b>", "").replace("</b>", "").trim().to_string()
}

/// Flatten a record into `"Game Name : <game>, key : value, ..."`, in the
/// record's key order, skipping [`EXCLUDED_KEYS`].
pub fn compose_text(game_name: &str, record: &CardRecord) -> String {
    let mut text = format!("Game Name : {}", game_name);
    for (key, value) in record.fields() {
        if is_excluded(key) {
            continue;
        }
        let value = clean_value(&render_value(value));
        let _ = write!(text, ", {} : {}", key, value);
    }
    text
}
