//! Purpose: Render decoded values and decode failures for stdout.
//! Exports: `RenderOptions`, `render_value`, `report`, `error_line`, `report_error`,
//! `DECODE_ERROR_LABEL`.
//! Role: Small, pure formatter plus the two write helpers used by the CLI.
//! Invariants: Without color, pretty output equals serde_json::to_string_pretty and
//! compact output equals serde_json::to_string.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::core::error::DecodeError;

pub const DECODE_ERROR_LABEL: &str = "Error decoding JSON:";

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";
const COLOR_ERROR: &str = "31";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    pub pretty: bool,
    pub color: bool,
}

pub fn render_value(value: &Value, options: RenderOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.value(value, 0);
    renderer.out
}

pub fn report<W: Write>(out: &mut W, value: &Value, options: RenderOptions) -> io::Result<()> {
    writeln!(out, "{}", render_value(value, options))
}

pub fn error_line(err: &DecodeError, use_color: bool) -> String {
    let mut renderer = Renderer::new(RenderOptions {
        pretty: false,
        color: use_color,
    });
    renderer.token(DECODE_ERROR_LABEL, COLOR_ERROR);
    let description = err.message().unwrap_or("invalid JSON");
    format!("{} {description}", renderer.out)
}

pub fn report_error<W: Write>(out: &mut W, err: &DecodeError, use_color: bool) -> io::Result<()> {
    writeln!(out, "{}", error_line(err, use_color))
}

/// Single-pass JSON writer. Layout (pretty or compact) and coloring are
/// independent: compact output never contains newlines or spaces between tokens.
struct Renderer {
    options: RenderOptions,
    out: String,
}

impl Renderer {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.token("null", COLOR_NULL),
            Value::Bool(val) => self.token(if *val { "true" } else { "false" }, COLOR_BOOL),
            Value::Number(num) => self.token(&num.to_string(), COLOR_NUMBER),
            Value::String(text) => self.string(text, COLOR_STRING),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.token("[]", COLOR_PUNCT);
            return;
        }
        self.token("[", COLOR_PUNCT);
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.token(",", COLOR_PUNCT);
            }
            self.break_line(depth + 1);
            self.value(item, depth + 1);
        }
        self.break_line(depth);
        self.token("]", COLOR_PUNCT);
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.token("{}", COLOR_PUNCT);
            return;
        }
        self.token("{", COLOR_PUNCT);
        for (idx, (key, value)) in map.iter().enumerate() {
            if idx > 0 {
                self.token(",", COLOR_PUNCT);
            }
            self.break_line(depth + 1);
            self.string(key, COLOR_KEY);
            self.token(":", COLOR_PUNCT);
            if self.options.pretty {
                self.out.push(' ');
            }
            self.value(value, depth + 1);
        }
        self.break_line(depth);
        self.token("}", COLOR_PUNCT);
    }

    fn string(&mut self, text: &str, color: &str) {
        let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
        self.token(&encoded, color);
    }

    fn break_line(&mut self, depth: usize) {
        if !self.options.pretty {
            return;
        }
        self.out.push('\n');
        self.out.push_str(&INDENT.repeat(depth));
    }

    fn token(&mut self, text: &str, color: &str) {
        if !self.options.color {
            self.out.push_str(text);
            return;
        }
        self.out.push_str("\u{1b}[");
        self.out.push_str(color);
        self.out.push('m');
        self.out.push_str(text);
        self.out.push_str("\u{1b}[0m");
    }
}

#[cfg(test)]
mod tests {
    use super::{DECODE_ERROR_LABEL, RenderOptions, render_value, report, report_error};
    use crate::decode::{EMBEDDED_PAYLOAD, decode};
    use serde_json::json;

    const PLAIN_PRETTY: RenderOptions = RenderOptions {
        pretty: true,
        color: false,
    };

    #[test]
    fn pretty_matches_serde_when_color_disabled() {
        let value = json!({
            "arr": [1, true, null, []],
            "nested": { "x": "y", "empty": {} }
        });
        let plain = render_value(&value, PLAIN_PRETTY);
        let pretty = serde_json::to_string_pretty(&value).expect("pretty");
        assert_eq!(plain, pretty);
    }

    #[test]
    fn compact_is_single_line() {
        let value = json!({"a": [1, 2], "b": {"c": null}});
        let compact = render_value(&value, RenderOptions::default());
        assert_eq!(compact, r#"{"a":[1,2],"b":{"c":null}}"#);
    }

    #[test]
    fn compact_matches_serde_for_embedded_payload() {
        let value = decode(EMBEDDED_PAYLOAD).expect("decode");
        let compact = render_value(&value, RenderOptions::default());
        assert_eq!(compact, serde_json::to_string(&value).expect("compact"));
    }

    #[test]
    fn compact_color_stays_on_one_line() {
        let value = json!({"arr": [1, {"x": "y"}], "empty": []});
        let colored = render_value(
            &value,
            RenderOptions {
                pretty: false,
                color: true,
            },
        );
        assert!(!colored.contains('\n'));
        let key_then_array = concat!(
            "\u{1b}[36m\"arr\"\u{1b}[0m",
            "\u{1b}[39m:\u{1b}[0m",
            "\u{1b}[39m[\u{1b}[0m",
        );
        assert!(colored.contains(key_then_array));
    }

    #[test]
    fn color_emits_ansi_per_token_kind() {
        let value = json!({"k":"v","n":1,"b":true,"z":null});
        let colored = render_value(
            &value,
            RenderOptions {
                pretty: true,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[36m\"k\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[32m\"v\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[33m1\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[39mnull\u{1b}[0m"));
    }

    #[test]
    fn report_prints_all_embedded_pairs() {
        let value = decode(EMBEDDED_PAYLOAD).expect("decode");
        let mut out = Vec::new();
        report(&mut out, &value, RenderOptions::default()).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with('\n'));
        assert!(text.contains(r#""lt_enabled":true"#));
        assert!(text.contains(r#""lt_api_hostname":"http://127.0.0.1""#));
        assert!(text.contains(r#""lt_api_port":"8081""#));
    }

    #[test]
    fn report_error_prefixes_label() {
        let err = decode(r#"{"a": 1,}"#).unwrap_err();
        let mut out = Vec::new();
        report_error(&mut out, &err, false).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let description = text
            .strip_prefix(DECODE_ERROR_LABEL)
            .expect("label prefix")
            .trim();
        assert!(!description.is_empty());
        assert!(description.contains("line 1"));
    }

    #[test]
    fn report_error_colors_label_only_when_enabled() {
        let err = decode("").unwrap_err();
        let mut colored = Vec::new();
        report_error(&mut colored, &err, true).expect("write");
        let colored = String::from_utf8(colored).expect("utf8");
        assert!(colored.starts_with("\u{1b}[31mError decoding JSON:\u{1b}[0m "));

        let mut plain = Vec::new();
        report_error(&mut plain, &err, false).expect("write");
        assert!(!String::from_utf8(plain).expect("utf8").contains("\u{1b}["));
    }
}
