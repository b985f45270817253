//! Minimal push-based JSON writer for the canonical forms.
//!
//! Compact output, no key reordering, fixed escaping. Hand-written so the
//! byte layout is locked by code, not by a serializer's internals.

#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    stack: Vec<bool>,
    after_key: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn element(&mut self) {
        if self.after_key {
            self.after_key = false;
            return;
        }
        if let Some(has_elements) = self.stack.last_mut() {
            if *has_elements {
                self.out.push(',');
            }
            *has_elements = true;
        }
    }

    pub fn begin_object(&mut self) {
        self.element();
        self.out.push('{');
        self.stack.push(false);
    }

    pub fn end_object(&mut self) {
        self.stack.pop();
        self.out.push('}');
    }

    pub fn begin_array(&mut self) {
        self.element();
        self.out.push('[');
        self.stack.push(false);
    }

    pub fn end_array(&mut self) {
        self.stack.pop();
        self.out.push(']');
    }

    /// Object key. Keys are fixed schema identifiers and are not escaped.
    pub fn key(&mut self, name: &str) {
        self.element();
        self.out.push('"');
        self.out.push_str(name);
        self.out.push_str("\":");
        self.after_key = true;
    }

    pub fn int(&mut self, value: i64) {
        self.element();
        self.out.push_str(&value.to_string());
    }

    pub fn uint(&mut self, value: u64) {
        self.element();
        self.out.push_str(&value.to_string());
    }

    pub fn bool(&mut self, value: bool) {
        self.element();
        self.out.push_str(if value { "true" } else { "false" });
    }

    pub fn null(&mut self) {
        self.element();
        self.out.push_str("null");
    }

    pub fn opt_int(&mut self, value: Option<i64>) {
        match value {
            Some(v) => self.int(v),
            None => self.null(),
        }
    }

    pub fn string(&mut self, value: &str) {
        self.element();
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                other => self.out.push(other),
            }
        }
        self.out.push('"');
    }

    pub fn opt_string(&mut self, value: Option<&str>) {
        match value {
            Some(v) => self.string(v),
            None => self.null(),
        }
    }

    pub fn int_array(&mut self, values: impl IntoIterator<Item = i64>) {
        self.begin_array();
        for value in values {
            self.int(value);
        }
        self.end_array();
    }

    pub fn string_array<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
        self.begin_array();
        for value in values {
            self.string(value);
        }
        self.end_array();
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_structures_are_compact() {
        let mut w = JsonWriter::new();
        w.begin_object();
        w.key("a");
        w.int(1);
        w.key("b");
        w.begin_array();
        w.int(2);
        w.int(3);
        w.end_array();
        w.key("c");
        w.begin_object();
        w.key("d");
        w.bool(true);
        w.end_object();
        w.end_object();
        assert_eq!(w.finish(), r#"{"a":1,"b":[2,3],"c":{"d":true}}"#);
    }

    #[test]
    fn strings_escape_the_fixed_set() {
        let mut w = JsonWriter::new();
        w.string("a\"b\\c\nd\re\tf");
        assert_eq!(w.finish(), "\"a\\\"b\\\\c\\nd\\re\\tf\"");
    }

    #[test]
    fn nulls_and_empty_arrays() {
        let mut w = JsonWriter::new();
        w.begin_object();
        w.key("x");
        w.null();
        w.key("y");
        w.begin_array();
        w.end_array();
        w.end_object();
        assert_eq!(w.finish(), r#"{"x":null,"y":[]}"#);
    }
}
