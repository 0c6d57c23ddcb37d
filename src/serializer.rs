use crate::buffer::{Indent, OutputBuffer};
use crate::error::SteadyJsonError;
use crate::model::{JsonArray, JsonObject, JsonValue};
use crate::sink::Sink;

/// Characters below U+0020 must be escaped inside JSON string literals.
/// DEL and the C1 range pass through verbatim.
fn is_control_character(ch: char) -> bool {
    (ch as u32) < 0x20
}

/// Renders JSON value trees as deterministic, human-readable text.
///
/// A serializer is bound to one sink for its lifetime. Output is batched
/// through a fixed-size character buffer and reaches the sink in runs;
/// [`Serializer::serialize`] always leaves the buffer flushed.
///
/// The layout rules are fixed, which is the point: the same tree always
/// renders as the same bytes. Objects put each name/value pair on its own
/// line, indented two spaces per level. Arrays stay on one line while all
/// of their elements are simple (primitives or empty containers) and
/// otherwise get one element per line.
#[derive(Debug)]
pub struct Serializer<S: Sink> {
    sink: S,
    buffer: OutputBuffer,
    indent: Indent,
}

impl<S: Sink> Serializer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, buffer: OutputBuffer::new(), indent: Indent::default() }
    }

    /// Serialize an entire JSON root value, terminate the last line, and
    /// flush. When this method is used, generally none of the lower-level
    /// append methods are called by the caller.
    pub fn serialize(&mut self, root: &JsonValue) -> Result<(), SteadyJsonError> {
        self.append(root)?;
        self.write_str("\n")?;
        self.flush()
    }

    pub fn append(&mut self, value: &JsonValue) -> Result<(), SteadyJsonError> {
        match value {
            JsonValue::Object(obj) => self.append_object(obj),
            JsonValue::Array(arr) => self.append_array(arr),
            other => self.append_primitive(other),
        }
    }

    /// Append a primitive value. Passing an object or array here is a
    /// caller error and yields [`SteadyJsonError::UnsupportedValue`];
    /// [`Serializer::append`] never does that.
    pub fn append_primitive(&mut self, value: &JsonValue) -> Result<(), SteadyJsonError> {
        match value {
            JsonValue::String(text) => self.append_string(text),
            JsonValue::Number(number) => self.write_str(&number.to_string()),
            JsonValue::Bool(true) => self.write_str("true"),
            JsonValue::Bool(false) => self.write_str("false"),
            JsonValue::Null => self.write_str("null"),
            container @ (JsonValue::Object(_) | JsonValue::Array(_)) => {
                Err(SteadyJsonError::not_primitive(container.kind()))
            }
        }
    }

    /// Append a JSON object. Each name/value pair is output on a separate
    /// line, indented by two spaces. If the object is empty, just `{}` is
    /// appended.
    pub fn append_object(&mut self, object: &JsonObject) -> Result<(), SteadyJsonError> {
        let size = object.len();
        if size == 0 {
            return self.write_str("{}");
        }

        self.write_str("{\n")?;
        self.indent.adjust(2);

        for i in 0..size {
            self.append_indent()?;

            self.append_string(object.name(i))?;
            self.append_raw(": ")?;
            self.append(object.value(i))?;

            if i < size - 1 {
                self.write_str(",\n")?;
            } else {
                self.write_str("\n")?;
            }
        }

        self.indent.adjust(-2);
        self.append_indent()?;
        self.write_str("}")
    }

    /// Append a JSON array. If the array is empty or all of its elements
    /// are simple (literals, or containers with no elements), it is output
    /// on one line. Otherwise each element goes on its own line.
    ///
    /// The simple-element scan looks at direct children only; a child's
    /// non-emptiness decides the layout, not anything deeper.
    pub fn append_array(&mut self, array: &JsonArray) -> Result<(), SteadyJsonError> {
        let size = array.len();
        if size == 0 {
            return self.write_str("[]");
        }

        let all_simple = array.iter().all(|item| match item {
            JsonValue::Object(obj) => obj.is_empty(),
            JsonValue::Array(arr) => arr.is_empty(),
            _ => true,
        });

        self.write_str("[")?;

        if !all_simple {
            self.write_str("\n")?;
            self.indent.adjust(2);

            for i in 0..size {
                self.append_indent()?;

                self.append(array.get(i))?;

                if i < size - 1 {
                    self.write_str(",\n")?;
                } else {
                    self.write_str("\n")?;
                }
            }

            self.indent.adjust(-2);
            self.append_indent()?;
        } else {
            for i in 0..size {
                self.append(array.get(i))?;

                if i < size - 1 {
                    self.write_str(", ")?;
                }
            }
        }

        self.write_str("]")
    }

    /// Append spaces for the current indent.
    pub fn append_indent(&mut self) -> Result<(), SteadyJsonError> {
        for _ in 0..self.indent.depth() {
            self.write_char(' ')?;
        }
        Ok(())
    }

    /// Append a string as a quoted JSON string literal, escaping as
    /// needed: the seven named escapes for `"`, `\`, backspace, form feed,
    /// newline, carriage return and tab, a `\uXXXX` escape for any other
    /// control character, and everything else copied through as is.
    pub fn append_string(&mut self, text: &str) -> Result<(), SteadyJsonError> {
        self.write_str("\"")?;

        for ch in text.chars() {
            match ch {
                '"' => self.write_str("\\\"")?,
                '\\' => self.write_str("\\\\")?,
                '\x08' => self.write_str("\\b")?,
                '\x0C' => self.write_str("\\f")?,
                '\n' => self.write_str("\\n")?,
                '\r' => self.write_str("\\r")?,
                '\t' => self.write_str("\\t")?,
                ch if is_control_character(ch) => self.append_unicode_escape(ch)?,
                ch => self.write_char(ch)?,
            }
        }

        self.write_str("\"")
    }

    /// Append a `\uXXXX` escape for `ch`, most significant nibble first,
    /// uppercase hex digits.
    pub fn append_unicode_escape(&mut self, ch: char) -> Result<(), SteadyJsonError> {
        let code = ch as u32;

        self.write_str("\\u")?;

        self.append_hex_digit((code & 0xF000) >> 12)?;
        self.append_hex_digit((code & 0x0F00) >> 8)?;
        self.append_hex_digit((code & 0x00F0) >> 4)?;
        self.append_hex_digit(code & 0x000F)
    }

    /// Append one hex digit, 0-9 then A-F. A value outside 0..=15 is an
    /// internal invariant violation and is surfaced, never clamped.
    pub fn append_hex_digit(&mut self, digit: u32) -> Result<(), SteadyJsonError> {
        let ch = match digit {
            0..=9 => (b'0' + digit as u8) as char,
            10..=15 => (b'A' + (digit as u8 - 10)) as char,
            _ => return Err(SteadyJsonError::HexDigitOutOfRange(digit)),
        };
        self.write_char(ch)
    }

    pub fn append_raw(&mut self, text: &str) -> Result<(), SteadyJsonError> {
        self.write_str(text)
    }

    /// Increment (or decrement, if negative) the prevailing indent by the
    /// specified amount.
    pub fn indent(&mut self, amount: i32) {
        self.indent.adjust(amount);
    }

    /// Write the buffer's current contents to the sink, whatever the fill
    /// level, and reset it.
    pub fn flush(&mut self) -> Result<(), SteadyJsonError> {
        self.sink.write(self.buffer.as_str())?;
        self.buffer.clear();
        Ok(())
    }

    /// Consume the serializer and return its sink. Call [`Serializer::flush`]
    /// first if buffered output must not be dropped.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn write_str(&mut self, text: &str) -> Result<(), SteadyJsonError> {
        for ch in text.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> Result<(), SteadyJsonError> {
        if self.buffer.is_full() {
            self.flush()?;
        }
        self.buffer.push(ch);
        Ok(())
    }
}

/// Serialize `root` to a fresh string, trailing newline included.
pub fn render(root: &JsonValue) -> Result<String, SteadyJsonError> {
    let mut serializer = Serializer::new(String::new());
    serializer.serialize(root)?;
    Ok(serializer.into_sink())
}
