/// Builder accumulates all output of a run, so it can be written to stdout in a single call or
/// dropped entirely if the user asked for silence
#[derive(Debug, Default)]
pub struct Builder {
    buffer: Vec<u8>,
}

impl Builder {
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.buffer.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    pub fn write_string(&mut self, s: String) {
        self.buffer.append(&mut s.into_bytes());
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// string consumes the buffer, leaving the builder empty for reuse
    pub fn string(&mut self) -> String {
        let buffer = std::mem::take(&mut self.buffer);
        String::from_utf8(buffer)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}
