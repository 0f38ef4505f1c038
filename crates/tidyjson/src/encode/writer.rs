const INDENT_WIDTH: usize = 4;

/// Output accumulator with a lazily grown indentation cache.
pub struct PrettyWriter {
    out: String,
    indent_cache: String,
}

impl PrettyWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    pub fn push(&mut self, ch: char) {
        self.out.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push_quoted(&mut self, s: &str) {
        crate::encode::primitives::quote_into(&mut self.out, s);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self, depth: usize) {
        let width = depth * INDENT_WIDTH;
        if width == 0 {
            return;
        }
        if self.indent_cache.len() < width {
            let missing = width - self.indent_cache.len();
            self.indent_cache.extend(std::iter::repeat_n(' ', missing));
        }
        self.out.push_str(&self.indent_cache[..width]);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for PrettyWriter {
    fn default() -> Self {
        Self::new()
    }
}
