//! The emission engine.

use super::{
    code_block::{CodeBlock, Emittable},
    emit::Emit,
    indent::Indent,
    modifier::Modifiers,
    spec::Spec,
    type_name::TypeName,
};

/// Deepest nesting of embedded blocks or nested types the writer descends into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Stateful writer that owns the output buffer and the indentation depth.
///
/// Rendering is append-only and single-pass. Tokens written on the same
/// line are separated by one space unless punctuation glues them together
/// (`name: Type`, `doWork(x: Int)`), and the first token of a line is
/// prefixed with the current indentation.
///
/// # Example
///
/// ```
/// use swiftpoet_codegen::builder::CodeWriter;
///
/// let mut writer = CodeWriter::swift();
/// writer
///     .emit_literal("func")
///     .emit_literal("run")
///     .emit_literal("()")
///     .begin_statement()
///     .emit_literal("start")
///     .emit_literal("()")
///     .end_statement();
///
/// assert_eq!(writer.as_str(), "func run() {\n    start()\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent_level: usize,
    /// Rendered [`Indent`] unit, repeated once per level.
    indent: String,
    buffer: String,
    at_line_start: bool,
    /// One entry per open brace: whether anything was written inside it.
    scopes: Vec<bool>,
    nesting: usize,
}

impl CodeWriter {
    /// Create a new CodeWriter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent: indent.unit(),
            buffer: String::new(),
            at_line_start: true,
            scopes: Vec::new(),
            nesting: 0,
        }
    }

    /// Create a new CodeWriter with 4-space indentation.
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Emit a node by delegating to its own [`Emit`] implementation.
    pub fn emit<E: Emit + ?Sized>(&mut self, node: &E) -> &mut Self {
        node.emit(self)
    }

    /// Emit literal source text as one or more tokens.
    ///
    /// Embedded newlines end the current line.
    pub fn emit_literal(&mut self, text: &str) -> &mut Self {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_token(first, glues_left(first));
        }
        for line in lines {
            self.new_line();
            self.write_token(line, glues_left(line));
        }
        self
    }

    /// Emit a type reference.
    pub fn emit_type(&mut self, ty: &TypeName) -> &mut Self {
        self.write_token(&ty.to_string(), false)
    }

    /// Emit a single code-block token.
    pub fn emit_object(&mut self, object: &Emittable) -> &mut Self {
        match object {
            Emittable::Literal(text) => self.emit_literal(text),
            Emittable::Type(ty) => self.emit_type(ty),
            Emittable::Code(block) => self.nested(|w| {
                w.emit_code_block(block);
            }),
            Emittable::NewLine => self.new_line(),
            Emittable::BeginStatement => self.begin_statement(),
            Emittable::EndStatement => self.end_statement(),
            Emittable::IncreaseIndentation => self.indent(),
            Emittable::DecreaseIndentation => self.dedent(),
        }
    }

    /// Emit every token of a block in order.
    pub fn emit_code_block(&mut self, block: &CodeBlock) -> &mut Self {
        for object in block.emittable_objects() {
            self.emit_object(object);
        }
        self
    }

    /// Emit a block at the current indentation and terminate the line.
    ///
    /// Tokens already written on the current line (modifiers) are kept.
    pub fn emit_with_indentation(&mut self, block: &CodeBlock) -> &mut Self {
        self.emit_code_block(block);
        self.end_line()
    }

    /// Emit modifiers in canonical order.
    pub fn emit_modifiers(&mut self, modifiers: &Modifiers) -> &mut Self {
        for modifier in modifiers {
            self.write_token(modifier.as_str(), false);
        }
        self
    }

    /// Emit a spec's description as `///` lines.
    ///
    /// Absent or blank descriptions emit nothing.
    pub fn emit_documentation<S: Spec + ?Sized>(&mut self, spec: &S) -> &mut Self {
        let Some(description) = spec.description().filter(|d| !d.trim().is_empty()) else {
            return self;
        };

        self.end_line();
        for line in description.trim_end().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.write_token("///", false);
            } else {
                self.write_token(&format!("/// {}", line), false);
            }
            self.new_line();
        }
        self
    }

    /// Open a braced scope and indent.
    pub fn begin_statement(&mut self) -> &mut Self {
        self.write_token("{", false);
        self.new_line();
        self.scopes.push(false);
        self.indent()
    }

    /// Close the innermost braced scope.
    ///
    /// An empty scope renders as a single blank line between the braces.
    pub fn end_statement(&mut self) -> &mut Self {
        self.end_line();
        if !self.scopes.pop().unwrap_or(true) {
            self.buffer.push('\n');
        }
        self.dedent();
        self.write_token("}", false);
        self.new_line()
    }

    /// Terminate the current line unconditionally.
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Terminate the current line if anything was written on it.
    pub fn end_line(&mut self) -> &mut Self {
        if !self.at_line_start {
            self.new_line();
        }
        self
    }

    /// Separate two sections with exactly one blank line.
    pub fn blank_line(&mut self) -> &mut Self {
        self.end_line();
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Run `f` one nesting level deeper, unless the depth guard is exhausted.
    pub fn nested<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if self.nesting >= MAX_NESTING_DEPTH {
            tracing::warn!(
                depth = self.nesting,
                "nesting limit reached, skipping nested emission"
            );
            return self;
        }
        self.nesting += 1;
        f(self);
        self.nesting -= 1;
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Number of braced scopes opened and not yet closed.
    pub fn open_scopes(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_token(&mut self, text: &str, glue_left: bool) -> &mut Self {
        if text.is_empty() {
            return self;
        }

        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        } else if (!glue_left || self.buffer.ends_with('='))
            && self.buffer.chars().last().is_some_and(spaced_after)
        {
            self.buffer.push(' ');
        }

        self.buffer.push_str(text);
        if let Some(has_content) = self.scopes.last_mut() {
            *has_content = true;
        }
        self
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent);
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::swift()
    }
}

/// Tokens starting with these characters attach to the previous token,
/// unless it ends with `=` (`x = .none`).
fn glues_left(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(')' | ']' | ',' | ':' | '.' | '(') => true,
        // Postfix `?`/`!` and generic brackets glue; binary operators
        // (`??`, `!=`, `<=`, `< b`) stay spaced.
        Some('?' | '!' | '<' | '>') => chars
            .next()
            .is_none_or(|next| !next.is_whitespace() && !is_operator_char(next)),
        _ => false,
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '=' | '?' | '!' | '<' | '>' | '&' | '|' | '+' | '-' | '*' | '/' | '%' | '^' | '~'
    )
}

/// Whether a token following `prev` is separated from it by a space.
fn spaced_after(prev: char) -> bool {
    !(prev.is_whitespace() || matches!(prev, '(' | '[' | '<' | '.'))
}
