// Path template compiler
//
// Scans an HTTP path template such as `/v1/{name=messages/*}/detail` one
// character at a time and emits a JavaScript string expression building the
// URL, plus the accessors of every field the URL consumes.

use std::mem;

use super::ast::{CompiledPath, FieldPath, UrlPart};
use super::error::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Inside a literal run; the opening quote has been written
    Init,
    /// Reading the field path of a variable
    Field,
    /// Skipping a `=pattern` sub-template up to the closing brace
    Nested,
    /// Right after a closed variable
    Restart,
}

pub struct PathCompiler<'a> {
    param: &'a str,
    state: State,
    url: String,
    del: String,
    consumed: Vec<String>,
    parts: Vec<UrlPart>,
    literal: String,
    segment: String,
    segments: Vec<String>,
    open_brace: usize,
}

impl<'a> PathCompiler<'a> {
    /// Compile `template` against the parameter identifier `param`.
    ///
    /// Any configured prefix must already be stripped. An empty template
    /// compiles to an empty expression with nothing consumed.
    pub fn compile(template: &str, param: &'a str) -> Result<CompiledPath, TemplateError> {
        if template.is_empty() {
            return Ok(CompiledPath::default());
        }

        let mut compiler = Self {
            param,
            state: State::Init,
            url: String::from("'"),
            del: String::new(),
            consumed: Vec::new(),
            parts: Vec::new(),
            literal: String::new(),
            segment: String::new(),
            segments: Vec::new(),
            open_brace: 0,
        };

        for (pos, ch) in template.chars().enumerate() {
            compiler.step(pos, ch);
        }

        compiler.finish(template)
    }

    fn step(&mut self, pos: usize, ch: char) {
        match self.state {
            State::Init => {
                if ch == '{' {
                    self.open_variable(pos, "' + ");
                } else {
                    self.push_literal(ch);
                }
            }
            State::Field => match ch {
                '.' => {
                    self.url.push_str("']['");
                    self.del.push_str("']['");
                    self.segments.push(mem::take(&mut self.segment));
                }
                '=' => {
                    self.close_variable();
                    self.state = State::Nested;
                }
                '}' => {
                    self.close_variable();
                    self.state = State::Restart;
                }
                _ => {
                    self.url.push(ch);
                    self.del.push(ch);
                    self.segment.push(ch);
                }
            },
            State::Nested => {
                if ch == '}' {
                    self.state = State::Restart;
                }
            }
            State::Restart => {
                if ch == '{' {
                    // Adjacent variables, no literal in between
                    self.open_variable(pos, " + ");
                } else {
                    self.url.push_str(" + '");
                    self.state = State::Init;
                    self.push_literal(ch);
                }
            }
        }
    }

    fn push_literal(&mut self, ch: char) {
        // Escape for the single-quoted string; `literal` keeps the raw text
        match ch {
            '\\' => self.url.push_str("\\\\"),
            '\'' => self.url.push_str("\\'"),
            _ => self.url.push(ch),
        }
        self.literal.push(ch);
    }

    fn open_variable(&mut self, pos: usize, joiner: &str) {
        self.flush_literal();
        self.url.push_str(joiner);
        self.url.push_str(self.param);
        self.url.push_str("['");
        self.del.push_str(self.param);
        self.del.push_str("['");
        self.open_brace = pos;
        self.state = State::Field;
    }

    fn close_variable(&mut self) {
        self.url.push_str("']");
        self.del.push_str("']");
        self.consumed.push(mem::take(&mut self.del));

        self.segments.push(mem::take(&mut self.segment));
        let path = FieldPath::from_segments(mem::take(&mut self.segments));
        self.parts.push(UrlPart::Field(path));
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.parts.push(UrlPart::Literal(mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self, template: &str) -> Result<CompiledPath, TemplateError> {
        match self.state {
            State::Init => {
                self.url.push('\'');
                self.flush_literal();
            }
            State::Restart => {}
            State::Field | State::Nested => {
                return Err(TemplateError::UnterminatedVariable {
                    template: template.to_string(),
                    position: self.open_brace,
                });
            }
        }

        Ok(CompiledPath {
            url_expr: self.url,
            consumed: self.consumed,
            parts: self.parts,
        })
    }
}
