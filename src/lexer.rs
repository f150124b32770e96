use crate::ast::{Batch, Chunk, ChunkKind};
use crate::error::{ParseError, ParseErrorKind};

/// Splits one shorthand string into batches of chunks.
///
/// Scanning is a single left-to-right pass. `.`, `,` and `(` break chunks
/// only outside parentheses; inside them every character up to the next `)`
/// belongs to the annotation, and parentheses do not nest.
pub struct Lexer<'a> {
    spec: &'a str,
    input: Vec<char>,
    position: usize,
    started: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(spec: &'a str) -> Self {
        Lexer {
            spec,
            input: spec.chars().collect(),
            position: 0,
            started: false,
            finished: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn error(&self, position: usize, reason: ParseErrorKind) -> ParseError {
        ParseError::new(self.spec, position, reason)
    }

    /// Reads up to the next delimiter. A `)` here has no matching `(`.
    fn read_name(&mut self) -> Result<String, ParseError> {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            match ch {
                '.' | ',' | '(' => break,
                ')' => return Err(self.error(self.position, ParseErrorKind::UnmatchedParen)),
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }
        Ok(result)
    }

    fn read_segment(&mut self, start: usize) -> Result<String, ParseError> {
        let name = self.read_name()?;
        if name.is_empty() {
            return Err(self.error(start, ParseErrorKind::EmptySegment));
        }
        Ok(name)
    }

    fn read_annotation(&mut self, start: usize) -> Result<String, ParseError> {
        self.advance(); // Consume '('

        let mut body = String::new();
        loop {
            match self.current_char() {
                Some(')') => {
                    self.advance();
                    break;
                }
                Some(ch) => {
                    body.push(ch);
                    self.advance();
                }
                None => return Err(self.error(start, ParseErrorKind::UnclosedParen)),
            }
        }

        if body.is_empty() {
            return Err(self.error(start, ParseErrorKind::EmptyAnnotation));
        }

        // Only a connector or another annotation may follow
        match self.current_char() {
            None | Some('.' | ',' | '(') => Ok(body),
            Some(')') => Err(self.error(self.position, ParseErrorKind::UnmatchedParen)),
            Some(_) => Err(self.error(self.position, ParseErrorKind::TrailingText)),
        }
    }

    fn read_chunk(&mut self) -> Result<Chunk, ParseError> {
        let start = self.position;

        if !self.started {
            self.started = true;
            return match self.current_char() {
                Some(')') => Err(self.error(start, ParseErrorKind::UnmatchedParen)),
                _ => {
                    let name = self.read_segment(start)?;
                    Ok(Chunk::new(ChunkKind::PlainName(name), start))
                }
            };
        }

        let kind = match self.current_char() {
            Some('.') => {
                self.advance();
                ChunkKind::Descend(self.read_segment(start)?)
            }
            Some(',') => {
                self.advance();
                ChunkKind::Sibling(self.read_segment(start)?)
            }
            Some('(') => ChunkKind::Annotation(self.read_annotation(start)?),
            _ => return Err(self.error(start, ParseErrorKind::TrailingText)),
        };
        Ok(Chunk::new(kind, start))
    }

    /// Returns the next batch, or `None` once the whole string is consumed.
    ///
    /// The `.` that ends a batch opens the first chunk of the next one.
    pub fn next_batch(&mut self) -> Result<Option<Batch>, ParseError> {
        if self.finished {
            return Ok(None);
        }

        let mut batch = Vec::new();
        loop {
            batch.push(self.read_chunk()?);

            match self.current_char() {
                None => {
                    self.finished = true;
                    return Ok(Some(batch));
                }
                Some('.') => return Ok(Some(batch)),
                Some(_) => {}
            }
        }
    }

    /// Reads every batch, failing on the first malformed chunk.
    pub fn tokenize(mut self) -> Result<Vec<Batch>, ParseError> {
        let mut batches = Vec::new();
        while let Some(batch) = self.next_batch()? {
            batches.push(batch);
        }
        Ok(batches)
    }
}

#[test]
fn test_batches_break_on_dots_only() {
    let batches = Lexer::new("a.b,c(x:1).d").tokenize().unwrap();

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0], vec![Chunk::new(ChunkKind::PlainName("a".into()), 0)]);
    assert_eq!(
        batches[1],
        vec![
            Chunk::new(ChunkKind::Descend("b".into()), 1),
            Chunk::new(ChunkKind::Sibling("c".into()), 3),
            Chunk::new(ChunkKind::Annotation("x:1".into()), 5),
        ]
    );
    assert_eq!(batches[2], vec![Chunk::new(ChunkKind::Descend("d".into()), 10)]);
}

#[test]
fn test_delimiters_inside_parens_are_opaque() {
    let batches = Lexer::new("site(url:a.b,c(d)").tokenize().unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0][1].kind,
        ChunkKind::Annotation("url:a.b,c(d".into())
    );
}
