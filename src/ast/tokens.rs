/// What a chunk of a shorthand string asks the parser to do.
///
/// The lexer decides the kind from the character that opened the chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkKind {
    /// The first segment of a shorthand string
    ///
    /// # Examples
    /// ```text
    /// user
    /// ```
    PlainName(String),

    /// Segment after `.`, resolved under the current node
    ///
    /// # Examples
    /// ```text
    /// user.name
    ///     ^^^^^
    /// ```
    Descend(String),

    /// Segment after `,`, resolved under the node that was current when the
    /// batch started
    ///
    /// # Examples
    /// ```text
    /// user.name,email
    ///          ^^^^^^
    /// ```
    Sibling(String),

    /// Parenthesized text with the parentheses stripped
    ///
    /// # Examples
    /// ```text
    /// posts(first:5)
    /// posts(author as a)
    /// ```
    Annotation(String),
}

/// A chunk together with the character offset of its opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub position: usize,
}

impl Chunk {
    pub fn new(kind: ChunkKind, position: usize) -> Self {
        Chunk { kind, position }
    }
}

/// Chunks applied together. A batch ends at every `.` outside parentheses
/// and at the end of the shorthand string.
pub type Batch = Vec<Chunk>;
