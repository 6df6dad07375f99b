use crate::error::ParseResult;
use crate::value::{FromValue, ToValue};

/// A unit of parsed document structure.
///
/// The top level of a document is an ordered sequence of tokens; insertion
/// order is the persisted order.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A `[name]` header and the tokens absorbed under it
    Section(Section),

    /// A `key = value` line
    Property(Property),

    /// A blank line (empty text) or a `;` line with the marker stripped
    Comment(String),

    /// The raw text of a line that classified as nothing else.
    /// Error tokens serialize to nothing and are dropped on the next save.
    Error(String),
}

impl Token {
    /// Borrow the token as a section, if it is one
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Token::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Borrow the token as a property, if it is one
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Token::Property(property) => Some(property),
            _ => None,
        }
    }
}

/// A named, single-level group of properties, comments, and error lines.
///
/// Sections never nest; the builder guarantees a section's children contain
/// no further sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    children: Vec<Token>,
}

impl Section {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tokens absorbed under this section's header, in document order
    pub fn children(&self) -> &[Token] {
        &self.children
    }

    /// Append a child token. Returns `false` without appending when the
    /// token is a section, which may not nest.
    pub fn push(&mut self, token: Token) -> bool {
        if matches!(token, Token::Section(_)) {
            return false;
        }
        self.children.push(token);
        true
    }

    /// Find the first property child with the given name
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.children
            .iter()
            .filter_map(Token::as_property)
            .find(|property| property.name() == name)
    }

    /// Find the first property child with the given name, mutably
    pub fn get_property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.children.iter_mut().find_map(|token| match token {
            Token::Property(property) if property.name() == name => Some(property),
            _ => None,
        })
    }
}

/// A named key-value pair stored as text, with a quoting flag.
///
/// The flag records whether the original or most recently assigned value was
/// textual; quoted values are wrapped in double quotes on write.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    value: String,
    quoted: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>, quoted: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            quoted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored string representation, without quotes
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Parse the stored text as `T`.
    ///
    /// Fails with [`IniError::Conversion`](crate::IniError::Conversion) when
    /// the text does not parse; the error is propagated, never defaulted.
    pub fn get<T: FromValue>(&self) -> ParseResult<T> {
        T::from_ini(&self.value)
    }

    /// Replace the stored value with the canonical string form of `value`,
    /// updating the quoting flag to match the value's type.
    pub fn set<T: ToValue>(&mut self, value: T) {
        self.quoted = T::QUOTED;
        self.value = value.to_ini();
    }
}
