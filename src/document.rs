//! Document lifecycle, query layer, and writer.
//!
//! An [`IniDocument`] loads (or creates) its backing file on construction,
//! holds the ordered token sequence in memory, and persists only on an
//! explicit [`IniDocument::save`]. There is no auto-save, no file locking,
//! and no atomic temp-file swap; a failure mid-write can leave a partially
//! written file and the caller decides recovery policy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IniError, ParseResult};
use crate::parser;
use crate::token::{Property, Section, Token};

/// An INI document bound to a file path.
#[derive(Debug, Clone)]
pub struct IniDocument {
    path: PathBuf,
    tokens: Vec<Token>,
}

impl IniDocument {
    /// Load a document from `path`, or create an empty file there.
    ///
    /// A missing file is not an error: an empty file is created immediately
    /// and the document starts with no tokens. Reading or creating the file
    /// can fail with [`IniError::Io`].
    pub fn open(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref().to_path_buf();

        let tokens = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| IniError::io(path.display().to_string(), e.to_string()))?;
            parser::parse(&content)
        } else {
            fs::File::create(&path)
                .map_err(|e| IniError::io(path.display().to_string(), e.to_string()))?;
            Vec::new()
        };

        Ok(Self { path, tokens })
    }

    /// Create a document over an already-built token sequence
    pub fn with_tokens(path: impl AsRef<Path>, tokens: Vec<Token>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            tokens,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level token sequence, in document order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Find the first top-level property with the given name.
    ///
    /// When `search_in_sections` is set and no top-level property matches,
    /// the search continues through each section's children in document
    /// order.
    pub fn get_property(&self, name: &str, search_in_sections: bool) -> Option<&Property> {
        let top = self
            .tokens
            .iter()
            .filter_map(Token::as_property)
            .find(|property| property.name() == name);

        if top.is_some() || !search_in_sections {
            return top;
        }

        self.tokens
            .iter()
            .filter_map(Token::as_section)
            .find_map(|section| section.get_property(name))
    }

    /// Mutable variant of [`IniDocument::get_property`]
    pub fn get_property_mut(
        &mut self,
        name: &str,
        search_in_sections: bool,
    ) -> Option<&mut Property> {
        let top = self
            .tokens
            .iter()
            .position(|token| matches!(token, Token::Property(p) if p.name() == name));

        if let Some(index) = top {
            return match &mut self.tokens[index] {
                Token::Property(property) => Some(property),
                _ => None,
            };
        }

        if !search_in_sections {
            return None;
        }

        self.tokens.iter_mut().find_map(|token| match token {
            Token::Section(section) => section.get_property_mut(name),
            _ => None,
        })
    }

    /// Find the first top-level section with the given name
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.tokens
            .iter()
            .filter_map(Token::as_section)
            .find(|section| section.name() == name)
    }

    /// Mutable variant of [`IniDocument::get_section`]
    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.tokens.iter_mut().find_map(|token| match token {
            Token::Section(section) if section.name() == name => Some(section),
            _ => None,
        })
    }

    /// Serialize the current token sequence back to text
    pub fn serialize(&self) -> String {
        serialize(&self.tokens)
    }

    /// Overwrite the backing file with the serialized token sequence
    pub fn save(&self) -> ParseResult<()> {
        fs::write(&self.path, self.serialize())
            .map_err(|e| IniError::io(self.path.display().to_string(), e.to_string()))
    }
}

/// Serialize a token sequence back to text.
///
/// Sections emit their header and then their children at the same textual
/// level (no indentation). Error tokens emit nothing, so malformed input is
/// permanently dropped from the persisted output.
pub fn serialize(tokens: &[Token]) -> String {
    let mut output = String::new();
    write_tokens(tokens, &mut output);
    output
}

fn write_tokens(tokens: &[Token], output: &mut String) {
    for token in tokens {
        match token {
            Token::Section(section) => {
                output.push('[');
                output.push_str(section.name());
                output.push_str("]\n");
                write_tokens(section.children(), output);
            }

            Token::Property(property) => {
                if property.is_quoted() {
                    output.push_str(&format!(
                        "{} = \"{}\"\n",
                        property.name(),
                        property.raw_value()
                    ));
                } else {
                    output.push_str(&format!("{} = {}\n", property.name(), property.raw_value()));
                }
            }

            Token::Comment(text) => {
                if text.is_empty() {
                    output.push('\n');
                } else {
                    output.push_str(&format!(";{}\n", text));
                }
            }

            Token::Error(_) => {}
        }
    }
}
