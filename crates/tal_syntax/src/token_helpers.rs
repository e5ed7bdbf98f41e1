//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use tal_core::lang::data_types::DataTypeId;
use tal_core::lang::delimiters::DelimiterId;
use tal_core::lang::indirection::IndirectionId;
use tal_core::lang::keywords::KeywordId;
use tal_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the data type id, if this is a data-type token.
    pub fn data_type_id(&self) -> Option<DataTypeId> {
        match self {
            TokenKind::DataType(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the delimiter id, if this is a delimiter token.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        match self {
            TokenKind::Delimiter(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given delimiter.
    pub fn is_delimiter(&self, id: DelimiterId) -> bool {
        matches!(self, TokenKind::Delimiter(d) if *d == id)
    }

    /// Return `true` for anything that marks a pointer in a declaration: an indirection symbol or a bare `.`.
    pub fn is_indirection_marker(&self) -> bool {
        matches!(
            self,
            TokenKind::Indirection(
                IndirectionId::Standard
                    | IndirectionId::Extended
                    | IndirectionId::SystemGlobal
                    | IndirectionId::SystemGlobalExtended
            ) | TokenKind::Delimiter(DelimiterId::Dot)
        )
    }

    /// Return the identifier text, if this is a name token.
    pub fn name(&self) -> Option<&str> {
        match self {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Return `true` for word tokens (names and every reserved-word class).
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::Keyword(_) | TokenKind::DataType(_)
        ) || matches!(self, TokenKind::Operator(id) if tal_core::lang::operators::info_for(*id).is_keyword_spelling)
    }

    /// Return `true` for either directive marker.
    pub fn is_directive_marker(&self) -> bool {
        matches!(self, TokenKind::Directive | TokenKind::DirectiveLine)
    }

    /// Return `true` if this token is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::CommentLine)
    }

    /// Return `true` if this token closes its source line. A `--` comment owns its terminator.
    pub fn ends_line(&self) -> bool {
        matches!(self, TokenKind::NewLine | TokenKind::CommentLine)
    }

    /// Return `true` if this token carries no declaration content (newlines and comments).
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::NewLine) || self.is_comment()
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.delimiter_id()`.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        self.kind.delimiter_id()
    }

    /// Convenience wrapper for `self.kind.is_delimiter(id)`.
    pub fn is_delimiter(&self, id: DelimiterId) -> bool {
        self.kind.is_delimiter(id)
    }
}
