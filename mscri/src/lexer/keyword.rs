// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Let,
    If,
    Then,
    Else,
    Endif,
    While,
    Do,
    Endwhile,
    For,
    To,
    Step,
    Endfor,
    Function,
    Endfunction,
    Return,
    Print,
    And,
    Or,
    Not,
    True,
    False,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// Whether the keyword can start a statement that actually does something.
    ///
    /// The loop, function and `else` keywords are reserved, but statements led by them are
    /// dropped by the dispatcher.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self, Self::Let | Self::Print | Self::If)
    }
}
