// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Delimiter {
    #[strum(serialize = "left parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "right parenthesis")]
    RightParenthesis,
    #[strum(serialize = "comma")]
    Comma,
}

impl Delimiter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Comma => ",",
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
