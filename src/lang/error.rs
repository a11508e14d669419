use super::Position;

pub struct Error {
    code: u16,
    position: Option<Position>,
    character: Option<char>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_position($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr, ..$ch:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .with_character($ch)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            position: None,
            character: None,
            message: String::new(),
        }
    }

    pub fn at_position(&self, position: Position) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            code: self.code,
            position: Some(position),
            character: self.character,
            message: self.message.clone(),
        }
    }

    pub fn with_character(&self, character: char) -> Error {
        debug_assert!(self.character.is_none());
        Error {
            code: self.code,
            position: self.position,
            character: Some(character),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            position: self.position,
            character: self.character,
            message: message.to_string(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn character(&self) -> Option<char> {
        self.character
    }
}

pub enum ErrorCode {
    UnknownOpcode = 1,
    StackOverflow = 2,
    StackUnderflow = 3,
    UnexpectedEnd = 4,
    Break = 5,
    FileNotFound = 6,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "UNKNOWN OPCODE",
            2 => "STACK OVERFLOW",
            3 => "STACK UNDERFLOW",
            4 => "UNEXPECTED END OF PROGRAM",
            5 => "BREAK",
            6 => "FILE NOT FOUND",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(character) = self.character {
            suffix.push_str(&format!(" '{}'", character));
        }
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT POSITION {}", position));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
