use super::Position;

/// ## Immutable opcode stream
///
/// A Wuf++ program is an ordered sequence of characters, read once
/// and never modified during execution or translation. Opcodes that
/// take a literal operand consume the following character.

#[derive(Debug, Clone, Default)]
pub struct Source {
    chars: Vec<char>,
}

impl Source {
    pub fn new(string: &str) -> Source {
        Source {
            chars: string.chars().collect(),
        }
    }

    /// An interactively entered line. The halt opcode is appended so
    /// the run always terminates at the end of the line.
    pub fn direct(string: &str) -> Source {
        let mut chars: Vec<char> = string.chars().collect();
        chars.push('=');
        Source { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.chars.get(position).copied()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
