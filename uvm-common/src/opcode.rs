use std::fmt;

/// The four operations understood by the UVM.
///
/// Discriminants are the 3-bit values stored in the `A` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    LoadConstant = 1,
    StoreToMemory = 2,
    Multiply = 3,
    LoadFromMemory = 7,
}

impl Opcode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Opcode::LoadConstant),
            2 => Some(Opcode::StoreToMemory),
            3 => Some(Opcode::Multiply),
            7 => Some(Opcode::LoadFromMemory),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Opcode::LoadConstant => "LOAD_CONSTANT",
            Opcode::StoreToMemory => "STORE_TO_MEMORY",
            Opcode::Multiply => "MULTIPLY",
            Opcode::LoadFromMemory => "LOAD_FROM_MEMORY",
        }
    }

    pub fn all() -> Vec<Opcode> {
        vec![
            Opcode::LoadConstant,
            Opcode::StoreToMemory,
            Opcode::Multiply,
            Opcode::LoadFromMemory,
        ]
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_known() {
        for op in Opcode::all() {
            assert_eq!(Opcode::from_u8(op as u8), Some(op));
        }
    }

    #[test]
    fn test_from_u8_unknown() {
        for value in [0u8, 4, 5, 6, 8, 255] {
            assert_eq!(Opcode::from_u8(value), None);
        }
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(Opcode::LoadFromMemory.to_string(), "LOAD_FROM_MEMORY");
        assert_eq!(Opcode::Multiply.to_str(), "MULTIPLY");
    }
}
