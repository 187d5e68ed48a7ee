use crate::processor::errors::VmError;
use crate::processor::registers::RegisterFile;

/// A parsed instruction argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    /// Literal numeric value.
    Immediate(u16),
    /// Rank index into the register file.
    RegisterRef(u16),
}

impl Operand {
    /// Classifies a token: an exact register-name match becomes a
    /// [`Operand::RegisterRef`], anything else must parse as an unsigned
    /// decimal integer.
    ///
    /// Returns [`VmError::MalformedOperand`] for tokens that are neither.
    pub fn parse(token: &str) -> Result<Self, VmError> {
        if let Some(rank) = RegisterFile::rank_of(token) {
            return Ok(Operand::RegisterRef(rank));
        }
        token
            .parse::<u16>()
            .map(Operand::Immediate)
            .map_err(|_| VmError::MalformedOperand(token.to_string()))
    }

    /// Returns a human-readable kind name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Immediate(_) => "Immediate",
            Operand::RegisterRef(_) => "Register",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_names_classify_as_register_refs() {
        assert_eq!(Operand::parse("a").unwrap(), Operand::RegisterRef(0));
        assert_eq!(Operand::parse("b").unwrap(), Operand::RegisterRef(1));
        assert_eq!(Operand::parse("c").unwrap(), Operand::RegisterRef(2));
        assert_eq!(Operand::parse("d").unwrap(), Operand::RegisterRef(3));
    }

    #[test]
    fn integers_classify_as_immediates() {
        assert_eq!(Operand::parse("0").unwrap(), Operand::Immediate(0));
        assert_eq!(Operand::parse("42").unwrap(), Operand::Immediate(42));
        assert_eq!(
            Operand::parse("65535").unwrap(),
            Operand::Immediate(u16::MAX)
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for token in ["x", "e", "-1", "70000", "1.5", "0x10", "a1", ""] {
            assert!(matches!(
                Operand::parse(token),
                Err(VmError::MalformedOperand(t)) if t == token
            ));
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(Operand::Immediate(1).kind(), "Immediate");
        assert_eq!(Operand::RegisterRef(0).kind(), "Register");
    }
}
