use crate::processor::errors::VmError;

/// Register names in lexical order. A register's rank is its index here;
/// operand encoding relies on this ordering staying fixed.
pub const REGISTER_NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// Largest value a register can hold.
pub const REGISTER_MAX: u16 = u16::MAX;

/// A single 16-bit accumulator cell with saturating arithmetic.
///
/// The value is always in `[0, 65535]`; `add` and `subtract` clamp at the
/// bounds instead of wrapping.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Register {
    value: u16,
}

impl Register {
    /// Sets the register to `value` exactly.
    pub fn assign(&mut self, value: u16) {
        self.value = value;
    }

    /// Adds `value`, clamping to [`REGISTER_MAX`] on overflow.
    pub fn add(&mut self, value: u16) {
        self.value = self.value.saturating_add(value);
    }

    /// Subtracts `value`, clamping to 0 on underflow.
    pub fn subtract(&mut self, value: u16) {
        self.value = self.value.saturating_sub(value);
    }

    /// Returns the current value.
    pub fn read(&self) -> u16 {
        self.value
    }
}

/// Register file holding the four named registers.
///
/// Registers are addressed either by name (`"a"`..`"d"`) or by rank (0..4);
/// name lookup resolves through the rank, so both paths reach the same cell.
pub struct RegisterFile {
    regs: [Register; REGISTER_NAMES.len()],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            regs: [Register::default(); REGISTER_NAMES.len()],
        }
    }

    /// Returns the rank of a register name, or `None` if the token is not
    /// a register name.
    pub fn rank_of(name: &str) -> Option<u16> {
        REGISTER_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|rank| rank as u16)
    }

    /// Returns a reference to the register with the given rank.
    ///
    /// Returns [`VmError::InvalidRegisterId`] if `rank` is out of range.
    pub fn get(&self, rank: u16) -> Result<&Register, VmError> {
        self.regs
            .get(rank as usize)
            .ok_or(VmError::InvalidRegisterId(rank))
    }

    /// Returns a mutable reference to the register with the given rank.
    ///
    /// Returns [`VmError::InvalidRegisterId`] if `rank` is out of range.
    pub fn get_mut(&mut self, rank: u16) -> Result<&mut Register, VmError> {
        self.regs
            .get_mut(rank as usize)
            .ok_or(VmError::InvalidRegisterId(rank))
    }

    /// Reads the value of the register with the given rank.
    pub fn read(&self, rank: u16) -> Result<u16, VmError> {
        Ok(self.get(rank)?.read())
    }

    /// Returns a mutable reference to the register with the given name.
    ///
    /// Returns [`VmError::InvalidRegisterId`] if `name` is not a register
    /// name (reported as the out-of-range rank).
    pub fn get_mut_by_name(&mut self, name: &str) -> Result<&mut Register, VmError> {
        let rank =
            Self::rank_of(name).ok_or(VmError::InvalidRegisterId(REGISTER_NAMES.len() as u16))?;
        self.get_mut(rank)
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_read_is_identity() {
        let mut reg = Register::default();
        for v in [0, 1, 255, 256, 32768, u16::MAX - 1, u16::MAX] {
            reg.assign(v);
            assert_eq!(reg.read(), v);
        }
    }

    #[test]
    fn add_exact_when_in_range() {
        let mut reg = Register::default();
        reg.assign(5);
        reg.add(10);
        assert_eq!(reg.read(), 15);
    }

    #[test]
    fn add_saturates_at_max() {
        let mut reg = Register::default();
        reg.assign(65000);
        reg.add(1000);
        assert_eq!(reg.read(), REGISTER_MAX);

        reg.assign(u16::MAX);
        reg.add(1);
        assert_eq!(reg.read(), u16::MAX);

        // Exactly at the boundary is not an overflow.
        reg.assign(u16::MAX - 1);
        reg.add(1);
        assert_eq!(reg.read(), u16::MAX);
    }

    #[test]
    fn subtract_exact_when_in_range() {
        let mut reg = Register::default();
        reg.assign(15);
        reg.subtract(10);
        assert_eq!(reg.read(), 5);
        reg.subtract(5);
        assert_eq!(reg.read(), 0);
    }

    #[test]
    fn subtract_saturates_at_zero() {
        let mut reg = Register::default();
        reg.assign(3);
        reg.subtract(4);
        assert_eq!(reg.read(), 0);

        reg.assign(0);
        reg.subtract(u16::MAX);
        assert_eq!(reg.read(), 0);
    }

    #[test]
    fn rank_of_is_lexical_order() {
        assert_eq!(RegisterFile::rank_of("a"), Some(0));
        assert_eq!(RegisterFile::rank_of("b"), Some(1));
        assert_eq!(RegisterFile::rank_of("c"), Some(2));
        assert_eq!(RegisterFile::rank_of("d"), Some(3));
        assert_eq!(RegisterFile::rank_of("e"), None);
        assert_eq!(RegisterFile::rank_of("A"), None);
        assert_eq!(RegisterFile::rank_of("ab"), None);
        assert_eq!(RegisterFile::rank_of(""), None);
    }

    #[test]
    fn name_and_rank_reach_the_same_cell() {
        let mut file = RegisterFile::new();
        file.get_mut_by_name("c").unwrap().assign(42);
        assert_eq!(file.read(2).unwrap(), 42);

        file.get_mut(2).unwrap().add(1);
        assert_eq!(file.get_mut_by_name("c").unwrap().read(), 43);
    }

    #[test]
    fn out_of_range_rank_is_an_error() {
        let file = RegisterFile::new();
        assert!(matches!(file.get(4), Err(VmError::InvalidRegisterId(4))));
        assert!(matches!(
            file.read(u16::MAX),
            Err(VmError::InvalidRegisterId(u16::MAX))
        ));
    }

    #[test]
    fn registers_start_at_zero() {
        let file = RegisterFile::new();
        for rank in 0..REGISTER_NAMES.len() as u16 {
            assert_eq!(file.read(rank).unwrap(), 0);
        }
    }
}
