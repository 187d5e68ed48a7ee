use crate::processor::errors::VmError;

/// Total memory size in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Size of the reserved stack region at the bottom of memory. Addresses
/// below this are reachable only through `push`/`pop`.
pub const STACK_SIZE: u8 = 16;

/// Size of a stack slot and of every word access, in bytes.
pub const WORD_SIZE: u8 = 2;

/// Flat byte-addressable memory with a reserved stack region.
///
/// Layout: `[stack region | heap region]`
/// - **Stack region**: bytes `[0, STACK_SIZE)`, a LIFO of little-endian
///   16-bit words driven by the internal stack pointer.
/// - **Heap region**: bytes `[STACK_SIZE, MEMORY_SIZE)`, addressed
///   explicitly by `read_word`/`write_word`.
///
/// The stack pointer is always even, stays in `[0, STACK_SIZE]`, and names
/// the next free slot.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
    stack_pointer: u8,
}

impl Memory {
    /// Creates a zero-initialized memory with an empty stack.
    pub fn new() -> Self {
        Self {
            bytes: [0; MEMORY_SIZE],
            stack_pointer: 0,
        }
    }

    /// Reads the little-endian word at `addr`, `addr + 1`.
    ///
    /// Returns [`VmError::ReadingFromStackRegion`] for addresses inside the
    /// stack region and [`VmError::WordOutOfBounds`] when the high byte
    /// would fall past the end of memory.
    pub fn read_word(&self, addr: u8) -> Result<u16, VmError> {
        if addr < STACK_SIZE {
            return Err(VmError::ReadingFromStackRegion(addr));
        }
        let lo = addr as usize;
        if lo + 1 >= MEMORY_SIZE {
            return Err(VmError::WordOutOfBounds(addr));
        }
        Ok(u16::from_le_bytes([self.bytes[lo], self.bytes[lo + 1]]))
    }

    /// Writes `value` as a little-endian word at `addr`, `addr + 1`.
    ///
    /// Returns [`VmError::WritingToStackRegion`] for addresses inside the
    /// stack region and [`VmError::WordOutOfBounds`] when the high byte
    /// would fall past the end of memory.
    pub fn write_word(&mut self, addr: u8, value: u16) -> Result<(), VmError> {
        if addr < STACK_SIZE {
            return Err(VmError::WritingToStackRegion(addr));
        }
        let lo = addr as usize;
        if lo + 1 >= MEMORY_SIZE {
            return Err(VmError::WordOutOfBounds(addr));
        }
        self.bytes[lo..lo + 2].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Pushes a word onto the stack.
    ///
    /// Returns [`VmError::StackOverflow`] if the stack region is full.
    pub fn push(&mut self, value: u16) -> Result<(), VmError> {
        if self.stack_pointer + WORD_SIZE > STACK_SIZE {
            return Err(VmError::StackOverflow);
        }
        let slot = self.stack_pointer as usize;
        self.bytes[slot..slot + 2].copy_from_slice(&value.to_le_bytes());
        self.stack_pointer += WORD_SIZE;
        Ok(())
    }

    /// Pops the most recently pushed word off the stack.
    ///
    /// Returns [`VmError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<u16, VmError> {
        if self.stack_pointer < WORD_SIZE {
            return Err(VmError::StackUnderflow);
        }
        self.stack_pointer -= WORD_SIZE;
        let slot = self.stack_pointer as usize;
        Ok(u16::from_le_bytes([self.bytes[slot], self.bytes[slot + 1]]))
    }

    /// Returns the current stack pointer (offset of the next free slot).
    pub fn stack_pointer(&self) -> u8 {
        self.stack_pointer
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_starts_zeroed() {
        let mem = Memory::new();
        for addr in STACK_SIZE..u8::MAX {
            assert_eq!(mem.read_word(addr).unwrap(), 0);
        }
        assert_eq!(mem.stack_pointer(), 0);
    }

    #[test]
    fn word_round_trip() {
        let mut mem = Memory::new();
        for (addr, value) in [(16u8, 0u16), (20, 7), (100, 0xABCD), (254, u16::MAX)] {
            mem.write_word(addr, value).unwrap();
            assert_eq!(mem.read_word(addr).unwrap(), value);
        }
    }

    #[test]
    fn words_are_little_endian() {
        let mut mem = Memory::new();
        mem.write_word(20, 0x1234).unwrap();
        // Low byte at 20, high byte at 21: reading the overlapping word at
        // 21 sees 0x12 in its low byte.
        assert_eq!(mem.read_word(21).unwrap(), 0x0012);
    }

    #[test]
    fn stack_region_is_rejected_for_heap_access() {
        let mut mem = Memory::new();
        for addr in 0..STACK_SIZE {
            assert!(matches!(
                mem.read_word(addr),
                Err(VmError::ReadingFromStackRegion(a)) if a == addr
            ));
            assert!(matches!(
                mem.write_word(addr, 1),
                Err(VmError::WritingToStackRegion(a)) if a == addr
            ));
        }
        // First heap address is fine.
        mem.write_word(STACK_SIZE, 9).unwrap();
        assert_eq!(mem.read_word(STACK_SIZE).unwrap(), 9);
    }

    #[test]
    fn word_at_last_byte_is_out_of_bounds() {
        let mut mem = Memory::new();
        assert!(matches!(
            mem.read_word(255),
            Err(VmError::WordOutOfBounds(255))
        ));
        assert!(matches!(
            mem.write_word(255, 1),
            Err(VmError::WordOutOfBounds(255))
        ));
        // 254 still holds a full word.
        mem.write_word(254, 0xBEEF).unwrap();
        assert_eq!(mem.read_word(254).unwrap(), 0xBEEF);
    }

    #[test]
    fn stack_is_lifo() {
        let mut mem = Memory::new();
        mem.push(1).unwrap();
        mem.push(2).unwrap();
        mem.push(3).unwrap();
        assert_eq!(mem.pop().unwrap(), 3);
        assert_eq!(mem.pop().unwrap(), 2);
        assert_eq!(mem.pop().unwrap(), 1);
    }

    #[test]
    fn stack_pointer_stays_even() {
        let mut mem = Memory::new();
        mem.push(10).unwrap();
        assert_eq!(mem.stack_pointer(), 2);
        mem.push(11).unwrap();
        assert_eq!(mem.stack_pointer(), 4);
        mem.pop().unwrap();
        assert_eq!(mem.stack_pointer(), 2);
    }

    #[test]
    fn ninth_push_overflows() {
        let mut mem = Memory::new();
        for i in 0..8 {
            mem.push(i).unwrap();
        }
        assert_eq!(mem.stack_pointer(), STACK_SIZE);
        assert!(matches!(mem.push(8), Err(VmError::StackOverflow)));
    }

    #[test]
    fn pop_on_empty_stack_underflows() {
        let mut mem = Memory::new();
        assert!(matches!(mem.pop(), Err(VmError::StackUnderflow)));
        mem.push(5).unwrap();
        mem.pop().unwrap();
        assert!(matches!(mem.pop(), Err(VmError::StackUnderflow)));
    }

    #[test]
    fn stack_words_survive_full_depth() {
        let mut mem = Memory::new();
        let values = [0u16, 1, 0x00FF, 0xFF00, 0xABCD, 42, u16::MAX, 7];
        for &v in &values {
            mem.push(v).unwrap();
        }
        for &v in values.iter().rev() {
            assert_eq!(mem.pop().unwrap(), v);
        }
    }

    #[test]
    fn stack_and_heap_do_not_alias() {
        let mut mem = Memory::new();
        mem.push(0xFFFF).unwrap();
        assert_eq!(mem.read_word(STACK_SIZE).unwrap(), 0);
        mem.write_word(STACK_SIZE, 0x1111).unwrap();
        assert_eq!(mem.pop().unwrap(), 0xFFFF);
    }
}
