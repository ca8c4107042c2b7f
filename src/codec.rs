//! Packing and unpacking of Goldflake IDs
//!
//! A Goldflake ID is composed of
//! - 39 bits for time in units of 10 msec
//! - 13 bits for a machine id
//! - 11 bits for a sequence number
//!
//! The most significant bit is never set.

/// Bit length of the time field
pub const BIT_LEN_TIME: u32 = 39;

/// Bit length of the sequence field
pub const BIT_LEN_SEQUENCE: u32 = 11;

/// Bit length of the machine id field (63 - 39 - 11)
pub const BIT_LEN_MACHINE_ID: u32 = 63 - BIT_LEN_TIME - BIT_LEN_SEQUENCE;

/// Largest machine id that fits in the machine id field
pub const MAX_MACHINE_ID: u16 = ((1u32 << BIT_LEN_MACHINE_ID) - 1) as u16;

/// Largest sequence number that fits in the sequence field
pub const MAX_SEQUENCE: u16 = ((1u32 << BIT_LEN_SEQUENCE) - 1) as u16;

/// Exclusive upper bound of the time field
pub(crate) const TIME_LIMIT: i64 = 1 << BIT_LEN_TIME;

const TIME_SHIFT: u32 = BIT_LEN_SEQUENCE + BIT_LEN_MACHINE_ID;
const MASK_TIME: u64 = (1 << BIT_LEN_TIME) - 1;
const MASK_MACHINE_ID: u64 = ((1 << BIT_LEN_MACHINE_ID) - 1) << BIT_LEN_SEQUENCE;
const MASK_SEQUENCE: u64 = (1 << BIT_LEN_SEQUENCE) - 1;

/// Components of a Goldflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposed {
    /// The original ID
    pub id: u64,
    /// Most significant bit, always 0 for IDs produced by a generator
    pub msb: u64,
    /// Elapsed time since the generator's start time, in 10 msec units
    pub time: u64,
    /// Sequence number within the time unit
    pub sequence: u64,
    /// Machine id of the generator
    #[cfg_attr(feature = "serde", serde(rename = "machine-id"))]
    pub machine_id: u64,
}

/// Pack elapsed time, sequence and machine id into an ID
///
/// Values wider than their field spill into the neighbouring field; callers
/// are expected to respect the bit lengths.
#[inline(always)]
pub const fn encode(elapsed_time: u64, sequence: u16, machine_id: u16) -> u64 {
    elapsed_time << TIME_SHIFT | (machine_id as u64) << BIT_LEN_SEQUENCE | sequence as u64
}

/// Decompose an ID into its parts
#[inline]
pub const fn decompose(id: u64) -> Decomposed {
    Decomposed {
        id,
        msb: msb(id),
        time: time(id),
        sequence: sequence(id),
        machine_id: machine_id(id),
    }
}

/// Extract the most significant bit
#[inline(always)]
pub const fn msb(id: u64) -> u64 {
    id >> 63
}

/// Extract the time component
#[inline(always)]
pub const fn time(id: u64) -> u64 {
    (id >> TIME_SHIFT) & MASK_TIME
}

/// Extract the sequence component
#[inline(always)]
pub const fn sequence(id: u64) -> u64 {
    id & MASK_SEQUENCE
}

/// Extract the machine id component
#[inline(always)]
pub const fn machine_id(id: u64) -> u64 {
    (id & MASK_MACHINE_ID) >> BIT_LEN_SEQUENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_lengths() {
        assert_eq!(BIT_LEN_MACHINE_ID, 13);
        assert_eq!(BIT_LEN_TIME + BIT_LEN_SEQUENCE + BIT_LEN_MACHINE_ID, 63);
        assert_eq!(MAX_MACHINE_ID, 8191);
        assert_eq!(MAX_SEQUENCE, 2047);
    }

    #[test]
    fn test_decompose() {
        let time = 0x1234567;
        let machine = 1234;
        let seq = 123;

        let id = encode(time, seq, machine);
        assert_eq!(
            decompose(id),
            Decomposed {
                id,
                msb: 0,
                time,
                sequence: seq as u64,
                machine_id: machine as u64,
            }
        );
    }

    #[test]
    fn test_component_boundaries() {
        let max_time = (1u64 << BIT_LEN_TIME) - 1;
        let id = encode(max_time, MAX_SEQUENCE, MAX_MACHINE_ID);

        assert_eq!(id, u64::MAX >> 1);
        assert_eq!(msb(id), 0);
        assert_eq!(time(id), max_time);
        assert_eq!(sequence(id), MAX_SEQUENCE as u64);
        assert_eq!(machine_id(id), MAX_MACHINE_ID as u64);
    }

    #[test]
    fn test_field_positions() {
        assert_eq!(encode(0, 1, 0), 1);
        assert_eq!(encode(0, 0, 1), 1 << 11);
        assert_eq!(encode(1, 0, 0), 1 << 24);
    }

    #[test]
    fn test_msb_is_reported() {
        let parts = decompose(1 << 63);
        assert_eq!(parts.msb, 1);
        assert_eq!(parts.time, 0);
        assert_eq!(parts.sequence, 0);
        assert_eq!(parts.machine_id, 0);
    }
}
