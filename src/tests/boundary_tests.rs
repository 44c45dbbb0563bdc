#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{FixedClock, FixedRand, TEST_EPOCH};
    use crate::*;

    #[test]
    fn test_machine_id_out_of_range() {
        let generator = IdGenerator::new();
        for machine_id in [0u16, 1024, 2048, u16::MAX] {
            match generator.generate(machine_id) {
                Err(IdError::MachineIdOutOfRange {
                    machine_id: rejected,
                    min,
                    max,
                }) => {
                    assert_eq!(rejected, machine_id);
                    assert_eq!(min, 1);
                    assert_eq!(max, 1023);
                }
                other => panic!("Expected MachineIdOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_machine_id_boundaries() {
        let generator = IdGenerator::new();

        let low = generator.generate_id(1).unwrap();
        assert_eq!(generator.extract.machine_id(low), 1);

        let high = generator.generate_id(1023).unwrap();
        assert_eq!(generator.extract.machine_id(high), 1023);
    }

    #[test]
    fn test_id_bit_structure() {
        let config = IdConfig::builder().epoch(TEST_EPOCH).build();
        let generator =
            IdGenerator::with_sources(config, FixedClock(TEST_EPOCH + 0x1ABCDE), FixedRand(0xA5A));
        let id = generator.generate_id(0b1010101010).unwrap().as_u64();

        let seq_mask = 0xFFF; // 12 bits
        let machine_mask = 0x3FF << 12; // 10 bits shifted by 12
        let ts_mask = !0u64 << 22; // remaining 42 bits, top one reserved

        assert_eq!(id & seq_mask, 0xA5A);
        assert_eq!((id & machine_mask) >> 12, 0b1010101010);
        assert_eq!((id & ts_mask) >> 22, 0x1ABCDE);
        assert_eq!(id >> 63, 0, "Reserved bit must stay clear");
    }

    #[test]
    fn test_63_bit_boundary_without_truncation() {
        let config = IdConfig::builder().epoch(TEST_EPOCH).build();
        let generator = IdGenerator::with_sources(
            config,
            FixedClock(TEST_EPOCH + FlakeId::MAX_TIMESTAMP),
            FixedRand(FlakeId::MAX_SEQUENCE),
        );

        let id = generator.generate(FlakeId::MAX_MACHINE_ID).unwrap();
        assert_eq!(id, i64::MAX.to_string());
        assert_eq!(id, "9223372036854775807");
    }

    #[test]
    fn test_distinct_machines_never_collide() {
        let config = IdConfig::builder().epoch(TEST_EPOCH).build();
        // Same instant, same sequence: only the machine field tells them apart
        let generator =
            IdGenerator::with_sources(config, FixedClock(TEST_EPOCH + 42), FixedRand(9));

        let a = generator.generate(1).unwrap();
        let b = generator.generate(2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_numeric_value_within_63_bits() {
        let generator = IdGenerator::new();
        for machine_id in [1, 512, 1023] {
            let id = generator.generate_id(machine_id).unwrap();
            assert!(id.as_u64() <= i64::MAX as u64);
        }
    }
}
