//! Decimal rendering and agreement between the native and limb paths

#[cfg(test)]
mod tests {
    use crate::limbs;
    use crate::*;
    use rand::{rng, Rng};

    fn native(timestamp: u64, machine_id: u16, sequence: u16) -> FlakeId {
        FlakeId::from_parts(timestamp, machine_id, sequence).unwrap()
    }

    fn narrow(timestamp: u64, machine_id: u16, sequence: u16) -> limbs::Limbs {
        limbs::pack(limbs::from_u64(timestamp), machine_id, sequence)
    }

    #[test]
    fn test_paths_agree_on_boundaries() {
        let timestamps = [
            0,
            1,
            5000,
            (1 << 20) - 1,
            1 << 31,
            (1 << 32) + 1,
            FlakeId::MAX_TIMESTAMP - 1,
            FlakeId::MAX_TIMESTAMP,
        ];
        let machines = [1, 2, 511, 512, 1022, 1023];
        let sequences = [0, 1, 2047, 2048, 4094, 4095];

        for &ts in &timestamps {
            for &machine in &machines {
                for &seq in &sequences {
                    let wide = native(ts, machine, seq);
                    let limbs = narrow(ts, machine, seq);
                    assert_eq!(limbs::to_u64(limbs), wide.as_u64());
                    assert_eq!(limbs::to_decimal(limbs), wide.to_string());
                }
            }
        }
    }

    #[test]
    fn test_paths_agree_on_random_inputs() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let ts = rng.random_range(0..=FlakeId::MAX_TIMESTAMP);
            let machine = rng.random_range(FlakeId::MIN_MACHINE_ID..=FlakeId::MAX_MACHINE_ID);
            let seq = rng.random_range(0..=FlakeId::MAX_SEQUENCE);

            let wide = native(ts, machine, seq);
            let limbs = narrow(ts, machine, seq);
            assert_eq!(limbs::to_decimal(limbs), wide.to_string(), "ts={ts} machine={machine} seq={seq}");
        }
    }

    #[test]
    fn test_generated_string_parses_back() {
        let generator = IdGenerator::new();
        for machine_id in [1, 100, 1023] {
            let text = generator.generate(machine_id).unwrap();
            assert!(text.bytes().all(|b| b.is_ascii_digit()));

            let id: FlakeId = text.parse().unwrap();
            assert_eq!(id.to_string(), text);
            assert_eq!(id.machine_id(), machine_id);
            assert!(id.sequence() <= FlakeId::MAX_SEQUENCE);
        }
    }

    #[test]
    fn test_decimal_text_has_no_padding() {
        let id = native(0, 1, 0);
        assert_eq!(id.to_string(), "4096");
        assert_eq!(limbs::to_decimal(narrow(0, 1, 0)), "4096");
    }
}
