//! UUID generator.

use fabricate_core::Generator;
use rand::Rng;
use uuid::Uuid;

/// Random version-4 UUIDs drawn from the thread-local RNG.
pub fn uuids() -> Generator<Uuid> {
    Generator::new(|| random_uuid_v4(&mut rand::thread_rng()))
}

/// Build a version-4 UUID from the provided RNG.
pub fn random_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuids_are_unique() {
        let generator = uuids();
        assert_ne!(generator.get(), generator.get());
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(random_uuid_v4(&mut rng1), random_uuid_v4(&mut rng2));
    }

    #[test]
    fn test_uuid_version() {
        let uuid = uuids().get();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }
}
