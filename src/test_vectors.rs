//! Known-answer test vectors for the derivation chain.
//!
//! These pin the chain against fixed, externally documented values so two
//! conformant implementations can be checked for byte-exact agreement:
//! - SEC1 compressed encodings of the secp256k1 generator multiples
//! - CKB's personalized blake2b blank hash
//! - the secp256k1-blake160 sighash-all lock scenario

mod chain_test_vectors {
    use crate::address::{decode_address, Network};
    use crate::chain::LockChain;
    use crate::hash::blake2b_256;
    use crate::key::Privkey;
    use crate::script::{LockArg, Script, ScriptHashType, SIGHASH_ALL_TYPE_HASH};

    /// Test Vector 1: private key 1 derives the generator point itself.
    ///
    /// The compressed SEC1 encoding of G is a published curve parameter,
    /// so any conformant secp256k1 library must produce these exact
    /// 33 bytes.
    #[test]
    fn test_vector_1_generator_point() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let privkey = Privkey::from_slice(&one).unwrap();

        assert_eq!(
            hex::encode(privkey.pubkey().as_bytes()),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    /// Test Vector 2: private key 2 derives 2·G.
    #[test]
    fn test_vector_2_generator_doubled() {
        let mut two = [0u8; 32];
        two[31] = 2;
        let privkey = Privkey::from_slice(&two).unwrap();

        assert_eq!(
            hex::encode(privkey.pubkey().as_bytes()),
            "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
        );
    }

    /// Test Vector 3: the personalized blank hash.
    ///
    /// Anchors the hash stages: if the personalization, output length or
    /// parameterization drift, every lock arg and lock hash drifts with
    /// them.
    #[test]
    fn test_vector_3_personalized_blank_hash() {
        assert_eq!(
            hex::encode(blake2b_256(b"")),
            "44f4c69744d5f8c55d642062949dcae49bc4e7ef43d388c5a12f42b5633d163e"
        );
    }

    /// Test Vector 4: the sighash-all scenario key.
    ///
    /// Full chain over the documented demo key against the sighash-all
    /// lock. The pubkey and lock arg are the published values for this
    /// key, so any conformant implementation must reproduce them byte
    /// for byte; the remaining stages must agree across independent runs
    /// and keep their fixed widths.
    #[test]
    fn test_vector_4_sighash_all_scenario() {
        let privkey = Privkey::from_hex(
            "0xd00c06bfd800d27397002dca6fb0993d5ba6399b4238b2f29ee9deb97593d2bc",
        )
        .unwrap();

        let first = LockChain::derive_sighash_all(&privkey, Network::Testnet).unwrap();
        let second = LockChain::derive_sighash_all(&privkey, Network::Testnet).unwrap();
        assert_eq!(first, second, "derivation must be deterministic");

        assert_eq!(
            hex::encode(first.pubkey.as_bytes()),
            "024a501efd328e062c8675f2365970728c859c592beeefd6be8ead3d901330bc01"
        );
        assert_eq!(
            hex::encode(first.lock_arg.as_bytes()),
            "36c329ed630d6ce750712a477543672adab57f4c"
        );
        assert_eq!(first.lock_hash.len(), 32);
        assert!(first.address.starts_with("ckt1"));

        // The address must carry the exact script back out.
        let (network, script) = decode_address(&first.address).unwrap();
        assert_eq!(network, Network::Testnet);
        assert_eq!(script, first.script);
    }

    /// Test Vector 5: lock hash sensitivity for the documented scenario.
    ///
    /// Given the sighash-all code hash, hash type `type` and a fixed
    /// 20-byte arg, the lock hash must change when any single byte of
    /// code hash, hash type or args changes.
    #[test]
    fn test_vector_5_lock_hash_sensitivity() {
        let args = LockArg::from_bytes([0xab; 20]);
        let base = Script::new(&SIGHASH_ALL_TYPE_HASH, ScriptHashType::Type, args).unwrap();
        let base_hash = base.lock_hash();

        for byte in 0..32 {
            let mut code_hash = SIGHASH_ALL_TYPE_HASH;
            code_hash[byte] ^= 0x01;
            let script = Script::new(&code_hash, ScriptHashType::Type, args).unwrap();
            assert_ne!(
                script.lock_hash(),
                base_hash,
                "code hash byte {} did not affect the lock hash",
                byte
            );
        }

        for hash_type in [
            ScriptHashType::Data,
            ScriptHashType::Data1,
            ScriptHashType::Data2,
        ] {
            let script = Script::new(&SIGHASH_ALL_TYPE_HASH, hash_type, args).unwrap();
            assert_ne!(script.lock_hash(), base_hash);
        }

        for byte in 0..20 {
            let mut raw = *args.as_bytes();
            raw[byte] ^= 0x01;
            let script = Script::new(
                &SIGHASH_ALL_TYPE_HASH,
                ScriptHashType::Type,
                LockArg::from_bytes(raw),
            )
            .unwrap();
            assert_ne!(
                script.lock_hash(),
                base_hash,
                "arg byte {} did not affect the lock hash",
                byte
            );
        }
    }

    /// Test Vector 6: the lock hash commits to the serialization, not the
    /// field bytes. Scripts with equal concatenated fields but different
    /// molecule layouts must not collide, so the layout itself is pinned.
    #[test]
    fn test_vector_6_lock_hash_is_over_serialization() {
        let args = LockArg::from_bytes([0x01; 20]);
        let script = Script::new(&SIGHASH_ALL_TYPE_HASH, ScriptHashType::Type, args).unwrap();

        // Hashing the bare field concatenation gives a different digest
        // than hashing the length-prefixed table.
        let mut bare = Vec::new();
        bare.extend_from_slice(&script.code_hash);
        bare.push(script.hash_type.as_byte());
        bare.extend_from_slice(script.args.as_bytes());

        assert_ne!(script.lock_hash(), blake2b_256(&bare));
        assert_eq!(script.lock_hash(), blake2b_256(script.serialize()));
    }
}
