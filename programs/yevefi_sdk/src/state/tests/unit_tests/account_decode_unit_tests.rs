#[cfg(test)]
mod tests {
    use crate::error::AccountError;
    use crate::state::*;
    use anchor_lang::prelude::*;
    use anchor_lang::Discriminator;

    fn serialize<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    fn sample_pool() -> Yevefi {
        Yevefi {
            tick_spacing: 64,
            tick_spacing_seed: 64u16.to_le_bytes(),
            fee_rate: 3_000,
            protocol_fee_rate: 300,
            liquidity: 1_000_000,
            sqrt_price: 1u128 << 64,
            tick_current_index: 0,
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    #[test]
    fn test_discriminator_is_account_name_hash() {
        let hash = solana_program::hash::hash(b"account:Yevefi").to_bytes();
        assert_eq!(Yevefi::DISCRIMINATOR, &hash[..8]);
        let hash = solana_program::hash::hash(b"account:TickArray").to_bytes();
        assert_eq!(TickArray::DISCRIMINATOR, &hash[..8]);
    }

    #[test]
    fn test_serialized_lengths() {
        assert_eq!(serialize(&Yevefi::default()).len(), Yevefi::LEN);
        assert_eq!(serialize(&TickArray::default()).len(), TickArray::LEN);
        assert_eq!(serialize(&Position::default()).len(), Position::LEN);
        assert_eq!(serialize(&FeeTier::default()).len(), FeeTier::LEN);
        assert_eq!(serialize(&PositionBundle::default()).len(), PositionBundle::LEN);
        // The program reserves two trailing bytes for the config.
        assert_eq!(serialize(&YevefisConfig::default()).len() + 2, YevefisConfig::LEN);
    }

    #[test]
    fn test_decode_dispatches_by_discriminator() {
        let pool = sample_pool();
        match YevefiAccount::decode(&serialize(&pool)).unwrap() {
            YevefiAccount::Yevefi(decoded) => assert_eq!(*decoded, pool),
            other => panic!("decoded as {}", other.kind()),
        }

        let mut tick_array = TickArray::new(Pubkey::new_unique(), -704);
        tick_array.ticks[3].initialized = true;
        tick_array.ticks[3].liquidity_net = -42;
        match YevefiAccount::decode(&serialize(&tick_array)).unwrap() {
            YevefiAccount::TickArray(decoded) => assert_eq!(*decoded, tick_array),
            other => panic!("decoded as {}", other.kind()),
        }

        let fee_tier = FeeTier {
            yevefis_config: Pubkey::new_unique(),
            tick_spacing: 8,
            default_fee_rate: 500,
        };
        assert_eq!(
            YevefiAccount::decode(&serialize(&fee_tier)).unwrap(),
            YevefiAccount::FeeTier(fee_tier)
        );
        let position = Position {
            liquidity: 7,
            tick_lower_index: -64,
            tick_upper_index: 64,
            ..Default::default()
        };
        assert_eq!(
            YevefiAccount::decode(&serialize(&position)).unwrap().kind(),
            "Position"
        );
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            YevefiAccount::decode(&[1, 2, 3]).unwrap_err(),
            AccountError::AccountDataTooSmall.into()
        );
        assert_eq!(
            YevefiAccount::decode(&[0u8; 64]).unwrap_err(),
            AccountError::UnknownAccountDiscriminator.into()
        );

        let mut truncated = serialize(&sample_pool());
        truncated.truncate(100);
        assert_eq!(
            YevefiAccount::decode(&truncated).unwrap_err(),
            AccountError::AccountDecodeFailed.into()
        );
    }

    #[test]
    fn test_decode_as_checks_kind() {
        let data = serialize(&sample_pool());
        assert!(decode_as::<Yevefi>("Yevefi", &data).is_ok());
        assert_eq!(
            decode_as::<Position>("Position", &data).unwrap_err(),
            AccountError::AccountDecodeFailed.into()
        );
    }

    #[test]
    fn test_position_helpers() {
        assert!(Position::default().is_empty());
        let mut position = Position::default();
        position.reward_infos[1].amount_owed = 1;
        assert!(!position.is_empty());

        let mut bundle = PositionBundle::default();
        bundle.position_bitmap[0] = 0b0000_0101;
        assert!(bundle.is_bundle_index_in_use(0));
        assert!(!bundle.is_bundle_index_in_use(1));
        assert!(bundle.is_bundle_index_in_use(2));
        assert!(!bundle.is_bundle_index_in_use(256));
        assert_eq!(bundle.first_unoccupied_index(), Some(1));

        bundle.position_bitmap = [u8::MAX; 32];
        assert_eq!(bundle.first_unoccupied_index(), None);
    }
}
