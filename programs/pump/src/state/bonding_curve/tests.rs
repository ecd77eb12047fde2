#[cfg(test)]
mod tests {
    use anchor_lang::error::Error;
    use anchor_lang::prelude::Pubkey;
    use once_cell::sync::Lazy;

    use crate::constants::CONFIG_VERSION;
    use crate::errors::ContractError;
    use crate::state::bonding_curve::*;
    use crate::state::config::Config;

    static CREATOR: Lazy<Pubkey> = Lazy::new(Pubkey::new_unique);
    static MINT: Lazy<Pubkey> = Lazy::new(Pubkey::new_unique);

    static CONFIG: Lazy<Config> = Lazy::new(|| Config {
        version: CONFIG_VERSION,
        authority: Pubkey::new_unique(),
        fee_recipient: Pubkey::new_unique(),
        team_wallet: Pubkey::new_unique(),
        curve_limit: 85_000_000_000,
        initial_virtual_token_reserves: 1_073_000_000_000_000,
        initial_virtual_sol_reserves: 30_000_000_000,
        initial_real_token_reserves: 793_100_000_000_000,
        total_token_supply: 1_000_000_000_000_000,
        token_decimals: 6,
        init_bonding_curve: 80,
        buy_fee_percent: 1.0,
        sell_fee_percent: 1.0,
        migration_fee_percent: 0.5,
        ..Config::default()
    });

    // curveLimit 800_000, no fees, no virtual SOL, 95% of a 1e12 supply on the curve
    static SMALL_CONFIG: Lazy<Config> = Lazy::new(|| Config {
        curve_limit: 800_000,
        initial_virtual_token_reserves: 500_000_000_000,
        initial_virtual_sol_reserves: 0,
        initial_real_token_reserves: 0,
        total_token_supply: 1_000_000_000_000,
        token_decimals: 6,
        init_bonding_curve: 95,
        buy_fee_percent: 0.0,
        sell_fee_percent: 0.0,
        migration_fee_percent: 0.0,
        ..(*CONFIG).clone()
    });

    fn launch(config: &Config) -> (BondingCurve, LaunchAllocation) {
        let mut curve = BondingCurve::default();
        let allocation = curve
            .update_from_config(*MINT, *CREATOR, config, 254)
            .unwrap();
        (curve, allocation)
    }

    fn assert_err<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: ContractError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn test_launch_splits_supply() {
        let (curve, allocation) = launch(&SMALL_CONFIG);

        assert_eq!(allocation.curve_amount, 950_000_000_000);
        assert_eq!(allocation.team_amount, 50_000_000_000);
        assert_eq!(
            allocation.curve_amount + allocation.team_amount,
            SMALL_CONFIG.total_token_supply
        );

        assert_eq!(curve.mint, *MINT);
        assert_eq!(curve.creator, *CREATOR);
        assert_eq!(curve.virtual_token_reserves, 500_000_000_000);
        assert_eq!(curve.virtual_sol_reserves, 0);
        // zero in config means the whole curve allocation is tradable
        assert_eq!(curve.real_token_reserves, allocation.curve_amount);
        assert_eq!(curve.real_sol_reserves, 0);
        assert_eq!(curve.phase, CurvePhase::Presale);
        assert_eq!(curve.bump, 254);
    }

    #[test]
    fn test_launch_caps_real_reserves_to_config() {
        let (curve, allocation) = launch(&CONFIG);

        assert_eq!(allocation.curve_amount, 800_000_000_000_000);
        assert_eq!(allocation.team_amount, 200_000_000_000_000);
        assert_eq!(curve.real_token_reserves, 793_100_000_000_000);
        assert_eq!(curve.token_total_supply, 1_000_000_000_000_000);
    }

    #[test]
    fn test_apply_buy() {
        let (mut curve, _) = launch(&CONFIG);
        let initial = curve.clone();

        let quote = curve
            .apply_swap(&CONFIG, 1_000_000_000, SwapDirection::Buy, 0)
            .unwrap();

        assert_eq!(quote.fee, 10_000_000);
        assert_eq!(quote.net_amount_in, 990_000_000);
        assert_eq!(quote.amount_out, 59_614_036_786_060);

        // fee is not pooled
        assert_eq!(curve.real_sol_reserves, quote.net_amount_in);
        assert_eq!(
            curve.real_token_reserves,
            initial.real_token_reserves - quote.amount_out
        );
        // virtual reserves never move
        assert_eq!(curve.virtual_sol_reserves, initial.virtual_sol_reserves);
        assert_eq!(curve.virtual_token_reserves, initial.virtual_token_reserves);
        assert_eq!(curve.phase, CurvePhase::Presale);
    }

    #[test]
    fn test_apply_sell() {
        let (mut curve, _) = launch(&CONFIG);
        let bought = curve
            .apply_swap(&CONFIG, 1_000_000_000, SwapDirection::Buy, 0)
            .unwrap();
        let after_buy = curve.clone();

        let quote = curve
            .apply_swap(&CONFIG, bought.amount_out, SwapDirection::Sell, 0)
            .unwrap();

        assert_eq!(quote.net_amount_in, 59_017_896_418_199);
        assert_eq!(quote.fee, 596_140_367_861);
        assert_eq!(quote.amount_out, 980_413_200);
        // round trip loses fees and rounding, never gains
        assert!(quote.amount_out < bought.amount_in);

        assert_eq!(
            curve.real_sol_reserves,
            after_buy.real_sol_reserves - quote.amount_out
        );
        assert_eq!(
            curve.real_token_reserves,
            after_buy.real_token_reserves + quote.net_amount_in
        );
    }

    #[test]
    fn test_fractional_fee_swap() {
        let mut config = (*CONFIG).clone();
        config.buy_fee_percent = 0.125;
        config.sell_fee_percent = 0.125;
        let (mut curve, _) = launch(&config);

        let bought = curve
            .apply_swap(&config, 1_000_000_000, SwapDirection::Buy, 0)
            .unwrap();
        assert_eq!(bought.fee, 1_250_000);
        assert_eq!(bought.net_amount_in, 998_750_000);
        assert_eq!(bought.amount_out, 60_123_952_578_733);
        assert_eq!(curve.real_sol_reserves, 998_750_000);

        let sold = curve
            .apply_swap(&config, bought.amount_out, SwapDirection::Sell, 0)
            .unwrap();
        assert_eq!(sold.fee, 75_154_940_724);
        assert_eq!(sold.net_amount_in, 60_048_797_638_009);
        assert_eq!(sold.amount_out, 997_541_737);
    }

    #[test]
    fn test_sell_more_than_reserves() {
        let (mut curve, _) = launch(&CONFIG);
        curve
            .apply_swap(&CONFIG, 1_000_000_000, SwapDirection::Buy, 0)
            .unwrap();
        let before = curve.clone();

        let result = curve.apply_swap(&CONFIG, 500_000_000_000_000, SwapDirection::Sell, 0);
        assert_err(result, ContractError::InsufficientCurveReserves);
        assert_eq!(curve.real_sol_reserves, before.real_sol_reserves);
        assert_eq!(curve.real_token_reserves, before.real_token_reserves);
    }

    #[test]
    fn test_buy_is_clamped_to_real_reserves() {
        let (mut curve, _) = launch(&CONFIG);
        let initial = curve.clone();

        let quote = curve
            .apply_swap(&CONFIG, 10_000_000_000_000_000, SwapDirection::Buy, 0)
            .unwrap();

        assert_eq!(quote.amount_out, initial.real_token_reserves);
        assert_eq!(curve.real_token_reserves, 0);
        assert_eq!(curve.phase, CurvePhase::Completed);
    }

    #[test]
    fn test_zero_amount() {
        let (mut curve, _) = launch(&CONFIG);
        assert_err(
            curve.quote(&CONFIG, 0, SwapDirection::Buy),
            ContractError::ZeroAmount,
        );
        assert_err(
            curve.apply_swap(&CONFIG, 0, SwapDirection::Sell, 0),
            ContractError::ZeroAmount,
        );
    }

    #[test]
    fn test_slippage() {
        let (mut curve, _) = launch(&CONFIG);
        let quote = curve.quote(&CONFIG, 2_000_000_000, SwapDirection::Buy).unwrap();

        assert_err(
            curve.apply_swap(
                &CONFIG,
                2_000_000_000,
                SwapDirection::Buy,
                quote.amount_out + 1,
            ),
            ContractError::ReturnAmountTooSmall,
        );
        assert_eq!(curve.real_sol_reserves, 0);

        let applied = curve
            .apply_swap(&CONFIG, 2_000_000_000, SwapDirection::Buy, quote.amount_out)
            .unwrap();
        assert_eq!(applied, quote);
    }

    #[test]
    fn test_direction_from_u8() {
        assert_eq!(SwapDirection::try_from(0u8).unwrap(), SwapDirection::Buy);
        assert_eq!(SwapDirection::try_from(1u8).unwrap(), SwapDirection::Sell);
        assert_err(SwapDirection::try_from(2u8), ContractError::InvalidDirection);
    }

    #[test]
    fn test_small_curve_completes_at_limit() {
        let (mut curve, allocation) = launch(&SMALL_CONFIG);

        let first = curve
            .apply_swap(&SMALL_CONFIG, 80_000, SwapDirection::Buy, 0)
            .unwrap();
        // no virtual SOL: the first buyer takes everything in custody
        assert_eq!(first.amount_out, allocation.curve_amount);
        assert_eq!(curve.real_sol_reserves, 80_000);
        assert!(!curve.is_completed());

        let second = curve
            .apply_swap(&SMALL_CONFIG, 720_000, SwapDirection::Buy, 0)
            .unwrap();
        assert_eq!(second.amount_out, 0);
        assert_eq!(curve.real_sol_reserves, 800_000);
        assert!(curve.is_completed());
        assert_eq!(curve.phase, CurvePhase::Completed);

        assert_err(
            curve.apply_swap(&SMALL_CONFIG, 1, SwapDirection::Buy, 0),
            ContractError::CurveCompleted,
        );

        curve.complete_migration().unwrap();
        assert!(curve.migration_completed());
        assert_err(curve.complete_migration(), ContractError::AlreadyMigrated);
    }

    #[test]
    fn test_completion_flags_follow_phase() {
        let mut curve = BondingCurve::default();
        for (phase, is_completed, migration_completed) in [
            (CurvePhase::Presale, false, false),
            (CurvePhase::Completed, true, false),
            (CurvePhase::Migrated, true, true),
            (CurvePhase::Released, true, false),
        ] {
            curve.phase = phase;
            assert_eq!(curve.is_completed(), is_completed);
            assert_eq!(curve.migration_completed(), migration_completed);
        }
    }

    #[test]
    fn test_phase_guards() {
        let (mut curve, _) = launch(&SMALL_CONFIG);
        assert_err(curve.ensure_completed(), ContractError::CurveNotCompleted);
        assert_err(curve.complete_migration(), ContractError::CurveNotCompleted);
        assert_err(curve.release(), ContractError::CurveNotCompleted);

        curve
            .apply_swap(&SMALL_CONFIG, 1_000_000, SwapDirection::Buy, 0)
            .unwrap();
        curve.release().unwrap();
        assert_eq!(curve.phase, CurvePhase::Released);
        assert_eq!(curve.real_sol_reserves, 0);
        assert_eq!(curve.real_token_reserves, 0);

        assert_err(curve.release(), ContractError::ReservesAlreadyReleased);
        assert_err(
            curve.complete_migration(),
            ContractError::ReservesAlreadyReleased,
        );
        assert_err(
            curve.apply_swap(&SMALL_CONFIG, 1, SwapDirection::Buy, 0),
            ContractError::CurveCompleted,
        );
    }

    #[test]
    fn test_migration_amounts() {
        let (curve, _) = launch(&CONFIG);

        let amounts = curve.migration_amounts(&CONFIG, 10_000, 42).unwrap();
        assert_eq!(amounts.fee_lamports, 50);
        assert_eq!(amounts.sol_amount, 9_950);
        assert_eq!(amounts.token_amount, 42);

        let amounts = curve.migration_amounts(&SMALL_CONFIG, 10_000, 0).unwrap();
        assert_eq!(amounts.fee_lamports, 0);
        assert_eq!(amounts.sol_amount, 10_000);
    }

    #[test]
    fn test_check_custody() {
        let (mut curve, _) = launch(&CONFIG);
        curve
            .apply_swap(&CONFIG, 1_000_000_000, SwapDirection::Buy, 0)
            .unwrap();
        let sol = curve.real_sol_reserves;
        let tokens = curve.real_token_reserves;

        assert!(curve.check_custody(sol, tokens).is_ok());
        // donations are fine
        assert!(curve.check_custody(sol + 1, tokens + 1).is_ok());
        assert_err(
            curve.check_custody(sol - 1, tokens),
            ContractError::BondingCurveInvariant,
        );
        assert_err(
            curve.check_custody(sol, tokens - 1),
            ContractError::BondingCurveInvariant,
        );
    }

    #[test]
    fn test_calculate_amount_out() {
        assert_eq!(calculate_amount_out(100, 100, 100), Some(50));
        // floor
        assert_eq!(calculate_amount_out(2, 10, 1), Some(3));
        assert_eq!(calculate_amount_out(0, 0, 0), Some(0));
        assert_eq!(calculate_amount_out(0, 7, 5), Some(7));
        assert_eq!(calculate_amount_out(1, u128::MAX, 2), None);
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn fuzz_simulate_matches_applied_buy(amount in 1u64..1_000_000_000_000) {
            let (mut curve, _) = launch(&CONFIG);
            let simulated = curve.quote(&CONFIG, amount, SwapDirection::Buy).unwrap();
            let applied = curve.apply_swap(&CONFIG, amount, SwapDirection::Buy, 0).unwrap();

            prop_assert_eq!(simulated, applied);
            prop_assert_eq!(simulated.net_amount_in + simulated.fee, amount);
        }

        #[test]
        fn fuzz_simulate_matches_applied_sell(
            buy_amount in 1_000u64..80_000_000_000,
            sell_percent in 1u64..=100,
        ) {
            let (mut curve, _) = launch(&CONFIG);
            let bought = curve.apply_swap(&CONFIG, buy_amount, SwapDirection::Buy, 0).unwrap();
            let sell_amount = bought.amount_out * sell_percent / 100;
            prop_assume!(sell_amount > 0);

            let simulated = curve.quote(&CONFIG, sell_amount, SwapDirection::Sell);
            let applied = curve.apply_swap(&CONFIG, sell_amount, SwapDirection::Sell, 0);
            prop_assert_eq!(simulated.is_ok(), applied.is_ok());
            if let (Ok(simulated), Ok(applied)) = (simulated, applied) {
                prop_assert_eq!(simulated, applied);
                prop_assert!(applied.amount_out <= bought.net_amount_in, "Seller should not receive more SOL than the curve took in");
            }
        }

        #[test]
        fn fuzz_completion_is_monotonic(
            ops in proptest::collection::vec((any::<bool>(), 1u64..30_000_000_000), 1..40),
        ) {
            let (mut curve, _) = launch(&CONFIG);
            let mut held: u64 = 0;
            let mut completed = false;

            for (is_buy, amount) in ops {
                let before = curve.clone();
                let (direction, amount) = if is_buy {
                    (SwapDirection::Buy, amount)
                } else {
                    (SwapDirection::Sell, held.min(amount * 1_000))
                };
                if amount == 0 {
                    continue;
                }

                match curve.apply_swap(&CONFIG, amount, direction, 0) {
                    Ok(quote) => {
                        prop_assert!(!completed, "Swap should fail once the curve is completed");
                        match direction {
                            SwapDirection::Buy => held += quote.amount_out,
                            SwapDirection::Sell => held -= quote.amount_in,
                        }
                        prop_assert_eq!(
                            curve.is_completed(),
                            curve.real_sol_reserves >= CONFIG.curve_limit
                        );
                    }
                    Err(_) => {
                        prop_assert_eq!(curve.real_sol_reserves, before.real_sol_reserves);
                        prop_assert_eq!(curve.real_token_reserves, before.real_token_reserves);
                        prop_assert_eq!(curve.phase, before.phase);
                    }
                }

                // never goes back to presale
                prop_assert!(!completed || curve.is_completed());
                completed = curve.is_completed();
            }
        }

        #[test]
        fn fuzz_slippage_enforced(amount in 1u64..100_000_000_000) {
            let (mut curve, _) = launch(&CONFIG);
            let quote = curve.quote(&CONFIG, amount, SwapDirection::Buy).unwrap();

            let too_strict = curve.apply_swap(&CONFIG, amount, SwapDirection::Buy, quote.amount_out + 1);
            prop_assert!(too_strict.is_err());
            prop_assert_eq!(curve.real_sol_reserves, 0);

            let applied = curve.apply_swap(&CONFIG, amount, SwapDirection::Buy, 0);
            prop_assert!(applied.is_ok());
        }

        #[test]
        fn fuzz_buy_never_exceeds_real_token_reserves(amount in 1u64..u64::MAX / 2) {
            let (mut curve, _) = launch(&CONFIG);
            let initial = curve.clone();
            if let Ok(quote) = curve.apply_swap(&CONFIG, amount, SwapDirection::Buy, 0) {
                prop_assert!(quote.amount_out <= initial.real_token_reserves, "Token amount bought should not exceed real token reserves");
                prop_assert!(quote.fee <= amount);
            }
        }
    }
}
