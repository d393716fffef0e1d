//! Tests for the portfolio aggregator.

#[cfg(test)]
mod tests {
    use crate::portfolio::{
        aggregate, AmountPair, EmergencyPair, Holding, Portfolio, PortfolioInput,
    };
    use chrono::NaiveDateTime;

    const EPSILON: f64 = 1e-9;

    fn holding(name: &str, invested: f64, current: f64) -> Holding {
        Holding {
            name: name.to_string(),
            invested,
            current,
            ..Default::default()
        }
    }

    fn empty_portfolio() -> Portfolio {
        let ts = NaiveDateTime::default();
        Portfolio {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            equity: Default::default(),
            non_equity: Default::default(),
            emergency: Default::default(),
            grand_total: 0.0,
            invested: 0.0,
            current_value: 0.0,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_holding_gain_and_percentage() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.direct_stocks = vec![holding("RELIANCE", 45000.0, 50000.0)];
        aggregate(&mut portfolio);

        let stock = &portfolio.equity.direct_stocks[0];
        assert!((stock.gain - 5000.0).abs() < EPSILON);
        // 5000 / 45000 * 100 = 11.111...
        assert!((stock.gain_percentage - 100.0 / 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_gain_percentage_zero_when_nothing_invested() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.mutual_funds = vec![holding("BONUS-UNITS", 0.0, 1200.0)];
        aggregate(&mut portfolio);

        let fund = &portfolio.equity.mutual_funds[0];
        assert!((fund.gain - 1200.0).abs() < EPSILON);
        assert_eq!(fund.gain_percentage, 0.0);
    }

    #[test]
    fn test_gain_percentage_zero_when_invested_negative() {
        let mut portfolio = empty_portfolio();
        portfolio.non_equity.fixed_income_assets = vec![holding("ADJUSTMENT", -500.0, 100.0)];
        aggregate(&mut portfolio);

        let asset = &portfolio.non_equity.fixed_income_assets[0];
        assert!((asset.gain - 600.0).abs() < EPSILON);
        assert_eq!(asset.gain_percentage, 0.0);
    }

    #[test]
    fn test_negative_current_values_are_accepted() {
        let mut portfolio = empty_portfolio();
        portfolio.non_equity.cash = AmountPair {
            invested: 1000.0,
            current: -250.0,
        };
        aggregate(&mut portfolio);

        assert!((portfolio.non_equity.total - -250.0).abs() < EPSILON);
        assert!((portfolio.grand_total - -250.0).abs() < EPSILON);
    }

    #[test]
    fn test_category_and_grand_totals() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.direct_stocks = vec![
            holding("STOCK-A", 40000.0, 45000.0),
            holding("STOCK-B", 20000.0, 25000.0),
        ];
        portfolio.equity.mutual_funds = vec![holding("FLEXICAP", 22000.0, 25000.0)];
        portfolio.non_equity.cash = AmountPair {
            invested: 30000.0,
            current: 30000.0,
        };
        portfolio.non_equity.commodities.gold = AmountPair {
            invested: 40000.0,
            current: 50000.0,
        };
        portfolio.non_equity.commodities.silver = AmountPair {
            invested: 10000.0,
            current: 15000.0,
        };
        portfolio.non_equity.fixed_income_assets = vec![holding("PPF", 28000.0, 30000.0)];
        portfolio.emergency.invested = EmergencyPair {
            invested_amount: 90000.0,
            current_amount: 100000.0,
        };
        portfolio.emergency.bank_account = EmergencyPair {
            invested_amount: 50000.0,
            current_amount: 50000.0,
        };

        aggregate(&mut portfolio);

        assert!((portfolio.equity.total - 95000.0).abs() < EPSILON);
        assert!((portfolio.non_equity.total - 125000.0).abs() < EPSILON);
        assert!((portfolio.non_equity.total_invested - 108000.0).abs() < EPSILON);
        assert!((portfolio.emergency.total - 150000.0).abs() < EPSILON);
        assert!((portfolio.emergency.total_invested - 140000.0).abs() < EPSILON);
        assert!((portfolio.grand_total - 370000.0).abs() < EPSILON);
        assert!(
            (portfolio.grand_total
                - (portfolio.equity.total + portfolio.non_equity.total + portfolio.emergency.total))
                .abs()
                < EPSILON
        );
        // invested = stocks + mf invested (82000) + non-equity (108000) + emergency (140000)
        assert!((portfolio.invested - 330000.0).abs() < EPSILON);
        assert_eq!(portfolio.current_value, portfolio.grand_total);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.direct_stocks = vec![holding("STOCK-A", 45000.0, 50000.0)];
        portfolio.non_equity.fixed_income_assets = vec![holding("NSC", 10000.0, 10800.0)];
        portfolio.emergency.invested = EmergencyPair {
            invested_amount: 5000.0,
            current_amount: 5100.0,
        };

        aggregate(&mut portfolio);
        let first = portfolio.clone();
        aggregate(&mut portfolio);

        assert_eq!(portfolio, first);
    }

    #[test]
    fn test_stale_derived_fields_are_overwritten() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.direct_stocks = vec![Holding {
            gain: 999999.0,
            gain_percentage: 42.0,
            ..holding("STOCK-A", 1000.0, 1100.0)
        }];
        portfolio.equity.total = 777777.0;
        portfolio.grand_total = 777777.0;

        aggregate(&mut portfolio);

        let stock = &portfolio.equity.direct_stocks[0];
        assert!((stock.gain - 100.0).abs() < EPSILON);
        assert!((portfolio.equity.total - 1100.0).abs() < EPSILON);
        assert!((portfolio.grand_total - 1100.0).abs() < EPSILON);
    }

    #[test]
    fn test_missing_leaves_deserialize_to_zero() {
        // A client may submit only the pieces it knows about; everything
        // else reads as zero.
        let input: PortfolioInput = serde_json::from_str(
            r#"{"equity":{"directStocks":[{"name":"STOCK-A","invested":100,"current":110}]}}"#,
        )
        .unwrap();

        assert_eq!(input.non_equity.cash.invested, 0.0);
        assert_eq!(input.emergency.bank_account.current_amount, 0.0);
        assert!(input.non_equity.fixed_income_assets.is_empty());

        let mut portfolio = empty_portfolio();
        portfolio.equity = input.equity;
        portfolio.non_equity = input.non_equity;
        portfolio.emergency = input.emergency;
        aggregate(&mut portfolio);

        assert!((portfolio.grand_total - 110.0).abs() < EPSILON);
        assert!((portfolio.invested - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_holding_wire_format_uses_camel_case() {
        let mut portfolio = empty_portfolio();
        portfolio.equity.mutual_funds = vec![Holding {
            holding_type: Some("midcap".to_string()),
            ..holding("MIDCAP-FUND", 10000.0, 12500.0)
        }];
        aggregate(&mut portfolio);

        let json = serde_json::to_value(&portfolio.equity.mutual_funds[0]).unwrap();
        assert_eq!(json["gainPercentage"], 25.0);
        assert_eq!(json["type"], "midcap");
        assert!(json.get("subType").is_none());
    }
}
