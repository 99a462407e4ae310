use tradeq_core::{Pagination, TradeQuery};

use crate::cli::TradesArgs;
use crate::config::CliConfig;
use crate::error::CliError;

use super::{open_store, CommandResult};

pub fn run(args: &TradesArgs, config: &CliConfig) -> Result<CommandResult, CliError> {
    let query = build_query(args)?;
    let (store, warnings) = open_store(&config.data_path)?;

    let snapshot = store.snapshot();
    let page = query.execute(&snapshot)?;

    let mut result = CommandResult::ok(serde_json::to_value(&page)?).with_warnings(warnings);
    if page.is_beyond_last_page() {
        result = result.with_warning(format!(
            "page {} is beyond the last page ({})",
            page.page,
            page.page_count()
        ));
    }

    Ok(result)
}

/// Maps parsed flags onto a query; absent flags stay absent.
fn build_query(args: &TradesArgs) -> Result<TradeQuery, CliError> {
    let mut query = TradeQuery::new().with_pagination(Pagination::new(args.page, args.limit)?);

    query.search = args.search.clone();
    query.asset_class = args.asset_class.clone();
    query.start = args.start;
    query.end = args.end;
    query.min_price = args.min_price;
    query.max_price = args.max_price;
    query.trade_type = args.trade_type;

    if let Some(sort) = &args.sort {
        query = query.with_sort(sort)?;
    }

    query.validate()?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;
    use crate::cli::{Cli, Command};

    const TRADES: &str = r#"[
        {"assetClass": "Equity", "instrumentId": "AAPL", "instrumentName": "Apple",
         "tradeDateTime": "2024-01-01T09:00:00Z", "trader": "Ann", "tradeId": "t1",
         "tradeDetails": {"buySellIndicator": "BUY", "price": 10, "quantity": 1}},
        {"assetClass": "Bond", "instrumentId": "UST10", "instrumentName": "Treasury",
         "tradeDateTime": "2024-01-02T09:00:00Z", "trader": "Bo", "tradeId": "t2",
         "tradeDetails": {"buySellIndicator": "SELL", "price": 20, "quantity": 2}},
        {"assetClass": "Equity", "instrumentId": "TSLA", "instrumentName": "Tesla",
         "tradeDateTime": "2024-01-03T09:00:00Z", "trader": "Cy", "tradeId": "t3",
         "tradeDetails": {"buySellIndicator": "BUY", "price": 30, "quantity": 3}}
    ]"#;

    fn trades_args(extra: &[&str]) -> TradesArgs {
        let argv = ["tradeq", "trades"].into_iter().chain(extra.iter().copied());
        match Cli::try_parse_from(argv).expect("must parse").command {
            Command::Trades(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    fn config_with_data(path: PathBuf) -> CliConfig {
        CliConfig {
            home: path.parent().map(PathBuf::from).unwrap_or_default(),
            data_path: path,
            log_filter: String::from("warn"),
        }
    }

    fn returned_ids(result: &CommandResult) -> Vec<String> {
        result.data["trades"]
            .as_array()
            .expect("trades array")
            .iter()
            .map(|trade| trade["tradeId"].as_str().unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn lists_filtered_sorted_page() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("trades.json");
        fs::write(&path, TRADES).expect("write");

        let args = trades_args(&["--asset-class", "Equity", "--sort", "-price"]);
        let result = run(&args, &config_with_data(path)).expect("must succeed");

        assert_eq!(returned_ids(&result), vec!["t3", "t1"]);
        assert_eq!(result.data["totalMatches"], 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn warns_past_last_page() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("trades.json");
        fs::write(&path, TRADES).expect("write");

        let args = trades_args(&["--page", "3", "--limit", "2"]);
        let result = run(&args, &config_with_data(path)).expect("must succeed");

        assert!(returned_ids(&result).is_empty());
        assert_eq!(result.warnings, vec!["page 3 is beyond the last page (2)"]);
    }

    #[test]
    fn missing_data_file_is_empty_with_warning() {
        let temp = tempdir().expect("tempdir");
        let args = trades_args(&[]);
        let result =
            run(&args, &config_with_data(temp.path().join("absent.json"))).expect("must succeed");

        assert!(returned_ids(&result).is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn rejects_out_of_range_pagination() {
        let err = build_query(&trades_args(&["--page", "0"])).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);

        let err = build_query(&trades_args(&["--limit", "101"])).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_unknown_sort_field_up_front() {
        let err = build_query(&trades_args(&["--sort", "-color"])).expect_err("must fail");
        assert!(matches!(err, CliError::Query(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn keeps_zero_price_bound() {
        let query = build_query(&trades_args(&["--min-price", "0"])).expect("valid");
        assert_eq!(query.min_price, Some(0.0));
    }

    #[test]
    fn listing_without_stored_ids_is_repeatable() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("trades.json");
        let without_ids = TRADES
            .replace(r#", "tradeId": "t1""#, "")
            .replace(r#", "tradeId": "t2""#, "")
            .replace(r#", "tradeId": "t3""#, "");
        fs::write(&path, &without_ids).expect("write");
        let config = config_with_data(path.clone());

        let args = trades_args(&["--sort", "tradeId"]);
        let first = run(&args, &config).expect("first listing");
        let second = run(&args, &config).expect("second listing");

        assert_eq!(first.data, second.data);
        assert_eq!(returned_ids(&first), vec!["", "", ""]);
        assert_eq!(fs::read_to_string(&path).expect("read"), without_ids);
    }

    #[test]
    fn malformed_data_file_is_a_load_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("trades.json");
        fs::write(&path, "{not json").expect("write");

        let err = run(&trades_args(&[]), &config_with_data(path)).expect_err("must fail");
        assert!(matches!(err, CliError::Load { .. }));
        assert_eq!(err.exit_code(), 10);
    }
}
