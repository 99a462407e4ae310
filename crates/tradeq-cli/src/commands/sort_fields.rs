use serde::Serialize;
use tradeq_core::SortField;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SortFieldEntry {
    field: SortField,
    names: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct SortFieldsResponseData {
    fields: Vec<SortFieldEntry>,
    descending_prefix: &'static str,
}

pub fn run() -> Result<CommandResult, CliError> {
    let fields = SortField::ALL
        .into_iter()
        .map(|field| SortFieldEntry {
            field,
            names: field.accepted_names(),
        })
        .collect();

    let data = serde_json::to_value(SortFieldsResponseData {
        fields,
        descending_prefix: "-",
    })?;

    Ok(CommandResult::ok(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_field() {
        let result = run().expect("must succeed");
        let fields = result.data["fields"].as_array().expect("array");
        assert_eq!(fields.len(), SortField::ALL.len());
        assert_eq!(fields[4]["field"], "tradeDateTime");
        assert_eq!(fields[8]["names"][0], "tradeDetails.price");
    }
}
