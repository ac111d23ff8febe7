//! Rendering of the generated README Markdown table.

use std::fmt::Write;

use crate::Farm;

/// Render the fixed documentation block followed by one table row per farm,
/// in the order the farms were filtered.
pub(crate) fn readme_table(farms: &[Farm]) -> String {
    let mut table = String::from(
        "## Curve Stake DAO Fraxtal Farms\n\
         \n\
         Users hold tokens from the **Balance Source Address**. \
         The **Holding Address** is where funds are deposited into Curve.\n\
         \n\
         All farms use 18 decimals by default.\n\
         \n\
         | Name | URL | Balance Source Address | Holding Address |\n\
         |------|-----|------------------------|-----------------|\n",
    );

    for farm in farms {
        let link = format!(
            "[StakeDAO](https://stakedao.org/yield?search={})",
            farm.balance_source_address
        );
        // writing into a String cannot fail
        let _ = writeln!(
            table,
            "| {} | {} | `{}` | `{}` |",
            farm.name, link, farm.balance_source_address, farm.holding_address
        );
    }

    table
}
