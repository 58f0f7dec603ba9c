/// Report rendering for the doctor's probe results.
use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};

use super::checks::CheckResult;

/// Render all probe results as one table (Check / Status / Details).
#[must_use]
pub fn results_table(results: &[CheckResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["Check", "Status", "Details"]);
    for result in results {
        table.add_row([
            Cell::new(result.name),
            Cell::new(result.status.marker()),
            Cell::new(&result.detail),
        ]);
    }
    table
}

/// Remediation hints collected from failing probes, in report order.
#[must_use]
pub fn remediation_hints(results: &[CheckResult]) -> Vec<&str> {
    results
        .iter()
        .filter_map(|result| result.hint.as_deref())
        .collect()
}
