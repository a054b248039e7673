use crate::cli::ui::{self, StyleType};
use crate::core::history::ConversionRecord;
use crate::core::rates::RateTable;

/// Prints a completed conversion: the headline amount, the full equation
/// and the effective rate used.
pub fn display(record: &ConversionRecord, table: &RateTable) {
    let from_symbol = table.symbol(&record.from).unwrap_or("");
    let to_symbol = table.symbol(&record.to).unwrap_or("");

    println!(
        "\n{}",
        ui::style_text(
            &format!("{} {:.2} {}", to_symbol, record.result, record.to),
            StyleType::ResultValue
        )
    );
    println!(
        "{} {:.2} {} = {} {:.2} {}",
        from_symbol, record.amount, record.from, to_symbol, record.result, record.to
    );
    println!(
        "{}",
        ui::style_text(
            &format!(
                "1 {} = {:.4} {} | as of {}",
                record.from, record.rate, record.to, table.last_update
            ),
            StyleType::Subtle
        )
    );
}
