use crate::cli::ui::{self, StyleType};
use crate::core::history::ConversionRecord;

/// Prints the conversion history, newest first.
pub fn display(records: &[ConversionRecord]) {
    if records.is_empty() {
        println!("{}", ui::style_text("No conversions yet", StyleType::Subtle));
        return;
    }

    let mut out = ui::new_styled_table();
    out.set_header(vec![
        ui::header_cell("When"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
    ]);

    for record in records {
        out.add_row(vec![
            comfy_table::Cell::new(&record.timestamp),
            ui::numeric_cell(&format!("{:.2} {}", record.amount, record.from)),
            ui::numeric_cell(&format!("{:.2} {}", record.result, record.to)),
            ui::numeric_cell(&format!("{:.4}", record.rate)),
        ]);
    }

    println!("{out}");
}
