use crate::cli::ui::{self, StyleType};
use crate::core::rates::RateTable;

/// Prints the full rate table, sorted by currency code.
pub fn display(table: &RateTable) {
    println!(
        "\n{}",
        ui::style_text(
            &format!("Exchange rates (base: {})", table.base),
            StyleType::Title
        )
    );
    println!(
        "{}",
        ui::style_text(
            &format!("Last update: {}", table.last_update),
            StyleType::Subtle
        )
    );

    let mut out = ui::new_styled_table();
    out.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Symbol"),
        ui::header_cell(&format!("Rate (1 {})", table.base)),
    ]);

    for (code, entry) in &table.currencies {
        out.add_row(vec![
            comfy_table::Cell::new(code),
            comfy_table::Cell::new(&entry.name),
            comfy_table::Cell::new(&entry.symbol),
            ui::numeric_cell(&format!("{:.4}", entry.rate)),
        ]);
    }

    println!("{out}");
}
