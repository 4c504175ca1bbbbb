use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use atl_client::BulkAddOutcome;
use atl_map::{CanonicalField, ImportSession, Preview};
use atl_model::{
    Competition, CompetitionStatus, CompetitionSummary, Component, Order, Project, StockLevel,
    StockSummary,
};

/// Descriptions longer than this are cut in the preview.
const DESCRIPTION_PREVIEW_CHARS: usize = 30;
const OVERVIEW_CHARS: usize = 50;
const RESULT_CHARS: usize = 20;

pub fn print_mapping(session: &ImportSession) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for (field, column) in session.mapping().iter() {
        let label = if field.is_required() {
            Cell::new(format!("{} *", field.label())).add_attribute(Attribute::Bold)
        } else {
            Cell::new(field.label())
        };
        match column {
            Some(index) => table.add_row(vec![
                label,
                Cell::new(index + 1),
                Cell::new(session.column_label(index)),
            ]),
            None => table.add_row(vec![label, dim_cell("-"), dim_cell("not mapped")]),
        };
    }
    println!("{table}");
}

pub fn print_preview(preview: &Preview<'_>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(CanonicalField::Name.label()),
        header_cell(CanonicalField::Type.label()),
        header_cell(CanonicalField::Description.label()),
        header_cell(CanonicalField::Quantity.label()),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, record) in preview.visible.iter().enumerate() {
        let name = if record.is_valid() {
            Cell::new(&record.name)
        } else {
            Cell::new("Empty").fg(Color::Yellow)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            name,
            Cell::new(&record.component_type),
            Cell::new(truncate(&record.description, DESCRIPTION_PREVIEW_CHARS)),
            Cell::new(record.quantity),
        ]);
    }
    println!("{table}");

    if preview.remainder > 0 {
        println!("... and {} more rows", preview.remainder);
    }
    let invalid = preview.invalid_visible();
    if invalid > 0 {
        println!("{invalid} previewed rows have no component name and will be skipped");
    }
}

pub fn print_import_outcome(outcome: &BulkAddOutcome) {
    println!("Successfully imported {} components", outcome.added);
    if outcome.rejected > 0 {
        println!("Skipped {} rows without a component name", outcome.rejected);
    }
    if outcome.is_partial() {
        println!(
            "Warning: {} of {} submitted components were not added",
            outcome.submitted - outcome.added,
            outcome.submitted
        );
    }
}

pub fn print_components(components: &[&Component]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Description"),
        header_cell("Quantity"),
        header_cell("Stock"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);

    for component in components {
        let level = component.stock_level();
        table.add_row(vec![
            dim_cell(&component.id),
            Cell::new(&component.name),
            Cell::new(&component.component_type),
            Cell::new(&component.description),
            Cell::new(component.quantity),
            Cell::new(level.label()).fg(stock_color(level)),
        ]);
    }
    println!("{table}");
}

pub fn print_stock_summary(summary: &StockSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("In stock"),
        header_cell("Low stock"),
        header_cell("Out of stock"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        count_cell(summary.in_stock, Color::Green),
        count_cell(summary.low_stock, Color::Yellow),
        count_cell(summary.out_of_stock, Color::Red),
    ]);
    println!("{table}");
}

pub fn print_projects(projects: &[Project]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Project"),
        header_cell("Overview"),
        header_cell("Components"),
        header_cell("Updated"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    for project in projects {
        let used = project.component_ids().len();
        table.add_row(vec![
            dim_cell(&project.id),
            Cell::new(&project.name).add_attribute(Attribute::Bold),
            Cell::new(truncate(&project.overview, OVERVIEW_CHARS)),
            if used > 0 { Cell::new(used) } else { dim_cell(0) },
            dim_cell(day(&project.last_updated)),
        ]);
    }
    println!("{table}");
}

pub fn print_competitions(competitions: &[&Competition]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Event"),
        header_cell("Dates"),
        header_cell("Location"),
        header_cell("Status"),
        header_cell("Placing"),
    ]);
    apply_table_style(&mut table);

    for competition in competitions {
        let status = Cell::new(competition.status_label());
        let status = match competition.status() {
            Some(known) => status.fg(competition_color(known)),
            None => status,
        };
        table.add_row(vec![
            dim_cell(&competition.id),
            Cell::new(&competition.name).add_attribute(Attribute::Bold),
            Cell::new(date_range(&competition.date, &competition.end_date)),
            Cell::new(&competition.location),
            status,
            placing_cell(competition),
        ]);
    }
    println!("{table}");
}

pub fn print_competition_summary(summary: &CompetitionSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Upcoming"),
        header_cell("Ongoing"),
        header_cell("Completed"),
        header_cell("Podiums"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(summary.upcoming, Color::Blue),
        count_cell(summary.ongoing, Color::Yellow),
        count_cell(summary.completed, Color::Green),
        count_cell(summary.wins, Color::Magenta),
    ]);
    println!("{table}");
}

pub fn print_orders(orders: &[Order]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Component"),
        header_cell("Quantity"),
        header_cell("Vendor"),
        header_cell("Ordered"),
        header_cell("Expected"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for order in orders {
        let component = if order.component_name.is_empty() {
            dim_cell(&order.component_id)
        } else {
            Cell::new(format!("{} ({})", order.component_name, order.component_id))
        };
        table.add_row(vec![
            dim_cell(&order.id),
            component,
            Cell::new(order.quantity),
            Cell::new(&order.vendor),
            Cell::new(day(&order.order_date)),
            Cell::new(day(&order.expected_delivery)),
            Cell::new(order.status_label()),
        ]);
    }
    println!("{table}");
}

fn placing_cell(competition: &Competition) -> Cell {
    if !competition.position.is_empty() {
        let cell = Cell::new(&competition.position);
        if competition.is_podium() {
            cell.fg(Color::Magenta).add_attribute(Attribute::Bold)
        } else {
            cell
        }
    } else if !competition.result.is_empty() {
        Cell::new(truncate(&competition.result, RESULT_CHARS))
    } else {
        dim_cell("-")
    }
}

fn competition_color(status: CompetitionStatus) -> Color {
    match status {
        CompetitionStatus::Upcoming => Color::Blue,
        CompetitionStatus::Ongoing => Color::Yellow,
        CompetitionStatus::Completed => Color::Green,
        CompetitionStatus::Cancelled => Color::Red,
    }
}

/// Date part of a stored timestamp such as `2026-05-01T00:00:00.000Z`.
fn day(text: &str) -> &str {
    let text = text.trim();
    match text.split_once('T') {
        Some((date, _)) => date,
        None => text,
    }
}

fn date_range(start: &str, end: &str) -> String {
    let (start, end) = (day(start), day(end));
    if end.is_empty() || end == start {
        start.to_string()
    } else {
        format!("{start} to {end}")
    }
}

/// First `max` characters of `text`, with `...` appended when cut.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

fn stock_color(level: StockLevel) -> Color {
    match level {
        StockLevel::Out => Color::Red,
        StockLevel::Low => Color::Yellow,
        StockLevel::InStock => Color::Green,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_are_untouched() {
        assert_eq!(truncate("Blue", DESCRIPTION_PREVIEW_CHARS), "Blue");
        assert_eq!(truncate("", DESCRIPTION_PREVIEW_CHARS), "");
    }

    #[test]
    fn long_descriptions_are_cut_at_thirty_chars() {
        let text = "a".repeat(31);
        assert_eq!(
            truncate(&text, DESCRIPTION_PREVIEW_CHARS),
            format!("{}...", "a".repeat(30))
        );
        assert_eq!(truncate(&"b".repeat(30), DESCRIPTION_PREVIEW_CHARS), "b".repeat(30));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(40);
        assert_eq!(
            truncate(&text, DESCRIPTION_PREVIEW_CHARS),
            format!("{}...", "é".repeat(30))
        );
    }

    #[test]
    fn timestamps_show_their_day() {
        assert_eq!(day("2026-05-01T07:00:00.000Z"), "2026-05-01");
        assert_eq!(day(" 2026-05-01 "), "2026-05-01");
        assert_eq!(day(""), "");
    }

    #[test]
    fn single_day_events_show_one_date() {
        assert_eq!(date_range("2026-05-01", ""), "2026-05-01");
        assert_eq!(date_range("2026-05-01", "2026-05-01T00:00:00Z"), "2026-05-01");
        assert_eq!(date_range("2026-05-01", "2026-05-03"), "2026-05-01 to 2026-05-03");
    }
}
