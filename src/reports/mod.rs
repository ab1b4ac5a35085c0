use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use courtforge::optimizer::runner::{Generated, SweepEntry};
use courtforge::optimizer::StopReason;
use courtforge::roster::Roster;
use courtforge::schedule::Schedule;

pub fn print_schedule_grid(title: &str, schedule: &Schedule) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let courts = schedule.weeks.first().map(Vec::len).unwrap_or(0);
    let mut header = vec![Cell::new("Week").add_attribute(Attribute::Bold)];
    header.extend((1..=courts).map(|c| Cell::new(format!("Court {}", c))));
    table.add_row(header);

    for (w, week) in schedule.weeks.iter().enumerate() {
        let mut row = vec![Cell::new(w + 1).set_alignment(CellAlignment::Right)];
        row.extend(week.iter().map(|quad| {
            let text = quad
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            Cell::new(text).set_alignment(CellAlignment::Center)
        }));
        table.add_row(row);
    }
    println!("{}", table);
}

fn stop_cell(stop: StopReason) -> Cell {
    let color = match stop {
        StopReason::ThresholdReached => Color::Green,
        StopReason::Stalled | StopReason::IterationCap => Color::Yellow,
        StopReason::Cancelled => Color::Red,
    };
    Cell::new(stop).fg(color)
}

pub fn generation_table(g: &Generated) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("N").add_attribute(Attribute::Bold),
        Cell::new("K"),
        Cell::new("W"),
        Cell::new("Greedy Max"),
        Cell::new("Greedy #"),
        Cell::new("Final Max").fg(Color::Cyan),
        Cell::new("Final #").fg(Color::Cyan),
        Cell::new("Swaps"),
        Cell::new("Iters"),
        Cell::new("Stop"),
    ]);
    table.add_row(vec![
        Cell::new(g.n).add_attribute(Attribute::Bold),
        Cell::new(g.k),
        Cell::new(g.w),
        Cell::new(g.initial.max_count),
        Cell::new(g.initial.num_at_max),
        Cell::new(g.evaluation.max_count).fg(Color::Cyan),
        Cell::new(g.evaluation.num_at_max).fg(Color::Cyan),
        Cell::new(g.accepted),
        Cell::new(g.iterations),
        stop_cell(g.stop),
    ]);

    for i in 0..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn print_generation_report(g: &Generated) {
    println!("\n{}", generation_table(g));
}

pub fn print_sweep_report(entries: &[SweepEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Template").add_attribute(Attribute::Bold),
        Cell::new("Max").fg(Color::Cyan),
        Cell::new("# at Max"),
        Cell::new("Stop"),
    ]);

    for e in entries {
        table.add_row(vec![
            Cell::new(format!("{}-{}-{}", e.n, e.k, e.w)).add_attribute(Attribute::Bold),
            Cell::new(e.evaluation.max_count).fg(Color::Cyan),
            Cell::new(e.evaluation.num_at_max),
            stop_cell(e.stop),
        ]);
    }

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);

    let solved = entries
        .iter()
        .filter(|e| e.stop == StopReason::ThresholdReached)
        .count();
    println!("{} of {} templates reached the threshold.", solved, entries.len());
}

pub fn print_named_schedule(roster: &Roster, named: &[Vec<[&str; 4]>]) {
    for (w, week) in named.iter().enumerate() {
        println!("\nWeek {}", w + 1);
        for (c, court) in week.iter().enumerate() {
            println!("  Court {}: {}", c + 1, court.join(" vs "));
        }
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Number"),
    ]);
    for (name, num) in roster.entries() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(num).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\nPlayer Number Mapping\n{}", table);
}
