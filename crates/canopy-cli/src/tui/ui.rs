//! Dashboard layout and drawing.
//!
//! Layout: [inputs + summary | chart + site map | links + help]. The
//! chart and map axis bounds come from the engine so every surface
//! agrees on scale.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};

use canopy_model::RESOURCE_LINKS;

use super::app::AppState;

pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Inputs + summary
        Constraint::Min(12),   // Chart + map
        Constraint::Length(6), // Links + help
    ])
    .split(f.area());

    draw_inputs(f, chunks[0], app);

    let middle =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(chunks[1]);
    draw_chart(f, middle[0], app);
    draw_map(f, middle[1], app);

    draw_footer(f, chunks[2]);
}

fn draw_inputs(f: &mut Frame, area: Rect, app: &AppState) {
    let params = app.params();
    let dim = Style::default().add_modifier(Modifier::DIM);

    let inputs_line = Line::from(vec![
        Span::styled("Trees: ", dim),
        Span::raw(params.trees().to_string()),
        Span::styled("    CO2/tree: ", dim),
        Span::raw(format!("{:.2} kg/yr", params.co2_per_tree_kg())),
        Span::styled("    Years: ", dim),
        Span::raw(params.years().to_string()),
    ]);
    let summary_line = Line::styled(
        app.summary.sentence(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    );

    let paragraph = Paragraph::new(vec![inputs_line, summary_line]).block(
        Block::default()
            .title("Afforestation Impact")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn draw_chart(f: &mut Frame, area: Rect, app: &AppState) {
    let data: Vec<(f64, f64)> = app
        .points
        .iter()
        .map(|p| (p.year as f64, p.cumulative_co2_kg))
        .collect();

    let y_bounds = canopy_engine::y_axis_bounds(&app.points);
    let y_labels = canopy_engine::y_tick_labels(y_bounds, 3);
    let years = app.params().years();
    let x_labels = vec![
        "0".to_string(),
        (years / 2).to_string(),
        years.to_string(),
    ];

    let dataset = Dataset::default()
        .name("Cumulative CO2 (kg)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title("CO2 Absorption Over Time")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, years as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Total CO2 (kg)")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn draw_map(f: &mut Frame, area: Rect, app: &AppState) {
    let site = &app.site;

    let canvas = Canvas::default()
        .block(Block::default().title("Planting Site").borders(Borders::ALL))
        .marker(symbols::Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::Gray,
            });
            ctx.print(
                site.longitude,
                site.latitude,
                Line::styled(
                    format!("● {}", site.name),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            );
        });

    f.render_widget(canvas, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut lines: Vec<Line> = RESOURCE_LINKS
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::raw(format!("- {}: ", link.label)),
                Span::styled(link.url, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    lines.push(Line::styled(
        "q quit    t/T trees +/-    r/R rate +/-    y/Y or arrows years +/-",
        dim,
    ));

    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Learn More").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
