use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Field};
use crate::chart::ChartData;
use crate::format::{format_currency, format_percent};

const SLICE_COLORS: [Color; 2] = [Color::Green, Color::Red];

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Loan EMI Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_input(
        f,
        chunks[1],
        "Amount",
        format!("${}", app.inputs.amount),
        app.focus == Field::Amount,
    );
    render_input(
        f,
        chunks[2],
        "Interest",
        format!("{}%", app.inputs.interest),
        app.focus == Field::Interest,
    );
    render_input(
        f,
        chunks[3],
        "Years to repay",
        format!("{} years", app.inputs.years),
        app.focus == Field::Years,
    );

    if !app.error.is_empty() {
        let error = Paragraph::new(app.error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(error, chunks[4]);
    }

    if app.results.is_result {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
            .split(chunks[5]);
        render_results(f, panels[0], app);
        if let Some(chart) = &app.chart {
            render_proportions(f, panels[1], chart);
        }
    }

    let help = Paragraph::new(format!(
        "Tab/↓: next field | Enter: calculate | t: {} | c: clear | e: export | q: quit",
        app.basis.toggle_label()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[6]);
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: String, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let input = Paragraph::new(value)
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    f.render_widget(input, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(vec![
            Span::styled("Loan amount: ", bold),
            Span::raw(format!("${}", app.inputs.amount)),
        ]),
        Line::from(vec![
            Span::styled("Interest: ", bold),
            Span::raw(format!("{}%", app.inputs.interest)),
        ]),
        Line::from(vec![
            Span::styled("Years to repay: ", bold),
            Span::raw(app.inputs.years.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Monthly Payment: ", bold),
            Span::styled(
                format!("${}", app.results.monthly_payment),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total Payment: ", bold),
            Span::styled(
                format!("${}", app.results.total_payment),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total Interest: ", bold),
            Span::styled(
                format!("${}", app.results.total_interest),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .alignment(Alignment::Left);
    f.render_widget(panel, area);
}

/// Render a two-slice proportion chart: a stacked bar plus a legend naming
/// each slice with its amount and share. Anything that can draw this shape
/// from `ChartData` could stand in here.
fn render_proportions(f: &mut Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Payment Breakup");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 4 {
        return;
    }

    let total = data.total();
    if total <= 0.0 {
        let msg = Paragraph::new("Nothing to chart").style(Style::default().fg(Color::DarkGray));
        f.render_widget(msg, inner);
        return;
    }

    let width = inner.width as usize;
    let first = ((data.share(0) * width as f64).round() as usize).min(width);

    let bar = Line::from(vec![
        Span::styled("█".repeat(first), Style::default().fg(SLICE_COLORS[0])),
        Span::styled(
            "█".repeat(width - first),
            Style::default().fg(SLICE_COLORS[1]),
        ),
    ]);

    let mut lines = vec![bar.clone(), bar, Line::from("")];
    for idx in 0..2 {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(SLICE_COLORS[idx])),
            Span::styled(
                format!("{:<10}", data.labels[idx]),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:>14}", format_currency(data.values[idx])),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{:>8}", format_percent(data.share(idx))),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
