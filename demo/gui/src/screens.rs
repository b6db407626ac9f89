//! Screen rendering functions for the TUI.

use crate::app::{Dashboard, Screen};
use coverage_core::format::{format_currency, format_currency_cents, format_percent};
use coverage_core::prelude::*;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};

/// Draw the whole frame: header, current screen, footer
pub fn draw(frame: &mut Frame, dashboard: &Dashboard) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Stat cards
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], dashboard);
    draw_stat_cards(frame, chunks[1], dashboard);

    match dashboard.screen {
        Screen::Coverage => draw_coverage(frame, chunks[2], dashboard),
        Screen::Activity => draw_activity(frame, chunks[2], dashboard),
    }

    draw_footer(frame, chunks[3], dashboard.screen);
}

fn draw_header(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let title = format!(
        " Overdraft Protection · {} · {} - {} ",
        dashboard.account.institution,
        dashboard.card,
        dashboard.screen.title()
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn stat_card<'a>(label: &'a str, value: String, hint: String) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().title(format!(" {} ", label)).borders(Borders::ALL))
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let account = &dashboard.account;
    let summary = dashboard.summary();

    let cards = [
        stat_card(
            "Credit Line",
            format_currency(account.credit_line),
            format!("Available: {}", format_currency(account.available_credit)),
        ),
        stat_card(
            "Current Balance",
            format_currency(account.current_balance),
            format!("Autopay on day {}", account.autopay_day),
        ),
        stat_card(
            "Protection Limit",
            format_currency(dashboard.state.overdraft_limit),
            format!("Reviewed {}", account.last_review.format("%b %-d, %Y")),
        ),
        stat_card(
            "Scenario Coverage",
            format_percent(summary.ratio_percent),
            format!(
                "{} ready to deploy",
                format_currency_cents(summary.potential_coverage)
            ),
        ),
    ];

    for (card, chunk) in cards.into_iter().zip(chunks.iter()) {
        frame.render_widget(card, *chunk);
    }
}

fn on_off(active: bool, on: &'static str, off: &'static str) -> Span<'static> {
    if active {
        Span::styled(on, Style::default().fg(Color::Green))
    } else {
        Span::styled(off, Style::default().fg(Color::DarkGray))
    }
}

/// Draw coverage controls, channels and the scenario planner
pub fn draw_coverage(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(dashboard.state.channels.len() as u16 + 3),
            Constraint::Min(0),
        ])
        .split(area);

    let state = &dashboard.state;

    let controls = vec![
        Line::from(vec![
            Span::raw("Coverage:            "),
            on_off(state.coverage_enabled, "Enabled", "Disabled"),
        ]),
        Line::from(vec![
            Span::raw("Automatic transfers: "),
            on_off(state.auto_transfer_enabled, "Enabled", "Disabled"),
        ]),
        Line::from(format!(
            "Overdraft limit:     {} nightly cap",
            format_currency(state.overdraft_limit)
        )),
        Line::from(format!(
            "Preferred buffer:    trigger when balance dips under {}",
            format_currency(state.preferred_buffer)
        )),
    ];
    let controls = Paragraph::new(controls)
        .block(Block::default().title(" Coverage Controls ").borders(Borders::ALL));
    frame.render_widget(controls, chunks[0]);

    draw_channels(frame, chunks[1], dashboard);
    draw_scenario(frame, chunks[2], dashboard);
}

fn draw_channels(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let header_cells = ["", "State", "Channel", "Fee", "Max"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = dashboard.state.channels.iter().enumerate().map(|(idx, channel)| {
        let style = if idx == dashboard.selected_channel {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let state_style = match channel.state() {
            ChannelState::Active => Style::default().fg(Color::Green),
            ChannelState::Off => Style::default().fg(Color::DarkGray),
        };

        Row::new(vec![
            Cell::from(if idx == dashboard.selected_channel { ">" } else { " " }),
            Cell::from(channel.state().label()).style(state_style),
            Cell::from(channel.label.clone()),
            Cell::from(format!("Fee {}", format_currency_cents(channel.transfer_fee))),
            Cell::from(format!("Max {}", format_currency(channel.max_sweep))),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Transfer Priority ").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn draw_scenario(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let summary = dashboard.summary();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let status_color = match summary.status {
        CoverageStatus::FullyCovered => Color::Green,
        CoverageStatus::CoverageGap => Color::Red,
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Projected overdraft: "),
            Span::styled(
                format_currency_cents(summary.scenario_amount),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(summary.status.label(), Style::default().fg(status_color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Ready coverage:      "),
            Span::styled(
                format_currency_cents(summary.potential_coverage),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("Uncovered balance:   "),
            Span::styled(
                format_currency_cents(summary.uncovered),
                Style::default().fg(status_color),
            ),
        ]),
    ];
    let scenario = Paragraph::new(lines)
        .block(Block::default().title(" Scenario Planner ").borders(Borders::ALL));
    frame.render_widget(scenario, chunks[0]);

    let ratio = Gauge::default()
        .block(Block::default().title(" Coverage Ratio ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::LightBlue))
        .label(format_percent(summary.ratio_percent))
        .ratio((summary.ratio_percent / 100.0).clamp(0.0, 1.0));
    frame.render_widget(ratio, chunks[1]);
}

/// Draw alerts, recent activity and the checklist
pub fn draw_activity(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(chunks[0]);

    let alerts = &dashboard.state.alerts;
    let mut alert_lines: Vec<Line> = AlertChannel::ALL
        .iter()
        .map(|channel| {
            Line::from(vec![
                Span::raw(if alerts.is_enabled(*channel) { "[x] " } else { "[ ] " }),
                Span::raw(channel.label()),
            ])
        })
        .collect();
    alert_lines.push(Line::from(""));
    alert_lines.push(Line::from(Span::styled(
        format!(
            "Smart nudges warn a day early when activity exceeds {}.",
            format_currency(dashboard.state.preferred_buffer)
        ),
        Style::default().fg(Color::LightBlue),
    )));
    let alerts_widget = Paragraph::new(alert_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Alerts & notifications ").borders(Borders::ALL));
    frame.render_widget(alerts_widget, left[0]);

    let checklist: Vec<Line> = dashboard
        .state
        .checklist()
        .into_iter()
        .map(|(item, done)| {
            let mark = if done {
                Span::styled("✓ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            };
            Line::from(vec![mark, Span::raw(item.label())])
        })
        .collect();
    let checklist = Paragraph::new(checklist)
        .block(Block::default().title(" Coverage checklist ").borders(Borders::ALL));
    frame.render_widget(checklist, left[1]);

    let mut activity_lines = Vec::new();
    for record in &dashboard.activities {
        activity_lines.push(Line::from(vec![
            Span::styled(
                record.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                record.status.label().to_uppercase(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        activity_lines.push(Line::from(Span::styled(
            record.display_timestamp(),
            Style::default().fg(Color::DarkGray),
        )));
        if record.is_transfer() {
            activity_lines.push(Line::from(format!(
                "Transfer amount · {}",
                format_currency_cents(record.amount)
            )));
        }
        activity_lines.push(Line::from(Span::styled(
            format!("Reference {}", record.reference),
            Style::default().fg(Color::DarkGray),
        )));
        activity_lines.push(Line::from(""));
    }
    let activity = Paragraph::new(activity_lines)
        .block(Block::default().title(" Recent activity ").borders(Borders::ALL));
    frame.render_widget(activity, chunks[1]);
}

fn draw_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let footer_text = match screen {
        Screen::Coverage => {
            " [1]Coverage [2]Activity | [c]Coverage [a]Auto [ [ ] ]Limit [b/B]Buffer [-/+]Scenario | [Up/Down][Space]Channel | [q]Quit "
        }
        Screen::Activity => {
            " [1]Coverage [2]Activity | [p]Push [s]SMS [e]Email | [q]Quit "
        }
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
