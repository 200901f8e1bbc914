use crate::card_face::hand_lines;
use crate::terminal::{Screen, Tableau};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, screen: &Screen) {
    // Main layout: title, table, status
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(14),   // Table and log
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_title(f, screen, main_chunks[0]);

    // Split main area: left (table) and right (logs if visible)
    let (table_area, log_area) = if screen.log_visible {
        let main_horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(main_chunks[1]);
        (main_horizontal[0], Some(main_horizontal[1]))
    } else {
        (main_chunks[1], None)
    };

    match &screen.tableau {
        Some(tableau) => draw_tableau(f, tableau, &screen.messages, table_area),
        None => {
            let waiting = Paragraph::new("Shuffling...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(waiting, table_area);
        }
    }

    if let Some(log_area) = log_area {
        draw_logs(f, &screen.logs, log_area);
    }

    draw_status(f, screen, main_chunks[2]);
}

fn draw_title(f: &mut Frame, screen: &Screen, area: Rect) {
    let wallet = screen
        .tableau
        .as_ref()
        .map(|t| t.wallet.to_string())
        .unwrap_or_default();
    let wallet_style = match &screen.tableau {
        Some(t) if t.wallet.cents() < 0 => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Green),
    };

    let block = Block::default().borders(Borders::ALL);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(block.inner(area));
    f.render_widget(block, area);

    let title = Paragraph::new("Blackjack")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let wallet = Paragraph::new(Span::styled(wallet, wallet_style.add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Right);
    f.render_widget(title, halves[0]);
    f.render_widget(wallet, halves[1]);
}

fn total_line(total: Option<u8>) -> Line<'static> {
    match total {
        Some(total) if total > blackjack::BLACKJACK => Line::styled(
            total.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(total) => Line::styled(total.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        None => Line::from(""),
    }
}

fn draw_tableau(f: &mut Frame, tableau: &Tableau, messages: &[String], area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    // Dealer: total above the cards
    lines.push(Line::styled("Dealer", Style::default().fg(Color::DarkGray)));
    lines.push(total_line(tableau.dealer_total));
    lines.extend(hand_lines(&tableau.dealer));
    lines.push(Line::from(""));

    let mut stakes = vec![Span::styled(
        format!("Bet {}", tableau.bet),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(insurance) = tableau.insurance {
        stakes.push(Span::raw("   "));
        stakes.push(Span::styled(
            format!("Insurance {insurance}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(stakes));
    lines.push(Line::from(""));

    // Player: total under the cards
    lines.extend(hand_lines(&tableau.player));
    lines.push(total_line(tableau.player_total));
    lines.push(Line::styled("Player", Style::default().fg(Color::DarkGray)));
    lines.push(Line::from(""));

    for message in messages {
        lines.push(Line::styled(
            message.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    let table = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(table, area);
}

fn draw_logs(f: &mut Frame, logs: &[String], area: Rect) {
    let log_frame_height = area.height.saturating_sub(2) as usize; // Subtract borders
    let log_start_idx = logs.len().saturating_sub(log_frame_height);

    let log_lines: Vec<Line> = logs
        .iter()
        .skip(log_start_idx)
        .map(|log| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(log.clone()),
            ])
        })
        .collect();

    let logs_widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .title(" Game Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_widget, area);
}

fn draw_status(f: &mut Frame, screen: &Screen, area: Rect) {
    let status_text = match &screen.input {
        Some(input) => format!("{} > {input}", screen.status),
        None => screen.status.clone(),
    };

    let status_bar = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Esc leave · Tab log "),
        );
    f.render_widget(status_bar, area);
}
