use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    observation: &[String],
    steps: usize,
    over: bool,
    last_reward: &Option<Vec<f32>>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, steps, over, last_reward, chunks[0]);
    render_board(frame, observation, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    steps: usize,
    over: bool,
    last_reward: &Option<Vec<f32>>,
    area: ratatui::layout::Rect,
) {
    let reward = match last_reward {
        Some(vector) => format!("{vector:?}"),
        None => "none".to_string(),
    };

    let (status, color) = if over {
        (format!("Episode over  |  step {steps}  |  reward {reward}"), Color::Green)
    } else {
        (format!("Running  |  step {steps}  |  reward {reward}"), Color::Cyan)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Corridor World"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, observation: &[String], area: ratatui::layout::Rect) {
    let mut lines = Vec::new();
    lines.push(Line::from(""));

    for row in observation {
        let spans: Vec<Span> = row
            .chars()
            .map(|ch| match ch {
                '#' => Span::styled("#", Style::default().fg(Color::DarkGray)),
                '0' => Span::styled("0", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                '1' => Span::styled("1", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                other => Span::styled(
                    other.to_string(),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←: first agent west  |  →: last agent east  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
