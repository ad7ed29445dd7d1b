use crate::app::{App, Stage};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use riskroll_core::{EffectDef, MatchRun, Phase};

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.stage {
        Stage::PickDie { player, .. } => draw_die_picker(frame, app, *player),
        Stage::Table { run } => draw_table(frame, app, run),
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_die_picker(frame: &mut Frame, app: &App, player: usize) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = format!(
        "Risk Rollers | Player {} picks a die | seed {}",
        player + 1,
        app.seed
    );
    frame.render_widget(
        Paragraph::new(Line::from(title.bold())).block(Block::default().borders(Borders::ALL)),
        root[0],
    );

    let dice = &app.pack.catalog.dice;
    let items: Vec<ListItem<'_>> = dice
        .iter()
        .enumerate()
        .map(|(idx, die)| {
            ListItem::new(format!(
                "{}. {:<10} {:?}  cap {}  {}",
                idx + 1,
                die.name,
                die.faces,
                die.max_rolls,
                die.description
            ))
        })
        .collect();
    let list = List::new(items)
        .block(pane_block("Dice", true))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !dice.is_empty() {
        state.select(Some(app.cursor.min(dice.len() - 1)));
    }
    frame.render_stateful_widget(list, root[1], &mut state);

    frame.render_widget(
        Paragraph::new(app.status_line.clone())
            .block(Block::default().borders(Borders::ALL).title("Status")),
        root[2],
    );
}

fn draw_table(frame: &mut Frame, app: &App, run: &MatchRun) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app, run);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);
    draw_player(frame, middle[0], run, 0);
    draw_player(frame, middle[1], run, 1);

    draw_events(frame, root[2], app);

    match &run.state.phase {
        Phase::EffectAssign {
            chooser,
            choices,
            picked,
        } => draw_assign_popup(frame, app, run, *chooser, choices, picked.as_ref()),
        Phase::Over { winner } => draw_win_popup(frame, run, *winner),
        Phase::Turn => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, run: &MatchRun) {
    let state = &run.state;
    let current = state.current_player();
    let face_line = match state.last_face {
        Some(face) => match face.effect {
            Some(effect) => format!("last face: {} [{}]", face.value, effect.label()),
            None => format!("last face: {}", face.value),
        },
        None => "last face: -".to_string(),
    };
    let lines = vec![
        Line::from(
            format!(
                "Risk Rollers | first to {} | seed {}",
                run.rules.target_score, app.seed
            )
            .bold(),
        ),
        Line::from(format!(
            "P1 {} | P2 {} | pot {} | P{} to act",
            state.players[0].score,
            state.players[1].score,
            state.turn_score,
            state.current + 1
        )),
        Line::from(format!(
            "rolls {}/{} on {}",
            current.rolls_used, current.die.max_rolls, current.die.name
        )),
        Line::from(face_line),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Table");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_player(frame: &mut Frame, area: Rect, run: &MatchRun, player: usize) {
    let state = &run.state.players[player];
    let mut lines = vec![
        Line::from(format!("banked {}", state.score)),
        Line::from(format!("milestone level {}", state.milestone_level)),
    ];
    for (idx, face) in state.die.faces.iter().enumerate() {
        let line = match face.effect {
            Some(effect) => format!("face {}: {} [{}]", idx + 1, face.value, effect.label()),
            None => format!("face {}: {}", idx + 1, face.value),
        };
        lines.push(Line::from(line));
    }
    let title = format!("P{} - {}", player + 1, state.die.name);
    let block = pane_block(title.as_str(), run.state.current == player);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_assign_popup(
    frame: &mut Frame,
    app: &App,
    run: &MatchRun,
    chooser: usize,
    choices: &[EffectDef; 2],
    picked: Option<&EffectDef>,
) {
    let area = centered_rect(64, 50, frame.area());
    frame.render_widget(Clear, area);
    let (title, items): (String, Vec<ListItem<'_>>) = match picked {
        None => (
            format!("Player {} picks an effect", chooser + 1),
            choices
                .iter()
                .enumerate()
                .map(|(idx, effect)| {
                    ListItem::new(format!(
                        "{}. {} ({}) - {}",
                        idx + 1,
                        effect.name,
                        effect.kind.label(),
                        effect.description
                    ))
                })
                .collect(),
        ),
        Some(effect) => (
            format!("Player {} picks a face for {}", chooser + 1, effect.name),
            run.state.players[chooser]
                .die
                .faces
                .iter()
                .enumerate()
                .map(|(idx, face)| {
                    let label = match face.effect {
                        Some(existing) => {
                            format!("{}. value {} [now {}]", idx + 1, face.value, existing.label())
                        }
                        None => format!("{}. value {}", idx + 1, face.value),
                    };
                    ListItem::new(label)
                })
                .collect(),
        ),
    };
    let count = items.len();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if count > 0 {
        state.select(Some(app.cursor.min(count - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_win_popup(frame: &mut Frame, run: &MatchRun, winner: usize) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(format!("Player {} wins!", winner + 1).bold()),
        Line::from(format!("final score {}", run.state.players[winner].score)),
        Line::from("press q to quit"),
    ];
    let block = Block::default()
        .title("Match over")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help | arrows/jk move | enter confirm"),
        Line::from("r roll | h hold | digits quick pick in any list"),
        Line::from("bust on a 1 loses the pot; hold banks it"),
        Line::from("every 20 banked points arms one opponent die face"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
