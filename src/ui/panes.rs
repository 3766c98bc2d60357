//! Stateless render functions for each visible pane

use crate::catalog::pattern_info;
use crate::playback::PlaybackTrace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the selection stays visible inside `height` rows.
fn clamp_scroll(scroll: &mut usize, selected: usize, total: usize, height: usize) {
    if height == 0 || total == 0 {
        *scroll = 0;
        return;
    }
    if selected < *scroll {
        *scroll = selected;
    }
    if selected >= *scroll + height {
        *scroll = selected + 1 - height;
    }
    *scroll = (*scroll).min(total.saturating_sub(1));
}

/// Render the step timeline with the current step highlighted
pub fn render_timeline_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &PlaybackTrace,
    position: usize,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = Block::default()
        .title(" Timeline ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let height = area.height.saturating_sub(2) as usize;
    clamp_scroll(scroll, position, trace.len(), height);

    let items: Vec<ListItem> = trace
        .steps
        .iter()
        .skip(*scroll)
        .take(height)
        .map(|step| {
            let marker = if step.seq == position { ">" } else { " " };
            let style = if step.seq == position {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_step_bg)
                    .add_modifier(Modifier::BOLD)
            } else if step.seq < position {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} {:>4} ", marker, step.seq),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(step.action.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the current step's fields, highlighting the ones that just changed
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &PlaybackTrace,
    position: usize,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut items: Vec<ListItem> = Vec::new();
    if let Some(step) = trace.steps.get(position) {
        for field in &step.fields {
            let changed = step.changed.contains(&field.name);
            let value_style = if changed {
                Style::default()
                    .fg(DEFAULT_THEME.changed_field)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10} ", field.name),
                    Style::default().fg(DEFAULT_THEME.field_name),
                ),
                Span::styled(field.value.clone(), value_style),
            ])));
        }
    } else {
        items.push(
            ListItem::new("(no step)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    let height = area.height.saturating_sub(2) as usize;
    *scroll = (*scroll).min(items.len().saturating_sub(1));
    let visible: Vec<ListItem> = items.into_iter().skip(*scroll).take(height).collect();

    frame.render_widget(List::new(visible).block(block), area);
}

/// Render the explanation pane (what/why, plain or deep)
pub fn render_explain_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &PlaybackTrace,
    position: usize,
    deep: bool,
    is_focused: bool,
    scroll: &mut usize,
) {
    let title = if deep { " Explanation (deep) " } else { " Explanation " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(step) = trace.steps.get(position) {
        let (what, why) = if deep {
            (&step.deep_what, &step.deep_why)
        } else {
            (&step.what, &step.why)
        };
        lines.push(Line::from(vec![
            Span::styled("What: ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(what.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Why:  ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(why.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the pattern info pane: catalog entry plus the final result
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &PlaybackTrace,
    is_focused: bool,
    scroll: &mut usize,
) {
    let info = pattern_info(trace.pattern);
    let block = Block::default()
        .title(format!(" {} ", info.name))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            info.summary,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(vec![
            Span::styled("Time  ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::raw(info.time_complexity),
            Span::styled("   Space  ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::raw(info.space_complexity),
        ]),
        Line::from(vec![
            Span::styled("Invariant: ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::raw(info.invariant),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Result: ", Style::default().fg(DEFAULT_THEME.result)),
            Span::styled(
                trace.result.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.result)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for pitfall in info.pitfalls {
        lines.push(Line::from(vec![
            Span::styled("! ", Style::default().fg(DEFAULT_THEME.error)),
            Span::styled(*pitfall, Style::default().fg(DEFAULT_THEME.comment)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: &str,
    position: usize,
    total: usize,
    is_playing: bool,
    speed: usize,
) {
    let play_indicator = if is_playing {
        format!("▶ x{}", speed + 1)
    } else {
        "⏸".to_string()
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", play_indicator),
            Style::default().fg(DEFAULT_THEME.success),
        ),
        Span::styled(
            format!("step {}/{} ", position + 1, total.max(1)),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled(
            format!("| {} ", status_message),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            "| ←/→ step  space play  +/- speed  d deep  enter end  bksp start  tab focus  q quit",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
