// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Title, footer, help, and layout helpers used by TUI rendering.
fn view_title(label: &str, tail: String) -> String {
    let mut title = format!("─ {label}");
    let tail = tail.trim();
    if !tail.is_empty() {
        title.push_str(" · ");
        title.push_str(tail);
    }
    title.push(' ');
    title
}

fn footer_line<S: KeyValueStore>(app: &App<S>) -> Line<'static> {
    if let Some(toast) = &app.toast {
        return Line::from(vec![
            Span::styled("Toast: ".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)),
            Span::raw(toast.message.clone()),
        ]);
    }

    let mut spans = Vec::<Span<'static>>::new();
    if app.edit.is_some() {
        push_footer_entry(&mut spans, "COMMIT", "Enter");
        push_footer_entry(&mut spans, "CANCEL", "Esc");
        return Line::from(spans);
    }

    let target = match app.focused_set() {
        Some(idx) => format!("set {}", idx + 1),
        None => "all sets".to_owned(),
    };
    push_footer_entry(&mut spans, "PACKAGE", "Tab");
    push_footer_entry(&mut spans, "DONE", "Space");
    push_footer_entry(&mut spans, "EDIT", "Enter");
    push_footer_entry(&mut spans, "ADJUST", &format!("1-6 ({target})"));
    push_footer_entry(&mut spans, "HELP", "?");
    push_footer_entry(&mut spans, "QUIT", "q");
    Line::from(spans)
}

fn help_key_style() -> Style {
    Style::default()
        .fg(FOOTER_KEY_COLOR)
        .add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn delta_help_label(idx: usize) -> String {
    let delta = WEIGHT_DELTAS[idx];
    let sign = if delta > 0.0 { "+" } else { "-" };
    format!("{sign}{}", format_weight(delta.abs()))
}

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = "Tab/Shift-Tab, ]/[".len();

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("?", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("q", "Quit", key_col_width, key_style));
    lines.push(help_kv("Tab/Shift-Tab, ]/[", "Next/previous package", key_col_width, key_style));
    lines.push(help_kv("s", "Save now", key_col_width, key_style));
    lines.push(help_kv("y", "Copy history as JSON", key_col_width, key_style));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("--- Exercises ---", header_style)));
    lines.push(help_kv("j/k, ↓/↑", "Select exercise", key_col_width, key_style));
    lines.push(help_kv("Space/x", "Toggle done", key_col_width, key_style));
    lines.push(help_kv("h/l, ←/→", "Focus a single set", key_col_width, key_style));
    lines.push(help_kv("Esc", "Focus all sets", key_col_width, key_style));
    lines.push(help_kv("Enter/e", "Type a weight for the set", key_col_width, key_style));
    let palette = (0..WEIGHT_DELTAS.len())
        .map(|idx| format!("{}={}", idx + 1, delta_help_label(idx)))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(help_kv("1-6", &palette, key_col_width, key_style));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Every change is saved immediately. Weights never go below 0.",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title_style(
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            " | ".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default()
            .fg(FOOTER_KEY_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
