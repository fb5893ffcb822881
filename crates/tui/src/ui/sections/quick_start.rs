//! Quick-start section: step selector plus synchronized detail panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::app::{App, HoverId};
use crate::ui::components::{render_step_detail, render_step_rows};

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let rows = render_step_rows(frame, list_area, app.steps, &app.step_list, &theme);
    for (index, row) in rows.into_iter().enumerate() {
        app.register_hover_target(row, HoverId::Step(index));
    }

    render_step_detail(frame, detail_area, app.steps, &app.step_list, &theme);
}
