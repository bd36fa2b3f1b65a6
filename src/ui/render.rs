use crate::ui::app::{App, Screen};
use crate::ui::create::render_create;
use crate::ui::detail::render_detail;
use crate::ui::edit::render_edit;
use crate::ui::footer::{hints_for, Footer};
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::list::render_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header);

    frame.render_widget(Clear, body);
    let spinner = app.spinner_frame();
    match app.screen() {
        Screen::Home => render_home(frame, body),
        Screen::List(state) => render_list(frame, state, body, spinner),
        Screen::Detail(state) => render_detail(frame, state, body, spinner),
        Screen::Create(state) => render_create(frame, state, body, spinner),
        Screen::Edit(state) => render_edit(frame, state, body, spinner),
    }

    let hints = hints_for(app.screen());
    frame.render_widget(
        Footer::new().widget(footer, hints, app.last_command_error()),
        footer,
    );
}
