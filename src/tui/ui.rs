use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Clear};

use crate::core::program::Program;
use crate::core::state::Store;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    FiltersPopup, Header, NewsletterPopup, ProgramCard, ProgramList, Spinner, TitleBar,
};

/// Screen regions for one frame. `detail` is `None` on narrow terminals,
/// where the card is drawn over `main` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub title: Rect,
    pub header: Rect,
    pub main: Rect,
    pub search: Rect,
    pub list: Rect,
    pub detail: Option<Rect>,
}

pub fn is_wide(area: Rect, wide_layout_columns: u16) -> bool {
    area.width >= wide_layout_columns
}

pub fn compute_areas(area: Rect, wide_layout_columns: u16) -> Areas {
    use Constraint::{Length, Min, Percentage};

    let [title, header, main] = Layout::vertical([Length(1), Length(2), Min(0)]).areas(area);

    let (left, detail) = if is_wide(area, wide_layout_columns) {
        let [left, right] = Layout::horizontal([Percentage(35), Percentage(65)]).areas(main);
        (left, Some(right))
    } else {
        (main, None)
    };
    let [search, list] = Layout::vertical([Length(3), Min(0)]).areas(left);

    Areas {
        title,
        header,
        main,
        search,
        list,
        detail,
    }
}

pub fn draw_ui(frame: &mut Frame, store: &Store, tui: &mut TuiState, spinner_frame: usize) {
    let areas = compute_areas(frame.area(), tui.wide_layout_columns);
    let programs: Vec<Arc<Program>> = tui.displayed_programs(store);

    TitleBar::new(
        store.status_message.clone(),
        tui.sort_order.label(),
        store.last_error.is_some(),
    )
    .render(frame, areas.title);
    Header.render(frame, areas.header);

    tui.search_box.dimmed = tui.has_focus_overlay();
    tui.search_box.render(frame, areas.search);

    if store.is_loading {
        Spinner::new(spinner_frame).render(frame, areas.list);
    } else {
        ProgramList::new(&mut tui.program_list, &programs, store.is_filtered())
            .render(frame, areas.list);
    }

    let selected = programs
        .get(tui.program_list.selected_index)
        .map(|p| p.as_ref());

    match areas.detail {
        Some(detail_area) => {
            draw_detail(frame, detail_area, store, tui, selected, spinner_frame, false);
        }
        None if tui.detail_overlay => {
            frame.render_widget(Clear, areas.main);
            draw_detail(frame, areas.main, store, tui, selected, spinner_frame, true);
        }
        None => {}
    }

    if let Some(filters) = tui.filters.as_mut() {
        FiltersPopup::new(filters).render(frame, frame.area());
    }
    if let Some(newsletter) = tui.newsletter.as_ref() {
        NewsletterPopup::new(newsletter).render(frame, frame.area());
    }
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    store: &Store,
    tui: &mut TuiState,
    program: Option<&Program>,
    spinner_frame: usize,
    closable: bool,
) {
    if store.is_loading {
        let block = Block::bordered();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        Spinner::new(spinner_frame).render(frame, inner);
    } else {
        ProgramCard::new(program, &mut tui.detail_scroll, closable).render(frame, area);
    }
}
