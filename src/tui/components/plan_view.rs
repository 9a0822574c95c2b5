//! # PlanView Component
//!
//! Shows a finished `MealPlanResult`: two tabs (meal plan, shopping list)
//! rendered through `tui::render` inside a scroll view, and a footer with the
//! formatted cost estimate.
//!
//! `PlanView` is transient (built each frame); tab and scroll position live in
//! `PlanViewState`, which the event loop recreates for every new result.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Tabs, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::currency::{Currency, format_cost};
use crate::inference::MealPlanResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::render;

const ACCENT: Color = Color::Green;
const COST_FOOTER_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanTab {
    #[default]
    MealPlan,
    ShoppingList,
}

impl PlanTab {
    pub const ALL: [PlanTab; 2] = [PlanTab::MealPlan, PlanTab::ShoppingList];

    pub fn title(self) -> &'static str {
        match self {
            PlanTab::MealPlan => "Meal Plan",
            PlanTab::ShoppingList => "Shopping List",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PlanTab::MealPlan => PlanTab::ShoppingList,
            PlanTab::ShoppingList => PlanTab::MealPlan,
        }
    }

    fn index(self) -> usize {
        match self {
            PlanTab::MealPlan => 0,
            PlanTab::ShoppingList => 1,
        }
    }

    fn source(self, result: &MealPlanResult) -> &str {
        match self {
            PlanTab::MealPlan => &result.meal_plan,
            PlanTab::ShoppingList => &result.shopping_list,
        }
    }
}

#[derive(Default)]
pub struct PlanViewState {
    pub tab: PlanTab,
    pub scroll_state: ScrollViewState,
    /// Content and viewport heights from the last render, for clamping
    content_height: u16,
    viewport_height: u16,
}

impl PlanViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for PlanViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SwitchTab => {
                self.tab = self.tab.next();
                self.scroll_state.scroll_to_top();
            }
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

pub struct PlanView<'a> {
    pub state: &'a mut PlanViewState,
    pub result: &'a MealPlanResult,
    pub currency: Currency,
}

impl<'a> PlanView<'a> {
    pub fn new(state: &'a mut PlanViewState, result: &'a MealPlanResult, currency: Currency) -> Self {
        Self {
            state,
            result,
            currency,
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = PlanTab::ALL.iter().map(|t| t.title());
        let tabs = Tabs::new(titles)
            .select(self.state.tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        let text = render::render(self.state.tab.source(self.result), ACCENT);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        self.state.content_height = height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn render_cost(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Estimated Weekly Cost ")
            .border_style(Style::default().fg(ACCENT));
        let amount = format_cost(&self.result.cost_estimate, self.currency);
        let line = Line::from(vec![
            Span::styled(
                amount,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.currency.code()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl<'a> Component for PlanView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [tabs_area, content_area, cost_area] =
            Layout::vertical([Length(1), Min(0), Length(COST_FOOTER_ROWS)]).areas(area);

        self.render_tabs(frame, tabs_area);
        self.render_content(frame, content_area);
        self.render_cost(frame, cost_area);
    }
}
