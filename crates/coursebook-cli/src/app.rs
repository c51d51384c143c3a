use anyhow::{Context, Result, bail};
use coursebook_engine::{Catalog, Course, ForwardAction, Lesson, LessonNavigator};
use crossterm::event::KeyCode;
use ratatui::{text::Line, widgets::ListState};

use crate::{
    cache::LessonCache,
    render::{accent_color, lesson_lines},
};

/// Lines moved per PgUp/PgDn.
pub const PAGE: u16 = 10;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    catalog: Catalog,
    course_index: usize,
    navigator: LessonNavigator,
    pub lesson_list_state: ListState,
    cache: LessonCache,
}

impl App {
    /// Opens `course` when given, otherwise the first course in the catalog.
    pub fn new(catalog: Catalog, course: Option<&str>) -> Result<Self> {
        if catalog.is_empty() {
            bail!("The catalog lists no courses");
        }
        let course_index = match course {
            Some(id) => catalog
                .position_of(id)
                .with_context(|| format!("No course with id '{id}'"))?,
            None => 0,
        };
        let navigator = LessonNavigator::for_course(&catalog.courses[course_index])
            .context("Course has no lessons")?;

        let mut app = Self {
            catalog,
            course_index,
            navigator,
            lesson_list_state: ListState::default(),
            cache: LessonCache::default(),
        };
        app.sync_selection();
        Ok(app)
    }

    pub fn course(&self) -> &Course {
        &self.catalog.courses[self.course_index]
    }

    pub fn lesson(&self) -> &Lesson {
        &self.course().lessons[self.navigator.current()]
    }

    pub fn navigator(&self) -> &LessonNavigator {
        &self.navigator
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Down | KeyCode::Char('j') => {
                self.navigator.go_to(self.navigator.current() + 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.navigator.previous();
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if self.navigator.advance() == ForwardAction::Restart {
                    log::debug!("Restarting course {}", self.course().id);
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.navigator.previous();
            }
            KeyCode::Tab => self.next_course(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.navigator.scroll_down(PAGE),
            KeyCode::PageUp => self.navigator.scroll_up(PAGE),
            _ => {}
        }
        self.sync_selection();
        Control::Continue
    }

    fn next_course(&mut self) {
        let next = (self.course_index + 1) % self.catalog.courses.len();
        if let Some(navigator) = LessonNavigator::for_course(&self.catalog.courses[next]) {
            self.course_index = next;
            self.navigator = navigator;
        }
    }

    fn sync_selection(&mut self) {
        self.lesson_list_state.select(Some(self.navigator.current()));
    }

    /// Rendered lines of the current lesson, parsing it on first view.
    pub fn content_lines(&mut self) -> Vec<Line<'static>> {
        let course = &self.catalog.courses[self.course_index];
        let lesson = &course.lessons[self.navigator.current()];
        let doc = self.cache.get_or_parse(&course.id, lesson);
        lesson_lines(lesson, &doc, accent_color(&course.color))
    }

    /// Keep scrolling within the rendered lesson.
    pub fn clamp_scroll(&mut self, content_height: usize, viewport: u16) {
        let max = content_height.saturating_sub(usize::from(viewport));
        self.navigator
            .clamp_scroll(u16::try_from(max).unwrap_or(u16::MAX));
    }

    /// Label for the forward control, e.g. "Next: Indexes".
    pub fn forward_label(&self) -> String {
        match self.navigator.forward_action() {
            ForwardAction::Next => format!(
                "n: Next: {}",
                self.course().lessons[self.navigator.forward_index()].title
            ),
            ForwardAction::Restart => "n: Restart from lesson 1".to_string(),
        }
    }

    pub fn previous_label(&self) -> Option<String> {
        self.navigator
            .previous_index()
            .map(|i| format!("p: Previous: {}", self.course().lessons[i].title))
    }

    pub fn parses(&self) -> usize {
        self.cache.misses()
    }
}
