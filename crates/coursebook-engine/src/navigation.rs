//! Position within a course's ordered lesson list.
//!
//! Moving forward from the last lesson wraps back to the first ("restart");
//! moving back from the first lesson is not offered. Every move resets the
//! scroll offset so the new lesson is shown from the top.

use crate::models::Course;

/// What the forward control does from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardAction {
    Next,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNavigator {
    count: usize,
    current: usize,
    scroll_offset: u16,
}

impl LessonNavigator {
    /// A navigator over `count` lessons, positioned on the first.
    /// `None` when there are no lessons to show.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self {
            count,
            current: 0,
            scroll_offset: 0,
        })
    }

    pub fn for_course(course: &Course) -> Option<Self> {
        Self::new(course.lesson_count())
    }

    /// Zero-based index of the current lesson.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn lesson_count(&self) -> usize {
        self.count
    }

    /// One-based position and total, e.g. `(3, 10)` for "3/10".
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.count)
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.current.checked_sub(1)
    }

    pub fn forward_action(&self) -> ForwardAction {
        if self.current + 1 < self.count {
            ForwardAction::Next
        } else {
            ForwardAction::Restart
        }
    }

    /// Index [`advance`](Self::advance) would move to.
    pub fn forward_index(&self) -> usize {
        match self.forward_action() {
            ForwardAction::Next => self.current + 1,
            ForwardAction::Restart => 0,
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.select(index);
        true
    }

    /// Step back one lesson. Returns `false` on the first lesson.
    pub fn previous(&mut self) -> bool {
        match self.previous_index() {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    /// Step forward, restarting from the first lesson after the last.
    pub fn advance(&mut self) -> ForwardAction {
        let action = self.forward_action();
        self.select(self.forward_index());
        action
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Keep the scroll offset within `max`, for when the rendered lesson is
    /// shorter than the requested offset.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    fn select(&mut self, index: usize) {
        self.current = index;
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn no_navigator_without_lessons() {
        assert!(LessonNavigator::new(0).is_none());
    }

    #[test]
    fn starts_on_first_lesson() {
        let nav = LessonNavigator::new(3).unwrap();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.progress(), (1, 3));
        assert_eq!(nav.previous_index(), None);
        assert_eq!(nav.forward_action(), ForwardAction::Next);
    }

    #[test]
    fn previous_is_unavailable_on_first() {
        let mut nav = LessonNavigator::new(3).unwrap();
        assert!(!nav.previous());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn advance_restarts_after_last() {
        let mut nav = LessonNavigator::new(2).unwrap();
        assert_eq!(nav.advance(), ForwardAction::Next);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.forward_action(), ForwardAction::Restart);
        assert_eq!(nav.forward_index(), 0);
        assert_eq!(nav.advance(), ForwardAction::Restart);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn single_lesson_course_restarts_in_place() {
        let mut nav = LessonNavigator::new(1).unwrap();
        assert_eq!(nav.forward_action(), ForwardAction::Restart);
        assert_eq!(nav.advance(), ForwardAction::Restart);
        assert_eq!(nav.current(), 0);
    }

    #[rstest]
    #[case(0, true)]
    #[case(4, true)]
    #[case(5, false)]
    #[case(usize::MAX, false)]
    fn go_to_bounds(#[case] index: usize, #[case] accepted: bool) {
        let mut nav = LessonNavigator::new(5).unwrap();
        nav.go_to(2);
        assert_eq!(nav.go_to(index), accepted);
        assert_eq!(nav.current(), if accepted { index } else { 2 });
    }

    #[test]
    fn every_move_resets_scroll() {
        let mut nav = LessonNavigator::new(3).unwrap();
        nav.scroll_down(10);
        nav.advance();
        assert_eq!(nav.scroll_offset(), 0);

        nav.scroll_down(4);
        nav.previous();
        assert_eq!(nav.scroll_offset(), 0);

        nav.scroll_down(4);
        nav.go_to(0);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn rejected_moves_keep_scroll() {
        let mut nav = LessonNavigator::new(3).unwrap();
        nav.scroll_down(7);
        nav.previous();
        nav.go_to(9);
        assert_eq!(nav.scroll_offset(), 7);
    }

    #[test]
    fn scroll_saturates() {
        let mut nav = LessonNavigator::new(1).unwrap();
        nav.scroll_up(3);
        assert_eq!(nav.scroll_offset(), 0);
        nav.scroll_down(u16::MAX);
        nav.scroll_down(1);
        assert_eq!(nav.scroll_offset(), u16::MAX);
        nav.clamp_scroll(12);
        assert_eq!(nav.scroll_offset(), 12);
    }
}
