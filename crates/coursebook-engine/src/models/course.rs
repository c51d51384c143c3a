use super::lesson::Lesson;

/// A course: display metadata and its ordered lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Accent color as a `#rrggbb` string.
    pub color: String,
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Lesson at a zero-based position.
    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn lesson_by_id(&self, id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Zero-based position of the lesson with `id`.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}
