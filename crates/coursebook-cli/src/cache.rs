use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;

use coursebook_engine::{Lesson, ParsedDoc};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    course: String,
    lesson: u32,
    content_hash: u64,
}

/// Parsed lessons keyed by course, lesson id and a hash of the body, so an
/// edited body is reparsed while revisits are free.
#[derive(Debug, Default)]
pub struct LessonCache {
    docs: HashMap<CacheKey, Rc<ParsedDoc>>,
    misses: usize,
}

impl LessonCache {
    pub fn get_or_parse(&mut self, course: &str, lesson: &Lesson) -> Rc<ParsedDoc> {
        let key = CacheKey {
            course: course.to_string(),
            lesson: lesson.id,
            content_hash: content_hash(lesson.body()),
        };
        if let Some(doc) = self.docs.get(&key) {
            return Rc::clone(doc);
        }
        self.misses += 1;
        let doc = Rc::new(lesson.document());
        self.docs.insert(key, Rc::clone(&doc));
        doc
    }

    /// Number of parses performed.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

fn content_hash(body: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    hasher.finish()
}
